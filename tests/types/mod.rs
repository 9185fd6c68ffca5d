use outcome_rail::{Failure, Outcome};

mod combine;
mod failure;
mod iter;
mod problem;

#[test]
fn bind_to_invalid_keeps_receiver_log() {
    let outcome = Outcome::ok_with_message(1, "okWithValue").bind(|_| Outcome::<i32>::invalid("prop", "bad"));

    assert!(outcome.is_failure());
    assert_eq!(outcome.try_failure(), Some(&Failure::invalid("prop", "bad")));
    assert_eq!(outcome.messages(), ["okWithValue"]);
}

#[test]
fn combine_not_found_with_invalid_yields_invalid() {
    let outcome = Outcome::<u8>::not_found(42).combine(Outcome::<u8>::invalid("f", "m"));

    assert_eq!(outcome.try_failure(), Some(&Failure::invalid("f", "m")));
    assert_eq!(outcome.weight(), Some(8));
    assert_eq!(outcome.messages(), ["Did not find u8 with Id 42"]);
}
