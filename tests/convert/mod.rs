use outcome_rail::convert::{outcome_to_logged_result, outcome_to_result, result_to_outcome};
use outcome_rail::{Failure, Outcome};

#[test]
fn result_round_trips_through_from() {
    let outcome: Outcome<u8> = Err(Failure::not_found(1)).into();
    assert_eq!(outcome.weight(), Some(4));
    assert!(outcome.messages().is_empty());

    let result: Result<u8, Failure> = Outcome::ok(2).into();
    assert_eq!(result, Ok(2));
}

#[test]
fn failure_converts_into_outcome() {
    let outcome: Outcome<String> = Failure::invalid("f", "m").into();
    assert_eq!(outcome.try_failure(), Some(&Failure::invalid("f", "m")));
}

#[test]
fn helper_functions() {
    assert!(result_to_outcome::<u8>(Ok(1)).is_success());
    assert_eq!(outcome_to_result(Outcome::<u8>::fail("x")), Err(Failure::Generic));

    let (result, log) = outcome_to_logged_result(Outcome::<u8>::fail("kept"));
    assert_eq!(result, Err(Failure::Generic));
    assert_eq!(log.as_slice(), ["kept"]);
}
