use outcome_rail::{Failure, Outcome};

#[test]
fn collect_all_successes() {
    let outcome: Outcome<Vec<u8>> = (1..=3).map(|n| Outcome::ok_with_message(n, format!("n={n}"))).collect();

    assert_eq!(outcome.try_value(), Some(&vec![1, 2, 3]));
    assert_eq!(outcome.messages(), ["n=1", "n=2", "n=3"]);
}

#[test]
fn collect_joins_every_failure() {
    let outcome: Outcome<Vec<u8>> = vec![
        Outcome::invalid("a", "bad"),
        Outcome::ok(2),
        Outcome::invalid("b", "bad"),
    ]
    .into_iter()
    .collect();

    assert_eq!(outcome.try_failure(), Some(&Failure::invalid_many([("a", "bad"), ("b", "bad")])));
}

#[test]
fn outcome_iterates_over_value() {
    let values: Vec<u8> = Outcome::ok(4).into_iter().chain(Outcome::<u8>::fail("x")).collect();
    assert_eq!(values, [4]);
}
