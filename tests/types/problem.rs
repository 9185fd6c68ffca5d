use std::io;

use outcome_rail::{Failure, Outcome};

#[test]
fn status_codes_follow_kind() {
    assert_eq!(Failure::Generic.status_code(), 400);
    assert_eq!(Failure::warning("w").status_code(), 400);
    assert_eq!(Failure::invalid("f", "m").status_code(), 400);
    assert_eq!(Failure::not_found(1).status_code(), 404);
    assert_eq!(Failure::exception(io::Error::other("x")).status_code(), 500);
}

#[test]
fn problem_carries_detail_and_log() {
    let outcome = Outcome::<u8>::ok_with_message(1, "parsed")
        .bind(|_| Outcome::<u8>::invalid_many([("name", "required"), ("age", "too young")]));

    let problem = outcome.to_problem().expect("failed outcome has a problem");
    assert_eq!(problem.title, "One or more validation errors occurred:");
    assert_eq!(problem.status, 400);
    assert_eq!(problem.detail, "name: required\nage: too young");
    assert_eq!(problem.messages, ["parsed"]);
}

#[test]
fn generic_problem_falls_back_to_log() {
    let problem = Outcome::<()>::fail("queue full").with_message("retry later").to_problem().unwrap();

    assert_eq!(problem.detail, "queue full\nretry later");
}

#[test]
fn failure_projection_has_no_log() {
    let problem = Failure::not_found("k9").to_problem();

    assert_eq!(problem.status, 404);
    assert_eq!(problem.detail, "no entry with id k9");
    assert!(problem.messages.is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn problem_serializes_to_json() {
    let problem = Outcome::<()>::not_found(3).to_problem().unwrap();
    let json = serde_json::to_value(&problem).unwrap();

    assert_eq!(json["status"], 404);
    assert_eq!(json["messages"][0], "Did not find () with Id 3");

    let back: outcome_rail::Problem = serde_json::from_value(json).unwrap();
    assert_eq!(back, problem);
}
