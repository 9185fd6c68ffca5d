use std::cell::Cell;
use std::num::ParseIntError;

use outcome_rail::traits::{OptionOutcomeExt, ResultOutcomeExt};
use outcome_rail::{Failure, FailureKind};

#[test]
fn into_outcome_wraps_error_as_exception() {
    let outcome = "abc".parse::<u32>().into_outcome();

    let failure = outcome.try_failure().unwrap();
    assert_eq!(failure.kind(), FailureKind::Exception);
    assert!(failure.exception_error().unwrap().downcast_ref::<ParseIntError>().is_some());
    assert_eq!(outcome.messages(), ["invalid digit found in string"]);
}

#[test]
fn into_outcome_on_ok_has_no_log() {
    let outcome = "12".parse::<u32>().into_outcome();

    assert_eq!(outcome.try_value(), Some(&12));
    assert!(outcome.messages().is_empty());
}

#[test]
fn into_outcome_with_is_lazy() {
    let calls = Cell::new(0);
    let ok: Result<u8, &str> = Ok(1);
    let outcome = ok.into_outcome_with(|_| {
        calls.set(calls.get() + 1);
        Failure::Generic
    });

    assert!(outcome.is_success());
    assert_eq!(calls.get(), 0);
}

#[test]
fn option_lifts() {
    assert_eq!(Some(3).ok_or_not_found("k").into_value(), Some(3));

    let missing: Option<u8> = None;
    assert_eq!(missing.ok_or_not_found("k").try_failure(), Some(&Failure::not_found("k")));
    assert_eq!(missing.ok_or_fail("empty").messages(), ["empty"]);
}
