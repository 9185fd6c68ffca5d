use std::error::Error;
use std::fmt;

use outcome_rail::{ExceptionError, Failure, FailureKind, ValidationFailure, ValidationFailures};

#[derive(Debug)]
struct DiskFull;

impl fmt::Display for DiskFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("disk full")
    }
}

impl Error for DiskFull {}

#[test]
fn weights_are_strictly_ordered() {
    let kinds = [
        FailureKind::Generic,
        FailureKind::Warning,
        FailureKind::NotFound,
        FailureKind::Validation,
        FailureKind::Exception,
    ];
    let weights: Vec<u8> = kinds.iter().map(|k| k.weight()).collect();

    assert_eq!(weights, [1, 2, 4, 8, 16]);
    assert!(kinds.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn only_validation_merges_with_itself() {
    assert!(FailureKind::Validation.merges_with_itself());
    assert!(!FailureKind::NotFound.merges_with_itself());
    assert!(!FailureKind::Exception.merges_with_itself());
}

#[test]
fn constructors_report_their_kind() {
    assert_eq!(Failure::Generic.kind(), FailureKind::Generic);
    assert_eq!(Failure::warning("w").kind(), FailureKind::Warning);
    assert_eq!(Failure::not_found(3).kind(), FailureKind::NotFound);
    assert_eq!(Failure::invalid("f", "m").kind(), FailureKind::Validation);
    assert_eq!(Failure::exception(DiskFull).kind(), FailureKind::Exception);
}

#[test]
fn not_found_renders_key() {
    assert_eq!(Failure::not_found(42), Failure::NotFound { key: "42".to_string() });
}

#[test]
fn invalid_many_preserves_order() {
    let failure = Failure::invalid_many([("a", "1"), ("b", "2")]);
    let failures = failure.validation_failures().unwrap();

    let fields: Vec<&str> = failures.iter().map(ValidationFailure::field).collect();
    assert_eq!(fields, ["a", "b"]);
}

#[test]
fn grouped_by_field_keeps_first_seen_order() {
    let failures: ValidationFailures = [("name", "required"), ("age", "too young"), ("name", "too short")]
        .into_iter()
        .map(ValidationFailure::from)
        .collect();

    assert_eq!(
        failures.grouped_by_field(),
        vec![("name", vec!["required", "too short"]), ("age", vec!["too young"])]
    );
    assert!(failures.of_field("email").is_empty());
}

#[test]
fn exception_equality_is_by_identity() {
    let error = ExceptionError::new(DiskFull);
    let same = error.clone();
    let other = ExceptionError::new(DiskFull);

    assert_eq!(error, same);
    assert_ne!(error, other);
    assert!(error.downcast_ref::<DiskFull>().is_some());
}

#[test]
fn exception_is_exposed_as_source() {
    let failure = Failure::exception(DiskFull);

    let source = failure.source().expect("exception has a source");
    assert_eq!(source.to_string(), "disk full");
    assert!(Failure::Generic.source().is_none());
}

#[test]
fn display_joins_title_and_detail() {
    assert_eq!(Failure::Generic.to_string(), "Something was wrong with the request:");
    assert_eq!(
        Failure::invalid("age", "too young").to_string(),
        "One or more validation errors occurred: age: too young"
    );
    assert_eq!(FailureKind::NotFound.to_string(), "not_found");
}
