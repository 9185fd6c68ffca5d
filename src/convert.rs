//! Explicit conversions between [`Outcome`] and plain `Result` values.
//!
//! Conversions into a `Result` drop the message log; use
//! [`Outcome::into_parts`] when the log is needed.

use crate::types::{Failure, Outcome};

impl<T> From<Result<T, Failure>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, Failure>) -> Self {
        match result {
            Ok(value) => Outcome::ok(value),
            Err(failure) => Outcome::from_failure(failure),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Failure> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T> From<Failure> for Outcome<T> {
    #[inline]
    fn from(failure: Failure) -> Self {
        Outcome::from_failure(failure)
    }
}

/// Converts a `Result` whose error is already a [`Failure`] into an outcome.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::Failure;
///
/// let outcome = result_to_outcome::<u8>(Err(Failure::not_found("k")));
/// assert!(outcome.is_failure());
/// ```
#[inline]
pub fn result_to_outcome<T>(result: Result<T, Failure>) -> Outcome<T> {
    result.into()
}

/// Converts an outcome into a `Result`, dropping the log.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::ok(3)), Ok(3));
/// ```
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, Failure> {
    outcome.into()
}

/// Converts an outcome into a `Result` carrying the log on both sides.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_logged_result;
/// use outcome_rail::Outcome;
///
/// let (result, log) = outcome_to_logged_result(Outcome::ok_with_message(1, "read"));
/// assert_eq!(result, Ok(1));
/// assert_eq!(log.as_slice(), ["read"]);
/// ```
#[inline]
pub fn outcome_to_logged_result<T>(outcome: Outcome<T>) -> (Result<T, Failure>, crate::types::Messages) {
    outcome.into_parts()
}
