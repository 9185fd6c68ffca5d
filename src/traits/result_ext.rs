//! Extension traits that lift `Result` and `Option` into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{OptionOutcomeExt, ResultOutcomeExt};
//! use outcome_rail::FailureKind;
//!
//! let parsed = "42".parse::<u32>().into_outcome();
//! assert_eq!(parsed.try_value(), Some(&42));
//!
//! let broken = "forty-two".parse::<u32>().into_outcome();
//! assert_eq!(broken.try_failure().map(|f| f.kind()), Some(FailureKind::Exception));
//!
//! let user: Option<&str> = None;
//! assert!(user.ok_or_not_found(7).is_failure());
//! ```

use core::error::Error;
use core::fmt::Display;

use crate::types::{Failure, Outcome};

/// Extension trait turning a `Result` into an [`Outcome`].
pub trait ResultOutcomeExt<T, E> {
    /// Wraps the error as [`Failure::Exception`], logging its text.
    fn into_outcome(self) -> Outcome<T>
    where
        E: Error + Send + Sync + 'static;

    /// Maps the error to a descriptor of the caller's choosing.
    ///
    /// The closure only runs for `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::ResultOutcomeExt;
    /// use outcome_rail::Failure;
    ///
    /// let result: Result<u8, &str> = Err("empty");
    /// let outcome = result.into_outcome_with(|_| Failure::invalid("body", "empty"));
    /// assert_eq!(outcome.try_failure(), Some(&Failure::invalid("body", "empty")));
    /// ```
    fn into_outcome_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(E) -> Failure;
}

impl<T, E> ResultOutcomeExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T>
    where
        E: Error + Send + Sync + 'static,
    {
        match self {
            Ok(value) => Outcome::ok(value),
            Err(error) => Outcome::exception(error),
        }
    }

    #[inline]
    fn into_outcome_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(E) -> Failure,
    {
        match self {
            Ok(value) => Outcome::ok(value),
            Err(error) => Outcome::from_failure(f(error)),
        }
    }
}

/// Extension trait turning an `Option` into an [`Outcome`].
pub trait OptionOutcomeExt<T> {
    /// `Some` becomes a success, `None` a [`Failure::NotFound`] for `key`.
    fn ok_or_not_found<K: Display>(self, key: K) -> Outcome<T>;

    /// `Some` becomes a success, `None` a generic failure logging `message`.
    fn ok_or_fail<M>(self, message: M) -> Outcome<T>
    where
        M: Into<crate::types::alloc_type::String>;
}

impl<T> OptionOutcomeExt<T> for Option<T> {
    #[inline]
    fn ok_or_not_found<K: Display>(self, key: K) -> Outcome<T> {
        Outcome::ok_if_found(self, key)
    }

    #[inline]
    fn ok_or_fail<M>(self, message: M) -> Outcome<T>
    where
        M: Into<crate::types::alloc_type::String>,
    {
        match self {
            Some(value) => Outcome::ok(value),
            None => Outcome::fail(message),
        }
    }
}
