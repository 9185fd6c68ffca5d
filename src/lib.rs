//! Outcomes as values: a success or a weighted failure, plus a message log.
//!
//! [`Outcome<T>`] replaces control-flow exceptions for expected failures.
//! Chains of operations stay on the "rail" while they succeed; once a step
//! fails, later steps are skipped and the failure travels to the end,
//! together with every diagnostic message collected on the way.
//!
//! When two outcomes meet, the combine algebra decides which failure
//! survives: heavier kinds win, validation failures merge, and a generic
//! failure yields to anything more specific.
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```
//! use outcome_rail::{Failure, Outcome};
//!
//! fn parse_age(raw: &str) -> Outcome<u8> {
//!     match raw.parse() {
//!         Ok(age) => Outcome::ok_with_message(age, "parsed age"),
//!         Err(_) => Outcome::invalid("age", "not a number"),
//!     }
//! }
//!
//! let outcome = parse_age("42")
//!     .check(|age| Outcome::invalid_when(*age < 18, "age", "too young"))
//!     .map(|age| age as u32 * 12);
//!
//! assert_eq!(outcome.try_value(), Some(&504));
//! assert_eq!(outcome.messages(), ["parsed age"]);
//!
//! let outcome = parse_age("x").map(|age| age + 1);
//! assert_eq!(outcome.try_failure(), Some(&Failure::invalid("age", "not a number")));
//! ```
//!
//! ## Combining
//!
//! ```
//! use outcome_rail::{Failure, Outcome};
//!
//! let outcome = Outcome::<u8>::invalid("a", "bad").combine(Outcome::<u8>::invalid("b", "bad"));
//! let failures = outcome.try_failure().and_then(Failure::validation_failures).unwrap();
//! assert_eq!(failures.len(), 2);
//!
//! let outcome = Outcome::<u8>::fail("generic").combine(Outcome::<u8>::not_found(7));
//! assert_eq!(outcome.weight(), Some(4));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between outcomes and plain `Result` values
pub mod convert;
/// Macros for building failed outcomes
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for `Result` and `Option`
pub mod traits;
/// Outcome, Failure and the combine algebra
pub mod types;

/// Async combinators and the future extension trait (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::*;
pub use types::{
    combine, combine_with_policy, ExceptionError, Failure, FailureKind, InlineVec, Messages,
    Outcome, OutcomeCollector, Problem, ValidationFailure, ValidationFailures, WarningPolicy,
};

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}
