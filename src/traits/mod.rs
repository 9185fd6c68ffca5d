//! Extension traits bridging std types and [`Outcome`](crate::Outcome).
//!
//! - [`ResultOutcomeExt`]: lifts `Result<T, E>` into an outcome
//! - [`OptionOutcomeExt`]: lifts `Option<T>` into an outcome
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::ResultOutcomeExt;
//!
//! let outcome = std::fs::read_to_string("definitely-missing.toml").into_outcome();
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.messages().len(), 1);
//! ```

pub mod result_ext;

pub use result_ext::{OptionOutcomeExt, ResultOutcomeExt};
