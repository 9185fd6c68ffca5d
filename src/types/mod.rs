//! Outcome types and the algebra that combines them.
//!
//! This module provides the [`Outcome`] type, the [`Failure`] taxonomy and
//! the combine algebra that decides which failure survives when two
//! outcomes meet.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Failure, Outcome};
//!
//! let outcome = Outcome::ok_with_message(5, "loaded")
//!     .check(|n| Outcome::invalid_when(*n > 3, "n", "too large"))
//!     .map(|n| n * 2);
//!
//! assert_eq!(outcome.try_failure(), Some(&Failure::invalid("n", "too large")));
//! assert_eq!(outcome.messages(), ["loaded"]);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod collector;
pub mod combine;
pub mod failure;
mod iter;
mod ops;
pub mod outcome;
pub mod problem;

pub use collector::*;
pub use combine::{combine, combine_with_policy, WarningPolicy};
pub use failure::*;
pub use outcome::*;
pub use problem::*;

/// SmallVec-backed collection used for message logs and validation lists.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations
/// for the short logs most chains produce.
pub type InlineVec<T> = SmallVec<[T; 2]>;

/// Ordered log of diagnostic messages carried by every [`Outcome`].
pub type Messages = InlineVec<alloc_type::String>;
