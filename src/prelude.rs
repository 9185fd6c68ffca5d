//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fail!`], [`invalid!`]
//! - **Types**: [`Outcome`], [`Failure`], [`FailureKind`], [`WarningPolicy`], [`OutcomeCollector`]
//! - **Traits**: [`ResultOutcomeExt`], [`OptionOutcomeExt`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn port(raw: Option<&str>) -> Outcome<u16> {
//!     raw.ok_or_not_found("PORT")
//!         .bind(|raw| raw.parse::<u16>().into_outcome())
//! }
//!
//! assert_eq!(port(Some("8080")).try_value(), Some(&8080));
//! assert_eq!(port(None).weight(), Some(4));
//! assert_eq!(port(Some("http")).try_failure().map(Failure::kind), Some(FailureKind::Exception));
//! ```

// Macros
pub use crate::{fail, invalid};

// Core types
pub use crate::types::{Failure, FailureKind, Outcome, OutcomeCollector, WarningPolicy};

// Traits
pub use crate::traits::{OptionOutcomeExt, ResultOutcomeExt};
