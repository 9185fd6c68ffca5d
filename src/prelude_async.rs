//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus
//! [`FutureOutcomeExt`] and [`Lift`].
//!
//! # Usage
//!
//! ```rust
//! use outcome_rail::prelude_async::*;
//!
//! async fn load(id: u32) -> Outcome<u32> {
//!     Outcome::ok(id)
//! }
//!
//! async fn example() -> Outcome<u32> {
//!     load(1).map(|id| id + 1).compensate(|| Outcome::ok(0)).await
//! }
//! ```

// Re-export everything from sync prelude
pub use crate::prelude::*;

pub use crate::async_ext::{FutureOutcomeExt, Lift};
