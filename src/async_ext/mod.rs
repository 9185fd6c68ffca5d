//! Async extensions for outcome-rail.
//!
//! Two surfaces share one implementation of the combine rules:
//!
//! - `_async` methods on [`Outcome`](crate::Outcome) accept a continuation
//!   that returns a future.
//! - [`FutureOutcomeExt`] makes every combinator available on a future that
//!   resolves to an outcome, by awaiting it and delegating through [`Lift`].
//!
//! # Feature Flag
//!
//! Enabled by the default `async` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome_rail::prelude_async::*;
//!
//! async fn find_user(id: u32) -> Outcome<String> {
//!     Outcome::ok_if_found(if id == 1 { Some("ada".to_string()) } else { None }, id)
//! }
//!
//! async fn example() {
//!     let outcome = find_user(2).map(|name| name.len()).await;
//!     assert_eq!(outcome.weight(), Some(4));
//! }
//! ```

mod continuation;
mod future_ext;
mod lift;

pub use future_ext::FutureOutcomeExt;
pub use lift::Lift;
