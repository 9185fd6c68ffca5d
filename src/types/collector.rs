//! Accumulation of independently evaluated outcomes.
//!
//! Combinators short-circuit; a collector does not. Every outcome handed
//! to it is folded through the combine algebra, so independent checks can
//! all run and report together (validation failures concatenate, heavier
//! failures take over).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Failure, Outcome, OutcomeCollector};
//!
//! let mut collector = OutcomeCollector::new();
//! collector
//!     .add(Outcome::invalid_when(true, "name", "required"))
//!     .add(Outcome::success_with_message("age checked"))
//!     .add(Outcome::invalid_when(true, "email", "malformed"));
//!
//! let outcome = collector.finish();
//! assert_eq!(
//!     outcome.try_failure(),
//!     Some(&Failure::invalid_many([("name", "required"), ("email", "malformed")]))
//! );
//! assert_eq!(outcome.messages(), ["age checked"]);
//! ```

use crate::types::combine::{combine, WarningPolicy};
use crate::types::failure::Failure;
use crate::types::outcome::Outcome;
use crate::types::Messages;

/// Folds outcomes through the combine algebra without short-circuiting.
#[derive(Debug, Clone, Default)]
pub struct OutcomeCollector {
    failure: Option<Failure>,
    messages: Messages,
}

impl OutcomeCollector {
    /// Creates an empty collector.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds an outcome in. Its value is dropped.
    pub fn add<U>(&mut self, outcome: Outcome<U>) -> &mut Self {
        let (state, messages) = outcome.into_parts();
        self.failure = combine(self.failure.take(), state.err());
        self.messages.extend(messages);
        self
    }

    /// Returns `true` if nothing added so far has failed.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// The failure accumulated so far.
    #[must_use]
    #[inline]
    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    /// Finishes as a valueless outcome.
    #[inline]
    pub fn finish(self) -> Outcome<()> {
        self.finish_with(())
    }

    /// Finishes with `value` when nothing failed.
    #[inline]
    pub fn finish_with<T>(self, value: T) -> Outcome<T> {
        Outcome::assemble(Some(value), self.failure, self.messages, WarningPolicy::Enforce)
    }
}

impl<U> Extend<Outcome<U>> for OutcomeCollector {
    fn extend<I: IntoIterator<Item = Outcome<U>>>(&mut self, iter: I) {
        for outcome in iter {
            self.add(outcome);
        }
    }
}
