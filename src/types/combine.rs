//! The combine algebra over failure descriptors.
//!
//! When two outcomes meet, the surviving descriptor is decided here and
//! nowhere else. Success (`None`) is the identity on both sides. Between two
//! failures:
//!
//! 1. two [`Failure::Validation`]s merge their field lists, receiver first;
//! 2. a [`Failure::Generic`] receiver yields to any incoming failure;
//! 3. otherwise a strictly heavier incoming failure wins, and ties keep the
//!    receiver.
//!
//! [`Failure::Exception`] carries the maximum weight, so it is never
//! replaced, not even by another exception.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::combine::combine;
//! use outcome_rail::Failure;
//!
//! let merged = combine(Some(Failure::not_found(42)), Some(Failure::invalid("f", "m")));
//! assert_eq!(merged, Some(Failure::invalid("f", "m")));
//!
//! assert_eq!(combine(None, Some(Failure::Generic)), Some(Failure::Generic));
//! assert_eq!(combine(Some(Failure::Generic), None), Some(Failure::Generic));
//! ```

use crate::types::failure::Failure;

/// How a successful receiver treats an incoming [`Failure::Warning`].
///
/// The policy is fixed when an outcome is constructed and is carried
/// unchanged by the combinators that keep the receiver alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WarningPolicy {
    /// Warnings are failures like any other.
    #[default]
    Enforce,
    /// Warnings arriving at a successful receiver are dropped.
    Suppress,
}

impl WarningPolicy {
    /// Builds a policy from a `suppress` flag.
    #[must_use]
    #[inline]
    pub const fn from_flag(suppress: bool) -> Self {
        if suppress {
            WarningPolicy::Suppress
        } else {
            WarningPolicy::Enforce
        }
    }

    /// Returns `true` for [`WarningPolicy::Suppress`].
    #[must_use]
    #[inline]
    pub const fn suppresses(self) -> bool {
        matches!(self, WarningPolicy::Suppress)
    }
}

impl Failure {
    /// Joins an incoming failure into this one and returns the survivor.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Failure;
    ///
    /// let merged = Failure::invalid("p1", "m1").join(Failure::invalid("p2", "m2"));
    /// assert_eq!(merged, Failure::invalid_many([("p1", "m1"), ("p2", "m2")]));
    ///
    /// // equal weight, no merge rule: the receiver is kept
    /// let kept = Failure::not_found(1).join(Failure::not_found(2));
    /// assert_eq!(kept, Failure::not_found(1));
    /// ```
    #[must_use]
    pub fn join(self, incoming: Failure) -> Failure {
        match (self, incoming) {
            (Failure::Validation(mut receiver), Failure::Validation(incoming)) => {
                receiver.append(incoming);
                Failure::Validation(receiver)
            },
            (Failure::Generic, incoming) => incoming,
            (receiver, incoming) if incoming.weight() > receiver.weight() => incoming,
            (receiver, _) => receiver,
        }
    }
}

/// Combines the descriptors of a receiving and an incoming outcome.
///
/// `None` stands for success.
#[must_use]
#[inline]
pub fn combine(receiver: Option<Failure>, incoming: Option<Failure>) -> Option<Failure> {
    match (receiver, incoming) {
        (None, incoming) => incoming,
        (Some(receiver), None) => Some(receiver),
        (Some(receiver), Some(incoming)) => Some(receiver.join(incoming)),
    }
}

/// [`combine`] with the receiver's [`WarningPolicy`] applied first.
///
/// A warning is only dropped when the receiver is still successful.
///
/// # Examples
///
/// ```
/// use outcome_rail::types::combine::{combine_with_policy, WarningPolicy};
/// use outcome_rail::Failure;
///
/// let warning = Some(Failure::warning("nothing changed"));
/// assert_eq!(combine_with_policy(None, warning.clone(), WarningPolicy::Suppress), None);
/// assert_eq!(combine_with_policy(None, warning.clone(), WarningPolicy::Enforce), warning);
/// ```
#[must_use]
#[inline]
pub fn combine_with_policy(
    receiver: Option<Failure>,
    incoming: Option<Failure>,
    policy: WarningPolicy,
) -> Option<Failure> {
    match incoming {
        Some(failure) if receiver.is_none() && policy.suppresses() && failure.is_warning() => None,
        incoming => combine(receiver, incoming),
    }
}
