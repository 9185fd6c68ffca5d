//! The [`Outcome`] core type: a success value or a [`Failure`], plus an
//! ordered log of diagnostic messages.

use core::convert::Infallible;
use core::fmt;

use crate::types::alloc_type::String;
use crate::types::combine::{combine, combine_with_policy, WarningPolicy};
use crate::types::failure::{Failure, ValidationFailure};
use crate::types::Messages;

/// Outcome of an operation that may fail, carried as a value.
///
/// An outcome is either a success holding a `T` or a failure holding a
/// [`Failure`]. Both carry a message log that only grows, in the order the
/// outcomes were chained. Combinators consume the outcome and return a new
/// one; nothing is mutated in place.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Failure, Outcome};
///
/// let outcome = Outcome::ok_with_message(1, "okWithValue")
///     .bind(|_| Outcome::<i32>::invalid("prop", "bad"));
///
/// assert!(outcome.is_failure());
/// assert_eq!(outcome.try_failure(), Some(&Failure::invalid("prop", "bad")));
/// assert_eq!(outcome.messages(), ["okWithValue"]);
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    pub(crate) state: Result<T, Failure>,
    pub(crate) messages: Messages,
    pub(crate) policy: WarningPolicy,
}

impl<T> Outcome<T> {
    #[inline]
    pub(crate) fn from_state(state: Result<T, Failure>, messages: Messages, policy: WarningPolicy) -> Self {
        Self { state, messages, policy }
    }

    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::ok(42);
    /// assert_eq!(outcome.try_value(), Some(&42));
    /// ```
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::from_state(Ok(value), Messages::new(), WarningPolicy::Enforce)
    }

    /// Creates a successful outcome whose log starts with `message`.
    #[inline]
    pub fn ok_with_message(value: T, message: impl Into<String>) -> Self {
        Self::ok(value).with_message(message)
    }

    /// Creates a successful outcome that drops warnings arriving through checks.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::ok_ignore_warnings(42).check(|_| Outcome::<()>::warn("unchanged"));
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub fn ok_ignore_warnings(value: T) -> Self {
        Self::from_state(Ok(value), Messages::new(), WarningPolicy::Suppress)
    }

    /// Creates a failed outcome from a descriptor.
    #[inline]
    pub fn from_failure(failure: Failure) -> Self {
        Self::from_state(Err(failure), Messages::new(), WarningPolicy::Enforce)
    }

    /// Creates a [`Failure::Generic`] outcome logging `message`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Failure, Outcome};
    ///
    /// let outcome = Outcome::<u8>::fail("disk full");
    /// assert_eq!(outcome.try_failure(), Some(&Failure::Generic));
    /// assert_eq!(outcome.messages(), ["disk full"]);
    /// ```
    #[inline]
    pub fn fail(message: impl Into<String>) -> Self {
        Self::from_failure(Failure::Generic).with_message(message)
    }

    /// Creates a [`Failure::NotFound`] outcome for `key`.
    ///
    /// The log receives `Did not find <T> with Id <key>`, where `<T>` is the
    /// last path segment of the value type's name.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// struct User;
    ///
    /// let outcome = Outcome::<User>::not_found(7);
    /// assert_eq!(outcome.messages(), ["Did not find User with Id 7"]);
    /// ```
    #[inline]
    pub fn not_found<K: fmt::Display>(key: K) -> Self {
        let message = alloc::format!("Did not find {} with Id {}", short_type_name::<T>(), key);
        Self::not_found_with_message(key, message)
    }

    /// Creates a [`Failure::NotFound`] outcome for `key` with a custom message.
    #[inline]
    pub fn not_found_with_message<K: fmt::Display>(key: K, message: impl Into<String>) -> Self {
        Self::from_failure(Failure::not_found(key)).with_message(message)
    }

    /// Creates a [`Failure::Validation`] outcome for a single field.
    #[inline]
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::from_failure(Failure::invalid(field, message))
    }

    /// Creates a [`Failure::Validation`] outcome from `(field, message)` pairs.
    #[inline]
    pub fn invalid_many<I, V>(failures: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ValidationFailure>,
    {
        Self::from_failure(Failure::invalid_many(failures))
    }

    /// Wraps a foreign error as a [`Failure::Exception`] outcome.
    ///
    /// The error's `Display` text is logged.
    #[inline]
    pub fn exception<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        let message = alloc::string::ToString::to_string(&error);
        Self::from_failure(Failure::exception(error)).with_message(message)
    }

    /// Creates a [`Failure::Warning`] outcome.
    #[inline]
    pub fn warn(message: impl Into<String>) -> Self {
        Self::from_failure(Failure::warning(message))
    }

    /// Returns `value` when `ignore_warnings` is set, a warning otherwise.
    ///
    /// The successful branch keeps [`WarningPolicy::Suppress`].
    #[inline]
    pub fn warn_or_ok(value: T, message: impl Into<String>, ignore_warnings: bool) -> Self {
        if ignore_warnings {
            Self::ok_ignore_warnings(value)
        } else {
            Self::warn(message)
        }
    }

    /// Succeeds with `value` if `condition` holds, fails with `failure_message` otherwise.
    #[inline]
    pub fn ok_if(value: T, condition: bool, failure_message: impl Into<String>) -> Self {
        if condition {
            Self::ok(value)
        } else {
            Self::fail(failure_message)
        }
    }

    /// Like [`ok_if`](Self::ok_if), evaluating `condition` against the value.
    #[inline]
    pub fn ok_if_with<P>(value: T, condition: P, failure_message: impl Into<String>) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let holds = condition(&value);
        Self::ok_if(value, holds, failure_message)
    }

    /// Fails with a validation failure on `field` if `predicate` holds.
    #[inline]
    pub fn invalid_if(
        value: T,
        predicate: bool,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        if predicate {
            Self::invalid(field, message)
        } else {
            Self::ok(value)
        }
    }

    /// Like [`invalid_if`](Self::invalid_if), evaluating `predicate` against the value.
    #[inline]
    pub fn invalid_if_with<P>(
        value: T,
        predicate: P,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let holds = predicate(&value);
        Self::invalid_if(value, holds, field, message)
    }

    /// Succeeds with the found entity, or fails with [`Failure::NotFound`] for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Failure, Outcome};
    ///
    /// let missing = Outcome::<&str>::ok_if_found(None, 3);
    /// assert_eq!(missing.try_failure(), Some(&Failure::not_found(3)));
    ///
    /// let found = Outcome::ok_if_found(Some("alice"), 3);
    /// assert_eq!(found.into_value(), Some("alice"));
    /// ```
    #[inline]
    pub fn ok_if_found<K: fmt::Display>(entity: Option<T>, key: K) -> Self {
        match entity {
            Some(entity) => Self::ok(entity),
            None => Self::not_found(key),
        }
    }

    /// Assembles an outcome from raw parts.
    ///
    /// A present failure wins over a present value.
    ///
    /// # Panics
    ///
    /// Panics if neither a value nor a failure is supplied: a success must
    /// always carry its value.
    #[track_caller]
    pub fn from_parts<I>(value: Option<T>, failure: Option<Failure>, messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::assemble(value, failure, messages.into_iter().map(Into::into).collect(), WarningPolicy::Enforce)
    }

    #[track_caller]
    pub(crate) fn assemble(
        value: Option<T>,
        failure: Option<Failure>,
        messages: Messages,
        policy: WarningPolicy,
    ) -> Self {
        let state = match (failure, value) {
            (Some(failure), _) => Err(failure),
            (None, Some(value)) => Ok(value),
            (None, None) => unreachable_state("a success was assembled without a value"),
        };
        Self::from_state(state, messages, policy)
    }

    /// Appends a message to the log.
    #[inline]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// Returns `true` if the outcome holds a value.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        self.state.is_ok()
    }

    /// Returns `true` if the outcome holds a failure.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.state.is_err()
    }

    /// Borrows the value of a success.
    #[must_use]
    #[inline]
    pub fn try_value(&self) -> Option<&T> {
        self.state.as_ref().ok()
    }

    /// Borrows the descriptor of a failure.
    #[must_use]
    #[inline]
    pub fn try_failure(&self) -> Option<&Failure> {
        self.state.as_ref().err()
    }

    /// Borrows the value of an outcome known to be successful.
    ///
    /// # Panics
    ///
    /// Panics when called on a failure. Reading a value that does not exist
    /// is a bug in the caller, not a domain failure.
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.state {
            Ok(value) => value,
            Err(_) => unreachable_state("a value was read from a failed outcome"),
        }
    }

    /// Consumes the outcome and returns the value of a success.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.state.ok()
    }

    /// Consumes the outcome and returns the descriptor of a failure.
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<Failure> {
        self.state.err()
    }

    /// The message log, oldest first.
    #[must_use]
    #[inline]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The warning policy fixed at construction.
    #[must_use]
    #[inline]
    pub fn warning_policy(&self) -> WarningPolicy {
        self.policy
    }

    /// Returns `true` if warnings arriving through checks are dropped.
    #[must_use]
    #[inline]
    pub fn suppresses_warnings(&self) -> bool {
        self.policy.suppresses()
    }

    /// Weight of the failure, `None` on success.
    #[must_use]
    #[inline]
    pub fn weight(&self) -> Option<u8> {
        self.try_failure().map(Failure::weight)
    }

    /// Borrows the outcome as a plain `Result`.
    #[inline]
    pub fn as_result(&self) -> Result<&T, &Failure> {
        self.state.as_ref()
    }

    /// Converts into a plain `Result`, dropping the log.
    #[inline]
    pub fn into_result(self) -> Result<T, Failure> {
        self.state
    }

    /// Splits the outcome into its state and message log.
    #[inline]
    pub fn into_parts(self) -> (Result<T, Failure>, Messages) {
        (self.state, self.messages)
    }

    /// Projects to `Outcome<()>`, keeping descriptor, log and policy.
    #[inline]
    pub fn without_value(self) -> Outcome<()> {
        Outcome::from_state(self.state.map(|_| ()), self.messages, self.policy)
    }

    /// Separates the value of a success from the rest of the receiver.
    ///
    /// The valueless half keeps the log and policy so a continuation's
    /// outcome can be combined into it. A failure comes back as an outcome
    /// that can be recast to any value type.
    pub(crate) fn detach(self) -> Result<(T, Outcome<()>), Outcome<Infallible>> {
        let Outcome { state, messages, policy } = self;
        match state {
            Ok(value) => Ok((value, Outcome::from_state(Ok(()), messages, policy))),
            Err(failure) => Err(Outcome::from_state(Err(failure), messages, policy)),
        }
    }

    /// Combines `incoming` into `self`, keeping the incoming value.
    pub(crate) fn absorb<U>(self, incoming: Outcome<U>) -> Outcome<U> {
        let Outcome { state, mut messages, policy } = self;
        messages.extend(incoming.messages);
        let (value, failure) = split(incoming.state);
        let failure = combine(state.err(), failure);
        Outcome::assemble(value, failure, messages, policy)
    }

    /// Combines `incoming` into `self`, keeping the receiver's value.
    ///
    /// This is the only place the receiver's [`WarningPolicy`] is consulted.
    pub(crate) fn retain<U>(self, incoming: Outcome<U>) -> Outcome<T> {
        let Outcome { state, mut messages, policy } = self;
        messages.extend(incoming.messages);
        let (value, failure) = split(state);
        let failure = combine_with_policy(failure, incoming.state.err(), policy);
        Outcome::assemble(value, failure, messages, policy)
    }

    /// Combines `incoming` into `self`, pairing both values.
    pub(crate) fn pair<U>(self, incoming: Outcome<U>) -> Outcome<(T, U)> {
        let Outcome { state, mut messages, policy } = self;
        messages.extend(incoming.messages);
        let (value, failure) = split(state);
        let (other, other_failure) = split(incoming.state);
        let failure = combine(failure, other_failure);
        Outcome::assemble(value.zip(other), failure, messages, policy)
    }
}

impl Outcome<()> {
    /// Creates a successful outcome without a value.
    #[inline]
    pub fn success() -> Self {
        Self::ok(())
    }

    /// Creates a successful outcome without a value whose log starts with `message`.
    #[inline]
    pub fn success_with_message(message: impl Into<String>) -> Self {
        Self::ok_with_message((), message)
    }

    /// Succeeds if `condition` holds, fails with `failure_message` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert!(Outcome::ok_when(true, "unused").is_success());
    /// assert_eq!(Outcome::ok_when(false, "closed").messages(), ["closed"]);
    /// ```
    #[inline]
    pub fn ok_when(condition: bool, failure_message: impl Into<String>) -> Self {
        Self::ok_if((), condition, failure_message)
    }

    /// Fails with a validation failure on `field` if `predicate` holds.
    #[inline]
    pub fn invalid_when(predicate: bool, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::invalid_if((), predicate, field, message)
    }
}

impl Outcome<Infallible> {
    /// Recasts a failure to any value type.
    #[inline]
    pub(crate) fn recast<U>(self) -> Outcome<U> {
        Outcome::from_state(self.state.map(|never| match never {}), self.messages, self.policy)
    }
}

fn split<T>(state: Result<T, Failure>) -> (Option<T>, Option<Failure>) {
    match state {
        Ok(value) => (Some(value), None),
        Err(failure) => (None, Some(failure)),
    }
}

fn short_type_name<T>() -> &'static str {
    let full = core::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Signals a broken outcome invariant. Never returns.
#[cold]
#[track_caller]
pub(crate) fn unreachable_state(reason: &str) -> ! {
    panic!("unreachable outcome state: {reason}; this is a bug")
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = match &self.state {
            Ok(value) => {
                let mut out = f.debug_struct("Success");
                out.field("value", value);
                out
            },
            Err(failure) => {
                let mut out = f.debug_struct("Failure");
                out.field("failure", failure);
                out
            },
        };
        out.field("messages", &self.messages);
        if self.policy.suppresses() {
            out.field("policy", &self.policy);
        }
        out.finish()
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            Ok(value) => write!(f, "success: {}", value)?,
            Err(failure) => write!(f, "failure: {}", failure)?,
        }
        for message in &self.messages {
            write!(f, "\n  - {}", message)?;
        }
        Ok(())
    }
}
