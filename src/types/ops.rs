//! Combinators over immediate outcomes.
//!
//! Each combinator is written once here. The asynchronous shapes in
//! `async_ext` await their inputs and then call back into these.
//!
//! Combinators taking a continuation short-circuit: a failed receiver is
//! forwarded without calling it. [`Outcome::compensate`] and the
//! `match_with` family are the exceptions. Combinators taking an already
//! evaluated outcome ([`Outcome::and`], [`Outcome::check_outcome`],
//! [`Outcome::combine`]) always merge it, failed receiver or not.

use crate::types::alloc_type::String;
use crate::types::failure::Failure;
use crate::types::outcome::Outcome;

impl<T> Outcome<T> {
    /// Chains an operation that needs the value and may itself fail.
    ///
    /// On success the continuation's outcome is combined into the receiver:
    /// the log grows by the continuation's messages and the descriptor is
    /// decided by the combine algebra.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::ok_with_message(2, "start")
    ///     .bind(|x| Outcome::ok_with_message(x * 10, "a"))
    ///     .bind(|x| Outcome::ok_with_message(x + 1, "b"));
    ///
    /// assert_eq!(outcome.try_value(), Some(&21));
    /// assert_eq!(outcome.messages(), ["start", "a", "b"]);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.detach() {
            Ok((value, receiver)) => receiver.absorb(f(value)),
            Err(failed) => failed.recast(),
        }
    }

    /// Chains an already evaluated outcome, keeping its value.
    ///
    /// `next` is merged even into a failed receiver: its messages are
    /// logged and its descriptor goes through the combine algebra.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Failure, Outcome};
    ///
    /// let outcome = Outcome::<u8>::fail("first").and(Outcome::<u8>::not_found(3));
    /// assert_eq!(outcome.try_failure(), Some(&Failure::not_found(3)));
    /// assert_eq!(outcome.messages().len(), 2);
    /// ```
    #[inline]
    pub fn and<U>(self, next: Outcome<U>) -> Outcome<U> {
        self.absorb(next)
    }

    /// Transforms the value of a success. Log and policy are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::ok(21).map(|x| x * 2);
    /// assert_eq!(outcome.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        let Outcome { state, messages, policy } = self;
        Outcome::from_state(state.map(f), messages, policy)
    }

    /// Runs a check against the value and keeps the value if it passes.
    ///
    /// The check's messages are logged either way. A warning produced by the
    /// check is dropped when the receiver suppresses warnings.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Failure, Outcome};
    ///
    /// let outcome = Outcome::ok(17).check(|age| Outcome::invalid_when(*age < 18, "age", "too young"));
    /// assert_eq!(outcome.try_failure(), Some(&Failure::invalid("age", "too young")));
    /// ```
    #[inline]
    pub fn check<U, F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(&T) -> Outcome<U>,
    {
        let check = match self.try_value() {
            Some(value) => f(value),
            None => return self,
        };
        self.retain(check)
    }

    /// Combines an already evaluated check, keeping the value if it passes.
    ///
    /// Unlike [`check`](Self::check) the check is merged into a failed
    /// receiver too.
    #[inline]
    pub fn check_outcome<U>(self, check: Outcome<U>) -> Outcome<T> {
        self.retain(check)
    }

    /// Runs `f` only when `predicate` holds for the value.
    ///
    /// The predicate is never evaluated on a failure.
    #[inline]
    pub fn check_if<U, P, F>(self, predicate: P, f: F) -> Outcome<T>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> Outcome<U>,
    {
        if self.try_value().is_some_and(predicate) {
            self.check(f)
        } else {
            self
        }
    }

    /// Runs `f` for every item in order, stopping at the first failure.
    ///
    /// Items are pulled from the iterator only while the outcome is
    /// successful.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut visited = Vec::new();
    /// let outcome = Outcome::ok(10).check_each([3, 20, 5], |limit, value| {
    ///     visited.push(limit);
    ///     Outcome::ok_when(limit < *value, "over the limit")
    /// });
    ///
    /// assert!(outcome.is_failure());
    /// assert_eq!(visited, [3, 20]);
    /// ```
    pub fn check_each<I, U, F>(self, items: I, mut f: F) -> Outcome<T>
    where
        I: IntoIterator,
        F: FnMut(I::Item, &T) -> Outcome<U>,
    {
        let mut items = items.into_iter();
        let mut outcome = self;
        while outcome.is_success() {
            let Some(item) = items.next() else {
                break;
            };
            outcome = outcome.check(|value| f(item, value));
        }
        outcome
    }

    /// Pairs the value with another outcome's value.
    ///
    /// When either side failed, the surviving descriptor comes from the
    /// combine algebra. Both logs are kept, receiver first.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Failure, Outcome};
    ///
    /// let outcome = Outcome::<u8>::not_found(42).combine(Outcome::<u8>::invalid("f", "m"));
    /// assert_eq!(outcome.try_failure(), Some(&Failure::invalid("f", "m")));
    /// ```
    #[inline]
    pub fn combine<U>(self, other: Outcome<U>) -> Outcome<(T, U)> {
        self.pair(other)
    }

    /// Pairs the value with a plain value.
    #[inline]
    pub fn combine_value<U>(self, other: U) -> Outcome<(T, U)> {
        self.map(move |value| (value, other))
    }

    /// Pairs the value with the value produced by `f`.
    ///
    /// `f` is not called on a failure.
    #[inline]
    pub fn combine_with<U, F>(self, f: F) -> Outcome<(T, U)>
    where
        F: FnOnce(&T) -> Outcome<U>,
    {
        match self.detach() {
            Ok((value, receiver)) => {
                let other = f(&value);
                receiver.map(move |()| value).pair(other)
            },
            Err(failed) => failed.recast(),
        }
    }

    /// Runs a side effect on the value and returns the outcome unchanged.
    #[inline]
    pub fn tap<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(&T),
    {
        if let Some(value) = self.try_value() {
            f(value);
        }
        self
    }

    /// Replaces a failure with the fallback outcome.
    ///
    /// The failed receiver is discarded entirely, including its log.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32>::fail("primary down").compensate(|| Outcome::ok(0));
    /// assert_eq!(outcome.try_value(), Some(&0));
    /// assert!(outcome.messages().is_empty());
    /// ```
    #[inline]
    pub fn compensate<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> Outcome<T>,
    {
        if self.is_success() {
            self
        } else {
            f()
        }
    }

    /// Dispatches to `on_success` or `on_failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let status = Outcome::<u8>::not_found(1).match_with(|_| 200, |failure| failure.status_code());
    /// assert_eq!(status, 404);
    /// ```
    #[inline]
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Failure) -> R,
    {
        match self.state {
            Ok(value) => on_success(value),
            Err(failure) => on_failure(failure),
        }
    }

    /// Like [`match_with`](Self::match_with), handing the message log to
    /// either branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let line = Outcome::<u8>::fail("disk full").match_with_messages(
    ///     |value, _| value.to_string(),
    ///     |failure, log| format!("{} ({})", failure.kind(), log.join(", ")),
    /// );
    /// assert_eq!(line, "generic (disk full)");
    /// ```
    #[inline]
    pub fn match_with_messages<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T, &[String]) -> R,
        F: FnOnce(Failure, &[String]) -> R,
    {
        match self.state {
            Ok(value) => on_success(value, &self.messages),
            Err(failure) => on_failure(failure, &self.messages),
        }
    }

    /// Discards the value, keeping descriptor, log and policy.
    #[inline]
    pub fn flatten(self) -> Outcome<()> {
        self.without_value()
    }
}
