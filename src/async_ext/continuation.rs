//! Combinators whose continuation is asynchronous.
//!
//! Each method mirrors its immediate counterpart in [`Outcome`]: it
//! short-circuits the same way and merges through the same primitives, the
//! only difference being that the continuation's future is awaited first.
//!
//! Continuations that receive `&T` must return a future that does not
//! borrow the value; clone what the future needs.

use core::future::Future;

use crate::types::alloc_type::String;
use crate::types::{Failure, Outcome};

impl<T> Outcome<T> {
    /// Asynchronous form of [`Outcome::bind`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::Outcome;
    ///
    /// async fn load(id: u32) -> Outcome<String> {
    ///     Outcome::ok_with_message(format!("user-{id}"), "loaded")
    /// }
    ///
    /// async fn example() {
    ///     let outcome = Outcome::ok(7).bind_async(load).await;
    ///     assert_eq!(outcome.try_value().map(String::as_str), Some("user-7"));
    /// }
    /// ```
    pub async fn bind_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self.detach() {
            Ok((value, receiver)) => receiver.absorb(f(value).await),
            Err(failed) => failed.recast(),
        }
    }

    /// Asynchronous form of [`Outcome::map`].
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.detach() {
            Ok((value, receiver)) => {
                let mapped = f(value).await;
                receiver.map(move |()| mapped)
            },
            Err(failed) => failed.recast(),
        }
    }

    /// Asynchronous form of [`Outcome::check`].
    pub async fn check_async<U, F, Fut>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        let pending = match self.try_value() {
            Some(value) => f(value),
            None => return self,
        };
        let check = pending.await;
        self.retain(check)
    }

    /// Asynchronous form of [`Outcome::check_if`].
    ///
    /// The predicate stays synchronous; only the check is awaited.
    pub async fn check_if_async<U, P, F, Fut>(self, predicate: P, f: F) -> Outcome<T>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        if self.try_value().is_some_and(predicate) {
            self.check_async(f).await
        } else {
            self
        }
    }

    /// Asynchronous form of [`Outcome::check_each`].
    pub async fn check_each_async<I, U, F, Fut>(self, items: I, mut f: F) -> Outcome<T>
    where
        I: IntoIterator,
        F: FnMut(I::Item, &T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        let mut items = items.into_iter();
        let mut outcome = self;
        while outcome.is_success() {
            let Some(item) = items.next() else {
                break;
            };
            outcome = outcome.check_async(|value| f(item, value)).await;
        }
        outcome
    }

    /// Asynchronous form of [`Outcome::combine_with`].
    pub async fn combine_with_async<U, F, Fut>(self, f: F) -> Outcome<(T, U)>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self.detach() {
            Ok((value, receiver)) => {
                let other = f(&value).await;
                receiver.map(move |()| value).pair(other)
            },
            Err(failed) => failed.recast(),
        }
    }

    /// Asynchronous form of [`Outcome::tap`].
    pub async fn tap_async<F, Fut>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Some(value) = self.try_value() {
            f(value).await;
        }
        self
    }

    /// Asynchronous form of [`Outcome::compensate`].
    pub async fn compensate_async<F, Fut>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        if self.is_success() {
            self
        } else {
            f().await
        }
    }

    /// Asynchronous form of [`Outcome::match_with`].
    pub async fn match_with_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Failure) -> FFut,
        FFut: Future<Output = R>,
    {
        match self.into_result() {
            Ok(value) => on_success(value).await,
            Err(failure) => on_failure(failure).await,
        }
    }

    /// Awaits `condition` and succeeds with `value` if it holds.
    pub async fn ok_if_async<C>(value: T, condition: C, failure_message: impl Into<String>) -> Self
    where
        C: Future<Output = bool>,
    {
        let holds = condition.await;
        Self::ok_if(value, holds, failure_message)
    }

    /// Awaits `predicate` and fails with a validation failure on `field` if it holds.
    pub async fn invalid_if_async<P>(
        value: T,
        predicate: P,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self
    where
        P: Future<Output = bool>,
    {
        let holds = predicate.await;
        Self::invalid_if(value, holds, field, message)
    }
}
