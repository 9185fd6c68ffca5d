//! Extension trait for `Future<Output = Outcome<T>>`.
//!
//! Every combinator of [`Outcome`] is available on a future of an outcome.
//! None of them re-implement merging: each awaits the receiver through
//! [`lift`](FutureOutcomeExt::lift) or [`lift_async`](FutureOutcomeExt::lift_async)
//! and delegates to the immediate combinator.

use core::future::Future;

use crate::types::alloc_type::String;
use crate::types::{Failure, Outcome};

use super::lift::Lift;

/// Extension trait running outcome combinators on asynchronous receivers.
///
/// Methods taking an immediate continuation return a [`Lift`]; methods
/// suffixed `_async` take an asynchronous continuation.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::prelude_async::*;
///
/// async fn fetch(id: u32) -> Outcome<u32> {
///     Outcome::ok_with_message(id, "fetched")
/// }
///
/// async fn example() {
///     let outcome = fetch(4)
///         .check(|id| Outcome::ok_when(*id > 0, "id must be positive"))
///         .bind_async(|id| async move { Outcome::ok_with_message(id * 10, "scaled") })
///         .await;
///
///     assert_eq!(outcome.try_value(), Some(&40));
///     assert_eq!(outcome.messages(), ["fetched", "scaled"]);
/// }
/// ```
pub trait FutureOutcomeExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Awaits the outcome, then applies an immediate delegate to it.
    #[inline]
    fn lift<R, F>(self, delegate: F) -> Lift<Self, F>
    where
        F: FnOnce(Outcome<T>) -> R,
    {
        Lift::new(self, delegate)
    }

    /// Awaits the outcome, then awaits the future the delegate builds from it.
    #[inline]
    fn lift_async<F, Next>(self, delegate: F) -> impl Future<Output = Next::Output>
    where
        F: FnOnce(Outcome<T>) -> Next,
        Next: Future,
    {
        async move { delegate(self.await).await }
    }

    /// Lifted [`Outcome::bind`].
    #[inline]
    fn bind<U, F>(self, f: F) -> Lift<Self, impl FnOnce(Outcome<T>) -> Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        self.lift(move |outcome| outcome.bind(f))
    }

    /// Lifted [`Outcome::bind_async`].
    #[inline]
    fn bind_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        self.lift_async(move |outcome| outcome.bind_async(f))
    }

    /// Lifted [`Outcome::map`].
    #[inline]
    fn map<U, F>(self, f: F) -> Lift<Self, impl FnOnce(Outcome<T>) -> Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        self.lift(move |outcome| outcome.map(f))
    }

    /// Lifted [`Outcome::map_async`].
    #[inline]
    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        self.lift_async(move |outcome| outcome.map_async(f))
    }

    /// Lifted [`Outcome::check`].
    #[inline]
    fn check<U, F>(self, f: F) -> Lift<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        F: FnOnce(&T) -> Outcome<U>,
    {
        self.lift(move |outcome| outcome.check(f))
    }

    /// Lifted [`Outcome::check_async`].
    #[inline]
    fn check_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        self.lift_async(move |outcome| outcome.check_async(f))
    }

    /// Lifted [`Outcome::check_outcome`].
    #[inline]
    fn check_outcome<U>(self, check: Outcome<U>) -> Lift<Self, impl FnOnce(Outcome<T>) -> Outcome<T>> {
        self.lift(move |outcome| outcome.check_outcome(check))
    }

    /// Lifted [`Outcome::check_if`].
    #[inline]
    fn check_if<U, P, F>(self, predicate: P, f: F) -> Lift<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> Outcome<U>,
    {
        self.lift(move |outcome| outcome.check_if(predicate, f))
    }

    /// Lifted [`Outcome::check_if_async`].
    #[inline]
    fn check_if_async<U, P, F, Fut>(self, predicate: P, f: F) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        self.lift_async(move |outcome| outcome.check_if_async(predicate, f))
    }

    /// Lifted [`Outcome::check_each`].
    #[inline]
    fn check_each<I, U, F>(self, items: I, f: F) -> Lift<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        I: IntoIterator,
        F: FnMut(I::Item, &T) -> Outcome<U>,
    {
        self.lift(move |outcome| outcome.check_each(items, f))
    }

    /// Lifted [`Outcome::check_each_async`].
    #[inline]
    fn check_each_async<I, U, F, Fut>(self, items: I, f: F) -> impl Future<Output = Outcome<T>>
    where
        I: IntoIterator,
        F: FnMut(I::Item, &T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        self.lift_async(move |outcome| outcome.check_each_async(items, f))
    }

    /// Lifted [`Outcome::combine`].
    #[inline]
    fn combine<U>(self, other: Outcome<U>) -> Lift<Self, impl FnOnce(Outcome<T>) -> Outcome<(T, U)>> {
        self.lift(move |outcome| outcome.combine(other))
    }

    /// Lifted [`Outcome::combine_value`].
    #[inline]
    fn combine_value<U>(self, other: U) -> Lift<Self, impl FnOnce(Outcome<T>) -> Outcome<(T, U)>> {
        self.lift(move |outcome| outcome.combine_value(other))
    }

    /// Lifted [`Outcome::combine_with`].
    #[inline]
    fn combine_with<U, F>(self, f: F) -> Lift<Self, impl FnOnce(Outcome<T>) -> Outcome<(T, U)>>
    where
        F: FnOnce(&T) -> Outcome<U>,
    {
        self.lift(move |outcome| outcome.combine_with(f))
    }

    /// Lifted [`Outcome::combine_with_async`].
    #[inline]
    fn combine_with_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<(T, U)>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        self.lift_async(move |outcome| outcome.combine_with_async(f))
    }

    /// Lifted [`Outcome::tap`].
    #[inline]
    fn tap<F>(self, f: F) -> Lift<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        F: FnOnce(&T),
    {
        self.lift(move |outcome| outcome.tap(f))
    }

    /// Lifted [`Outcome::tap_async`].
    #[inline]
    fn tap_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.lift_async(move |outcome| outcome.tap_async(f))
    }

    /// Lifted [`Outcome::compensate`].
    #[inline]
    fn compensate<F>(self, f: F) -> Lift<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        F: FnOnce() -> Outcome<T>,
    {
        self.lift(move |outcome| outcome.compensate(f))
    }

    /// Lifted [`Outcome::compensate_async`].
    #[inline]
    fn compensate_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        self.lift_async(move |outcome| outcome.compensate_async(f))
    }

    /// Lifted [`Outcome::match_with`].
    #[inline]
    fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> Lift<Self, impl FnOnce(Outcome<T>) -> R>
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Failure) -> R,
    {
        self.lift(move |outcome| outcome.match_with(on_success, on_failure))
    }

    /// Lifted [`Outcome::match_with_messages`].
    #[inline]
    fn match_with_messages<R, S, F>(self, on_success: S, on_failure: F) -> Lift<Self, impl FnOnce(Outcome<T>) -> R>
    where
        S: FnOnce(T, &[String]) -> R,
        F: FnOnce(Failure, &[String]) -> R,
    {
        self.lift(move |outcome| outcome.match_with_messages(on_success, on_failure))
    }

    /// Lifted [`Outcome::match_with_async`].
    #[inline]
    fn match_with_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Failure) -> FFut,
        FFut: Future<Output = R>,
    {
        self.lift_async(move |outcome| outcome.match_with_async(on_success, on_failure))
    }

    /// Lifted [`Outcome::flatten`].
    #[inline]
    fn flatten(self) -> Lift<Self, fn(Outcome<T>) -> Outcome<()>> {
        self.lift(Outcome::flatten as fn(Outcome<T>) -> Outcome<()>)
    }
}

impl<Fut, T> FutureOutcomeExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}
