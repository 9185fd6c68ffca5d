//! The await-then-delegate future every asynchronous combinator is built on.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

pin_project! {
    /// Awaits an inner future, then hands its output to a delegate.
    ///
    /// The delegate runs exactly once, after the inner future is ready, so an
    /// immediate combinator lifted this way behaves exactly as it does on an
    /// immediate outcome.
    ///
    /// # Cancel Safety
    ///
    /// `Lift` is cancel-safe if the inner future is cancel-safe. The delegate
    /// is only called when the inner future returns `Poll::Ready`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::async_ext::Lift;
    /// use outcome_rail::Outcome;
    ///
    /// async fn example() {
    ///     let doubled = Lift::new(async { Outcome::ok(21) }, |o: Outcome<i32>| o.map(|x| x * 2)).await;
    ///     assert_eq!(doubled.into_value(), Some(42));
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct Lift<Fut, F> {
        #[pin]
        future: Fut,
        delegate: Option<F>,
    }
}

impl<Fut, F> Lift<Fut, F> {
    /// Creates a `Lift` from a future and the delegate applied to its output.
    #[inline]
    pub fn new(future: Fut, delegate: F) -> Self {
        Self { future, delegate: Some(delegate) }
    }
}

impl<Fut, F, R> Future for Lift<Fut, F>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> R,
{
    type Output = R;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|output| {
            let delegate = this.delegate.take().expect("Lift polled after completion; this is a bug");
            delegate(output)
        })
    }
}

impl<Fut, F, R> FusedFuture for Lift<Fut, F>
where
    Fut: FusedFuture,
    F: FnOnce(Fut::Output) -> R,
{
    fn is_terminated(&self) -> bool {
        self.delegate.is_none() || self.future.is_terminated()
    }
}
