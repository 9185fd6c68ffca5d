//! Tracing integration for outcomes.
//!
//! Failed outcomes can record the span they failed in as an extra message,
//! and can be logged as `tracing` events.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::alloc_type::String;
use crate::types::Outcome;

#[cfg(feature = "async")]
use core::future::Future;
#[cfg(feature = "async")]
use core::pin::Pin;
#[cfg(feature = "async")]
use core::task::{Context, Poll};
#[cfg(feature = "async")]
use pin_project_lite::pin_project;

fn span_message(span: &Span) -> String {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    alloc::format!("in span '{}'", name)
}

/// Extension trait attaching span information to failed outcomes.
pub trait OutcomeSpanExt: Sized {
    /// Appends the current span's name to the log if the outcome failed.
    fn with_current_span(self) -> Self {
        self.with_span(&Span::current())
    }

    /// Appends `span`'s name to the log if the outcome failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::tracing_ext::OutcomeSpanExt;
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<u8> = Outcome::fail("boom").with_span(&tracing::Span::none());
    /// assert_eq!(outcome.messages(), ["boom", "in span 'unknown'"]);
    /// ```
    fn with_span(self, span: &Span) -> Self;

    /// Emits a `WARN` event describing the failure, if any.
    fn log_failure(self) -> Self;
}

impl<T> OutcomeSpanExt for Outcome<T> {
    fn with_span(self, span: &Span) -> Self {
        if self.is_success() {
            return self;
        }
        self.with_message(span_message(span))
    }

    fn log_failure(self) -> Self {
        if let Some(failure) = self.try_failure() {
            tracing::warn!(
                kind = %failure.kind(),
                weight = failure.weight(),
                messages = ?self.messages(),
                "outcome failed: {}",
                failure
            );
        }
        self
    }
}

/// Extension trait for futures of outcomes that records the span on failure.
#[cfg(feature = "async")]
pub trait FutureOutcomeSpanExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Records the span current at call time if the outcome fails.
    fn with_span_context(self) -> SpanOutcomeFuture<Self> {
        SpanOutcomeFuture { inner: self, span: Span::current() }
    }

    /// Records `span` if the outcome fails.
    fn with_span(self, span: Span) -> SpanOutcomeFuture<Self> {
        SpanOutcomeFuture { inner: self, span }
    }
}

#[cfg(feature = "async")]
impl<F, T> FutureOutcomeSpanExt<T> for F where F: Future<Output = Outcome<T>> {}

#[cfg(feature = "async")]
pin_project! {
    /// Future wrapper that records a span on failure.
    ///
    /// Created by [`FutureOutcomeSpanExt::with_span_context`] or
    /// [`FutureOutcomeSpanExt::with_span`].
    #[must_use = "futures do nothing unless polled"]
    pub struct SpanOutcomeFuture<F> {
        #[pin]
        inner: F,
        span: Span,
    }
}

#[cfg(feature = "async")]
impl<F, T> Future for SpanOutcomeFuture<F>
where
    F: Future<Output = Outcome<T>>,
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        match this.inner.poll(cx) {
            Poll::Ready(outcome) => Poll::Ready(OutcomeSpanExt::with_span(outcome, this.span)),
            Poll::Pending => Poll::Pending,
        }
    }
}
