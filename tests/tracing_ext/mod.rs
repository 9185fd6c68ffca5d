use outcome_rail::tracing_ext::OutcomeSpanExt;
use outcome_rail::Outcome;
use tracing::Span;

#[test]
fn with_span_only_touches_failures() {
    let ok = Outcome::ok_with_message(1, "fine").with_span(&Span::none());
    assert_eq!(ok.messages(), ["fine"]);

    let failed = Outcome::<u8>::fail("broken").with_span(&Span::none());
    assert_eq!(failed.messages(), ["broken", "in span 'unknown'"]);
}

#[test]
fn with_current_span_records_a_span() {
    let span = tracing::info_span!("checkout");
    let _guard = span.enter();

    let failed = Outcome::<u8>::not_found(3).with_current_span();
    assert!(failed.messages()[1].starts_with("in span '"));
}

#[test]
fn log_failure_returns_outcome_unchanged() {
    let failed = Outcome::<u8>::invalid("f", "m");
    assert_eq!(failed.clone().log_failure(), failed);
}

#[cfg(feature = "async")]
#[tokio::test]
async fn future_records_span_on_failure() {
    use outcome_rail::tracing_ext::FutureOutcomeSpanExt;

    let failed = async { Outcome::<u8>::fail("remote") }.with_span(Span::none()).await;
    assert_eq!(failed.messages(), ["remote", "in span 'unknown'"]);

    let ok = async { Outcome::ok(1) }.with_span_context().await;
    assert!(ok.messages().is_empty());
}
