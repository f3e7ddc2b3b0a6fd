// Request client behavior against a scripted transport.
//
// Every test runs on a paused clock, so timeouts and inter-candidate delays
// complete instantly and elapsed time is exact.

use std::sync::Arc;
use std::time::Duration;
use storyboard_core::{ClientConfig, GenerationRequest, LogLevel};
use storyboard_error::GenerationErrorKind;
use storyboard_interface::{MockGenerator, MockReply};
use storyboard_models::{DiagnosticLog, RequestClient};
use tokio::time::Instant;

fn client(mock: &Arc<MockGenerator>) -> RequestClient<Arc<MockGenerator>> {
    RequestClient::new(Arc::clone(mock), ClientConfig::default())
}

fn request(prompt: &str) -> GenerationRequest {
    GenerationRequest::new(prompt, 0.3)
}

fn count_operation(client: &RequestClient<Arc<MockGenerator>>, operation: &str) -> usize {
    client
        .log()
        .snapshot()
        .iter()
        .filter(|entry| entry.operation() == operation)
        .count()
}

#[tokio::test(start_paused = true)]
async fn test_first_candidate_success() -> anyhow::Result<()> {
    let mock = Arc::new(MockGenerator::always("INT. HARBOR - DAWN"));
    let client = client(&mock);

    let generation = client.generate(&request("Describe a harbor")).await?;

    assert_eq!(generation.text(), "INT. HARBOR - DAWN");
    assert_eq!(generation.model_used(), "gemini-2.5-flash");
    assert_eq!(mock.call_count(), 1);
    assert_eq!(count_operation(&client, "delay"), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_falls_back_through_candidates() -> anyhow::Result<()> {
    let mock = Arc::new(
        MockGenerator::sequence([
            MockReply::status(404, "model not found"),
            MockReply::status(503, "The model is overloaded"),
        ])
        .then(MockReply::text("ok")),
    );
    let client = client(&mock);

    let started = Instant::now();
    let generation = client.generate(&request("Describe a harbor")).await?;

    assert_eq!(generation.model_used(), "gemini-2.0-flash-lite");
    assert_eq!(
        mock.called_models(),
        vec!["gemini-2.5-flash", "gemini-2.0-flash", "gemini-2.0-flash-lite"]
    );
    assert_eq!(started.elapsed(), Duration::from_secs(4));
    assert_eq!(count_operation(&client, "delay"), 2);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_exhaustion_waits_between_every_pair_of_candidates() {
    let mock = Arc::new(MockGenerator::with_fallback(MockReply::status(
        503,
        "The model is overloaded",
    )));
    let client = client(&mock);

    let started = Instant::now();
    let err = client
        .generate(&request("Describe a harbor"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, GenerationErrorKind::ApiError);
    assert!(err.retryable);
    assert_eq!(err.cause, Some(GenerationErrorKind::ApiError));
    assert!(err.message.contains("The model is overloaded"));
    assert_eq!(mock.call_count(), 3);
    // N candidates, N-1 delays
    assert_eq!(started.elapsed(), Duration::from_secs(4));
    assert_eq!(count_operation(&client, "delay"), 2);
}

#[tokio::test(start_paused = true)]
async fn test_non_retryable_stops_immediately() {
    let mock = Arc::new(
        MockGenerator::sequence([MockReply::status(403, "permission denied")])
            .then(MockReply::text("never reached")),
    );
    let client = client(&mock);

    let started = Instant::now();
    let err = client
        .generate(&request("Describe a harbor"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, GenerationErrorKind::ApiError);
    assert!(!err.retryable);
    assert_eq!(mock.call_count(), 1);
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_safety_block_is_not_retried() {
    let mock = Arc::new(
        MockGenerator::sequence([MockReply::error("Response was blocked due to SAFETY")])
            .then(MockReply::text("never reached")),
    );
    let client = client(&mock);

    let err = client
        .generate(&request("Describe a harbor"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, GenerationErrorKind::SafetyBlock);
    assert!(!err.retryable);
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_hung_attempt_times_out_and_falls_back() -> anyhow::Result<()> {
    let mock = Arc::new(MockGenerator::sequence([MockReply::Hang]).then(MockReply::text("ok")));
    let client = client(&mock);

    let started = Instant::now();
    let generation = client.generate(&request("Describe a harbor")).await?;

    assert_eq!(generation.model_used(), "gemini-2.0-flash");
    assert_eq!(started.elapsed(), Duration::from_secs(45 + 2));

    let warnings: Vec<_> = client
        .log()
        .snapshot()
        .into_iter()
        .filter(|entry| *entry.level() == LogLevel::Warn)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].details().contains("timed out"));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_every_attempt_timing_out_reports_timeout_cause() {
    let mock = Arc::new(MockGenerator::with_fallback(MockReply::Hang));
    let client = client(&mock);

    let err = client
        .generate(&request("Describe a harbor"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, GenerationErrorKind::ApiError);
    assert_eq!(err.effective_kind(), GenerationErrorKind::Timeout);
    assert!(err.retryable);
}

#[tokio::test(start_paused = true)]
async fn test_blank_output_tries_next_model() -> anyhow::Result<()> {
    let mock = Arc::new(MockGenerator::sequence([MockReply::text("  \n ")]).then(MockReply::text("ok")));
    let client = client(&mock);

    let generation = client.generate(&request("Describe a harbor")).await?;

    assert_eq!(generation.text(), "ok");
    assert_eq!(mock.call_count(), 2);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_blank_prompt_rejected_without_call() {
    let mock = Arc::new(MockGenerator::always("ok"));
    let client = client(&mock);

    let err = client.generate(&request("   \n\t")).await.unwrap_err();

    assert_eq!(err.kind, GenerationErrorKind::Validation);
    assert!(!err.retryable);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_oversized_prompt_rejected_without_call() {
    let mock = Arc::new(MockGenerator::always("ok"));
    let client = client(&mock);

    let err = client
        .generate(&request(&"a".repeat(30_001)))
        .await
        .unwrap_err();

    assert_eq!(err.kind, GenerationErrorKind::Validation);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_prompt_is_trimmed_and_temperature_passed() -> anyhow::Result<()> {
    let mock = Arc::new(MockGenerator::always("ok"));
    let client = client(&mock);

    client.generate(&GenerationRequest::new("  hello harbor \n", 0.7)).await?;

    let calls = mock.calls();
    assert_eq!(calls[0].prompt, "hello harbor");
    assert_eq!(calls[0].temperature, 0.7);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_model_hint_tried_first_without_repeats() -> anyhow::Result<()> {
    let mock = Arc::new(MockGenerator::with_fallback(MockReply::status(503, "overloaded")));
    let client = client(&mock);

    assert_eq!(
        client.candidate_models(Some("gemini-2.0-flash")),
        vec!["gemini-2.0-flash", "gemini-2.5-flash", "gemini-2.0-flash-lite"]
    );
    assert_eq!(
        client.candidate_models(Some("gemini-2.5-pro")),
        vec![
            "gemini-2.5-pro",
            "gemini-2.5-flash",
            "gemini-2.0-flash",
            "gemini-2.0-flash-lite"
        ]
    );
    assert_eq!(client.candidate_models(Some("  ")).len(), 3);

    let hinted = request("Describe a harbor").with_model_hint(Some("gemini-2.0-flash"));
    let _ = client.generate(&hinted).await;
    assert_eq!(
        mock.called_models(),
        vec!["gemini-2.0-flash", "gemini-2.5-flash", "gemini-2.0-flash-lite"]
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_log_entries_share_correlation_token() -> anyhow::Result<()> {
    let mock = Arc::new(MockGenerator::sequence([MockReply::status(503, "overloaded")]).then(MockReply::text("ok")));
    let client = client(&mock);

    client.generate(&request("Describe a harbor")).await?;

    let entries = client.log().snapshot();
    let operations: Vec<_> = entries.iter().map(|e| e.operation().as_str()).collect();
    assert_eq!(operations, ["start", "attempt", "delay", "attempt"]);

    let token = entries[0].correlation();
    assert_eq!(token.len(), 8);
    assert!(entries.iter().all(|e| e.correlation() == token));
    assert_eq!(client.log().for_correlation(token).len(), 4);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_log_is_bounded_and_shared() -> anyhow::Result<()> {
    let log = Arc::new(DiagnosticLog::new(3));
    let mock = Arc::new(MockGenerator::always("ok"));
    let first = RequestClient::with_log(Arc::clone(&mock), ClientConfig::default(), Arc::clone(&log));
    let second = RequestClient::with_log(Arc::clone(&mock), ClientConfig::default(), Arc::clone(&log));

    first.generate(&request("one")).await?;
    second.generate(&request("two")).await?;

    assert_eq!(log.len(), 3);
    let tokens: Vec<_> = log
        .snapshot()
        .iter()
        .map(|e| e.correlation().clone())
        .collect();
    // Oldest record of the first request was evicted
    assert_eq!(tokens[1], tokens[2]);
    assert_ne!(tokens[0], tokens[1]);

    log.clear();
    assert!(log.is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_configured_delay_and_timeout_are_honored() {
    let config = ClientConfig {
        models: vec!["a".to_string(), "b".to_string()],
        timeout_secs: 5,
        retry_delay_ms: 250,
        ..ClientConfig::default()
    };
    let mock = Arc::new(MockGenerator::with_fallback(MockReply::Hang));
    let client = RequestClient::new(Arc::clone(&mock), config);

    let started = Instant::now();
    let err = client.generate(&request("Describe a harbor")).await.unwrap_err();

    assert_eq!(err.effective_kind(), GenerationErrorKind::Timeout);
    assert_eq!(started.elapsed(), Duration::from_millis(5_000 + 250 + 5_000));
}
