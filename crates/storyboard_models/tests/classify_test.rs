// Classification of transport failures.

use storyboard_error::{GenerationErrorKind, TransportError, TransportErrorKind};
use storyboard_models::{Classification, classify, classify_message};

use GenerationErrorKind::*;

fn expect(error: TransportError, kind: GenerationErrorKind, retryable: bool) {
    let message = error.message.clone();
    assert_eq!(
        classify(&error),
        Classification { kind, retryable },
        "classifying {message:?}"
    );
}

#[test]
fn test_status_codes() {
    expect(TransportError::with_status(408, "request timeout"), Timeout, true);
    expect(TransportError::with_status(401, "unauthenticated"), ApiError, false);
    expect(TransportError::with_status(403, "permission denied"), ApiError, false);
    expect(TransportError::with_status(404, "models/x is not found"), ApiError, true);
    expect(TransportError::with_status(429, "slow down"), RateLimit, true);
    expect(TransportError::with_status(500, "internal"), ApiError, true);
    expect(TransportError::with_status(503, "overloaded"), ApiError, true);
}

#[test]
fn test_status_400_defers_to_message() {
    expect(
        TransportError::with_status(400, "API key not valid. Please pass a valid API key."),
        ApiError,
        false,
    );
    expect(TransportError::with_status(400, "malformed request"), ApiError, true);
}

#[test]
fn test_transport_kind_wins_over_message() {
    expect(
        TransportError::of_kind(TransportErrorKind::Timeout, "quota"),
        Timeout,
        true,
    );
    expect(
        TransportError::of_kind(TransportErrorKind::Connection, "reset by peer"),
        Network,
        true,
    );
    expect(
        TransportError::of_kind(TransportErrorKind::Blocked, "finish reason"),
        SafetyBlock,
        false,
    );
}

#[test]
fn test_message_keywords() {
    let cases = [
        ("Request timed out", Timeout, true),
        ("TIMEOUT waiting for headers", Timeout, true),
        ("invalid key supplied", ApiError, false),
        ("missing api_key parameter", ApiError, false),
        ("Quota exceeded for metric", RateLimit, true),
        ("HTTP 429", RateLimit, true),
        ("Rate limit reached", RateLimit, true),
        ("Candidate was blocked", SafetyBlock, false),
        ("SAFETY", SafetyBlock, false),
        ("404 page", ApiError, true),
        ("model not found", ApiError, true),
        ("network unreachable", Network, true),
        ("DNS lookup failed", Network, true),
        ("failed to fetch", Network, true),
        ("something odd happened", ApiError, true),
    ];

    for (message, kind, retryable) in cases {
        assert_eq!(
            classify_message(message),
            Classification { kind, retryable },
            "classifying {message:?}"
        );
    }
}

#[test]
fn test_keyword_order() {
    // Timeout is checked before everything else
    assert_eq!(classify_message("connection timed out").kind, Timeout);
    // Credentials are checked before throttling
    assert_eq!(classify_message("api key quota").kind, ApiError);
    // Throttling is checked before safety
    assert_eq!(classify_message("blocked: rate limit").kind, RateLimit);
}
