//! Mapping of transport failures onto the generation error taxonomy.

use storyboard_error::{GenerationErrorKind, TransportError, TransportErrorKind};

/// Category and retry decision for one failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    /// Failure category
    pub kind: GenerationErrorKind,
    /// Whether the next candidate model should be tried
    pub retryable: bool,
}

impl Classification {
    const fn new(kind: GenerationErrorKind, retryable: bool) -> Self {
        Self { kind, retryable }
    }
}

/// Classify a transport failure.
///
/// Structured signals (transport kind, HTTP status) win over the message text.
/// Anything unrecognized is a retryable [`GenerationErrorKind::ApiError`].
///
/// # Examples
///
/// ```
/// use storyboard_error::{GenerationErrorKind, TransportError};
/// use storyboard_models::classify;
///
/// let throttled = classify(&TransportError::with_status(429, "slow down"));
/// assert_eq!(throttled.kind, GenerationErrorKind::RateLimit);
/// assert!(throttled.retryable);
///
/// let bad_key = classify(&TransportError::new("API key not valid. Please pass a valid API key."));
/// assert_eq!(bad_key.kind, GenerationErrorKind::ApiError);
/// assert!(!bad_key.retryable);
/// ```
pub fn classify(error: &TransportError) -> Classification {
    classify_structured(error).unwrap_or_else(|| classify_message(&error.message))
}

fn classify_structured(error: &TransportError) -> Option<Classification> {
    use GenerationErrorKind::*;

    match error.kind {
        TransportErrorKind::Timeout => return Some(Classification::new(Timeout, true)),
        TransportErrorKind::Connection => return Some(Classification::new(Network, true)),
        TransportErrorKind::Blocked => return Some(Classification::new(SafetyBlock, false)),
        TransportErrorKind::Request => {}
    }

    match error.status? {
        408 | 504 => Some(Classification::new(Timeout, true)),
        401 | 403 => Some(Classification::new(ApiError, false)),
        404 => Some(Classification::new(ApiError, true)),
        429 => Some(Classification::new(RateLimit, true)),
        500..=599 => Some(Classification::new(ApiError, true)),
        // 400 covers both bad keys and malformed requests; the message decides
        _ => None,
    }
}

/// Classify a failure from its message text alone.
///
/// Rules are checked in order and the first match wins.
pub fn classify_message(message: &str) -> Classification {
    use GenerationErrorKind::*;

    let msg = message.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| msg.contains(n));

    if has(&["timeout", "timed out", "deadline exceeded"]) {
        Classification::new(Timeout, true)
    } else if has(&["api key", "api_key", "invalid key"]) {
        Classification::new(ApiError, false)
    } else if has(&["quota", "rate limit", "429", "resource_exhausted", "too many requests"]) {
        Classification::new(RateLimit, true)
    } else if has(&["safety", "blocked"]) {
        Classification::new(SafetyBlock, false)
    } else if has(&["404", "not found"]) {
        Classification::new(ApiError, true)
    } else if has(&["network", "connection", "dns", "fetch"]) {
        Classification::new(Network, true)
    } else {
        Classification::new(ApiError, true)
    }
}
