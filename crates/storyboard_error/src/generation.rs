//! Generation error taxonomy and retry classification.

use serde::{Deserialize, Serialize};

/// Failure categories for a generation round-trip.
///
/// # Examples
///
/// ```
/// use storyboard_error::GenerationErrorKind;
///
/// assert_eq!(GenerationErrorKind::RateLimit.to_string(), "rate limited");
/// let label: &'static str = GenerationErrorKind::SafetyBlock.into();
/// assert_eq!(label, "safety_block");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GenerationErrorKind {
    /// Caller input was malformed; never retryable
    #[display("validation failed")]
    Validation,
    /// An attempt exceeded its wall-clock budget
    #[display("timed out")]
    Timeout,
    /// Upstream throttling or quota exhaustion
    #[display("rate limited")]
    RateLimit,
    /// Content policy rejection; never retryable
    #[display("blocked by safety filters")]
    SafetyBlock,
    /// Payload failed structural or schema validation
    #[display("invalid response")]
    InvalidResponse,
    /// Generic upstream failure (credentials, missing model, server error)
    #[display("API error")]
    ApiError,
    /// Transport-level failure
    #[display("network error")]
    Network,
}

/// Generation error with source location tracking.
///
/// `retryable` tells the caller whether repeating the whole operation may succeed.
/// When the request client reports exhaustion of every candidate model, `kind` is
/// [`GenerationErrorKind::ApiError`] and `cause` records the kind of the last attempt.
///
/// # Examples
///
/// ```
/// use storyboard_error::{GenerationError, GenerationErrorKind, RetryableError};
///
/// let err = GenerationError::new(GenerationErrorKind::Timeout, "no reply after 45s", true);
/// assert!(err.is_retryable());
/// assert_eq!(err.effective_kind(), GenerationErrorKind::Timeout);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} ({}) at line {} in {}", kind, message, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Technical detail, kept out of user-facing text
    pub message: String,
    /// Whether the operation may be retried
    pub retryable: bool,
    /// Kind of the last underlying attempt, when `kind` summarizes several
    pub cause: Option<GenerationErrorKind>,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind, message: impl Into<String>, retryable: bool) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            retryable,
            cause: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a non-retryable validation failure.
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::Validation, message, false)
    }

    /// Attach the kind of the underlying attempt.
    pub fn with_cause(mut self, cause: GenerationErrorKind) -> Self {
        self.cause = Some(cause);
        self
    }

    /// The most specific kind known for this failure.
    pub fn effective_kind(&self) -> GenerationErrorKind {
        self.cause.unwrap_or(self.kind)
    }
}

/// Trait for errors that carry a retry decision.
///
/// # Examples
///
/// ```
/// use storyboard_error::{GenerationError, GenerationErrorKind, RetryableError};
///
/// let err = GenerationError::new(GenerationErrorKind::SafetyBlock, "blocked", false);
/// assert!(!err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if repeating the operation may succeed.
    ///
    /// Throttling, timeouts and unavailable models return true. Credential
    /// failures, safety blocks and malformed input return false.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for GenerationError {
    fn is_retryable(&self) -> bool {
        self.retryable
    }
}
