//! User-facing failure of a script analysis.

use crate::GenerationErrorKind;

/// Script parsing failure carrying a message fit for end users.
///
/// # Examples
///
/// ```
/// use storyboard_error::{GenerationErrorKind, ScriptError};
///
/// let err = ScriptError::new(
///     GenerationErrorKind::Validation,
///     "A script is required.",
///     false,
/// );
/// assert!(err.user_message.contains("required"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Script Error: {} ({}) at line {} in {}", user_message, kind, line, file)]
pub struct ScriptError {
    /// Internal category of the failure
    pub kind: GenerationErrorKind,
    /// Short, non-technical explanation
    pub user_message: String,
    /// Whether resubmitting the same script may succeed
    pub retryable: bool,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ScriptError {
    /// Create a new ScriptError at the current location.
    #[track_caller]
    pub fn new(
        kind: GenerationErrorKind,
        user_message: impl Into<String>,
        retryable: bool,
    ) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            user_message: user_message.into(),
            retryable,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl crate::RetryableError for ScriptError {
    fn is_retryable(&self) -> bool {
        self.retryable
    }
}
