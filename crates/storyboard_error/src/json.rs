//! JSON error types.

use std::fmt;

/// JSON that could not be encoded or decoded.
///
/// Model output is often large, so only a short [`JsonError::preview`] of the
/// rejected payload is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error)]
pub struct JsonError {
    /// The serde error message
    pub message: String,
    /// Leading characters of the rejected payload, when there was one
    pub preview: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            preview: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Attach the start of the payload that failed to parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard_error::JsonError;
    ///
    /// let err = JsonError::new("expected `,` or `}` at line 1 column 12")
    ///     .with_preview("{\"scenes\": [");
    /// assert!(err.to_string().contains("(payload: {\"scenes\": [...)"));
    /// ```
    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = Some(preview.into());
        self
    }
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JSON Error: {}", self.message)?;
        if let Some(preview) = &self.preview {
            write!(f, " (payload: {preview}...)")?;
        }
        write!(f, " at line {} in {}", self.line, self.file)
    }
}
