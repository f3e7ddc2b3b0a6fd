//! Configuration error types.

use std::fmt;

/// A configuration source that failed to load, or a loaded value that fails
/// validation.
///
/// Validation failures name the offending `section.key` in [`ConfigError::key`]
/// so the CLI can point users at the exact setting in `storyboard.toml` or the
/// matching `STORYBOARD__SECTION__KEY` variable.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error)]
pub struct ConfigError {
    /// What went wrong
    pub message: String,
    /// Dotted key of the rejected setting, e.g. `client.timeout_secs`
    pub key: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// A failure not tied to one setting, such as an unreadable file.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard_error::ConfigError;
    ///
    /// let err = ConfigError::new("GEMINI_API_KEY environment variable not set");
    /// assert_eq!(err.key, None);
    /// assert!(err.to_string().starts_with("Configuration Error: GEMINI_API_KEY"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            key: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// A setting whose value was rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard_error::ConfigError;
    ///
    /// let err = ConfigError::invalid("batch.delay_ms", "must not be negative");
    /// assert_eq!(err.key.as_deref(), Some("batch.delay_ms"));
    /// assert!(err.to_string().contains("batch.delay_ms: must not be negative"));
    /// ```
    #[track_caller]
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::new(message)
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration Error: ")?;
        if let Some(key) = &self.key {
            write!(f, "{key}: ")?;
        }
        write!(f, "{} at line {} in {}", self.message, self.line, self.file)
    }
}
