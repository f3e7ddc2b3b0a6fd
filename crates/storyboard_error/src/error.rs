//! Top-level error wrapper types.

use crate::{ConfigError, GenerationError, IoError, JsonError, ScriptError, TransportError};

/// The foundation error enum for infrastructure failures.
///
/// # Examples
///
/// ```
/// use storyboard_error::{ConfigError, StoryboardError};
///
/// let err: StoryboardError = ConfigError::new("bad toml").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryboardErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// File system error
    #[from(IoError)]
    Io(IoError),
    /// Transport construction or call error
    #[from(TransportError)]
    Transport(TransportError),
    /// Generation request failure
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Script analysis failure
    #[from(ScriptError)]
    Script(ScriptError),
}

/// Storyboard error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyboard_error::{JsonError, StoryboardResult};
///
/// fn decode() -> StoryboardResult<()> {
///     Err(JsonError::new("expected array"))?
/// }
///
/// assert!(decode().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyboard Error: {}", _0)]
pub struct StoryboardError(Box<StoryboardErrorKind>);

impl StoryboardError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryboardErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryboardErrorKind {
        &self.0
    }
}

impl<T> From<T> for StoryboardError
where
    T: Into<StoryboardErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for storyboard operations.
pub type StoryboardResult<T> = std::result::Result<T, StoryboardError>;
