//! Errors raised by text-generation transports.

/// Structured hint a transport may attach to a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum TransportErrorKind {
    /// Request failed for a reason the transport could not categorize
    #[default]
    #[display("request failed")]
    Request,
    /// The transport gave up waiting for the upstream
    #[display("timed out")]
    Timeout,
    /// Connection could not be established or was dropped
    #[display("connection failed")]
    Connection,
    /// Upstream refused to produce content
    #[display("content blocked")]
    Blocked,
}

/// Failure reported by a text-generation transport.
///
/// Transports should fill in `status` whenever an HTTP status code is known. The
/// message text is kept verbatim so that keyword classification still works for
/// transports that only surface a string.
///
/// # Examples
///
/// ```
/// use storyboard_error::{TransportError, TransportErrorKind};
///
/// let err = TransportError::with_status(429, "Resource has been exhausted (e.g. check quota).");
/// assert_eq!(err.status, Some(429));
/// assert_eq!(err.kind, TransportErrorKind::Request);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} ({}) at line {} in {}", message, kind, line, file)]
pub struct TransportError {
    /// Upstream error text
    pub message: String,
    /// HTTP status code, when the transport knows it
    pub status: Option<u16>,
    /// Structured category, when the transport knows it
    pub kind: TransportErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl TransportError {
    /// Create an uncategorized transport error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self::build(message.into(), None, TransportErrorKind::Request)
    }

    /// Create a transport error carrying an HTTP status code.
    #[track_caller]
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self::build(message.into(), Some(status), TransportErrorKind::Request)
    }

    /// Create a transport error with an explicit category.
    #[track_caller]
    pub fn of_kind(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self::build(message.into(), None, kind)
    }

    #[track_caller]
    fn build(message: String, status: Option<u16>, kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message,
            status,
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
