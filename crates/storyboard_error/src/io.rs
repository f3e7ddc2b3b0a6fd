//! File system error types.

/// I/O error with the affected path and source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("IO Error: {} ({}) at line {} in {}", message, path, line, file)]
pub struct IoError {
    /// The underlying error message
    pub message: String,
    /// Path being read or written
    pub path: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl IoError {
    /// Create a new IoError for `path` at the current location.
    #[track_caller]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            path: path.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
