//! Error types for the storyboard generation pipeline.
//!
//! This crate provides the error types shared by every stage of the pipeline.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! Expected upstream failures (timeouts, throttling, malformed payloads) are values of
//! [`GenerationError`] and [`ScriptError`], returned rather than raised. The top-level
//! [`StoryboardError`] covers infrastructure failures such as configuration loading.
//!
//! # Examples
//!
//! ```
//! use storyboard_error::{ConfigError, StoryboardResult};
//!
//! fn load() -> StoryboardResult<String> {
//!     Err(ConfigError::new("Missing [client] section"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod io;
mod json;
mod script;
mod transport;

pub use config::ConfigError;
pub use error::{StoryboardError, StoryboardErrorKind, StoryboardResult};
pub use generation::{GenerationError, GenerationErrorKind, RetryableError};
pub use io::IoError;
pub use json::JsonError;
pub use script::ScriptError;
pub use transport::{TransportError, TransportErrorKind};
