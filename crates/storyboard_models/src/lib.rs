//! Request client and model transports for the storyboard pipeline.
//!
//! [`RequestClient`] wraps any [`TextGenerator`](storyboard_interface::TextGenerator)
//! with the hardening every upstream call needs:
//!
//! - Candidate-model fallback (request hint first, then the configured list)
//! - A wall-clock timeout per attempt
//! - A fixed pause between a retryable failure and the next candidate
//! - Error classification into [`GenerationErrorKind`](storyboard_error::GenerationErrorKind)
//! - A bounded, in-memory [`DiagnosticLog`] keyed by correlation token
//!
//! # Available Transports
//!
//! - **Gemini** (Google) - Enable with `gemini` feature
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use storyboard_core::{ClientConfig, GenerationRequest};
//! use storyboard_models::{GeminiGenerator, RequestClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RequestClient::new(GeminiGenerator::from_env()?, ClientConfig::default());
//! let generation = client
//!     .generate(&GenerationRequest::new("Describe a harbor at dawn", 0.7))
//!     .await?;
//! println!("{} said: {}", generation.model_used(), generation.text());
//! # Ok(())
//! # }
//! # }
//! ```

mod classify;
mod client;
mod log;
mod metrics;

pub use classify::{Classification, classify, classify_message};
pub use client::RequestClient;
pub use log::DiagnosticLog;
pub use metrics::GenerationMetrics;

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::GeminiGenerator;
