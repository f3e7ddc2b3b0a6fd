//! Storyboard - resilient LLM pipeline for screenplay breakdowns and frames
//!
//! Story text goes in; validated scenes, characters and SVG storyboard frames come
//! out. Every upstream call is hardened with model fallback, per-attempt timeouts,
//! error classification and graceful degradation to placeholders.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use storyboard::{GeminiGenerator, ShotContext, Storyboard, StoryboardConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let storyboard = Storyboard::new(GeminiGenerator::from_env()?, StoryboardConfig::load()?);
//!
//!     let script = std::fs::read_to_string("pilot.txt")?;
//!     let parsed = storyboard.parser().parse(&script, Some("thriller"), None).await?;
//!
//!     let shot = ShotContext::builder()
//!         .shot_id("1A")
//!         .scene_context(parsed.scenes[0].location.clone())
//!         .description(parsed.scenes[0].description.clone())
//!         .build()?;
//!     let frame = storyboard.frames().generate_frame(&shot, &parsed.characters, None, None).await;
//!     println!("{}", frame.displayable());
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `gemini` (default) - Google Gemini transport and the `storyboard` binary
//!
//! # Architecture
//!
//! - `storyboard_error` - Error types
//! - `storyboard_core` - Data types, configuration, tracing setup
//! - `storyboard_interface` - `TextGenerator` transport trait
//! - `storyboard_models` - Request client, classification, diagnostic log, transports
//! - `storyboard_script` - Script parser
//! - `storyboard_frames` - Frame generator and batch orchestrator
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod pipeline;

pub use pipeline::Storyboard;

// Re-export error types
pub use storyboard_error::{
    ConfigError, GenerationError, GenerationErrorKind, IoError, JsonError, RetryableError,
    ScriptError, StoryboardError, StoryboardErrorKind, StoryboardResult, TransportError,
    TransportErrorKind,
};

// Re-export core types
pub use storyboard_core::{
    BatchConfig, BatchProgress, ClientConfig, FrameConfig, Generation, GenerationRequest,
    GenerationResult, ImageFormat, ImageOutcome, LogEntry, LogLevel, ParseOutcome,
    ParsedCharacter, ParsedScene, ParsedScript, ScriptConfig, ShotContext, StoryboardConfig,
    StyleOptions, SvgAsset, init_tracing,
};

// Re-export the transport trait
pub use storyboard_interface::TextGenerator;

// Re-export the request client
pub use storyboard_models::{
    Classification, DiagnosticLog, GenerationMetrics, RequestClient, classify,
};

#[cfg(feature = "gemini")]
pub use storyboard_models::GeminiGenerator;

// Re-export pipeline stages
pub use storyboard_frames::{BatchOrchestrator, FrameGenerator, placeholder_svg};
pub use storyboard_script::ScriptParser;
