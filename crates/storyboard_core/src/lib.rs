//! Core data types for the storyboard generation pipeline.
//!
//! This crate provides the values exchanged between the request client, the script
//! parser and the frame generator, plus the layered configuration they share.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod image;
mod log;
mod progress;
mod request;
mod script;
mod shot;
mod telemetry;
mod text;

pub use config::{BatchConfig, ClientConfig, FrameConfig, ScriptConfig, StoryboardConfig};
pub use image::{ImageFormat, ImageOutcome, SvgAsset};
pub use log::{LogEntry, LogLevel};
pub use progress::BatchProgress;
pub use request::{
    Generation, GenerationRequest, GenerationRequestBuilder, GenerationRequestBuilderError,
    GenerationResult,
};
pub use script::{ParseOutcome, ParsedCharacter, ParsedScene, ParsedScript};
pub use shot::{ShotContext, ShotContextBuilder, ShotContextBuilderError, StyleOptions};
pub use telemetry::{default_directive, init_tracing};
pub use text::{char_len, strip_code_fences, truncate_chars};
