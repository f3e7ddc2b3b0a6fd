//! Screenplay analysis for the storyboard pipeline.
//!
//! [`ScriptParser`] turns free-form story text into validated
//! [`ParsedScene`](storyboard_core::ParsedScene)s and
//! [`ParsedCharacter`](storyboard_core::ParsedCharacter)s:
//!
//! 1. Length checks and truncation of oversized input
//! 2. A prompt demanding one strict JSON object
//! 3. JSON extraction tolerant of markdown fences and chatter
//! 4. Per-entry validation; bad entries are dropped with a warning
//! 5. A synthesized scene or character when none survive
//!
//! Upstream failures become [`ScriptError`](storyboard_error::ScriptError)s with
//! messages fit for end users.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod parser;
mod prompt;
mod validate;

pub use extraction::{extract_json_object, parse_json};
pub use parser::{ScriptParser, TRUNCATION_MARKER};
pub use prompt::build_analysis_prompt;
pub use validate::{validate_characters, validate_scenes};
