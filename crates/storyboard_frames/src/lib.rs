//! Storyboard frame generation.
//!
//! [`FrameGenerator`] asks the model for a wireframe SVG of one shot and validates
//! what comes back. Every failure, whether bad input, an upstream error or an
//! unusable payload, yields a deterministic placeholder frame alongside a
//! user-facing message, so callers always have something to display.
//!
//! [`BatchOrchestrator`] runs the generator over a list of shots one at a time,
//! pausing between shots and reporting progress.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod batch;
mod generator;
mod placeholder;
mod prompt;
mod svg;

pub use batch::BatchOrchestrator;
pub use generator::FrameGenerator;
pub use placeholder::{placeholder_for, placeholder_svg};
pub use prompt::{build_frame_prompt, relevant_characters};
pub use svg::{extract_svg, validate_svg};
