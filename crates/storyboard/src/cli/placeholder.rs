//! Placeholder command handler.

use std::process::ExitCode;
use storyboard::{StoryboardResult, placeholder_svg};

/// Print the placeholder frame for a shot.
pub fn run_placeholder(shot: &str, angle: &str, size: &str) -> StoryboardResult<ExitCode> {
    println!("{}", placeholder_svg(size, angle, shot));
    Ok(ExitCode::SUCCESS)
}
