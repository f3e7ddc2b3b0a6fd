//! Script analysis command handler.

use super::files::read_text;
use std::path::Path;
use std::process::ExitCode;
use storyboard::{JsonError, Storyboard, StoryboardResult, TextGenerator};
use tracing::{info, instrument};

/// Analyze a script file and print the result as JSON.
///
/// Warnings and user-facing failures go to stderr.
#[instrument(skip(storyboard), fields(script = %script.display()))]
pub async fn run_parse<G: TextGenerator>(
    storyboard: &Storyboard<G>,
    script: &Path,
    genre: Option<&str>,
    model: Option<&str>,
) -> StoryboardResult<ExitCode> {
    let text = read_text(script)?;

    match storyboard.parser().parse(&text, genre, model).await {
        Ok(parsed) => {
            for warning in &parsed.warnings {
                eprintln!("warning: {warning}");
            }
            let json = serde_json::to_string_pretty(&parsed)
                .map_err(|e| JsonError::new(format!("Failed to serialize result: {}", e)))?;
            println!("{json}");
            info!(
                scenes = parsed.scenes.len(),
                characters = parsed.characters.len(),
                "Script parsed"
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", err.user_message);
            if err.retryable {
                eprintln!("(this may succeed if you try again)");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
