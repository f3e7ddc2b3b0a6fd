//! Single-frame command handler.

use super::commands::FrameArgs;
use super::files::{read_characters, write_text};
use std::process::ExitCode;
use storyboard::{ImageOutcome, ShotContext, Storyboard, StoryboardResult, TextGenerator};
use tracing::instrument;

/// Generate one frame and write it to `--out` or stdout.
///
/// On failure the placeholder is written instead and the exit code is non-zero.
#[instrument(skip_all)]
pub async fn run_frame<G: TextGenerator>(
    storyboard: &Storyboard<G>,
    args: &FrameArgs,
) -> StoryboardResult<ExitCode> {
    let characters = read_characters(args.characters.as_deref())?;
    let shot = ShotContext::new(
        "frame",
        args.scene.as_str(),
        args.shot.as_str(),
        args.angle.as_str(),
        args.size.as_str(),
    );
    let style = args.style.to_options();

    let outcome = storyboard
        .frames()
        .generate_frame(&shot, &characters, style.as_ref(), args.model.as_deref())
        .await;

    let svg = outcome.displayable().as_str();
    match &args.out {
        Some(path) => {
            write_text(path, svg)?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{svg}"),
    }

    match &outcome {
        ImageOutcome::Success { model_used, .. } => {
            eprintln!("generated with {model_used}");
            Ok(ExitCode::SUCCESS)
        }
        ImageOutcome::Failure { user_message, .. } => {
            eprintln!("{user_message} A placeholder frame was used.");
            Ok(ExitCode::FAILURE)
        }
    }
}
