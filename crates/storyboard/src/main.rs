//! Storyboard CLI binary.
//!
//! This binary provides command-line access to the pipeline:
//! - Break a script into scenes and characters
//! - Generate one storyboard frame, or a batch of frames
//! - Render placeholder frames offline

use clap::Parser;
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; the environment may already be set
    let _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    if let Err(e) = storyboard::init_tracing(cli.verbose) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
