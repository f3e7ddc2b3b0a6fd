//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storyboard binary.

mod batch;
mod commands;
mod files;
mod frame;
mod parse;
mod placeholder;

pub use commands::Cli;

use commands::Commands;
use std::process::ExitCode;
use storyboard::{GeminiGenerator, Storyboard, StoryboardConfig, StoryboardResult};
use tracing::debug;

/// Load configuration and dispatch the requested command.
pub async fn run(cli: Cli) -> StoryboardResult<ExitCode> {
    let config = match &cli.config {
        Some(path) => StoryboardConfig::from_file(path)?,
        None => StoryboardConfig::load()?,
    };
    debug!(models = ?config.client.models, "Configuration loaded");

    match cli.command {
        Commands::Parse {
            script,
            genre,
            model,
        } => {
            let storyboard = connect(config)?;
            parse::run_parse(&storyboard, &script, genre.as_deref(), model.as_deref()).await
        }
        Commands::Frame(args) => frame::run_frame(&connect(config)?, &args).await,
        Commands::Batch(args) => batch::run_batch(&connect(config)?, &args).await,
        Commands::Placeholder { shot, angle, size } => {
            placeholder::run_placeholder(&shot, &angle, &size)
        }
    }
}

fn connect(config: StoryboardConfig) -> StoryboardResult<Storyboard<GeminiGenerator>> {
    Ok(Storyboard::new(GeminiGenerator::from_env()?, config))
}
