//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use storyboard::StyleOptions;

/// Storyboard - turn story text into scenes, characters and storyboard frames
#[derive(Parser, Debug)]
#[command(name = "storyboard")]
#[command(about = "Turn story text into scenes, characters and SVG storyboard frames", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Break a script into scenes and characters, printed as JSON
    Parse {
        /// Path to the script text
        #[arg(long)]
        script: PathBuf,

        /// Genre hint, e.g. "noir"
        #[arg(long)]
        genre: Option<String>,

        /// Model to try first
        #[arg(long)]
        model: Option<String>,
    },

    /// Generate one storyboard frame
    Frame(FrameArgs),

    /// Generate frames for every shot in a JSON file, one SVG per shot
    Batch(BatchArgs),

    /// Print the placeholder frame for a shot without calling any model
    Placeholder {
        /// What happens in the shot
        #[arg(long, default_value = "")]
        shot: String,

        /// Camera angle
        #[arg(long, default_value = "")]
        angle: String,

        /// Shot size
        #[arg(long, default_value = "")]
        size: String,
    },
}

/// Arguments of the `frame` command
#[derive(Args, Debug)]
pub struct FrameArgs {
    /// Scene heading or summary
    #[arg(long, default_value = "")]
    pub scene: String,

    /// What happens in the shot
    #[arg(long)]
    pub shot: String,

    /// Camera angle, e.g. "low angle"
    #[arg(long, default_value = "")]
    pub angle: String,

    /// Shot size, e.g. "close-up"
    #[arg(long, default_value = "")]
    pub size: String,

    /// JSON file holding the character list
    #[arg(long)]
    pub characters: Option<PathBuf>,

    /// Art direction
    #[command(flatten)]
    pub style: StyleArgs,

    /// Model to try first
    #[arg(long)]
    pub model: Option<String>,

    /// Write the SVG here instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments of the `batch` command
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON file holding the shot list
    #[arg(long)]
    pub shots: PathBuf,

    /// JSON file holding the character list
    #[arg(long)]
    pub characters: Option<PathBuf>,

    /// Art direction
    #[command(flatten)]
    pub style: StyleArgs,

    /// Directory receiving <shot_id>.svg files
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Model to try first
    #[arg(long)]
    pub model: Option<String>,
}

/// Optional art direction shared by frame commands
#[derive(Args, Debug, Clone, Default)]
pub struct StyleArgs {
    /// Emotional tone, e.g. "ominous"
    #[arg(long)]
    pub mood: Option<String>,

    /// Composition hint, e.g. "rule of thirds"
    #[arg(long)]
    pub composition: Option<String>,

    /// Drawing style override
    #[arg(long)]
    pub art_style: Option<String>,
}

impl StyleArgs {
    /// The style options, or `None` when no flag was given.
    pub fn to_options(&self) -> Option<StyleOptions> {
        if self.mood.is_none() && self.composition.is_none() && self.art_style.is_none() {
            return None;
        }
        Some(StyleOptions {
            mood: self.mood.clone(),
            composition: self.composition.clone(),
            art_style: self.art_style.clone(),
        })
    }
}
