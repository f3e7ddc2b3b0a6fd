//! Layered configuration for the generation pipeline.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from storyboard.toml)
//! - User overrides (~/.config/storyboard/storyboard.toml, then ./storyboard.toml)
//! - Environment overrides (`STORYBOARD__CLIENT__TIMEOUT_SECS=60`)
//!
//! Every field also has a serde default, so partial files are accepted.

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use storyboard_error::{ConfigError, StoryboardResult};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../storyboard.toml");

/// Request client settings.
///
/// # Example
///
/// ```toml
/// [client]
/// models = ["gemini-2.5-flash", "gemini-2.0-flash"]
/// timeout_secs = 45
/// retry_delay_ms = 2000
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Candidate models in priority order
    pub models: Vec<String>,
    /// Wall-clock budget per attempt
    pub timeout_secs: u64,
    /// Pause between a retryable failure and the next candidate
    pub retry_delay_ms: u64,
    /// Longest accepted prompt, in characters
    pub max_prompt_chars: usize,
    /// Diagnostic log capacity
    pub log_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            models: vec![
                "gemini-2.5-flash".to_string(),
                "gemini-2.0-flash".to_string(),
                "gemini-2.0-flash-lite".to_string(),
            ],
            timeout_secs: 45,
            retry_delay_ms: 2000,
            max_prompt_chars: 30_000,
            log_capacity: 100,
        }
    }
}

impl ClientConfig {
    /// Per-attempt timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Delay before trying the next candidate.
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

/// Script parser settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// Shortest analyzable script, in characters after trimming
    pub min_chars: usize,
    /// Longest script embedded verbatim; longer input is truncated
    pub max_chars: usize,
    /// Sampling temperature for analysis
    pub temperature: f32,
    /// Length of the excerpt used for a synthesized scene
    pub excerpt_chars: usize,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            min_chars: 50,
            max_chars: 25_000,
            temperature: 0.3,
            excerpt_chars: 200,
        }
    }
}

/// Frame generator settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Sampling temperature for illustration
    pub temperature: f32,
    /// Shortest accepted SVG, in characters
    pub min_svg_chars: usize,
    /// Longest accepted SVG, in characters
    pub max_svg_chars: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            min_svg_chars: 50,
            max_svg_chars: 100_000,
        }
    }
}

/// Batch orchestrator settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Pause between consecutive shots
    pub delay_ms: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { delay_ms: 1000 }
    }
}

impl BatchConfig {
    /// Inter-shot delay.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Top-level pipeline configuration.
///
/// # Example
///
/// ```no_run
/// use storyboard_core::StoryboardConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoryboardConfig::load()?;
/// println!("first candidate: {}", config.client.models[0]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct StoryboardConfig {
    /// Request client settings
    #[serde(default)]
    pub client: ClientConfig,
    /// Script parser settings
    #[serde(default)]
    pub script: ScriptConfig,
    /// Frame generator settings
    #[serde(default)]
    pub frames: FrameConfig,
    /// Batch orchestrator settings
    #[serde(default)]
    pub batch: BatchConfig,
}

impl StoryboardConfig {
    /// Load configuration from the bundled defaults overlaid with a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> StoryboardResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: environment > current dir > home dir > bundled.
    ///
    /// User config files are optional and silently skipped when absent. Variables
    /// take the form `STORYBOARD__SECTION__KEY`; `STORYBOARD__CLIENT__MODELS` is a
    /// comma-separated list.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source is malformed or the result fails validation.
    #[instrument]
    pub fn load() -> StoryboardResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyboard/storyboard.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("storyboard").required(false))
            .add_source(
                Environment::with_prefix("STORYBOARD")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("client.models"),
            );

        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.client.models.iter().all(|m| m.trim().is_empty()) {
            return Err(ConfigError::invalid("client.models", "must name at least one model"));
        }
        if self.client.timeout_secs == 0 {
            return Err(ConfigError::invalid("client.timeout_secs", "must be positive"));
        }
        if self.client.max_prompt_chars == 0 {
            return Err(ConfigError::invalid("client.max_prompt_chars", "must be positive"));
        }
        if self.client.log_capacity == 0 {
            return Err(ConfigError::invalid("client.log_capacity", "must be positive"));
        }
        if self.script.min_chars > self.script.max_chars {
            return Err(ConfigError::invalid(
                "script.min_chars",
                format!(
                    "{} exceeds script.max_chars ({})",
                    self.script.min_chars, self.script.max_chars
                ),
            ));
        }
        if self.frames.min_svg_chars > self.frames.max_svg_chars {
            return Err(ConfigError::invalid(
                "frames.min_svg_chars",
                format!(
                    "{} exceeds frames.max_svg_chars ({})",
                    self.frames.min_svg_chars, self.frames.max_svg_chars
                ),
            ));
        }
        for (name, t) in [
            ("script.temperature", self.script.temperature),
            ("frames.temperature", self.frames.temperature),
        ] {
            if !(0.0..=1.0).contains(&t) {
                return Err(ConfigError::invalid(
                    name,
                    format!("must be in [0.0, 1.0], got {}", t),
                ));
            }
        }
        Ok(())
    }
}
