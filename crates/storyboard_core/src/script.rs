//! Structured screenplay data extracted from story text.

use serde::{Deserialize, Serialize};
use storyboard_error::ScriptError;

/// A validated scene.
///
/// `scene_number` is positive but not necessarily contiguous; `time_of_day` is
/// normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedScene {
    /// Scene number as given by the model
    pub scene_number: u32,
    /// Where the scene takes place
    pub location: String,
    /// Uppercase time of day, e.g. "NIGHT"
    pub time_of_day: String,
    /// What happens in the scene
    pub description: String,
}

/// A validated character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedCharacter {
    /// Character name, never blank
    pub name: String,
    /// Role in the story
    pub description: String,
    /// Physical appearance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<String>,
    /// Typical clothing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clothing: Option<String>,
}

impl ParsedCharacter {
    /// Creates a character without appearance or clothing details.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            appearance: None,
            clothing: None,
        }
    }
}

/// Result of a successful script analysis.
///
/// Always holds at least one scene and one character; entries synthesized to meet
/// that minimum are announced in `warnings`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedScript {
    /// Accepted scenes in response order
    pub scenes: Vec<ParsedScene>,
    /// Accepted characters in response order
    pub characters: Vec<ParsedCharacter>,
    /// Human-readable notes about dropped or synthesized entries
    pub warnings: Vec<String>,
}

/// Outcome of analyzing a script.
pub type ParseOutcome = Result<ParsedScript, ScriptError>;
