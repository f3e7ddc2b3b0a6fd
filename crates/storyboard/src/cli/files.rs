//! File helpers for command handlers.

use serde_json::Value;
use std::path::Path;
use storyboard::{IoError, JsonError, ParsedCharacter, StoryboardResult};

/// Read a UTF-8 file.
pub fn read_text(path: &Path) -> StoryboardResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| IoError::new(path.display().to_string(), e.to_string()).into())
}

/// Read and deserialize a JSON file.
pub fn read_json<T>(path: &Path) -> StoryboardResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|e| {
        JsonError::new(format!("Failed to parse {}: {}", path.display(), e)).into()
    })
}

/// Read a character list, accepting either a bare array or a parse result
/// holding a `characters` array.
pub fn read_characters(path: Option<&Path>) -> StoryboardResult<Vec<ParsedCharacter>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let value: Value = read_json(path)?;
    let list = match value {
        Value::Object(mut fields) => fields.remove("characters").unwrap_or(Value::Null),
        other => other,
    };
    serde_json::from_value(list).map_err(|e| {
        JsonError::new(format!(
            "{} does not hold a character list: {}",
            path.display(),
            e
        ))
        .into()
    })
}

/// Write a file, creating parent directories.
pub fn write_text(path: &Path, contents: &str) -> StoryboardResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| IoError::new(parent.display().to_string(), e.to_string()))?;
    }
    std::fs::write(path, contents)
        .map_err(|e| IoError::new(path.display().to_string(), e.to_string()).into())
}
