//! Per-entry validation of the analysis payload.
//!
//! Each entry is checked on its own. An invalid entry is dropped and explained in
//! the warnings list; it never fails the whole analysis.

use serde_json::{Map, Value};
use storyboard_core::{ParsedCharacter, ParsedScene};
use tracing::debug;

/// Validate and normalize scene entries.
///
/// Accepts `scene_number` as a positive integer or a numeric string, and the
/// camelCase keys `sceneNumber` and `timeOfDay`. Text fields are trimmed and
/// `time_of_day` is uppercased.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use storyboard_script::validate_scenes;
///
/// let entries = json!([
///     {"scene_number": 1, "location": " PIER ", "time_of_day": "dawn", "description": "Fog."},
///     {"scene_number": 0, "location": "PIER", "time_of_day": "DAY", "description": "Bad number."}
/// ]);
/// let mut warnings = Vec::new();
/// let scenes = validate_scenes(entries.as_array().unwrap(), &mut warnings);
///
/// assert_eq!(scenes.len(), 1);
/// assert_eq!(scenes[0].location, "PIER");
/// assert_eq!(scenes[0].time_of_day, "DAWN");
/// assert_eq!(warnings.len(), 1);
/// ```
pub fn validate_scenes(entries: &[Value], warnings: &mut Vec<String>) -> Vec<ParsedScene> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match scene_from(entry) {
            Ok(scene) => Some(scene),
            Err(reason) => {
                debug!(index, reason, "Dropping scene");
                warnings.push(format!("Scene entry {} was skipped: {}.", index + 1, reason));
                None
            }
        })
        .collect()
}

/// Validate and normalize character entries.
///
/// `name` must be non-blank and `description` present. Blank appearance or
/// clothing becomes `None`.
pub fn validate_characters(entries: &[Value], warnings: &mut Vec<String>) -> Vec<ParsedCharacter> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match character_from(entry) {
            Ok(character) => Some(character),
            Err(reason) => {
                debug!(index, reason, "Dropping character");
                warnings.push(format!(
                    "Character entry {} was skipped: {}.",
                    index + 1,
                    reason
                ));
                None
            }
        })
        .collect()
}

fn scene_from(entry: &Value) -> Result<ParsedScene, &'static str> {
    let fields = entry.as_object().ok_or("not an object")?;

    let scene_number = field(fields, &["scene_number", "sceneNumber"])
        .and_then(positive_number)
        .ok_or("scene_number must be a positive integer")?;
    let location = required_text(fields, &["location"]).ok_or("location is missing or empty")?;
    let time_of_day = required_text(fields, &["time_of_day", "timeOfDay"])
        .ok_or("time_of_day is missing or empty")?;
    let description =
        required_text(fields, &["description"]).ok_or("description is missing or empty")?;

    Ok(ParsedScene {
        scene_number,
        location,
        time_of_day: time_of_day.to_uppercase(),
        description,
    })
}

fn character_from(entry: &Value) -> Result<ParsedCharacter, &'static str> {
    let fields = entry.as_object().ok_or("not an object")?;

    let name = required_text(fields, &["name"]).ok_or("name is missing or empty")?;
    let description = field(fields, &["description"])
        .and_then(Value::as_str)
        .ok_or("description is missing")?
        .trim()
        .to_string();

    Ok(ParsedCharacter {
        name,
        description,
        appearance: required_text(fields, &["appearance"]),
        clothing: required_text(fields, &["clothing"]),
    })
}

/// First present, non-null value among `keys`.
fn field<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| !value.is_null())
}

/// Trimmed, non-empty string value among `keys`.
fn required_text(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    field(fields, keys)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn positive_number(value: &Value) -> Option<u32> {
    let number = match value {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    u32::try_from(number).ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scene_number_forms() {
        assert_eq!(positive_number(&json!(3)), Some(3));
        assert_eq!(positive_number(&json!(" 12 ")), Some(12));
        assert_eq!(positive_number(&json!(0)), None);
        assert_eq!(positive_number(&json!(-1)), None);
        assert_eq!(positive_number(&json!(1.5)), None);
        assert_eq!(positive_number(&json!("two")), None);
        assert_eq!(positive_number(&json!(null)), None);
    }

    #[test]
    fn test_camel_case_aliases() {
        let entry = json!({
            "sceneNumber": "2",
            "location": "WAREHOUSE",
            "timeOfDay": "night",
            "description": "The deal goes sour."
        });
        let scene = scene_from(&entry).unwrap();
        assert_eq!(scene.scene_number, 2);
        assert_eq!(scene.time_of_day, "NIGHT");
    }

    #[test]
    fn test_character_optional_fields() {
        let entry = json!({
            "name": "  Maya ",
            "description": "A dockworker",
            "appearance": "   ",
            "clothing": "Yellow raincoat"
        });
        let character = character_from(&entry).unwrap();
        assert_eq!(character.name, "Maya");
        assert_eq!(character.appearance, None);
        assert_eq!(character.clothing.as_deref(), Some("Yellow raincoat"));
    }

    #[test]
    fn test_character_requires_description_key() {
        let mut warnings = Vec::new();
        let entries = [json!({"name": "Maya"}), json!({"name": " ", "description": "?"})];
        assert!(validate_characters(&entries, &mut warnings).is_empty());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("description is missing"));
        assert!(warnings[1].contains("name is missing or empty"));
    }
}
