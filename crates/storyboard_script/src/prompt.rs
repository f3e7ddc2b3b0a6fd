//! Analysis prompt construction.

/// Genre used when the caller gives none.
const DEFAULT_GENRE: &str = "general";

/// Build the instruction asking the model to break a script into scenes and
/// characters.
///
/// The script is embedded verbatim; callers truncate it first.
///
/// # Examples
///
/// ```
/// use storyboard_script::build_analysis_prompt;
///
/// let prompt = build_analysis_prompt("MAYA walks the pier at dawn.", None);
/// assert!(prompt.contains("general"));
/// assert!(prompt.contains("MAYA walks the pier at dawn."));
/// assert!(prompt.contains("\"scenes\""));
/// ```
pub fn build_analysis_prompt(script: &str, genre: Option<&str>) -> String {
    let genre = genre
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .unwrap_or(DEFAULT_GENRE);

    format!(
        r#"You are a script supervisor preparing a {genre} story for storyboarding.

Break the script below into its distinct scenes and list every named character.

SCRIPT:
"""
{script}
"""

Respond with ONE JSON object and nothing else. Do not wrap it in markdown code fences.
The object must have exactly this shape:
{{
  "scenes": [
    {{"scene_number": 1, "location": "HARBOR PIER", "time_of_day": "DAWN", "description": "What happens in the scene"}}
  ],
  "characters": [
    {{"name": "Name", "description": "Role in the story", "appearance": "Physical look", "clothing": "Typical outfit"}}
  ]
}}

Rules:
- "scenes" and "characters" are both required arrays.
- Every scene needs scene_number (a positive integer, in story order), location, time_of_day and description, none of them empty.
- time_of_day is a short label such as DAY, NIGHT, DAWN or DUSK.
- Every character needs a non-empty name and a description. Use an empty string when appearance or clothing is unknown.
- Output valid JSON only: double-quoted keys and strings, no comments, no trailing commas."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_is_stated() {
        let prompt = build_analysis_prompt("A heist goes wrong.", Some(" noir "));
        assert!(prompt.contains("a noir story"));
    }

    #[test]
    fn test_blank_genre_falls_back() {
        let prompt = build_analysis_prompt("A heist goes wrong.", Some("  "));
        assert!(prompt.contains("a general story"));
    }

    #[test]
    fn test_mandates_fields_and_forbids_fences() {
        let prompt = build_analysis_prompt("A heist goes wrong.", None);
        for field in [
            "scene_number",
            "location",
            "time_of_day",
            "description",
            "\"characters\"",
            "name",
            "appearance",
            "clothing",
        ] {
            assert!(prompt.contains(field), "prompt is missing {field}");
        }
        assert!(prompt.contains("Do not wrap it in markdown code fences"));
    }
}
