//! Illustration prompt construction.

use regex::RegexSet;
use std::fmt::Write as _;
use storyboard_core::{ParsedCharacter, ShotContext, StyleOptions};
use tracing::warn;

/// Characters whose names appear in `description` as whole words, ignoring case.
///
/// Only these are described to the model, which keeps frames consistent with the
/// cast without flooding the prompt.
///
/// # Examples
///
/// ```
/// use storyboard_core::ParsedCharacter;
/// use storyboard_frames::relevant_characters;
///
/// let cast = [
///     ParsedCharacter::new("Maya", "Dockworker"),
///     ParsedCharacter::new("Ray", "Harbor master"),
/// ];
///
/// // "Ray" inside "spray" is not a match
/// let matched = relevant_characters("MAYA ducks the spray", &cast);
/// assert_eq!(matched.len(), 1);
/// assert_eq!(matched[0].name, "Maya");
/// ```
pub fn relevant_characters<'a>(
    description: &str,
    characters: &'a [ParsedCharacter],
) -> Vec<&'a ParsedCharacter> {
    let named: Vec<&ParsedCharacter> = characters
        .iter()
        .filter(|character| !character.name.trim().is_empty())
        .collect();
    if named.is_empty() {
        return Vec::new();
    }

    let patterns = named.iter().map(|character| {
        format!(
            r"(?i)(?:^|\W){}(?:\W|$)",
            regex::escape(character.name.trim())
        )
    });
    let set = match RegexSet::new(patterns) {
        Ok(set) => set,
        Err(e) => {
            warn!(error = %e, characters = named.len(), "Could not build character name patterns");
            return Vec::new();
        }
    };

    let matched = set.matches(description);
    named
        .into_iter()
        .enumerate()
        .filter(|(index, _)| matched.matched(*index))
        .map(|(_, character)| character)
        .collect()
}

/// Build the instruction asking the model for one storyboard frame.
///
/// `characters` should already be filtered with [`relevant_characters`].
pub fn build_frame_prompt(
    shot: &ShotContext,
    characters: &[&ParsedCharacter],
    style: Option<&StyleOptions>,
) -> String {
    let mut prompt = String::from(
        "You are a storyboard artist. Draw a single storyboard frame as an SVG image.\n\n",
    );

    if !shot.scene_context().trim().is_empty() {
        let _ = writeln!(prompt, "Scene: {}", shot.scene_context().trim());
    }
    let _ = writeln!(prompt, "Shot action: {}", shot.description().trim());
    let _ = writeln!(prompt, "Framing: {}", framing(shot));

    if let Some(style) = style {
        if let Some(mood) = non_blank(&style.mood) {
            let _ = writeln!(prompt, "Mood: {mood}");
        }
        if let Some(composition) = non_blank(&style.composition) {
            let _ = writeln!(prompt, "Composition: {composition}");
        }
        if let Some(art_style) = non_blank(&style.art_style) {
            let _ = writeln!(prompt, "Drawing style: {art_style}");
        }
    }

    if !characters.is_empty() {
        prompt.push_str("\nCharacters in this shot:\n");
        for character in characters {
            let _ = write!(prompt, "- {}", character.name.trim());
            let description = character.description.trim();
            if !description.is_empty() {
                let _ = write!(prompt, ": {description}");
            }
            if let Some(appearance) = non_blank(&character.appearance) {
                let _ = write!(prompt, "; looks: {appearance}");
            }
            if let Some(clothing) = non_blank(&character.clothing) {
                let _ = write!(prompt, "; wears: {clothing}");
            }
            prompt.push('\n');
        }
    }

    prompt.push_str(
        "\nRequirements:\n\
         - Respond with raw SVG markup only, starting with <svg and ending with </svg>. No markdown fences, no commentary.\n\
         - Use viewBox=\"0 0 400 300\".\n\
         - Wireframe style: black strokes on a white background, simple shapes, no gradients.\n\
         - Do not include any text, labels or captions inside the image.\n",
    );
    prompt
}

fn framing(shot: &ShotContext) -> String {
    match (shot.shot_size().trim(), shot.camera_angle().trim()) {
        ("", "") => "medium shot, eye level".to_string(),
        (size, "") => size.to_string(),
        ("", angle) => angle.to_string(),
        (size, angle) => format!("{size}, {angle}"),
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cast() -> Vec<ParsedCharacter> {
        vec![
            ParsedCharacter::new("Maya", "Dockworker"),
            ParsedCharacter::new("Dr. Okafor", "Ship's doctor"),
            ParsedCharacter::new("Al", "Ferryman"),
        ]
    }

    #[test]
    fn test_whole_word_case_insensitive() {
        let cast = cast();
        let names = |text: &str| -> Vec<String> {
            relevant_characters(text, &cast)
                .into_iter()
                .map(|c| c.name.clone())
                .collect()
        };

        assert_eq!(names("maya waves."), ["Maya"]);
        assert_eq!(names("DR. OKAFOR kneels beside Al"), ["Dr. Okafor", "Al"]);
        assert!(names("Alone on the deck, Mayan ruins in the distance").is_empty());
    }

    #[test]
    fn test_blank_and_symbolic_names() {
        let cast = vec![
            ParsedCharacter::new("  ", "Nobody"),
            ParsedCharacter::new("Mr. [Redacted]", "Informant"),
            ParsedCharacter::new("C++", "Robot"),
            ParsedCharacter::new("Maya", "Dockworker"),
        ];

        let matched: Vec<&str> = relevant_characters("C++ hands mr. [redacted] a note", &cast)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();

        assert_eq!(matched, ["Mr. [Redacted]", "C++"]);
        assert!(relevant_characters("   ", &cast).is_empty());
        assert!(relevant_characters("Maya", &[]).is_empty());
    }

    #[test]
    fn test_prompt_sections() {
        let shot = ShotContext::builder()
            .shot_id("1")
            .scene_context("EXT. HARBOR - DAWN")
            .description("Maya hauls a rope")
            .camera_angle("low angle")
            .shot_size("close-up")
            .build()
            .unwrap();
        let cast = cast();
        let style = StyleOptions::default().mood("hopeful");

        let prompt = build_frame_prompt(
            &shot,
            &relevant_characters(shot.description(), &cast),
            Some(&style),
        );

        assert!(prompt.contains("Scene: EXT. HARBOR - DAWN"));
        assert!(prompt.contains("Framing: close-up, low angle"));
        assert!(prompt.contains("Mood: hopeful"));
        assert!(!prompt.contains("Composition:"));
        assert!(prompt.contains("- Maya: Dockworker"));
        assert!(!prompt.contains("Okafor"));
        assert!(prompt.contains("viewBox=\"0 0 400 300\""));
    }
}
