//! Deterministic stand-in frames.

use storyboard_core::{ShotContext, SvgAsset, char_len, truncate_chars};

const DESCRIPTION_CHARS: usize = 40;

/// Render the placeholder frame for a shot.
///
/// A 400×300 wireframe with a solid border, a dashed inner frame, the framing
/// label (`SIZE - ANGLE`, or `SHOT` when both are blank) and the description cut
/// to 40 characters. The same input always yields the same markup.
///
/// # Examples
///
/// ```
/// use storyboard_frames::placeholder_svg;
///
/// let svg = placeholder_svg("wide", "low angle", "Maya & Elias on the pier");
/// let markup = svg.as_str();
///
/// assert!(markup.starts_with("<svg"));
/// assert!(markup.ends_with("</svg>"));
/// assert!(markup.contains("WIDE - LOW ANGLE"));
/// assert!(markup.contains("Maya &amp; Elias"));
/// ```
pub fn placeholder_svg(shot_size: &str, camera_angle: &str, description: &str) -> SvgAsset {
    let label = framing_label(shot_size, camera_angle);
    let caption = caption(description);

    SvgAsset::new(format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 300" width="400" height="300">"##,
            r##"<rect x="1" y="1" width="398" height="298" fill="#ffffff" stroke="#000000" stroke-width="2"/>"##,
            r##"<rect x="20" y="20" width="360" height="260" fill="none" stroke="#999999" stroke-width="1" stroke-dasharray="8 6"/>"##,
            r##"<text x="200" y="142" text-anchor="middle" font-family="sans-serif" font-size="16" font-weight="bold" fill="#333333">{}</text>"##,
            r##"<text x="200" y="170" text-anchor="middle" font-family="sans-serif" font-size="12" fill="#666666">{}</text>"##,
            "</svg>"
        ),
        xml_escape(&label),
        xml_escape(&caption)
    ))
}

/// Placeholder for a [`ShotContext`].
pub fn placeholder_for(shot: &ShotContext) -> SvgAsset {
    placeholder_svg(shot.shot_size(), shot.camera_angle(), shot.description())
}

fn framing_label(shot_size: &str, camera_angle: &str) -> String {
    let parts: Vec<String> = [shot_size, camera_angle]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(str::to_uppercase)
        .collect();

    if parts.is_empty() {
        "SHOT".to_string()
    } else {
        parts.join(" - ")
    }
}

fn caption(description: &str) -> String {
    let description = description.trim();
    if description.is_empty() {
        "No description".to_string()
    } else if char_len(description) > DESCRIPTION_CHARS {
        format!("{}...", truncate_chars(description, DESCRIPTION_CHARS))
    } else {
        description.to_string()
    }
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_variants() {
        assert_eq!(framing_label("close-up", "high angle"), "CLOSE-UP - HIGH ANGLE");
        assert_eq!(framing_label("", " dutch "), "DUTCH");
        assert_eq!(framing_label(" ", ""), "SHOT");
    }

    #[test]
    fn test_caption_truncation() {
        let long = "A lone figure crosses the rain-slicked square at midnight";
        let cut = caption(long);
        assert_eq!(cut, format!("{}...", &long[..40]));
        assert_eq!(caption("   "), "No description");
        assert_eq!(caption("Short"), "Short");
    }

    #[test]
    fn test_escapes_markup() {
        assert_eq!(
            xml_escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &apos;Jerry&apos;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            placeholder_svg("wide", "eye level", "Harbor"),
            placeholder_svg("wide", "eye level", "Harbor")
        );
        let svg = placeholder_svg("", "", "");
        assert!(svg.as_str().contains(">SHOT<"));
        assert!(svg.as_str().contains(">No description<"));
        assert!(svg.as_str().contains(r#"viewBox="0 0 400 300""#));
    }
}
