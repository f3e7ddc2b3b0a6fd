//! Extraction and validation of SVG payloads.

use storyboard_core::{FrameConfig, char_len, strip_code_fences};

/// Slice of `response` from the first `<svg` to the last `</svg>` inclusive.
///
/// Markdown fences are stripped first. When there is an opening tag but no
/// closing one, everything from the opening tag on is returned so validation can
/// report it.
///
/// # Examples
///
/// ```
/// use storyboard_frames::extract_svg;
///
/// let response = "Here you go:\n```svg\n<svg viewBox=\"0 0 400 300\"><rect/></svg>\n```";
/// assert_eq!(
///     extract_svg(response),
///     Some("<svg viewBox=\"0 0 400 300\"><rect/></svg>")
/// );
/// assert_eq!(extract_svg("I cannot draw that."), None);
/// ```
pub fn extract_svg(response: &str) -> Option<&str> {
    let body = strip_code_fences(response);
    let start = body.find("<svg")?;
    let end = body
        .rfind("</svg>")
        .filter(|end| *end > start)
        .map(|end| end + "</svg>".len())
        .unwrap_or(body.len());
    Some(body[start..end].trim_end())
}

/// Check that `svg` is complete markup of a sane size.
///
/// # Errors
///
/// Returns the reason the payload was rejected.
pub fn validate_svg(svg: &str, config: &FrameConfig) -> Result<(), String> {
    if !svg.starts_with("<svg") {
        return Err("payload does not start with <svg".to_string());
    }
    if !svg.contains("</svg>") {
        return Err("payload has no closing </svg> tag".to_string());
    }
    let chars = char_len(svg);
    if chars < config.min_svg_chars {
        return Err(format!(
            "payload is {} characters, minimum is {}",
            chars, config.min_svg_chars
        ));
    }
    if chars > config.max_svg_chars {
        return Err(format!(
            "payload is {} characters, maximum is {}",
            chars, config.max_svg_chars
        ));
    }
    Ok(())
}
