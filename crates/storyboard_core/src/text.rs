//! Character-aware text helpers.

/// The longest prefix of `text` holding at most `max_chars` characters.
///
/// Never splits a UTF-8 code point.
///
/// # Examples
///
/// ```
/// use storyboard_core::truncate_chars;
///
/// assert_eq!(truncate_chars("héllo", 2), "hé");
/// assert_eq!(truncate_chars("hi", 10), "hi");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Number of characters (not bytes) in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// `response` with a surrounding markdown code fence removed.
///
/// Only a fence that opens the trimmed response is unwrapped: its language tag
/// is skipped and a closing fence at the very end is dropped. An unclosed fence
/// yields everything after it, since model output is sometimes cut off. Backticks
/// anywhere else are payload and stay untouched; callers slice the payload out
/// of whatever prose remains.
///
/// # Examples
///
/// ```
/// use storyboard_core::strip_code_fences;
///
/// assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
/// assert_eq!(strip_code_fences("  <svg></svg> "), "<svg></svg>");
/// assert_eq!(strip_code_fences("{\"cmd\": \"```ls```\"}"), "{\"cmd\": \"```ls```\"}");
/// ```
pub fn strip_code_fences(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(after) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let tag_len = after
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(after.len());
    let body = &after[tag_len..];

    body.strip_suffix("```").unwrap_or(body).trim()
}
