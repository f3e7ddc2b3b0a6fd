//! Extraction of the JSON payload from a model response.
//!
//! Models wrap JSON in markdown fences or surround it with explanatory text even
//! when told not to. The payload is taken from the first `{` to the last `}` of the
//! unfenced response and parsed strictly.

use storyboard_core::{strip_code_fences, truncate_chars};
use storyboard_error::JsonError;

/// Slice of `response` holding its JSON object, if any.
///
/// # Examples
///
/// ```
/// use storyboard_script::extract_json_object;
///
/// let response = "Sure! Here it is:\n```json\n{\"scenes\": [], \"characters\": []}\n```";
/// assert_eq!(
///     extract_json_object(response),
///     Some("{\"scenes\": [], \"characters\": []}")
/// );
/// assert_eq!(extract_json_object("no braces here"), None);
/// ```
pub fn extract_json_object(response: &str) -> Option<&str> {
    let body = strip_code_fences(response);
    let start = body.find('{')?;
    let end = body.rfind('}')?;
    (end > start).then(|| &body[start..=end])
}

/// Parse JSON into `T`, logging a preview of the payload on failure.
///
/// # Errors
///
/// Returns a [`JsonError`] if `json` is not valid JSON for `T`.
///
/// # Examples
///
/// ```
/// use serde::Deserialize;
/// use storyboard_script::parse_json;
///
/// #[derive(Deserialize)]
/// struct Scene {
///     location: String,
/// }
///
/// let scene: Scene = parse_json(r#"{"location": "HARBOR"}"#).unwrap();
/// assert_eq!(scene.location, "HARBOR");
/// ```
pub fn parse_json<T>(json: &str) -> Result<T, JsonError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json).map_err(|e| {
        let preview = truncate_chars(json, 100);

        tracing::error!(
            error = %e,
            json_preview = %preview,
            "JSON parsing failed"
        );

        JsonError::new(format!("Failed to parse JSON: {}", e)).with_preview(preview)
    })
}
