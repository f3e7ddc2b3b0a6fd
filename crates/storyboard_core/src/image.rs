//! Generated frame assets.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use storyboard_error::GenerationErrorKind;

/// Encoding of a frame asset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImageFormat {
    /// Inline SVG markup
    Svg,
}

/// Inline SVG markup.
///
/// # Examples
///
/// ```
/// use storyboard_core::{ImageFormat, SvgAsset};
///
/// let asset = SvgAsset::new("<svg viewBox=\"0 0 400 300\"></svg>");
/// assert_eq!(asset.format(), ImageFormat::Svg);
/// assert!(asset.to_data_uri().starts_with("data:image/svg+xml;base64,"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct SvgAsset(String);

impl SvgAsset {
    /// Wraps SVG markup.
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the asset, returning the markup.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Always [`ImageFormat::Svg`].
    pub fn format(&self) -> ImageFormat {
        ImageFormat::Svg
    }

    /// Base64 data URI suitable for an `<img src>` or a stored image URL.
    pub fn to_data_uri(&self) -> String {
        format!("data:image/svg+xml;base64,{}", STANDARD.encode(self.0.as_bytes()))
    }
}

/// Result of generating one storyboard frame.
///
/// A failure always carries a placeholder, so callers have something to display
/// either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImageOutcome {
    /// The model produced valid SVG
    Success {
        /// Generated frame
        asset: SvgAsset,
        /// Candidate model that produced it
        model_used: String,
    },
    /// Generation failed; a placeholder stands in
    Failure {
        /// Internal category of the failure
        kind: GenerationErrorKind,
        /// Short, non-technical explanation
        user_message: String,
        /// Deterministic stand-in frame
        placeholder: SvgAsset,
    },
}

impl ImageOutcome {
    /// True for [`ImageOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The asset to display: the generated frame or the placeholder.
    pub fn displayable(&self) -> &SvgAsset {
        match self {
            Self::Success { asset, .. } => asset,
            Self::Failure { placeholder, .. } => placeholder,
        }
    }

    /// The user-facing message of a failure.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { user_message, .. } => Some(user_message),
        }
    }

    /// Format of the displayable asset.
    pub fn format(&self) -> ImageFormat {
        self.displayable().format()
    }
}
