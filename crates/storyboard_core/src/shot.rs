//! Shot descriptions and style hints for frame generation.

use serde::{Deserialize, Serialize};

/// Everything the frame generator needs to know about one shot.
///
/// # Examples
///
/// ```
/// use storyboard_core::ShotContext;
///
/// let shot = ShotContext::builder()
///     .shot_id("s1-01")
///     .scene_context("EXT. HARBOR - DAWN")
///     .description("Wide shot of the harbor at dawn")
///     .camera_angle("eye level")
///     .shot_size("wide")
///     .build()
///     .unwrap();
///
/// assert_eq!(shot.shot_id(), "s1-01");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ShotContext {
    /// Caller-assigned identifier, used as the batch result key
    shot_id: String,
    /// Scene heading or summary the shot belongs to
    #[builder(default)]
    #[serde(default)]
    scene_context: String,
    /// Action within the shot
    description: String,
    /// Camera angle, e.g. "low angle"
    #[builder(default)]
    #[serde(default)]
    camera_angle: String,
    /// Shot size, e.g. "close-up"
    #[builder(default)]
    #[serde(default)]
    shot_size: String,
}

impl ShotContext {
    /// Creates a shot from all of its parts.
    pub fn new(
        shot_id: impl Into<String>,
        scene_context: impl Into<String>,
        description: impl Into<String>,
        camera_angle: impl Into<String>,
        shot_size: impl Into<String>,
    ) -> Self {
        Self {
            shot_id: shot_id.into(),
            scene_context: scene_context.into(),
            description: description.into(),
            camera_angle: camera_angle.into(),
            shot_size: shot_size.into(),
        }
    }

    /// Creates a new shot builder.
    pub fn builder() -> ShotContextBuilder {
        ShotContextBuilder::default()
    }
}

/// Optional art direction for a frame.
///
/// # Examples
///
/// ```
/// use storyboard_core::StyleOptions;
///
/// let style = StyleOptions::default().mood("tense").composition("rule of thirds");
/// assert_eq!(style.mood.as_deref(), Some("tense"));
/// assert!(style.art_style.is_none());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_setters::Setters,
)]
#[setters(into, strip_option)]
pub struct StyleOptions {
    /// Emotional tone, e.g. "ominous"
    #[serde(default)]
    pub mood: Option<String>,
    /// Composition hint, e.g. "symmetrical"
    #[serde(default)]
    pub composition: Option<String>,
    /// Drawing style override
    #[serde(default)]
    pub art_style: Option<String>,
}
