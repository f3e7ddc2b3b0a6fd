//! Single-frame generation with placeholder fallback.

use crate::{build_frame_prompt, extract_svg, placeholder_for, relevant_characters, validate_svg};
use std::sync::Arc;
use storyboard_core::{
    FrameConfig, GenerationRequest, ImageOutcome, ParsedCharacter, ShotContext, StyleOptions,
    SvgAsset,
};
use storyboard_error::GenerationErrorKind;
use storyboard_interface::TextGenerator;
use storyboard_models::RequestClient;
use tracing::{debug, info, instrument, warn};

const BLANK_DESCRIPTION_MESSAGE: &str = "A shot description is required to generate a frame.";
const INVALID_IMAGE_MESSAGE: &str = "The AI returned an invalid image. Please try again.";

/// Generates one storyboard frame per call.
///
/// Never fails outright: every problem yields [`ImageOutcome::Failure`] carrying a
/// placeholder built from the shot.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use storyboard_core::{ClientConfig, FrameConfig, ShotContext};
/// use storyboard_frames::FrameGenerator;
/// use storyboard_interface::MockGenerator;
/// use storyboard_models::RequestClient;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mock = MockGenerator::always("I'd rather describe it in words.");
/// let client = Arc::new(RequestClient::new(mock, ClientConfig::default()));
/// let frames = FrameGenerator::new(client, FrameConfig::default());
///
/// let shot = ShotContext::builder()
///     .shot_id("1")
///     .description("Wide shot of the harbor at dawn")
///     .build()
///     .unwrap();
/// let outcome = frames.generate_frame(&shot, &[], None, None).await;
///
/// assert!(!outcome.is_success());
/// assert!(outcome.user_message().unwrap().contains("invalid image"));
/// assert!(outcome.displayable().as_str().starts_with("<svg"));
/// # }
/// ```
pub struct FrameGenerator<G> {
    client: Arc<RequestClient<G>>,
    config: FrameConfig,
}

impl<G: TextGenerator> FrameGenerator<G> {
    /// Creates a generator sending its requests through `client`.
    pub fn new(client: Arc<RequestClient<G>>, config: FrameConfig) -> Self {
        Self { client, config }
    }

    /// Generator settings.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Generate the frame for `shot`.
    ///
    /// Only characters named in the shot description are described to the model.
    #[instrument(skip_all, fields(shot_id = %shot.shot_id()))]
    pub async fn generate_frame(
        &self,
        shot: &ShotContext,
        characters: &[ParsedCharacter],
        style: Option<&StyleOptions>,
        model_hint: Option<&str>,
    ) -> ImageOutcome {
        if shot.description().trim().is_empty() {
            warn!("Shot has no description");
            return failure(
                shot,
                GenerationErrorKind::Validation,
                BLANK_DESCRIPTION_MESSAGE,
            );
        }

        let cast = relevant_characters(shot.description(), characters);
        debug!(characters = cast.len(), "Building frame prompt");
        let request = GenerationRequest::new(
            build_frame_prompt(shot, &cast, style),
            self.config.temperature,
        )
        .with_model_hint(model_hint);

        let generation = match self.client.generate(&request).await {
            Ok(generation) => generation,
            Err(err) => {
                warn!(error = %err, "Frame request failed");
                let kind = err.effective_kind();
                return failure(shot, kind, user_message(kind));
            }
        };

        let Some(svg) = extract_svg(generation.text()) else {
            warn!(model = %generation.model_used(), "No SVG in response");
            return failure(
                shot,
                GenerationErrorKind::InvalidResponse,
                INVALID_IMAGE_MESSAGE,
            );
        };

        if let Err(reason) = validate_svg(svg, &self.config) {
            warn!(model = %generation.model_used(), reason = %reason, "Rejected SVG");
            return failure(
                shot,
                GenerationErrorKind::InvalidResponse,
                INVALID_IMAGE_MESSAGE,
            );
        }

        info!(model = %generation.model_used(), svg_chars = svg.len(), "Frame generated");
        ImageOutcome::Success {
            asset: SvgAsset::new(svg),
            model_used: generation.model_used().clone(),
        }
    }
}

fn failure(shot: &ShotContext, kind: GenerationErrorKind, user_message: &str) -> ImageOutcome {
    ImageOutcome::Failure {
        kind,
        user_message: user_message.to_string(),
        placeholder: placeholder_for(shot),
    }
}

fn user_message(kind: GenerationErrorKind) -> &'static str {
    match kind {
        GenerationErrorKind::Validation => "The shot details are too long or invalid.",
        GenerationErrorKind::Timeout => "Frame generation took too long. Please try again.",
        GenerationErrorKind::RateLimit => {
            "There have been too many requests. Please wait a moment and try again."
        }
        GenerationErrorKind::SafetyBlock => {
            "This shot was flagged by safety filters. Please revise the description."
        }
        GenerationErrorKind::InvalidResponse => INVALID_IMAGE_MESSAGE,
        GenerationErrorKind::ApiError | GenerationErrorKind::Network => {
            "Image generation is temporarily unavailable. Please try again later."
        }
    }
}
