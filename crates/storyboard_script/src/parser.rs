//! Script analysis through the request client.

use crate::{build_analysis_prompt, extract_json_object, parse_json, validate_characters, validate_scenes};
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;
use storyboard_core::{
    GenerationRequest, ParseOutcome, ParsedCharacter, ParsedScene, ParsedScript, ScriptConfig,
    char_len, truncate_chars,
};
use storyboard_error::{GenerationError, GenerationErrorKind, ScriptError};
use storyboard_interface::TextGenerator;
use storyboard_models::RequestClient;
use tracing::{Span, info, instrument, warn};

/// Appended to a script that was cut down to the analysis limit.
pub const TRUNCATION_MARKER: &str = "\n\n[... script truncated for analysis ...]";

const INVALID_RESPONSE_MESSAGE: &str =
    "The AI returned an invalid response. Please try again.";

/// Breaks story text into scenes and characters.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use storyboard_core::{ClientConfig, ScriptConfig};
/// use storyboard_interface::MockGenerator;
/// use storyboard_models::RequestClient;
/// use storyboard_script::ScriptParser;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mock = MockGenerator::always(r#"{"scenes": [], "characters": []}"#);
/// let client = Arc::new(RequestClient::new(mock, ClientConfig::default()));
/// let parser = ScriptParser::new(client, ScriptConfig::default());
///
/// let script = "MAYA walks the empty pier at dawn, searching the fog for her brother's boat.";
/// let parsed = parser.parse(script, Some("drama"), None).await.unwrap();
///
/// // Nothing usable came back, so one scene and one character were synthesized
/// assert_eq!(parsed.scenes.len(), 1);
/// assert_eq!(parsed.characters[0].name, "Protagonist");
/// assert_eq!(parsed.warnings.len(), 2);
/// # }
/// ```
pub struct ScriptParser<G> {
    client: Arc<RequestClient<G>>,
    config: ScriptConfig,
}

impl<G: TextGenerator> ScriptParser<G> {
    /// Creates a parser sending its requests through `client`.
    pub fn new(client: Arc<RequestClient<G>>, config: ScriptConfig) -> Self {
        Self { client, config }
    }

    /// Parser settings.
    pub fn config(&self) -> &ScriptConfig {
        &self.config
    }

    /// Analyze `script`.
    ///
    /// # Errors
    ///
    /// Fails for blank or too-short input without calling the model, when every
    /// candidate model fails, or when the response is not a JSON object holding
    /// `scenes` and `characters` arrays. Once the payload has that shape the
    /// analysis succeeds, synthesizing a scene or character if none survive
    /// validation.
    #[instrument(
        skip(self, script),
        fields(script_chars, genre = genre.unwrap_or("general"), truncated)
    )]
    pub async fn parse(
        &self,
        script: &str,
        genre: Option<&str>,
        model_hint: Option<&str>,
    ) -> ParseOutcome {
        let script = script.trim();
        if script.is_empty() {
            return Err(ScriptError::new(
                GenerationErrorKind::Validation,
                "A script is required to generate a storyboard.",
                false,
            ));
        }

        let chars = char_len(script);
        Span::current().record("script_chars", chars);
        if chars < self.config.min_chars {
            return Err(ScriptError::new(
                GenerationErrorKind::Validation,
                format!(
                    "The script is too short to analyze. Please provide at least {} characters.",
                    self.config.min_chars
                ),
                false,
            ));
        }

        let mut warnings = Vec::new();
        let body: Cow<'_, str> = if chars > self.config.max_chars {
            Span::current().record("truncated", true);
            warnings.push(format!(
                "The script was longer than {} characters; only the beginning was analyzed.",
                self.config.max_chars
            ));
            Cow::Owned(format!(
                "{}{}",
                truncate_chars(script, self.config.max_chars),
                TRUNCATION_MARKER
            ))
        } else {
            Cow::Borrowed(script)
        };

        let request = GenerationRequest::new(
            build_analysis_prompt(&body, genre),
            self.config.temperature,
        )
        .with_model_hint(model_hint);

        let generation = self.client.generate(&request).await.map_err(|err| {
            warn!(error = %err, "Script analysis request failed");
            to_script_error(&err)
        })?;

        let payload = extract_json_object(generation.text())
            .ok_or_else(|| {
                warn!(model = %generation.model_used(), "No JSON object in response");
                invalid_response()
            })
            .and_then(|json| parse_json::<Value>(json).map_err(|_| invalid_response()))?;

        let (Some(Value::Array(scene_entries)), Some(Value::Array(character_entries))) =
            (payload.get("scenes"), payload.get("characters"))
        else {
            warn!("Response is missing the scenes or characters array");
            return Err(invalid_response());
        };

        let mut scenes = validate_scenes(scene_entries, &mut warnings);
        let mut characters = validate_characters(character_entries, &mut warnings);

        if scenes.is_empty() {
            scenes.push(ParsedScene {
                scene_number: 1,
                location: "UNSPECIFIED".to_string(),
                time_of_day: "DAY".to_string(),
                description: truncate_chars(script, self.config.excerpt_chars).to_string(),
            });
            warnings.push(
                "No scenes could be identified; a single scene was created from the opening of the script."
                    .to_string(),
            );
        }

        if characters.is_empty() {
            characters.push(ParsedCharacter::new(
                "Protagonist",
                "Main character of the story",
            ));
            warnings.push(
                "No characters could be identified; a generic protagonist was added.".to_string(),
            );
        }

        info!(
            scenes = scenes.len(),
            characters = characters.len(),
            warnings = warnings.len(),
            model = %generation.model_used(),
            "Script analyzed"
        );

        Ok(ParsedScript {
            scenes,
            characters,
            warnings,
        })
    }
}

#[track_caller]
fn invalid_response() -> ScriptError {
    ScriptError::new(
        GenerationErrorKind::InvalidResponse,
        INVALID_RESPONSE_MESSAGE,
        true,
    )
}

fn to_script_error(err: &GenerationError) -> ScriptError {
    let kind = err.effective_kind();
    ScriptError::new(kind, user_message(kind), err.retryable)
}

fn user_message(kind: GenerationErrorKind) -> &'static str {
    match kind {
        GenerationErrorKind::Timeout => {
            "The analysis took too long. Please try a shorter script or try again later."
        }
        GenerationErrorKind::RateLimit => {
            "There have been too many requests. Please wait a moment and try again."
        }
        GenerationErrorKind::SafetyBlock => {
            "The script was flagged by safety filters. Please revise the content and try again."
        }
        GenerationErrorKind::Validation => {
            "The script is too long or invalid. Please check it and try again."
        }
        GenerationErrorKind::InvalidResponse
        | GenerationErrorKind::ApiError
        | GenerationErrorKind::Network => {
            "The AI service is temporarily unavailable. Please try again in a few minutes."
        }
    }
}
