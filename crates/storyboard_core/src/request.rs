//! Request and result types for a single generation round-trip.

use serde::{Deserialize, Serialize};
use storyboard_error::GenerationError;

/// A prompt to send to the upstream model.
///
/// # Examples
///
/// ```
/// use storyboard_core::GenerationRequest;
///
/// let request = GenerationRequest::builder()
///     .prompt("Describe a harbor at dawn")
///     .model_hint(Some("gemini-2.5-pro".to_string()))
///     .temperature(0.3)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.model_hint().as_deref(), Some("gemini-2.5-pro"));
/// assert_eq!(*request.temperature(), 0.3);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct GenerationRequest {
    /// Prompt text
    #[builder(setter(into))]
    prompt: String,
    /// Model to try before the configured priority list
    #[builder(default, setter(into))]
    model_hint: Option<String>,
    /// Sampling temperature (0.0 to 1.0)
    #[builder(default = "0.7")]
    temperature: f32,
}

impl GenerationRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.temperature {
            Some(t) if !(0.0..=1.0).contains(&t) => {
                Err(format!("temperature must be in [0.0, 1.0], got {}", t))
            }
            _ => Ok(()),
        }
    }
}

impl GenerationRequest {
    /// Creates a request, clamping the temperature into [0.0, 1.0].
    pub fn new(prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            model_hint: None,
            temperature: temperature.clamp(0.0, 1.0),
        }
    }

    /// Creates a new request builder.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Sets the preferred model, if any.
    pub fn with_model_hint(mut self, hint: Option<&str>) -> Self {
        self.model_hint = hint.map(str::to_string);
        self
    }
}

/// Text produced by a successful round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Generation {
    /// Non-blank model output
    text: String,
    /// Candidate model that produced the output
    model_used: String,
}

impl Generation {
    /// Creates a generation record.
    pub fn new(text: impl Into<String>, model_used: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model_used: model_used.into(),
        }
    }

    /// Consumes the record, returning the text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Outcome of a generation round-trip; failures are values, never panics.
pub type GenerationResult = Result<Generation, GenerationError>;
