//! Google Gemini transport.
//!
//! Wraps `gemini-rust` behind [`TextGenerator`]. One SDK client is created lazily
//! per model name and reused afterwards.

use async_trait::async_trait;
use gemini_rust::generation::model::FinishReason;
use gemini_rust::{Gemini, client::Model};
use std::collections::HashMap;
use std::env;
use std::sync::{Mutex, PoisonError};
use storyboard_error::{ConfigError, StoryboardResult, TransportError, TransportErrorKind};
use storyboard_interface::TextGenerator;
use tracing::{debug, instrument};

/// Gemini transport keyed by model name.
///
/// # Examples
///
/// ```no_run
/// use storyboard_models::GeminiGenerator;
///
/// // Requires GEMINI_API_KEY
/// let generator = GeminiGenerator::from_env().unwrap();
/// ```
pub struct GeminiGenerator {
    api_key: String,
    clients: Mutex<HashMap<String, Gemini>>,
}

impl std::fmt::Debug for GeminiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiGenerator")
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl GeminiGenerator {
    /// Create a transport with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Create a transport reading the key from `GEMINI_API_KEY`.
    pub fn from_env() -> StoryboardResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| ConfigError::new("GEMINI_API_KEY environment variable not set"))?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::new("GEMINI_API_KEY is empty").into());
        }
        Ok(Self::new(api_key))
    }

    /// Convert a model name to a gemini-rust model, adding the "models/" prefix
    /// the API expects for names the SDK has no variant for.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other if other.starts_with("models/") => Model::Custom(other.to_string()),
            other => Model::Custom(format!("models/{}", other)),
        }
    }

    fn client_for(&self, model: &str) -> Result<Gemini, TransportError> {
        let mut clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = clients.get(model) {
            return Ok(client.clone());
        }
        debug!(model, "Creating Gemini client");
        let client = Gemini::with_model(&self.api_key, Self::model_name_to_enum(model))
            .map_err(|e| {
                TransportError::new(format!("failed to create Gemini client for {model}: {e}"))
            })?;
        clients.insert(model.to_string(), client.clone());
        Ok(client)
    }

    /// Convert a gemini-rust error, keeping any HTTP status it mentions.
    fn parse_gemini_error(err: impl std::fmt::Display) -> TransportError {
        let message = err.to_string();
        match Self::extract_status_code(&message) {
            Some(status) => TransportError::with_status(status, message),
            None => TransportError::new(message),
        }
    }

    /// Parses strings like "bad response from server; code 503; description: ...".
    fn extract_status_code(message: &str) -> Option<u16> {
        let start = message.find("code ")? + 5;
        let digits: String = message[start..]
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().ok()
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    #[instrument(skip(self, prompt), fields(prompt_chars = prompt.len()))]
    async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, TransportError> {
        let client = self.client_for(model)?;

        let response = client
            .generate_content()
            .with_user_message(prompt)
            .with_temperature(temperature)
            .execute()
            .await
            .map_err(Self::parse_gemini_error)?;

        let text = response.text();
        if text.trim().is_empty() {
            let blocked = response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.as_ref())
                .is_some_and(|reason| {
                    matches!(
                        reason,
                        FinishReason::Safety
                            | FinishReason::Blocklist
                            | FinishReason::ProhibitedContent
                            | FinishReason::Spii
                    )
                });
            if blocked {
                return Err(TransportError::of_kind(
                    TransportErrorKind::Blocked,
                    "response blocked by safety filters",
                ));
            }
        }
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
