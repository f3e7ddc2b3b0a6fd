//! Transport trait for upstream text generation.

use async_trait::async_trait;
use std::sync::Arc;
use storyboard_error::TransportError;

/// A transport that turns a prompt into text using a named model.
///
/// Implementations should report HTTP status codes through
/// [`TransportError::with_status`] whenever they are known; the request client
/// falls back to keyword matching on the message otherwise.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt` with the given model and sampling temperature.
    async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, TransportError>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, TransportError> {
        (**self).generate_text(model, prompt, temperature).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, TransportError> {
        (**self).generate_text(model, prompt, temperature).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}
