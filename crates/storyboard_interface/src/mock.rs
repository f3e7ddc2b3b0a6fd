//! Scripted transport for tests.

use crate::TextGenerator;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use storyboard_error::TransportError;

/// What the mock does for one call.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text
    Text(String),
    /// Fail with this error
    Error(TransportError),
    /// Never complete; exercises caller timeouts
    Hang,
}

impl MockReply {
    /// Shorthand for [`MockReply::Text`].
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Shorthand for an uncategorized [`MockReply::Error`].
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(TransportError::new(message))
    }

    /// Shorthand for a [`MockReply::Error`] with an HTTP status.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Error(TransportError::with_status(status, message))
    }
}

/// A recorded call.
#[derive(Debug, Clone, PartialEq)]
pub struct MockCall {
    /// Model requested
    pub model: String,
    /// Prompt sent
    pub prompt: String,
    /// Temperature sent
    pub temperature: f32,
}

/// Transport double replaying scripted replies in order.
///
/// Once the script is exhausted every call gets the fallback reply, or an error if
/// none was set.
///
/// # Examples
///
/// ```rust,ignore
/// use storyboard_interface::{MockGenerator, MockReply, TextGenerator};
///
/// let mock = MockGenerator::sequence([
///     MockReply::status(404, "model not found"),
///     MockReply::text("ok"),
/// ]);
///
/// assert!(mock.generate_text("a", "prompt", 0.5).await.is_err());
/// assert_eq!(mock.generate_text("b", "prompt", 0.5).await.unwrap(), "ok");
/// ```
#[derive(Debug, Default)]
pub struct MockGenerator {
    script: Mutex<VecDeque<MockReply>>,
    fallback: Option<MockReply>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockGenerator {
    /// Mock that answers every call with `text`.
    pub fn always(text: impl Into<String>) -> Self {
        Self::with_fallback(MockReply::Text(text.into()))
    }

    /// Mock that answers every call with `reply`.
    pub fn with_fallback(reply: MockReply) -> Self {
        Self {
            fallback: Some(reply),
            ..Self::default()
        }
    }

    /// Mock that replays `replies` once each, then errors.
    pub fn sequence(replies: impl IntoIterator<Item = MockReply>) -> Self {
        Self {
            script: Mutex::new(replies.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Replace the fallback used once the script runs out.
    pub fn then(mut self, reply: MockReply) -> Self {
        self.fallback = Some(reply);
        self
    }

    /// Every call made so far.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Models requested, in call order.
    pub fn called_models(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.model).collect()
    }

    fn next_reply(&self) -> MockReply {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .or_else(|| self.fallback.clone())
            .unwrap_or_else(|| MockReply::error("mock script exhausted"))
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, TransportError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(MockCall {
                model: model.to_string(),
                prompt: prompt.to_string(),
                temperature,
            });

        match self.next_reply() {
            MockReply::Text(text) => Ok(text),
            MockReply::Error(err) => Err(err),
            MockReply::Hang => std::future::pending().await,
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
