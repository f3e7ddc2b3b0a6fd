//! Request client with candidate-model fallback.

use crate::{Classification, DiagnosticLog, GenerationMetrics, classify};
use std::sync::Arc;
use storyboard_core::{
    ClientConfig, Generation, GenerationRequest, GenerationResult, LogEntry, LogLevel, char_len,
    truncate_chars,
};
use storyboard_error::{GenerationError, GenerationErrorKind};
use storyboard_interface::TextGenerator;
use tokio::time::{Instant, sleep, timeout};
use tracing::{Span, debug, error, info, instrument, warn};
use uuid::Uuid;

/// Failure of one candidate attempt.
struct AttemptFailure {
    classification: Classification,
    message: String,
}

/// Hardened entry point for every upstream generation call.
///
/// Tries each candidate model in turn under a per-attempt timeout, pausing between
/// a retryable failure and the next candidate. A non-retryable failure ends the
/// request immediately. The same model is never tried twice for one request.
///
/// The client is `Send + Sync`; share it through an `Arc`.
///
/// # Examples
///
/// ```
/// use storyboard_core::{ClientConfig, GenerationRequest};
/// use storyboard_interface::MockGenerator;
/// use storyboard_models::RequestClient;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mock = MockGenerator::always("INT. HARBOR - DAWN");
/// let client = RequestClient::new(mock, ClientConfig::default());
///
/// let generation = client
///     .generate(&GenerationRequest::new("Describe a harbor", 0.3))
///     .await
///     .unwrap();
/// assert_eq!(generation.model_used(), "gemini-2.5-flash");
/// # }
/// ```
pub struct RequestClient<G> {
    generator: G,
    config: ClientConfig,
    log: Arc<DiagnosticLog>,
    metrics: GenerationMetrics,
}

impl<G: TextGenerator> RequestClient<G> {
    /// Creates a client with its own diagnostic log sized from `config`.
    pub fn new(generator: G, config: ClientConfig) -> Self {
        let log = Arc::new(DiagnosticLog::new(config.log_capacity));
        Self::with_log(generator, config, log)
    }

    /// Creates a client that records into a shared diagnostic log.
    pub fn with_log(generator: G, config: ClientConfig, log: Arc<DiagnosticLog>) -> Self {
        Self {
            generator,
            config,
            log,
            metrics: GenerationMetrics::default(),
        }
    }

    /// The diagnostic log this client records into.
    pub fn log(&self) -> &Arc<DiagnosticLog> {
        &self.log
    }

    /// Client settings.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying transport.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Models to try, in order: the hint, then the configured list, without repeats.
    pub fn candidate_models(&self, hint: Option<&str>) -> Vec<String> {
        let hint = hint.map(str::trim).filter(|h| !h.is_empty());
        let mut candidates: Vec<String> = Vec::with_capacity(self.config.models.len() + 1);
        for model in hint.into_iter().chain(self.config.models.iter().map(String::as_str)) {
            if !candidates.iter().any(|c| c == model) {
                candidates.push(model.to_string());
            }
        }
        candidates
    }

    /// Sends one request through the candidate list.
    ///
    /// # Errors
    ///
    /// - [`GenerationErrorKind::Validation`] for a blank or oversized prompt; no
    ///   transport call is made.
    /// - The classified kind of the first non-retryable failure.
    /// - [`GenerationErrorKind::ApiError`] when every candidate failed retryably;
    ///   `cause` holds the last attempt's kind and `retryable` is true.
    #[instrument(
        skip(self, request),
        fields(
            provider = self.generator.provider_name(),
            correlation,
            prompt_chars = request.prompt().len(),
            temperature = *request.temperature(),
        )
    )]
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        let correlation = correlation_token();
        Span::current().record("correlation", correlation.as_str());

        if let Err(err) = self.validate(request.prompt()) {
            warn!(reason = %err.message, "Rejected prompt");
            self.record(LogLevel::Error, "validate", &correlation, &err.message);
            return Err(err);
        }

        let prompt = self.sanitize(request.prompt());
        let candidates = self.candidate_models(request.model_hint().as_deref());
        let temperature = *request.temperature();

        self.record(
            LogLevel::Info,
            "start",
            &correlation,
            format!(
                "{} chars, temperature {:.2}, candidates [{}]",
                char_len(prompt),
                temperature,
                candidates.join(", ")
            ),
        );
        debug!(candidates = ?candidates, "Starting generation");

        let mut last_failure: Option<AttemptFailure> = None;

        for (index, model) in candidates.iter().enumerate() {
            let started = Instant::now();
            let failure = match timeout(
                self.config.timeout(),
                self.generator.generate_text(model, prompt, temperature),
            )
            .await
            {
                Ok(Ok(text)) if !text.trim().is_empty() => {
                    let elapsed = started.elapsed();
                    self.metrics.record_request(
                        self.generator.provider_name(),
                        model,
                        elapsed.as_secs_f64(),
                    );
                    self.record(
                        LogLevel::Info,
                        "attempt",
                        &correlation,
                        format!("{model}: succeeded in {}ms", elapsed.as_millis()),
                    );
                    info!(model = %model, attempt = index + 1, "Generation succeeded");
                    return Ok(Generation::new(text, model.as_str()));
                }
                Ok(Ok(_)) => AttemptFailure {
                    classification: Classification {
                        kind: GenerationErrorKind::InvalidResponse,
                        retryable: true,
                    },
                    message: "model returned blank text".to_string(),
                },
                Ok(Err(err)) => AttemptFailure {
                    classification: classify(&err),
                    message: err.message,
                },
                Err(_) => AttemptFailure {
                    classification: Classification {
                        kind: GenerationErrorKind::Timeout,
                        retryable: true,
                    },
                    message: format!("no response within {}s", self.config.timeout_secs),
                },
            };

            let Classification { kind, retryable } = failure.classification;
            self.metrics.record_error(
                self.generator.provider_name(),
                model,
                kind,
                started.elapsed().as_secs_f64(),
            );

            if !retryable {
                error!(model = %model, kind = %kind, message = %failure.message, "Non-retryable failure");
                self.record(
                    LogLevel::Error,
                    "attempt",
                    &correlation,
                    format!("{model}: {kind}, not retryable: {}", failure.message),
                );
                return Err(GenerationError::new(
                    kind,
                    format!("{model}: {}", failure.message),
                    false,
                ));
            }

            warn!(model = %model, kind = %kind, message = %failure.message, "Attempt failed");
            self.record(
                LogLevel::Warn,
                "attempt",
                &correlation,
                format!("{model}: {kind}: {}", failure.message),
            );
            last_failure = Some(failure);

            if index + 1 < candidates.len() {
                self.metrics
                    .record_fallback(self.generator.provider_name(), model);
                self.record(
                    LogLevel::Info,
                    "delay",
                    &correlation,
                    format!(
                        "waiting {}ms before {}",
                        self.config.retry_delay_ms,
                        candidates[index + 1]
                    ),
                );
                sleep(self.config.retry_delay()).await;
            }
        }

        let err = match last_failure {
            Some(last) => GenerationError::new(
                GenerationErrorKind::ApiError,
                format!(
                    "all {} candidate model(s) failed; last error: {}",
                    candidates.len(),
                    last.message
                ),
                true,
            )
            .with_cause(last.classification.kind),
            None => GenerationError::new(
                GenerationErrorKind::ApiError,
                "no candidate models configured",
                false,
            ),
        };
        error!(message = %err.message, "Generation failed");
        self.record(LogLevel::Error, "complete", &correlation, &err.message);
        Err(err)
    }

    fn validate(&self, prompt: &str) -> Result<(), GenerationError> {
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return Err(GenerationError::validation("prompt is empty"));
        }
        let chars = char_len(trimmed);
        if chars > self.config.max_prompt_chars {
            return Err(GenerationError::validation(format!(
                "prompt is {} characters, limit is {}",
                chars, self.config.max_prompt_chars
            )));
        }
        Ok(())
    }

    fn sanitize<'a>(&self, prompt: &'a str) -> &'a str {
        truncate_chars(prompt.trim(), self.config.max_prompt_chars)
    }

    fn record(&self, level: LogLevel, operation: &str, correlation: &str, details: impl Into<String>) {
        self.log
            .record(LogEntry::new(level, operation, correlation, details));
    }
}

/// Short token tying together the log records of one request.
fn correlation_token() -> String {
    Uuid::new_v4().simple().to_string().chars().take(8).collect()
}
