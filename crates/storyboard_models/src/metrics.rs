//! Metrics for generation requests.
//!
//! Provides OpenTelemetry-based metrics for tracking per-attempt latency and
//! failures by kind, labeled with provider and model name.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;
use storyboard_error::GenerationErrorKind;

static METRICS: OnceLock<GenerationMetrics> = OnceLock::new();

/// Metrics for upstream generation attempts.
#[derive(Clone)]
pub struct GenerationMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Successful attempts
    pub requests: Counter<u64>,
    /// Failed attempts, labeled by error kind
    pub errors: Counter<u64>,
    /// Attempts that moved on to another candidate
    pub fallbacks: Counter<u64>,
    /// Attempt duration in seconds
    pub duration: Histogram<f64>,
}

impl GenerationMetrics {
    fn init() -> Self {
        let meter = global::meter("storyboard_models");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("generation.requests")
                .with_description("Successful generation attempts")
                .build(),
            errors: meter
                .u64_counter("generation.errors")
                .with_description("Failed generation attempts")
                .build(),
            fallbacks: meter
                .u64_counter("generation.fallbacks")
                .with_description("Attempts followed by another candidate model")
                .build(),
            duration: meter
                .f64_histogram("generation.duration")
                .with_unit("seconds")
                .with_description("Generation attempt duration")
                .build(),
        }
    }

    /// Get the global metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a successful attempt.
    pub fn record_request(&self, provider: &str, model: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed attempt.
    pub fn record_error(
        &self,
        provider: &str,
        model: &str,
        kind: GenerationErrorKind,
        duration_secs: f64,
    ) {
        let error_type: &'static str = kind.into();
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("error_type", error_type),
        ];
        self.errors.add(1, labels);
        self.duration.record(duration_secs, &labels[..2]);
    }

    /// Record a fallback from `model` to the next candidate.
    pub fn record_fallback(&self, provider: &str, model: &str) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
        ];
        self.fallbacks.add(1, labels);
    }
}

impl Default for GenerationMetrics {
    fn default() -> Self {
        Self::get().clone()
    }
}
