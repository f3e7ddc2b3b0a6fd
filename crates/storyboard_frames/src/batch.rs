//! Sequential frame generation for many shots.

use crate::FrameGenerator;
use std::collections::HashMap;
use storyboard_core::{BatchConfig, BatchProgress, ImageOutcome, ParsedCharacter, ShotContext, StyleOptions};
use storyboard_interface::TextGenerator;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

/// Runs a [`FrameGenerator`] over a list of shots, one at a time.
///
/// Shots never run concurrently, and a failed shot never stops the batch. The
/// configured delay separates consecutive shots to stay under upstream rate limits.
pub struct BatchOrchestrator<G> {
    generator: FrameGenerator<G>,
    config: BatchConfig,
}

impl<G: TextGenerator> BatchOrchestrator<G> {
    /// Creates an orchestrator around `generator`.
    pub fn new(generator: FrameGenerator<G>, config: BatchConfig) -> Self {
        Self { generator, config }
    }

    /// The wrapped frame generator.
    pub fn generator(&self) -> &FrameGenerator<G> {
        &self.generator
    }

    /// Generate a frame for every shot.
    ///
    /// `on_progress` is called before each shot with that shot as `current_shot`,
    /// then once more at the end with `current_shot` cleared. Results are keyed by
    /// shot id; when ids repeat, the later shot's outcome is kept.
    #[instrument(skip_all, fields(shots = shots.len()))]
    pub async fn generate_batch(
        &self,
        shots: &[ShotContext],
        characters: &[ParsedCharacter],
        style: Option<&StyleOptions>,
        model_hint: Option<&str>,
        mut on_progress: Option<&mut (dyn FnMut(&BatchProgress) + Send)>,
    ) -> HashMap<String, ImageOutcome> {
        let mut progress = BatchProgress {
            total: shots.len(),
            ..BatchProgress::default()
        };
        let mut results = HashMap::with_capacity(shots.len());

        for (index, shot) in shots.iter().enumerate() {
            progress.current_shot = Some(shot.shot_id().clone());
            if let Some(report) = on_progress.as_deref_mut() {
                report(&progress);
            }

            let outcome = self
                .generator
                .generate_frame(shot, characters, style, model_hint)
                .await;

            if outcome.is_success() {
                progress.completed += 1;
            } else {
                progress.failed += 1;
                debug!(shot_id = %shot.shot_id(), "Shot fell back to placeholder");
            }

            if results.insert(shot.shot_id().clone(), outcome).is_some() {
                warn!(shot_id = %shot.shot_id(), "Duplicate shot id; keeping the later result");
            }

            if index + 1 < shots.len() {
                sleep(self.config.delay()).await;
            }
        }

        progress.current_shot = None;
        if let Some(report) = on_progress.as_deref_mut() {
            report(&progress);
        }

        info!(
            completed = progress.completed,
            failed = progress.failed,
            "Batch finished"
        );
        results
    }
}
