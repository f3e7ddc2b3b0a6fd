//! All pipeline stages wired to one request client.

use std::sync::Arc;
use storyboard_core::StoryboardConfig;
use storyboard_frames::{BatchOrchestrator, FrameGenerator};
use storyboard_interface::TextGenerator;
use storyboard_models::{DiagnosticLog, RequestClient};
use storyboard_script::ScriptParser;

/// Script parser, frame generator and batch orchestrator sharing one
/// [`RequestClient`] and therefore one diagnostic log.
///
/// # Examples
///
/// ```
/// use storyboard::{Storyboard, StoryboardConfig};
/// use storyboard_interface::MockGenerator;
///
/// let storyboard = Storyboard::new(MockGenerator::always("{}"), StoryboardConfig::default());
/// assert!(storyboard.log().is_empty());
/// assert_eq!(storyboard.client().config().timeout_secs, 45);
/// ```
pub struct Storyboard<G> {
    client: Arc<RequestClient<G>>,
    parser: ScriptParser<G>,
    batch: BatchOrchestrator<G>,
}

impl<G: TextGenerator> Storyboard<G> {
    /// Wire every stage to `generator` using the matching config sections.
    pub fn new(generator: G, config: StoryboardConfig) -> Self {
        let StoryboardConfig {
            client,
            script,
            frames,
            batch,
        } = config;

        let client = Arc::new(RequestClient::new(generator, client));
        let parser = ScriptParser::new(Arc::clone(&client), script);
        let frames = FrameGenerator::new(Arc::clone(&client), frames);
        let batch = BatchOrchestrator::new(frames, batch);

        Self {
            client,
            parser,
            batch,
        }
    }

    /// The shared request client.
    pub fn client(&self) -> &Arc<RequestClient<G>> {
        &self.client
    }

    /// The shared diagnostic log.
    pub fn log(&self) -> &Arc<DiagnosticLog> {
        self.client.log()
    }

    /// Script analysis stage.
    pub fn parser(&self) -> &ScriptParser<G> {
        &self.parser
    }

    /// Single-frame stage.
    pub fn frames(&self) -> &FrameGenerator<G> {
        self.batch.generator()
    }

    /// Multi-shot stage.
    pub fn batch(&self) -> &BatchOrchestrator<G> {
        &self.batch
    }
}
