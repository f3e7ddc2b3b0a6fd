// End-to-end pipeline over a scripted transport.

use std::collections::HashSet;
use std::sync::Arc;
use storyboard::{
    BatchProgress, ShotContext, Storyboard, StoryboardConfig, StyleOptions,
};
use storyboard_interface::{MockGenerator, MockReply};

const ANALYSIS: &str = r#"{
  "scenes": [
    {"scene_number": 1, "location": "LIGHTHOUSE", "time_of_day": "night", "description": "Elias trims the lamp as the storm hits."},
    {"scene_number": 2, "location": "HARBOR", "time_of_day": "dawn", "description": "Maya rows out to find him."}
  ],
  "characters": [
    {"name": "Elias", "description": "Lighthouse keeper", "appearance": "White beard", "clothing": "Oilskin coat"},
    {"name": "Maya", "description": "His granddaughter", "appearance": "", "clothing": "Yellow raincoat"}
  ]
}"#;

const FRAME: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 300"><path d="M0 220 L400 220" stroke="black" fill="none"/></svg>"#;

const STORY: &str = "Night. A storm batters the lighthouse where old ELIAS trims the lamp. \
At dawn his granddaughter MAYA rows out across the harbor to bring him home.";

#[tokio::test(start_paused = true)]
async fn test_script_to_frames() -> anyhow::Result<()> {
    let mock = Arc::new(
        MockGenerator::sequence([
            MockReply::text(ANALYSIS),
            MockReply::text(FRAME),
            MockReply::status(503, "The model is overloaded"),
        ])
        .then(MockReply::text(FRAME)),
    );
    let storyboard = Storyboard::new(Arc::clone(&mock), StoryboardConfig::default());

    let parsed = storyboard.parser().parse(STORY, Some("drama"), None).await?;
    assert_eq!(parsed.scenes.len(), 2);
    assert_eq!(parsed.scenes[1].time_of_day, "DAWN");

    let shots: Vec<ShotContext> = parsed
        .scenes
        .iter()
        .map(|scene| {
            ShotContext::new(
                format!("scene-{}", scene.scene_number),
                format!("{} - {}", scene.location, scene.time_of_day),
                scene.description.as_str(),
                "eye level",
                "wide",
            )
        })
        .collect();

    let mut reports = Vec::new();
    let mut record = |progress: &BatchProgress| reports.push(progress.clone());
    let style = StyleOptions::default().mood("stormy");
    let results = storyboard
        .batch()
        .generate_batch(
            &shots,
            &parsed.characters,
            Some(&style),
            None,
            Some(&mut record),
        )
        .await;

    assert_eq!(results.len(), 2);
    assert!(results.values().all(|outcome| outcome.is_success()));
    let last = reports.last().unwrap();
    assert_eq!((last.completed, last.failed), (2, 0));

    // Scene 2 fell back from the first candidate to the second
    let models = mock.called_models();
    assert_eq!(
        models,
        [
            "gemini-2.5-flash",
            "gemini-2.5-flash",
            "gemini-2.5-flash",
            "gemini-2.0-flash"
        ]
    );

    // The frame prompt for scene 2 only describes Maya
    let scene_two_prompt = &mock.calls()[3].prompt;
    assert!(scene_two_prompt.contains("Maya"));
    assert!(!scene_two_prompt.contains("Elias"));

    // Every stage recorded into the one shared log, one token per request
    let tokens: HashSet<_> = storyboard
        .log()
        .snapshot()
        .iter()
        .map(|entry| entry.correlation().clone())
        .collect();
    assert_eq!(tokens.len(), 3);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_config_sections_reach_each_stage() {
    let mut config = StoryboardConfig::default();
    config.client.models = vec!["only-model".to_string()];
    config.frames.temperature = 0.2;
    config.script.min_chars = 10;

    let mock = Arc::new(MockGenerator::always(FRAME));
    let storyboard = Storyboard::new(Arc::clone(&mock), config);

    assert_eq!(storyboard.parser().config().min_chars, 10);
    assert_eq!(storyboard.frames().config().temperature, 0.2);

    let shot = ShotContext::new("1", "", "A gull lands on the rail", "", "");
    let outcome = storyboard.frames().generate_frame(&shot, &[], None, None).await;

    assert!(outcome.is_success());
    assert_eq!(mock.calls()[0].model, "only-model");
    assert_eq!(mock.calls()[0].temperature, 0.2);
}
