//! Environment layer of `StoryboardConfig::load`.
//!
//! Kept in its own test binary with a single test so no other test observes the
//! process environment while it is modified.

use std::time::Duration;
use storyboard_core::StoryboardConfig;

fn set(key: &str, value: &str) {
    // SAFETY: this binary runs one test, so no other thread reads the environment.
    unsafe { std::env::set_var(key, value) }
}

fn unset(key: &str) {
    // SAFETY: see `set`.
    unsafe { std::env::remove_var(key) }
}

#[test]
fn test_environment_overrides() {
    let config = StoryboardConfig::load().unwrap();
    assert_eq!(config.client.timeout(), Duration::from_secs(45));

    set("STORYBOARD__CLIENT__TIMEOUT_SECS", "60");
    set("STORYBOARD__BATCH__DELAY_MS", "0");
    let config = StoryboardConfig::load().unwrap();
    assert_eq!(config.client.timeout(), Duration::from_secs(60));
    assert_eq!(config.batch.delay(), Duration::ZERO);
    assert_eq!(config.client.models.len(), 3);

    set("STORYBOARD__CLIENT__MODELS", "gemini-2.5-pro");
    let config = StoryboardConfig::load().unwrap();
    assert_eq!(config.client.models, ["gemini-2.5-pro"]);

    set("STORYBOARD__CLIENT__MODELS", "gemini-2.5-pro,gemini-2.0-flash");
    let config = StoryboardConfig::load().unwrap();
    assert_eq!(config.client.models, ["gemini-2.5-pro", "gemini-2.0-flash"]);

    set("STORYBOARD__CLIENT__TIMEOUT_SECS", "0");
    let err = StoryboardConfig::load().unwrap_err();
    assert!(err.to_string().contains("client.timeout_secs"));

    for key in [
        "STORYBOARD__CLIENT__TIMEOUT_SECS",
        "STORYBOARD__BATCH__DELAY_MS",
        "STORYBOARD__CLIENT__MODELS",
    ] {
        unset(key);
    }
}
