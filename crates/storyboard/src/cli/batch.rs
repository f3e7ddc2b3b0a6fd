//! Batch command handler.

use super::commands::BatchArgs;
use super::files::{read_characters, read_json, write_text};
use std::collections::HashSet;
use std::process::ExitCode;
use storyboard::{BatchProgress, ShotContext, Storyboard, StoryboardResult, TextGenerator};
use tracing::{info, instrument, warn};

/// Generate a frame for every shot and write `<shot_id>.svg` files.
///
/// Failed shots are written as placeholders. The exit code is non-zero only when
/// no shot produced a real frame.
#[instrument(skip_all, fields(shots = %args.shots.display()))]
pub async fn run_batch<G: TextGenerator>(
    storyboard: &Storyboard<G>,
    args: &BatchArgs,
) -> StoryboardResult<ExitCode> {
    let shots: Vec<ShotContext> = read_json(&args.shots)?;
    let characters = read_characters(args.characters.as_deref())?;
    let style = args.style.to_options();

    let mut report = |progress: &BatchProgress| match &progress.current_shot {
        Some(shot_id) => eprintln!(
            "[{}/{}] generating {}",
            progress.processed() + 1,
            progress.total,
            shot_id
        ),
        None => eprintln!(
            "done: {} generated, {} placeholders",
            progress.completed, progress.failed
        ),
    };

    let results = storyboard
        .batch()
        .generate_batch(
            &shots,
            &characters,
            style.as_ref(),
            args.model.as_deref(),
            Some(&mut report),
        )
        .await;

    let ids: Vec<&str> = shots.iter().map(|shot| shot.shot_id().as_str()).collect();
    let mut generated = 0;
    for (shot_id, file_name) in output_names(&ids) {
        let Some(outcome) = results.get(shot_id) else {
            continue;
        };
        let path = args.out_dir.join(&file_name);
        write_text(&path, outcome.displayable().as_str())?;
        if let Some(message) = outcome.user_message() {
            eprintln!("{}: {}", shot_id, message);
        } else {
            generated += 1;
        }
    }

    info!(generated, total = results.len(), "Batch written");
    if generated == 0 && !results.is_empty() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// One `.svg` file name per distinct shot id, in first-seen order.
///
/// Ids that sanitise to the same stem get a numeric suffix so no frame overwrites
/// another.
fn output_names<'a>(shot_ids: &[&'a str]) -> Vec<(&'a str, String)> {
    let mut seen_ids = HashSet::new();
    let mut taken = HashSet::new();
    let mut names = Vec::new();

    for &shot_id in shot_ids {
        if !seen_ids.insert(shot_id) {
            continue;
        }
        let stem = file_stem(shot_id);
        let mut name = format!("{stem}.svg");
        let mut suffix = 2;
        while !taken.insert(name.clone()) {
            name = format!("{stem}-{suffix}.svg");
            suffix += 1;
        }
        if suffix > 2 {
            warn!(shot_id, file = %name, "Shot id collides with another after sanitising");
        }
        names.push((shot_id, name));
    }
    names
}

/// Shot id made safe for use as a file name.
fn file_stem(shot_id: &str) -> String {
    let stem: String = shot_id
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "shot".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colliding_ids_get_distinct_files() {
        let names = output_names(&["a/b", "a_b", "a b", "scene-1"]);

        let files: Vec<&str> = names.iter().map(|(_, file)| file.as_str()).collect();
        assert_eq!(files, ["a_b.svg", "a_b-2.svg", "a_b-3.svg", "scene-1.svg"]);
        assert_eq!(names[1].0, "a_b");
    }

    #[test]
    fn test_repeated_id_written_once() {
        let names = output_names(&["s1", "s2", "s1"]);

        assert_eq!(
            names,
            [("s1", "s1.svg".to_string()), ("s2", "s2.svg".to_string())]
        );
    }

    #[test]
    fn test_suffix_skips_names_already_taken() {
        let names = output_names(&["a_b-2", "a/b", "a_b"]);

        let files: Vec<&str> = names.iter().map(|(_, file)| file.as_str()).collect();
        assert_eq!(files, ["a_b-2.svg", "a_b.svg", "a_b-3.svg"]);
    }
}
