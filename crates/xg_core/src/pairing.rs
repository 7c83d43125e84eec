//! Pairing of per-match input files by filename key.
//!
//! A match arrives as two files sharing a name prefix: `<key>.json` with the
//! shot events and `<key>_tracking_data.jsonl` with the tracking data. The
//! key is derived from the filename alone, never from file contents.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Suffix identifying a tracking source.
pub const TRACKING_SUFFIX: &str = "_tracking_data.jsonl";
/// Extension identifying a shot-event source.
pub const SHOTS_EXTENSION: &str = ".json";

/// A matched shots + tracking file pair for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedPair {
    pub key: String,
    pub shots: PathBuf,
    pub tracking: PathBuf,
}

#[derive(Debug, Default)]
struct Group {
    shots: Vec<PathBuf>,
    tracking: Vec<PathBuf>,
}

enum Role {
    Shots,
    Tracking,
}

/// Derive the match key and source role from a file path, or `None` for
/// files that are neither a shots nor a tracking source.
fn classify(path: &Path) -> Option<(String, Role)> {
    let name = path.file_name()?.to_str()?;
    if let Some(key) = name.strip_suffix(TRACKING_SUFFIX) {
        if key.is_empty() {
            return None;
        }
        return Some((key.to_string(), Role::Tracking));
    }
    if let Some(key) = name.strip_suffix(SHOTS_EXTENSION) {
        if key.is_empty() {
            return None;
        }
        return Some((key.to_string(), Role::Shots));
    }
    None
}

/// Group input paths into matched per-match pairs.
///
/// A group is matched only when it holds exactly one shots source and
/// exactly one tracking source; anything else (a lone file, duplicates for
/// the same key, an unrecognizable name) is reported and skipped. Paths are
/// sorted before grouping and the groups live in a `BTreeMap`, so the same
/// input set yields the same pairing in the same order regardless of how the
/// paths were passed in.
pub fn pair_files(paths: &[PathBuf]) -> Vec<MatchedPair> {
    let mut sorted: Vec<&PathBuf> = paths.iter().collect();
    sorted.sort();

    let mut groups: BTreeMap<String, Group> = BTreeMap::new();
    for path in sorted {
        match classify(path) {
            Some((key, Role::Shots)) => groups.entry(key).or_default().shots.push(path.clone()),
            Some((key, Role::Tracking)) => {
                groups.entry(key).or_default().tracking.push(path.clone())
            }
            None => log::warn!("ignoring unrecognized input file {}", path.display()),
        }
    }

    let mut pairs = Vec::new();
    for (key, group) in groups {
        match (group.shots.len(), group.tracking.len()) {
            (1, 1) => pairs.push(MatchedPair {
                key,
                shots: group.shots.into_iter().next().unwrap(),
                tracking: group.tracking.into_iter().next().unwrap(),
            }),
            (s, t) => log::warn!(
                "unmatched input group {key}: {s} shots file(s), {t} tracking file(s)"
            ),
        }
    }

    if pairs.is_empty() {
        log::warn!("no matched (shots + tracking) file pairs found");
    } else {
        log::info!("matched {} file pair(s)", pairs.len());
    }
    pairs
}
