//! Match processor: drives pairing, loading, alignment and enrichment
//! across all input files.

use std::path::PathBuf;

use rayon::prelude::*;

use crate::error::EnrichError;
use crate::identity::IdentityMaps;
use crate::models::enriched::EnrichedShot;
use crate::pairing::{self, MatchedPair};
use crate::{align, enrich, io};

/// Run the full enrichment pass over a flat list of input files.
///
/// Matches are independent: each pair is processed on its own rayon worker
/// and the per-match rows are concatenated in pairing order, so the output
/// is deterministic for a given input set. A match that cannot be processed
/// (unreadable file, empty shot list, zero frames) is skipped with a
/// diagnostic and leaves the rest of the run intact; the only terminal
/// condition is an input set with no matched pairs at all.
pub fn process_matches(
    paths: &[PathBuf],
    maps: &IdentityMaps,
) -> Result<Vec<EnrichedShot>, EnrichError> {
    let pairs = pairing::pair_files(paths);
    if pairs.is_empty() {
        return Err(EnrichError::NoMatchedPairs);
    }

    let rows: Vec<EnrichedShot> =
        pairs.par_iter().map(|pair| process_pair(pair, maps)).flatten().collect();

    log::info!("enriched {} shot(s) across {} matched pair(s)", rows.len(), pairs.len());
    Ok(rows)
}

/// Enrich every shot of one matched pair. Returns an empty vector when the
/// match has to be skipped.
fn process_pair(pair: &MatchedPair, maps: &IdentityMaps) -> Vec<EnrichedShot> {
    log::info!("processing match {}", pair.key);

    let shots = match io::load_shots(&pair.shots) {
        Ok(shots) => shots,
        Err(err) => {
            log::warn!("skipping match {}: {err}", pair.key);
            return Vec::new();
        }
    };
    if shots.is_empty() {
        log::warn!("no shots found in {}", pair.shots.display());
        return Vec::new();
    }

    let (metadata, frames) = match io::load_tracking(&pair.tracking) {
        Ok(loaded) => loaded,
        Err(err) => {
            log::warn!("skipping match {}: {err}", pair.key);
            return Vec::new();
        }
    };
    if frames.is_empty() {
        log::warn!("no tracking frames found in {}", pair.tracking.display());
        return Vec::new();
    }

    let frame_times: Vec<f64> = frames.iter().map(|f| f.video_timestamp).collect();

    let rows: Vec<EnrichedShot> = shots
        .iter()
        .filter_map(|shot| {
            let idx = align::nearest_frame_index(&frame_times, shot.video_timestamp);
            enrich::enrich_shot(shot, &frames[idx], &metadata, maps)
        })
        .collect();

    log::info!("match {}: {} of {} shot(s) enriched", pair.key, rows.len(), shots.len());
    rows
}
