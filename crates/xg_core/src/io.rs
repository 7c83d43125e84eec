//! Loading of the external JSON inputs.
//!
//! Three file shapes: a shots file is one JSON array of shot events; a
//! tracking file is line-delimited JSON whose first line is the roster
//! metadata and whose remaining lines are frames, recognized by the
//! presence of the `Videotimestamp` field; an identity-map file is one JSON
//! object of event-id to tracking-id entries.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::EnrichError;
use crate::identity::IdentityMaps;
use crate::models::shot::ShotEvent;
use crate::models::tracking::{TrackingFrame, TrackingMetadata};

/// Field whose presence marks a tracking line as a frame record.
const FRAME_TIMESTAMP_FIELD: &str = "Videotimestamp";

/// Load the shot events of one match.
pub fn load_shots(path: &Path) -> Result<Vec<ShotEvent>, EnrichError> {
    let text = fs::read_to_string(path).map_err(|e| EnrichError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| EnrichError::parse(path, e))
}

/// Load the roster metadata and frame sequence of one match.
///
/// Frames keep their file order, which the provider guarantees to be
/// timestamp order (ties allowed). Non-frame lines after the first are
/// skipped. An empty file yields default metadata and zero frames, which
/// the pipeline then skips as a frameless match.
pub fn load_tracking(path: &Path) -> Result<(TrackingMetadata, Vec<TrackingFrame>), EnrichError> {
    let text = fs::read_to_string(path).map_err(|e| EnrichError::io(path, e))?;
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let metadata = match lines.next() {
        Some(line) => serde_json::from_str(line).map_err(|e| EnrichError::parse(path, e))?,
        None => TrackingMetadata::default(),
    };

    let mut frames = Vec::new();
    for line in lines {
        let value: serde_json::Value =
            serde_json::from_str(line).map_err(|e| EnrichError::parse(path, e))?;
        if value.get(FRAME_TIMESTAMP_FIELD).is_some() {
            let frame = serde_json::from_value(value).map_err(|e| EnrichError::parse(path, e))?;
            frames.push(frame);
        }
    }
    Ok((metadata, frames))
}

fn load_id_table(path: &Path) -> Result<HashMap<String, i64>, EnrichError> {
    let text = fs::read_to_string(path).map_err(|e| EnrichError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| EnrichError::parse(path, e))
}

/// Load both identity tables.
pub fn load_identity_maps(
    player_map_path: &Path,
    team_map_path: &Path,
) -> Result<IdentityMaps, EnrichError> {
    let players = load_id_table(player_map_path)?;
    let teams = load_id_table(team_map_path)?;
    log::info!(
        "loaded identity maps: {} player(s), {} team(s)",
        players.len(),
        teams.len()
    );
    Ok(IdentityMaps::new(players, teams))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_shots() {
        let file = write_temp(
            r#"[{
                "matchPeriod": "1H", "minute": 1, "second": 2,
                "videoTimestamp": 62.0,
                "player": {"id": "p1"}, "team": {"id": "t1"},
                "opponentTeam": {"id": "t2"},
                "shot": {"isGoal": false, "onTarget": false}
            }]"#,
        );

        let shots = load_shots(file.path()).unwrap();
        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0].video_timestamp, 62.0);
    }

    #[test]
    fn test_load_shots_malformed() {
        let file = write_temp("{not valid json");
        let err = load_shots(file.path()).unwrap_err();
        assert!(matches!(err, EnrichError::Parse { .. }));
    }

    #[test]
    fn test_load_shots_missing_file() {
        let err = load_shots(Path::new("/nonexistent/shots.json")).unwrap_err();
        assert!(matches!(err, EnrichError::Io { .. }));
    }

    #[test]
    fn test_load_tracking_splits_metadata_and_frames() {
        let file = write_temp(concat!(
            r#"{"players_data": {"200": {"10": {"position": "GK"}}}, "teams_data": {}}"#,
            "\n",
            r#"{"frame": 1, "period": 1, "Videotimestamp": 10.0, "data": {}}"#,
            "\n",
            r#"{"note": "not a frame, no timestamp field"}"#,
            "\n",
            r#"{"frame": 2, "period": 1, "Videotimestamp": 10.1, "data": {}}"#,
            "\n",
        ));

        let (metadata, frames) = load_tracking(file.path()).unwrap();
        assert_eq!(metadata.goalkeeper_id(200), Some(10));
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].frame, 1);
        assert_eq!(frames[1].video_timestamp, 10.1);
    }

    #[test]
    fn test_load_tracking_empty_file() {
        let file = write_temp("");
        let (metadata, frames) = load_tracking(file.path()).unwrap();
        assert_eq!(metadata, TrackingMetadata::default());
        assert!(frames.is_empty());
    }

    #[test]
    fn test_load_identity_maps() {
        let players = write_temp(r#"{"p1": 1, "p2": 2}"#);
        let teams = write_temp(r#"{"t1": 100}"#);

        let maps = load_identity_maps(players.path(), teams.path()).unwrap();
        assert_eq!(maps.resolve_player("p2"), Some(2));
        assert_eq!(maps.resolve_team("t1"), Some(100));
        assert_eq!(maps.player_count(), 2);
        assert_eq!(maps.team_count(), 1);
    }
}
