//! Player-tracking records: per-frame positions and per-match roster
//! metadata.
//!
//! A tracking source is line-delimited JSON: the first line carries the
//! roster metadata, every following line with a `Videotimestamp` field is a
//! sampled frame. Ids here live in tracking space; the `data` map is keyed
//! by the tracking team id rendered as a string, as the provider emits it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// One player's sampled position within a frame. Coordinates may be absent
/// for players the optical system lost.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlayerPosition {
    pub id: i64,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

impl PlayerPosition {
    /// Both coordinates, when the sample is complete.
    pub fn point(&self) -> Option<Point> {
        Some((self.x?, self.y?))
    }
}

/// One sampled game state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackingFrame {
    /// Frame sequence number within the match.
    pub frame: u64,
    /// Match period the frame belongs to.
    pub period: u32,
    /// Seconds into the match video.
    #[serde(rename = "Videotimestamp")]
    pub video_timestamp: f64,
    /// Tracking team id (as a string key) to that team's player positions.
    pub data: HashMap<String, Vec<PlayerPosition>>,
}

impl TrackingFrame {
    /// Position list for a tracking-space team, empty if the team has no
    /// entry in this frame.
    pub fn team_players(&self, team_id: i64) -> &[PlayerPosition] {
        self.data.get(&team_id.to_string()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Coordinates of one player on the given team, if sampled.
    pub fn player_point(&self, team_id: i64, player_id: i64) -> Option<Point> {
        self.team_players(team_id).iter().find(|p| p.id == player_id)?.point()
    }
}

/// Static roster attributes for one player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RosterEntry {
    #[serde(default)]
    pub position: Option<String>,
}

/// Per-match roster metadata, loaded once and shared read-only across all
/// shots of the match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TrackingMetadata {
    /// Tracking team id (string key) to player id (string key) to roster
    /// attributes.
    #[serde(default)]
    pub players_data: HashMap<String, HashMap<String, RosterEntry>>,
    /// Team-level attributes; carried through but not consumed here.
    #[serde(default)]
    pub teams_data: serde_json::Value,
}

/// Roster position marker for goalkeepers.
pub const GOALKEEPER_ROLE: &str = "GK";

impl TrackingMetadata {
    /// Tracking id of the given team's goalkeeper.
    ///
    /// Rosters arrive as JSON objects, so "first entry" is not a meaningful
    /// order; when a roster lists more than one goalkeeper the lowest player
    /// id wins, deterministically, and a diagnostic is emitted. Zero
    /// goalkeepers yields `None`.
    pub fn goalkeeper_id(&self, team_id: i64) -> Option<i64> {
        let roster = self.players_data.get(&team_id.to_string())?;
        let mut keepers: Vec<i64> = roster
            .iter()
            .filter(|(_, entry)| entry.position.as_deref() == Some(GOALKEEPER_ROLE))
            .filter_map(|(pid, _)| pid.parse().ok())
            .collect();
        keepers.sort_unstable();

        if keepers.len() > 1 {
            log::warn!(
                "roster for team {} lists {} goalkeepers, using lowest id {}",
                team_id,
                keepers.len(),
                keepers[0]
            );
        }
        keepers.first().copied()
    }
}
