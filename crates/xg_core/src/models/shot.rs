//! Shot event records as delivered by the event-data provider.
//!
//! One JSON array per match, one record per shot attempt. Identifiers live
//! in the provider's own namespace ("event space") and must be resolved to
//! tracking-space ids before any frame lookup. Records are immutable once
//! parsed.

use serde::{Deserialize, Deserializer, Serialize};

/// Accepts a JSON number or string id and normalizes it to a string key,
/// since providers are inconsistent about id types across feeds.
fn de_event_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Str(String),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(v) => v.to_string(),
        Raw::Str(s) => s,
    })
}

/// Accepts a JSON number or a numeric string ("123.45") as an f64.
fn de_flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
    }
    match Raw::deserialize(deserializer)? {
        Raw::Num(v) => Ok(v),
        Raw::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Player reference in event space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerRef {
    #[serde(deserialize_with = "de_event_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Team reference in event space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamRef {
    #[serde(deserialize_with = "de_event_id")]
    pub id: String,
}

/// Shot outcome metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShotDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_part: Option<String>,
    pub is_goal: bool,
    pub on_target: bool,
    /// External xG reference score, when the provider supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xg: Option<f64>,
    /// Second external xG reference score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xg2: Option<f64>,
}

/// Where the possession leading to the shot started.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Location {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

/// Possession context for the shot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Possession {
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub start_location: Option<Location>,
}

/// One shot attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShotEvent {
    pub match_period: String,
    pub minute: u32,
    pub second: u32,
    /// Seconds into the match video; the key used for frame alignment.
    #[serde(deserialize_with = "de_flexible_f64")]
    pub video_timestamp: f64,
    pub player: PlayerRef,
    pub team: TeamRef,
    pub opponent_team: TeamRef,
    pub shot: ShotDetail,
    #[serde(default)]
    pub possession: Possession,
}

impl ShotEvent {
    /// Possession start x, when recorded.
    pub fn poss_start_x(&self) -> Option<f64> {
        self.possession.start_location.and_then(|loc| loc.x)
    }

    /// Possession start y, when recorded.
    pub fn poss_start_y(&self) -> Option<f64> {
        self.possession.start_location.and_then(|loc| loc.y)
    }
}
