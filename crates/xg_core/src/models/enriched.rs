//! The enriched output row: original shot attributes plus every derived
//! geometric and categorical feature.
//!
//! One `EnrichedShot` is produced per shot that survives opponent-team
//! identity resolution. `None` in a feature column means the underlying
//! geometry could not be established for that shot; the row itself is still
//! emitted. This is the contract boundary with the downstream model.

use serde::{Deserialize, Serialize};

use crate::enrich::zones::{AngleCategory, DistanceCategory, FieldZone6};

/// One fully derived feature row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedShot {
    // Original shot attributes.
    pub period: String,
    pub minute: u32,
    pub second: u32,
    pub video_timestamp: f64,
    pub position: Option<String>,
    pub bodypart: Option<String>,
    pub is_goal: bool,
    pub on_target: bool,
    pub xg: Option<f64>,
    pub xg2: Option<f64>,
    pub poss_duration: Option<f64>,
    pub poss_start_x: Option<f64>,
    pub poss_start_y: Option<f64>,

    // Alignment metadata: which frame the shot was joined to.
    pub frame: u64,
    pub frame_period: u32,

    // Resolved tracking-space identities. The opponent team is always
    // resolved (unresolved opponents drop the shot before this row exists).
    pub player_id: Option<i64>,
    pub team_id: Option<i64>,
    pub opp_team_id: i64,

    // Pitch state at the aligned frame.
    pub ball_x: Option<f64>,
    pub ball_y: Option<f64>,
    pub goalkeeper_x: Option<f64>,
    pub goalkeeper_y: Option<f64>,

    // Distance features (meters).
    pub distance_to_goal: Option<f64>,
    pub distance_to_goalkeeper: Option<f64>,
    pub distance_to_center_goal: Option<f64>,

    // Angle features.
    pub angle_to_goal: Option<f64>,
    pub angle_to_goal_degrees: Option<f64>,
    pub goalkeeper_angle_to_goal_degrees: Option<f64>,

    // Obstruction and occupancy.
    pub goalkeeper_in_shot_path: bool,
    pub goalkeeper_in_cone: Option<bool>,
    pub defenders_in_cone: Option<u32>,
    pub attackers_in_cone: Option<u32>,
    pub num_defenders_nearby: Option<u32>,
    pub defenders_in_box: u32,

    // Categorical buckets.
    pub field_zone_6: Option<FieldZone6>,
    pub distance_category: Option<DistanceCategory>,
    pub angle_category: Option<AngleCategory>,

    // Composite pressure score; null contributors count as zero.
    pub pressure_score: u32,
    pub header: Option<bool>,
}

/// The narrowed column set the prediction model consumes, in its expected
/// order. Rows with any missing value are not representable here; the
/// model-side imputation was dropped in favor of complete rows only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelFeatureRow {
    pub distance_to_goal: f64,
    pub angle_to_goal_degrees: f64,
    pub distance_to_goalkeeper: f64,
    pub goalkeeper_angle_to_goal_degrees: f64,
    pub distance_to_center_goal: f64,
    pub num_defenders_nearby: u32,
    pub defenders_in_box: u32,
    pub defenders_in_cone: u32,
    pub poss_start_x: f64,
    pub poss_duration: f64,
    pub attackers_in_cone: u32,
    pub distance_category: DistanceCategory,
    pub angle_category: AngleCategory,
    pub goalkeeper_in_shot_path: bool,
    pub goalkeeper_in_cone: bool,
}

impl EnrichedShot {
    /// Narrow this row to the model's feature vector.
    ///
    /// Returns `None` when any required feature is missing, mirroring the
    /// drop-incomplete-rows policy of the inference pipeline.
    pub fn model_features(&self) -> Option<ModelFeatureRow> {
        Some(ModelFeatureRow {
            distance_to_goal: self.distance_to_goal?,
            angle_to_goal_degrees: self.angle_to_goal_degrees?,
            distance_to_goalkeeper: self.distance_to_goalkeeper?,
            goalkeeper_angle_to_goal_degrees: self.goalkeeper_angle_to_goal_degrees?,
            distance_to_center_goal: self.distance_to_center_goal?,
            num_defenders_nearby: self.num_defenders_nearby?,
            defenders_in_box: self.defenders_in_box,
            defenders_in_cone: self.defenders_in_cone?,
            poss_start_x: self.poss_start_x?,
            poss_duration: self.poss_duration?,
            attackers_in_cone: self.attackers_in_cone?,
            distance_category: self.distance_category?,
            angle_category: self.angle_category?,
            goalkeeper_in_shot_path: self.goalkeeper_in_shot_path,
            goalkeeper_in_cone: self.goalkeeper_in_cone?,
        })
    }
}
