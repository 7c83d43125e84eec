//! Categorical buckets derived from shot geometry.
//!
//! Every bucket boundary is half-open on the lower bound with a strict `<`
//! test, so a value exactly on a boundary falls into the next (wider or
//! farther) bucket: a 10.0 m shot is `Close`, not `VeryClose`.

use serde::{Deserialize, Serialize};

/// Shooter x beyond which a right-attacking shot counts as near the goal.
pub const NEAR_THRESHOLD_RIGHT_X: f64 = 75.0;
/// Shooter x below which a left-attacking shot counts as near the goal.
pub const NEAR_THRESHOLD_LEFT_X: f64 = 25.0;
/// Lateral band boundaries splitting the pitch into left/center/right.
pub const BAND_LEFT_MAX_Y: f64 = 33.3;
pub const BAND_CENTER_MAX_Y: f64 = 66.6;

/// Shooter location bucketed into {left, center, right} x {near, far}
/// relative to the attacked half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldZone6 {
    LeftNear,
    CenterNear,
    RightNear,
    LeftFar,
    CenterFar,
    RightFar,
}

impl FieldZone6 {
    /// All zones in order.
    pub const ALL: [FieldZone6; 6] = [
        FieldZone6::LeftNear,
        FieldZone6::CenterNear,
        FieldZone6::RightNear,
        FieldZone6::LeftFar,
        FieldZone6::CenterFar,
        FieldZone6::RightFar,
    ];

    /// Classify a shooter position given the attack direction.
    pub fn from_position(x: f64, y: f64, attacking_right: bool) -> Self {
        let near = if attacking_right { x > NEAR_THRESHOLD_RIGHT_X } else { x < NEAR_THRESHOLD_LEFT_X };
        match (y, near) {
            (y, true) if y < BAND_LEFT_MAX_Y => FieldZone6::LeftNear,
            (y, true) if y < BAND_CENTER_MAX_Y => FieldZone6::CenterNear,
            (_, true) => FieldZone6::RightNear,
            (y, false) if y < BAND_LEFT_MAX_Y => FieldZone6::LeftFar,
            (y, false) if y < BAND_CENTER_MAX_Y => FieldZone6::CenterFar,
            (_, false) => FieldZone6::RightFar,
        }
    }

    /// String id, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldZone6::LeftNear => "left_near",
            FieldZone6::CenterNear => "center_near",
            FieldZone6::RightNear => "right_near",
            FieldZone6::LeftFar => "left_far",
            FieldZone6::CenterFar => "center_far",
            FieldZone6::RightFar => "right_far",
        }
    }

    /// Parse from the string id.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "left_near" => Some(FieldZone6::LeftNear),
            "center_near" => Some(FieldZone6::CenterNear),
            "right_near" => Some(FieldZone6::RightNear),
            "left_far" => Some(FieldZone6::LeftFar),
            "center_far" => Some(FieldZone6::CenterFar),
            "right_far" => Some(FieldZone6::RightFar),
            _ => None,
        }
    }

    /// Is the shooter in the attacked near zone?
    pub fn is_near(&self) -> bool {
        matches!(self, FieldZone6::LeftNear | FieldZone6::CenterNear | FieldZone6::RightNear)
    }
}

/// Shot distance bucketed for the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceCategory {
    VeryClose,
    Close,
    Medium,
    Far,
}

impl DistanceCategory {
    pub const ALL: [DistanceCategory; 4] = [
        DistanceCategory::VeryClose,
        DistanceCategory::Close,
        DistanceCategory::Medium,
        DistanceCategory::Far,
    ];

    /// Bucket a distance-to-goal in meters.
    pub fn from_distance(distance_m: f64) -> Self {
        if distance_m < 10.0 {
            DistanceCategory::VeryClose
        } else if distance_m < 20.0 {
            DistanceCategory::Close
        } else if distance_m < 30.0 {
            DistanceCategory::Medium
        } else {
            DistanceCategory::Far
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceCategory::VeryClose => "very_close",
            DistanceCategory::Close => "close",
            DistanceCategory::Medium => "medium",
            DistanceCategory::Far => "far",
        }
    }
}

/// Goal-mouth opening angle bucketed for the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleCategory {
    Narrow,
    Medium,
    Wide,
}

impl AngleCategory {
    pub const ALL: [AngleCategory; 3] =
        [AngleCategory::Narrow, AngleCategory::Medium, AngleCategory::Wide];

    /// Bucket an opening angle in degrees.
    pub fn from_degrees(angle_deg: f64) -> Self {
        if angle_deg < 10.0 {
            AngleCategory::Narrow
        } else if angle_deg < 25.0 {
            AngleCategory::Medium
        } else {
            AngleCategory::Wide
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AngleCategory::Narrow => "narrow",
            AngleCategory::Medium => "medium",
            AngleCategory::Wide => "wide",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_zone_attacking_right() {
        assert_eq!(FieldZone6::from_position(90.0, 20.0, true), FieldZone6::LeftNear);
        assert_eq!(FieldZone6::from_position(90.0, 50.0, true), FieldZone6::CenterNear);
        assert_eq!(FieldZone6::from_position(90.0, 70.0, true), FieldZone6::RightNear);
        assert_eq!(FieldZone6::from_position(40.0, 50.0, true), FieldZone6::CenterFar);
    }

    #[test]
    fn test_field_zone_attacking_left() {
        // Near means close to the left goal when attacking left.
        assert_eq!(FieldZone6::from_position(10.0, 50.0, false), FieldZone6::CenterNear);
        assert_eq!(FieldZone6::from_position(90.0, 50.0, false), FieldZone6::CenterFar);
    }

    #[test]
    fn test_field_zone_near_boundary_is_far() {
        // x exactly at the threshold is not strictly beyond it.
        assert_eq!(FieldZone6::from_position(75.0, 50.0, true), FieldZone6::CenterFar);
        assert_eq!(FieldZone6::from_position(25.0, 50.0, false), FieldZone6::CenterFar);
    }

    #[test]
    fn test_field_zone_string_roundtrip() {
        for zone in FieldZone6::ALL {
            assert_eq!(FieldZone6::from_str(zone.as_str()), Some(zone));
        }
        assert_eq!(FieldZone6::from_str("midfield"), None);
    }

    #[test]
    fn test_distance_category_boundaries() {
        assert_eq!(DistanceCategory::from_distance(9.999), DistanceCategory::VeryClose);
        // Exactly on the boundary falls into the farther bucket.
        assert_eq!(DistanceCategory::from_distance(10.0), DistanceCategory::Close);
        assert_eq!(DistanceCategory::from_distance(19.999), DistanceCategory::Close);
        assert_eq!(DistanceCategory::from_distance(20.0), DistanceCategory::Medium);
        assert_eq!(DistanceCategory::from_distance(30.0), DistanceCategory::Far);
        assert_eq!(DistanceCategory::from_distance(55.0), DistanceCategory::Far);
    }

    #[test]
    fn test_angle_category_boundaries() {
        assert_eq!(AngleCategory::from_degrees(9.9), AngleCategory::Narrow);
        assert_eq!(AngleCategory::from_degrees(10.0), AngleCategory::Medium);
        assert_eq!(AngleCategory::from_degrees(24.9), AngleCategory::Medium);
        assert_eq!(AngleCategory::from_degrees(25.0), AngleCategory::Wide);
    }

    #[test]
    fn test_serialized_form_matches_as_str() {
        let json = serde_json::to_string(&DistanceCategory::VeryClose).unwrap();
        assert_eq!(json, "\"very_close\"");
        let json = serde_json::to_string(&FieldZone6::LeftNear).unwrap();
        assert_eq!(json, "\"left_near\"");
        let json = serde_json::to_string(&AngleCategory::Wide).unwrap();
        assert_eq!(json, "\"wide\"");
    }
}
