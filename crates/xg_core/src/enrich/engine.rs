//! Feature derivation for one aligned shot.
//!
//! `enrich_shot` is a pure function of the shot record, the tracking frame
//! it was aligned to, the match roster metadata and the identity maps. A
//! missing or unresolvable geometric input degrades only the features that
//! depend on it; the one fatal condition is an opponent team id with no
//! tracking mapping, which makes defender attribution impossible and drops
//! the shot.

use crate::enrich::zones::{AngleCategory, DistanceCategory, FieldZone6};
use crate::geometry::{self, Point};
use crate::identity::IdentityMaps;
use crate::models::enriched::EnrichedShot;
use crate::models::shot::ShotEvent;
use crate::models::tracking::{PlayerPosition, TrackingFrame, TrackingMetadata};

/// FIFA-standard pitch length in meters.
pub const PITCH_LENGTH_M: f64 = 105.0;
/// y coordinate of both goal centers.
pub const GOAL_CENTER_Y: f64 = 34.0;
/// Post y coordinates of the 7.32 m regulation goal mouth.
const POST_LOW_Y: f64 = 30.34;
const POST_HIGH_Y: f64 = 37.66;
/// Shooter x beyond which the right-hand goal is the attacked one.
const ATTACK_RIGHT_MIN_X: f64 = 50.0;
/// Maximum lateral offset for the goalkeeper to count as in the shot path.
const SHOT_PATH_TOLERANCE_M: f64 = 5.0;
/// Radius around the shooter for the defender-pressure count.
const PRESSURE_RADIUS_M: f64 = 5.0;
/// Attacked penalty-area bounds used for the box count.
const BOX_RIGHT_MIN_X: f64 = 83.5;
const BOX_LEFT_MAX_X: f64 = 16.5;
const BOX_MIN_Y: f64 = 18.0;
const BOX_MAX_Y: f64 = 82.0;
/// Body-part marker for headed (or otherwise non-foot) attempts.
const HEADER_BODY_PART: &str = "head_or_other";

/// The goal under attack for one shot.
struct AttackedGoal {
    center: Point,
    post_low: Point,
    post_high: Point,
    attacking_right: bool,
}

impl AttackedGoal {
    /// Goal on the half the shooter occupies. An unknown shooter position
    /// defaults to the left goal, keeping goalkeeper-only features
    /// computable against a definite goal.
    fn select(ball_x: Option<f64>) -> Self {
        let attacking_right = ball_x.is_some_and(|x| x > ATTACK_RIGHT_MIN_X);
        let goal_x = if attacking_right { PITCH_LENGTH_M } else { 0.0 };
        Self {
            center: (goal_x, GOAL_CENTER_Y),
            post_low: (goal_x, POST_LOW_Y),
            post_high: (goal_x, POST_HIGH_Y),
            attacking_right,
        }
    }

    /// Whether a point lies inside the attacked penalty area.
    fn in_box(&self, p: Point) -> bool {
        let deep_enough =
            if self.attacking_right { p.0 > BOX_RIGHT_MIN_X } else { p.0 < BOX_LEFT_MAX_X };
        deep_enough && (BOX_MIN_Y..=BOX_MAX_Y).contains(&p.1)
    }
}

/// Players strictly inside the shooting cone (apex, post, post), skipping
/// the excluded id and any entry without coordinates.
fn count_in_cone(
    players: &[PlayerPosition],
    exclude: Option<i64>,
    apex: Point,
    goal: &AttackedGoal,
) -> u32 {
    players
        .iter()
        .filter(|p| Some(p.id) != exclude)
        .filter_map(PlayerPosition::point)
        .filter(|&p| geometry::point_in_triangle(p, apex, goal.post_low, goal.post_high))
        .count() as u32
}

/// Derive the full feature row for one (shot, aligned frame) pair.
///
/// Returns `None` only when the opponent team id has no tracking mapping.
pub fn enrich_shot(
    shot: &ShotEvent,
    frame: &TrackingFrame,
    metadata: &TrackingMetadata,
    maps: &IdentityMaps,
) -> Option<EnrichedShot> {
    let opp_team_id = match maps.resolve_team(&shot.opponent_team.id) {
        Some(id) => id,
        None => {
            log::warn!(
                "skipping shot at t={:.2}: no team mapping for opponent {}",
                shot.video_timestamp,
                shot.opponent_team.id
            );
            return None;
        }
    };
    let player_id = maps.resolve_player(&shot.player.id);
    let team_id = maps.resolve_team(&shot.team.id);

    // Shooter position in the aligned frame; the ball is taken to be at the
    // shooter's feet at the moment of the shot.
    let shooter = match (team_id, player_id) {
        (Some(tid), Some(pid)) => frame.player_point(tid, pid),
        _ => None,
    };

    let goalkeeper_id = metadata.goalkeeper_id(opp_team_id);
    let goalkeeper = goalkeeper_id.and_then(|gk| frame.player_point(opp_team_id, gk));

    let goal = AttackedGoal::select(shooter.map(|p| p.0));

    let distance_to_goal = shooter.map(|s| geometry::distance(s, goal.center));
    let distance_to_goalkeeper = match (shooter, goalkeeper) {
        (Some(s), Some(gk)) => Some(geometry::distance(s, gk)),
        _ => None,
    };
    let distance_to_center_goal = goalkeeper.map(|gk| geometry::distance(gk, goal.center));

    let angle_to_goal =
        shooter.and_then(|s| geometry::law_of_cosines_angle(s, goal.post_low, goal.post_high));
    let angle_to_goal_degrees = angle_to_goal.map(f64::to_degrees);
    let goalkeeper_angle_to_goal_degrees = goalkeeper
        .and_then(|gk| geometry::law_of_cosines_angle(gk, goal.post_low, goal.post_high))
        .map(f64::to_degrees);

    let goalkeeper_in_shot_path = match (shooter, goalkeeper) {
        (Some(s), Some(gk)) => geometry::lateral_offset(s, goal.center, gk)
            .is_some_and(|offset| offset <= SHOT_PATH_TOLERANCE_M),
        _ => false,
    };

    let opponents = frame.team_players(opp_team_id);
    let teammates = team_id.map(|tid| frame.team_players(tid)).unwrap_or(&[]);

    // Cone occupancy is undefined without a shooter position to anchor the
    // cone apex. The shooter's own entry never counts: the apex vertex is
    // classified outside.
    let defenders_in_cone = shooter.map(|s| count_in_cone(opponents, goalkeeper_id, s, &goal));
    let attackers_in_cone = shooter.map(|s| count_in_cone(teammates, None, s, &goal));
    let goalkeeper_in_cone = match (shooter, goalkeeper) {
        (Some(s), Some(gk)) => {
            Some(geometry::point_in_triangle(gk, s, goal.post_low, goal.post_high))
        }
        _ => None,
    };

    // Any opponent counts toward pressure, goalkeeper included.
    let num_defenders_nearby = shooter.map(|s| {
        opponents
            .iter()
            .filter_map(PlayerPosition::point)
            .filter(|&p| geometry::distance(s, p) <= PRESSURE_RADIUS_M)
            .count() as u32
    });
    let defenders_in_box = opponents
        .iter()
        .filter(|p| Some(p.id) != goalkeeper_id)
        .filter_map(PlayerPosition::point)
        .filter(|&p| goal.in_box(p))
        .count() as u32;

    let field_zone_6 =
        shooter.map(|(x, y)| FieldZone6::from_position(x, y, goal.attacking_right));
    let distance_category = distance_to_goal.map(DistanceCategory::from_distance);
    let angle_category = angle_to_goal_degrees.map(AngleCategory::from_degrees);

    let pressure_score = num_defenders_nearby.unwrap_or(0)
        + defenders_in_cone.unwrap_or(0)
        + defenders_in_box
        + u32::from(goalkeeper_in_shot_path);

    let header =
        shot.shot.body_part.as_deref().map(|b| b.eq_ignore_ascii_case(HEADER_BODY_PART));

    Some(EnrichedShot {
        period: shot.match_period.clone(),
        minute: shot.minute,
        second: shot.second,
        video_timestamp: shot.video_timestamp,
        position: shot.player.position.clone(),
        bodypart: shot.shot.body_part.clone(),
        is_goal: shot.shot.is_goal,
        on_target: shot.shot.on_target,
        xg: shot.shot.xg,
        xg2: shot.shot.xg2,
        poss_duration: shot.possession.duration,
        poss_start_x: shot.poss_start_x(),
        poss_start_y: shot.poss_start_y(),
        frame: frame.frame,
        frame_period: frame.period,
        player_id,
        team_id,
        opp_team_id,
        ball_x: shooter.map(|p| p.0),
        ball_y: shooter.map(|p| p.1),
        goalkeeper_x: goalkeeper.map(|p| p.0),
        goalkeeper_y: goalkeeper.map(|p| p.1),
        distance_to_goal,
        distance_to_goalkeeper,
        distance_to_center_goal,
        angle_to_goal,
        angle_to_goal_degrees,
        goalkeeper_angle_to_goal_degrees,
        goalkeeper_in_shot_path,
        goalkeeper_in_cone,
        defenders_in_cone,
        attackers_in_cone,
        num_defenders_nearby,
        defenders_in_box,
        field_zone_6,
        distance_category,
        angle_category,
        pressure_score,
        header,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn make_maps() -> IdentityMaps {
        IdentityMaps::new(
            HashMap::from([("p1".to_string(), 1)]),
            HashMap::from([("t1".to_string(), 100), ("t2".to_string(), 200)]),
        )
    }

    fn make_metadata() -> TrackingMetadata {
        serde_json::from_value(json!({
            "players_data": {
                "200": {
                    "10": {"position": "GK"},
                    "12": {"position": "CB"},
                    "13": {"position": "CB"}
                }
            },
            "teams_data": {}
        }))
        .unwrap()
    }

    /// Shooter (id 1, team 100) at (95, 34) attacking right; opponents
    /// (team 200): GK dead center at (103, 34), one defender in the cone at
    /// (100, 34), one far away; a teammate inside the cone at (101, 34.5).
    fn make_frame() -> TrackingFrame {
        serde_json::from_value(json!({
            "frame": 1200,
            "period": 1,
            "Videotimestamp": 123.4,
            "data": {
                "100": [
                    {"id": 1, "x": 95.0, "y": 34.0},
                    {"id": 2, "x": 101.0, "y": 34.5}
                ],
                "200": [
                    {"id": 10, "x": 103.0, "y": 34.0},
                    {"id": 12, "x": 100.0, "y": 34.0},
                    {"id": 13, "x": 60.0, "y": 10.0}
                ]
            }
        }))
        .unwrap()
    }

    fn make_shot(player: &str, team: &str, opponent: &str) -> ShotEvent {
        serde_json::from_value(json!({
            "matchPeriod": "1H",
            "minute": 10,
            "second": 15,
            "videoTimestamp": 123.45,
            "player": {"id": player, "position": "CF"},
            "team": {"id": team},
            "opponentTeam": {"id": opponent},
            "shot": {"bodyPart": "right_foot", "isGoal": false, "onTarget": true, "xg": 0.1, "xg2": 0.2},
            "possession": {"duration": 5.0, "startLocation": {"x": 50.0, "y": 34.0}}
        }))
        .unwrap()
    }

    #[test]
    fn test_fully_resolved_shot() {
        let shot = make_shot("p1", "t1", "t2");
        let row = enrich_shot(&shot, &make_frame(), &make_metadata(), &make_maps())
            .expect("opponent team is mapped");

        assert_eq!(row.player_id, Some(1));
        assert_eq!(row.team_id, Some(100));
        assert_eq!(row.opp_team_id, 200);
        assert_eq!(row.ball_x, Some(95.0));
        assert_eq!(row.ball_y, Some(34.0));
        assert_eq!(row.goalkeeper_x, Some(103.0));
        assert_eq!(row.frame, 1200);

        // Shooter at (95, 34) attacks the right goal at (105, 34).
        assert_eq!(row.distance_to_goal, Some(10.0));
        assert_eq!(row.distance_to_goalkeeper, Some(8.0));
        assert_eq!(row.distance_to_center_goal, Some(2.0));
        assert_eq!(row.distance_category, Some(DistanceCategory::Close));

        // 10 m out, dead center: a ~40.2 degree opening.
        let angle = row.angle_to_goal_degrees.unwrap();
        assert!((angle - 40.2).abs() < 0.1, "got {angle}");
        assert_eq!(row.angle_category, Some(AngleCategory::Wide));
        assert!(row.goalkeeper_angle_to_goal_degrees.is_some());

        // GK on the shot line, inside the cone; one defender in the cone
        // (the GK itself is excluded), one teammate in the cone.
        assert!(row.goalkeeper_in_shot_path);
        assert_eq!(row.goalkeeper_in_cone, Some(true));
        assert_eq!(row.defenders_in_cone, Some(1));
        assert_eq!(row.attackers_in_cone, Some(1));

        // Defender at (100, 34) is exactly 5 m away, inside the radius.
        assert_eq!(row.num_defenders_nearby, Some(1));
        // Defender at (100, 34) is in the box; GK is excluded from the count.
        assert_eq!(row.defenders_in_box, 1);

        assert_eq!(row.field_zone_6, Some(FieldZone6::CenterNear));
        // nearby 1 + cone 1 + box 1 + path 1
        assert_eq!(row.pressure_score, 4);
        assert_eq!(row.header, Some(false));
    }

    #[test]
    fn test_unresolved_opponent_team_drops_shot() {
        let shot = make_shot("p1", "t1", "t999");
        let row = enrich_shot(&shot, &make_frame(), &make_metadata(), &make_maps());
        assert!(row.is_none());
    }

    #[test]
    fn test_unresolved_player_degrades_not_drops() {
        let shot = make_shot("p999", "t1", "t2");
        let row = enrich_shot(&shot, &make_frame(), &make_metadata(), &make_maps())
            .expect("shot survives an unmapped shooter");

        assert_eq!(row.player_id, None);
        assert_eq!(row.ball_x, None);
        assert_eq!(row.distance_to_goal, None);
        assert_eq!(row.angle_to_goal_degrees, None);
        assert_eq!(row.distance_category, None);
        assert_eq!(row.field_zone_6, None);
        assert_eq!(row.defenders_in_cone, None);
        assert_eq!(row.attackers_in_cone, None);
        assert_eq!(row.num_defenders_nearby, None);
        assert!(!row.goalkeeper_in_shot_path);

        // Goalkeeper-only features still computed, against the default
        // (left) goal: GK at (103, 34) is 103 m from its center.
        assert_eq!(row.distance_to_center_goal, Some(103.0));
        // No opponent stands in the left penalty area.
        assert_eq!(row.defenders_in_box, 0);
        assert_eq!(row.pressure_score, 0);
    }

    #[test]
    fn test_no_goalkeeper_in_roster() {
        let metadata: TrackingMetadata = serde_json::from_value(json!({
            "players_data": {"200": {"12": {"position": "CB"}, "13": {"position": "CB"}}}
        }))
        .unwrap();

        let shot = make_shot("p1", "t1", "t2");
        let row = enrich_shot(&shot, &make_frame(), &metadata, &make_maps()).unwrap();

        assert_eq!(row.goalkeeper_x, None);
        assert_eq!(row.distance_to_goalkeeper, None);
        assert_eq!(row.distance_to_center_goal, None);
        assert_eq!(row.goalkeeper_angle_to_goal_degrees, None);
        assert_eq!(row.goalkeeper_in_cone, None);
        assert!(!row.goalkeeper_in_shot_path);
        // Without an identified keeper, nobody is excluded from the
        // defender counts: the player at (103, 34) now counts in the cone.
        assert_eq!(row.defenders_in_cone, Some(2));
        assert_eq!(row.defenders_in_box, 2);
    }

    #[test]
    fn test_goalkeeper_missing_from_frame() {
        // Roster lists GK id 10 but the frame lost the sample.
        let frame: TrackingFrame = serde_json::from_value(json!({
            "frame": 7,
            "period": 1,
            "Videotimestamp": 50.0,
            "data": {
                "100": [{"id": 1, "x": 95.0, "y": 34.0}],
                "200": [{"id": 12, "x": 100.0, "y": 34.0}]
            }
        }))
        .unwrap();

        let shot = make_shot("p1", "t1", "t2");
        let row = enrich_shot(&shot, &frame, &make_metadata(), &make_maps()).unwrap();

        assert_eq!(row.goalkeeper_x, None);
        assert_eq!(row.goalkeeper_in_cone, None);
        assert!(!row.goalkeeper_in_shot_path);
        // The shot itself is unaffected.
        assert_eq!(row.distance_to_goal, Some(10.0));
    }

    #[test]
    fn test_attacking_left_goal() {
        let frame: TrackingFrame = serde_json::from_value(json!({
            "frame": 9,
            "period": 2,
            "Videotimestamp": 3000.0,
            "data": {
                "100": [{"id": 1, "x": 20.0, "y": 34.0}],
                "200": [
                    {"id": 10, "x": 2.0, "y": 34.0},
                    {"id": 12, "x": 10.0, "y": 40.0}
                ]
            }
        }))
        .unwrap();

        let shot = make_shot("p1", "t1", "t2");
        let row = enrich_shot(&shot, &frame, &make_metadata(), &make_maps()).unwrap();

        // Shooter at x=20 attacks the left goal at (0, 34).
        assert_eq!(row.distance_to_goal, Some(20.0));
        assert_eq!(row.distance_category, Some(DistanceCategory::Medium));
        assert_eq!(row.field_zone_6, Some(FieldZone6::CenterNear));
        // Defender at (10, 40) is inside the left penalty area.
        assert_eq!(row.defenders_in_box, 1);
        assert!(row.goalkeeper_in_shot_path);
    }

    #[test]
    fn test_header_flag_case_insensitive() {
        let mut shot = make_shot("p1", "t1", "t2");
        shot.shot.body_part = Some("Head_Or_Other".to_string());
        let row = enrich_shot(&shot, &make_frame(), &make_metadata(), &make_maps()).unwrap();
        assert_eq!(row.header, Some(true));

        shot.shot.body_part = None;
        let row = enrich_shot(&shot, &make_frame(), &make_metadata(), &make_maps()).unwrap();
        assert_eq!(row.header, None);
    }

    #[test]
    fn test_enrichment_is_pure() {
        let shot = make_shot("p1", "t1", "t2");
        let frame = make_frame();
        let metadata = make_metadata();
        let maps = make_maps();

        let first = enrich_shot(&shot, &frame, &metadata, &maps);
        let second = enrich_shot(&shot, &frame, &metadata, &maps);
        assert_eq!(first, second);
    }
}
