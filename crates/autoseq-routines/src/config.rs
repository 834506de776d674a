//! Routine parameter records.
//!
//! The two competition routines differ only in constants — waypoints,
//! thresholds, start pose — so a single [`RoutineConfig`] drives both.
//! Records are plain serde data: load them from TOML, or start from the
//! [`net_high`][RoutineConfig::net_high] / [`chamber`][RoutineConfig::chamber]
//! presets.  Every field has a default, so a parameter file only needs to
//! state what it changes.

use autoseq_types::{PathSegment, Pose};
use serde::{Deserialize, Serialize};

/// Lift motor parameters: device name, drive power, and the thresholds the
/// raise/lower predicates compare encoder ticks against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftConfig {
    /// Hardware-map name of the lift motor.
    #[serde(default = "default_lift_motor")]
    pub motor: String,

    /// Drive power magnitude for every lift move.
    #[serde(default = "default_lift_power")]
    pub power: f64,

    /// Operational target of the raise move, in encoder ticks.
    #[serde(default = "default_raise_target")]
    pub raise_target: i32,

    /// Hard upper safety bound; dominates a misconfigured raise target.
    #[serde(default = "default_upper_limit")]
    pub upper_limit: i32,

    /// Operational floor of the lower move, in encoder ticks.
    #[serde(default = "default_lower_floor")]
    pub lower_floor: i32,

    /// Hard lower safety bound; dominates a misconfigured floor.
    #[serde(default = "default_lower_limit")]
    pub lower_limit: i32,

    /// Target of the end-game level-1 ascent move, when the routine has one.
    #[serde(default)]
    pub ascent_target: Option<i32>,

    /// Telemetry key the lift position is published under.
    #[serde(default = "default_lift_telemetry_key")]
    pub telemetry_key: String,
}

impl Default for LiftConfig {
    fn default() -> Self {
        Self {
            motor: default_lift_motor(),
            power: default_lift_power(),
            raise_target: default_raise_target(),
            upper_limit: default_upper_limit(),
            lower_floor: default_lower_floor(),
            lower_limit: default_lower_limit(),
            ascent_target: None,
            telemetry_key: default_lift_telemetry_key(),
        }
    }
}

/// Intake servo parameters: device name and the two absolute positions the
/// one-shot moves write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Hardware-map name of the intake servo.
    #[serde(default = "default_intake_servo")]
    pub servo: String,

    /// Closed/holding position.
    #[serde(default = "default_reset_position")]
    pub reset_position: f64,

    /// Open/scoring position.
    #[serde(default = "default_release_position")]
    pub release_position: f64,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            servo: default_intake_servo(),
            reset_position: default_reset_position(),
            release_position: default_release_position(),
        }
    }
}

/// Everything one match plan needs: devices, thresholds, and the two
/// trajectory descriptions spliced around the scoring moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineConfig {
    #[serde(default = "default_routine_name")]
    pub name: String,

    /// Field pose the robot is placed at before the match starts.
    #[serde(default = "default_start_pose")]
    pub start_pose: Pose,

    #[serde(default)]
    pub lift: LiftConfig,

    #[serde(default)]
    pub intake: IntakeConfig,

    /// Drive from the start pose to the scoring position.
    #[serde(default = "default_deliver_segments")]
    pub deliver_segments: Vec<PathSegment>,

    /// Pose the park trajectory is planned from (where the deliver
    /// trajectory ends).
    #[serde(default = "default_park_start")]
    pub park_start: Pose,

    /// Drive from the scoring position to the parking zone.
    #[serde(default = "default_park_segments")]
    pub park_segments: Vec<PathSegment>,
}

impl Default for RoutineConfig {
    fn default() -> Self {
        Self::net_high()
    }
}

impl RoutineConfig {
    /// Left-side start: score one preloaded sample in the high basket, then
    /// park in the observation zone.  This is the default parameter set.
    pub fn net_high() -> Self {
        Self {
            name: default_routine_name(),
            start_pose: default_start_pose(),
            lift: LiftConfig {
                ascent_target: Some(300),
                ..LiftConfig::default()
            },
            intake: IntakeConfig::default(),
            deliver_segments: default_deliver_segments(),
            park_start: default_park_start(),
            park_segments: default_park_segments(),
        }
    }

    /// Right-side start: score one preloaded specimen on the high chamber,
    /// then park in the observation zone.
    pub fn chamber() -> Self {
        Self {
            name: "red-right-chamber".to_string(),
            start_pose: Pose::new(60.0, 35.0, 180.0),
            lift: LiftConfig::default(),
            intake: IntakeConfig::default(),
            deliver_segments: vec![
                PathSegment::SetTangent { deg: 180.0 },
                PathSegment::SplineToConstantHeading {
                    x: 24.0,
                    y: 0.0,
                    tangent_deg: 180.0,
                },
            ],
            park_start: Pose::new(24.0, 0.0, 0.0),
            park_segments: vec![
                PathSegment::SetTangent { deg: 0.0 },
                PathSegment::SplineToConstantHeading {
                    x: 60.0,
                    y: -38.0,
                    tangent_deg: 0.0,
                },
            ],
        }
    }
}

fn default_routine_name() -> String {
    "red-left-net-high".to_string()
}
fn default_start_pose() -> Pose {
    Pose::new(60.0, -35.0, 180.0)
}
fn default_lift_motor() -> String {
    "vertLinArm".to_string()
}
fn default_lift_power() -> f64 {
    0.1
}
fn default_raise_target() -> i32 {
    3000
}
fn default_upper_limit() -> i32 {
    4000
}
fn default_lower_floor() -> i32 {
    100
}
fn default_lower_limit() -> i32 {
    50
}
fn default_lift_telemetry_key() -> String {
    "liftPos".to_string()
}
fn default_intake_servo() -> String {
    "intake".to_string()
}
fn default_reset_position() -> f64 {
    0.178
}
fn default_release_position() -> f64 {
    0.356
}
fn default_deliver_segments() -> Vec<PathSegment> {
    vec![
        PathSegment::SetTangent { deg: 180.0 },
        PathSegment::SplineToLinearHeading {
            target: Pose::new(53.0, 9.0, 45.0),
            tangent_deg: 90.0,
        },
        PathSegment::SetTangent { deg: 90.0 },
        PathSegment::SplineToLinearHeading {
            target: Pose::new(52.0, 53.0, 45.0),
            tangent_deg: 0.0,
        },
    ]
}
fn default_park_start() -> Pose {
    Pose::new(52.0, 53.0, 45.0)
}
fn default_park_segments() -> Vec<PathSegment> {
    vec![
        PathSegment::SetTangent { deg: 180.0 },
        PathSegment::SplineToLinearHeading {
            target: Pose::new(37.0, 0.0, 180.0),
            tangent_deg: 270.0,
        },
        PathSegment::SetTangent { deg: 270.0 },
        PathSegment::SplineToConstantHeading {
            x: 60.0,
            y: -38.0,
            tangent_deg: 0.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_high_preset_carries_source_constants() {
        let config = RoutineConfig::net_high();
        assert_eq!(config.lift.motor, "vertLinArm");
        assert!((config.lift.power - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.lift.raise_target, 3000);
        assert_eq!(config.lift.upper_limit, 4000);
        assert_eq!(config.lift.lower_floor, 100);
        assert_eq!(config.lift.lower_limit, 50);
        assert_eq!(config.lift.ascent_target, Some(300));
        assert!((config.intake.reset_position - 0.178).abs() < f64::EPSILON);
        assert!((config.intake.release_position - 0.356).abs() < f64::EPSILON);
        assert_eq!(config.start_pose, Pose::new(60.0, -35.0, 180.0));
        assert_eq!(config.deliver_segments.len(), 4);
        assert_eq!(config.park_segments.len(), 4);
    }

    #[test]
    fn chamber_preset_differs_only_in_plan_constants() {
        let net = RoutineConfig::net_high();
        let chamber = RoutineConfig::chamber();
        // Same lift and intake hardware and thresholds.
        assert_eq!(chamber.lift.raise_target, net.lift.raise_target);
        assert_eq!(chamber.intake, net.intake);
        // No end-game ascent on the chamber side.
        assert_eq!(chamber.lift.ascent_target, None);
        assert_eq!(chamber.start_pose, Pose::new(60.0, 35.0, 180.0));
        assert_eq!(chamber.deliver_segments.len(), 2);
    }

    #[test]
    fn minimal_toml_falls_back_to_defaults() {
        let config: RoutineConfig = toml::from_str(
            r#"
            name = "tuning-run"

            [lift]
            raise_target = 2500
            "#,
        )
        .unwrap();
        assert_eq!(config.name, "tuning-run");
        assert_eq!(config.lift.raise_target, 2500);
        // Untouched fields keep the preset defaults.
        assert_eq!(config.lift.upper_limit, 4000);
        assert_eq!(config.intake.servo, "intake");
        assert!(!config.deliver_segments.is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let config = RoutineConfig::chamber();
        let text = toml::to_string(&config).unwrap();
        let back: RoutineConfig = toml::from_str(&text).unwrap();
        assert_eq!(config, back);
    }
}
