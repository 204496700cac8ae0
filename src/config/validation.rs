//! Acceptance of movement configuration into runtime types.
//!
//! Non-finite numbers are rejected. Values that are finite but out of range
//! are clamped with a warning so a slightly wrong file still produces a
//! playable controller.

use bevy::prelude::*;

use super::data::{JumpDef, MovementConfigDef};
use crate::movement::{JumpCurve, JumpProfile, MIN_JUMP_DURATION, MovementConfig, MovementTuning};

/// Highest schema version this build understands.
pub const MOVEMENT_SCHEMA_VERSION: u32 = 1;

/// A field that could not be accepted.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "movement config field '{}': {}",
            self.field, self.message
        )
    }
}

/// Helper macro for rejecting non-finite numbers
macro_rules! check_finite {
    ($errors:expr, $field:expr, $value:expr) => {
        if !$value.is_finite() {
            $errors.push(ValidationError {
                field: $field,
                message: format!("expected a finite number, got {}", $value),
            });
        }
    };
}

/// Validate a parsed config and build the runtime configuration.
pub fn accept_movement_config(
    def: &MovementConfigDef,
) -> Result<MovementConfig, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if def.schema_version > MOVEMENT_SCHEMA_VERSION {
        errors.push(ValidationError {
            field: "schema_version",
            message: format!(
                "version {} is newer than supported version {}",
                def.schema_version, MOVEMENT_SCHEMA_VERSION
            ),
        });
    }

    check_finite!(errors, "gravity.x", def.gravity.x);
    check_finite!(errors, "gravity.y", def.gravity.y);
    check_finite!(errors, "walk_speed", def.walk_speed);
    check_finite!(errors, "acceleration", def.acceleration);
    check_finite!(errors, "deceleration", def.deceleration);
    check_finite!(errors, "foot_height", def.foot_height);
    check_finite!(errors, "incline_limit", def.incline_limit);
    check_finite!(errors, "jump.duration", def.jump.duration);
    check_finite!(errors, "jump.height", def.jump.height);
    validate_curve(&def.jump.curve, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    let tuning = MovementTuning {
        gravity: def.gravity.into(),
        walk_speed: non_negative("walk_speed", def.walk_speed),
        acceleration: non_negative("acceleration", def.acceleration),
        deceleration: non_negative("deceleration", def.deceleration),
        foot_height: def.foot_height,
        incline_limit: clamp_incline(def.incline_limit),
    };

    Ok(MovementConfig {
        tuning,
        jump: accept_jump(&def.jump),
    })
}

fn validate_curve(curve: &JumpCurve, errors: &mut Vec<ValidationError>) {
    let JumpCurve::Keyframes(points) = curve else {
        return;
    };

    if points.is_empty() {
        errors.push(ValidationError {
            field: "jump.curve",
            message: "keyframed curve needs at least one keyframe".to_string(),
        });
    }
    for point in points {
        check_finite!(errors, "jump.curve.time", point.time);
        check_finite!(errors, "jump.curve.value", point.value);
    }
}

fn accept_jump(def: &JumpDef) -> JumpProfile {
    if def.duration < MIN_JUMP_DURATION {
        warn!(
            "jump.duration {} below minimum, clamped to {}",
            def.duration, MIN_JUMP_DURATION
        );
    }

    // Re-sort keyframes in case the file lists them out of order
    let curve = match &def.curve {
        JumpCurve::Keyframes(points) => JumpCurve::keyframes(points.clone()),
        other => other.clone(),
    };

    JumpProfile::new(curve, def.duration, def.height)
}

fn non_negative(field: &str, value: f32) -> f32 {
    if value < 0.0 {
        warn!("{} {} is negative, clamped to 0", field, value);
        0.0
    } else {
        value
    }
}

fn clamp_incline(degrees: f32) -> f32 {
    let clamped = degrees.clamp(0.0, 180.0);
    if clamped != degrees {
        warn!(
            "incline_limit {} outside 0..=180, clamped to {}",
            degrees, clamped
        );
    }
    clamped
}
