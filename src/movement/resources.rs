//! Movement domain: tuning, jump profile and input resources.

use bevy::prelude::*;

use crate::movement::JumpCurve;

/// Shortest jump the controller accepts. Shorter durations are clamped up to
/// this when a profile is built so the curve fraction never divides by zero.
pub const MIN_JUMP_DURATION: f32 = 1.0e-3;

#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct MovementTuning {
    pub gravity: Vec2,
    pub walk_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    /// Contacts above this body-local height never count as ground.
    pub foot_height: f32,
    /// Minimum angle in degrees between gravity and a contact normal for the
    /// contact to count as ground. Within [0, 180].
    pub incline_limit: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -9.81),
            walk_speed: 10.0,
            acceleration: 20.0,
            deceleration: 30.0,
            foot_height: 0.0,
            incline_limit: 135.0,
        }
    }
}

/// Scripted jump arc.
#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct JumpProfile {
    pub curve: JumpCurve,
    duration: f32,
    /// World units covered by one unit of curve output.
    pub height: f32,
}

impl Default for JumpProfile {
    fn default() -> Self {
        Self {
            curve: JumpCurve::Linear,
            duration: 0.5,
            height: 1.0,
        }
    }
}

impl JumpProfile {
    pub fn new(curve: JumpCurve, duration: f32, height: f32) -> Self {
        Self {
            curve,
            duration: clamp_duration(duration),
            height,
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn set_duration(&mut self, duration: f32) {
        self.duration = clamp_duration(duration);
    }

    /// Height reached after `elapsed` seconds of jumping, in world units.
    pub fn height_at(&self, elapsed: f32) -> f32 {
        self.curve.sample(elapsed / self.duration) * self.height
    }
}

fn clamp_duration(duration: f32) -> f32 {
    if duration.is_finite() && duration >= MIN_JUMP_DURATION {
        duration
    } else {
        MIN_JUMP_DURATION
    }
}

/// Accepted movement configuration; new controllers are built from it.
#[derive(Resource, Debug, Clone, Default)]
pub struct MovementConfig {
    pub tuning: MovementTuning,
    pub jump: JumpProfile,
}

/// Raw input sampled this frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    /// Axis last handed to the controllers, used to send only changes.
    pub last_dispatched_axis: Option<Vec2>,
    pub jump_just_pressed: bool,
    pub reset_just_pressed: bool,
}
