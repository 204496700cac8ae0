//! Movement domain: horizontal motion model (Idle / Walking).

use crate::movement::{MotionState, MovementTuning, WalkState};

pub fn apply_horizontal(state: &mut MotionState, tuning: &MovementTuning, dt: f32) {
    state.velocity.x = match state.walk_state {
        WalkState::Idle => move_towards(state.velocity.x, 0.0, tuning.deceleration * dt),
        WalkState::Walking => move_towards(
            state.velocity.x,
            state.move_axis * tuning.walk_speed,
            tuning.acceleration * dt,
        ),
    };
}

/// Step `current` toward `target` by at most `max_delta`, landing exactly on
/// `target` instead of overshooting it.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}
