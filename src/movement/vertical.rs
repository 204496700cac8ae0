//! Movement domain: vertical motion model (Grounded / FreeFall / Jumping).

use crate::movement::{AirState, JumpProfile, MotionState, MovementTuning};

/// Resolve the air state for this tick from the contacts sampled since the
/// last one. Must run before [`apply_vertical`].
///
/// Landing always wins, including over a jump whose timer is still running.
pub fn resolve_air_state(state: &MotionState, jump: &JumpProfile) -> AirState {
    if state.grounded_this_tick {
        AirState::Grounded
    } else if state.air_state == AirState::Jumping && state.jump_elapsed < jump.duration() {
        AirState::Jumping
    } else {
        AirState::FreeFall
    }
}

/// Compute the vertical velocity for the current air state.
pub fn apply_vertical(
    state: &mut MotionState,
    tuning: &MovementTuning,
    jump: &JumpProfile,
    dt: f32,
) {
    match state.air_state {
        AirState::Grounded => {
            state.velocity.y = 0.0;
            apply_gravity(state, tuning, dt);
        }
        AirState::Jumping => {
            let prev = state.jump_elapsed;
            state.jump_elapsed += dt;
            if state.jump_elapsed >= jump.duration() {
                state.air_state = AirState::FreeFall;
                apply_gravity(state, tuning, dt);
            } else {
                state.velocity.y = (jump.height_at(state.jump_elapsed) - jump.height_at(prev)) / dt;
            }
        }
        AirState::FreeFall => apply_gravity(state, tuning, dt),
    }
}

/// Accumulate one tick of gravity onto the vertical velocity.
///
/// Shared by Grounded and FreeFall: grounded bodies are snapped to zero and
/// then pulled down again so they keep pressing into the floor.
pub fn apply_gravity(state: &mut MotionState, tuning: &MovementTuning, dt: f32) {
    state.velocity.y += tuning.gravity.y * dt;
}
