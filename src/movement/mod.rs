//! Movement domain: fixed-step character motion controller.
//!
//! Each tick, contacts gathered since the previous tick decide groundedness,
//! the air state resolves before vertical velocity is computed, then the walk
//! state drives horizontal velocity and the result is written to the body.

mod components;
mod contact;
mod controller;
mod curve;
mod events;
mod horizontal;
mod resources;
mod systems;
mod vertical;


pub use components::{AirState, GameLayer, MotionState, Player, SpawnPoint, WalkState};
pub use contact::{ContactSample, sample_contacts, unsigned_angle_degrees};
pub use controller::{AXIS_EPSILON, MotionController, SkipReason, TickOutcome, VelocityIntegrator};
pub use curve::{JumpCurve, JumpEase, Keyframe};
pub use events::ResetMotion;
pub use horizontal::{apply_horizontal, move_towards};
pub use resources::{JumpProfile, MIN_JUMP_DURATION, MovementConfig, MovementInput, MovementTuning};
pub use vertical::{apply_gravity, apply_vertical, resolve_air_state};

use bevy::prelude::*;

use crate::movement::systems::{
    apply_config_changes, apply_motion_resets, dispatch_input, read_input, sample_ground_contacts,
    tick_motion_controllers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<AirState>()
            .register_type::<WalkState>()
            .register_type::<MotionState>()
            .register_type::<ContactSample>()
            .register_type::<JumpCurve>()
            .init_resource::<MovementConfig>()
            .init_resource::<MovementInput>()
            .add_message::<ResetMotion>()
            .add_systems(
                Update,
                (read_input, dispatch_input, apply_motion_resets).chain(),
            )
            .add_systems(Update, apply_config_changes)
            .add_systems(
                FixedUpdate,
                (sample_ground_contacts, tick_motion_controllers).chain(),
            );
    }
}
