//! Movement domain: fixed-step controller tick, config updates and resets.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{MotionController, MovementConfig, ResetMotion, SpawnPoint};

pub(crate) fn tick_motion_controllers(
    time: Res<Time>,
    mut query: Query<(&mut MotionController, Option<&mut LinearVelocity>)>,
) {
    let dt = time.delta_secs();

    for (mut controller, mut velocity) in &mut query {
        controller.tick(velocity.as_deref_mut(), dt);
    }
}

/// Push reloaded configuration into every live controller.
pub(crate) fn apply_config_changes(
    config: Res<MovementConfig>,
    mut query: Query<&mut MotionController>,
) {
    if !config.is_changed() || config.is_added() {
        return;
    }

    for mut controller in &mut query {
        controller.set_config(&config);
    }
    info!(
        "Movement config applied to {} controller(s)",
        query.iter().count()
    );
}

pub(crate) fn apply_motion_resets(
    mut resets: MessageReader<ResetMotion>,
    mut query: Query<(
        Entity,
        &mut MotionController,
        Option<&SpawnPoint>,
        Option<&mut Transform>,
        Option<&mut LinearVelocity>,
    )>,
) {
    for reset in resets.read() {
        for (entity, mut controller, spawn, transform, velocity) in &mut query {
            if !reset.applies_to(entity) {
                continue;
            }

            controller.reset();

            if let (Some(spawn), Some(mut transform)) = (spawn, transform) {
                transform.translation = spawn.0.extend(transform.translation.z);
            }
            if let Some(mut velocity) = velocity {
                velocity.0 = Vec2::ZERO;
            }

            info!("Motion reset: entity={:?}", entity);
        }
    }
}
