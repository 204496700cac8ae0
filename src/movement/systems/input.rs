//! Movement domain: input sampling and dispatch to controllers.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{MotionController, MovementInput, Player, ResetMotion};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis is carried along but only x drives walking
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.reset_just_pressed = keyboard.just_pressed(KeyCode::KeyR);
}

/// Turn sampled input into discrete controller events: an axis-changed event
/// only when the axis differs from the last one sent, and one jump per press.
pub(crate) fn dispatch_input(
    mut input: ResMut<MovementInput>,
    mut controllers: Query<&mut MotionController, With<Player>>,
    mut resets: MessageWriter<ResetMotion>,
) {
    // A jump pressed on the reset frame is dropped along with the old state
    if input.reset_just_pressed {
        resets.write(ResetMotion::all());
        // Resend the held axis to the freshly reset controllers
        input.last_dispatched_axis = None;
        return;
    }

    let axis_changed = input.last_dispatched_axis != Some(input.axis);
    if !axis_changed && !input.jump_just_pressed {
        return;
    }

    for mut controller in &mut controllers {
        if axis_changed {
            controller.queue_move(input.axis);
        }
        if input.jump_just_pressed {
            controller.queue_jump();
        }
    }

    if axis_changed {
        input.last_dispatched_axis = Some(input.axis);
    }
}
