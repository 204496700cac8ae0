//! Core domain: camera and simulation clock.

use bevy::prelude::*;

/// Rate of the fixed schedule the motion controllers tick in.
pub const FIXED_TIMESTEP_HZ: f64 = 64.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_TIMESTEP_HZ))
            .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.1)))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
