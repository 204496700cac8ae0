//! Config domain: loading movement tuning from data files.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{JumpDef, MovementConfigDef, Vec2Def};
pub use loader::{ConfigFormat, ConfigLoadError, load_movement_config, parse_movement_config};
pub use validation::{MOVEMENT_SCHEMA_VERSION, ValidationError, accept_movement_config};

use bevy::prelude::*;
use std::path::{Path, PathBuf};

use crate::movement::MovementConfig;

/// Where the movement configuration is read from.
#[derive(Resource, Debug, Clone)]
pub struct MovementConfigPath(pub PathBuf);

impl Default for MovementConfigPath {
    fn default() -> Self {
        Self(PathBuf::from("assets/data/movement.ron"))
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementConfigPath>()
            .init_resource::<MovementConfig>()
            .add_systems(PreStartup, load_movement_config_at_startup)
            .add_systems(Update, reload_movement_config);
    }
}

/// Read, parse and accept a config file, logging every problem found.
fn read_movement_config(path: &Path) -> Option<MovementConfig> {
    let def = match load_movement_config(path) {
        Ok(def) => def,
        Err(e) => {
            error!("{}", e);
            return None;
        }
    };

    match accept_movement_config(&def) {
        Ok(config) => Some(config),
        Err(errors) => {
            for e in &errors {
                error!("{}: {}", path.display(), e);
            }
            None
        }
    }
}

fn load_movement_config_at_startup(path: Res<MovementConfigPath>, mut commands: Commands) {
    match read_movement_config(&path.0) {
        Some(config) => {
            info!(
                "Movement config loaded from {}: walk_speed={}, jump_duration={}, incline_limit={}",
                path.0.display(),
                config.tuning.walk_speed,
                config.jump.duration(),
                config.tuning.incline_limit
            );
            commands.insert_resource(config);
        }
        None => warn!("Using default movement config"),
    }
}

fn reload_movement_config(
    keyboard: Res<ButtonInput<KeyCode>>,
    path: Res<MovementConfigPath>,
    mut config: ResMut<MovementConfig>,
) {
    if !keyboard.just_pressed(KeyCode::F5) {
        return;
    }

    if let Some(reloaded) = read_movement_config(&path.0) {
        info!("Movement config reloaded from {}", path.0.display());
        *config = reloaded;
    }
}
