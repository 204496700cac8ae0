//! Serde mirrors of the movement configuration files.
//!
//! These structs match `assets/data/movement.ron` (or a `.json` equivalent)
//! and are turned into runtime types by [`accept_movement_config`].
//!
//! [`accept_movement_config`]: super::accept_movement_config

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::JumpCurve;

/// Serializable Vec2 for config files.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for Vec2Def {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MovementConfigDef {
    pub schema_version: u32,
    pub gravity: Vec2Def,
    pub walk_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub foot_height: f32,
    /// Degrees, 0..=180.
    pub incline_limit: f32,
    pub jump: JumpDef,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct JumpDef {
    #[serde(default)]
    pub curve: JumpCurve,
    pub duration: f32,
    #[serde(default = "default_jump_height")]
    pub height: f32,
}

fn default_jump_height() -> f32 {
    1.0
}
