//! Movement domain: components, motion states and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, slopes)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Vertical motion mode of a controlled body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum AirState {
    /// Standing on ground
    #[default]
    Grounded,
    /// Not touching ground and not jumping
    FreeFall,
    /// Following the jump curve
    Jumping,
}

/// Horizontal motion mode of a controlled body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum WalkState {
    #[default]
    Idle,
    Walking,
}

/// Mutable per-body motion state, owned by a [`MotionController`].
///
/// [`MotionController`]: crate::movement::MotionController
#[derive(Debug, Clone, Default, Reflect)]
pub struct MotionState {
    /// Authoritative velocity for the current tick.
    pub velocity: Vec2,
    pub air_state: AirState,
    pub walk_state: WalkState,
    /// Time spent in the current jump. Only meaningful while `Jumping`.
    pub jump_elapsed: f32,
    /// Set by the contact sampler, cleared at the end of every tick.
    pub grounded_this_tick: bool,
    /// Latest horizontal input in [-1, 1].
    pub move_axis: f32,
    /// Jump press waiting to be consumed at the start of the next tick.
    pub jump_requested: bool,
}

/// Spawn position used when a level reset returns the body to its start.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnPoint(pub Vec2);
