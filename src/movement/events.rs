//! Movement domain: external commands for controlled bodies.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Return controllers to their initial state. Issued by the host (level
/// restart, debug key); the controller never sends it itself.
#[derive(Debug, Clone, Copy)]
pub struct ResetMotion {
    /// `None` resets every controller.
    pub entity: Option<Entity>,
}

impl Message for ResetMotion {}

impl ResetMotion {
    pub fn all() -> Self {
        Self { entity: None }
    }

    pub fn entity(entity: Entity) -> Self {
        Self {
            entity: Some(entity),
        }
    }

    pub fn applies_to(&self, entity: Entity) -> bool {
        self.entity.is_none_or(|target| target == entity)
    }
}
