//! Movement domain: ground contact sampling.
//!
//! Contact geometry arrives once per collision-begin/-stay event, possibly
//! several times per tick. The sampler folds it into a single
//! `grounded_this_tick` flag that the next tick consumes.

use bevy::prelude::*;

use crate::movement::{MotionState, MovementTuning};

/// One contact between the controlled body and another collider.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ContactSample {
    /// Contact point in the body's local space.
    pub local_point: Vec2,
    /// Contact normal in world space, pointing out of the other surface
    /// toward the body.
    pub normal: Vec2,
}

impl ContactSample {
    pub fn new(local_point: Vec2, normal: Vec2) -> Self {
        Self {
            local_point,
            normal,
        }
    }

    /// Build a sample from a world-space contact point, moving the point into
    /// the body's local space (rotation and scale included).
    pub fn from_world(body: &GlobalTransform, world_point: Vec2, normal: Vec2) -> Self {
        let local = body
            .affine()
            .inverse()
            .transform_point3(world_point.extend(0.0));
        Self::new(local.truncate(), normal)
    }

    /// Whether this contact can support the body.
    pub fn is_ground(&self, tuning: &MovementTuning) -> bool {
        self.local_point.y <= tuning.foot_height
            && unsigned_angle_degrees(tuning.gravity, self.normal) >= tuning.incline_limit
    }
}

/// Fold a batch of contacts into the state's ground flag.
///
/// Returns the accepted contact, if this call accepted one.
pub fn sample_contacts(
    state: &mut MotionState,
    tuning: &MovementTuning,
    contacts: impl IntoIterator<Item = ContactSample>,
) -> Option<ContactSample> {
    // Moving up cannot be a landing, and one accepted contact per tick is enough.
    if state.velocity.y > 0.0 || state.grounded_this_tick {
        return None;
    }

    let accepted = contacts.into_iter().find(|c| c.is_ground(tuning))?;
    state.grounded_this_tick = true;
    Some(accepted)
}

/// Unsigned angle between two vectors in degrees, in [0, 180].
/// Degenerate (near-zero) vectors yield 0.
pub fn unsigned_angle_degrees(a: Vec2, b: Vec2) -> f32 {
    let denominator = (a.length_squared() * b.length_squared()).sqrt();
    if denominator < 1.0e-15 {
        return 0.0;
    }
    (a.dot(b) / denominator)
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees()
}
