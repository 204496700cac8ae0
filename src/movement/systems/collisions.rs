//! Movement domain: ground contact sampling from avian contact pairs.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ContactSample, MotionController};

/// Feed every touching contact pair of a controlled body to its sampler.
///
/// Runs in `FixedUpdate` before the controller tick. avian steps in
/// `FixedPostUpdate`, so the pairs seen here are the ones produced by the
/// previous step, covering both newly started and persisting contacts.
pub(crate) fn sample_ground_contacts(
    collisions: Collisions,
    mut query: Query<(Entity, &GlobalTransform, &mut MotionController)>,
) {
    for (entity, body_transform, mut controller) in &mut query {
        for pair in collisions.collisions_with(entity) {
            if !pair.is_touching() {
                continue;
            }

            let samples = pair.manifolds.iter().flat_map(|manifold| {
                let normal = normal_toward_body(entity, pair.collider1, manifold.normal);
                manifold.points.iter().map(move |point| {
                    ContactSample::from_world(body_transform, point.point, normal)
                })
            });

            if controller.on_contact(samples) {
                break;
            }
        }
    }
}

/// Manifold normals point from collider1 to collider2. The sampler wants them
/// pointing out of the other surface toward the body.
pub(crate) fn normal_toward_body(body: Entity, collider1: Entity, normal: Vec2) -> Vec2 {
    if collider1 == body { -normal } else { normal }
}
