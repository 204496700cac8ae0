//! Debug overlay for tuning movement (dev-tools only).
//!
//! Features:
//! - Foot-height line and last accepted ground contact per controller
//! - Text overlay with the player's motion state
//!
//! Both are toggled with F1. Nothing here writes to a controller.

use bevy::prelude::*;

use crate::movement::{AirState, MotionController, Player};

/// Half-width of the drawn foot-height line, in world units.
const FOOT_LINE_HALF_WIDTH: f32 = 16.0;

// ============================================================================
// Debug State Resource
// ============================================================================

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub visible: bool,
}

/// Marker for the motion info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

// ============================================================================
// Plugin
// ============================================================================

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, toggle_debug)
            .add_systems(
                Update,
                (draw_ground_probes, update_debug_info_overlay)
                    .after(toggle_debug)
                    .run_if(|state: Res<DebugState>| state.visible),
            )
            .add_systems(
                Update,
                despawn_debug_info_overlay.run_if(|state: Res<DebugState>| !state.visible),
            );
    }
}

// ============================================================================
// Systems
// ============================================================================

fn toggle_debug(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.visible = !debug_state.visible;
        let label = if debug_state.visible { "on" } else { "off" };
        info!("Debug overlay: {}", label);
    }
}

fn air_state_color(state: AirState) -> Color {
    match state {
        AirState::Grounded => Color::srgb(0.3, 0.9, 0.4),
        AirState::Jumping => Color::srgb(0.9, 0.8, 0.3),
        AirState::FreeFall => Color::srgb(0.9, 0.4, 0.3),
    }
}

fn draw_ground_probes(mut gizmos: Gizmos, query: Query<(&GlobalTransform, &MotionController)>) {
    for (transform, controller) in &query {
        let color = air_state_color(controller.air_state());
        let foot = controller.tuning().foot_height;

        let left = transform.transform_point(Vec3::new(-FOOT_LINE_HALF_WIDTH, foot, 0.0));
        let right = transform.transform_point(Vec3::new(FOOT_LINE_HALF_WIDTH, foot, 0.0));
        gizmos.line_2d(left.truncate(), right.truncate(), color);

        if let Some(contact) = controller.last_ground_contact() {
            let origin = transform.translation().truncate();
            let point = transform
                .transform_point(contact.local_point.extend(0.0))
                .truncate();
            gizmos.line_2d(origin, point, Color::WHITE);
            let normal_end = point + contact.normal * 12.0;
            gizmos.line_2d(point, normal_end, Color::srgb(0.3, 0.6, 1.0));
        }
    }
}

fn update_debug_info_overlay(
    mut commands: Commands,
    player_query: Query<(&Transform, &MotionController), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    // Ensure overlay exists
    let Ok(mut text) = overlay_query.single_mut() else {
        spawn_debug_info_overlay(&mut commands);
        return;
    };

    if let Some((transform, controller)) = player_query.iter().next() {
        let pos = transform.translation;
        let velocity = controller.velocity();
        **text = format!(
            "Pos: ({:.0}, {:.0})\nVel: ({:.1}, {:.1})\nAir: {:?}\nWalk: {:?}\nJump: {:.2}/{:.2}s",
            pos.x,
            pos.y,
            velocity.x,
            velocity.y,
            controller.air_state(),
            controller.walk_state(),
            controller.state().jump_elapsed,
            controller.jump_profile().duration(),
        );
    }
}

fn despawn_debug_info_overlay(
    mut commands: Commands,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    for entity in &existing_overlay {
        commands.entity(entity).despawn();
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
    ));
}
