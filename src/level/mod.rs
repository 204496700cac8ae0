//! Level domain: the demo room and the player body.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MotionController, MovementConfig, Player, SpawnPoint};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
const PLAYER_SPAWN: Vec2 = Vec2::new(-300.0, -120.0);

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_test_room, spawn_player));
    }
}

/// Static block with a sprite and a matching rectangle collider.
fn block(size: Vec2, position: Vec2, angle: f32, color: Color) -> impl Bundle {
    (
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0))
            .with_rotation(Quat::from_rotation_z(angle)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
    )
}

fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Floor
    commands.spawn((
        block(
            Vec2::new(1000.0, 40.0),
            Vec2::new(0.0, -200.0),
            0.0,
            ground_color,
        ),
        ground_layers,
    ));

    // Side walls
    for x in [-520.0, 520.0] {
        commands.spawn((
            block(Vec2::new(40.0, 600.0), Vec2::new(x, 80.0), 0.0, wall_color),
            wall_layers,
        ));
    }

    // Platforms, stepping up to the right
    for (width, position) in [
        (150.0, Vec2::new(-250.0, -60.0)),
        (150.0, Vec2::new(0.0, 40.0)),
        (120.0, Vec2::new(250.0, 140.0)),
    ] {
        commands.spawn((
            block(Vec2::new(width, 20.0), position, 0.0, platform_color),
            ground_layers,
        ));
    }

    // Gentle slope (30 degrees) counts as ground
    commands.spawn((
        block(
            Vec2::new(260.0, 20.0),
            Vec2::new(330.0, -140.0),
            30.0_f32.to_radians(),
            ground_color,
        ),
        ground_layers,
    ));

    // Steep slope (60 degrees) exceeds the default incline limit
    commands.spawn((
        block(
            Vec2::new(200.0, 20.0),
            Vec2::new(-420.0, -110.0),
            (-60.0_f32).to_radians(),
            wall_color,
        ),
        ground_layers,
    ));

    // Pillar to walk into
    commands.spawn((
        block(
            Vec2::new(30.0, 120.0),
            Vec2::new(-120.0, -120.0),
            0.0,
            wall_color,
        ),
        wall_layers,
    ));

    info!("Test room spawned");
}

fn spawn_player(mut commands: Commands, config: Res<MovementConfig>) {
    commands.spawn((
        // Identity & Movement
        (
            Player,
            MotionController::from_config(&config),
            SpawnPoint(PLAYER_SPAWN),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN.extend(1.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // The controller owns gravity
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
