//! Level domain: test level layout and player spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::hazards::Hazard;
use crate::level::LevelEntity;
use crate::movement::{GameLayer, Ground, MotionController, MovementTuning, Player};
use crate::sprites::AnimationController;

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
const PLAYER_SPAWN: Vec3 = Vec3::new(-300.0, -100.0, 0.0);

pub(crate) fn spawn_level(commands: &mut Commands, tuning: &MovementTuning) {
    spawn_geometry(commands);
    spawn_player(commands, tuning);
    info!("Level spawned");
}

fn spawn_player(commands: &mut Commands, tuning: &MovementTuning) {
    commands.spawn((
        // Identity & control
        (
            Player,
            LevelEntity,
            MotionController::new(tuning.clone()),
            AnimationController::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(tuning.gravity_scale),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Hazard]),
        ),
    ));
}

fn spawn_geometry(commands: &mut Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor with a spike pit in the middle
    spawn_ground(commands, Vec2::new(-250.0, -200.0), Vec2::new(300.0, 40.0), ground_color);
    spawn_ground(commands, Vec2::new(250.0, -200.0), Vec2::new(300.0, 40.0), ground_color);
    spawn_ground(commands, Vec2::new(0.0, -300.0), Vec2::new(200.0, 40.0), ground_color);

    // Platforms
    spawn_ground(commands, Vec2::new(-250.0, -50.0), Vec2::new(150.0, 20.0), platform_color);
    spawn_ground(commands, Vec2::new(250.0, 50.0), Vec2::new(150.0, 20.0), platform_color);
    spawn_ground(commands, Vec2::new(0.0, 150.0), Vec2::new(120.0, 20.0), platform_color);

    // Spikes along the pit floor
    for x in [-75.0, -25.0, 25.0, 75.0] {
        spawn_spike(commands, Vec2::new(x, -270.0));
    }
}

fn spawn_ground(commands: &mut Commands, pos: Vec2, size: Vec2, color: Color) {
    commands.spawn((
        Ground,
        LevelEntity,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(pos.x, pos.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

fn spawn_spike(commands: &mut Commands, pos: Vec2) {
    let size = Vec2::new(40.0, 20.0);
    commands.spawn((
        Hazard,
        LevelEntity,
        Sprite {
            color: Color::srgb(0.8, 0.15, 0.15),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(pos.x, pos.y, 0.0),
        Collider::rectangle(size.x, size.y),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]),
    ));
}
