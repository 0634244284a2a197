//! Movement domain: ground detection against a real avian world.

use avian2d::prelude::*;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::ground::ShapeCastGroundProbe;
use crate::movement::{GameLayer, GroundProbe};

const FIXED_UPDATE_HZ: f64 = 60.0;
const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
const CHECK_DISTANCE: f32 = 4.0;

/// Top surface of the slab spawned by `spawn_slab`.
const SLAB_TOP: f32 = 10.0;

fn create_test_app() -> App {
    let mut app = App::new();

    app.add_plugins(MinimalPlugins);
    app.add_plugins(TransformPlugin);
    // Avian's collider hierarchy plugin expects a scene spawner
    app.insert_resource(bevy::scene::SceneSpawner::default());
    app.add_plugins(PhysicsPlugins::default());
    app.insert_resource(Time::<Fixed>::from_hz(FIXED_UPDATE_HZ));

    app.finish();
    app.cleanup();
    app
}

/// A wide static slab centered on the origin, 20 units thick.
fn spawn_slab(app: &mut App, layer: GameLayer) -> Entity {
    let transform = Transform::from_translation(Vec3::ZERO);
    app.world_mut()
        .spawn((
            transform,
            GlobalTransform::from(transform),
            RigidBody::Static,
            Collider::rectangle(400.0, SLAB_TOP * 2.0),
            CollisionLayers::new(layer, [GameLayer::Player]),
        ))
        .id()
}

/// Advance one fixed timestep so the physics schedule runs.
fn tick(app: &mut App) {
    let timestep = std::time::Duration::from_secs_f64(1.0 / FIXED_UPDATE_HZ);
    app.world_mut()
        .resource_mut::<Time<Virtual>>()
        .advance_by(timestep);
    app.update();
}

fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        tick(app);
    }
}

/// Feet `gap` units above the slab top.
fn player_origin(gap: f32) -> Vec2 {
    Vec2::new(0.0, SLAB_TOP + PLAYER_SIZE.y / 2.0 + gap)
}

fn is_grounded_at(app: &mut App, origin: Vec2, ground_mask: u32) -> bool {
    let shape = Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y);
    app.world_mut()
        .run_system_once(move |spatial_query: SpatialQuery| {
            ShapeCastGroundProbe::new(
                &spatial_query,
                &shape,
                origin,
                CHECK_DISTANCE,
                ground_mask,
                Entity::PLACEHOLDER,
            )
            .is_grounded()
        })
        .expect("ground check system should run")
}

#[test]
fn test_player_resting_on_ground_layer_is_grounded() {
    let mut app = create_test_app();
    spawn_slab(&mut app, GameLayer::Ground);
    run_frames(&mut app, 10);

    let grounded = is_grounded_at(&mut app, player_origin(1.0), GameLayer::Ground.to_bits());

    assert!(grounded);
}

#[test]
fn test_empty_ground_mask_is_never_grounded() {
    let mut app = create_test_app();
    spawn_slab(&mut app, GameLayer::Ground);
    run_frames(&mut app, 10);

    assert!(!is_grounded_at(&mut app, player_origin(1.0), 0));
}

#[test]
fn test_collider_outside_ground_mask_is_not_ground() {
    let mut app = create_test_app();
    spawn_slab(&mut app, GameLayer::Default);
    run_frames(&mut app, 10);

    let grounded = is_grounded_at(&mut app, player_origin(1.0), GameLayer::Ground.to_bits());

    assert!(!grounded);
}

#[test]
fn test_ground_beyond_check_distance_is_not_grounded() {
    let mut app = create_test_app();
    spawn_slab(&mut app, GameLayer::Ground);
    run_frames(&mut app, 10);

    let far = player_origin(CHECK_DISTANCE * 3.0);

    assert!(!is_grounded_at(&mut app, far, GameLayer::Ground.to_bits()));
}
