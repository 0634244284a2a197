//! Debug domain: overlay, probe gizmos and dash tint.

use avian2d::prelude::*;
use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::movement::{DashPhase, MotionController, Player};

/// Marker for the controller info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

/// F1 toggles the info overlay and gizmos, F2 the dash tint
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
        info!("Debug info: {}", debug_state.show_info);
    }
    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.tint_dash = !debug_state.tint_dash;
    }
}

/// Draw the box swept by the ground shape-cast.
pub(crate) fn draw_ground_probe(
    mut gizmos: Gizmos,
    debug_state: Res<DebugState>,
    query: Query<(&Transform, &Collider, &MotionController), With<Player>>,
) {
    if !debug_state.show_info {
        return;
    }

    for (transform, collider, controller) in &query {
        let half = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => Vec2::new(12.0, 24.0),
        };
        let distance = controller.tuning().ground_check_distance;
        let center = transform.translation.truncate() - Vec2::new(0.0, distance * 0.5);
        let size = Vec2::new(half.x * 2.0, half.y * 2.0 + distance);

        let color = if controller.state().grounded {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.2, 0.2)
        };
        gizmos.rect_2d(Isometry2d::from_translation(center), size, color);
    }
}

pub(crate) fn tint_by_dash_phase(
    debug_state: Res<DebugState>,
    mut query: Query<(&MotionController, &mut Sprite), With<Player>>,
) {
    for (controller, mut sprite) in &mut query {
        // Dead sprites belong to the death fade
        if !controller.is_alive() {
            continue;
        }

        sprite.color = match (debug_state.tint_dash, controller.dash_phase()) {
            (true, DashPhase::Active) => Color::srgb(0.4, 0.9, 1.0),
            (true, DashPhase::Cooldown) => Color::srgb(0.6, 0.65, 0.8),
            _ => Color::srgb(0.9, 0.9, 0.9),
        };
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
        ZIndex(500),
    ));
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<(&Transform, &MotionController), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, controller)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        let state = controller.state();
        **text = format!(
            "Pos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nGrounded: {}\nFacing: {:?}\nVisual: {:?}\nDash: {:?} ({:.2}s)\nGravity scale: {}\nAlive: {}",
            pos.x,
            pos.y,
            state.velocity.x,
            state.velocity.y,
            state.grounded,
            state.facing,
            state.visual_state,
            controller.dash_phase(),
            controller.dash_remaining(),
            state.gravity_scale,
            state.alive
        );
    }
}
