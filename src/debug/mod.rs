//! Debug overlay for tuning the controller (dev-tools builds only).
//!
//! Features:
//! - Controller info panel (velocity, grounded, dash phase, gravity scale)
//! - Ground probe gizmo, green when grounded
//! - Sprite tint per dash phase

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::core::GameState;
use crate::debug::systems::{
    draw_ground_probe, handle_debug_hotkeys, tint_by_dash_phase, update_debug_info_overlay,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                handle_debug_hotkeys,
                draw_ground_probe,
                tint_by_dash_phase,
                update_debug_info_overlay,
            )
                .run_if(in_state(GameState::Playing)),
        );
    }
}
