//! Core domain: game state, level reload flow and camera.

mod events;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use events::ReloadLevelEvent;
pub use resources::PendingReload;
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{schedule_reloads, setup_camera, start_playing, tick_pending_reload};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_message::<ReloadLevelEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, start_playing.run_if(in_state(GameState::Boot)))
            .add_systems(
                Update,
                (schedule_reloads, tick_pending_reload)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
