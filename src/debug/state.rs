//! Debug domain: state for the dev overlay.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether the controller info panel and probe gizmos are shown
    pub show_info: bool,
    /// Whether the player sprite is tinted by dash phase
    pub tint_dash: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            show_info: false,
            tint_dash: true,
        }
    }
}
