//! Sprites module for character animation.
//!
//! This module handles:
//! - Animation state driven by controller visual-state effects
//! - Frame playback and footstep cues from walk frames
//! - The death fade-out and hiding the body once it ends

pub mod animation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;

use crate::core::GameState;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationFinished>().add_systems(
            Update,
            (
                apply_visual_state,
                update_animation_frames,
                apply_death_fade,
                hide_after_death,
            )
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}
