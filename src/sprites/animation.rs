//! Animation state and playback.
//!
//! Handles the visual states the controller reports (idle, walk, falling,
//! die) and frame progression. Walk frames double as footstep cues.

use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{ControllerEffectEvent, Effect, FootstepEvent, VisualState};

/// Walk frames on which a foot hits the floor.
const FOOTSTEP_FRAMES: [u32; 2] = [0, 2];

/// Component for animation playback on a character sprite.
#[derive(Component, Debug, Clone)]
pub struct AnimationController {
    /// Current animation state.
    pub state: VisualState,
    /// Previous state (for detecting transitions).
    pub previous_state: VisualState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether the animation should loop.
    pub looping: bool,
    /// Whether the animation has finished (for non-looping).
    pub finished: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: VisualState::Idle,
            previous_state: VisualState::Idle,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
            looping: true,
            finished: false,
        }
    }
}

/// What happened during one call to [`AnimationController::advance`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameAdvance {
    pub footstep: bool,
    pub finished: bool,
}

impl AnimationController {
    /// Set the animation state, resetting frame if state changed.
    pub fn set_state(&mut self, state: VisualState) {
        if self.state == state {
            return;
        }

        self.previous_state = self.state;
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;
        self.looping = state != VisualState::Die;

        self.total_frames = match state {
            VisualState::Idle => 4,
            VisualState::Walk => 4,
            VisualState::Falling => 2,
            VisualState::Die => 4,
        };

        self.frame_duration = match state {
            VisualState::Walk => 0.12,
            VisualState::Die => 0.2,
            _ => 0.15,
        };
    }

    /// Get the animation name (e.g., "idle", "walk").
    pub fn animation_name(&self) -> &'static str {
        match self.state {
            VisualState::Idle => "idle",
            VisualState::Walk => "walk",
            VisualState::Falling => "fall",
            VisualState::Die => "die",
        }
    }

    /// Move playback forward by `dt`, at most one frame per call.
    pub fn advance(&mut self, dt: f32) -> FrameAdvance {
        let mut result = FrameAdvance::default();
        if self.finished {
            return result;
        }

        self.frame_timer += dt;
        if self.frame_timer < self.frame_duration {
            return result;
        }

        self.frame_timer -= self.frame_duration;
        self.current_frame += 1;

        if self.current_frame >= self.total_frames {
            if self.looping {
                self.current_frame = 0;
            } else {
                self.current_frame = self.total_frames - 1;
                self.finished = true;
                result.finished = true;
                return result;
            }
        }

        result.footstep =
            self.state == VisualState::Walk && FOOTSTEP_FRAMES.contains(&self.current_frame);
        result
    }
}

/// Message fired when a non-looping animation completes.
#[derive(Debug)]
pub struct AnimationFinished {
    pub entity: Entity,
    pub state: VisualState,
}

impl Message for AnimationFinished {}

/// Apply visual state changes requested by controllers.
pub fn apply_visual_state(
    mut effect_events: MessageReader<ControllerEffectEvent>,
    mut query: Query<&mut AnimationController>,
) {
    for event in effect_events.read() {
        let Effect::SetVisualState(state) = event.effect else {
            continue;
        };
        let Ok(mut controller) = query.get_mut(event.entity) else {
            continue;
        };

        controller.set_state(state);
        debug!("{:?} animation -> {}", event.entity, controller.animation_name());
    }
}

/// System that updates animation frames based on time.
pub fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<(Entity, &mut AnimationController)>,
    mut footstep_events: MessageWriter<FootstepEvent>,
    mut finished_events: MessageWriter<AnimationFinished>,
) {
    for (entity, mut controller) in &mut query {
        let advance = controller.advance(time.delta_secs());

        if advance.footstep {
            footstep_events.write(FootstepEvent { entity });
        }
        if advance.finished {
            finished_events.write(AnimationFinished {
                entity,
                state: controller.state,
            });
        }
    }
}

/// Fade the sprite out over the death animation.
pub fn apply_death_fade(mut query: Query<(&AnimationController, &mut Sprite)>) {
    for (controller, mut sprite) in &mut query {
        if controller.state != VisualState::Die {
            continue;
        }

        let progress = (controller.current_frame + 1) as f32 / controller.total_frames as f32;
        sprite.color.set_alpha(1.0 - 0.75 * progress);
    }
}

/// Hide the sprite once the death animation has played out.
pub fn hide_after_death(
    mut finished_events: MessageReader<AnimationFinished>,
    mut query: Query<&mut Visibility>,
) {
    for event in finished_events.read() {
        if event.state != VisualState::Die {
            continue;
        }
        let Ok(mut visibility) = query.get_mut(event.entity) else {
            continue;
        };

        *visibility = Visibility::Hidden;
        debug!("{:?} death animation finished", event.entity);
    }
}
