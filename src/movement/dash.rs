//! Movement domain: the dash ability state machine.
//!
//! Ready -> Active -> Cooldown -> Ready, advanced once per tick by `dt`.
//! While Active the owner has no horizontal control and zero gravity scale.

use bevy::prelude::*;

use crate::movement::{CharacterState, EffectSink, SoundKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashPhase {
    #[default]
    Ready,
    Active,
    Cooldown,
}

#[derive(Debug, Clone)]
pub struct DashAbility {
    phase: DashPhase,
    /// Time left in the current Active or Cooldown phase
    timer: f32,
    saved_gravity_scale: f32,
    force: f32,
    duration: f32,
    cooldown: f32,
}

impl DashAbility {
    pub fn new(force: f32, duration: f32, cooldown: f32) -> Self {
        Self {
            phase: DashPhase::Ready,
            timer: 0.0,
            saved_gravity_scale: 0.0,
            force,
            duration,
            cooldown,
        }
    }

    pub fn phase(&self) -> DashPhase {
        self.phase
    }

    /// Seconds left in the current phase; zero when Ready.
    pub fn remaining(&self) -> f32 {
        match self.phase {
            DashPhase::Ready => 0.0,
            DashPhase::Active | DashPhase::Cooldown => self.timer.max(0.0),
        }
    }

    /// Count down the running phase and perform any transition that falls due.
    pub fn advance(&mut self, dt: f32, state: &mut CharacterState) {
        match self.phase {
            DashPhase::Ready => {}
            DashPhase::Active => {
                self.timer -= dt;
                if self.timer <= 0.0 {
                    state.gravity_scale = self.saved_gravity_scale;
                    state.can_control = true;
                    self.phase = DashPhase::Cooldown;
                    self.timer = self.cooldown;
                    debug!(
                        "Dash ended: gravity_scale restored to {}, cooldown {}s",
                        state.gravity_scale, self.cooldown
                    );
                }
            }
            DashPhase::Cooldown => {
                self.timer -= dt;
                if self.timer <= 0.0 {
                    self.phase = DashPhase::Ready;
                    self.timer = 0.0;
                    debug!("Dash ready");
                }
            }
        }
    }

    /// Start a dash if the ability is armed. Returns whether it started.
    pub fn try_trigger(&mut self, state: &mut CharacterState, effects: &mut impl EffectSink) -> bool {
        if self.phase != DashPhase::Ready || !state.alive {
            return false;
        }

        self.saved_gravity_scale = state.gravity_scale;
        state.gravity_scale = 0.0;
        state.can_control = false;
        state.velocity = Vec2::new(state.facing.sign() * self.force, 0.0);
        effects.play_sound(SoundKind::Dash);

        self.phase = DashPhase::Active;
        self.timer = self.duration;
        debug!(
            "Dash started: facing={:?}, velocity={}, saved gravity_scale={}",
            state.facing, state.velocity, self.saved_gravity_scale
        );
        true
    }
}
