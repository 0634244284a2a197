//! Movement domain: the per-tick motion controller.

use bevy::prelude::*;

use crate::movement::{
    DashAbility, DashPhase, EffectSink, Facing, GroundProbe, MovementInput, MovementTuning,
    SoundKind, VisualState,
};

/// Horizontal speed below which a grounded character counts as idle.
const IDLE_DEAD_ZONE: f32 = 0.01;

/// Physical and control state of one character.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterState {
    pub velocity: Vec2,
    pub gravity_scale: f32,
    pub facing: Facing,
    pub grounded: bool,
    pub can_control: bool,
    pub alive: bool,
    pub visual_state: VisualState,
}

impl CharacterState {
    pub fn new(gravity_scale: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            gravity_scale,
            facing: Facing::Right,
            grounded: false,
            can_control: true,
            alive: true,
            visual_state: VisualState::Idle,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct MotionController {
    tuning: MovementTuning,
    state: CharacterState,
    dash: DashAbility,
    last_emitted_visual: Option<VisualState>,
}

impl MotionController {
    /// Build a controller whose tuning is fixed for the character's lifetime.
    pub fn new(tuning: MovementTuning) -> Self {
        Self {
            state: CharacterState::new(tuning.gravity_scale),
            dash: DashAbility::new(tuning.dash_force, tuning.dash_duration, tuning.dash_cooldown),
            tuning,
            last_emitted_visual: None,
        }
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn dash_phase(&self) -> DashPhase {
        self.dash.phase()
    }

    pub fn dash_remaining(&self) -> f32 {
        self.dash.remaining()
    }

    pub fn is_alive(&self) -> bool {
        self.state.alive
    }

    /// Pull the body's current velocity and gravity scale in before a tick.
    pub fn sync_from_body(&mut self, velocity: Vec2, gravity_scale: f32) {
        if !self.state.alive {
            return;
        }
        self.state.velocity = velocity;
        self.state.gravity_scale = gravity_scale;
    }

    /// Run one simulation step.
    pub fn tick(
        &mut self,
        input: &MovementInput,
        ground: &impl GroundProbe,
        effects: &mut impl EffectSink,
        dt: f32,
    ) {
        if !self.state.alive {
            return;
        }

        self.dash.advance(dt, &mut self.state);
        let controllable = self.state.can_control;

        let was_grounded = self.state.grounded;
        self.state.grounded = ground.is_grounded();
        if self.state.grounded != was_grounded {
            debug!("Grounded changed: {}", self.state.grounded);
        }

        if controllable {
            self.state.velocity.x = input.axis * self.tuning.speed;
        }

        if controllable && input.jump_just_pressed && self.state.grounded {
            self.state.velocity.y = self.tuning.jump_force;
            effects.play_sound(SoundKind::Jump);
            debug!("Jump: vy={}", self.state.velocity.y);
        }

        self.shape_jump_arc(input.jump_held, dt);

        if input.dash_just_pressed {
            self.dash.try_trigger(&mut self.state, effects);
        }

        self.update_visual_state(effects);

        if controllable {
            self.update_facing(input.axis);
        }
    }

    /// Extra gravity while falling, or while rising with jump released.
    fn shape_jump_arc(&mut self, jump_held: bool, dt: f32) {
        let vy = self.state.velocity.y;
        if vy < 0.0 {
            self.state.velocity.y -= self.tuning.gravity * (self.tuning.fall_multiplier - 1.0) * dt;
        } else if vy > 0.0 && !jump_held {
            self.state.velocity.y -=
                self.tuning.gravity * (self.tuning.low_jump_multiplier - 1.0) * dt;
        }
    }

    /// Derive the visual state every tick, but only push `SetVisualState`
    /// when it differs from the last one emitted.
    ///
    /// Renderers treat a repeated state as a no-op, so dropping repeats only
    /// thins the effect stream. The first tick after construction always
    /// emits.
    fn update_visual_state(&mut self, effects: &mut impl EffectSink) {
        self.state.visual_state = if !self.state.grounded {
            VisualState::Falling
        } else if self.state.velocity.x.abs() < IDLE_DEAD_ZONE {
            VisualState::Idle
        } else {
            VisualState::Walk
        };

        if self.last_emitted_visual != Some(self.state.visual_state) {
            self.last_emitted_visual = Some(self.state.visual_state);
            effects.set_visual_state(self.state.visual_state);
        }
    }

    fn update_facing(&mut self, axis: f32) {
        if axis > 0.0 {
            self.state.facing = Facing::Right;
        } else if axis < 0.0 {
            self.state.facing = Facing::Left;
        }
    }

    /// Terminal transition. Calling it again does nothing.
    ///
    /// An in-flight dash is left exactly where it was, including its zero
    /// gravity scale; the level reload removes the character anyway.
    pub fn die(&mut self, effects: &mut impl EffectSink) {
        if !self.state.alive {
            return;
        }

        self.state.alive = false;
        effects.play_sound(SoundKind::Death);
        effects.set_visual_state(VisualState::Die);
        self.last_emitted_visual = Some(VisualState::Die);
        effects.schedule_reload(self.tuning.reload_delay);
        info!(
            "Player died (dash phase {:?}), reloading in {}s",
            self.dash.phase(),
            self.tuning.reload_delay
        );
    }

    /// Footstep cue from walk animation timing.
    pub fn notify_footstep(&self, effects: &mut impl EffectSink) {
        if self.state.alive {
            effects.play_sound(SoundKind::Footstep);
        }
    }
}
