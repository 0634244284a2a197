//! Movement domain: outbound effects and the ground query seam.
//!
//! The controller never touches audio, animation or scene state directly.
//! It reports what should happen through an [`EffectSink`], and it learns
//! whether it is standing on something through a [`GroundProbe`].

use crate::movement::VisualState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKind {
    Jump,
    Dash,
    Footstep,
    Death,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    PlaySound(SoundKind),
    SetVisualState(VisualState),
    /// Reload the current level once `delay` seconds have passed
    ScheduleReload { delay: f32 },
}

/// Fire-and-forget receiver for controller side effects.
pub trait EffectSink {
    fn play_sound(&mut self, sound: SoundKind);
    fn set_visual_state(&mut self, state: VisualState);
    fn schedule_reload(&mut self, delay: f32);
}

/// Buffers effects so they can be dispatched after the controller is done.
impl EffectSink for Vec<Effect> {
    fn play_sound(&mut self, sound: SoundKind) {
        self.push(Effect::PlaySound(sound));
    }

    fn set_visual_state(&mut self, state: VisualState) {
        self.push(Effect::SetVisualState(state));
    }

    fn schedule_reload(&mut self, delay: f32) {
        self.push(Effect::ScheduleReload { delay });
    }
}

/// Answers "is the character standing on ground right now?".
pub trait GroundProbe {
    fn is_grounded(&self) -> bool;
}

impl<F> GroundProbe for F
where
    F: Fn() -> bool,
{
    fn is_grounded(&self) -> bool {
        self()
    }
}
