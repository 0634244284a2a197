//! Movement domain: messages raised by the motion controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::Effect;

/// A side effect requested by a character's controller
#[derive(Debug, Clone, Copy)]
pub struct ControllerEffectEvent {
    pub entity: Entity,
    pub effect: Effect,
}

impl Message for ControllerEffectEvent {}

/// Walk animation reached a footfall frame
#[derive(Debug)]
pub struct FootstepEvent {
    pub entity: Entity,
}

impl Message for FootstepEvent {}
