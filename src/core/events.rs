//! Core domain: events for level flow.

use bevy::ecs::message::Message;

/// Event fired when the deferred reload comes due
#[derive(Debug)]
pub struct ReloadLevelEvent;

impl Message for ReloadLevelEvent {}
