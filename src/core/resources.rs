//! Core domain: shared resources for level flow.

use bevy::prelude::*;

/// A level reload waiting for its delay to run out.
/// At most one is pending; a second request never shortens or extends it.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PendingReload {
    pub remaining: f32,
}

impl PendingReload {
    pub fn new(delay: f32) -> Self {
        Self {
            remaining: delay.max(0.0),
        }
    }

    /// Count down by `dt`. Returns true once the delay has fully elapsed.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}
