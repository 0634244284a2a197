//! Movement domain: tuning and input resources.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MovementTuning {
    pub speed: f32,
    pub jump_force: f32,
    pub dash_force: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    /// Extra gravity while falling (1.0 = none)
    pub fall_multiplier: f32,
    /// Extra gravity while rising with jump released (1.0 = none)
    pub low_jump_multiplier: f32,
    /// Magnitude of world gravity, applied downward
    pub gravity: f32,
    /// Baseline body gravity scale, restored after every dash
    pub gravity_scale: f32,
    pub ground_check_distance: f32,
    pub ground_mask: u32,
    pub reload_delay: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 320.0,
            jump_force: 680.0,
            dash_force: 900.0,
            dash_duration: 0.16,
            dash_cooldown: 0.5,
            fall_multiplier: 2.5,
            low_jump_multiplier: 2.0,
            gravity: 1800.0,
            gravity_scale: 1.0,
            ground_check_distance: 4.0,
            ground_mask: GameLayer::Ground.to_bits(),
            reload_delay: 1.0,
        }
    }
}

impl MovementTuning {
    /// Apex height of a full (held) jump with baseline gravity.
    /// Uses h = v² / (2g)
    pub fn full_jump_height(&self) -> f32 {
        let g = self.gravity * self.gravity_scale;
        if g <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_force * self.jump_force / (2.0 * g)
    }

    /// Horizontal distance covered by one dash.
    pub fn dash_distance(&self) -> f32 {
        self.dash_force * self.dash_duration
    }
}

/// Per-frame input sampled from the keyboard.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MovementInput {
    /// Horizontal axis, expected in [-1, 1]
    pub axis: f32,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub dash_just_pressed: bool,
}
