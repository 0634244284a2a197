//! Data definitions for the controller RON file.
//!
//! These structs mirror assets/data/controller.ron and are converted into
//! the runtime `MovementTuning` resource once loaded and validated.

use avian2d::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{GameLayer, MovementTuning};

// ============================================================================
// Controller (controller.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControllerDef {
    pub schema_version: u32,
    pub speed: f32,
    pub jump_force: f32,
    pub dash: DashDef,
    pub jump_arc: JumpArcDef,
    /// Magnitude of world gravity
    pub gravity: f32,
    #[serde(default = "default_gravity_scale")]
    pub gravity_scale: f32,
    pub ground_check: GroundCheckDef,
    #[serde(default = "default_reload_delay")]
    pub reload_delay: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashDef {
    pub force: f32,
    pub duration: f32,
    pub cooldown: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JumpArcDef {
    pub fall_multiplier: f32,
    pub low_jump_multiplier: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroundCheckDef {
    /// How far below the collider the shape-cast reaches
    pub distance: f32,
    pub layers: Vec<GameLayer>,
}

fn default_gravity_scale() -> f32 {
    1.0
}

fn default_reload_delay() -> f32 {
    1.0
}

impl GroundCheckDef {
    pub fn mask(&self) -> u32 {
        self.layers
            .iter()
            .fold(0, |mask, layer| mask | layer.to_bits())
    }
}

impl ControllerDef {
    pub fn to_tuning(&self) -> MovementTuning {
        MovementTuning {
            speed: self.speed,
            jump_force: self.jump_force,
            dash_force: self.dash.force,
            dash_duration: self.dash.duration,
            dash_cooldown: self.dash.cooldown,
            fall_multiplier: self.jump_arc.fall_multiplier,
            low_jump_multiplier: self.jump_arc.low_jump_multiplier,
            gravity: self.gravity,
            gravity_scale: self.gravity_scale,
            ground_check_distance: self.ground_check.distance,
            ground_mask: self.ground_check.mask(),
            reload_delay: self.reload_delay,
        }
    }
}
