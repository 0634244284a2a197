//! Content domain: data-driven controller tuning loaded from RON.

mod data;
mod loader;
mod validation;

pub use data::ControllerDef;
pub use loader::{ContentLoadError, load_controller, parse_ron};
pub use validation::{ValidationError, validate_controller};

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content);
    }
}

/// Load controller tuning from assets/data and publish it, falling back to
/// built-in defaults when the file is missing or invalid.
fn load_content(mut commands: Commands) {
    let tuning = match load_controller(Path::new("assets/data")) {
        Ok(def) => {
            let errors = validate_controller(&def);
            if errors.is_empty() {
                info!(
                    "Loaded controller tuning (schema v{}): speed={}, jump_force={}, dash_force={}",
                    def.schema_version, def.speed, def.jump_force, def.dash.force
                );
                def.to_tuning()
            } else {
                for e in &errors {
                    warn!("{}", e);
                }
                warn!(
                    "Controller data has {} validation errors, using default tuning",
                    errors.len()
                );
                MovementTuning::default()
            }
        }
        Err(e) => {
            error!("{}", e);
            warn!("Using default controller tuning");
            MovementTuning::default()
        }
    };

    debug!(
        "Full jump height {:.1}, dash distance {:.1}",
        tuning.full_jump_height(),
        tuning.dash_distance()
    );
    commands.insert_resource(Gravity(Vec2::NEG_Y * tuning.gravity));
    commands.insert_resource(tuning);
}
