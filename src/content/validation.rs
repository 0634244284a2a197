//! Validation for controller tuning values.

use super::data::ControllerDef;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Controller field '{}' {}", self.field, self.message)
    }
}

/// Helper macro for checking a lower bound
macro_rules! check_min {
    ($errors:expr, $value:expr, $field:expr, $min:expr) => {
        if !($value >= $min) {
            $errors.push(ValidationError {
                field: $field,
                message: format!("must be >= {}, got {}", $min, $value),
            });
        }
    };
}

/// Validate a controller definition.
/// Returns a list of validation errors, empty if the values are usable.
pub fn validate_controller(def: &ControllerDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_min!(errors, def.speed, "speed", 0.0);
    check_min!(errors, def.jump_force, "jump_force", 0.0);
    check_min!(errors, def.dash.force, "dash.force", 0.0);
    check_min!(errors, def.dash.duration, "dash.duration", 0.0);
    check_min!(errors, def.dash.cooldown, "dash.cooldown", 0.0);
    check_min!(errors, def.jump_arc.fall_multiplier, "jump_arc.fall_multiplier", 1.0);
    check_min!(
        errors,
        def.jump_arc.low_jump_multiplier,
        "jump_arc.low_jump_multiplier",
        1.0
    );
    check_min!(errors, def.gravity, "gravity", 0.0);
    check_min!(errors, def.ground_check.distance, "ground_check.distance", 0.0);
    check_min!(errors, def.reload_delay, "reload_delay", 0.0);

    // Zero gravity scale is reserved for an active dash
    if !(def.gravity_scale > 0.0) {
        errors.push(ValidationError {
            field: "gravity_scale",
            message: format!("must be > 0, got {}", def.gravity_scale),
        });
    }

    if def.ground_check.layers.is_empty() {
        errors.push(ValidationError {
            field: "ground_check.layers",
            message: "is empty; the character could never be grounded".to_string(),
        });
    }

    errors
}
