//! Validation for loaded content definitions.

use super::data::*;
use super::registry::ContentRegistry;
use crate::rooms::Room;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}': {}", self.source_type, self.source_id, self.message)
    }
}

/// Helper macro for checking a numeric tuning value is positive
macro_rules! check_positive {
    ($errors:expr, $tuning:expr, $field:ident) => {
        if !($tuning.$field > 0.0) {
            $errors.push(ValidationError {
                source_type: "MovementTuning",
                source_id: stringify!($field).to_string(),
                message: format!("must be positive, got {}", $tuning.$field),
            });
        }
    };
}

/// Validate the registry against the gameplay defaults.
/// Returns a list of validation errors, empty if all content is usable.
pub fn validate_content(
    registry: &ContentRegistry,
    defaults: &GameplayDefaults,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (id, def) in &registry.rooms {
        if let Err(e) = Room::from_def(def) {
            errors.push(ValidationError {
                source_type: "Room",
                source_id: id.clone(),
                message: e.to_string(),
            });
        }
    }

    if !registry.rooms.contains_key(&defaults.start_room_id) {
        errors.push(ValidationError {
            source_type: "GameplayDefaults",
            source_id: "start_room_id".to_string(),
            message: format!("references missing room '{}'", defaults.start_room_id),
        });
    }

    if !(defaults.fixed_timestep_hz > 0.0) {
        errors.push(ValidationError {
            source_type: "GameplayDefaults",
            source_id: "fixed_timestep_hz".to_string(),
            message: format!("must be positive, got {}", defaults.fixed_timestep_hz),
        });
    }

    let tuning = &registry.movement;
    check_positive!(errors, tuning, max_speed);
    check_positive!(errors, tuning, accel);
    check_positive!(errors, tuning, decel);
    check_positive!(errors, tuning, jump_velocity);
    check_positive!(errors, tuning, gravity);
    check_positive!(errors, tuning, terminal_velocity);
    check_positive!(errors, tuning, climb_speed);
    check_positive!(errors, tuning, ladder_grab_offset);
    check_positive!(errors, tuning, ground_probe_distance);

    if tuning.ladder_grab_offset <= tuning.ground_probe_distance {
        errors.push(ValidationError {
            source_type: "MovementTuning",
            source_id: "ladder_grab_offset".to_string(),
            message: format!(
                "must exceed ground_probe_distance ({}), got {}",
                tuning.ground_probe_distance, tuning.ladder_grab_offset
            ),
        });
    }

    if !(0.0..=1.0).contains(&tuning.jump_release_factor) {
        errors.push(ValidationError {
            source_type: "MovementTuning",
            source_id: "jump_release_factor".to_string(),
            message: format!("must be within 0..=1, got {}", tuning.jump_release_factor),
        });
    }

    errors
}
