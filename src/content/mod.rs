//! Content domain: data-driven room layouts and tuning loaded from RON.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{DataFile, GameplayDefaults, RoomDef};
pub use loader::{ContentLoadError, load_all_content};
pub use registry::ContentRegistry;
pub use validation::{ValidationError, validate_content};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

const CONTENT_PATH: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

/// Loads content into resources, falling back to built-in defaults so the
/// game still starts when data files are missing or broken.
fn load_content(mut commands: Commands, mut fixed_time: ResMut<Time<Fixed>>) {
    let (registry, defaults) = match load_all_content(Path::new(CONTENT_PATH)) {
        Ok(loaded) => loaded,
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            warn!(
                "Content failed to load ({} errors), using built-in defaults",
                errors.len()
            );
            let mut registry = ContentRegistry::default();
            let room = RoomDef::builtin();
            registry.rooms.insert(room.id.clone(), room);
            (registry, GameplayDefaults::default())
        }
    };

    let validation_errors = validate_content(&registry, &defaults);
    for e in &validation_errors {
        warn!("Content validation: {}", e);
    }

    info!("{}", registry.summary());

    if defaults.fixed_timestep_hz > 0.0 {
        fixed_time.set_timestep_hz(defaults.fixed_timestep_hz);
    }

    let tuning = if validation_errors
        .iter()
        .any(|e| e.source_type == "MovementTuning")
    {
        warn!("Movement tuning is invalid, using defaults");
        MovementTuning::default()
    } else {
        registry.movement.clone()
    };
    commands.insert_resource(tuning);
    commands.insert_resource(defaults);
    commands.insert_resource(registry);
}
