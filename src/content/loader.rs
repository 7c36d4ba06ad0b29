//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::ContentRegistry;
use crate::movement::MovementTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse RON text, naming `file` in any error.
pub(crate) fn parse_ron<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a RON file containing a DataFile<T> wrapper.
fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    let data: DataFile<T> = parse_ron(&path.display().to_string(), &contents)?;
    Ok(data.items)
}

/// Load a single RON struct (not wrapped in DataFile).
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    parse_ron(&path.display().to_string(), &contents)
}

/// Load all content from `base_path` (normally `assets/data`).
///
/// Every file is attempted; failures are collected rather than stopping at
/// the first one.
pub fn load_all_content(
    base_path: &Path,
) -> Result<(ContentRegistry, GameplayDefaults), Vec<ContentLoadError>> {
    let mut registry = ContentRegistry::default();
    let mut errors = Vec::new();

    match load_data_file::<RoomDef>(&base_path.join("rooms.ron")) {
        Ok(rooms) => {
            for room in rooms {
                registry.rooms.insert(room.id.clone(), room);
            }
        }
        Err(e) => errors.push(e),
    }

    match load_single_file::<MovementTuning>(&base_path.join("movement.ron")) {
        Ok(tuning) => registry.movement = tuning,
        Err(e) => errors.push(e),
    }

    let gameplay_defaults =
        match load_single_file::<GameplayDefaults>(&base_path.join("gameplay_defaults.ron")) {
            Ok(defaults) => defaults,
            Err(e) => {
                errors.push(e);
                return Err(errors);
            }
        };

    if errors.is_empty() {
        Ok((registry, gameplay_defaults))
    } else {
        Err(errors)
    }
}
