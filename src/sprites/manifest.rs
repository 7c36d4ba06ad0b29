//! Animation clip manifest loading.
//!
//! Loads the clip manifest JSON which defines each named animation's frame
//! count, timing and debug tint.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Timing data for one named animation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnimationClipDef {
    pub frames: u32,
    /// Seconds per frame.
    pub frame_duration: f32,
    #[serde(default = "default_looping")]
    pub looping: bool,
    /// Placeholder colour until real sprite sheets exist.
    #[serde(default = "default_tint")]
    pub tint: [f32; 3],
}

fn default_looping() -> bool {
    true
}

fn default_tint() -> [f32; 3] {
    [0.9, 0.9, 0.9]
}

impl Default for AnimationClipDef {
    fn default() -> Self {
        Self {
            frames: 1,
            frame_duration: 0.15,
            looping: true,
            tint: default_tint(),
        }
    }
}

/// Resource containing all loaded clip definitions.
#[derive(Resource, Debug, Default)]
pub struct AnimationManifest {
    /// Version of the manifest schema.
    pub version: u32,
    pub clips: HashMap<String, AnimationClipDef>,
}

/// Raw manifest JSON structure.
#[derive(Deserialize)]
struct ManifestJson {
    version: u32,
    clips: HashMap<String, AnimationClipDef>,
}

impl AnimationManifest {
    /// Parse manifest JSON text.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        let manifest: ManifestJson = serde_json::from_str(contents)?;
        Ok(Self {
            version: manifest.version,
            clips: manifest.clips,
        })
    }

    /// Load the manifest from a JSON file, leaving `self` untouched on failure.
    pub fn load_from_file(&mut self, path: &str) {
        let manifest_path = Path::new(path);

        if !manifest_path.exists() {
            warn!(
                "Animation manifest not found at {:?}, using clip defaults",
                path
            );
            return;
        }

        let contents = match fs::read_to_string(manifest_path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read animation manifest: {}", e);
                return;
            }
        };

        match Self::from_json(&contents) {
            Ok(manifest) => *self = manifest,
            Err(e) => {
                error!("Failed to parse animation manifest: {}", e);
                return;
            }
        }

        info!(
            "Loaded animation manifest v{} with {} clips",
            self.version,
            self.clips.len()
        );
    }

    /// Clip definition by name, or the default clip for unknown names.
    pub fn clip(&self, name: &str) -> AnimationClipDef {
        self.clips.get(name).cloned().unwrap_or_default()
    }
}
