//! Sprites module for clip playback on locomotion-driven sprites.

pub mod animation;
pub mod manifest;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;
pub use manifest::*;

const MANIFEST_PATH: &str = "assets/sprites/animations.json";

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationManifest>()
            .add_systems(Startup, load_animation_manifest)
            .add_systems(
                Update,
                (update_animation_frames, apply_animation_to_sprite).chain(),
            );
    }
}

/// System to load the animation manifest at startup.
fn load_animation_manifest(mut manifest: ResMut<AnimationManifest>) {
    manifest.load_from_file(MANIFEST_PATH);
}
