//! Animation playback driven by the locomotion states.
//!
//! States select clips by name and pause or resume playback; frame timing
//! comes from the [`AnimationManifest`].

use bevy::prelude::*;

use super::AnimationManifest;
use crate::movement::{Actor, AnimationDriver, Facing};

/// Component for named-clip playback on a sprite.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Name of the playing clip.
    pub clip: String,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    pub paused: bool,
    /// Whether a non-looping clip has reached its last frame.
    pub finished: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new("idle")
    }
}

impl AnimationController {
    pub fn new(clip: &str) -> Self {
        Self {
            clip: clip.to_string(),
            current_frame: 0,
            frame_timer: 0.0,
            paused: false,
            finished: false,
        }
    }

    /// Advance playback by `dt` seconds using the given clip timing.
    pub fn advance(&mut self, dt: f32, frames: u32, frame_duration: f32, looping: bool) {
        if self.paused || self.finished || frame_duration <= 0.0 {
            return;
        }

        self.frame_timer += dt;

        while self.frame_timer >= frame_duration {
            self.frame_timer -= frame_duration;
            self.current_frame += 1;

            if self.current_frame >= frames {
                if looping {
                    self.current_frame = 0;
                } else {
                    self.current_frame = frames.saturating_sub(1);
                    self.finished = true;
                    self.frame_timer = 0.0;
                    return;
                }
            }
        }
    }
}

impl AnimationDriver for AnimationController {
    fn change_animation(&mut self, name: &str) {
        if self.clip == name {
            return;
        }

        self.clip = name.to_string();
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn unpause(&mut self) {
        self.paused = false;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

/// System that advances animation frames.
pub fn update_animation_frames(
    time: Res<Time>,
    manifest: Res<AnimationManifest>,
    mut query: Query<&mut AnimationController>,
) {
    for mut controller in &mut query {
        let clip = manifest.clip(&controller.clip);
        controller.advance(time.delta_secs(), clip.frames, clip.frame_duration, clip.looping);
    }
}

/// Placeholder rendering: tints the sprite per clip, dims odd frames and
/// mirrors the sprite to match facing.
pub fn apply_animation_to_sprite(
    manifest: Res<AnimationManifest>,
    mut query: Query<(&AnimationController, &Actor, &mut Sprite)>,
) {
    for (controller, actor, mut sprite) in &mut query {
        let clip = manifest.clip(&controller.clip);
        let brightness = if controller.current_frame % 2 == 1 { 0.85 } else { 1.0 };
        sprite.color = Color::srgb(
            clip.tint[0] * brightness,
            clip.tint[1] * brightness,
            clip.tint[2] * brightness,
        );
        sprite.flip_x = actor.facing() == Facing::Left;
    }
}
