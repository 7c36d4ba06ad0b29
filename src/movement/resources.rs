//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

use crate::movement::ActionController;

/// Locomotion constants, in room-space pixels and seconds.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub max_speed: f32,
    pub accel: f32,
    pub decel: f32,
    /// Fraction of `accel` available while airborne.
    pub air_control: f32,
    pub jump_velocity: f32,
    /// Applied to upward velocity each tick the jump button is released mid-rise.
    pub jump_release_factor: f32,
    pub gravity: f32,
    pub terminal_velocity: f32,
    pub climb_speed: f32,
    /// How far the body is nudged onto a ladder when grabbing it from the ground.
    pub ladder_grab_offset: f32,
    /// Length of the downward ground probe below the feet.
    pub ground_probe_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: 90.0,
            accel: 900.0,
            decel: 1200.0,
            air_control: 0.8,
            jump_velocity: 320.0,
            jump_release_factor: 0.5,
            gravity: 900.0,
            terminal_velocity: 420.0,
            climb_speed: 78.0,
            ladder_grab_offset: 8.0,
            ground_probe_distance: 2.0,
        }
    }
}

impl MovementTuning {
    /// Apex height of a full jump: h = v² / (2g)
    pub fn jump_height(&self) -> f32 {
        self.jump_velocity * self.jump_velocity / (2.0 * self.gravity)
    }
}

/// Keyboard state for the current tick.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    /// Press seen by a frame that ran no fixed tick yet.
    pub(crate) jump_queued: bool,
}

impl ActionController for MovementInput {
    fn should_move_up(&self) -> bool {
        self.up
    }

    fn should_move_down(&self) -> bool {
        self.down
    }

    fn should_move_left(&self) -> bool {
        self.left
    }

    fn should_move_right(&self) -> bool {
        self.right
    }

    fn should_jump(&self) -> bool {
        self.jump_just_pressed
    }

    fn is_jump_held(&self) -> bool {
        self.jump_held
    }
}
