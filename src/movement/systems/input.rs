//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

fn jump_just_pressed(keyboard: &ButtonInput<KeyCode>) -> bool {
    keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK)
}

/// Keeps a jump press alive until a fixed tick consumes it. Frames can run
/// without any fixed tick, and `just_pressed` only lasts one frame.
pub(crate) fn queue_jump_press(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<MovementInput>,
) {
    if jump_just_pressed(&keyboard) {
        input.jump_queued = true;
    }
}

/// Samples held keys once per fixed tick so intents stay stable for the
/// whole locomotion update.
pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    input.up = keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp);
    input.down = keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown);
    input.left = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);
    input.right = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);
    input.jump_just_pressed = std::mem::take(&mut input.jump_queued);
    input.jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);
}
