//! Debug tooling for locomotion tuning.
//!
//! Features:
//! - F3 overlay with the mobility state, actor flags and body switches
//! - P pauses the fixed-step gameplay pipeline

mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{handle_debug_hotkeys, record_transitions, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                handle_debug_hotkeys,
                record_transitions,
                update_debug_info_overlay,
            )
                .chain(),
        );
    }
}
