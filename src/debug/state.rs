//! Debug domain: state for debug tooling.

use bevy::prelude::*;

/// Pause source owned by the debug hotkey.
pub const DEBUG_PAUSE_SOURCE: &str = "debug";

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether to show the locomotion overlay
    pub show_info: bool,
    /// Latest state change, shown in the overlay
    pub last_transition: Option<String>,
}
