//! ContentRegistry resource providing lookups for all loaded content.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;
use crate::movement::MovementTuning;

/// Central registry for all loaded game content.
#[derive(Resource, Default)]
pub struct ContentRegistry {
    pub rooms: HashMap<String, RoomDef>,
    pub movement: MovementTuning,
}

impl ContentRegistry {
    /// Returns a summary of loaded content for logging.
    pub fn summary(&self) -> String {
        format!(
            "ContentRegistry loaded:\n\
             - Rooms: {}\n\
             - Movement: max_speed={}, climb_speed={}, jump_height={:.1}",
            self.rooms.len(),
            self.movement.max_speed,
            self.movement.climb_speed,
            self.movement.jump_height(),
        )
    }
}
