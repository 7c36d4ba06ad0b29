//! Rooms domain: entity markers for spawned room geometry.

use bevy::prelude::*;

/// Marker for the current room entity
#[derive(Component, Debug)]
pub struct RoomInstance {
    pub id: String,
}

/// Visual for one ladder; ladders have no collider
#[derive(Component, Debug)]
pub struct LadderVisual {
    pub column: i32,
}
