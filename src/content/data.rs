//! Content definitions deserialized from `assets/data/*.ron`.

use bevy::prelude::*;
use serde::Deserialize;

/// Wrapper for RON files holding a list of definitions.
#[derive(Debug, Clone, Deserialize)]
pub struct DataFile<T> {
    pub items: Vec<T>,
}

/// A room layout, one glyph per tile.
///
/// Glyphs: `#` solid, `H` ladder, `.` or space empty.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomDef {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Absolute tile position of the room's top-left corner.
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    pub grid_size: i32,
    pub rows: Vec<String>,
    /// Tile (relative to the room) the player spawns standing in.
    pub spawn: (i32, i32),
}

impl RoomDef {
    /// Room used when no room data could be loaded.
    pub fn builtin() -> Self {
        Self {
            id: "builtin_ladder_room".to_string(),
            name: "Ladder Test Room".to_string(),
            x: 0,
            y: 0,
            grid_size: 16,
            rows: [
                "####################",
                "#..................#",
                "#..................#",
                "#..................#",
                "#..................#",
                "#...######H####....#",
                "#.........H........#",
                "#.........H........#",
                "#.........H........#",
                "#.........H........#",
                "#.........H........#",
                "####################",
            ]
            .iter()
            .map(|row| row.to_string())
            .collect(),
            spawn: (3, 10),
        }
    }
}

/// Global gameplay settings (single struct, not a list).
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameplayDefaults {
    pub start_room_id: String,
    pub fixed_timestep_hz: f64,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            start_room_id: "builtin_ladder_room".to_string(),
            fixed_timestep_hz: 60.0,
        }
    }
}
