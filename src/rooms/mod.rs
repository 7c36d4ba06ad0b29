//! Rooms domain: the tile grid the actor moves through, its ladders, and the
//! spawned collision geometry.

mod components;
mod grid;
mod ladders;
mod spawn;

#[cfg(test)]
mod tests;

pub use components::{LadderVisual, RoomInstance};
pub use grid::{Room, RoomParseError, TileAttribute, room_to_world, world_to_room};
pub use ladders::{FEET_MARGIN, LADDER_INSET, Ladder, LadderContact, probe_ladders};

use bevy::prelude::*;

use crate::content::{ContentRegistry, GameplayDefaults, RoomDef};
use crate::rooms::spawn::spawn_room_geometry;

/// Systems that build the active [`Room`]; player spawning runs after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomSetup;

pub struct RoomsPlugin;

impl Plugin for RoomsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_room.in_set(RoomSetup));
    }
}

/// Builds `def`, or the built-in room when `def` does not parse. Returns the
/// definition that was actually used alongside its room.
pub(crate) fn room_or_builtin(def: RoomDef) -> Result<(RoomDef, Room), RoomParseError> {
    match Room::from_def(&def) {
        Ok(room) => Ok((def, room)),
        Err(e) => {
            error!("{}; falling back to built-in room", e);
            let builtin = RoomDef::builtin();
            let room = Room::from_def(&builtin)?;
            Ok((builtin, room))
        }
    }
}

pub(crate) fn setup_room(
    mut commands: Commands,
    registry: Option<Res<ContentRegistry>>,
    defaults: Option<Res<GameplayDefaults>>,
) {
    let start_room_id = defaults
        .map(|defaults| defaults.start_room_id.clone())
        .unwrap_or_else(|| GameplayDefaults::default().start_room_id);

    let def = match registry
        .as_ref()
        .and_then(|registry| registry.rooms.get(&start_room_id))
    {
        Some(def) => def.clone(),
        None => {
            warn!(
                "Room '{}' not found in content, using built-in room",
                start_room_id
            );
            RoomDef::builtin()
        }
    };

    let (def, room) = match room_or_builtin(def) {
        Ok(built) => built,
        Err(e) => {
            error!("Built-in room is invalid: {}", e);
            return;
        }
    };

    info!("Entering room '{}' ({})", def.name, room.id());
    spawn_room_geometry(&mut commands, &room);
    commands.insert_resource(room);
}
