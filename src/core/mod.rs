//! Core domain: camera and gameplay pause plumbing shared by other plugins.

mod resources;
mod systems;

pub use resources::{GameplayPaused, gameplay_active};

use bevy::prelude::*;

use crate::core::systems::{frame_room, setup_camera, sync_physics_pause};
use crate::rooms::RoomSetup;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameplayPaused>()
            .add_systems(
                Startup,
                (setup_camera, frame_room.after(RoomSetup)).chain(),
            )
            .add_systems(Update, sync_physics_pause);
    }
}
