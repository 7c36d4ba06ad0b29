//! Core domain: camera setup and physics pausing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::GameplayPaused;
use crate::rooms::{Room, room_to_world};

/// Fraction of the window height the room should fill.
const ROOM_FILL: f32 = 0.9;
const WINDOW_HEIGHT: f32 = 720.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Centres the camera on the active room and zooms so it fills the window.
pub(crate) fn frame_room(
    room: Option<Res<Room>>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    let Some(room) = room else {
        return;
    };

    let bounds = room.bounds();
    let center = room_to_world(bounds.origin + bounds.size * 0.5);
    let scale = bounds.size.y / (WINDOW_HEIGHT * ROOM_FILL);

    for mut transform in &mut cameras {
        transform.translation.x = center.x;
        transform.translation.y = center.y;
        transform.scale = Vec3::new(scale, scale, 1.0);
    }
}

/// Freezes avian2d while any pause source is active.
pub(crate) fn sync_physics_pause(
    paused: Res<GameplayPaused>,
    mut physics_time: ResMut<Time<Physics>>,
) {
    if !paused.is_changed() {
        return;
    }

    if paused.is_paused() {
        physics_time.pause();
    } else {
        physics_time.unpause();
    }
}
