//! Rooms domain: spawning room geometry as sprites and static colliders.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, RoomGrid};
use crate::rooms::components::{LadderVisual, RoomInstance};
use crate::rooms::grid::{Room, TileAttribute, room_to_world};

/// A horizontal run of solid tiles, in room-relative tile coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SolidRun {
    pub row: i32,
    pub first: i32,
    pub len: i32,
}

/// Merges solid tiles row by row so each run needs a single collider.
pub(crate) fn solid_runs(room: &Room) -> Vec<SolidRun> {
    let mut runs = Vec::new();

    for row in 0..room.height() {
        let mut current: Option<SolidRun> = None;

        for column in 0..room.width() {
            let solid = room
                .attribute_at(room.x() + column, room.y() + row)
                .is_some_and(|attribute| {
                    TileAttribute::has_attribute(attribute, TileAttribute::SOLID)
                });

            if solid {
                match current.as_mut() {
                    Some(run) => run.len += 1,
                    None => {
                        current = Some(SolidRun {
                            row,
                            first: column,
                            len: 1,
                        })
                    }
                }
            } else if let Some(run) = current.take() {
                runs.push(run);
            }
        }

        runs.extend(current);
    }

    runs
}

pub(crate) fn spawn_room_geometry(commands: &mut Commands, room: &Room) {
    let grid = room.grid_size() as f32;
    let ground_color = Color::srgb(0.35, 0.4, 0.35);
    let ladder_color = Color::srgb(0.75, 0.55, 0.25);
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    commands.spawn((
        RoomInstance {
            id: room.id.clone(),
        },
        Transform::default(),
        Visibility::default(),
    ));

    let runs = solid_runs(room);
    for run in &runs {
        let size = Vec2::new(run.len as f32 * grid, grid);
        let top_left = Vec2::new(
            (room.x() + run.first) as f32 * grid,
            (room.y() + run.row) as f32 * grid,
        );
        let center = room_to_world(top_left + size * 0.5);

        commands.spawn((
            Ground,
            Sprite {
                color: ground_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(center.x, center.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }

    for ladder in room.ladders() {
        let bounds = ladder.bounds;
        let center = room_to_world(bounds.origin + bounds.size * 0.5);

        commands.spawn((
            LadderVisual {
                column: ladder.column,
            },
            Sprite {
                color: ladder_color,
                custom_size: Some(bounds.size),
                ..default()
            },
            Transform::from_xyz(center.x, center.y, -0.5),
        ));
    }

    info!(
        "Spawned room '{}': {} solid runs, {} ladders",
        room.id,
        runs.len(),
        room.ladders().len()
    );
}
