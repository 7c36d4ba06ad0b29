//! Movement domain: player bootstrap at the room's spawn tile.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{Actor, GameLayer, MovementTuning, PhysicsBody, Player};
use crate::rooms::{Room, room_to_world};
use crate::sprites::AnimationController;

/// Player collider size in room pixels. Narrower than a ladder tile so the
/// body fits through ladder openings in floors.
pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(10.0, 14.0);

pub(crate) fn spawn_player(
    mut commands: Commands,
    room: Option<Res<Room>>,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let Some(room) = room else {
        error!("No room loaded, cannot spawn player");
        return;
    };

    let feet = room.spawn_position();
    let center = room_to_world(Vec2::new(feet.x, feet.y - PLAYER_SIZE.y * 0.5));

    info!(
        "Spawning player in room '{}' at feet ({:.0}, {:.0})",
        room.id, feet.x, feet.y
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            Actor::new(tuning.clone()),
            PhysicsBody::new(PLAYER_SIZE),
            AnimationController::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, 1.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is integrated manually so climbing can disable it
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}
