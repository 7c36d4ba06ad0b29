//! Movement domain: ground and ladder detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::body::{feet_position, room_bounding_box};
use crate::movement::{Actor, GameLayer, MovementTuning, PhysicsBody, Player};
use crate::rooms::Room;

pub(crate) fn sense_surroundings(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    room: Option<Res<Room>>,
    mut query: Query<(&Transform, &mut PhysicsBody, &mut Actor), With<Player>>,
) {
    let Some(room) = room else {
        return;
    };

    // Filter to only hit solid tiles
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut body, mut actor) in &mut query {
        let was_on_ground = body.on_ground;

        // Cast a short ray downward from the feet
        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, body.half_extents.y);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            tuning.ground_probe_distance,
            true,
            &ground_filter,
        );

        let feet = feet_position(transform.translation, body.half_extents);
        let on_ladder_top = body.treat_ladder_top_as_ground
            && room
                .ladder_top_below(feet, tuning.ground_probe_distance)
                .is_some();

        body.on_ground = hit.is_some() || on_ladder_top;

        if body.on_ground && !was_on_ground {
            debug!(
                "Landed: feet=({:.1}, {:.1}), ladder_top={}",
                feet.x, feet.y, on_ladder_top
            );
        } else if !body.on_ground && was_on_ground {
            debug!("Left ground: feet=({:.1}, {:.1})", feet.x, feet.y);
        }

        let bbox = room_bounding_box(transform.translation, body.half_extents);
        actor.sense_ladders(room.ladder_contact(&bbox));
    }
}
