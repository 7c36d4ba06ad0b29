//! Movement domain: room-space view over the player's avian2d body.
//!
//! Bevy world space has +Y up and the transform sits at the collider centre;
//! the locomotion core wants room space (+Y down) and a feet anchor. This view
//! converts on every access so both sides stay authoritative for their own
//! concerns.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{Body, BoundingBox, PhysicsBody};
use crate::rooms::{room_to_world, world_to_room};

pub(crate) struct BodyView<'a> {
    pub transform: &'a mut Transform,
    pub velocity: &'a mut LinearVelocity,
    pub body: &'a mut PhysicsBody,
}

impl<'a> BodyView<'a> {
    pub fn new(
        transform: &'a mut Transform,
        velocity: &'a mut LinearVelocity,
        body: &'a mut PhysicsBody,
    ) -> Self {
        Self {
            transform,
            velocity,
            body,
        }
    }
}

/// Feet anchor in room space for a collider centred at `translation`.
pub(crate) fn feet_position(translation: Vec3, half_extents: Vec2) -> Vec2 {
    let center = world_to_room(translation.truncate());
    Vec2::new(center.x, center.y + half_extents.y)
}

/// Velocity in room space (+Y down).
pub(crate) fn room_velocity(velocity: &LinearVelocity) -> Vec2 {
    Vec2::new(velocity.x, -velocity.y)
}

pub(crate) fn room_bounding_box(translation: Vec3, half_extents: Vec2) -> BoundingBox {
    BoundingBox::from_feet(feet_position(translation, half_extents), half_extents * 2.0)
}

impl Body for BodyView<'_> {
    fn position(&self) -> Vec2 {
        feet_position(self.transform.translation, self.body.half_extents)
    }

    fn set_position(&mut self, x: f32, y: f32) {
        let center = room_to_world(Vec2::new(x, y - self.body.half_extents.y));
        self.transform.translation.x = center.x;
        self.transform.translation.y = center.y;
    }

    fn velocity(&self) -> Vec2 {
        room_velocity(&*self.velocity)
    }

    fn set_velocity_x(&mut self, vx: f32) {
        self.velocity.x = vx;
    }

    fn set_velocity_y(&mut self, vy: f32) {
        self.velocity.y = -vy;
    }

    fn is_on_ground(&self) -> bool {
        self.body.on_ground
    }

    fn set_on_ground(&mut self, on_ground: bool) {
        self.body.on_ground = on_ground;
    }

    fn bounding_box(&self) -> BoundingBox {
        room_bounding_box(self.transform.translation, self.body.half_extents)
    }

    fn is_gravitated(&self) -> bool {
        self.body.gravitated
    }

    fn set_gravitated(&mut self, gravitated: bool) {
        self.body.gravitated = gravitated;
    }

    fn treats_ladder_top_as_ground(&self) -> bool {
        self.body.treat_ladder_top_as_ground
    }

    fn set_treat_ladder_top_as_ground(&mut self, treat: bool) {
        self.body.treat_ladder_top_as_ground = treat;
    }
}
