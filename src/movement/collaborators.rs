//! Movement domain: the collaborator seams the locomotion core drives.
//!
//! Everything here is expressed in room space: pixels, origin at the room's
//! top-left corner, +Y pointing down. Negative vertical velocity moves a body up.

use bevy::prelude::*;

/// Axis-aligned box in room space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Top-left corner.
    pub origin: Vec2,
    pub size: Vec2,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Box whose bottom-centre sits on `feet`.
    pub fn from_feet(feet: Vec2, size: Vec2) -> Self {
        Self {
            origin: Vec2::new(feet.x - size.x * 0.5, feet.y - size.y),
            size,
        }
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }

    pub fn center_x(&self) -> f32 {
        self.origin.x + self.size.x * 0.5
    }

    /// Strict overlap; boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn overlaps_horizontally(&self, other: &BoundingBox) -> bool {
        self.left() < other.right() && other.left() < self.right()
    }
}

/// Physics body as seen by the movement states.
///
/// `position` is the feet anchor: the bottom-centre of the bounding box.
pub trait Body {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, x: f32, y: f32);
    fn velocity(&self) -> Vec2;
    fn set_velocity_x(&mut self, vx: f32);
    fn set_velocity_y(&mut self, vy: f32);
    fn is_on_ground(&self) -> bool;
    fn set_on_ground(&mut self, on_ground: bool);
    fn bounding_box(&self) -> BoundingBox;
    fn is_gravitated(&self) -> bool;
    fn set_gravitated(&mut self, gravitated: bool);
    fn treats_ladder_top_as_ground(&self) -> bool;
    fn set_treat_ladder_top_as_ground(&mut self, treat: bool);
}

/// Movement intents, sampled once per tick and stable for its duration.
pub trait ActionController {
    fn should_move_up(&self) -> bool;
    fn should_move_down(&self) -> bool;
    fn should_move_left(&self) -> bool;
    fn should_move_right(&self) -> bool;
    /// Jump was pressed since the previous tick. Starts jumps.
    fn should_jump(&self) -> bool;
    /// Jump button is down. Only shapes the height of a jump already under way.
    fn is_jump_held(&self) -> bool;

    /// -1 for left, 1 for right, 0 when neither or both are held.
    fn horizontal_intent(&self) -> i8 {
        match (self.should_move_left(), self.should_move_right()) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}

pub trait AnimationDriver {
    /// Selecting the clip that is already playing must not restart it.
    fn change_animation(&mut self, name: &str);
    fn pause(&mut self);
    fn unpause(&mut self);
    fn is_paused(&self) -> bool;
}

pub trait RoomGrid {
    /// Tile edge length in pixels.
    fn grid_size(&self) -> i32;
}

/// Collaborators handed to a movement state for the duration of one call.
pub struct LocomotionContext<'a> {
    pub body: &'a mut dyn Body,
    pub controller: &'a dyn ActionController,
    pub animation: &'a mut dyn AnimationDriver,
    pub room: &'a dyn RoomGrid,
}
