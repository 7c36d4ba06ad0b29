//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Solid tiles (floors, walls, ceilings)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Body configuration the locomotion states toggle.
///
/// avian2d owns the collider and integration; this component carries the
/// platformer-specific switches on top of it.
#[derive(Component, Debug, Clone)]
pub struct PhysicsBody {
    pub gravitated: bool,
    pub on_ground: bool,
    pub treat_ladder_top_as_ground: bool,
    pub half_extents: Vec2,
}

impl PhysicsBody {
    pub fn new(size: Vec2) -> Self {
        Self {
            gravitated: true,
            on_ground: false,
            treat_ladder_top_as_ground: true,
            half_extents: size * 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Facing implied by a horizontal intent; `None` when there is no intent.
    pub fn from_intent(intent: i8) -> Option<Self> {
        match intent.signum() {
            1 => Some(Facing::Right),
            -1 => Some(Facing::Left),
            _ => None,
        }
    }
}

/// Marker for solid tile colliders
#[derive(Component, Debug)]
pub struct Ground;
