//! Movement domain: ladder-aware locomotion plugin wiring and public exports.

mod actor;
pub(crate) mod body;
mod bootstrap;
mod collaborators;
mod components;
mod events;
mod machine;
mod resources;
mod states;
mod systems;

#[cfg(test)]
mod testing;

pub use actor::{Actor, ActorFlags, ActorStatus};
pub use collaborators::{
    ActionController, AnimationDriver, Body, BoundingBox, LocomotionContext, RoomGrid,
};
pub use components::{Facing, GameLayer, Ground, PhysicsBody, Player};
pub use events::MobilityStateChanged;
pub use machine::{LocomotionMachine, MobilityKind, StateChange, Transition};
pub use resources::{MovementInput, MovementTuning};
pub use states::{AirborneState, ClimbingState, IdleState, MobilityState, WalkingState};

use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_gravity, drive_locomotion, queue_jump_press, read_input, rest_on_ladder_tops,
    sense_surroundings,
};
use crate::rooms::RoomSetup;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<MobilityStateChanged>()
            .add_systems(Startup, spawn_player.after(RoomSetup))
            .add_systems(
                PreUpdate,
                queue_jump_press.after(bevy::input::InputSystems),
            )
            .add_systems(
                FixedUpdate,
                (
                    read_input,
                    rest_on_ladder_tops,
                    sense_surroundings,
                    drive_locomotion,
                    apply_gravity,
                )
                    .chain()
                    .run_if(gameplay_active),
            );
    }
}
