//! Movement domain: messages emitted by locomotion.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::MobilityKind;

/// Fired after the locomotion machine swaps states
#[derive(Debug, Clone, Copy)]
pub struct MobilityStateChanged {
    pub entity: Entity,
    pub from: MobilityKind,
    pub to: MobilityKind,
}

impl Message for MobilityStateChanged {}
