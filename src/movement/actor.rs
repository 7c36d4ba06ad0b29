//! Movement domain: the player-controlled actor and its status flags.

use bevy::prelude::*;

use crate::movement::machine::{LocomotionMachine, MobilityKind, Transition};
use crate::movement::states::MobilityState;
use crate::movement::{Body, Facing, LocomotionContext, MovementTuning};
use crate::rooms::LadderContact;

/// Status flags shared with rendering, collision and animation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActorFlags {
    pub on_ladder: bool,
    pub falling: bool,
    pub airborne: bool,
    pub jumping: bool,
    pub standing: bool,
    pub decelerating: bool,
    pub walking: bool,
    pub fully_accelerated: bool,
    pub touching_ladder: bool,
    pub touching_ladder_top: bool,
    pub touching_ladder_with_feet: bool,
}

impl ActorFlags {
    /// Returns a description of the first broken invariant, if any.
    ///
    /// `started` is false until the first state has been entered, when no
    /// posture flag is set yet.
    pub fn invariant_violation(&self, started: bool, body: &dyn Body) -> Option<&'static str> {
        if self.on_ladder && body.is_gravitated() {
            return Some("on ladder with gravity enabled");
        }
        if self.on_ladder && body.treats_ladder_top_as_ground() {
            return Some("on ladder while ladder tops count as ground");
        }

        let postures = [self.standing, self.walking, self.airborne, self.on_ladder]
            .iter()
            .filter(|set| **set)
            .count();
        if started && postures != 1 {
            return Some("posture flags are not exclusive");
        }
        if (self.falling || self.jumping) && !self.airborne {
            return Some("falling or jumping while not airborne");
        }
        if self.falling && self.jumping {
            return Some("falling and jumping at once");
        }
        if self.decelerating && !self.standing {
            return Some("decelerating while not standing");
        }
        if self.fully_accelerated && !self.walking {
            return Some("fully accelerated while not walking");
        }
        None
    }
}

/// Everything a movement state may read or mutate on the actor.
#[derive(Debug, Clone)]
pub struct ActorStatus {
    pub flags: ActorFlags,
    pub facing: Facing,
    /// Centre column of the ladder the actor last touched, in room pixels.
    pub ladder_position_x: f32,
    pub tuning: MovementTuning,
}

impl ActorStatus {
    pub fn new(tuning: MovementTuning) -> Self {
        Self {
            flags: ActorFlags::default(),
            facing: Facing::default(),
            ladder_position_x: 0.0,
            tuning,
        }
    }

    pub fn climb_speed(&self) -> f32 {
        self.tuning.climb_speed
    }

    pub(crate) fn face(&mut self, intent: i8) {
        if let Some(facing) = Facing::from_intent(intent) {
            self.facing = facing;
        }
    }
}

#[derive(Component, Debug)]
pub struct Actor {
    status: ActorStatus,
    machine: LocomotionMachine,
}

impl Actor {
    pub fn new(tuning: MovementTuning) -> Self {
        Self::with_initial_state(tuning, MobilityState::idle())
    }

    pub fn with_initial_state(tuning: MovementTuning, initial: MobilityState) -> Self {
        Self {
            status: ActorStatus::new(tuning),
            machine: LocomotionMachine::new(initial),
        }
    }

    /// Advances exactly one locomotion tick.
    pub fn update(&mut self, dt: f32, ctx: &mut LocomotionContext) -> Option<Transition> {
        let transition = self.machine.update(dt, &mut self.status, ctx);

        debug_assert_eq!(
            self.status.flags.invariant_violation(self.machine.has_started(), &*ctx.body),
            None,
            "actor flags broken in {:?}: {:?}",
            self.machine.current_kind(),
            self.status.flags
        );

        transition
    }

    /// Queues a replacement state; it takes over at the end of the next update.
    pub fn request_transition(&mut self, next: MobilityState) {
        self.machine.request_transition(next);
    }

    /// Records this tick's ladder sensor readings.
    pub fn sense_ladders(&mut self, contact: LadderContact) {
        let flags = &mut self.status.flags;
        flags.touching_ladder = contact.touching_ladder;
        flags.touching_ladder_top = contact.touching_ladder_top;
        flags.touching_ladder_with_feet = contact.touching_ladder_with_feet;

        if let Some(center_x) = contact.ladder_center_x {
            self.status.ladder_position_x = center_x;
        }
    }

    pub fn flags(&self) -> &ActorFlags {
        &self.status.flags
    }

    pub fn facing(&self) -> Facing {
        self.status.facing
    }

    pub fn current_kind(&self) -> MobilityKind {
        self.machine.current_kind()
    }

    pub fn ticks_in_state(&self) -> u32 {
        self.machine.ticks_in_state()
    }
}
