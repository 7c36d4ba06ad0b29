//! Movement domain: the locomotion state machine shell.
//!
//! The shell owns the active [`MobilityState`] and performs every swap itself:
//! a state only *asks* for its replacement through [`StateChange`]. A swap runs
//! the outgoing state's `exit` to completion, drops it, then runs the incoming
//! state's `enter`. The incoming state's `update` first runs on the next tick.

use bevy::prelude::*;

use crate::movement::LocomotionContext;
use crate::movement::actor::ActorStatus;
use crate::movement::states::MobilityState;

/// Result of a single state update.
#[derive(Debug)]
pub enum StateChange {
    Continue,
    Next(MobilityState),
}

/// Tag identifying a movement state without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MobilityKind {
    Idle,
    Walking,
    Airborne,
    Climbing,
}

impl MobilityKind {
    pub const ALL: [MobilityKind; 4] = [
        MobilityKind::Idle,
        MobilityKind::Walking,
        MobilityKind::Airborne,
        MobilityKind::Climbing,
    ];
}

/// A completed swap, reported by [`LocomotionMachine::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: MobilityKind,
    pub to: MobilityKind,
}

#[derive(Debug)]
pub struct LocomotionMachine {
    current: MobilityState,
    pending: Option<MobilityState>,
    started: bool,
    ticks_in_state: u32,
}

impl LocomotionMachine {
    /// The initial state is entered on the first update.
    pub fn new(initial: MobilityState) -> Self {
        Self {
            current: initial,
            pending: None,
            started: false,
            ticks_in_state: 0,
        }
    }

    /// Records a replacement for the current state. A later request made
    /// before the swap replaces an earlier one.
    pub fn request_transition(&mut self, next: MobilityState) {
        if let Some(dropped) = self.pending.replace(next) {
            debug!("Mobility: dropping pending {:?}", dropped.kind());
        }
    }

    pub fn update(
        &mut self,
        dt: f32,
        actor: &mut ActorStatus,
        ctx: &mut LocomotionContext,
    ) -> Option<Transition> {
        if !self.started {
            self.started = true;
            self.ticks_in_state = 0;
            self.current.enter(actor, ctx);
            debug!("Mobility: started in {:?}", self.current.kind());
            return None;
        }

        if let StateChange::Next(next) = self.current.update(dt, actor, ctx) {
            self.request_transition(next);
        }
        self.ticks_in_state = self.ticks_in_state.saturating_add(1);

        let next = self.pending.take()?;
        let from = self.current.kind();

        self.current.exit(actor, ctx);
        self.current = next;
        self.ticks_in_state = 0;
        self.current.enter(actor, ctx);

        let transition = Transition {
            from,
            to: self.current.kind(),
        };
        debug!("Mobility: {:?} -> {:?}", transition.from, transition.to);
        Some(transition)
    }

    pub fn current_kind(&self) -> MobilityKind {
        self.current.kind()
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Updates run by the current state since its enter.
    pub fn ticks_in_state(&self) -> u32 {
        self.ticks_in_state
    }
}
