//! Movement states: the closed set of locomotion modes and their dispatch.

mod airborne;
mod climbing;
mod idle;
mod walking;

pub use airborne::AirborneState;
pub use climbing::ClimbingState;
pub use idle::IdleState;
pub use walking::WalkingState;

use crate::movement::LocomotionContext;
use crate::movement::actor::ActorStatus;
use crate::movement::machine::{MobilityKind, StateChange};

#[derive(Debug, Clone, PartialEq)]
pub enum MobilityState {
    Idle(IdleState),
    Walking(WalkingState),
    Airborne(AirborneState),
    Climbing(ClimbingState),
}

impl MobilityState {
    pub fn idle() -> Self {
        Self::Idle(IdleState)
    }

    pub fn walking() -> Self {
        Self::Walking(WalkingState)
    }

    pub fn airborne() -> Self {
        Self::Airborne(AirborneState)
    }

    pub fn climbing() -> Self {
        Self::Climbing(ClimbingState)
    }

    pub fn from_kind(kind: MobilityKind) -> Self {
        match kind {
            MobilityKind::Idle => Self::idle(),
            MobilityKind::Walking => Self::walking(),
            MobilityKind::Airborne => Self::airborne(),
            MobilityKind::Climbing => Self::climbing(),
        }
    }

    pub fn kind(&self) -> MobilityKind {
        match self {
            Self::Idle(_) => MobilityKind::Idle,
            Self::Walking(_) => MobilityKind::Walking,
            Self::Airborne(_) => MobilityKind::Airborne,
            Self::Climbing(_) => MobilityKind::Climbing,
        }
    }

    pub fn enter(&mut self, actor: &mut ActorStatus, ctx: &mut LocomotionContext) {
        match self {
            Self::Idle(state) => state.enter(actor, ctx),
            Self::Walking(state) => state.enter(actor, ctx),
            Self::Airborne(state) => state.enter(actor, ctx),
            Self::Climbing(state) => state.enter(actor, ctx),
        }
    }

    pub fn exit(&mut self, actor: &mut ActorStatus, ctx: &mut LocomotionContext) {
        match self {
            Self::Idle(state) => state.exit(actor, ctx),
            Self::Walking(state) => state.exit(actor, ctx),
            Self::Airborne(state) => state.exit(actor, ctx),
            Self::Climbing(state) => state.exit(actor, ctx),
        }
    }

    pub fn update(
        &mut self,
        dt: f32,
        actor: &mut ActorStatus,
        ctx: &mut LocomotionContext,
    ) -> StateChange {
        match self {
            Self::Idle(state) => state.update(dt, actor, ctx),
            Self::Walking(state) => state.update(dt, actor, ctx),
            Self::Airborne(state) => state.update(dt, actor, ctx),
            Self::Climbing(state) => state.update(dt, actor, ctx),
        }
    }
}

/// Grounded checks shared by Idle and Walking, in priority order: ground loss,
/// ladder grab from below, ladder grab from the top, jump.
pub(crate) fn grounded_transition(
    actor: &mut ActorStatus,
    ctx: &mut LocomotionContext,
) -> Option<MobilityState> {
    if !ctx.body.is_on_ground() {
        actor.flags.falling = true;
        return Some(MobilityState::airborne());
    }

    let controller = ctx.controller;
    let flags = actor.flags;

    if controller.should_move_up() && flags.touching_ladder {
        nudge_onto_ladder(ctx, -actor.tuning.ladder_grab_offset);
        return Some(MobilityState::climbing());
    }

    if controller.should_move_down() && flags.touching_ladder_top && !flags.touching_ladder {
        nudge_onto_ladder(ctx, actor.tuning.ladder_grab_offset);
        return Some(MobilityState::climbing());
    }

    if controller.should_jump() {
        actor.flags.jumping = true;
        ctx.body.set_velocity_y(-actor.tuning.jump_velocity);
        return Some(MobilityState::airborne());
    }

    None
}

/// Moves the body vertically by `dy` so the ladder sensors read "on the rungs"
/// next tick instead of "standing on the ground".
fn nudge_onto_ladder(ctx: &mut LocomotionContext, dy: f32) {
    let position = ctx.body.position();
    ctx.body.set_position(position.x, position.y + dy);
    ctx.body.set_on_ground(false);
}

/// Moves `current` toward `target` by at most `step`.
pub(crate) fn approach(current: f32, target: f32, step: f32) -> f32 {
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}

#[cfg(test)]
mod tests {
    use super::approach;

    #[test]
    fn test_approach_clamps_at_target() {
        assert_eq!(approach(0.0, 10.0, 4.0), 4.0);
        assert_eq!(approach(8.0, 10.0, 4.0), 10.0);
        assert_eq!(approach(-3.0, 0.0, 5.0), 0.0);
        assert_eq!(approach(3.0, -10.0, 5.0), -2.0);
    }
}
