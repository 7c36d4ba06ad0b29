//! Standing still on the ground, braking any leftover horizontal speed.

use crate::movement::LocomotionContext;
use crate::movement::actor::ActorStatus;
use crate::movement::machine::StateChange;
use crate::movement::states::{MobilityState, approach, grounded_transition};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IdleState;

impl IdleState {
    pub fn enter(&mut self, actor: &mut ActorStatus, ctx: &mut LocomotionContext) {
        let flags = &mut actor.flags;
        flags.standing = true;
        flags.walking = false;
        flags.airborne = false;
        flags.falling = false;
        flags.jumping = false;
        flags.fully_accelerated = false;
        flags.decelerating = ctx.body.velocity().x != 0.0;

        ctx.animation.change_animation("idle");
        ctx.animation.unpause();
    }

    pub fn exit(&mut self, actor: &mut ActorStatus, _ctx: &mut LocomotionContext) {
        actor.flags.standing = false;
        actor.flags.decelerating = false;
    }

    pub fn update(
        &mut self,
        dt: f32,
        actor: &mut ActorStatus,
        ctx: &mut LocomotionContext,
    ) -> StateChange {
        if let Some(next) = grounded_transition(actor, ctx) {
            return StateChange::Next(next);
        }

        if ctx.controller.horizontal_intent() != 0 {
            return StateChange::Next(MobilityState::walking());
        }

        let vx = approach(ctx.body.velocity().x, 0.0, actor.tuning.decel * dt);
        ctx.body.set_velocity_x(vx);
        actor.flags.decelerating = vx != 0.0;

        StateChange::Continue
    }
}
