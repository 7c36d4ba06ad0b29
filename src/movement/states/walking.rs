//! Running along the ground under horizontal input.

use crate::movement::LocomotionContext;
use crate::movement::actor::ActorStatus;
use crate::movement::machine::StateChange;
use crate::movement::states::{MobilityState, approach, grounded_transition};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WalkingState;

impl WalkingState {
    pub fn enter(&mut self, actor: &mut ActorStatus, ctx: &mut LocomotionContext) {
        let flags = &mut actor.flags;
        flags.walking = true;
        flags.standing = false;
        flags.decelerating = false;
        flags.airborne = false;
        flags.falling = false;
        flags.jumping = false;

        ctx.animation.change_animation("running");
        ctx.animation.unpause();
    }

    pub fn exit(&mut self, actor: &mut ActorStatus, _ctx: &mut LocomotionContext) {
        actor.flags.walking = false;
        actor.flags.fully_accelerated = false;
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

        let intent = ctx.controller.horizontal_intent();
        if intent == 0 {
            return StateChange::Next(MobilityState::idle());
        }

        actor.face(intent);

        let max_speed = actor.tuning.max_speed;
        let target = f32::from(intent) * max_speed;
        let vx = approach(ctx.body.velocity().x, target, actor.tuning.accel * dt);
        ctx.body.set_velocity_x(vx);
        actor.flags.fully_accelerated = vx.abs() >= max_speed;

        StateChange::Continue
    }
}
