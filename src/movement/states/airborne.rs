//! Jumping or falling. Gravity stays with the body; this state only steers,
//! shapes the jump arc and watches for a landing or a ladder to catch.

use crate::movement::LocomotionContext;
use crate::movement::actor::ActorStatus;
use crate::movement::machine::StateChange;
use crate::movement::states::{MobilityState, approach};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AirborneState;

impl AirborneState {
    pub fn enter(&mut self, actor: &mut ActorStatus, ctx: &mut LocomotionContext) {
        let flags = &mut actor.flags;
        flags.airborne = true;
        flags.standing = false;
        flags.walking = false;
        flags.decelerating = false;
        flags.fully_accelerated = false;
        if !flags.jumping && !flags.falling {
            flags.falling = true;
        }

        ctx.animation.change_animation("jumping");
        ctx.animation.unpause();
    }

    pub fn exit(&mut self, actor: &mut ActorStatus, _ctx: &mut LocomotionContext) {
        actor.flags.airborne = false;
        actor.flags.jumping = false;
        actor.flags.falling = false;
    }

    pub fn update(
        &mut self,
        dt: f32,
        actor: &mut ActorStatus,
        ctx: &mut LocomotionContext,
    ) -> StateChange {
        let controller = ctx.controller;

        if controller.should_move_up() && actor.flags.touching_ladder {
            return StateChange::Next(MobilityState::climbing());
        }

        let vy = ctx.body.velocity().y;
        if actor.flags.jumping {
            if vy >= 0.0 {
                // Apex reached.
                actor.flags.jumping = false;
                actor.flags.falling = true;
            } else if !controller.is_jump_held() {
                ctx.body.set_velocity_y(vy * actor.tuning.jump_release_factor);
            }
        }

        let intent = controller.horizontal_intent();

        if actor.flags.falling && ctx.body.is_on_ground() {
            return if intent != 0 {
                StateChange::Next(MobilityState::walking())
            } else {
                StateChange::Next(MobilityState::idle())
            };
        }

        actor.face(intent);

        let tuning = &actor.tuning;
        let target = f32::from(intent) * tuning.max_speed;
        let step = tuning.accel * tuning.air_control * dt;
        let vx = approach(ctx.body.velocity().x, target, step);
        ctx.body.set_velocity_x(vx);

        StateChange::Continue
    }
}
