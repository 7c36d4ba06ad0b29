//! Hanging on a ladder.
//!
//! While climbing the body ignores gravity and ladder tops stop acting as
//! floors, so the actor can pass through the top rung in either direction.
//! The animation is paused every tick and only runs while the actor is
//! actually moving along the ladder.

use crate::movement::LocomotionContext;
use crate::movement::actor::ActorStatus;
use crate::movement::machine::StateChange;
use crate::movement::states::MobilityState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClimbingState;

impl ClimbingState {
    pub fn enter(&mut self, actor: &mut ActorStatus, ctx: &mut LocomotionContext) {
        let flags = &mut actor.flags;
        flags.on_ladder = true;
        flags.falling = false;
        flags.airborne = false;
        flags.fully_accelerated = false;
        flags.jumping = false;
        flags.standing = false;
        flags.decelerating = false;
        flags.walking = false;

        ctx.body.set_velocity_x(0.0);
        let y = ctx.body.position().y;
        ctx.body.set_position(actor.ladder_position_x, y);
        ctx.body.set_gravitated(false);
        ctx.body.set_treat_ladder_top_as_ground(false);
    }

    pub fn exit(&mut self, actor: &mut ActorStatus, ctx: &mut LocomotionContext) {
        actor.flags.on_ladder = false;
        ctx.body.set_gravitated(true);
        ctx.body.set_treat_ladder_top_as_ground(true);
        ctx.animation.unpause();
    }

    pub fn update(
        &mut self,
        _dt: f32,
        actor: &mut ActorStatus,
        ctx: &mut LocomotionContext,
    ) -> StateChange {
        // The body may have reset this since the last tick.
        ctx.body.set_treat_ladder_top_as_ground(false);

        ctx.body.set_velocity_y(0.0);
        ctx.animation.pause();

        let controller = ctx.controller;
        let climb_speed = actor.climb_speed();

        if controller.should_move_up() {
            self.select_animation(actor, ctx);
            ctx.body.set_velocity_y(-climb_speed);
            ctx.animation.unpause();

            if !actor.flags.touching_ladder {
                // Climbed past the top rung: stand on the tile boundary
                // instead of rising above it.
                ctx.body.set_velocity_y(0.0);
                let grid_size = ctx.room.grid_size() as f32;
                let bottom = ctx.body.bounding_box().bottom();
                let new_y = (bottom / grid_size).ceil() * grid_size;
                let x = ctx.body.position().x;
                ctx.body.set_position(x, new_y);
                ctx.body.set_on_ground(true);
            }
        } else if controller.should_move_down() {
            self.select_animation(actor, ctx);
            ctx.body.set_velocity_y(climb_speed);
            ctx.animation.unpause();
        } else if controller.should_jump() {
            // Up or down suppresses jumping off the ladder.
            actor.flags.falling = true;
            return StateChange::Next(MobilityState::airborne());
        }

        let flags = actor.flags;

        if ctx.body.is_on_ground() && !flags.touching_ladder_with_feet {
            return StateChange::Next(MobilityState::idle());
        }

        if !flags.touching_ladder && !flags.touching_ladder_with_feet {
            if controller.should_move_down() {
                actor.flags.falling = true;
                return StateChange::Next(MobilityState::airborne());
            }
            return StateChange::Next(MobilityState::idle());
        }

        StateChange::Continue
    }

    fn select_animation(&self, actor: &ActorStatus, ctx: &mut LocomotionContext) {
        if actor.flags.touching_ladder_top {
            ctx.animation.change_animation("climbing-top");
        } else {
            ctx.animation.change_animation("climbing");
        }
    }
}
