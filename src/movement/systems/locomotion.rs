//! Movement domain: drives each actor's state machine one tick.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::body::BodyView;
use crate::movement::{
    Actor, LocomotionContext, MobilityStateChanged, MovementInput, PhysicsBody, Player,
};
use crate::rooms::Room;
use crate::sprites::AnimationController;

pub(crate) fn drive_locomotion(
    time: Res<Time>,
    input: Res<MovementInput>,
    room: Option<Res<Room>>,
    mut state_changes: MessageWriter<MobilityStateChanged>,
    mut query: Query<
        (
            Entity,
            &mut Actor,
            &mut Transform,
            &mut LinearVelocity,
            &mut PhysicsBody,
            &mut AnimationController,
        ),
        With<Player>,
    >,
) {
    let Some(room) = room else {
        return;
    };
    let dt = time.delta_secs();

    for (entity, mut actor, mut transform, mut velocity, mut body, mut animation) in &mut query {
        let mut view = BodyView::new(&mut transform, &mut velocity, &mut body);
        let mut ctx = LocomotionContext {
            body: &mut view,
            controller: &*input,
            animation: &mut *animation,
            room: &*room,
        };

        if let Some(transition) = actor.update(dt, &mut ctx) {
            state_changes.write(MobilityStateChanged {
                entity,
                from: transition.from,
                to: transition.to,
            });
        }
    }
}
