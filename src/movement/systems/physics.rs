//! Movement domain: manual gravity and ladder-top resting.
//!
//! Gravity is integrated here rather than by avian2d so states can switch it
//! off while climbing. Ladder tops have no collider; a falling body is caught
//! on them explicitly while its `treat_ladder_top_as_ground` switch is on.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::body::BodyView;
use crate::movement::{Body, MovementTuning, PhysicsBody, Player};
use crate::rooms::Room;

pub(crate) fn apply_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut Transform, &mut LinearVelocity, &mut PhysicsBody), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut transform, mut velocity, mut body) in &mut query {
        let mut view = BodyView::new(&mut transform, &mut velocity, &mut body);
        let vy = view.velocity().y;

        if !view.is_gravitated() {
            continue;
        }

        if view.is_on_ground() {
            // Resting: keep upward launches, drop any downward drift.
            if vy > 0.0 {
                view.set_velocity_y(0.0);
            }
            continue;
        }

        view.set_velocity_y((vy + tuning.gravity * dt).min(tuning.terminal_velocity));
    }
}

/// Catches bodies that fell through a ladder top during the last physics step.
pub(crate) fn rest_on_ladder_tops(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    room: Option<Res<Room>>,
    mut query: Query<(&mut Transform, &mut LinearVelocity, &mut PhysicsBody), With<Player>>,
) {
    let Some(room) = room else {
        return;
    };
    let dt = time.delta_secs();

    for (mut transform, mut velocity, mut body) in &mut query {
        let mut view = BodyView::new(&mut transform, &mut velocity, &mut body);
        let vy = view.velocity().y;

        if !view.treats_ladder_top_as_ground() || vy < 0.0 {
            continue;
        }

        let feet = view.position();
        let reach = tuning.ground_probe_distance + vy * dt;
        let Some(top) = room.ladder_top_below(feet, reach) else {
            continue;
        };

        if top <= feet.y {
            view.set_position(feet.x, top);
            view.set_velocity_y(0.0);
        }
    }
}
