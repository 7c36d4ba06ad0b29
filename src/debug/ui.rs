//! Debug domain: overlay spawning and text formatting.

use bevy::prelude::*;

use crate::movement::{Actor, PhysicsBody};

/// Marker for the locomotion overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            top: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

/// Overlay text for one actor; `feet` and `velocity` are in room space.
pub(crate) fn format_overlay(
    actor: &Actor,
    feet: Vec2,
    velocity: Vec2,
    physics: &PhysicsBody,
    last_transition: Option<&str>,
    paused: bool,
) -> String {
    let flags = actor.flags();

    let mut posture = Vec::new();
    for (set, name) in [
        (flags.standing, "standing"),
        (flags.walking, "walking"),
        (flags.airborne, "airborne"),
        (flags.on_ladder, "on_ladder"),
        (flags.falling, "falling"),
        (flags.jumping, "jumping"),
        (flags.decelerating, "decelerating"),
        (flags.fully_accelerated, "fully_accelerated"),
    ] {
        if set {
            posture.push(name);
        }
    }

    format!(
        "State: {:?} ({} ticks)\nLast: {}\nFlags: {}\nLadder: touch={} top={} feet={}\n\
         Feet: ({:.1}, {:.1})  Vel: ({:.1}, {:.1})\n\
         Ground: {}  Gravity: {}  LadderTopGround: {}\nFacing: {:?}{}",
        actor.current_kind(),
        actor.ticks_in_state(),
        last_transition.unwrap_or("-"),
        posture.join(" "),
        flags.touching_ladder,
        flags.touching_ladder_top,
        flags.touching_ladder_with_feet,
        feet.x,
        feet.y,
        velocity.x,
        velocity.y,
        physics.on_ground,
        physics.gravitated,
        physics.treat_ladder_top_as_ground,
        actor.facing(),
        if paused { "\n[PAUSED]" } else { "" },
    )
}
