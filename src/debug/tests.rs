use bevy::prelude::*;

use crate::debug::ui::format_overlay;
use crate::movement::{Actor, MovementTuning, PhysicsBody};

#[test]
fn test_overlay_reports_state_and_pause() {
    let actor = Actor::new(MovementTuning::default());
    let body = PhysicsBody::new(Vec2::new(10.0, 14.0));

    let text = format_overlay(
        &actor,
        Vec2::new(56.0, 176.0),
        Vec2::ZERO,
        &body,
        Some("Idle -> Climbing"),
        true,
    );

    assert!(text.starts_with("State: Idle (0 ticks)"));
    assert!(text.contains("Last: Idle -> Climbing"));
    assert!(text.contains("Feet: (56.0, 176.0)"));
    assert!(text.contains("Gravity: true"));
    assert!(text.ends_with("[PAUSED]"));
}
