//! Debug domain: hotkeys and overlay updates.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::GameplayPaused;
use crate::debug::state::{DEBUG_PAUSE_SOURCE, DebugState};
use crate::debug::ui::{DebugInfoOverlay, format_overlay, spawn_debug_info_overlay};
use crate::movement::body::{feet_position, room_velocity};
use crate::movement::{Actor, MobilityStateChanged, PhysicsBody, Player};

/// F3 toggles the overlay, P toggles the debug pause
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut paused: ResMut<GameplayPaused>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
        info!("[DEBUG] Overlay {}", if debug_state.show_info { "ON" } else { "OFF" });
    }

    if keyboard.just_pressed(KeyCode::KeyP) {
        let now_paused = paused.toggle(DEBUG_PAUSE_SOURCE);
        info!("[DEBUG] Gameplay {}", if now_paused { "paused" } else { "resumed" });
    }
}

pub(crate) fn record_transitions(
    mut state_changes: MessageReader<MobilityStateChanged>,
    mut debug_state: ResMut<DebugState>,
) {
    for change in state_changes.read() {
        debug_state.last_transition = Some(format!("{:?} -> {:?}", change.from, change.to));
    }
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    paused: Res<GameplayPaused>,
    player_query: Query<(&Actor, &Transform, &LinearVelocity, &PhysicsBody), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((actor, transform, velocity, body)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        **text = format_overlay(
            actor,
            feet_position(transform.translation, body.half_extents),
            room_velocity(velocity),
            body,
            debug_state.last_transition.as_deref(),
            paused.is_paused(),
        );
    }
}
