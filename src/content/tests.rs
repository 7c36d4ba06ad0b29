//! Content domain: tests for RON parsing, loading and validation.

use std::path::Path;

use super::loader::parse_ron;
use super::*;
use crate::movement::MovementTuning;

fn builtin_registry() -> ContentRegistry {
    let mut registry = ContentRegistry::default();
    let room = RoomDef::builtin();
    registry.rooms.insert(room.id.clone(), room);
    registry
}

fn error_ids(errors: &[ValidationError]) -> Vec<&str> {
    errors.iter().map(|e| e.source_id.as_str()).collect()
}

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_partial_tuning_keeps_defaults() {
    let tuning: MovementTuning =
        parse_ron("movement.ron", "(max_speed: 120.0, climb_speed: 60.0)").expect("should parse");

    let defaults = MovementTuning::default();
    assert_eq!(tuning.max_speed, 120.0);
    assert_eq!(tuning.climb_speed, 60.0);
    assert_eq!(tuning.gravity, defaults.gravity);
    assert_eq!(tuning.ladder_grab_offset, defaults.ladder_grab_offset);
}

#[test]
fn test_room_list_parses_with_default_origin() {
    let text = r####"(
        items: [
            (
                id: "shaft",
                grid_size: 8,
                rows: ["#H#", "#H#", "###"],
                spawn: (1, 1),
            ),
        ],
    )"####;

    let file: DataFile<RoomDef> = parse_ron("rooms.ron", text).expect("should parse");
    assert_eq!(file.items.len(), 1);

    let room = &file.items[0];
    assert_eq!(room.id, "shaft");
    assert_eq!((room.x, room.y), (0, 0));
    assert_eq!(room.grid_size, 8);
    assert_eq!(room.spawn, (1, 1));
    assert!(room.name.is_empty());
}

#[test]
fn test_parse_error_names_the_file() {
    let result: Result<MovementTuning, _> = parse_ron("movement.ron", "(max_speed: fast)");
    let error = result.expect_err("should fail");

    assert_eq!(error.file, "movement.ron");
    assert!(error.to_string().starts_with("Failed to load movement.ron"));
}

// -----------------------------------------------------------------------------
// Loading
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_content_loads_and_validates() {
    let (registry, defaults) =
        load_all_content(Path::new("assets/data")).expect("shipped content should load");

    assert!(registry.rooms.contains_key("tower_base"));
    assert!(registry.rooms.contains_key("builtin_ladder_room"));
    assert_eq!(defaults.start_room_id, "tower_base");

    let errors = validate_content(&registry, &defaults);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
}

#[test]
fn test_missing_directory_reports_every_file() {
    let errors = match load_all_content(Path::new("assets/does_not_exist")) {
        Ok(_) => panic!("loading should fail"),
        Err(errors) => errors,
    };

    assert_eq!(errors.len(), 3);
    assert!(errors.iter().any(|e| e.file.ends_with("rooms.ron")));
    assert!(errors.iter().any(|e| e.file.ends_with("movement.ron")));
    assert!(errors.iter().any(|e| e.file.ends_with("gameplay_defaults.ron")));
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_builtin_content_is_valid() {
    let errors = validate_content(&builtin_registry(), &GameplayDefaults::default());
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
}

#[test]
fn test_missing_start_room() {
    let defaults = GameplayDefaults {
        start_room_id: "nowhere".to_string(),
        ..Default::default()
    };

    let errors = validate_content(&builtin_registry(), &defaults);
    assert_eq!(error_ids(&errors), vec!["start_room_id"]);
    assert!(errors[0].message.contains("nowhere"));
}

#[test]
fn test_broken_room_is_reported() {
    let mut registry = builtin_registry();
    let mut room = RoomDef::builtin();
    room.id = "broken".to_string();
    room.rows[3] = "#....?.............#".to_string();
    registry.rooms.insert(room.id.clone(), room);

    let errors = validate_content(&registry, &GameplayDefaults::default());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source_type, "Room");
    assert_eq!(errors[0].source_id, "broken");
}

#[test]
fn test_bad_tuning_is_reported() {
    let mut registry = builtin_registry();
    registry.movement.climb_speed = -1.0;
    registry.movement.ladder_grab_offset = 1.0;
    registry.movement.jump_release_factor = 1.5;

    let errors = validate_content(&registry, &GameplayDefaults::default());
    assert_eq!(
        error_ids(&errors),
        vec!["climb_speed", "ladder_grab_offset", "jump_release_factor"]
    );
    assert!(errors.iter().all(|e| e.source_type == "MovementTuning"));
}

#[test]
fn test_non_positive_timestep_is_reported() {
    let defaults = GameplayDefaults {
        fixed_timestep_hz: 0.0,
        ..Default::default()
    };

    let errors = validate_content(&builtin_registry(), &defaults);
    assert_eq!(error_ids(&errors), vec!["fixed_timestep_hz"]);
}
