//! Rooms domain: tests for grid parsing, ladder tracing and contact probing.

use bevy::prelude::*;

use super::spawn::{SolidRun, solid_runs};
use super::{LadderContact, Room, RoomParseError, TileAttribute, room_or_builtin};
use crate::content::RoomDef;
use crate::movement::{BoundingBox, RoomGrid};

fn room_def(id: &str, rows: &[&str], spawn: (i32, i32)) -> RoomDef {
    RoomDef {
        id: id.to_string(),
        name: String::new(),
        x: 0,
        y: 0,
        grid_size: 16,
        rows: rows.iter().map(|row| row.to_string()).collect(),
        spawn,
    }
}

fn builtin_room() -> Room {
    Room::from_def(&RoomDef::builtin()).expect("built-in room should parse")
}

fn body_at(feet: Vec2) -> BoundingBox {
    BoundingBox::from_feet(feet, Vec2::new(10.0, 14.0))
}

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_glyphs_map_to_attributes() {
    assert_eq!(TileAttribute::from_glyph('.'), Some(TileAttribute::NONE));
    assert_eq!(TileAttribute::from_glyph(' '), Some(TileAttribute::NONE));
    assert_eq!(TileAttribute::from_glyph('#'), Some(TileAttribute::SOLID));
    assert_eq!(TileAttribute::from_glyph('H'), Some(TileAttribute::LADDER));
    assert_eq!(TileAttribute::from_glyph('x'), None);
}

#[test]
fn test_builtin_room_dimensions() {
    let room = builtin_room();
    assert_eq!(room.width(), 20);
    assert_eq!(room.height(), 12);
    assert_eq!(room.grid_size(), 16);
    assert_eq!(room.bounds(), BoundingBox::new(0.0, 0.0, 320.0, 192.0));
}

#[test]
fn test_ragged_row_is_rejected() {
    let def = room_def("ragged", &["###", "#.", "###"], (1, 1));
    assert_eq!(
        Room::from_def(&def).unwrap_err(),
        RoomParseError::RaggedRow {
            room_id: "ragged".to_string(),
            row: 1,
            expected: 3,
            found: 2,
        }
    );
}

#[test]
fn test_unknown_glyph_is_rejected() {
    let def = room_def("glyph", &["#?#"], (1, 0));
    assert!(matches!(
        Room::from_def(&def),
        Err(RoomParseError::UnknownGlyph {
            row: 0,
            column: 1,
            glyph: '?',
            ..
        })
    ));
}

#[test]
fn test_degenerate_rooms_are_rejected() {
    let empty = room_def("empty", &[], (0, 0));
    assert!(matches!(
        Room::from_def(&empty),
        Err(RoomParseError::Empty { .. })
    ));

    let mut zero_grid = room_def("zero", &["..."], (0, 0));
    zero_grid.grid_size = 0;
    assert!(matches!(
        Room::from_def(&zero_grid),
        Err(RoomParseError::InvalidGridSize { grid_size: 0, .. })
    ));

    let outside = room_def("outside", &["..."], (3, 0));
    assert!(matches!(
        Room::from_def(&outside),
        Err(RoomParseError::SpawnOutOfBounds { spawn: (3, 0), .. })
    ));
}

#[test]
fn test_short_attribute_list_is_rejected() {
    let result = Room::new(
        "short".to_string(),
        IVec2::ZERO,
        3,
        2,
        16,
        vec![TileAttribute::NONE; 4],
        IVec2::ZERO,
    );

    assert_eq!(
        result.err(),
        Some(RoomParseError::TileCountMismatch {
            room_id: "short".to_string(),
            expected: 6,
            found: 4,
        })
    );
}

#[test]
fn test_broken_room_falls_back_to_builtin() {
    let broken = room_def("broken", &["..", "."], (0, 0));

    let (def, room) = room_or_builtin(broken).expect("built-in room should parse");
    assert_eq!(def.id, RoomDef::builtin().id);
    assert_eq!(room.id(), def.id);
    assert_eq!(def.name, "Ladder Test Room");

    let good = room_def("good", &["..", ".."], (0, 0));
    let (def, room) = room_or_builtin(good).expect("room should parse");
    assert_eq!(def.id, "good");
    assert_eq!(room.id(), "good");
}

#[test]
fn test_attribute_lookup_uses_absolute_tiles() {
    let mut def = room_def("offset", &["#H", ".."], (0, 1));
    def.x = 5;
    def.y = 2;
    let room = Room::from_def(&def).expect("room should parse");

    assert_eq!(room.attribute_at(5, 2), Some(TileAttribute::SOLID));
    assert_eq!(room.attribute_at(6, 2), Some(TileAttribute::LADDER));
    assert_eq!(room.attribute_at(5, 3), Some(TileAttribute::NONE));
    assert_eq!(room.attribute_at(0, 0), None);
    assert_eq!(room.attribute_at(7, 2), None);
    assert!(room.is_in_bounds(1, 1));
    assert!(!room.is_in_bounds(2, 0));
}

#[test]
fn test_spawn_position_is_feet_on_tile_floor() {
    assert_eq!(builtin_room().spawn_position(), Vec2::new(56.0, 176.0));
}

// -----------------------------------------------------------------------------
// Ladder tracing
// -----------------------------------------------------------------------------

#[test]
fn test_builtin_ladder_is_traced_with_inset() {
    let room = builtin_room();
    let ladders = room.ladders();

    assert_eq!(ladders.len(), 1);
    assert_eq!(ladders[0].column, 10);
    assert_eq!(ladders[0].bounds, BoundingBox::new(164.0, 80.0, 8.0, 96.0));
    assert_eq!(ladders[0].center_x(), 168.0);
}

#[test]
fn test_separate_runs_in_one_column_are_separate_ladders() {
    let def = room_def("runs", &["H", "H", ".", "H", "#"], (0, 2));
    let room = Room::from_def(&def).expect("room should parse");
    let ladders = room.ladders();

    assert_eq!(ladders.len(), 2);
    assert_eq!(ladders[0].bounds, BoundingBox::new(4.0, 0.0, 8.0, 32.0));
    assert_eq!(ladders[1].bounds, BoundingBox::new(4.0, 48.0, 8.0, 16.0));
}

#[test]
fn test_ladder_reaching_last_row_closes_at_room_bottom() {
    let mut def = room_def("open", &[".H", ".H"], (0, 0));
    def.x = 2;
    def.y = 1;
    let room = Room::from_def(&def).expect("room should parse");
    let ladders = room.ladders();

    assert_eq!(ladders.len(), 1);
    assert_eq!(ladders[0].column, 3);
    assert_eq!(ladders[0].bounds, BoundingBox::new(52.0, 16.0, 8.0, 32.0));
}

#[test]
fn test_shipped_room_ladders() {
    let def = room_def(
        "tower",
        &[
            "########################",
            "#......................#",
            "#......................#",
            "#......................#",
            "#......................#",
            "#...........####H###...#",
            "#...H...........H......#",
            "#...H...........H......#",
            "#...............H......#",
            "#######H#########......#",
            "#......H...............#",
            "#......H...............#",
            "#......H...............#",
            "########################",
        ],
        (3, 12),
    );
    let room = Room::from_def(&def).expect("room should parse");
    let columns: Vec<i32> = room.ladders().iter().map(|ladder| ladder.column).collect();

    assert_eq!(columns, vec![4, 7, 16]);
    assert_eq!(room.ladders()[1].bounds, BoundingBox::new(116.0, 144.0, 8.0, 64.0));
}

// -----------------------------------------------------------------------------
// Ladder contact
// -----------------------------------------------------------------------------

#[test]
fn test_contact_at_ladder_foot() {
    let room = builtin_room();
    let contact = room.ladder_contact(&body_at(Vec2::new(168.0, 176.0)));

    assert!(contact.touching_ladder);
    assert!(!contact.touching_ladder_top);
    // Feet on the floor sit inside the bottom margin.
    assert!(!contact.touching_ladder_with_feet);
    assert_eq!(contact.ladder_center_x, Some(168.0));
}

#[test]
fn test_contact_mid_ladder() {
    let room = builtin_room();
    let contact = room.ladder_contact(&body_at(Vec2::new(168.0, 150.0)));

    assert!(contact.touching_ladder);
    assert!(contact.touching_ladder_with_feet);
}

#[test]
fn test_contact_standing_on_ladder_top() {
    let room = builtin_room();
    let contact = room.ladder_contact(&body_at(Vec2::new(168.0, 80.0)));

    assert!(!contact.touching_ladder);
    assert!(contact.touching_ladder_top);
    assert!(!contact.touching_ladder_with_feet);
    assert_eq!(contact.ladder_center_x, Some(168.0));
}

#[test]
fn test_contact_beside_ladder_edge() {
    let room = builtin_room();
    // Box spans 154..164, sharing only an edge with the rungs.
    let contact = room.ladder_contact(&body_at(Vec2::new(159.0, 150.0)));

    assert!(!contact.touching_ladder);
    assert!(!contact.touching_ladder_with_feet);
}

#[test]
fn test_contact_far_from_ladders() {
    let room = builtin_room();
    assert_eq!(
        room.ladder_contact(&body_at(Vec2::new(40.0, 176.0))),
        LadderContact::default()
    );
}

#[test]
fn test_ladder_top_within_reach() {
    let room = builtin_room();

    assert_eq!(room.ladder_top_below(Vec2::new(168.0, 81.0), 2.0), Some(80.0));
    assert_eq!(room.ladder_top_below(Vec2::new(168.0, 79.0), 2.0), Some(80.0));
    assert_eq!(room.ladder_top_below(Vec2::new(168.0, 90.0), 2.0), None);
    assert_eq!(room.ladder_top_below(Vec2::new(160.0, 80.0), 2.0), None);
}

// -----------------------------------------------------------------------------
// Geometry
// -----------------------------------------------------------------------------

#[test]
fn test_solid_runs_merge_rows() {
    let runs = solid_runs(&builtin_room());

    assert!(runs.contains(&SolidRun {
        row: 0,
        first: 0,
        len: 20,
    }));

    let row_five: Vec<SolidRun> = runs.iter().copied().filter(|run| run.row == 5).collect();
    assert_eq!(
        row_five,
        vec![
            SolidRun { row: 5, first: 0, len: 1 },
            SolidRun { row: 5, first: 4, len: 6 },
            SolidRun { row: 5, first: 11, len: 4 },
            SolidRun { row: 5, first: 19, len: 1 },
        ]
    );
}

#[test]
fn test_room_space_flips_y() {
    assert_eq!(super::room_to_world(Vec2::new(3.0, 8.0)), Vec2::new(3.0, -8.0));
    assert_eq!(super::world_to_room(Vec2::new(3.0, -8.0)), Vec2::new(3.0, 8.0));
}
