//! Rooms domain: tile grid, tile attributes and room-space helpers.

use bevy::prelude::*;

use crate::content::RoomDef;
use crate::movement::{BoundingBox, RoomGrid};
use crate::rooms::ladders::{Ladder, LadderContact, probe_ladders, trace_ladders};

/// Tile attribute bits.
pub struct TileAttribute;

impl TileAttribute {
    pub const NONE: u8 = 0;
    pub const SOLID: u8 = 1 << 0;
    pub const LADDER: u8 = 1 << 1;

    pub fn has_attribute(attribute: u8, flag: u8) -> bool {
        attribute & flag == flag
    }

    pub fn from_glyph(glyph: char) -> Option<u8> {
        match glyph {
            '.' | ' ' => Some(Self::NONE),
            '#' => Some(Self::SOLID),
            'H' => Some(Self::LADDER),
            _ => None,
        }
    }
}

/// Why a [`RoomDef`] could not be turned into a [`Room`].
#[derive(Debug, Clone, PartialEq)]
pub enum RoomParseError {
    Empty { room_id: String },
    InvalidGridSize { room_id: String, grid_size: i32 },
    RaggedRow { room_id: String, row: usize, expected: usize, found: usize },
    UnknownGlyph { room_id: String, row: usize, column: usize, glyph: char },
    SpawnOutOfBounds { room_id: String, spawn: (i32, i32) },
    TileCountMismatch { room_id: String, expected: usize, found: usize },
}

impl std::fmt::Display for RoomParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { room_id } => write!(f, "Room '{}' has no tiles", room_id),
            Self::InvalidGridSize { room_id, grid_size } => {
                write!(f, "Room '{}' has invalid grid size {}", room_id, grid_size)
            }
            Self::RaggedRow {
                room_id,
                row,
                expected,
                found,
            } => write!(
                f,
                "Room '{}' row {} has {} tiles, expected {}",
                room_id, row, found, expected
            ),
            Self::UnknownGlyph {
                room_id,
                row,
                column,
                glyph,
            } => write!(
                f,
                "Room '{}' has unknown tile '{}' at row {}, column {}",
                room_id, glyph, row, column
            ),
            Self::SpawnOutOfBounds { room_id, spawn } => {
                write!(f, "Room '{}' spawn {:?} is outside the room", room_id, spawn)
            }
            Self::TileCountMismatch {
                room_id,
                expected,
                found,
            } => write!(
                f,
                "Room '{}' has {} tile attributes, expected {}",
                room_id, found, expected
            ),
        }
    }
}

/// The active room: tile attributes plus the ladders traced from them.
#[derive(Resource, Debug, Clone)]
pub struct Room {
    pub id: String,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    grid_size: i32,
    attributes: Vec<u8>,
    spawn: IVec2,
    ladders: Vec<Ladder>,
}

impl Room {
    pub fn from_def(def: &RoomDef) -> Result<Self, RoomParseError> {
        let room_id = def.id.clone();

        if def.grid_size <= 0 {
            return Err(RoomParseError::InvalidGridSize {
                room_id,
                grid_size: def.grid_size,
            });
        }

        let width = def.rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(RoomParseError::Empty { room_id });
        }

        let mut attributes = Vec::with_capacity(width * def.rows.len());
        for (row_index, row) in def.rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(RoomParseError::RaggedRow {
                    room_id,
                    row: row_index,
                    expected: width,
                    found,
                });
            }

            for (column, glyph) in row.chars().enumerate() {
                let attribute =
                    TileAttribute::from_glyph(glyph).ok_or_else(|| RoomParseError::UnknownGlyph {
                        room_id: room_id.clone(),
                        row: row_index,
                        column,
                        glyph,
                    })?;
                attributes.push(attribute);
            }
        }

        Self::new(
            def.id.clone(),
            IVec2::new(def.x, def.y),
            width as i32,
            def.rows.len() as i32,
            def.grid_size,
            attributes,
            IVec2::new(def.spawn.0, def.spawn.1),
        )
    }

    pub fn new(
        id: String,
        origin: IVec2,
        width: i32,
        height: i32,
        grid_size: i32,
        attributes: Vec<u8>,
        spawn: IVec2,
    ) -> Result<Self, RoomParseError> {
        let expected = (width.max(0) * height.max(0)) as usize;
        if attributes.len() != expected {
            return Err(RoomParseError::TileCountMismatch {
                room_id: id,
                expected,
                found: attributes.len(),
            });
        }

        if !(0..width).contains(&spawn.x) || !(0..height).contains(&spawn.y) {
            return Err(RoomParseError::SpawnOutOfBounds {
                room_id: id,
                spawn: (spawn.x, spawn.y),
            });
        }

        let ladders = trace_ladders(width, height, grid_size, origin, |x, y| {
            TileAttribute::has_attribute(
                attributes[(x + y * width) as usize],
                TileAttribute::LADDER,
            )
        });

        Ok(Self {
            id,
            x: origin.x,
            y: origin.y,
            width,
            height,
            grid_size,
            attributes,
            spawn,
            ladders,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Room extent in room pixels.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(
            (self.x * self.grid_size) as f32,
            (self.y * self.grid_size) as f32,
            (self.width * self.grid_size) as f32,
            (self.height * self.grid_size) as f32,
        )
    }

    /// Attribute of an absolute tile, `None` outside the room.
    pub fn attribute_at(&self, tile_x: i32, tile_y: i32) -> Option<u8> {
        let x = tile_x - self.x;
        let y = tile_y - self.y;

        if self.is_in_bounds(x, y) {
            Some(self.attributes[(x + y * self.width) as usize])
        } else {
            None
        }
    }

    /// Bounds check for room-relative tile coordinates.
    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    pub fn ladders(&self) -> &[Ladder] {
        &self.ladders
    }

    /// Feet anchor of a body standing in the spawn tile.
    pub fn spawn_position(&self) -> Vec2 {
        let grid = self.grid_size as f32;
        Vec2::new(
            (self.x + self.spawn.x) as f32 * grid + grid * 0.5,
            (self.y + self.spawn.y + 1) as f32 * grid,
        )
    }

    pub fn ladder_contact(&self, bbox: &BoundingBox) -> LadderContact {
        probe_ladders(&self.ladders, bbox)
    }

    /// Top edge of the ladder under `feet` when it lies within `reach` pixels
    /// of the feet, above or below.
    pub fn ladder_top_below(&self, feet: Vec2, reach: f32) -> Option<f32> {
        self.ladders
            .iter()
            .map(|ladder| &ladder.bounds)
            .filter(|rungs| feet.x > rungs.left() && feet.x < rungs.right())
            .map(|rungs| rungs.top())
            .filter(|top| *top >= feet.y - reach && *top <= feet.y + reach)
            .min_by(|a, b| a.total_cmp(b))
    }
}

impl RoomGrid for Room {
    fn grid_size(&self) -> i32 {
        self.grid_size
    }
}

/// Room space (+Y down) to Bevy world space (+Y up).
pub fn room_to_world(point: Vec2) -> Vec2 {
    Vec2::new(point.x, -point.y)
}

/// Bevy world space (+Y up) to room space (+Y down).
pub fn world_to_room(point: Vec2) -> Vec2 {
    Vec2::new(point.x, -point.y)
}
