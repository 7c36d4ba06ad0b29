//! Rooms domain: ladder tracing and ladder contact sensing.

use bevy::prelude::*;

use crate::movement::BoundingBox;

/// Horizontal inset of a ladder's climbable area inside its tile column.
pub const LADDER_INSET: i32 = 4;

/// Margin at both ends of a ladder inside which feet do not count as on the rungs.
pub const FEET_MARGIN: f32 = 1.0;

/// One continuous vertical run of ladder tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct Ladder {
    /// Absolute tile column.
    pub column: i32,
    /// Climbable area in room pixels.
    pub bounds: BoundingBox,
}

impl Ladder {
    pub fn center_x(&self) -> f32 {
        self.bounds.center_x()
    }
}

/// Ladder sensor readings for one body on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LadderContact {
    pub touching_ladder: bool,
    pub touching_ladder_top: bool,
    pub touching_ladder_with_feet: bool,
    /// Centre column of the ladder involved, if any.
    pub ladder_center_x: Option<f32>,
}

/// Builds ladder rectangles from a row-major attribute grid.
///
/// `is_ladder(x, y)` is queried with tile coordinates relative to the room;
/// `origin` is the room's absolute tile position.
pub(crate) fn trace_ladders(
    width: i32,
    height: i32,
    grid_size: i32,
    origin: IVec2,
    is_ladder: impl Fn(i32, i32) -> bool,
) -> Vec<Ladder> {
    let mut ladders = Vec::new();

    for x in 0..width {
        let mut run_top: Option<i32> = None;

        for y in 0..height {
            match (is_ladder(x, y), run_top) {
                (true, None) => run_top = Some(y),
                (false, Some(top)) => {
                    ladders.push(ladder_rect(x, top, y, grid_size, origin));
                    run_top = None;
                }
                _ => {}
            }
        }

        // A run touching the last row closes at the room's bottom edge.
        if let Some(top) = run_top {
            ladders.push(ladder_rect(x, top, height, grid_size, origin));
        }
    }

    for ladder in &ladders {
        debug!("Found ladder at {:?}", ladder.bounds);
    }

    ladders
}

fn ladder_rect(x: i32, top: i32, bottom: i32, grid_size: i32, origin: IVec2) -> Ladder {
    let column = origin.x + x;
    Ladder {
        column,
        bounds: BoundingBox::new(
            (column * grid_size + LADDER_INSET) as f32,
            ((origin.y + top) * grid_size) as f32,
            (grid_size - LADDER_INSET * 2) as f32,
            ((bottom - top) * grid_size) as f32,
        ),
    }
}

/// Reads the ladder sensors for a body occupying `bbox`.
pub fn probe_ladders(ladders: &[Ladder], bbox: &BoundingBox) -> LadderContact {
    let mut contact = LadderContact::default();
    let feet = Vec2::new(bbox.center_x(), bbox.bottom());

    for ladder in ladders {
        let rungs = &ladder.bounds;

        let touching = bbox.intersects(rungs);
        let at_top = bbox.overlaps_horizontally(rungs)
            && rungs.top() >= bbox.top()
            && rungs.top() <= bbox.bottom();
        let feet_on_rungs = feet.x > rungs.left()
            && feet.x < rungs.right()
            && feet.y > rungs.top() + FEET_MARGIN
            && feet.y < rungs.bottom() - FEET_MARGIN;

        if touching || (at_top && contact.ladder_center_x.is_none()) {
            contact.ladder_center_x = Some(ladder.center_x());
        }

        contact.touching_ladder |= touching;
        contact.touching_ladder_top |= at_top;
        contact.touching_ladder_with_feet |= feet_on_rungs;
    }

    contact
}
