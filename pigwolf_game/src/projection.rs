use log::trace;

use crate::error::GameError;
use crate::mask::TileMask;
use crate::point::Point;
use crate::Result;

/// Side length of the shared comparison space.
pub const SPACE_DIM: usize = 100;
/// Where board cell `(0, 0)` lands inside the comparison space.
pub const BOARD_ORIGIN: Point = Point::new(20, 20);

/// Abstract coordinates of the cell that holds `mask`'s top-left corner once it
/// is centered on `anchor`. `None` if the coordinates do not fit an `i32`.
fn projection_start(mask: &TileMask, anchor: Point) -> Option<Point> {
    BOARD_ORIGIN.checked_add(anchor)?.checked_sub(mask.center())
}

/// Copies `mask` into a fresh comparison space with its center on `anchor`.
pub fn project(mask: &TileMask, anchor: Point) -> Result<TileMask> {
    let mut space = TileMask::new(SPACE_DIM);
    let overflow = GameError::ProjectionOverflow { anchor };
    let start = projection_start(mask, anchor).ok_or_else(|| overflow.clone())?;
    let extent = mask.dim() as i32 - 1;
    let end = start
        .checked_add(Point::new(extent, extent))
        .ok_or_else(|| overflow.clone())?;
    if !space.contains(start) || !space.contains(end) {
        return Err(overflow);
    }

    for cell in mask.iter_set() {
        space.set(start + cell);
    }
    trace!(
        "Projected {} cell(s) anchored at {} from {}",
        mask.count_set(),
        anchor,
        start
    );
    Ok(space)
}

pub fn to_board(abstract_cell: Point) -> Point {
    abstract_cell - BOARD_ORIGIN
}
