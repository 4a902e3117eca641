//! ## Game
//! The collision and occupancy model for Pigwolf.
//! ### Modules
//! - Point and TileMask (grid primitives)
//! - Projection (places footprints into the shared comparison space)
//! - House (rotatable footprints and the shape catalog)
//! - Actor (pigs and the wolf, pairwise collision)
//! - Board (occupancy grid rebuilt from the actor roster)
mod actor;
mod board;
mod error;
mod house;
mod mask;
mod point;
mod projection;
#[cfg(test)]
mod test_util;

pub use actor::{Actor, Pig, Wolf, WOLF_NAME};
pub use board::{Board, Grid, BOARD_COLS, BOARD_ROWS};
pub use error::GameError;
pub use house::{validate_catalog, House, HouseKind, Orientation, MASK_DIM};
pub use mask::TileMask;
pub use point::Point;
pub use projection::{project, to_board, BOARD_ORIGIN, SPACE_DIM};

pub type Result<T> = std::result::Result<T, GameError>;
