use crate::point::Point;

/// Failures raised by the collision and occupancy model.
///
/// None of these are transient: each one points at a bad roster, a bad shape
/// or a bad anchor, and the check that raised it is abandoned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// An actor sits on a forbidden cell or outside the grid.
    #[error("actor '{name}' at {position} is not on the board")]
    OffBoard { name: String, position: Point },

    /// A shape offset does not fit inside the footprint mask.
    #[error("shape offset {offset} falls outside the {dim}x{dim} mask")]
    MalformedShape { offset: Point, dim: usize },

    /// Exactly one of two colliding pigs owns a house.
    #[error("pigs '{left}' and '{right}' disagree on house ownership")]
    AsymmetricHouses { left: String, right: String },

    /// A footprint anchored here would spill out of the comparison space.
    #[error("house anchored at {anchor} projects outside the comparison space")]
    ProjectionOverflow { anchor: Point },
}
