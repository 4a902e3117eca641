use log::{trace, warn};

use crate::actor::Actor;
use crate::error::GameError;
use crate::point::Point;
use crate::Result;

pub const BOARD_ROWS: usize = 5;
pub const BOARD_COLS: usize = 5;
/// Cells cut out of the otherwise rectangular board.
pub const REFERENCE_FORBIDDEN: [(i32, i32); 4] = [(0, 0), (0, 3), (0, 4), (4, 20)];

/// Cell labels indexed `[row][col]`; `None` is an empty cell.
pub type Grid = [[Option<String>; BOARD_COLS]; BOARD_ROWS];

fn in_bounds(p: Point) -> bool {
    p.x >= 0 && p.y >= 0 && (p.x as usize) < BOARD_ROWS && (p.y as usize) < BOARD_COLS
}

#[derive(Debug, Clone)]
pub struct Board {
    content: Option<Grid>,
    forbidden: Vec<Point>,
}

impl Board {
    pub fn new() -> Self {
        Self::with_forbidden(&REFERENCE_FORBIDDEN)
    }

    /// Forbidden cells outside the grid can never be occupied anyway, so they are dropped.
    pub fn with_forbidden(cells: &[(i32, i32)]) -> Self {
        let mut forbidden = Vec::new();
        for cell in cells.iter().copied().map(Point::from) {
            if !in_bounds(cell) {
                warn!("Dropping forbidden cell {} outside the board", cell);
                continue;
            }
            if !forbidden.contains(&cell) {
                forbidden.push(cell);
            }
        }

        Self {
            content: Some(Grid::default()),
            forbidden,
        }
    }

    pub fn forbidden_cells(&self) -> &[Point] {
        &self.forbidden
    }

    pub fn is_forbidden(&self, p: Point) -> bool {
        self.forbidden.contains(&p)
    }

    /// Clears the grid and writes every actor's name at its position, in order.
    ///
    /// Actors sharing a cell leave only the last name behind. If any actor is
    /// off the board the rebuild stops and the board holds no grid at all.
    pub fn rebuild(&mut self, actors: &[&dyn Actor]) -> Result<()> {
        self.content = None;

        let mut grid = Grid::default();
        for actor in actors {
            let position = actor.position();
            if !in_bounds(position) || self.is_forbidden(position) {
                return Err(GameError::OffBoard {
                    name: actor.name().to_owned(),
                    position,
                });
            }
            grid[position.x as usize][position.y as usize] = Some(actor.name().to_owned());
        }

        trace!("Board rebuilt with {} actor(s)", actors.len());
        self.content = Some(grid);
        Ok(())
    }

    /// `None` after a failed rebuild.
    pub fn content(&self) -> Option<&Grid> {
        self.content.as_ref()
    }

    pub fn label_at(&self, p: Point) -> Option<&str> {
        if !in_bounds(p) {
            return None;
        }
        self.content.as_ref()?[p.x as usize][p.y as usize].as_deref()
    }

    pub fn render(&self) -> Option<String> {
        let grid = self.content.as_ref()?;
        let mut out = String::new();
        for (row, cells) in grid.iter().enumerate() {
            let mut row_str = Vec::with_capacity(BOARD_COLS);
            for (col, cell) in cells.iter().enumerate() {
                let tile = match cell {
                    _ if self.is_forbidden(Point::new(row as i32, col as i32)) => "##".to_owned(),
                    Some(name) => name.chars().take(2).collect(),
                    None => "..".to_owned(),
                };
                row_str.push(format!("{:<2}", tile));
            }
            out.push_str(&row_str.join(" "));
            out.push('\n');
        }
        Some(out)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
