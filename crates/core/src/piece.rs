//! Active piece: a shape reference plus an integer transform.

use blockfall_types::{PieceKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH};

use crate::grid::Grid;
use crate::shapes::shape_cells;

/// Spawn transform for new pieces: centered column, top row, rotation 0.
pub const SPAWN_POSITION: (i8, i8) = (FIELD_WIDTH as i8 / 2, FIELD_HEIGHT as i8 - 1);

/// The currently falling, player-controlled piece.
///
/// Copy on purpose: speculative transforms are whole-value candidates
/// that either replace the committed piece or are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn transform
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            rotation: Rotation::R0,
            x,
            y,
        }
    }

    /// The 4 world cells currently occupied by the piece
    pub fn world_cells(&self) -> [(i8, i8); 4] {
        let shape = shape_cells(self.kind, self.rotation);
        shape.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Validity check against the grid. Pure, no side effects.
    ///
    /// Every world cell must satisfy: x within the field, y not below the
    /// floor, and - only when the cell is within the field's vertical
    /// extent - the grid cell empty. Cells above the top are allowed, so
    /// a freshly spawned piece may hang partially off-screen.
    pub fn fits(&self, grid: &Grid) -> bool {
        self.world_cells().iter().all(|&(x, y)| {
            if x < 0 || x >= FIELD_WIDTH as i8 || y < 0 {
                return false;
            }
            y >= FIELD_HEIGHT as i8 || !grid.is_occupied(x, y)
        })
    }
}
