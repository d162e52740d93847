//! Shape catalog and rotation.
//!
//! Each piece kind is 4 cell offsets in a local 4x4 frame, defined once
//! and never mutated. Rotation is not table-driven: a quarter turn maps
//! an offset through `(x, y) -> (y, k - x)` around the fixed pivot
//! constant `k = 1`, applied once per rotation state. The map is exact
//! only for offsets within a 2-cell span of the pivot, so wide pieces
//! (the I) land in non-canonical spots when rotated. That behavior is
//! the contract; do not swap in a standard rotation system.

use blockfall_types::{PieceKind, Rotation};

/// Offset of a single cell relative to the piece origin
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the piece origin
pub type PieceShape = [CellOffset; 4];

/// Rotation pivot constant for the quarter-turn map
const PIVOT: i8 = 1;

/// Base (rotation 0) offsets for a piece kind
pub fn base_offsets(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(2, 0), (2, 1), (2, 2), (2, 3)],
        PieceKind::O => [(1, 1), (2, 1), (1, 2), (2, 2)],
        PieceKind::J => [(2, 0), (2, 1), (1, 2), (2, 2)],
        PieceKind::L => [(1, 0), (1, 1), (1, 2), (2, 2)],
        PieceKind::S => [(2, 0), (1, 1), (2, 1), (1, 2)],
        PieceKind::T => [(1, 0), (1, 1), (2, 1), (1, 2)],
        PieceKind::Z => [(1, 0), (1, 1), (2, 1), (2, 2)],
    }
}

/// Map a local offset through `rotation` quarter turns.
///
/// Pure and total over the 4 rotation states; 4 applications of a
/// quarter turn return the original offset.
pub fn rotate_offset(offset: CellOffset, rotation: Rotation) -> CellOffset {
    let (mut x, mut y) = offset;
    for _ in 0..rotation.steps() {
        let (rx, ry) = (y, PIVOT - x);
        x = rx;
        y = ry;
    }
    (x, y)
}

/// Get the 4 local cell offsets for a piece kind at a rotation state
pub fn shape_cells(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let base = base_offsets(kind);
    [
        rotate_offset(base[0], rotation),
        rotate_offset(base[1], rotation),
        rotate_offset(base[2], rotation),
        rotate_offset(base[3], rotation),
    ]
}
