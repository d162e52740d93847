//! Grid integration tests - line clear and compaction through the facade.

use blockfall::core::Grid;
use blockfall::types::{PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

fn fill_row(grid: &mut Grid, y: i8) {
    for x in 0..FIELD_WIDTH as i8 {
        grid.set(x, y, PieceKind::I);
    }
}

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new();
    assert_eq!(grid.width(), FIELD_WIDTH);
    assert_eq!(grid.height(), FIELD_HEIGHT);

    for y in 0..FIELD_HEIGHT as i8 {
        for x in 0..FIELD_WIDTH as i8 {
            assert!(!grid.is_occupied(x, y), "cell ({x}, {y}) should be empty");
            assert_eq!(grid.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_out_of_bounds_is_callers_problem() {
    let grid = Grid::new();

    // get() yields None instead of deciding an occupancy policy.
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(FIELD_WIDTH as i8, 0), None);
    assert_eq!(grid.get(0, FIELD_HEIGHT as i8), None);

    // is_occupied() is false out of bounds by definition.
    assert!(!grid.is_occupied(-1, 0));
    assert!(!grid.is_occupied(0, FIELD_HEIGHT as i8));
}

// Scenario: row y=0 fully filled, grid otherwise holding one marker cell.
// Line clear reports 1 row; everything above shifts down; the top row is
// new-empty.
#[test]
fn test_bottom_row_clear_shifts_everything_down() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 0);
    grid.set(3, 5, PieceKind::T);

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared.len(), 1);
    assert_eq!(cleared.as_slice(), &[0]);

    // The marker dropped by one row.
    assert!(grid.is_occupied(3, 4));
    assert!(!grid.is_occupied(3, 5));

    // Top row is new-empty.
    for x in 0..FIELD_WIDTH as i8 {
        assert!(!grid.is_occupied(x, FIELD_HEIGHT as i8 - 1));
    }
}

#[test]
fn test_clear_preserves_survivor_order() {
    let mut grid = Grid::new();

    // Distinct markers on non-full rows 1, 3, 5; full rows at 0, 2, 4.
    fill_row(&mut grid, 0);
    grid.set(1, 1, PieceKind::J);
    fill_row(&mut grid, 2);
    grid.set(2, 3, PieceKind::L);
    fill_row(&mut grid, 4);
    grid.set(3, 5, PieceKind::S);

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared.len(), 3);

    // Survivors compact to rows 0, 1, 2 in their original vertical order.
    assert_eq!(grid.get(1, 0), Some(Some(PieceKind::J)));
    assert_eq!(grid.get(2, 1), Some(Some(PieceKind::L)));
    assert_eq!(grid.get(3, 2), Some(Some(PieceKind::S)));
}

#[test]
fn test_clear_with_no_full_rows_is_noop() {
    let mut grid = Grid::new();
    grid.set(0, 0, PieceKind::Z);
    grid.set(8, 15, PieceKind::I);

    let before = grid.clone();
    assert!(grid.clear_full_rows().is_empty());
    assert_eq!(grid, before);
}

#[test]
fn test_rows_shift_by_cleared_count_below_them() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 2);
    fill_row(&mut grid, 3);
    grid.set(4, 6, PieceKind::O);

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared.len(), 2);

    // Two cleared rows below: the marker drops by exactly two.
    assert!(grid.is_occupied(4, 4));
    assert!(!grid.is_occupied(4, 6));
}
