//! Fixed rule constants: starting layout and crowning.

use crate::game_state::checkers_types::*;

/// Rows filled with black men at the start of a game.
pub const BLACK_START_ROWS: std::ops::Range<i8> = 0..3;
/// Rows filled with white men at the start of a game.
pub const WHITE_START_ROWS: std::ops::Range<i8> = 5..8;

/// Standard opening layout: three ranks per side on the dark squares.
pub fn starting_grid() -> Grid {
    let mut grid: Grid = [[EMPTY; 8]; 8];
    for pos in Position::all() {
        if (pos.row + pos.col) % 2 == 0 {
            continue;
        }
        if BLACK_START_ROWS.contains(&pos.row) {
            pos.set(&mut grid, BLACK_MAN);
        } else if WHITE_START_ROWS.contains(&pos.row) {
            pos.set(&mut grid, WHITE_MAN);
        }
    }
    grid
}

/// Code a piece should carry after landing on `row`.
///
/// Men reaching the opposing back rank are crowned; everything else keeps its code.
#[inline]
pub fn crowned_code(cell: Cell, row: i8) -> Cell {
    if (cell == WHITE_MAN && row == Color::White.promotion_row())
        || (cell == BLACK_MAN && row == Color::Black.promotion_row())
    {
        cell + PROMOTION_OFFSET
    } else {
        cell
    }
}

/// Number of pieces of each `(color, is_king)` class on the grid.
pub fn piece_counts(grid: &Grid) -> [[usize; 2]; 2] {
    let mut counts = [[0usize; 2]; 2];
    for pos in Position::all() {
        let cell = pos.cell(grid);
        if let Some(color) = cell_color(cell) {
            counts[color.index()][usize::from(is_king(cell))] += 1;
        }
    }
    counts
}
