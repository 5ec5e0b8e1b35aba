use crate::game_state::checkers_types::*;
use crate::moves::move_descriptions::Move;

/// Jumps available to the man on `from`, in any of the four diagonal directions.
pub fn generate_man_captures(grid: &Grid, from: Position, color: Color, out: &mut Vec<Move>) {
    for (d_row, d_col) in DIAGONALS {
        let (Some(over), Some(landing)) = (from.offset(d_row, d_col, 1), from.offset(d_row, d_col, 2))
        else {
            continue;
        };
        let jumped = over.cell(grid);
        if landing.cell(grid) == EMPTY && color.opposite().owns(jumped) {
            out.push(Move::capture(from, landing, over));
        }
    }
}

/// Single forward steps onto empty squares.
pub fn generate_man_quiet_moves(grid: &Grid, from: Position, color: Color, out: &mut Vec<Move>) {
    for d_col in [-1, 1] {
        if let Some(to) = from.offset(color.forward(), d_col, 1) {
            if to.cell(grid) == EMPTY {
                out.push(Move::quiet(from, to));
            }
        }
    }
}
