use crate::game_state::checkers_types::*;
use crate::moves::move_descriptions::Move;

/// Flying captures along the four rays.
///
/// The first occupied square on a ray decides: an enemy piece becomes the
/// captured square and every empty square behind it is a landing square up to
/// the next occupied one. A friendly first piece closes the ray.
pub fn generate_king_captures(grid: &Grid, from: Position, color: Color, out: &mut Vec<Move>) {
    for (d_row, d_col) in DIAGONALS {
        let mut captured: Option<Position> = None;
        let mut steps = 1;
        while let Some(sq) = from.offset(d_row, d_col, steps) {
            steps += 1;
            let cell = sq.cell(grid);
            if cell != EMPTY {
                if captured.is_some() || color.owns(cell) {
                    break;
                }
                captured = Some(sq);
                continue;
            }
            if let Some(over) = captured {
                out.push(Move::capture(from, sq, over));
            }
        }
    }
}

/// Slides along each ray while squares are empty.
pub fn generate_king_quiet_moves(grid: &Grid, from: Position, out: &mut Vec<Move>) {
    for (d_row, d_col) in DIAGONALS {
        let mut steps = 1;
        while let Some(sq) = from.offset(d_row, d_col, steps) {
            if sq.cell(grid) != EMPTY {
                break;
            }
            out.push(Move::quiet(from, sq));
            steps += 1;
        }
    }
}
