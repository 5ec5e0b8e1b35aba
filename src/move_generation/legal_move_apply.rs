use crate::game_state::checkers_rules::crowned_code;
use crate::game_state::checkers_types::*;
use crate::moves::move_descriptions::Move;

/// Grid after `mv`, leaving the input untouched.
///
/// Search-side counterpart of `BoardState::apply`: no validation and no
/// history, since the move comes straight from the generator.
#[inline]
pub fn apply_move(grid: &Grid, mv: Move) -> Grid {
    let mut next = *grid;
    if let Some(captured) = mv.captured {
        captured.set(&mut next, EMPTY);
    }
    let piece = mv.from.cell(&next);
    mv.from.set(&mut next, EMPTY);
    mv.to.set(&mut next, crowned_code(piece, mv.to.row));
    next
}
