use crate::game_state::checkers_types::{Color, Grid, Position};
use crate::moves::move_descriptions::Move;

/// Legal moves for a side or a single piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedMoves {
    pub moves: Vec<Move>,
    /// Set when captures exist; `moves` then holds captures only.
    pub forced_capture: bool,
}

impl GeneratedMoves {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }
}

pub trait MoveGenerator: Send + Sync {
    /// Every legal move for `color`, captures taking precedence side-wide.
    fn generate_side_moves(&self, grid: &Grid, color: Color) -> GeneratedMoves;

    /// Legal moves for the piece on `from`, captures taking precedence.
    ///
    /// Used to continue a capture chain with the piece that just jumped.
    fn generate_piece_moves(&self, grid: &Grid, from: Position) -> GeneratedMoves;
}
