use crate::game_state::checkers_types::*;

/// Single history record pushed after every applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub grid: Grid,
    /// Captures made so far by the turn that produced `grid`; 0 for a quiet
    /// move and for the initial position.
    pub chain_length: usize,
}
