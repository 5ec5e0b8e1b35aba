//! Engine abstraction layer used by the console front-end and match harness.
//!
//! Defines the output payload so different bot strategies can be selected at
//! runtime behind a single trait interface.

use crate::checkers_errors::CheckersResult;
use crate::game_state::checkers_types::{BoardState, Color};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Default)]
pub struct TurnOutput {
    /// Complete turn to play, in order. Empty when the side has no legal move.
    pub turn: Vec<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> CheckersResult<()> {
        Ok(())
    }

    /// Choose a whole turn for `color`. Must not mutate the board.
    fn choose_turn(&mut self, board: &BoardState, color: Color) -> CheckersResult<TurnOutput>;
}
