//! Engine-vs-engine game runner.
//!
//! Plays a full game between two engines from the starting position. Every
//! turn goes through [`TurnTracker`], so an engine returning an illegal or
//! incomplete chain aborts the match with an error instead of corrupting the
//! board. A side with no legal turn loses; hitting the turn cap is a draw.

use log::info;

use crate::checkers_errors::CheckersResult;
use crate::engines::engine_trait::Engine;
use crate::game_state::board_state::GameResult;
use crate::game_state::checkers_types::{BoardState, Color};
use crate::game_state::turn_tracker::TurnTracker;
use crate::utils::notation::format_turn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Turns (one side's move each) before the game is declared drawn.
    pub max_turns: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_turns: 120 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchReport {
    pub result: GameResult,
    pub turns_played: usize,
    /// Every turn in notation, white's first.
    pub turns: Vec<String>,
    pub final_board: BoardState,
}

pub fn play_match(
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    config: MatchConfig,
) -> CheckersResult<MatchReport> {
    let mut board = BoardState::new_game();
    let mut tracker = TurnTracker::new();
    let mut turns = Vec::new();
    white.new_game();
    black.new_game();

    let mut result = GameResult::Draw;
    while turns.len() < config.max_turns {
        let color = tracker.side_to_move();
        let engine: &mut dyn Engine = match color {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };

        let output = engine.choose_turn(&board, color)?;
        if output.turn.is_empty() {
            result = GameResult::loss_for(color);
            break;
        }
        tracker.play_turn(&mut board, &output.turn)?;
        turns.push(format_turn(&output.turn));
    }

    board.set_result(result);
    info!(
        "match {} vs {}: {:?} after {} turns",
        white.name(),
        black.name(),
        result,
        turns.len()
    );

    Ok(MatchReport {
        result,
        turns_played: turns.len(),
        turns,
        final_board: board,
    })
}
