//! Turn bookkeeping on top of [`BoardState`].
//!
//! Tracks whose turn it is and which piece, if any, is in the middle of a
//! capture chain. Submitted moves are checked against the legal set before
//! they reach the board, and the running capture count is passed along as the
//! history chain length so one undo takes back one whole turn.

use crate::checkers_errors::{CheckersErrors, CheckersResult};
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_move_generator::{generate_piece_moves, generate_side_moves};
use crate::move_generation::move_generator::GeneratedMoves;
use crate::moves::move_descriptions::Move;
use crate::utils::notation::{format_move, format_turn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    /// The piece now on this square must keep capturing.
    Continue(Position),
    /// The turn is over and the given side moves next.
    Finished(Color),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTracker {
    side_to_move: Color,
    chain_piece: Option<Position>,
    chain_length: usize,
}

impl Default for TurnTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnTracker {
    /// White moves first.
    pub fn new() -> Self {
        Self::with_side_to_move(Color::White)
    }

    pub fn with_side_to_move(side_to_move: Color) -> Self {
        Self {
            side_to_move,
            chain_piece: None,
            chain_length: 0,
        }
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn chain_piece(&self) -> Option<Position> {
        self.chain_piece
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Moves the side to move may play right now.
    pub fn legal_moves(&self, grid: &Grid) -> GeneratedMoves {
        match self.chain_piece {
            Some(pos) => generate_piece_moves(grid, pos),
            None => generate_side_moves(grid, self.side_to_move),
        }
    }

    /// Validate `requested` (matched on its from/to squares) and apply it.
    pub fn play(&mut self, board: &mut BoardState, requested: Move) -> CheckersResult<TurnStatus> {
        let legal = self.legal_moves(board.grid());
        let mv = legal
            .moves
            .iter()
            .find(|m| **m == requested)
            .copied()
            .ok_or_else(|| CheckersErrors::IllegalMove(format_move(&requested)))?;

        let chain_length = if mv.is_capture() {
            self.chain_length + 1
        } else {
            0
        };
        board.apply(mv, chain_length)?;
        board.clear_active();
        board.clear_highlight();

        if mv.is_capture() {
            let next = generate_piece_moves(board.grid(), mv.to);
            if next.forced_capture {
                self.chain_piece = Some(mv.to);
                self.chain_length = chain_length;
                board.set_active(mv.to);
                board.highlight_cells(next.moves.iter().map(|m| m.to));
                return Ok(TurnStatus::Continue(mv.to));
            }
        }

        self.chain_piece = None;
        self.chain_length = 0;
        self.side_to_move = self.side_to_move.opposite();
        Ok(TurnStatus::Finished(self.side_to_move))
    }

    /// Play a complete turn; fails if the moves leave a capture chain unfinished.
    pub fn play_turn(&mut self, board: &mut BoardState, turn: &[Move]) -> CheckersResult<()> {
        let mut status = None;
        for mv in turn {
            status = Some(self.play(board, *mv)?);
        }
        match status {
            Some(TurnStatus::Finished(_)) => Ok(()),
            _ => Err(CheckersErrors::IllegalMove(format!(
                "incomplete turn '{}'",
                format_turn(turn)
            ))),
        }
    }

    /// Take back the last logical turn, or the unfinished part of the current one.
    pub fn undo(&mut self, board: &mut BoardState) {
        if !board.can_undo() {
            return;
        }
        if self.chain_piece.is_none() {
            self.side_to_move = self.side_to_move.opposite();
        }
        board.undo();
        self.chain_piece = None;
        self.chain_length = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_rules::starting_grid;

    fn pos(row: i8, col: i8) -> Position {
        Position::new(row, col)
    }

    fn chain_grid() -> Grid {
        let mut grid: Grid = [[EMPTY; 8]; 8];
        grid[6][1] = WHITE_MAN;
        grid[5][2] = BLACK_MAN;
        grid[3][4] = BLACK_MAN;
        grid[0][1] = BLACK_MAN;
        grid
    }

    #[test]
    fn quiet_moves_hand_the_turn_over() {
        let mut board = BoardState::new_game();
        let mut tracker = TurnTracker::new();

        let status = tracker
            .play(&mut board, Move::quiet(pos(5, 2), pos(4, 3)))
            .expect("legal");
        assert_eq!(status, TurnStatus::Finished(Color::Black));

        let err = tracker
            .play(&mut board, Move::quiet(pos(5, 4), pos(4, 5)))
            .expect_err("white cannot move twice");
        assert!(matches!(err, CheckersErrors::IllegalMove(_)));
    }

    #[test]
    fn capture_chain_keeps_the_same_piece_until_done() {
        let mut board = BoardState::from_grid(chain_grid());
        let mut tracker = TurnTracker::new();

        // Submitted without the captured square; the tracker fills it in.
        let status = tracker
            .play(&mut board, Move::quiet(pos(6, 1), pos(4, 3)))
            .expect("first jump");
        assert_eq!(status, TurnStatus::Continue(pos(4, 3)));
        assert_eq!(board.cell(pos(5, 2)), Some(EMPTY));
        assert_eq!(board.active(), Some(pos(4, 3)));
        assert!(board.is_highlighted(pos(2, 5)));

        let status = tracker
            .play(&mut board, Move::quiet(pos(4, 3), pos(2, 5)))
            .expect("second jump");
        assert_eq!(status, TurnStatus::Finished(Color::Black));
        assert_eq!(board.history().last().map(|h| h.chain_length), Some(2));

        tracker.undo(&mut board);
        assert_eq!(board.snapshot(), chain_grid());
        assert_eq!(tracker.side_to_move(), Color::White);
    }

    #[test]
    fn quiet_move_is_refused_while_a_capture_is_pending() {
        let mut board = BoardState::from_grid(chain_grid());
        let mut tracker = TurnTracker::new();
        let err = tracker
            .play(&mut board, Move::quiet(pos(6, 1), pos(5, 0)))
            .expect_err("capture is forced");
        assert!(matches!(err, CheckersErrors::IllegalMove(_)));
        assert_eq!(board.history().len(), 1);
    }

    #[test]
    fn play_turn_rejects_an_unfinished_chain() {
        let mut board = BoardState::from_grid(chain_grid());
        let mut tracker = TurnTracker::new();
        let first = Move::capture(pos(6, 1), pos(4, 3), pos(5, 2));
        assert!(tracker.play_turn(&mut board, &[first]).is_err());

        // Undo in the middle of a chain returns to the start of the same turn.
        tracker.undo(&mut board);
        assert_eq!(board.snapshot(), chain_grid());
        assert_eq!(tracker.side_to_move(), Color::White);
        assert_eq!(tracker.chain_piece(), None);
    }

    #[test]
    fn undo_alternates_the_side_to_move() {
        let mut board = BoardState::new_game();
        let mut tracker = TurnTracker::new();
        tracker
            .play_turn(&mut board, &[Move::quiet(pos(5, 0), pos(4, 1))])
            .expect("white");
        tracker
            .play_turn(&mut board, &[Move::quiet(pos(2, 3), pos(3, 2))])
            .expect("black");

        tracker.undo(&mut board);
        assert_eq!(tracker.side_to_move(), Color::Black);
        tracker.undo(&mut board);
        assert_eq!(tracker.side_to_move(), Color::White);
        assert_eq!(board.snapshot(), starting_grid());

        tracker.undo(&mut board);
        assert_eq!(tracker.side_to_move(), Color::White);
    }
}
