//! Live board model owned by the game session.
//!
//! `BoardState` stores the grid, the snapshot history used for undo, and the
//! selection/highlight markers a UI asks it to remember. It knows nothing
//! about legality: callers apply moves the generator produced and the board
//! only refuses moves that are physically impossible.

use crate::checkers_errors::{CheckersErrors, CheckersResult, InvalidMoveReason};
use crate::game_state::checkers_rules::{crowned_code, starting_grid};
use crate::game_state::checkers_types::*;
use crate::moves::move_descriptions::Move;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameResult {
    /// Result when `color` has no move on its turn.
    #[inline]
    pub const fn loss_for(color: Color) -> Self {
        match color {
            Color::White => GameResult::BlackWins,
            Color::Black => GameResult::WhiteWins,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BoardState {
    grid: Grid,
    history: Vec<UndoState>,
    active: Option<Position>,
    highlighted: [[bool; 8]; 8],
    result: Option<GameResult>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl BoardState {
    /// Board in the standard starting position.
    pub fn new_game() -> Self {
        Self::from_grid(starting_grid())
    }

    /// Board set up from an arbitrary grid; the grid becomes the only history entry.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            history: vec![UndoState {
                grid,
                chain_length: 0,
            }],
            active: None,
            highlighted: [[false; 8]; 8],
            result: None,
        }
    }

    /// Copy of the current grid.
    #[inline]
    pub fn snapshot(&self) -> Grid {
        self.grid
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        pos.in_bounds().then(|| pos.cell(&self.grid))
    }

    #[inline]
    pub fn history(&self) -> &[UndoState] {
        &self.history
    }

    /// True when at least one move can be taken back.
    #[inline]
    pub fn can_undo(&self) -> bool {
        self.history.len() > 1
    }

    /// Apply `mv` and record the resulting grid together with `chain_length`.
    pub fn apply(&mut self, mv: Move, chain_length: usize) -> CheckersResult<()> {
        let invalid = |reason| CheckersErrors::InvalidMove {
            from: mv.from,
            to: mv.to,
            reason,
        };

        let captured_in_bounds = mv.captured.map_or(true, Position::in_bounds);
        if !mv.from.in_bounds() || !mv.to.in_bounds() || !captured_in_bounds {
            return Err(invalid(InvalidMoveReason::OutOfBounds));
        }
        if mv.to.cell(&self.grid) != EMPTY {
            return Err(invalid(InvalidMoveReason::DestinationOccupied));
        }
        let piece = mv.from.cell(&self.grid);
        if piece == EMPTY {
            return Err(invalid(InvalidMoveReason::SourceEmpty));
        }

        if let Some(captured) = mv.captured {
            captured.set(&mut self.grid, EMPTY);
        }
        mv.from.set(&mut self.grid, EMPTY);
        mv.to.set(&mut self.grid, crowned_code(piece, mv.to.row));

        self.history.push(UndoState {
            grid: self.grid,
            chain_length,
        });
        Ok(())
    }

    /// Take back one logical turn.
    ///
    /// Pops as many snapshots as the last push's chain length (at least one),
    /// so a whole capture chain is reverted at once. The oldest snapshot is
    /// never removed.
    pub fn undo(&mut self) {
        let mut to_pop = self
            .history
            .last()
            .map_or(1, |entry| entry.chain_length.max(1));
        while to_pop > 0 && self.history.len() > 1 {
            self.history.pop();
            to_pop -= 1;
        }
        if let Some(top) = self.history.last() {
            self.grid = top.grid;
        }
        self.result = None;
        self.clear_active();
        self.clear_highlight();
    }

    /// Back to the starting position with a single-entry history.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    /// Crown the man standing on `pos`. Used for board setup.
    pub fn promote(&mut self, pos: Position) -> CheckersResult<()> {
        if !pos.in_bounds() {
            return Err(CheckersErrors::InvalidPromotion(pos));
        }
        let cell = pos.cell(&self.grid);
        if cell == EMPTY || is_king(cell) {
            return Err(CheckersErrors::InvalidPromotion(pos));
        }
        pos.set(&mut self.grid, cell + PROMOTION_OFFSET);
        // Setup edit, so the current snapshot must carry the crown too.
        if let Some(top) = self.history.last_mut() {
            top.grid = self.grid;
        }
        Ok(())
    }

    pub fn set_active(&mut self, pos: Position) {
        self.active = Some(pos);
    }

    pub fn clear_active(&mut self) {
        self.active = None;
    }

    #[inline]
    pub fn active(&self) -> Option<Position> {
        self.active
    }

    pub fn highlight_cells(&mut self, cells: impl IntoIterator<Item = Position>) {
        for pos in cells.into_iter().filter(|p| p.in_bounds()) {
            self.highlighted[pos.row as usize][pos.col as usize] = true;
        }
    }

    pub fn clear_highlight(&mut self) {
        self.highlighted = [[false; 8]; 8];
    }

    #[inline]
    pub fn is_highlighted(&self, pos: Position) -> bool {
        pos.in_bounds() && self.highlighted[pos.row as usize][pos.col as usize]
    }

    pub fn set_result(&mut self, result: GameResult) {
        self.result = Some(result);
    }

    #[inline]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }
}
