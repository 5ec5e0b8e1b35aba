//! Errors used throughout the checkers engine.
//!
//! `CheckersErrors` is the single error type returned by board mutation,
//! configuration and notation parsing. Search never produces an error for a
//! game condition: a side without moves is a terminal position, not a failure.
//!
//! Usage guidelines:
//! - `InvalidMove` and `InvalidPromotion` signal a contract violation by the
//!   caller (a stale UI click or a generator bug). The board is left untouched.
//! - Option and notation variants are user input problems and are suitable for
//!   presenting back to whoever typed them.

use std::error::Error;
use std::fmt;

use crate::game_state::checkers_types::Position;

pub type CheckersResult<T> = Result<T, CheckersErrors>;

/// Why [`CheckersErrors::InvalidMove`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// No piece stands on the origin square.
    SourceEmpty,
    /// The landing square already holds a piece.
    DestinationOccupied,
    /// One of the referenced squares is off the board.
    OutOfBounds,
}

/// Unified error type for the checkers engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckersErrors {
    /// A move could not be applied to the board.
    InvalidMove {
        from: Position,
        to: Position,
        reason: InvalidMoveReason,
    },

    /// Crowning was requested for an empty square or an existing king.
    InvalidPromotion(Position),

    /// A known option received a value it cannot hold.
    InvalidOption { name: String, value: String },

    /// The option name is not recognised.
    UnknownOption(String),

    /// A square or move string could not be parsed.
    InvalidNotation(String),

    /// The move is well formed but not legal in the current turn.
    IllegalMove(String),
}

impl fmt::Display for CheckersErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckersErrors::InvalidMove { from, to, reason } => {
                let why = match reason {
                    InvalidMoveReason::SourceEmpty => "begin position is empty",
                    InvalidMoveReason::DestinationOccupied => "final position is not empty",
                    InvalidMoveReason::OutOfBounds => "square is off the board",
                };
                write!(f, "can't move {from} -> {to}: {why}")
            }
            CheckersErrors::InvalidPromotion(pos) => {
                write!(f, "can't crown the piece at {pos}")
            }
            CheckersErrors::InvalidOption { name, value } => {
                write!(f, "invalid value '{value}' for option {name}")
            }
            CheckersErrors::UnknownOption(name) => write!(f, "unknown option {name}"),
            CheckersErrors::InvalidNotation(text) => write!(f, "invalid notation '{text}'"),
            CheckersErrors::IllegalMove(text) => write!(f, "illegal move {text}"),
        }
    }
}

impl Error for CheckersErrors {}
