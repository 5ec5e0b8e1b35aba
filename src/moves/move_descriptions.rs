//! Move records produced by the generator and consumed by the board.

use std::hash::{Hash, Hasher};

use crate::game_state::checkers_types::Position;

/// A single diagonal step or jump.
///
/// Identity is `from`/`to` only: the captured square is derived from the
/// geometry and the board, so two moves between the same squares compare equal.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub captured: Option<Position>,
}

impl Move {
    #[inline]
    pub const fn quiet(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    #[inline]
    pub const fn capture(from: Position, to: Position, captured: Position) -> Self {
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}
