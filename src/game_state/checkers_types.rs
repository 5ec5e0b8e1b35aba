/// Core value types shared by the board, the move generator and the search.
///
/// The board is a plain 8x8 array of small cell codes so that hypothetical
/// positions can be copied freely while searching.

pub use crate::game_state::board_state::BoardState;
pub use crate::game_state::undo_state::UndoState;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// Piece code stored in every cell.
pub type Cell = u8;

pub const EMPTY: Cell = 0;
pub const WHITE_MAN: Cell = 1;
pub const BLACK_MAN: Cell = 2;
pub const WHITE_KING: Cell = 3;
pub const BLACK_KING: Cell = 4;

/// Offset added to a man's code when it is crowned.
pub const PROMOTION_OFFSET: Cell = 2;

/// Row-major board, `grid[row][col]`. Row 0 is black's back rank.
pub type Grid = [[Cell; 8]; 8];

/// The four diagonal directions as `(d_row, d_col)`.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a man's quiet step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which a man of this color is crowned.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }

    #[inline]
    pub const fn man(self) -> Cell {
        match self {
            Color::White => WHITE_MAN,
            Color::Black => BLACK_MAN,
        }
    }

    #[inline]
    pub const fn king(self) -> Cell {
        self.man() + PROMOTION_OFFSET
    }

    /// True when `cell` holds a piece of this color.
    #[inline]
    pub const fn owns(self, cell: Cell) -> bool {
        match cell_color(cell) {
            Some(color) => color.index() == self.index(),
            None => false,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Owner of a cell code, `None` for an empty square.
///
/// Odd codes are white, even non-zero codes are black.
#[inline]
pub const fn cell_color(cell: Cell) -> Option<Color> {
    if cell == EMPTY {
        None
    } else if cell % 2 == 1 {
        Some(Color::White)
    } else {
        Some(Color::Black)
    }
}

#[inline]
pub const fn is_king(cell: Cell) -> bool {
    cell == WHITE_KING || cell == BLACK_KING
}

/// Board coordinate. Signed so that diagonal rays may step off the board and
/// be rejected by [`Position::in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Square `steps` squares away along `(d_row, d_col)`, if it is on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8, steps: i8) -> Option<Self> {
        let next = Self::new(self.row + d_row * steps, self.col + d_col * steps);
        if next.in_bounds() {
            Some(next)
        } else {
            None
        }
    }

    /// Cell at this position. Callers must check bounds first.
    #[inline]
    pub fn cell(self, grid: &Grid) -> Cell {
        grid[self.row as usize][self.col as usize]
    }

    #[inline]
    pub fn set(self, grid: &mut Grid, cell: Cell) {
        grid[self.row as usize][self.col as usize] = cell;
    }

    /// Iterate every square of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
