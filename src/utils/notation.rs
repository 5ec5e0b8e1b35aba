//! Square and move notation.
//!
//! Columns are files `a..h` left to right, row 0 is rank 8, so white starts
//! on ranks 1-3. Quiet moves are written `c3-d4`, jumps `c3:e5`, and a
//! capture chain lists every landing square: `c3:e5:c7`.

use crate::checkers_errors::{CheckersErrors, CheckersResult};
use crate::game_state::checkers_types::{Position, BOARD_SIZE};
use crate::moves::move_descriptions::Move;

/// Off-board positions fall back to their `(row,col)` form.
pub fn square_to_string(pos: Position) -> String {
    if !pos.in_bounds() {
        return pos.to_string();
    }
    let file = char::from(b'a' + pos.col as u8);
    let rank = BOARD_SIZE - pos.row;
    format!("{file}{rank}")
}

pub fn parse_square(text: &str) -> CheckersResult<Position> {
    let invalid = || CheckersErrors::InvalidNotation(text.to_owned());
    let bytes = text.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }
    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(invalid());
    }
    let col = (file - b'a') as i8;
    let row = BOARD_SIZE - (rank - b'0') as i8;
    Ok(Position::new(row, col))
}

/// Squares visited by a move string such as `c3-d4`, `c3:e5:c7` or `c3d4`.
pub fn parse_path(text: &str) -> CheckersResult<Vec<Position>> {
    let compact: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, '-' | ':' | 'x' | 'X'))
        .collect();
    if compact.len() < 4 || compact.len() % 2 != 0 || !compact.is_ascii() {
        return Err(CheckersErrors::InvalidNotation(text.to_owned()));
    }
    compact
        .as_bytes()
        .chunks(2)
        .map(|pair| parse_square(std::str::from_utf8(pair).unwrap_or_default()))
        .collect()
}

pub fn format_move(mv: &Move) -> String {
    let sep = if mv.is_capture() { ':' } else { '-' };
    format!("{}{sep}{}", square_to_string(mv.from), square_to_string(mv.to))
}

/// A whole turn: `c3-d4` for a quiet move, `c3:e5:c7` for a capture chain.
pub fn format_turn(turn: &[Move]) -> String {
    let Some(first) = turn.first() else {
        return String::new();
    };
    let mut out = format_move(first);
    for mv in &turn[1..] {
        out.push(':');
        out.push_str(&square_to_string(mv.to));
    }
    out
}
