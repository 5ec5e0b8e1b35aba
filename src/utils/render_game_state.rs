//! Terminal-oriented board dump.
//!
//! Creates a human-readable board view for debugging, tests and the console
//! front-end. `w`/`b` are men, `W`/`B` kings, `*` marks highlighted squares
//! and `[ ]` the active selection.

use crate::game_state::checkers_types::*;

pub fn render_board(board: &BoardState) -> String {
    let grid = board.grid();
    let active = board.active();
    let mut out = String::new();
    out.push_str("   a  b  c  d  e  f  g  h\n");

    for row in 0..BOARD_SIZE {
        let rank = BOARD_SIZE - row;
        out.push_str(&format!("{rank} "));
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            let symbol = match pos.cell(grid) {
                WHITE_MAN => 'w',
                BLACK_MAN => 'b',
                WHITE_KING => 'W',
                BLACK_KING => 'B',
                _ if board.is_highlighted(pos) => '*',
                _ => '.',
            };
            if active == Some(pos) {
                out.push('[');
                out.push(symbol);
                out.push(']');
            } else {
                out.push(' ');
                out.push(symbol);
                out.push(' ');
            }
        }
        out.push_str(&format!(" {rank}\n"));
    }

    out.push_str("   a  b  c  d  e  f  g  h");
    out
}
