//! Full legal move generation.
//!
//! Orchestrates per-piece generation and enforces the forced-capture rule:
//! once any piece of the side to move can jump, quiet moves disappear from
//! the whole side's move list.

use crate::game_state::checkers_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_moves_king::{generate_king_captures, generate_king_quiet_moves};
use crate::move_generation::legal_moves_man::{generate_man_captures, generate_man_quiet_moves};
use crate::move_generation::move_generator::{GeneratedMoves, MoveGenerator};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_side_moves(&self, grid: &Grid, color: Color) -> GeneratedMoves {
        generate_side_moves(grid, color)
    }

    fn generate_piece_moves(&self, grid: &Grid, from: Position) -> GeneratedMoves {
        generate_piece_moves(grid, from)
    }
}

/// Moves of the piece on `from`; empty for an empty or off-board square.
pub fn generate_piece_moves(grid: &Grid, from: Position) -> GeneratedMoves {
    let mut out = GeneratedMoves::default();
    if !from.in_bounds() {
        return out;
    }
    let cell = from.cell(grid);
    let Some(color) = cell_color(cell) else {
        return out;
    };

    if is_king(cell) {
        generate_king_captures(grid, from, color, &mut out.moves);
    } else {
        generate_man_captures(grid, from, color, &mut out.moves);
    }
    if !out.moves.is_empty() {
        out.forced_capture = true;
        return out;
    }

    if is_king(cell) {
        generate_king_quiet_moves(grid, from, &mut out.moves);
    } else {
        generate_man_quiet_moves(grid, from, color, &mut out.moves);
    }
    out
}

/// Moves for every piece of `color`, in board order.
pub fn generate_side_moves(grid: &Grid, color: Color) -> GeneratedMoves {
    let mut out = GeneratedMoves::default();
    for from in Position::all() {
        if !color.owns(from.cell(grid)) {
            continue;
        }
        let piece = generate_piece_moves(grid, from);
        if piece.forced_capture && !out.forced_capture {
            out.forced_capture = true;
            out.moves.clear();
        }
        if piece.forced_capture == out.forced_capture {
            out.moves.extend(piece.moves);
        }
    }
    out
}

/// Every complete turn for `color`: quiet moves as single-move chains and
/// capture chains followed until the jumping piece has no further capture.
pub fn generate_complete_turns<G: MoveGenerator>(
    generator: &G,
    grid: &Grid,
    color: Color,
) -> Vec<Vec<Move>> {
    let generated = generator.generate_side_moves(grid, color);
    let mut turns = Vec::with_capacity(generated.len());
    for mv in generated.moves {
        if generated.forced_capture {
            extend_capture_chain(generator, &apply_move(grid, mv), vec![mv], &mut turns);
        } else {
            turns.push(vec![mv]);
        }
    }
    turns
}

fn extend_capture_chain<G: MoveGenerator>(
    generator: &G,
    grid: &Grid,
    chain: Vec<Move>,
    turns: &mut Vec<Vec<Move>>,
) {
    let Some(last) = chain.last() else {
        return;
    };
    let next = generator.generate_piece_moves(grid, last.to);
    if !next.forced_capture {
        turns.push(chain);
        return;
    }
    for mv in next.moves {
        let mut longer = chain.clone();
        longer.push(mv);
        extend_capture_chain(generator, &apply_move(grid, mv), longer, turns);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_rules::starting_grid;

    fn pos(row: i8, col: i8) -> Position {
        Position::new(row, col)
    }

    fn empty_grid() -> Grid {
        [[EMPTY; 8]; 8]
    }

    fn assert_no_occupied_destinations(grid: &Grid, generated: &GeneratedMoves) {
        for mv in &generated.moves {
            assert_eq!(mv.to.cell(grid), EMPTY, "destination of {mv:?} is occupied");
            assert_eq!(mv.is_capture(), generated.forced_capture);
        }
    }

    #[test]
    fn start_position_has_seven_quiet_moves_per_side() {
        let grid = starting_grid();
        for color in [Color::White, Color::Black] {
            let generated = generate_side_moves(&grid, color);
            assert!(!generated.forced_capture);
            assert_eq!(generated.len(), 7);
            assert_no_occupied_destinations(&grid, &generated);
        }
    }

    #[test]
    fn white_man_quiet_move_when_no_capture_exists() {
        let grid = starting_grid();
        let generated = generate_side_moves(&grid, Color::White);
        assert!(!generated.forced_capture);
        assert!(generated.moves.contains(&Move::quiet(pos(5, 2), pos(4, 1))));
    }

    #[test]
    fn capture_replaces_quiet_moves_for_the_whole_side() {
        let mut grid = starting_grid();
        grid[4][1] = BLACK_MAN;

        let generated = generate_side_moves(&grid, Color::White);
        assert!(generated.forced_capture);
        // Both neighbours of the intruder can jump it.
        assert_eq!(generated.len(), 2);
        let capture = generated
            .moves
            .iter()
            .find(|m| **m == Move::quiet(pos(5, 2), pos(3, 0)))
            .expect("(5,2) jumps to (3,0)");
        assert_eq!(capture.captured, Some(pos(4, 1)));
        assert!(generated.moves.contains(&Move::quiet(pos(5, 0), pos(3, 2))));
        assert!(!generated.moves.contains(&Move::quiet(pos(5, 2), pos(4, 1))));
        assert!(!generated.moves.contains(&Move::quiet(pos(5, 2), pos(4, 3))));
        assert_no_occupied_destinations(&grid, &generated);
    }

    #[test]
    fn men_capture_backwards_but_only_step_forwards() {
        let mut grid = empty_grid();
        grid[3][3] = WHITE_MAN;
        grid[4][4] = BLACK_MAN;

        let generated = generate_piece_moves(&grid, pos(3, 3));
        assert!(generated.forced_capture);
        assert_eq!(
            generated.moves,
            vec![Move::capture(pos(3, 3), pos(5, 5), pos(4, 4))]
        );

        let black = generate_piece_moves(&grid, pos(4, 4));
        assert!(black.forced_capture);
        assert_eq!(
            black.moves,
            vec![Move::capture(pos(4, 4), pos(2, 2), pos(3, 3))]
        );

        grid[3][3] = EMPTY;
        let quiet = generate_piece_moves(&grid, pos(4, 4));
        assert!(!quiet.forced_capture);
        let mut targets: Vec<Position> = quiet.moves.iter().map(|m| m.to).collect();
        targets.sort();
        assert_eq!(targets, vec![pos(5, 3), pos(5, 5)]);
    }

    #[test]
    fn man_cannot_jump_friendly_piece_or_onto_occupied_square() {
        let mut grid = empty_grid();
        grid[5][2] = WHITE_MAN;
        grid[4][1] = WHITE_MAN;
        grid[4][3] = BLACK_MAN;
        grid[3][4] = BLACK_MAN;

        let generated = generate_piece_moves(&grid, pos(5, 2));
        assert!(!generated.forced_capture);
        assert!(generated.moves.is_empty());
    }

    #[test]
    fn king_slides_until_blocked() {
        let mut grid = empty_grid();
        grid[7][0] = WHITE_KING;
        grid[3][4] = WHITE_MAN;

        let generated = generate_piece_moves(&grid, pos(7, 0));
        assert!(!generated.forced_capture);
        let mut targets: Vec<Position> = generated.moves.iter().map(|m| m.to).collect();
        targets.sort();
        assert_eq!(targets, vec![pos(4, 3), pos(5, 2), pos(6, 1)]);
    }

    #[test]
    fn king_captures_from_a_distance_with_every_landing_square() {
        let mut grid = empty_grid();
        grid[7][0] = WHITE_KING;
        grid[4][3] = BLACK_MAN;
        grid[1][6] = BLACK_MAN;

        let generated = generate_piece_moves(&grid, pos(7, 0));
        assert!(generated.forced_capture);
        let mut targets: Vec<Position> = generated.moves.iter().map(|m| m.to).collect();
        targets.sort();
        assert_eq!(targets, vec![pos(2, 5), pos(3, 4)]);
        assert!(generated
            .moves
            .iter()
            .all(|m| m.captured == Some(pos(4, 3))));
    }

    #[test]
    fn king_cannot_capture_two_adjacent_pieces_or_past_a_friend() {
        let mut grid = empty_grid();
        grid[7][0] = BLACK_KING;
        grid[5][2] = WHITE_MAN;
        grid[4][3] = WHITE_MAN;
        grid[0][7] = BLACK_KING;
        grid[1][6] = BLACK_MAN;
        grid[2][5] = WHITE_MAN;
        grid[3][4] = WHITE_MAN;

        let generated = generate_side_moves(&grid, Color::Black);
        assert!(!generated.forced_capture);
        assert!(generated.moves.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn crowned_piece_generates_with_king_rules() {
        let mut grid = empty_grid();
        grid[1][2] = WHITE_MAN;
        let mut board = BoardState::from_grid(grid);
        board
            .apply(Move::quiet(pos(1, 2), pos(0, 1)), 0)
            .expect("crowning move");
        assert_eq!(board.cell(pos(0, 1)), Some(WHITE_KING));

        let generated = generate_piece_moves(board.grid(), pos(0, 1));
        let mut targets: Vec<Position> = generated.moves.iter().map(|m| m.to).collect();
        targets.sort();
        assert_eq!(
            targets,
            vec![pos(1, 0), pos(1, 2), pos(2, 3), pos(3, 4), pos(4, 5), pos(5, 6), pos(6, 7)]
        );
    }

    #[test]
    fn empty_square_and_empty_side_have_no_moves() {
        let grid = empty_grid();
        assert!(generate_piece_moves(&grid, pos(4, 4)).is_empty());
        assert!(generate_piece_moves(&grid, pos(9, 4)).is_empty());
        assert!(generate_side_moves(&grid, Color::White).is_empty());
    }

    #[test]
    fn complete_turns_follow_capture_chains_to_the_end() {
        let mut grid = empty_grid();
        grid[6][1] = WHITE_MAN;
        grid[5][2] = BLACK_MAN;
        grid[3][4] = BLACK_MAN;
        grid[3][2] = BLACK_MAN;

        let turns = generate_complete_turns(&LegalMoveGenerator, &grid, Color::White);
        // After (6,1)x(4,3) the man may continue over (3,4) or over (3,2).
        assert_eq!(turns.len(), 2);
        for turn in &turns {
            assert_eq!(turn.len(), 2);
            assert_eq!(turn[0], Move::quiet(pos(6, 1), pos(4, 3)));
            assert!(turn.iter().all(Move::is_capture));
        }
    }
}
