//! Turn-tree node counting for move generator validation and benchmarking.
//!
//! One ply is one complete turn: a capture chain is expanded to its end
//! before the other side moves.

use crate::game_state::checkers_types::{is_king, Color, Grid};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_complete_turns;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    /// Leaf turns that captured at least one piece.
    pub captures: usize,
    /// Leaf turns whose moving piece finished as a freshly crowned king.
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, grid: &Grid, color: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for turn in generate_complete_turns(generator, grid, color) {
        let (Some(first), Some(last)) = (turn.first(), turn.last()) else {
            continue;
        };
        let next = turn.iter().fold(*grid, |g, mv| apply_move(&g, *mv));

        if depth == 1 {
            total.nodes += 1;
            if first.is_capture() {
                total.captures += 1;
            }
            if !is_king(first.from.cell(grid)) && is_king(last.to.cell(&next)) {
                total.promotions += 1;
            }
        } else {
            total.merge(perft(generator, &next, color.opposite(), depth - 1));
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_rules::starting_grid;
    use crate::game_state::checkers_types::*;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    #[test]
    fn perft_from_start_position() {
        let grid = starting_grid();
        let expected = [1usize, 7, 49, 302];
        for (depth, nodes) in expected.iter().enumerate() {
            let counts = perft(&LegalMoveGenerator, &grid, Color::White, depth as u8);
            assert_eq!(counts.nodes, *nodes, "perft({depth})");
        }
    }

    #[test]
    fn perft_counts_capture_chains_as_one_turn() {
        let mut grid: Grid = [[EMPTY; 8]; 8];
        grid[6][1] = WHITE_MAN;
        grid[5][2] = BLACK_MAN;
        grid[3][4] = BLACK_MAN;
        grid[1][6] = BLACK_MAN;

        // (6,1)x(4,3)x(2,5)x(0,7) is a single turn ending on the crowning row.
        let counts = perft(&LegalMoveGenerator, &grid, Color::White, 1);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                captures: 1,
                promotions: 1,
            }
        );
    }
}
