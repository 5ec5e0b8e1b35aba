//! Minimax search with alpha-beta pruning over complete checkers turns.
//!
//! Two recursions cooperate. `first_best_turn` runs while the bot is still
//! inside its own capture chain and records the chosen moves in a
//! [`ChainArena`] so the whole chain can be returned. Once the bot's turn ends,
//! `best_turns_rec` takes over as a plain depth-bounded minimax where depth
//! only advances when the side to move changes.
//!
//! Odd depths are the bot's turns (maximizing), even depths the opponent's
//! (minimizing). Every node works on its own copy of the grid.

use log::debug;

use crate::game_state::checkers_types::{Color, Grid, Position};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMoves, MoveGenerator};
use crate::move_generation::move_ordering::MoveOrdering;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{scorer_for, BoardScorer, LOSS_SCORE, WIN_SCORE};
use crate::search::search_config::{OptimizationLevel, SearchConfig};
use crate::search::search_tree::{ChainArena, NodeId};

/// Lower bound below every reachable score.
const SCORE_FLOOR: f64 = LOSS_SCORE - 1.0;
/// Upper bound above every reachable score.
const SCORE_CEILING: f64 = WIN_SCORE + 1.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    /// Moves of the chosen turn, in playing order. Empty when the side has no move.
    pub turn: Vec<Move>,
    pub score: f64,
    pub nodes: u64,
}

pub struct SearchEngine<G: MoveGenerator = LegalMoveGenerator> {
    config: SearchConfig,
    generator: G,
    scorer: Box<dyn BoardScorer>,
    ordering: MoveOrdering,
    nodes: u64,
}

impl SearchEngine<LegalMoveGenerator> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_generator(config, LegalMoveGenerator)
    }
}

impl<G: MoveGenerator> SearchEngine<G> {
    pub fn with_generator(config: SearchConfig, generator: G) -> Self {
        Self {
            config,
            generator,
            scorer: scorer_for(config.scoring_mode),
            ordering: MoveOrdering::new(config.no_random),
            nodes: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Best complete turn for `color` on `grid`.
    pub fn find_best_turns(&mut self, grid: &Grid, color: Color) -> Vec<Move> {
        self.search(grid, color).turn
    }

    /// Same as [`Self::find_best_turns`] but also reports score and node count.
    pub fn search(&mut self, grid: &Grid, color: Color) -> SearchResult {
        self.nodes = 0;
        let mut arena = ChainArena::default();
        let root = arena.push();
        let score = self.first_best_turn(&mut arena, root, *grid, color, None, SCORE_FLOOR);
        let turn = arena.unwind(root);

        debug!(
            "search {color} depth {} {} seed {} nodes {} chain nodes {} score {score:.4} turn length {}",
            self.config.max_depth,
            self.config.optimization,
            self.ordering.seed(),
            self.nodes,
            arena.len(),
            turn.len()
        );

        SearchResult {
            turn,
            score,
            nodes: self.nodes,
        }
    }

    /// Pick the bot's move at `node`, staying with `color` while the moved piece
    /// keeps capturing. `from` is the piece continuing a chain, `None` at the root.
    fn first_best_turn(
        &mut self,
        arena: &mut ChainArena,
        node: NodeId,
        grid: Grid,
        color: Color,
        from: Option<Position>,
        alpha: f64,
    ) -> f64 {
        self.nodes += 1;
        let generated = self.moves_for(&grid, color, from);
        if from.is_some() && !generated.forced_capture {
            return self.best_turns_rec(grid, color.opposite(), 0, alpha, SCORE_CEILING, None);
        }

        let mut best_score = SCORE_FLOOR;
        for mv in generated.moves {
            let next_grid = apply_move(&grid, mv);
            let (score, next) = if generated.forced_capture {
                let child = arena.push();
                let score =
                    self.first_best_turn(arena, child, next_grid, color, Some(mv.to), best_score);
                (score, Some(child))
            } else {
                let score =
                    self.best_turns_rec(next_grid, color.opposite(), 0, best_score, SCORE_CEILING, None);
                (score, None)
            };

            if score > best_score {
                best_score = score;
                arena.set_best(node, mv, next);
            }
        }
        best_score
    }

    /// Minimax value of `grid` with `color` to move, `depth` colour switches
    /// below the bot's turn. `from` is set while `color` continues a capture chain.
    fn best_turns_rec(
        &mut self,
        grid: Grid,
        color: Color,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        from: Option<Position>,
    ) -> f64 {
        self.nodes += 1;
        let maximizing = depth % 2 == 1;
        if depth == self.config.max_depth {
            let bot = if maximizing { color } else { color.opposite() };
            return self.scorer.score(&grid, bot);
        }

        let generated = self.moves_for(&grid, color, from);
        if from.is_some() && !generated.forced_capture {
            return self.best_turns_rec(grid, color.opposite(), depth + 1, alpha, beta, None);
        }
        if generated.is_empty() {
            // The side to move is stuck and loses.
            return if maximizing { LOSS_SCORE } else { WIN_SCORE };
        }

        let mut min_score = SCORE_CEILING;
        let mut max_score = SCORE_FLOOR;
        for mv in generated.moves {
            let next_grid = apply_move(&grid, mv);
            let score = if generated.forced_capture {
                self.best_turns_rec(next_grid, color, depth, alpha, beta, Some(mv.to))
            } else {
                self.best_turns_rec(next_grid, color.opposite(), depth + 1, alpha, beta, None)
            };

            min_score = min_score.min(score);
            max_score = max_score.max(score);
            if maximizing {
                alpha = alpha.max(max_score);
            } else {
                beta = beta.min(min_score);
            }

            match self.config.optimization {
                OptimizationLevel::O0 => {}
                OptimizationLevel::O1 => {
                    if alpha > beta {
                        break;
                    }
                }
                OptimizationLevel::O2 => {
                    if alpha > beta {
                        break;
                    }
                    if alpha == beta {
                        return if maximizing { max_score + 1.0 } else { min_score - 1.0 };
                    }
                }
            }
        }

        if maximizing {
            max_score
        } else {
            min_score
        }
    }

    /// Side-wide moves in shuffled order, or the chain piece's moves.
    fn moves_for(&mut self, grid: &Grid, color: Color, from: Option<Position>) -> GeneratedMoves {
        match from {
            Some(pos) => self.generator.generate_piece_moves(grid, pos),
            None => {
                let mut generated = self.generator.generate_side_moves(grid, color);
                self.ordering.shuffle(&mut generated.moves);
                generated
            }
        }
    }
}
