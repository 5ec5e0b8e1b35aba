//! Minimax bot.
//!
//! Wraps [`SearchEngine`] with option handling. Options are collected into a
//! [`SearchConfig`] and the search engine is rebuilt whenever one changes, so
//! a running search always sees a fixed configuration.

use crate::checkers_errors::CheckersResult;
use crate::engines::engine_trait::{Engine, TurnOutput};
use crate::game_state::checkers_types::{BoardState, Color};
use crate::search::minimax::SearchEngine;
use crate::search::search_config::SearchConfig;
use crate::utils::notation::format_turn;

pub struct MinimaxEngine {
    search: SearchEngine,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search: SearchEngine::new(config),
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        self.search.config()
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "PlumCheckers Minimax"
    }

    fn new_game(&mut self) {
        self.search = SearchEngine::new(*self.config());
    }

    fn set_option(&mut self, name: &str, value: &str) -> CheckersResult<()> {
        let mut config = *self.config();
        config.set_option(name, value)?;
        self.search = SearchEngine::new(config);
        Ok(())
    }

    fn choose_turn(&mut self, board: &BoardState, color: Color) -> CheckersResult<TurnOutput> {
        let result = self.search.search(board.grid(), color);

        let mut out = TurnOutput::default();
        out.info_lines.push(format!(
            "info string minimax_engine depth {} optimization {} scoring {}",
            self.config().max_depth,
            self.config().optimization,
            self.config().scoring_mode
        ));
        out.info_lines.push(format!(
            "info string minimax_engine nodes {} score {:.4}",
            result.nodes, result.score
        ));
        if !result.turn.is_empty() {
            out.info_lines.push(format!(
                "info string minimax_engine turn {}",
                format_turn(&result.turn)
            ));
        }
        out.turn = result.turn;
        Ok(out)
    }
}
