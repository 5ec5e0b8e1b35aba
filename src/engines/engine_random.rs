//! Random-turn engine.
//!
//! Picks uniformly among complete legal turns (capture chains expanded). Used
//! for diagnostics, match testing and as the weakest opponent.

use rand::seq::IndexedRandom;

use crate::checkers_errors::{CheckersErrors, CheckersResult};
use crate::engines::engine_trait::{Engine, TurnOutput};
use crate::game_state::checkers_types::{BoardState, Color};
use crate::move_generation::legal_move_generator::{generate_complete_turns, LegalMoveGenerator};
use crate::move_generation::move_ordering::MoveOrdering;
use crate::search::search_config::{invalid, parse_bool};

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    ordering: MoveOrdering,
}

impl RandomEngine {
    pub fn new(no_random: bool) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            ordering: MoveOrdering::new(no_random),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            ordering: MoveOrdering::with_seed(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumCheckers Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> CheckersResult<()> {
        if name.trim().eq_ignore_ascii_case("NoRandom") {
            let no_random = parse_bool(value).ok_or_else(|| invalid(name, value))?;
            self.ordering = MoveOrdering::new(no_random);
        }
        Ok(())
    }

    fn choose_turn(&mut self, board: &BoardState, color: Color) -> CheckersResult<TurnOutput> {
        let turns = generate_complete_turns(&self.move_generator, board.grid(), color);

        let mut out = TurnOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_turns {}",
            turns.len()
        ));
        if turns.is_empty() {
            return Ok(out);
        }

        let picked = turns
            .as_slice()
            .choose(self.ordering.rng())
            .ok_or_else(|| CheckersErrors::IllegalMove("failed to choose a random turn".to_owned()))?;
        out.turn = picked.clone();
        Ok(out)
    }
}
