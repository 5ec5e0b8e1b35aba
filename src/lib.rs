//! Crate root module declarations for the Plum Checkers engine project.
//!
//! This file exposes all top-level subsystems (board state, move generation,
//! search, engines, the console front-end and utility helpers) so binaries,
//! benches and external tooling can import stable module paths.

pub mod checkers_errors;

pub mod game_state {
    pub mod board_state;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod turn_tracker;
    pub mod undo_state;
}

pub mod moves {
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_man;
    pub mod move_generator;
    pub mod move_ordering;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod search_config;
    pub mod search_tree;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod console {
    pub mod console_top;
}

pub mod utils {
    pub mod match_harness;
    pub mod notation;
    pub mod render_game_state;
}
