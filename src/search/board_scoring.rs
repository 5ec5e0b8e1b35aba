//! Pluggable board evaluation used at the search horizon.
//!
//! Scores are ratios from the bot's point of view: bot material divided by
//! opponent material, so larger is better for the bot and the value is never
//! negative. A side wiped off the board pins the score to one of the extremes.

use crate::game_state::checkers_types::*;
use crate::search::search_config::ScoringMode;

/// Score of a line the bot has won. Stands in for infinity throughout search.
pub const WIN_SCORE: f64 = 1e9;
/// Score of a line the bot has lost.
pub const LOSS_SCORE: f64 = 0.0;

pub trait BoardScorer: Send + Sync {
    /// Score `grid` for the side playing `bot`.
    fn score(&self, grid: &Grid, bot: Color) -> f64;
}

/// Men and kings per color, men possibly carrying a positional bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Material {
    men: [f64; 2],
    kings: [f64; 2],
}

impl Material {
    fn count(grid: &Grid, advancement_bonus: f64) -> Self {
        let mut material = Material::default();
        for pos in Position::all() {
            let cell = pos.cell(grid);
            let Some(color) = cell_color(cell) else {
                continue;
            };
            if is_king(cell) {
                material.kings[color.index()] += 1.0;
            } else {
                let advanced = (color.opposite().promotion_row() - pos.row).abs();
                material.men[color.index()] += 1.0 + advancement_bonus * f64::from(advanced);
            }
        }
        material
    }

    fn ratio(&self, bot: Color, king_weight: f64) -> f64 {
        let own = bot.index();
        let opp = bot.opposite().index();
        if self.men[opp] + self.kings[opp] == 0.0 {
            return WIN_SCORE;
        }
        if self.men[own] + self.kings[own] == 0.0 {
            return LOSS_SCORE;
        }
        (self.men[own] + self.kings[own] * king_weight)
            / (self.men[opp] + self.kings[opp] * king_weight)
    }
}

/// Plain piece count with kings worth four men.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    pub const KING_WEIGHT: f64 = 4.0;
}

impl BoardScorer for MaterialScorer {
    fn score(&self, grid: &Grid, bot: Color) -> f64 {
        Material::count(grid, 0.0).ratio(bot, Self::KING_WEIGHT)
    }
}

/// Piece count where every man also earns 0.05 per row it has advanced from
/// its own back rank; kings are worth five men.
#[derive(Debug, Clone, Copy, Default)]
pub struct PotentialScorer;

impl PotentialScorer {
    pub const KING_WEIGHT: f64 = 5.0;
    pub const ADVANCEMENT_BONUS: f64 = 0.05;
}

impl BoardScorer for PotentialScorer {
    fn score(&self, grid: &Grid, bot: Color) -> f64 {
        Material::count(grid, Self::ADVANCEMENT_BONUS).ratio(bot, Self::KING_WEIGHT)
    }
}

pub fn scorer_for(mode: ScoringMode) -> Box<dyn BoardScorer> {
    match mode {
        ScoringMode::NumberOnly => Box::new(MaterialScorer),
        ScoringMode::NumberAndPotential => Box::new(PotentialScorer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_rules::starting_grid;

    fn empty_grid() -> Grid {
        [[EMPTY; 8]; 8]
    }

    /// Same position seen from the other side: colors exchanged and rows mirrored.
    fn swap_colors(grid: &Grid) -> Grid {
        let mut out = [[EMPTY; 8]; 8];
        for pos in Position::all() {
            let swapped = match pos.cell(grid) {
                WHITE_MAN => BLACK_MAN,
                BLACK_MAN => WHITE_MAN,
                WHITE_KING => BLACK_KING,
                BLACK_KING => WHITE_KING,
                other => other,
            };
            Position::new(BOARD_SIZE - 1 - pos.row, pos.col).set(&mut out, swapped);
        }
        out
    }

    fn sample_grid() -> Grid {
        let mut grid = empty_grid();
        grid[5][0] = WHITE_MAN;
        grid[6][3] = WHITE_MAN;
        grid[2][1] = WHITE_KING;
        grid[1][4] = BLACK_MAN;
        grid[4][5] = BLACK_KING;
        grid[3][6] = BLACK_KING;
        grid
    }

    #[test]
    fn start_position_is_balanced() {
        let grid = starting_grid();
        for color in [Color::White, Color::Black] {
            assert_eq!(MaterialScorer.score(&grid, color), 1.0);
            assert!((PotentialScorer.score(&grid, color) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn material_ratio_weights_kings_by_four() {
        let grid = sample_grid();
        // White: 2 men + 1 king = 6, black: 1 man + 2 kings = 9.
        assert_eq!(MaterialScorer.score(&grid, Color::White), 6.0 / 9.0);
        assert_eq!(MaterialScorer.score(&grid, Color::Black), 9.0 / 6.0);
    }

    #[test]
    fn potential_adds_advancement_and_weights_kings_by_five() {
        let grid = sample_grid();
        // White men advanced 2 and 1 rows, black man advanced 1 row.
        let white = 2.0 + 0.05 * 3.0 + 5.0;
        let black = 1.0 + 0.05 * 1.0 + 10.0;
        let score = PotentialScorer.score(&grid, Color::White);
        assert!((score - white / black).abs() < 1e-12);
    }

    #[test]
    fn eliminated_sides_pin_the_extremes() {
        let mut grid = empty_grid();
        grid[4][3] = WHITE_MAN;
        assert_eq!(MaterialScorer.score(&grid, Color::White), WIN_SCORE);
        assert_eq!(MaterialScorer.score(&grid, Color::Black), LOSS_SCORE);
        assert_eq!(PotentialScorer.score(&grid, Color::White), WIN_SCORE);
    }

    #[test]
    fn scoring_is_deterministic() {
        let grid = sample_grid();
        let scorer = scorer_for(ScoringMode::NumberAndPotential);
        assert_eq!(scorer.score(&grid, Color::Black), scorer.score(&grid, Color::Black));
    }

    #[test]
    fn swapping_colors_and_sides_preserves_the_score() {
        let grid = sample_grid();
        let flipped = swap_colors(&grid);
        for scorer in [scorer_for(ScoringMode::NumberOnly), scorer_for(ScoringMode::NumberAndPotential)] {
            let as_white = scorer.score(&grid, Color::White);
            assert!((as_white - scorer.score(&flipped, Color::Black)).abs() < 1e-12);
        }

        // Without the positional term the two sides see reciprocal scores.
        let white = MaterialScorer.score(&grid, Color::White);
        let black = MaterialScorer.score(&grid, Color::Black);
        assert!((white - 1.0 / black).abs() < 1e-12);
    }
}
