//! Named bot settings resolved once when a search engine is built.
//!
//! Option names follow the settings the game front-end exposes
//! (`MaxDepth`, `Optimization`, `BotScoringType`, `NoRandom`) and are matched
//! case-insensitively, the way UCI `setoption` names are.

use std::fmt;
use std::str::FromStr;

use crate::checkers_errors::{CheckersErrors, CheckersResult};

pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Alpha-beta pruning tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptimizationLevel {
    /// Exhaustive minimax.
    O0,
    /// Classic alpha-beta cutoffs.
    #[default]
    O1,
    /// Alpha-beta plus an early exit when the window closes (`alpha == beta`).
    O2,
}

impl FromStr for OptimizationLevel {
    type Err = CheckersErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "O0" | "NONE" => Ok(OptimizationLevel::O0),
            "O1" | "ALPHABETA" => Ok(OptimizationLevel::O1),
            "O2" | "AGGRESSIVE" => Ok(OptimizationLevel::O2),
            _ => Err(invalid("Optimization", s)),
        }
    }
}

impl fmt::Display for OptimizationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimizationLevel::O0 => write!(f, "O0"),
            OptimizationLevel::O1 => write!(f, "O1"),
            OptimizationLevel::O2 => write!(f, "O2"),
        }
    }
}

/// Static evaluation flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringMode {
    /// Piece counts only, kings weighted 4.
    NumberOnly,
    /// Piece counts plus a bonus for advanced men, kings weighted 5.
    #[default]
    NumberAndPotential,
}

impl FromStr for ScoringMode {
    type Err = CheckersErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v = s.trim();
        if v.eq_ignore_ascii_case("NumberOnly") {
            Ok(ScoringMode::NumberOnly)
        } else if v.eq_ignore_ascii_case("NumberAndPotential") {
            Ok(ScoringMode::NumberAndPotential)
        } else {
            Err(invalid("BotScoringType", s))
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::NumberOnly => write!(f, "NumberOnly"),
            ScoringMode::NumberAndPotential => write!(f, "NumberAndPotential"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Colour switches explored below the bot's own turn.
    pub max_depth: usize,
    pub optimization: OptimizationLevel,
    pub scoring_mode: ScoringMode,
    /// Seed the move shuffler with 0 instead of the clock.
    pub no_random: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            optimization: OptimizationLevel::default(),
            scoring_mode: ScoringMode::default(),
            no_random: false,
        }
    }
}

impl SearchConfig {
    /// Build a config from `(name, value)` pairs on top of the defaults.
    pub fn from_options<'a>(
        options: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> CheckersResult<Self> {
        let mut config = Self::default();
        for (name, value) in options {
            config.set_option(name, value)?;
        }
        Ok(config)
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> CheckersResult<()> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("MaxDepth") || name.eq_ignore_ascii_case("BotLevel") {
            let parsed = value
                .trim()
                .parse::<usize>()
                .map_err(|_| invalid(name, value))?;
            if parsed == 0 {
                return Err(invalid(name, value));
            }
            self.max_depth = parsed;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("Optimization") {
            self.optimization = value.parse()?;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("BotScoringType") {
            self.scoring_mode = value.parse()?;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("NoRandom") {
            self.no_random = parse_bool(value).ok_or_else(|| invalid(name, value))?;
            return Ok(());
        }
        Err(CheckersErrors::UnknownOption(name.to_owned()))
    }
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub(crate) fn invalid(name: &str, value: &str) -> CheckersErrors {
    CheckersErrors::InvalidOption {
        name: name.to_owned(),
        value: value.to_owned(),
    }
}
