//! Line-oriented console front-end and command loop.
//!
//! A human plays one side by typing move paths; `go` lets the engine play the
//! side to move. Commands:
//!
//! - `new` starts a fresh game
//! - `board` prints the board
//! - `moves` lists the legal moves for the side to move
//! - `play <path>` plays a move or capture chain, e.g. `c3-d4` or `b2:d4:f6`
//! - `go` asks the engine for a complete turn and plays it
//! - `undo` takes back the last turn
//! - `setoption name <name> value <value>` configures the engine
//! - `quit`

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::checkers_errors::{CheckersErrors, CheckersResult};
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::board_state::GameResult;
use crate::game_state::checkers_types::{BoardState, Color};
use crate::game_state::turn_tracker::{TurnStatus, TurnTracker};
use crate::moves::move_descriptions::Move;
use crate::utils::notation::{format_move, format_turn, parse_path, square_to_string};
use crate::utils::render_game_state::render_board;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new(Box::new(MinimaxEngine::default()));

    writeln!(stdout, "{}", render_board(&console.board))?;
    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ConsoleState {
    board: BoardState,
    tracker: TurnTracker,
    engine: Box<dyn Engine>,
}

impl ConsoleState {
    pub fn new(engine: Box<dyn Engine>) -> Self {
        Self {
            board: BoardState::new_game(),
            tracker: TurnTracker::new(),
            engine,
        }
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn tracker(&self) -> &TurnTracker {
        &self.tracker
    }

    /// Handle one input line. Returns `Ok(true)` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        debug!("console command: {trimmed}");

        let outcome = match cmd {
            "new" => {
                self.board.reset();
                self.tracker.reset();
                self.engine.new_game();
                writeln!(out, "{}", render_board(&self.board))?;
                Ok(())
            }
            "board" => {
                writeln!(out, "{}", render_board(&self.board))?;
                Ok(())
            }
            "moves" => {
                let legal = self.tracker.legal_moves(self.board.grid());
                let listed: Vec<String> = legal.moves.iter().map(format_move).collect();
                writeln!(out, "{} to move: {}", self.tracker.side_to_move(), listed.join(" "))?;
                Ok(())
            }
            "play" => match parts.next() {
                Some(path) => self.handle_play(path, out),
                None => Err(CheckersErrors::InvalidNotation(String::new())),
            },
            "go" => self.handle_go(out),
            "undo" => {
                self.tracker.undo(&mut self.board);
                self.board.clear_active();
                self.board.clear_highlight();
                writeln!(out, "{}", render_board(&self.board))?;
                Ok(())
            }
            "setoption" => self.handle_setoption(trimmed),
            "quit" => return Ok(true),
            other => {
                warn!("ignoring unknown command '{other}'");
                writeln!(out, "unknown command '{other}'")?;
                Ok(())
            }
        };

        if let Err(err) = outcome {
            warn!("{cmd} failed: {err}");
            writeln!(out, "error: {err}")?;
        }
        Ok(false)
    }

    fn handle_play(&mut self, path: &str, out: &mut impl Write) -> CheckersResult<()> {
        if self.board.result().is_some() {
            return Err(CheckersErrors::IllegalMove("game is over".to_owned()));
        }
        let squares = parse_path(path)?;

        // Play the whole path on copies and commit only if every step is legal.
        let mut board = self.board.clone();
        let mut tracker = self.tracker;
        let mut finished = None;
        for step in squares.windows(2) {
            if let TurnStatus::Finished(next) =
                tracker.play(&mut board, Move::quiet(step[0], step[1]))?
            {
                finished = Some(next);
            }
        }
        self.board = board;
        self.tracker = tracker;
        if let Some(next) = finished {
            self.announce_if_stuck(next);
        }
        writeln!(out, "{}", render_board(&self.board)).map_err(io_failure)?;
        Ok(())
    }

    fn handle_go(&mut self, out: &mut impl Write) -> CheckersResult<()> {
        if self.board.result().is_some() {
            return Err(CheckersErrors::IllegalMove("game is over".to_owned()));
        }
        if let Some(pos) = self.tracker.chain_piece() {
            return Err(CheckersErrors::IllegalMove(format!(
                "finish the capture chain from {} first",
                square_to_string(pos)
            )));
        }

        let color = self.tracker.side_to_move();
        let output = self.engine.choose_turn(&self.board, color)?;
        for info in &output.info_lines {
            writeln!(out, "{info}").map_err(io_failure)?;
        }

        if output.turn.is_empty() {
            self.board.set_result(GameResult::loss_for(color));
            writeln!(out, "turn none").map_err(io_failure)?;
        } else {
            self.tracker.play_turn(&mut self.board, &output.turn)?;
            writeln!(out, "turn {}", format_turn(&output.turn)).map_err(io_failure)?;
            self.announce_if_stuck(self.tracker.side_to_move());
        }
        if let Some(result) = self.board.result() {
            writeln!(out, "result {result:?}").map_err(io_failure)?;
        }
        writeln!(out, "{}", render_board(&self.board)).map_err(io_failure)?;
        Ok(())
    }

    fn handle_setoption(&mut self, line: &str) -> CheckersResult<()> {
        let mut tokens = line.split_whitespace();
        let _ = tokens.next(); // setoption

        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";

        for tok in tokens {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        self.engine
            .set_option(&name_tokens.join(" "), &value_tokens.join(" "))
    }

    /// Records a loss for `next` when it has nothing to play.
    fn announce_if_stuck(&mut self, next: Color) {
        if self.tracker.legal_moves(self.board.grid()).is_empty() {
            self.board.set_result(GameResult::loss_for(next));
        }
    }
}

fn io_failure(err: io::Error) -> CheckersErrors {
    CheckersErrors::IllegalMove(format!("output failed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::checkers_types::*;

    fn run(console: &mut ConsoleState, line: &str) -> (bool, String) {
        let mut out = Vec::new();
        let quit = console.handle_command(line, &mut out).expect("write to vec");
        (quit, String::from_utf8(out).expect("utf8"))
    }

    fn console() -> ConsoleState {
        ConsoleState::new(Box::new(MinimaxEngine::default()))
    }

    #[test]
    fn play_applies_a_human_move_and_passes_the_turn() {
        let mut console = console();
        let (quit, _) = run(&mut console, "play c3-d4");
        assert!(!quit);
        assert_eq!(console.board().cell(Position::new(4, 3)), Some(WHITE_MAN));
        assert_eq!(console.tracker().side_to_move(), Color::Black);
    }

    #[test]
    fn illegal_play_reports_an_error_and_leaves_the_board() {
        let mut console = console();
        let (_, text) = run(&mut console, "play c3-c4");
        assert!(text.starts_with("error:"));
        assert_eq!(console.board().history().len(), 1);
    }

    #[test]
    fn path_failing_partway_leaves_the_board_untouched() {
        let mut console = console();
        let before = console.board().snapshot();
        let (_, text) = run(&mut console, "play c3-d4-e5");
        assert!(text.starts_with("error:"));
        assert_eq!(console.board().snapshot(), before);
        assert_eq!(console.board().history().len(), 1);
        assert_eq!(console.tracker().side_to_move(), Color::White);
    }

    #[test]
    fn go_plays_a_turn_for_the_side_to_move() {
        let mut console = ConsoleState::new(Box::new(RandomEngine::with_seed(5)));
        let (_, text) = run(&mut console, "go");
        assert!(text.lines().any(|l| l.starts_with("turn ")));
        assert_eq!(console.tracker().side_to_move(), Color::Black);
        assert_eq!(console.board().history().len(), 2);
    }

    #[test]
    fn undo_and_new_restore_the_start_position() {
        let mut console = console();
        run(&mut console, "play c3-d4");
        run(&mut console, "undo");
        assert_eq!(console.tracker().side_to_move(), Color::White);
        assert_eq!(console.board().history().len(), 1);

        run(&mut console, "play c3-d4");
        run(&mut console, "new");
        assert_eq!(console.board().history().len(), 1);
        assert_eq!(console.tracker().side_to_move(), Color::White);
    }

    #[test]
    fn setoption_forwards_to_the_engine() {
        let mut console = console();
        let (_, text) = run(&mut console, "setoption name MaxDepth value 2");
        assert!(text.is_empty());

        let (_, text) = run(&mut console, "setoption name Bogus value 1");
        assert!(text.starts_with("error:"));
    }

    #[test]
    fn moves_lists_the_opening_choices_and_quit_stops() {
        let mut console = console();
        let (_, text) = run(&mut console, "moves");
        assert!(text.starts_with("white to move:"));
        assert_eq!(text.split_whitespace().count(), 3 + 7);

        let (quit, _) = run(&mut console, "quit");
        assert!(quit);
    }
}
