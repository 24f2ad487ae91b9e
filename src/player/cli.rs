#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::{
    common::{AttackError, AttackOutcome, Coordinate, Party, SetupError},
    game::GameEngine,
};

use super::Player;

/// Source of input lines for a [`CliPlayer`].
pub trait LineInput {
    /// Append one line to `buf`, returning bytes read (0 at end of input).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

/// Locks stdin per line, so two players can share the terminal.
impl LineInput for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineInput for io::Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Human player reading moves from a line-oriented input.
pub struct CliPlayer<R, W> {
    label: String,
    input: R,
    output: W,
}

impl CliPlayer<io::Stdin, io::Stdout> {
    /// Player on the process's stdin and stdout.
    pub fn stdio(label: &str) -> Self {
        Self::new(label, io::stdin(), io::stdout())
    }
}

impl<R: LineInput, W: Write> CliPlayer<R, W> {
    pub fn new(label: &str, input: R, output: W) -> Self {
        Self {
            label: label.into(),
            input,
            output,
        }
    }

    /// Consume the player, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one trimmed line. `None` on end of input.
    fn prompt(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.output, "{}", prompt);
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Read an index in `0..size`. Outer `None` on end of input, inner
    /// `None` on a blank line.
    fn prompt_index(&mut self, prompt: &str, size: usize) -> Option<Option<usize>> {
        loop {
            let line = self.prompt(prompt)?;
            if line.is_empty() {
                return Some(None);
            }
            match line.parse::<usize>() {
                Ok(n) if n < size => return Some(Some(n)),
                _ => self.say(&format!("Please enter a number from 0 to {}.", size - 1)),
            }
        }
    }

    fn say(&mut self, msg: &str) {
        let _ = writeln!(self.output, "{}", msg);
    }

    fn show_boards(&mut self, engine: &GameEngine, party: Party) {
        let own = engine.render(party, true);
        let theirs = engine.render(party.other(), false);
        self.say(&format!("\n{}'s Board:\n{}", self.label, own));
        self.say(&format!("\nOpponent's Board:\n{}", theirs));
    }
}

impl<R: LineInput, W: Write> Player for CliPlayer<R, W> {
    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        engine: &mut GameEngine,
        party: Party,
    ) -> Result<(), SetupError> {
        let size = engine.config().grid_size();
        self.say(&format!(
            "\n{}, place your ships. Leave the row or column blank to place the rest at random.",
            self.label
        ));
        loop {
            let Some(ship) = engine.unplaced_ships(party).next() else {
                break;
            };
            self.show_boards(engine, party);
            self.say(&format!("\nPlacing {} (size: {})", ship.name(), ship.length()));
            let row_prompt = format!("Enter row (0-{}): ", size - 1);
            let col_prompt = format!("Enter column (0-{}): ", size - 1);
            let Some(Some(row)) = self.prompt_index(&row_prompt, size) else {
                return engine.auto_place_fleet(party, rng);
            };
            let Some(Some(col)) = self.prompt_index(&col_prompt, size) else {
                return engine.auto_place_fleet(party, rng);
            };
            let Some(answer) = self.prompt("Place horizontally? (y/n): ") else {
                return engine.auto_place_fleet(party, rng);
            };
            let horizontal = answer.eq_ignore_ascii_case("y");
            if let Err(e) = engine.place_ship(party, ship, Coordinate::new(row, col), horizontal) {
                self.say(&format!("Invalid placement! {}.", e));
            }
        }
        Ok(())
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        engine: &GameEngine,
        party: Party,
    ) -> Option<Coordinate> {
        let size = engine.config().grid_size();
        self.show_boards(engine, party);
        self.say(&format!("\n{}'s turn!", self.label));
        let row_prompt = format!("Enter attack row (0-{}), blank to resign: ", size - 1);
        let col_prompt = format!("Enter column (0-{}): ", size - 1);
        loop {
            let row = self.prompt_index(&row_prompt, size)??;
            if let Some(col) = self.prompt_index(&col_prompt, size)? {
                return Some(Coordinate::new(row, col));
            }
        }
    }

    fn handle_attack_result(&mut self, _coord: Coordinate, outcome: AttackOutcome) {
        self.say(&outcome.to_string());
    }

    fn handle_attack_error(&mut self, coord: Coordinate, err: AttackError) {
        self.say(&format!("Invalid attack position {}: {}.", coord, err));
    }

    fn handle_opponent_attack(&mut self, coord: Coordinate, outcome: AttackOutcome) {
        self.say(&format!("Opponent attacked {} -> {:?}", coord, outcome));
    }
}
