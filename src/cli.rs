//! Line-based menu for playing on plain stdin/stdout.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rand::Rng;
use tracing::info;

use crate::{
    history::GameHistory,
    scoring::ScoreResult,
    secret::SecretGenerator,
    session::{GameOutcome, GameSession},
};

pub const INVALID_INPUT_HINT: &str =
    "Invalid input. Enter three different digits; the first cannot be 0.";

enum MenuChoice {
    Play,
    ShowHistory,
    Exit,
    Unknown,
}

impl MenuChoice {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "1" => MenuChoice::Play,
            "2" => MenuChoice::ShowHistory,
            "3" => MenuChoice::Exit,
            _ => MenuChoice::Unknown,
        }
    }
}

/// Drives games and the history report over any line reader and writer.
pub struct MenuController<I, O, R> {
    input: I,
    output: O,
    generator: SecretGenerator<R>,
    history: GameHistory,
    reveal_secret: bool,
}

impl<I: BufRead, O: Write, R: Rng> MenuController<I, O, R> {
    pub fn new(input: I, output: O, generator: SecretGenerator<R>) -> Self {
        Self {
            input,
            output,
            generator,
            history: GameHistory::new(),
            reveal_secret: false,
        }
    }

    pub fn reveal_secret(mut self, reveal: bool) -> Self {
        self.reveal_secret = reveal;
        self
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn into_history(self) -> GameHistory {
        self.history
    }

    /// Runs until the player exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        info!("Line menu started");
        writeln!(self.output, "Welcome to Number Baseball!")?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "1. Start game  2. View game records  3. Exit")?;

            let Some(line) = self.prompt("Choose an option:")? else {
                break;
            };

            match MenuChoice::parse(&line) {
                MenuChoice::Play => {
                    if !self.play()? {
                        break;
                    }
                }
                MenuChoice::ShowHistory => self.show_history()?,
                MenuChoice::Exit => break,
                MenuChoice::Unknown => writeln!(self.output, "Please choose 1, 2 or 3.")?,
            }
        }

        writeln!(self.output, "Goodbye!")?;
        info!("Exit requested");
        Ok(())
    }

    /// Plays one game. Returns false when input ended mid-game.
    fn play(&mut self) -> Result<bool> {
        let mut session = GameSession::new(self.generator.generate());

        writeln!(self.output, "< Game started >")?;
        if self.reveal_secret {
            writeln!(self.output, "(secret: {})", session.secret_as_text())?;
        }

        loop {
            let Some(raw) = self.prompt("Enter a 3-digit number:")? else {
                info!("Input ended; game abandoned");
                return Ok(false);
            };

            match session.guess(&raw) {
                GameOutcome::InvalidInput(err) => {
                    writeln!(self.output, "{INVALID_INPUT_HINT} ({err})")?;
                }
                GameOutcome::Ongoing { strikes, balls } => {
                    writeln!(self.output, "{}", ScoreResult { strikes, balls })?;
                }
                GameOutcome::Won { attempts } => {
                    writeln!(self.output, "Correct! You won in {attempts} attempts.")?;
                    self.history.add_record(attempts, session.secret_as_text());
                    return Ok(true);
                }
            }
        }
    }

    fn show_history(&mut self) -> Result<()> {
        writeln!(self.output, "< Game records >")?;
        for line in self.history.report().lines() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    /// Prints a prompt and reads one line without its terminator. `None` at
    /// end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text} ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SEED: u64 = 11;

    fn expected_secrets(n: usize) -> Vec<String> {
        let mut generator = SecretGenerator::seeded(SEED);
        (0..n).map(|_| generator.generate().to_string()).collect()
    }

    fn run_with(input: &str) -> (String, GameHistory) {
        let mut output = Vec::new();
        let mut controller = MenuController::new(
            Cursor::new(input.to_string()),
            &mut output,
            SecretGenerator::seeded(SEED),
        );
        controller.run().unwrap();
        let history = controller.into_history();
        (String::from_utf8(output).unwrap(), history)
    }

    /// A valid guess guaranteed to differ from the secret.
    fn wrong_guess(secret: &str) -> &'static str {
        if secret == "123" { "456" } else { "123" }
    }

    #[test]
    fn test_exit_immediately() {
        let (out, history) = run_with("3\n");
        assert!(out.contains("1. Start game"));
        assert!(out.ends_with("Goodbye!\n"));
        assert!(history.is_empty());
    }

    #[test]
    fn test_end_of_input_is_a_normal_quit() {
        let (out, _) = run_with("");
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_unknown_choice_reprompts() {
        let (out, _) = run_with("7\n3\n");
        assert!(out.contains("Please choose 1, 2 or 3."));
    }

    #[test]
    fn test_empty_history() {
        let (out, _) = run_with("2\n3\n");
        assert!(out.contains("No game records yet."));
    }

    #[test]
    fn test_play_and_win_records_history() {
        let secret = &expected_secrets(1)[0];
        let input = format!("1\n12\n1a2\n{}\n{}\n2\n3\n", wrong_guess(secret), secret);
        let (out, history) = run_with(&input);

        assert_eq!(out.matches(INVALID_INPUT_HINT).count(), 2);
        assert!(out.contains("Correct! You won in 2 attempts."));
        assert_eq!(history.len(), 1);
        assert_eq!(history.records()[0].attempts, 2);
        assert_eq!(&history.records()[0].secret, secret);
        assert!(out.contains("Games played: 1"));
    }

    #[test]
    fn test_each_game_gets_a_fresh_secret() {
        let secrets = expected_secrets(2);
        let input = format!("1\n{}\n1\n{}\n3\n", secrets[0], secrets[1]);
        let (_, history) = run_with(&input);

        assert_eq!(history.len(), 2);
        assert_eq!(history.records()[1].secret, secrets[1]);
        assert_eq!(history.records()[1].attempts, 1);
    }

    #[test]
    fn test_input_ending_mid_game_abandons_it() {
        let (out, history) = run_with("1\n");
        assert!(history.is_empty());
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let secret = &expected_secrets(1)[0];
        let (_, history) = run_with(&format!("1\r\n{secret}\r\n3\r\n"));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_reveal_secret() {
        let secret = &expected_secrets(1)[0];
        let mut output = Vec::new();
        let mut controller = MenuController::new(
            Cursor::new(format!("1\n{secret}\n3\n")),
            &mut output,
            SecretGenerator::seeded(SEED),
        )
        .reveal_secret(true);
        controller.run().unwrap();
        drop(controller);

        let out = String::from_utf8(output).unwrap();
        assert!(out.contains(&format!("(secret: {secret})")));
    }
}
