//! Game mode state management.

use std::mem;

use crate::{
    scoring::ScoreResult,
    secret::DIGIT_COUNT,
    session::{GameOutcome, GameSession},
};

use super::super::{
    app::App,
    types::{AppMode, Turn},
};

/// Helper struct for managing game-specific state transitions.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn start_new_game(&mut self) {
        let session = GameSession::new(self.app.generator.generate());
        tracing::debug!("New game secret: {}", session.secret_as_text());

        self.app.session = Some(session);
        self.app.turns.clear();
        self.app.input.clear();
        self.app.mode = AppMode::Game;
        self.app.log("Starting new game");
    }

    /// Leaves the game screen. An unfinished game is dropped unrecorded.
    pub fn return_to_menu(&mut self) {
        if let Some(session) = self.app.session.take()
            && !session.is_won()
        {
            self.app.log(format!(
                "Game abandoned after {} attempt(s)",
                session.attempts()
            ));
        }
        self.app.turns.clear();
        self.app.input.clear();
        self.app.mode = AppMode::Menu;
    }

    pub fn push_char(&mut self, c: char) {
        if self.app.input.chars().count() < DIGIT_COUNT {
            self.app.input.push(c);
        }
    }

    pub fn submit_guess(&mut self) {
        let Some(session) = self.app.session.as_mut() else {
            return;
        };

        let raw = mem::take(&mut self.app.input);
        let outcome = session.guess(&raw);
        let secret = session.secret_as_text();

        match outcome {
            GameOutcome::InvalidInput(err) => {
                self.app.log(format!("Invalid guess {raw:?}: {err}"));
            }
            GameOutcome::Ongoing { strikes, balls } => {
                let score = ScoreResult { strikes, balls };
                self.app.log(format!("{raw}: {score}"));
                self.app.turns.push(Turn { guess: raw, score });
            }
            GameOutcome::Won { attempts } => {
                self.app.turns.push(Turn {
                    guess: raw,
                    score: ScoreResult {
                        strikes: DIGIT_COUNT as u8,
                        balls: 0,
                    },
                });
                self.app.history.add_record(attempts, secret.as_str());
                self.app.log(format!(
                    "Game won in {attempts} attempt(s); the number was {secret}"
                ));
            }
        }
    }
}
