//! A single game: one secret, counted attempts, win detection.

use tracing::{debug, info, warn};

use crate::{
    scoring::{ScoreResult, evaluate},
    secret::{DIGIT_COUNT, Secret, SecretGenerator},
    validator::{InputError, validate},
};

/// Result of submitting one raw guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Rejected input; attempts are unchanged.
    InvalidInput(InputError),
    Ongoing { strikes: u8, balls: u8 },
    Won { attempts: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Won,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Secret,
    attempts: u32,
    state: SessionState,
}

impl GameSession {
    pub fn new(secret: Secret) -> Self {
        info!("New game started");
        Self {
            secret,
            attempts: 0,
            state: SessionState::Active,
        }
    }

    pub fn random() -> Self {
        Self::new(SecretGenerator::from_entropy().generate())
    }

    /// Validates and scores one guess. Invalid input is free; every valid
    /// guess counts as exactly one attempt.
    pub fn guess(&mut self, raw: &str) -> GameOutcome {
        if self.state == SessionState::Won {
            warn!("Guess submitted to a finished game; ignoring");
            return GameOutcome::Won {
                attempts: self.attempts,
            };
        }

        let guess = match validate(raw) {
            Ok(guess) => guess,
            Err(err) => {
                debug!("Rejected guess {:?}: {}", raw, err);
                return GameOutcome::InvalidInput(err);
            }
        };

        self.attempts += 1;
        let ScoreResult { strikes, balls } = evaluate(&self.secret, &guess);
        debug!(
            "Attempt {}: {} -> {} strike(s), {} ball(s)",
            self.attempts, raw, strikes, balls
        );

        if strikes as usize == DIGIT_COUNT {
            self.state = SessionState::Won;
            info!("Game won in {} attempt(s)", self.attempts);
            return GameOutcome::Won {
                attempts: self.attempts,
            };
        }

        GameOutcome::Ongoing { strikes, balls }
    }

    pub fn secret_as_text(&self) -> String {
        self.secret.to_string()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state == SessionState::Won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(secret: &str) -> GameSession {
        GameSession::new(secret.parse().unwrap())
    }

    #[test]
    fn test_new_session_is_active() {
        let s = session("123");
        assert_eq!(s.attempts(), 0);
        assert_eq!(s.state(), SessionState::Active);
        assert_eq!(s.secret_as_text(), "123");
    }

    #[test]
    fn test_invalid_guess_is_free() {
        let mut s = session("123");
        assert_eq!(
            s.guess("12"),
            GameOutcome::InvalidInput(InputError::WrongLength)
        );
        assert_eq!(
            s.guess("112"),
            GameOutcome::InvalidInput(InputError::DuplicateDigit)
        );
        assert_eq!(s.attempts(), 0);
        assert!(!s.is_won());
    }

    #[test]
    fn test_valid_guess_counts_once() {
        let mut s = session("123");
        assert_eq!(
            s.guess("321"),
            GameOutcome::Ongoing {
                strikes: 1,
                balls: 2
            }
        );
        assert_eq!(s.attempts(), 1);
        assert_eq!(
            s.guess("456"),
            GameOutcome::Ongoing {
                strikes: 0,
                balls: 0
            }
        );
        assert_eq!(s.attempts(), 2);
    }

    #[test]
    fn test_win_reports_counted_attempts() {
        let mut s = session("123");
        assert!(matches!(s.guess("abc"), GameOutcome::InvalidInput(_)));
        assert!(matches!(s.guess("012"), GameOutcome::InvalidInput(_)));
        assert!(matches!(s.guess("321"), GameOutcome::Ongoing { .. }));
        assert_eq!(s.guess("123"), GameOutcome::Won { attempts: 2 });
        assert_eq!(s.state(), SessionState::Won);
    }

    #[test]
    fn test_first_guess_win() {
        let mut s = session("908");
        assert_eq!(s.guess("908"), GameOutcome::Won { attempts: 1 });
    }

    #[test]
    fn test_guess_after_win_is_ignored() {
        let mut s = session("123");
        assert_eq!(s.guess("123"), GameOutcome::Won { attempts: 1 });
        assert_eq!(s.guess("456"), GameOutcome::Won { attempts: 1 });
        assert_eq!(s.guess("xx"), GameOutcome::Won { attempts: 1 });
        assert_eq!(s.attempts(), 1);
    }

    #[test]
    fn test_secret_accessor_does_not_change_state() {
        let mut s = session("567");
        let _ = s.guess("576");
        assert_eq!(s.secret_as_text(), "567");
        assert_eq!(s.attempts(), 1);
    }

    #[test]
    fn test_random_session_has_valid_secret() {
        let s = GameSession::random();
        assert!(s.secret_as_text().parse::<Secret>().is_ok());
    }
}
