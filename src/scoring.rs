use std::fmt;

use crate::{
    secret::{DIGIT_COUNT, Secret},
    validator::Guess,
};

/// Strikes and balls for a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub strikes: u8,
    pub balls: u8,
}

impl ScoreResult {
    pub fn is_win(&self) -> bool {
        self.strikes as usize == DIGIT_COUNT
    }

    pub fn is_nothing(&self) -> bool {
        self.strikes == 0 && self.balls == 0
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nothing() {
            return write!(f, "Nothing");
        }

        let plural = |n: u8, word: &str| {
            if n == 1 {
                format!("{n} {word}")
            } else {
                format!("{n} {word}s")
            }
        };

        match (self.strikes, self.balls) {
            (s, 0) => write!(f, "{}", plural(s, "strike")),
            (0, b) => write!(f, "{}", plural(b, "ball")),
            (s, b) => write!(f, "{} {}", plural(s, "strike"), plural(b, "ball")),
        }
    }
}

/// Scores a guess against the secret. Each guess digit counts at most once:
/// as a strike when it sits in the same position, otherwise as a ball when
/// the secret holds it elsewhere.
pub fn evaluate(secret: &Secret, guess: &Guess) -> ScoreResult {
    let mut score = ScoreResult::default();

    for (i, &digit) in guess.digits().iter().enumerate() {
        if secret.digits()[i] == digit {
            score.strikes += 1;
        } else if secret.contains(digit) {
            score.balls += 1;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::validate;

    fn score(secret: &str, guess: &str) -> (u8, u8) {
        let secret: Secret = secret.parse().unwrap();
        let guess = validate(guess).unwrap();
        let result = evaluate(&secret, &guess);
        (result.strikes, result.balls)
    }

    #[test]
    fn test_evaluate_reference_cases() {
        assert_eq!(score("123", "123"), (3, 0));
        assert_eq!(score("123", "321"), (1, 2));
        assert_eq!(score("123", "456"), (0, 0));
        assert_eq!(score("123", "213"), (1, 2));
    }

    #[test]
    fn test_evaluate_all_balls() {
        assert_eq!(score("123", "312"), (0, 3));
    }

    #[test]
    fn test_evaluate_with_zero() {
        assert_eq!(score("905", "950"), (1, 2));
        assert_eq!(score("905", "106"), (1, 0));
    }

    #[test]
    fn test_no_digit_counted_twice() {
        // The 2 in position 1 is a strike and must not also count as a ball.
        let secret: Secret = "123".parse().unwrap();
        let guess = validate("524").unwrap();
        let result = evaluate(&secret, &guess);
        assert_eq!(result, ScoreResult { strikes: 1, balls: 0 });

        for a in 1..=9u8 {
            for b in 0..=9u8 {
                for c in 0..=9u8 {
                    let raw = format!("{a}{b}{c}");
                    if let Ok(guess) = validate(&raw) {
                        let r = evaluate(&secret, &guess);
                        assert!(r.strikes + r.balls <= 3, "{raw} scored {r:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_evaluate_does_not_mutate_inputs() {
        let secret: Secret = "481".parse().unwrap();
        let guess = validate("148").unwrap();
        let _ = evaluate(&secret, &guess);
        assert_eq!(secret.to_string(), "481");
        assert_eq!(guess.digits(), &[1, 4, 8]);
    }

    #[test]
    fn test_score_display() {
        assert_eq!(ScoreResult { strikes: 0, balls: 0 }.to_string(), "Nothing");
        assert_eq!(ScoreResult { strikes: 1, balls: 0 }.to_string(), "1 strike");
        assert_eq!(ScoreResult { strikes: 0, balls: 2 }.to_string(), "2 balls");
        assert_eq!(
            ScoreResult { strikes: 1, balls: 2 }.to_string(),
            "1 strike 2 balls"
        );
        assert_eq!(ScoreResult { strikes: 3, balls: 0 }.to_string(), "3 strikes");
    }

    #[test]
    fn test_is_win() {
        assert!(ScoreResult { strikes: 3, balls: 0 }.is_win());
        assert!(!ScoreResult { strikes: 1, balls: 2 }.is_win());
    }
}
