use thiserror::Error;

use crate::secret::{DIGIT_COUNT, Digits};

/// Why a raw guess was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("guess must be exactly 3 characters")]
    WrongLength,
    #[error("guess must be a number")]
    NotNumeric,
    #[error("guess must be between 100 and 999")]
    OutOfRange,
    #[error("digits must not repeat")]
    DuplicateDigit,
}

/// A validated guess: three distinct digits, the first one non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess(Digits);

impl Guess {
    pub fn digits(&self) -> &Digits {
        &self.0
    }
}

/// Turns raw player input into a guess. Rules are checked in order and the
/// first failure is returned.
pub fn validate(raw: &str) -> Result<Guess, InputError> {
    if raw.chars().count() != DIGIT_COUNT {
        return Err(InputError::WrongLength);
    }

    let value: i32 = raw.parse().map_err(|_| InputError::NotNumeric)?;

    if !(100..=999).contains(&value) {
        return Err(InputError::OutOfRange);
    }

    let digits = [
        (value / 100) as u8,
        (value / 10 % 10) as u8,
        (value % 10) as u8,
    ];

    let [a, b, c] = digits;
    if a == b || b == c || a == c {
        return Err(InputError::DuplicateDigit);
    }

    Ok(Guess(digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_guess() {
        let guess = validate("102").unwrap();
        assert_eq!(guess.digits(), &[1, 0, 2]);
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(validate("12"), Err(InputError::WrongLength));
        assert_eq!(validate("1234"), Err(InputError::WrongLength));
        assert_eq!(validate(""), Err(InputError::WrongLength));
    }

    #[test]
    fn test_not_numeric() {
        assert_eq!(validate("1a2"), Err(InputError::NotNumeric));
        assert_eq!(validate("1 2"), Err(InputError::NotNumeric));
    }

    #[test]
    fn test_leading_zero_or_sign_is_out_of_range() {
        assert_eq!(validate("012"), Err(InputError::OutOfRange));
        assert_eq!(validate("+12"), Err(InputError::OutOfRange));
        assert_eq!(validate("-12"), Err(InputError::OutOfRange));
    }

    #[test]
    fn test_duplicate_digit() {
        assert_eq!(validate("112"), Err(InputError::DuplicateDigit));
        assert_eq!(validate("121"), Err(InputError::DuplicateDigit));
        assert_eq!(validate("900"), Err(InputError::DuplicateDigit));
    }

    #[test]
    fn test_length_checked_before_parse() {
        // Four characters, non-numeric: length wins.
        assert_eq!(validate("abcd"), Err(InputError::WrongLength));
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        assert_eq!(validate("1é2"), Err(InputError::NotNumeric));
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert_eq!(validate(" 123"), Err(InputError::WrongLength));
        assert_eq!(validate("12 "), Err(InputError::NotNumeric));
    }
}
