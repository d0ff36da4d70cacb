//! Secret number generation.

use std::{fmt, str::FromStr};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::validator::{InputError, validate};

/// Number of digits in a secret or a guess.
pub const DIGIT_COUNT: usize = 3;

/// Three distinct digits, the first one non-zero.
pub type Digits = [u8; DIGIT_COUNT];

/// The number the player is trying to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secret(Digits);

impl Secret {
    pub fn digits(&self) -> &Digits {
        &self.0
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

/// Parses a secret with the same rules a guess is held to.
impl FromStr for Secret {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s).map(|guess| Secret(*guess.digits()))
    }
}

/// Draws secrets from an injected random source.
#[derive(Debug, Clone)]
pub struct SecretGenerator<R = StdRng> {
    rng: R,
}

impl SecretGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic generator; equal seeds give equal secret sequences.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SecretGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Picks the first digit from 1-9, then the second and third from
    /// whatever is left once 0 joins the pool.
    pub fn generate(&mut self) -> Secret {
        let mut pool: Vec<u8> = (1..=9).collect();

        let first = pool.remove(self.rng.gen_range(0..pool.len()));
        pool.push(0);
        let second = pool.remove(self.rng.gen_range(0..pool.len()));
        let third = pool[self.rng.gen_range(0..pool.len())];

        Secret([first, second, third])
    }
}
