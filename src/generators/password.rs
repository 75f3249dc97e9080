// src/generators/password.rs
use rand::rngs::ThreadRng;
use rand::Rng;

use super::{Alphabet, Result};

/// Requested lengths below this are silently raised to it.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Draws passwords one character at a time from an [`Alphabet`].
///
/// The random source is owned by the generator so tests can swap in a
/// seeded one through [`PasswordGenerator::with_rng`].
pub struct PasswordGenerator<R = ThreadRng> {
    length: usize,
    rng: R,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new(length: usize) -> Self {
        Self::with_rng(length, rand::thread_rng())
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(length: usize, rng: R) -> Self {
        let effective = length.max(MIN_PASSWORD_LENGTH);
        if effective != length {
            log::debug!(
                "Requested length {} is below the minimum, using {}",
                length,
                effective
            );
        }
        PasswordGenerator {
            length: effective,
            rng,
        }
    }

    /// Effective length of every generated password.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Generate one password. `simple` restricts it to letters and digits.
    pub fn generate(&mut self, simple: bool) -> Result<String> {
        let alphabet = Alphabet::for_mode(simple);
        self.generate_from(&alphabet)
    }

    pub fn generate_from(&mut self, alphabet: &Alphabet) -> Result<String> {
        log::trace!(
            "Generating {} characters from an alphabet of {}",
            self.length,
            alphabet.len()
        );

        let mut password = String::with_capacity(self.length);
        for _ in 0..self.length {
            password.push(alphabet.choose(&mut self.rng)?);
        }
        Ok(password)
    }

    pub fn generate_many(&mut self, count: usize, simple: bool) -> Result<Vec<String>> {
        let alphabet = Alphabet::for_mode(simple);
        (0..count).map(|_| self.generate_from(&alphabet)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::charset::{DIGITS, LOWERCASE, PUNCTUATION, UPPERCASE};
    use crate::generators::GeneratorError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded(length: usize, seed: u64) -> PasswordGenerator<ChaCha8Rng> {
        PasswordGenerator::with_rng(length, ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn short_length_is_clamped() {
        let mut generator = PasswordGenerator::new(4);
        assert_eq!(generator.length(), 8);

        let password = generator.generate(true).unwrap();
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn effective_length_is_max_of_requested_and_minimum() {
        for n in [0, 1, 7, 8, 9, 12, 32, 100, 1000] {
            let mut generator = seeded(n, n as u64);
            let expected = n.max(MIN_PASSWORD_LENGTH);
            assert_eq!(generator.length(), expected);
            assert_eq!(generator.generate(false).unwrap().len(), expected);
        }
    }

    #[test]
    fn simple_mode_is_alphanumeric() {
        let mut generator = PasswordGenerator::new(12);
        for _ in 0..200 {
            let password = generator.generate(true).unwrap();
            assert_eq!(password.len(), 12);
            assert!(
                password.chars().all(|c| c.is_ascii_alphanumeric()),
                "unexpected character in {:?}",
                password
            );
        }
    }

    #[test]
    fn full_mode_stays_within_alphabet() {
        let mut generator = PasswordGenerator::new(12);
        for _ in 0..200 {
            let password = generator.generate(false).unwrap();
            assert_eq!(password.len(), 12);
            assert!(password
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c.is_ascii_punctuation()));
        }
    }

    #[test]
    fn full_mode_eventually_uses_punctuation() {
        let mut generator = seeded(64, 3);
        let passwords = generator.generate_many(50, false).unwrap();
        assert!(passwords
            .iter()
            .any(|p| p.bytes().any(|b| PUNCTUATION.contains(&b))));
    }

    #[test]
    fn default_entry_point_output() {
        let mut generator = PasswordGenerator::new(32);
        let password = generator.generate(true).unwrap();
        assert_eq!(password.len(), 32);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn same_seed_same_password() {
        let a = seeded(20, 42).generate(false).unwrap();
        let b = seeded(20, 42).generate(false).unwrap();
        let c = seeded(20, 43).generate(false).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn draws_follow_rng_sequence() {
        let alphabet = Alphabet::for_mode(true);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let expected: String = (0..16)
            .map(|_| alphabet.as_bytes()[rng.gen_range(0..alphabet.len())] as char)
            .collect();

        let password = seeded(16, 9).generate(true).unwrap();
        assert_eq!(password, expected);
    }

    #[test]
    fn empty_alphabet_is_invalid_configuration() {
        let mut generator = seeded(10, 1);
        let err = generator.generate_from(&Alphabet::from_sets(&[])).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfiguration(_)));
    }

    #[test]
    fn generate_many_returns_requested_count() {
        let mut generator = seeded(10, 5);
        let passwords = generator.generate_many(7, true).unwrap();
        assert_eq!(passwords.len(), 7);
        assert!(passwords.iter().all(|p| p.len() == 10));
        assert!(generator.generate_many(0, true).unwrap().is_empty());
    }

    #[test]
    fn character_frequencies_are_roughly_uniform() {
        let alphabet = Alphabet::from_sets(&[UPPERCASE, LOWERCASE, DIGITS]);
        let mut generator = seeded(100, 2024);
        let mut counts = [0usize; 128];

        for _ in 0..1000 {
            for b in generator.generate(true).unwrap().bytes() {
                counts[b as usize] += 1;
            }
        }

        let total = 100_000.0;
        let expected = total / alphabet.len() as f64;
        let chi_square: f64 = alphabet
            .as_bytes()
            .iter()
            .map(|&b| {
                let diff = counts[b as usize] as f64 - expected;
                diff * diff / expected
            })
            .sum();

        // 61 degrees of freedom; p is below 1e-5 past 120
        assert!(chi_square < 120.0, "chi-square {} too high", chi_square);
    }
}
