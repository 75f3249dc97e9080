// src/generators/charset.rs
use rand::Rng;

use super::GeneratorError;

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Candidate characters a password is drawn from.
///
/// Duplicates are kept as-is, so a character listed twice is twice as likely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<u8>,
}

impl Alphabet {
    /// Letters and digits, plus punctuation unless `simple` is set.
    pub fn for_mode(simple: bool) -> Self {
        let mut sets = vec![UPPERCASE, LOWERCASE, DIGITS];
        if !simple {
            sets.push(PUNCTUATION);
        }
        Self::from_sets(&sets)
    }

    pub fn from_sets(sets: &[&[u8]]) -> Self {
        let mut chars = Vec::with_capacity(sets.iter().map(|s| s.len()).sum());
        for set in sets {
            chars.extend_from_slice(set);
        }
        Alphabet { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.chars.contains(&(c as u8))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    /// Pick one character uniformly at random, with replacement.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<char, GeneratorError> {
        if self.chars.is_empty() {
            return Err(GeneratorError::InvalidConfiguration(
                "alphabet is empty".to_string(),
            ));
        }
        let idx = rng.gen_range(0..self.chars.len());
        Ok(self.chars[idx] as char)
    }
}
