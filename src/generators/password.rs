// src/generators/password.rs
use rand::Rng;
use thiserror::Error;

use crate::models::{PasswordGenerationOptions, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

pub const NUMBERS: &[u8] = b"0123456789";
pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SPECIAL: &[u8] = b"!@#$%&*";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Length should be at least {minimum} (got {length})")]
    LengthTooShort { length: usize, minimum: usize },

    #[error("Length should be at most {maximum} (got {length})")]
    LengthTooLong { length: usize, maximum: usize },

    #[error("No character types selected")]
    EmptyAlphabet,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Characters eligible for selection, in a fixed order: digits, letters, specials.
pub fn build_alphabet(options: &PasswordGenerationOptions) -> Vec<u8> {
    let mut chars = Vec::with_capacity(NUMBERS.len() + LETTERS.len() + SPECIAL.len());

    if options.include_numbers {
        chars.extend_from_slice(NUMBERS);
    }
    if options.include_letters {
        chars.extend_from_slice(LETTERS);
    }
    if options.include_special {
        chars.extend_from_slice(SPECIAL);
    }

    chars
}

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate a password with the thread-local PRNG. Not suitable for secrets
    /// that need cryptographic guarantees.
    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String> {
        self.generate_with_rng(options, &mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng>(
        &self,
        options: &PasswordGenerationOptions,
        rng: &mut R,
    ) -> Result<String> {
        if options.length < MIN_PASSWORD_LENGTH {
            return Err(GeneratorError::LengthTooShort {
                length: options.length,
                minimum: MIN_PASSWORD_LENGTH,
            });
        }

        if options.length > MAX_PASSWORD_LENGTH {
            return Err(GeneratorError::LengthTooLong {
                length: options.length,
                maximum: MAX_PASSWORD_LENGTH,
            });
        }

        let chars = build_alphabet(options);
        if chars.is_empty() {
            return Err(GeneratorError::EmptyAlphabet);
        }

        let password = (0..options.length)
            .map(|_| chars[rng.gen_range(0..chars.len())] as char)
            .collect();

        log::debug!(
            "Generated password of length {} from a {}-character alphabet",
            options.length,
            chars.len()
        );

        Ok(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
