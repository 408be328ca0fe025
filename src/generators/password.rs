// src/generators/password.rs
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::models::PasswordGenerationOptions;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 100;
pub const SYMBOLS: &str = "!@#$%^&*()_+";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be at least {} characters", MIN_LENGTH)]
    TooShort,

    #[error("Password length must be at most {} characters", MAX_LENGTH)]
    TooLong,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

pub struct PasswordGenerator {
    alphabet: Vec<char>,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        let alphabet = ('a'..='z')
            .chain('A'..='Z')
            .chain('0'..='9')
            .chain(SYMBOLS.chars())
            .collect();
        PasswordGenerator { alphabet }
    }

    #[cfg(test)]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Draws every character independently from the thread-local CSPRNG.
    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String> {
        if options.length < MIN_LENGTH {
            return Err(GeneratorError::TooShort);
        }
        if options.length > MAX_LENGTH {
            return Err(GeneratorError::TooLong);
        }

        let mut rng = rand::thread_rng();
        let password = (0..options.length)
            .filter_map(|_| self.alphabet.choose(&mut rng))
            .collect();
        Ok(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_length() {
        let generator = PasswordGenerator::new();
        let password = generator
            .generate_password(&PasswordGenerationOptions::default())
            .unwrap();
        assert_eq!(password.chars().count(), 16);
    }

    #[test]
    fn test_only_alphabet_characters() {
        let generator = PasswordGenerator::new();
        let password = generator
            .generate_password(&PasswordGenerationOptions { length: MAX_LENGTH })
            .unwrap();
        assert!(password.chars().all(|c| generator.alphabet().contains(&c)));
    }

    #[test]
    fn test_alphabet_size() {
        assert_eq!(PasswordGenerator::new().alphabet().len(), 26 + 26 + 10 + 12);
    }

    #[test]
    fn test_length_bounds() {
        let generator = PasswordGenerator::new();
        assert_eq!(
            generator.generate_password(&PasswordGenerationOptions { length: 3 }),
            Err(GeneratorError::TooShort)
        );
        assert_eq!(
            generator.generate_password(&PasswordGenerationOptions { length: 101 }),
            Err(GeneratorError::TooLong)
        );
        assert!(generator
            .generate_password(&PasswordGenerationOptions { length: MIN_LENGTH })
            .is_ok());
    }

    #[test]
    fn test_successive_passwords_differ() {
        let generator = PasswordGenerator::new();
        let options = PasswordGenerationOptions::default();
        let first = generator.generate_password(&options).unwrap();
        let second = generator.generate_password(&options).unwrap();
        assert_ne!(first, second);
    }
}
