// src/generators/password.rs
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::analyzer::{PasswordAnalyzer, StrengthLevel};
use crate::models::PasswordGenerationOptions;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Longest password the generator will produce.
pub const MAX_GENERATED_LENGTH: usize = 128;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("At least one character type must be selected")]
    NoCharacterClasses,

    #[error("Password length must be at most {0} characters")]
    TooLong(usize),
}

/// A generated password with its own analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPassword {
    pub password: String,
    pub score: u8,
    pub level: StrengthLevel,
    pub length: usize,
    pub entropy: f64,
}

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String, GeneratorError> {
        self.generate_with_rng(options, &mut rand::thread_rng())
    }

    /// One character from every selected class, the rest drawn from their
    /// union, then shuffled so the guaranteed characters sit anywhere.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        options: &PasswordGenerationOptions,
        rng: &mut R,
    ) -> Result<String, GeneratorError> {
        let classes: Vec<&[u8]> = [
            (options.include_lowercase, LOWERCASE),
            (options.include_uppercase, UPPERCASE),
            (options.include_digits, DIGITS),
            (options.include_special, SYMBOLS),
        ]
        .into_iter()
        .filter_map(|(selected, class)| selected.then_some(class))
        .collect();

        if classes.is_empty() {
            return Err(GeneratorError::NoCharacterClasses);
        }
        if options.length > MAX_GENERATED_LENGTH {
            return Err(GeneratorError::TooLong(MAX_GENERATED_LENGTH));
        }

        let pool: Vec<u8> = classes.concat();
        let mut password: Vec<u8> = classes
            .iter()
            .filter_map(|class| class.choose(rng).copied())
            .collect();

        let remaining = options.length.saturating_sub(password.len());
        password.extend((0..remaining).filter_map(|_| pool.choose(rng).copied()));
        password.shuffle(rng);

        Ok(password.into_iter().map(char::from).collect())
    }

    /// Generate and score the result with the same analyzer used everywhere else.
    pub fn generate_analyzed<R: Rng + ?Sized>(
        &self,
        options: &PasswordGenerationOptions,
        rng: &mut R,
    ) -> Result<GeneratedPassword, GeneratorError> {
        let password = self.generate_with_rng(options, rng)?;
        // Never empty: at least one class is selected
        let analyzer = PasswordAnalyzer::new(&password)
            .map_err(|_| GeneratorError::NoCharacterClasses)?;

        Ok(GeneratedPassword {
            score: analyzer.strength_score(),
            level: analyzer.strength_level(),
            length: analyzer.length(),
            entropy: analyzer.entropy(),
            password,
        })
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
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn every_selected_class_is_present() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let generator = PasswordGenerator::new();
        for _ in 0..50 {
            let password = generator
                .generate_with_rng(&PasswordGenerationOptions::default(), &mut rng)
                .unwrap();
            assert_eq!(password.len(), 16);
            assert!(password.bytes().any(|b| LOWERCASE.contains(&b)));
            assert!(password.bytes().any(|b| UPPERCASE.contains(&b)));
            assert!(password.bytes().any(|b| DIGITS.contains(&b)));
            assert!(password.bytes().any(|b| SYMBOLS.contains(&b)));
        }
    }

    #[test]
    fn unselected_classes_are_absent() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let options = PasswordGenerationOptions {
            length: 24,
            include_uppercase: false,
            include_special: false,
            ..Default::default()
        };
        let password = PasswordGenerator::new().generate_with_rng(&options, &mut rng).unwrap();
        assert!(password.bytes().all(|b| LOWERCASE.contains(&b) || DIGITS.contains(&b)));
    }

    #[test]
    fn short_length_still_covers_each_class() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let options = PasswordGenerationOptions { length: 2, ..Default::default() };
        let password = PasswordGenerator::new().generate_with_rng(&options, &mut rng).unwrap();
        assert_eq!(password.len(), 4);
    }

    #[test]
    fn no_classes_is_an_error() {
        let options = PasswordGenerationOptions {
            include_lowercase: false,
            include_uppercase: false,
            include_digits: false,
            include_special: false,
            ..Default::default()
        };
        assert_eq!(
            PasswordGenerator::new().generate_password(&options),
            Err(GeneratorError::NoCharacterClasses)
        );
    }

    #[test]
    fn overlong_requests_are_rejected() {
        let generator = PasswordGenerator::new();
        let at_cap = PasswordGenerationOptions { length: MAX_GENERATED_LENGTH, ..Default::default() };
        assert_eq!(generator.generate_password(&at_cap).unwrap().len(), MAX_GENERATED_LENGTH);

        let over = PasswordGenerationOptions { length: 4_000_000_000, ..Default::default() };
        assert_eq!(
            generator.generate_password(&over),
            Err(GeneratorError::TooLong(MAX_GENERATED_LENGTH))
        );
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let generator = PasswordGenerator::new();
        let options = PasswordGenerationOptions::default();
        let a = generator.generate_with_rng(&options, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let b = generator.generate_with_rng(&options, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn analyzed_output_matches_analyzer() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let generated = PasswordGenerator::new()
            .generate_analyzed(&PasswordGenerationOptions::default(), &mut rng)
            .unwrap();
        let analyzer = PasswordAnalyzer::new(&generated.password).unwrap();
        assert_eq!(generated.score, analyzer.strength_score());
        assert_eq!(generated.length, 16);
    }
}
