// src/analyzer/mod.rs
//! Password strength scoring and brute-force crack-time estimation.
//!
//! Everything here is a pure function of the password plus the static
//! knowledge base in [`knowledge`]; nothing is cached between calls.

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

pub mod charset;
pub mod crack_time;
pub mod knowledge;
pub mod patterns;
pub mod score;
pub mod suggestions;

pub use charset::CharSets;
pub use crack_time::CrackTimeEstimate;
pub use knowledge::{is_common_password, Algorithm, COMMON_PASSWORDS};
pub use score::StrengthLevel;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Reject a missing or empty password before any analysis runs.
pub fn validate_password(password: Option<&str>) -> Result<&str> {
    match password {
        None => Err(AnalysisError::InvalidInput("Password is required".into())),
        Some("") => Err(AnalysisError::InvalidInput("Password cannot be empty".into())),
        Some(password) => Ok(password),
    }
}

/// Facts about a password that the scorer and suggestion rules consume.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordTraits {
    pub length: usize,
    pub char_sets: CharSets,
    pub entropy: f64,
    pub is_common: bool,
    pub has_simple_patterns: bool,
    pub has_repeated_chars: bool,
    pub is_alphabetic: bool,
}

// Letters only: excludes letter-like numerals such as Roman numeral signs
fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

impl PasswordTraits {
    pub fn of(password: &str) -> Self {
        let length = password.chars().count();
        let char_sets = CharSets::identify(password);
        Self {
            length,
            char_sets,
            entropy: char_sets.entropy(length),
            is_common: is_common_password(password),
            has_simple_patterns: patterns::has_simple_patterns(password),
            has_repeated_chars: patterns::has_repeated_chars(password),
            is_alphabetic: !password.is_empty() && password.chars().all(is_letter),
        }
    }
}

/// Summary of one analysis, immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AnalysisResult {
    pub length: usize,
    pub char_sets: CharSets,
    pub entropy: f64,
    pub strength_score: u8,
    pub strength_level: StrengthLevel,
    pub suggestions: Vec<String>,
    pub is_common: bool,
}

#[derive(Debug, Clone)]
pub struct PasswordAnalyzer {
    traits: PasswordTraits,
    strength_score: u8,
    strength_level: StrengthLevel,
}

impl PasswordAnalyzer {
    pub fn new(password: &str) -> Result<Self> {
        let password = validate_password(Some(password))?;
        let traits = PasswordTraits::of(password);
        let strength_score = score::strength_score(&traits);

        Ok(Self {
            strength_level: StrengthLevel::from_score(strength_score),
            strength_score,
            traits,
        })
    }

    pub fn length(&self) -> usize {
        self.traits.length
    }

    pub fn char_sets(&self) -> CharSets {
        self.traits.char_sets
    }

    pub fn entropy(&self) -> f64 {
        self.traits.entropy
    }

    pub fn strength_score(&self) -> u8 {
        self.strength_score
    }

    pub fn strength_level(&self) -> StrengthLevel {
        self.strength_level
    }

    pub fn is_common(&self) -> bool {
        self.traits.is_common
    }

    pub fn traits(&self) -> &PasswordTraits {
        &self.traits
    }

    /// Estimate for an algorithm given by name; names outside the five known
    /// strategies are rejected rather than defaulted.
    pub fn estimate_crack_time(&self, algorithm: &str) -> Result<CrackTimeEstimate> {
        let algorithm: Algorithm = algorithm.parse()?;
        Ok(self.crack_time(algorithm))
    }

    pub fn crack_time(&self, algorithm: Algorithm) -> CrackTimeEstimate {
        crack_time::estimate(
            &self.traits.char_sets,
            self.traits.length,
            self.traits.is_common,
            algorithm,
        )
    }

    /// One estimate per algorithm, insecure to secure.
    pub fn all_crack_times(&self) -> Vec<CrackTimeEstimate> {
        Algorithm::ALL
            .into_iter()
            .map(|algorithm| self.crack_time(algorithm))
            .collect()
    }

    pub fn suggestions(&self) -> Vec<String> {
        suggestions::enhancement_suggestions(&self.traits)
    }

    pub fn summary(&self) -> AnalysisResult {
        AnalysisResult {
            length: self.traits.length,
            char_sets: self.traits.char_sets,
            entropy: self.traits.entropy,
            strength_score: self.strength_score,
            strength_level: self.strength_level,
            suggestions: self.suggestions(),
            is_common: self.traits.is_common,
        }
    }
}

/// Convenience wrapper for a one-shot summary.
pub fn analyze(password: &str) -> Result<AnalysisResult> {
    PasswordAnalyzer::new(password).map(|analyzer| analyzer.summary())
}
