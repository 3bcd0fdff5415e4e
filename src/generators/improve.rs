// src/generators/improve.rs
//! Improvement strategies layered on top of the analyzer.
//!
//! Each strategy looks at the original password and may propose one
//! candidate. Candidates are scored by [`PasswordAnalyzer`] and ranked.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::analyzer::PasswordAnalyzer;
use crate::models::Improvement;

const LENGTH_SUFFIXES: [&str; 3] = ["2024", "2025", "@123"];
const SPECIAL_SUFFIXES: [char; 7] = ['!', '@', '#', '$', '%', '&', '*'];
const SPECIAL_PRESENT: &str = "!@#$%^&*()_+-";
const LEET_MAP: [(char, char); 6] = [('a', '@'), ('e', '3'), ('i', '!'), ('o', '0'), ('s', '$'), ('t', '7')];
const PASSPHRASE_WORDS: [&str; 4] = ["Secure", "Strong", "Private", "Safe"];

/// A proposed rewrite before scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub password: String,
    pub strategy: &'static str,
    pub description: String,
}

impl Candidate {
    fn new(password: String, strategy: &'static str, description: impl Into<String>) -> Self {
        Self {
            password,
            strategy,
            description: description.into(),
        }
    }
}

pub type Strategy = fn(&str, &mut dyn RngCore) -> Option<Candidate>;

fn add_length(original: &str, rng: &mut dyn RngCore) -> Option<Candidate> {
    if original.chars().count() >= 16 {
        return None;
    }
    let suffix = LENGTH_SUFFIXES.choose(rng)?;
    let improved = format!("{}{}", original, suffix);
    let description = format!("Extended to {} characters", improved.chars().count());
    Some(Candidate::new(improved, "Added characters", description))
}

fn add_special(original: &str, rng: &mut dyn RngCore) -> Option<Candidate> {
    if original.chars().any(|c| SPECIAL_PRESENT.contains(c)) {
        return None;
    }
    let symbol = SPECIAL_SUFFIXES.choose(rng)?;
    Some(Candidate::new(
        format!("{}{}", original, symbol),
        "Added special character",
        "Increased complexity with symbols",
    ))
}

fn add_uppercase(original: &str, _rng: &mut dyn RngCore) -> Option<Candidate> {
    if original.chars().any(|c| c.is_ascii_uppercase()) {
        return None;
    }
    let mut chars = original.chars();
    let improved = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    Some(Candidate::new(improved, "Added uppercase", "Capitalized first letter"))
}

fn substitute_characters(original: &str, _rng: &mut dyn RngCore) -> Option<Candidate> {
    let improved = LEET_MAP.iter().fold(original.to_string(), |acc, (from, to)| {
        acc.replacen(*from, &to.to_string(), 1)
    });
    (improved != original).then(|| {
        Candidate::new(improved, "Character substitution", "Replaced letters with numbers/symbols")
    })
}

fn add_numbers(original: &str, rng: &mut dyn RngCore) -> Option<Candidate> {
    if original.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let number: u32 = rng.gen_range(100..=999);
    Some(Candidate::new(
        format!("{}{}", original, number),
        "Added numbers",
        "Appended numeric sequence",
    ))
}

fn make_passphrase(original: &str, rng: &mut dyn RngCore) -> Option<Candidate> {
    if original.chars().count() <= 3 {
        return None;
    }
    let word = PASSPHRASE_WORDS.choose(rng)?;
    let number: u32 = rng.gen_range(100..=999);
    Some(Candidate::new(
        format!("{}-{}-{}!", word, original, number),
        "Passphrase creation",
        "Created memorable passphrase",
    ))
}

/// The catalog, in the order candidates are proposed.
pub const STRATEGIES: [Strategy; 6] = [
    add_length,
    add_special,
    add_uppercase,
    substitute_characters,
    add_numbers,
    make_passphrase,
];

pub fn candidates(original: &str, strategies: &[Strategy], rng: &mut dyn RngCore) -> Vec<Candidate> {
    strategies
        .iter()
        .filter_map(|strategy| strategy(original, rng))
        .collect()
}

/// Score every candidate, best first (ties keep catalog order), keep `top_n`.
pub fn rank(candidates: Vec<Candidate>, top_n: usize) -> Vec<Improvement> {
    let mut improvements: Vec<Improvement> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let analyzer = PasswordAnalyzer::new(&candidate.password).ok()?;
            Some(Improvement {
                score: analyzer.strength_score(),
                level: analyzer.strength_level(),
                length: analyzer.length(),
                password: candidate.password,
                strategy: candidate.strategy.to_string(),
                description: candidate.description,
            })
        })
        .collect();

    improvements.sort_by(|a, b| b.score.cmp(&a.score));
    improvements.truncate(top_n);
    improvements
}

pub fn suggest_improvements(original: &str, top_n: usize, rng: &mut dyn RngCore) -> Vec<Improvement> {
    rank(candidates(original, &STRATEGIES, rng), top_n)
}
