// src/education/mod.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::crypto::ARGON2_AVAILABLE;

/// Reference card for one hashing algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AlgorithmInfo {
    pub name: String,
    pub status: String,
    pub speed: String,
    pub description: String,
    pub use_case: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// Sample password used in demos, with the score the analyzer is expected to give it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExamplePassword {
    pub password: String,
    pub description: String,
    pub expected_score: u8,
}

pub struct EducationManager {
    algorithms: Vec<AlgorithmInfo>,
    examples: Vec<ExamplePassword>,
}

fn algorithm(name: &str, status: &str, speed: &str, description: &str, use_case: &str, year: &str) -> AlgorithmInfo {
    AlgorithmInfo {
        name: name.to_string(),
        status: status.to_string(),
        speed: speed.to_string(),
        description: description.to_string(),
        use_case: use_case.to_string(),
        year: year.to_string(),
        available: None,
    }
}

fn example(password: &str, description: &str, expected_score: u8) -> ExamplePassword {
    ExamplePassword {
        password: password.to_string(),
        description: description.to_string(),
        expected_score,
    }
}

impl EducationManager {
    pub fn new() -> Self {
        let algorithms = vec![
            algorithm(
                "Plain Text",
                "insecure",
                "1000 trillion H/s",
                "No protection - passwords visible to anyone with database access",
                "NEVER use in production systems",
                "N/A",
            ),
            algorithm(
                "MD5",
                "deprecated",
                "180 billion H/s",
                "Fast hashing = fast cracking. Vulnerable to rainbow tables",
                "Do not use for passwords",
                "Deprecated since 2004",
            ),
            algorithm(
                "SHA256",
                "weak",
                "65 billion H/s",
                "Better than MD5 but still too fast. No built-in salting",
                "Use for checksums, NOT for passwords",
                "Not suitable for passwords",
            ),
            algorithm(
                "bcrypt",
                "secure",
                "85 thousand H/s",
                "Slow by design, includes salt, adjustable cost factor",
                "Recommended for password storage",
                "Since 1999",
            ),
            AlgorithmInfo {
                available: Some(ARGON2_AVAILABLE),
                ..algorithm(
                    "Argon2",
                    "most_secure",
                    "1 thousand H/s",
                    "Winner of Password Hashing Competition, memory-hard",
                    "Best choice for new systems",
                    "Since 2015",
                )
            },
        ];

        let examples = vec![
            example("password", "Very Weak - Common Password", 5),
            example("Pass123", "Weak - Short & Predictable", 22),
            example("MyP@ssw0rd", "Moderate - Better but Still Risky", 55),
            example("Tr0ub4dor&3", "Strong - Good Mix", 70),
            example("correct-horse-battery-staple-2024", "Very Strong - Long Passphrase", 100),
        ];

        Self { algorithms, examples }
    }

    pub fn get_algorithms(&self) -> &[AlgorithmInfo] {
        &self.algorithms
    }

    pub fn get_examples(&self) -> &[ExamplePassword] {
        &self.examples
    }

    pub fn get_algorithm(&self, name: &str) -> Option<&AlgorithmInfo> {
        self.algorithms
            .iter()
            .find(|info| info.name.eq_ignore_ascii_case(name))
    }
}

impl Default for EducationManager {
    fn default() -> Self {
        Self::new()
    }
}
