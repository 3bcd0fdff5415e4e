// src/analyzer/score.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PasswordTraits;

const DIVERSITY_POINTS_PER_CLASS: f64 = 7.5;
const COMMON_PASSWORD_PENALTY: f64 = 50.0;
const SIMPLE_PATTERN_PENALTY: f64 = 20.0;

/// Five ordinal strength bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum StrengthLevel {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    #[serde(rename = "Weak")]
    Weak,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Strong")]
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => StrengthLevel::VeryStrong,
            60..=79 => StrengthLevel::Strong,
            40..=59 => StrengthLevel::Moderate,
            20..=39 => StrengthLevel::Weak,
            _ => StrengthLevel::VeryWeak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Moderate => "Moderate",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn length_points(length: usize) -> f64 {
    match length {
        16.. => 35.0,
        12..=15 => 25.0,
        8..=11 => 15.0,
        6..=7 => 5.0,
        _ => 0.0,
    }
}

fn entropy_points(entropy: f64) -> f64 {
    if entropy >= 80.0 {
        20.0
    } else if entropy >= 60.0 {
        15.0
    } else if entropy >= 40.0 {
        10.0
    } else if entropy >= 28.0 {
        5.0
    } else {
        0.0
    }
}

/// Additive 0-100 score. Penalties floor at zero where they apply, before the
/// good-practice bonuses; the fractional total is floored once at the end.
pub fn strength_score(traits: &PasswordTraits) -> u8 {
    let class_count = traits.char_sets.class_count();

    let mut score = length_points(traits.length);
    score += class_count as f64 * DIVERSITY_POINTS_PER_CLASS;
    score += entropy_points(traits.entropy);

    if traits.is_common {
        score = (score - COMMON_PASSWORD_PENALTY).max(0.0);
    }
    if traits.has_simple_patterns {
        score = (score - SIMPLE_PATTERN_PENALTY).max(0.0);
    }

    if traits.length >= 12 && class_count >= 3 {
        score += 10.0;
    }
    if !traits.has_repeated_chars {
        score += 5.0;
    }

    score.clamp(0.0, 100.0).floor() as u8
}
