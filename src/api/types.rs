// src/api/types.rs
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::analyzer::{Algorithm, CharSets, CrackTimeEstimate, PasswordAnalyzer, StrengthLevel};
use crate::crypto::{HashComparison, DISPLAY_DIGEST_CHARS};
use crate::education::{AlgorithmInfo, ExamplePassword};
use crate::generators::GeneratedPassword;
use crate::models::Improvement;
use crate::utils::round_to;

// A key that is present counts as supplied, even when it is null
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Option<String>>, D::Error> {
    Option::<String>::deserialize(deserializer).map(Some)
}

// Absent key -> None, null -> "", otherwise the value itself
fn supplied(password: &Option<Option<String>>) -> Option<&str> {
    password.as_ref().map(|value| value.as_deref().unwrap_or(""))
}

// Analysis requests and responses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Password to analyze
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub password: Option<Option<String>>,
}

impl AnalyzeRequest {
    pub fn password(&self) -> Option<&str> {
        supplied(&self.password)
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CrackTimeRequest {
    /// Password to analyze
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub password: Option<Option<String>>,
    /// One of plaintext, md5, sha256, bcrypt, argon2
    pub algorithm: String,
}

impl CrackTimeRequest {
    pub fn password(&self) -> Option<&str> {
        supplied(&self.password)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StrengthSummary {
    /// Strength score (0-100)
    pub score: u8,
    pub level: StrengthLevel,
    /// Length in characters
    pub length: usize,
    /// Entropy in bits, rounded to 2 decimals
    pub entropy: f64,
    pub char_sets: CharSets,
    pub is_common: bool,
}

impl From<&PasswordAnalyzer> for StrengthSummary {
    fn from(analyzer: &PasswordAnalyzer) -> Self {
        Self {
            score: analyzer.strength_score(),
            level: analyzer.strength_level(),
            length: analyzer.length(),
            entropy: round_to(analyzer.entropy(), 2),
            char_sets: analyzer.char_sets(),
            is_common: analyzer.is_common(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CrackTimeEntry {
    pub algorithm: Algorithm,
    pub time_human: String,
    pub time_seconds: f64,
    /// Guesses per second
    pub attack_speed: f64,
}

impl From<&CrackTimeEstimate> for CrackTimeEntry {
    fn from(estimate: &CrackTimeEstimate) -> Self {
        Self {
            algorithm: estimate.algorithm,
            time_human: estimate.time_human.clone(),
            time_seconds: estimate.time_seconds,
            attack_speed: estimate.attack_speed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CrackTimeDetail {
    pub algorithm: Algorithm,
    pub attack_speed: f64,
    /// Keyspace size as a decimal string (can exceed any fixed-width integer)
    pub combinations: String,
    pub time_seconds: f64,
    pub time_human: String,
}

impl From<CrackTimeEstimate> for CrackTimeDetail {
    fn from(estimate: CrackTimeEstimate) -> Self {
        Self {
            algorithm: estimate.algorithm,
            attack_speed: estimate.attack_speed,
            combinations: estimate.combinations.to_string(),
            time_seconds: estimate.time_seconds,
            time_human: estimate.time_human,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisData {
    pub strength: StrengthSummary,
    /// Ordered insecure to secure
    pub crack_times: Vec<CrackTimeEntry>,
    pub suggestions: Vec<String>,
    /// Digests, each cut to 60 characters plus "..." when longer
    pub hashes: HashComparison,
}

impl AnalysisData {
    pub fn new(analyzer: &PasswordAnalyzer, hashes: &HashComparison) -> Self {
        Self {
            strength: StrengthSummary::from(analyzer),
            crack_times: analyzer.all_crack_times().iter().map(CrackTimeEntry::from).collect(),
            suggestions: analyzer.suggestions(),
            hashes: hashes.truncated(DISPLAY_DIGEST_CHARS),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AnalysisData>,
    /// Error message (only present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CrackTimeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<CrackTimeDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// Health
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Whether the Argon2id backend is compiled in
    pub argon2_available: bool,
}

// Reference data
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AlgorithmListResponse {
    pub success: bool,
    pub data: Vec<AlgorithmInfo>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ExampleListResponse {
    pub success: bool,
    pub data: Vec<ExamplePassword>,
}

// Password generation types
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct PasswordGenerationRequest {
    /// Password length (default: 16)
    pub length: Option<usize>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include digits (default: true)
    pub include_digits: Option<bool>,
    /// Include special characters (default: true)
    pub include_special: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedPasswordData {
    pub password: String,
    pub score: u8,
    pub level: StrengthLevel,
    pub length: usize,
    pub entropy: f64,
}

impl From<GeneratedPassword> for GeneratedPasswordData {
    fn from(generated: GeneratedPassword) -> Self {
        Self {
            password: generated.password,
            score: generated.score,
            level: generated.level,
            length: generated.length,
            entropy: round_to(generated.entropy, 2),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<GeneratedPasswordData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// Improvement types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImprovementData {
    pub original: String,
    /// Best first
    pub improvements: Vec<Improvement>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ImproveResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ImprovementData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// Generic failure envelope (malformed request bodies)
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password_of(body: &str) -> Option<String> {
        let request: AnalyzeRequest = serde_json::from_str(body).unwrap();
        request.password().map(str::to_string)
    }

    #[test]
    fn missing_null_and_present_passwords_differ() {
        assert_eq!(password_of("{}"), None);
        assert_eq!(password_of(r#"{"password": null}"#), Some(String::new()));
        assert_eq!(password_of(r#"{"password": "hunter2"}"#), Some("hunter2".to_string()));
    }

    #[test]
    fn crack_time_request_treats_null_as_empty() {
        let request: CrackTimeRequest =
            serde_json::from_str(r#"{"password": null, "algorithm": "md5"}"#).unwrap();
        assert_eq!(request.password(), Some(""));
    }
}
