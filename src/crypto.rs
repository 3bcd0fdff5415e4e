// src/crypto.rs
#[cfg(feature = "argon2")]
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params, Version,
};
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use utoipa::ToSchema;

use crate::analyzer::Algorithm;
use crate::utils::truncate_with_ellipsis;

/// Whether the memory-hard backend was compiled in.
pub const ARGON2_AVAILABLE: bool = cfg!(feature = "argon2");

pub const ARGON2_UNAVAILABLE_MARKER: &str =
    "[Argon2id - backend unavailable: rebuild with the `argon2` feature]";

/// Digests longer than this are shortened for display.
pub const DISPLAY_DIGEST_CHARS: usize = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashError {
    #[error("{0} backend unavailable")]
    BackendUnavailable(&'static str),

    #[error("{0}")]
    BackendFailure(String),
}

pub type Result<T> = std::result::Result<T, HashError>;

/// Cost parameters for the slow hashing primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashParams {
    pub bcrypt_cost: u32,
    /// Memory cost in KiB
    pub argon2_memory_cost: u32,
    pub argon2_time_cost: u32,
    pub argon2_parallelism: u32,
    pub argon2_output_len: usize,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            bcrypt_cost: 12,
            argon2_memory_cost: 65536, // 64 MiB
            argon2_time_cost: 3,
            argon2_parallelism: 4,
            argon2_output_len: 32,
        }
    }
}

/// One rendering of the password per algorithm. bcrypt and argon2 carry a
/// random salt, so they differ on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HashComparison {
    pub plaintext: String,
    pub md5: String,
    pub sha256: String,
    pub bcrypt: String,
    pub argon2: String,
}

impl HashComparison {
    pub fn get(&self, algorithm: Algorithm) -> &str {
        match algorithm {
            Algorithm::Plaintext => &self.plaintext,
            Algorithm::Md5 => &self.md5,
            Algorithm::Sha256 => &self.sha256,
            Algorithm::Bcrypt => &self.bcrypt,
            Algorithm::Argon2 => &self.argon2,
        }
    }

    /// Copy with every value cut to `max_chars` plus an ellipsis marker.
    pub fn truncated(&self, max_chars: usize) -> Self {
        Self {
            plaintext: truncate_with_ellipsis(&self.plaintext, max_chars),
            md5: truncate_with_ellipsis(&self.md5, max_chars),
            sha256: truncate_with_ellipsis(&self.sha256, max_chars),
            bcrypt: truncate_with_ellipsis(&self.bcrypt, max_chars),
            argon2: truncate_with_ellipsis(&self.argon2, max_chars),
        }
    }
}

pub fn md5_hex(password: &str) -> String {
    hex::encode(Md5::digest(password.as_bytes()))
}

pub fn sha256_hex(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

// Salted bcrypt in modular crypt format ($2b$<cost>$...)
pub fn bcrypt_hash(password: &str, cost: u32) -> Result<String> {
    bcrypt::hash(password, cost).map_err(|e| HashError::BackendFailure(e.to_string()))
}

pub fn verify_bcrypt(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

// Argon2id PHC string with a fresh 16-byte salt
#[cfg(feature = "argon2")]
pub fn argon2_hash(password: &str, params: &HashParams) -> Result<String> {
    let argon2_params = Params::new(
        params.argon2_memory_cost,
        params.argon2_time_cost,
        params.argon2_parallelism,
        Some(params.argon2_output_len),
    )
    .map_err(|e| HashError::BackendFailure(e.to_string()))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, argon2_params);
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| HashError::BackendFailure(e.to_string()))
}

#[cfg(not(feature = "argon2"))]
pub fn argon2_hash(_password: &str, _params: &HashParams) -> Result<String> {
    Err(HashError::BackendUnavailable("Argon2id"))
}

#[cfg(feature = "argon2")]
pub fn verify_argon2(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(not(feature = "argon2"))]
pub fn verify_argon2(_password: &str, _hash: &str) -> bool {
    false
}

// Failures stay inside the one field instead of failing the comparison
fn render(label: &str, result: Result<String>) -> String {
    match result {
        Ok(digest) => digest,
        Err(HashError::BackendUnavailable(_)) => ARGON2_UNAVAILABLE_MARKER.to_string(),
        Err(HashError::BackendFailure(msg)) => {
            log::error!("{} hashing failed: {}", label, msg);
            format!("[{} error: {}]", label, msg)
        }
    }
}

/// Hash the password with every algorithm. Blocks for the duration of the
/// bcrypt and argon2 work factors.
pub fn hash_comparison(password: &str, params: &HashParams) -> HashComparison {
    HashComparison {
        plaintext: password.to_string(),
        md5: md5_hex(password),
        sha256: sha256_hex(password),
        bcrypt: render("Bcrypt", bcrypt_hash(password, params.bcrypt_cost)),
        argon2: render("Argon2", argon2_hash(password, params)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_params() -> HashParams {
        HashParams {
            bcrypt_cost: 4,
            argon2_memory_cost: 1024,
            argon2_time_cost: 1,
            argon2_parallelism: 1,
            ..HashParams::default()
        }
    }

    #[test]
    fn fast_digests_are_deterministic() {
        assert_eq!(md5_hex("password"), "5f4dcc3b5aa765d61d8327deb882cf99");
        assert_eq!(
            sha256_hex("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn bcrypt_is_salted_and_verifiable() {
        let first = bcrypt_hash("Pass123", 4).unwrap();
        let second = bcrypt_hash("Pass123", 4).unwrap();
        assert_ne!(first, second);
        assert_eq!(first.len(), 60);
        assert!(first.starts_with("$2b$04$"));
        assert!(verify_bcrypt("Pass123", &first));
        assert!(!verify_bcrypt("Pass124", &first));
    }

    #[test]
    fn invalid_bcrypt_cost_is_reported_inline() {
        let params = HashParams { bcrypt_cost: 99, ..fast_params() };
        let hashes = hash_comparison("Pass123", &params);
        assert!(hashes.bcrypt.starts_with("[Bcrypt error: "), "{}", hashes.bcrypt);
        assert_eq!(hashes.md5, md5_hex("Pass123"));
    }

    #[cfg(feature = "argon2")]
    #[test]
    fn argon2_uses_configured_parameters() {
        let hash = argon2_hash("Pass123", &fast_params()).unwrap();
        assert!(hash.starts_with("$argon2id$v=19$m=1024,t=1,p=1$"), "{hash}");
        assert!(verify_argon2("Pass123", &hash));
        assert!(!verify_argon2("pass123", &hash));
    }

    #[cfg(feature = "argon2")]
    #[test]
    fn default_argon2_parameters() {
        let hash = argon2_hash("Pass123", &HashParams::default()).unwrap();
        assert!(hash.starts_with("$argon2id$v=19$m=65536,t=3,p=4$"), "{hash}");
    }

    #[cfg(feature = "argon2")]
    #[test]
    fn invalid_argon2_params_are_reported_inline() {
        let params = HashParams { argon2_time_cost: 0, ..fast_params() };
        let hashes = hash_comparison("Pass123", &params);
        assert!(hashes.argon2.starts_with("[Argon2 error: "), "{}", hashes.argon2);
    }

    #[cfg(not(feature = "argon2"))]
    #[test]
    fn missing_argon2_backend_is_marked() {
        let hashes = hash_comparison("Pass123", &fast_params());
        assert_eq!(hashes.argon2, ARGON2_UNAVAILABLE_MARKER);
    }

    #[test]
    fn truncation_only_touches_long_values() {
        let hashes = hash_comparison("Pass123", &fast_params()).truncated(DISPLAY_DIGEST_CHARS);
        assert_eq!(hashes.plaintext, "Pass123");
        assert_eq!(hashes.sha256.len(), 63);
        assert!(hashes.sha256.ends_with("..."));
        assert_eq!(hashes.bcrypt.len(), 60);
    }
}
