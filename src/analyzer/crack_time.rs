// src/analyzer/crack_time.rs
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use super::charset::CharSets;
use super::knowledge::Algorithm;
use crate::utils::{format_crack_time, format_trillion_years};

/// Alphabet assumed when no known class was detected.
const FALLBACK_CHARSET_SIZE: u32 = 26;

/// Brute-force projection against one hashing strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct CrackTimeEstimate {
    pub algorithm: Algorithm,
    pub attack_speed: f64,
    /// Full keyspace; collapses to 1 for known common passwords.
    pub combinations: BigUint,
    /// Mean time to hit the password, saturating at `f64::MAX`.
    pub time_seconds: f64,
    pub time_human: String,
}

/// Average-case search (half the keyspace) at the algorithm's attack speed.
pub fn estimate(char_sets: &CharSets, length: usize, is_common: bool, algorithm: Algorithm) -> CrackTimeEstimate {
    let charset_size = match char_sets.charset_size() {
        0 => FALLBACK_CHARSET_SIZE,
        size => size,
    };
    let attack_speed = algorithm.attack_speed();

    let (combinations, log10_combinations) = if is_common {
        (BigUint::one(), 0.0)
    } else {
        let exponent = u32::try_from(length).unwrap_or(u32::MAX);
        (
            BigUint::from(charset_size).pow(exponent),
            length as f64 * f64::from(charset_size).log10(),
        )
    };
    let log10_seconds = log10_combinations - 2f64.log10() - attack_speed.log10();

    let time_seconds = match combinations.to_f64() {
        Some(total) if total.is_finite() => total / 2.0 / attack_speed,
        _ => 10f64.powf(log10_seconds),
    };

    let (time_seconds, time_human) = if time_seconds.is_finite() {
        (time_seconds, format_crack_time(time_seconds))
    } else {
        (f64::MAX, format_trillion_years(log10_seconds))
    };

    CrackTimeEstimate {
        algorithm,
        attack_speed,
        combinations,
        time_seconds,
        time_human,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate_for(password: &str, is_common: bool, algorithm: Algorithm) -> CrackTimeEstimate {
        let sets = CharSets::identify(password);
        estimate(&sets, password.chars().count(), is_common, algorithm)
    }

    #[test]
    fn keyspace_is_exact() {
        let est = estimate_for("Pass123", false, Algorithm::Md5);
        assert_eq!(est.combinations, BigUint::from(62u32).pow(7));
        assert_eq!(est.combinations.to_string(), "3521614606208");
    }

    #[test]
    fn unknown_classes_fall_back_to_lowercase_alphabet() {
        let est = estimate_for("éééé", false, Algorithm::Plaintext);
        assert_eq!(est.combinations, BigUint::from(26u32).pow(4));
    }

    #[test]
    fn common_password_collapses_keyspace() {
        let est = estimate_for("password", true, Algorithm::Argon2);
        assert_eq!(est.combinations, BigUint::one());
        assert!((est.time_seconds - 0.5 / 1e3).abs() < 1e-12);
        assert_eq!(est.time_human, "Instant");
    }

    #[test]
    fn time_is_half_keyspace_over_speed() {
        let est = estimate_for("Pass123", false, Algorithm::Bcrypt);
        let expected = 62f64.powi(7) / 2.0 / 8.5e4;
        assert!((est.time_seconds - expected).abs() / expected < 1e-12);
        assert_eq!(est.attack_speed, 8.5e4);
    }

    #[test]
    fn huge_keyspace_saturates_without_losing_magnitude() {
        let password = "aB3~".repeat(60);
        let est = estimate_for(&password, false, Algorithm::Argon2);
        assert_eq!(est.time_seconds, f64::MAX);
        assert!(est.time_human.ends_with("trillion years"));
        // 94^240 / 2 / 1e3 seconds is about 10^470.2, i.e. 10^450.8 trillion years
        assert!(est.time_human.contains("e+450"), "{}", est.time_human);
        assert!(est.combinations.bits() > 1500);
    }
}
