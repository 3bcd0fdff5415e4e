// src/analyzer/charset.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Punctuation counted as the "special" class.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};:'\",.<>?/\\|`~";

const LOWERCASE_SIZE: u32 = 26;
const UPPERCASE_SIZE: u32 = 26;
const DIGIT_SIZE: u32 = 10;
const SPECIAL_SIZE: u32 = 32;

/// Which character classes appear in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CharSets {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
}

impl CharSets {
    /// Single pass over the password.
    pub fn identify(password: &str) -> Self {
        let mut sets = CharSets::default();
        for c in password.chars() {
            if c.is_ascii_lowercase() {
                sets.lowercase = true;
            } else if c.is_ascii_uppercase() {
                sets.uppercase = true;
            } else if c.is_ascii_digit() {
                sets.digits = true;
            } else if SPECIAL_CHARACTERS.contains(c) {
                sets.special = true;
            }
        }
        sets
    }

    pub fn class_count(&self) -> usize {
        [self.lowercase, self.uppercase, self.digits, self.special]
            .into_iter()
            .filter(|present| *present)
            .count()
    }

    /// Nominal alphabet size of the detected classes, not the distinct symbols observed.
    pub fn charset_size(&self) -> u32 {
        let mut size = 0;
        if self.lowercase {
            size += LOWERCASE_SIZE;
        }
        if self.uppercase {
            size += UPPERCASE_SIZE;
        }
        if self.digits {
            size += DIGIT_SIZE;
        }
        if self.special {
            size += SPECIAL_SIZE;
        }
        size
    }

    /// Upper-bound entropy in bits assuming uniform choice from the detected classes.
    pub fn entropy(&self, length: usize) -> f64 {
        match self.charset_size() {
            0 => 0.0,
            size => length as f64 * f64::from(size).log2(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_has_no_classes() {
        let sets = CharSets::identify("");
        assert_eq!(sets, CharSets::default());
        assert_eq!(sets.charset_size(), 0);
        assert_eq!(sets.entropy(0), 0.0);
    }

    #[test]
    fn detects_each_class() {
        let sets = CharSets::identify("aB3~");
        assert!(sets.lowercase && sets.uppercase && sets.digits && sets.special);
        assert_eq!(sets.class_count(), 4);
        assert_eq!(sets.charset_size(), 94);
    }

    #[test]
    fn special_set_covers_every_listed_symbol() {
        for c in SPECIAL_CHARACTERS.chars() {
            let sets = CharSets::identify(&c.to_string());
            assert!(sets.special, "{c:?} should be special");
        }
        assert_eq!(SPECIAL_CHARACTERS.chars().count(), 32);
    }

    #[test]
    fn whitespace_and_non_ascii_are_unclassified() {
        let sets = CharSets::identify(" é€");
        assert_eq!(sets.class_count(), 0);
    }

    #[test]
    fn entropy_uses_nominal_alphabet() {
        let sets = CharSets::identify("Pass123");
        assert_eq!(sets.charset_size(), 62);
        let expected = 7.0 * 62f64.log2();
        assert!((sets.entropy(7) - expected).abs() < 1e-9);
        assert!((sets.entropy(7) - 41.68).abs() < 0.01);
    }
}
