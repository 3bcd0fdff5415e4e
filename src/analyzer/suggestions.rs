// src/analyzer/suggestions.rs
use super::PasswordTraits;

pub const BEST_PRACTICE_TIPS: [&str; 3] = [
    "💡 Best Practice: Use a passphrase (e.g., 'Correct-Horse-Battery-Staple-2024!')",
    "🔐 Best Practice: Use a password manager to generate and store strong passwords",
    "🔄 Best Practice: Never reuse passwords across different accounts",
];

pub const EXCELLENT_PASSWORD: &str = "✅ Excellent password! Maintain this security level for all accounts.";

/// Ordered improvement advice. Either one or more findings followed by the
/// best-practice tips, or the single affirmation when nothing fired.
pub fn enhancement_suggestions(traits: &PasswordTraits) -> Vec<String> {
    let mut suggestions = Vec::new();

    if traits.length < 12 {
        suggestions.push(format!(
            "📏 Increase length to at least 12 characters (current: {})",
            traits.length
        ));
    } else if traits.length < 16 {
        suggestions.push(format!(
            "📏 Consider increasing length to 16+ characters for better security (current: {})",
            traits.length
        ));
    }

    let sets = &traits.char_sets;
    if !sets.uppercase {
        suggestions.push("🔠 Add uppercase letters (A-Z)".to_string());
    }
    if !sets.lowercase {
        suggestions.push("🔡 Add lowercase letters (a-z)".to_string());
    }
    if !sets.digits {
        suggestions.push("🔢 Add numbers (0-9)".to_string());
    }
    if !sets.special {
        suggestions.push("🔣 Add special characters (!@#$%^&*)".to_string());
    }

    if traits.is_common {
        suggestions.push("⚠️  CRITICAL: This is a commonly used password! Change it immediately!".to_string());
    }
    if traits.has_simple_patterns {
        suggestions.push("🔄 Avoid predictable patterns (abc, 123, aaa, keyboard patterns)".to_string());
    }
    if traits.has_repeated_chars {
        suggestions.push("🚫 Avoid repeating the same character multiple times".to_string());
    }
    if traits.length >= 4 && traits.is_alphabetic {
        suggestions.push("📖 Avoid using single dictionary words - use passphrases or random characters".to_string());
    }

    if suggestions.is_empty() {
        suggestions.push(EXCELLENT_PASSWORD.to_string());
    } else {
        suggestions.extend(BEST_PRACTICE_TIPS.iter().map(|tip| tip.to_string()));
    }

    suggestions
}
