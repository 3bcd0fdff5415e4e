// src/analyzer/patterns.rs

const KEYBOARD_WALKS: [&str; 3] = ["qwert", "asdf", "zxcv"];

/// True when the same character appears three or more times in a row.
/// Line breaks never form a run.
pub fn has_repeated_chars(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(3)
        .any(|w| w[0] != '\n' && w[0] == w[1] && w[1] == w[2])
}

fn is_ascending_triple(w: &[char], lo: char, hi: char) -> bool {
    w.iter().all(|c| (lo..=hi).contains(c))
        && w[1] as u32 == w[0] as u32 + 1
        && w[2] as u32 == w[1] as u32 + 1
}

/// Runs like `abc`, `123`, `aaa` or a keyboard walk, matched case-insensitively.
pub fn has_simple_patterns(password: &str) -> bool {
    let lowered = password.to_lowercase();
    if has_repeated_chars(&lowered) {
        return true;
    }

    let chars: Vec<char> = lowered.chars().collect();
    let sequential = chars
        .windows(3)
        .any(|w| is_ascending_triple(w, 'a', 'z') || is_ascending_triple(w, '0', '9'));

    sequential || KEYBOARD_WALKS.iter().any(|walk| lowered.contains(walk))
}
