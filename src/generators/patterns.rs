// src/generators/patterns.rs
use super::charset::CharCategory;

pub const WEAK_PREFIXES: [&str; 4] = ["123", "abc", "qwerty", "password"];

/// True if the password starts with a well-known weak prefix (case-insensitive).
pub fn has_weak_prefix(password: &str) -> bool {
    let lowered = password.to_lowercase();
    WEAK_PREFIXES.iter().any(|prefix| lowered.starts_with(prefix))
}

/// Length of the longest run of one repeated character.
pub fn longest_repeat(chars: &[char]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut prev: Option<char> = None;
    for &c in chars {
        if Some(c) == prev {
            current += 1;
        } else {
            current = 1;
            prev = Some(c);
        }
        longest = longest.max(current);
    }
    longest
}

fn is_successor(prev: char, curr: char) -> bool {
    if prev.is_ascii_alphabetic() && curr.is_ascii_alphabetic() {
        let p = prev.to_ascii_lowercase() as u8;
        let c = curr.to_ascii_lowercase() as u8;
        return c == p + 1;
    }
    if let (Some(p), Some(c)) = (prev.to_digit(10), curr.to_digit(10)) {
        // 8-9-0 reads as a keyboard run
        return c == (p + 1) % 10;
    }
    false
}

/// True if three consecutive characters form an ascending letter or digit run
/// such as `abc`, `XYZ` or `890`.
pub fn has_sequential_run(chars: &[char]) -> bool {
    chars
        .windows(3)
        .any(|w| is_successor(w[0], w[1]) && is_successor(w[1], w[2]))
}

/// True if the first `run` characters all share one category.
pub fn has_leading_category_run(chars: &[char], run: usize) -> bool {
    if run == 0 || chars.len() < run {
        return false;
    }
    let first = CharCategory::of(chars[0]);
    chars[..run].iter().all(|c| CharCategory::of(*c) == first)
}

/// Patterns a freshly shuffled candidate must avoid.
///
/// The leading-run rule only applies when the pool spans several categories;
/// a single-category pool cannot avoid it.
pub fn is_weak_candidate(chars: &[char], category_span: usize) -> bool {
    if category_span > 1 && has_leading_category_run(chars, 4) {
        return true;
    }
    if longest_repeat(chars) >= 4 || has_sequential_run(chars) {
        return true;
    }
    let candidate: String = chars.iter().collect();
    has_weak_prefix(&candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn detects_weak_prefixes() {
        assert!(has_weak_prefix("Password!"));
        assert!(has_weak_prefix("QWERTY99"));
        assert!(has_weak_prefix("123abc"));
        assert!(!has_weak_prefix("x123"));
    }

    #[test]
    fn counts_repeats() {
        assert_eq!(longest_repeat(&chars("")), 0);
        assert_eq!(longest_repeat(&chars("abc")), 1);
        assert_eq!(longest_repeat(&chars("aabbbbc")), 4);
    }

    #[test]
    fn detects_sequences() {
        assert!(has_sequential_run(&chars("x#abc")));
        assert!(has_sequential_run(&chars("XyZ")));
        assert!(has_sequential_run(&chars("k890")));
        assert!(has_sequential_run(&chars("q567")));
        assert!(!has_sequential_run(&chars("acegik")));
        assert!(!has_sequential_run(&chars("cba")));
        assert!(!has_sequential_run(&chars("z{|")));
    }

    #[test]
    fn leading_run_needs_several_categories() {
        let candidate = chars("abcd9!X");
        assert!(has_leading_category_run(&candidate, 4));
        assert!(is_weak_candidate(&chars("qwmz9!X"), 4));
        assert!(!is_weak_candidate(&chars("qwmz"), 1));
        assert!(!is_weak_candidate(&chars("q9Wm!z"), 4));
    }

    #[test]
    fn repeats_and_prefixes_are_weak() {
        assert!(is_weak_candidate(&chars("x!!!!9Q"), 4));
        assert!(is_weak_candidate(&chars("abc"), 1));
        assert!(!is_weak_candidate(&chars("x!!!9Q"), 4));
    }
}
