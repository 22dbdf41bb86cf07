// src/generators/strength.rs
use crate::models::{PasswordOptions, PasswordStrength};
use crate::utils::format_crack_duration;

use super::patterns;

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Brute-force rate assumed by `estimate_crack_time`.
const GUESSES_PER_SECOND: f64 = 1e9;

#[derive(Debug, Default, Clone, Copy)]
struct CharClasses {
    lowercase: bool,
    uppercase: bool,
    digit: bool,
    symbol: bool,
}

impl CharClasses {
    fn of(password: &str) -> Self {
        let mut classes = CharClasses::default();
        for c in password.chars() {
            if c.is_ascii_lowercase() {
                classes.lowercase = true;
            } else if c.is_ascii_uppercase() {
                classes.uppercase = true;
            } else if c.is_ascii_digit() {
                classes.digit = true;
            } else {
                classes.symbol = true;
            }
        }
        classes
    }

    fn count(&self) -> i32 {
        [self.lowercase, self.uppercase, self.digit, self.symbol]
            .iter()
            .filter(|present| **present)
            .count() as i32
    }

    fn charset_size(&self) -> u32 {
        let mut size = 0;
        if self.lowercase {
            size += 26;
        }
        if self.uppercase {
            size += 26;
        }
        if self.digit {
            size += 10;
        }
        if self.symbol {
            size += 32;
        }
        if size == 0 {
            26
        } else {
            size
        }
    }
}

/// Estimated alphabet size for a password, from the classes it uses.
pub fn charset_size(password: &str) -> u32 {
    CharClasses::of(password).charset_size()
}

/// `length * log2(charset_size)` in bits.
pub fn estimate_entropy_bits(password: &str) -> f64 {
    let length = password.chars().count() as f64;
    length * f64::from(charset_size(password)).log2()
}

/// Score a password on the six-level scale.
pub fn calculate_password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::VeryWeak;
    }

    let chars: Vec<char> = password.chars().collect();
    let length = chars.len();
    let classes = CharClasses::of(password);
    let mut score: i32 = 0;

    // Length thresholds
    score += [8, 12, 16].iter().filter(|t| length >= **t).count() as i32;

    score += classes.count();

    if patterns::longest_repeat(&chars) >= 3 {
        score -= 1;
    }
    if chars.iter().all(|c| c.is_ascii_alphabetic()) {
        score -= 1;
    }
    if chars.iter().all(|c| c.is_ascii_digit()) {
        score -= 1;
    }
    if patterns::has_weak_prefix(password) {
        score -= 2;
    }

    let entropy = estimate_entropy_bits(password);
    if entropy >= 60.0 {
        score += 1;
    }
    if entropy >= 80.0 {
        score += 1;
    }

    PasswordStrength::from_score(score.div_euclid(2).clamp(0, 5) as u8)
}

pub fn get_password_strength_label(strength: PasswordStrength) -> &'static str {
    match strength {
        PasswordStrength::VeryWeak => "Very Weak",
        PasswordStrength::Weak => "Weak",
        PasswordStrength::Fair => "Fair",
        PasswordStrength::Good => "Good",
        PasswordStrength::Strong => "Strong",
        PasswordStrength::VeryStrong => "Very Strong",
    }
}

/// Average time to brute-force the password at one billion guesses per second.
pub fn estimate_crack_time(password: &str) -> String {
    format_crack_duration(estimate_crack_seconds(password))
}

/// Seconds to search half the keyspace, `charset_size^length / 2e9`.
pub fn estimate_crack_seconds(password: &str) -> f64 {
    let length = password.chars().count() as f64;
    let possibilities = f64::from(charset_size(password)).powf(length);
    possibilities / (2.0 * GUESSES_PER_SECOND)
}

/// Advisory check; generation only refuses lengths past its hard limit.
pub fn validate_password_options(options: &PasswordOptions) -> bool {
    validation_errors(options).is_empty()
}

/// Reasons why `validate_password_options` would return false.
pub fn validation_errors(options: &PasswordOptions) -> Vec<String> {
    let mut errors = Vec::new();

    let has_source = options.include_lowercase
        || options.include_uppercase
        || options.include_numbers
        || options.include_symbols
        || !options.custom_characters.is_empty();
    if !has_source {
        errors.push("At least one character type must be included".to_string());
    }

    if options.length < MIN_PASSWORD_LENGTH {
        errors.push(format!("Password length must be at least {} characters", MIN_PASSWORD_LENGTH));
    }
    if options.length > MAX_PASSWORD_LENGTH {
        errors.push(format!("Password length must be at most {} characters", MAX_PASSWORD_LENGTH));
    }

    errors
}

/// Suggestions for improving a password.
pub fn password_feedback(password: &str) -> Vec<String> {
    let mut feedback = Vec::new();
    let chars: Vec<char> = password.chars().collect();
    let classes = CharClasses::of(password);

    match calculate_password_strength(password) {
        PasswordStrength::VeryWeak | PasswordStrength::Weak => {
            feedback.push("Consider using a longer password with mixed character types".to_string());
        }
        PasswordStrength::VeryStrong => {
            feedback.push("Excellent password strength!".to_string());
        }
        _ => {}
    }

    if !classes.lowercase {
        feedback.push("Add lowercase letters for better security".to_string());
    }
    if !classes.uppercase {
        feedback.push("Add uppercase letters for better security".to_string());
    }
    if !classes.digit {
        feedback.push("Add numbers for better security".to_string());
    }
    if !classes.symbol {
        feedback.push("Add symbols for better security".to_string());
    }

    if chars.len() < 12 {
        feedback.push("Increase password length to at least 12 characters".to_string());
    } else if chars.len() < 16 {
        feedback.push("For maximum security, consider increasing length to 16+ characters".to_string());
    }

    if patterns::longest_repeat(&chars) >= 3 {
        feedback.push("Avoid repeating the same character (e.g., 'aaa')".to_string());
    }
    if patterns::has_sequential_run(&chars) {
        feedback.push("Avoid using consecutive letters or numbers (e.g., 'abc', '123')".to_string());
    }
    if patterns::has_weak_prefix(password) {
        feedback.push("Avoid common starting patterns like '123', 'abc', 'qwerty' or 'password'".to_string());
    }

    feedback
}
