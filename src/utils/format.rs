// src/utils/format.rs

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
const CENTURY: f64 = 3_153_600_000.0;

// Bucket a crack-time estimate into a human label
pub fn format_crack_duration(seconds: f64) -> String {
    if seconds < 1.0 {
        "Instantly".to_string()
    } else if seconds < MINUTE {
        format!("{} seconds", seconds.floor())
    } else if seconds < HOUR {
        format!("{} minutes", (seconds / MINUTE).floor())
    } else if seconds < DAY {
        format!("{} hours", (seconds / HOUR).floor())
    } else if seconds < YEAR {
        format!("{} days", (seconds / DAY).floor())
    } else if seconds < CENTURY {
        format!("{} years", (seconds / YEAR).floor())
    } else {
        "Centuries".to_string()
    }
}

// Mask all but the first and last character of a secret for log output
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    match chars.len() {
        0 => String::new(),
        1 | 2 => "*".repeat(chars.len()),
        n => format!("{}{}{}", chars[0], "*".repeat(n - 2), chars[n - 1]),
    }
}
