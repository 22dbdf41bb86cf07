// src/models.rs
use serde::{Serialize, Deserialize};
use std::fmt;

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    /// Drop visually confusable characters (i, l, 1, L, o, 0, O)
    pub exclude_ambiguous: bool,
    /// Characters removed from every pool
    pub exclude_characters: String,
    /// Extra characters appended to the pool
    pub custom_characters: String,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_ambiguous: false,
            exclude_characters: String::new(),
            custom_characters: String::new(),
        }
    }
}

/// Six-level strength rating, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PasswordStrength {
    VeryWeak = 0,
    Weak = 1,
    Fair = 2,
    Good = 3,
    Strong = 4,
    VeryStrong = 5,
}

impl PasswordStrength {
    /// Map a normalized score onto the scale. Values above 5 saturate.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => PasswordStrength::VeryWeak,
            1 => PasswordStrength::Weak,
            2 => PasswordStrength::Fair,
            3 => PasswordStrength::Good,
            4 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }

    pub fn score(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(crate::generators::get_password_strength_label(*self))
    }
}

// CLI reports (JSON mode)
#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: PasswordStrength,
    pub strength_label: String,
    pub crack_time: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationReport {
    pub success: bool,
    pub options: PasswordOptions,
    pub passwords: Vec<GeneratedPassword>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub strength: PasswordStrength,
    pub strength_label: String,
    pub entropy_bits: f64,
    pub crack_time: String,
    pub feedback: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}
