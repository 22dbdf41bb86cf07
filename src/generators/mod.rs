// src/generators/mod.rs
use thiserror::Error;

pub mod charset;
pub mod password;
pub mod patterns;
pub mod random;
pub mod strength;

pub use password::{generate_multiple_passwords, generate_password, PasswordGenerator};
pub use random::{select_random_source, DynRandomSource, OsRandom, RandomSource, SecurityTier, SeededRandom};
pub use strength::{
    calculate_password_strength, estimate_crack_seconds, estimate_crack_time, estimate_entropy_bits, get_password_strength_label,
    password_feedback, validate_password_options, validation_errors,
};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Random source unavailable: {0}")]
    RandomUnavailable(String),

    #[error("Random source is only {tier}; a cryptographic source is required")]
    WeakRandomSource { tier: SecurityTier },

    #[error("Password length {length} exceeds the hard limit of {limit} characters")]
    LengthTooLarge { length: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
