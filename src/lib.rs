// src/lib.rs
//! Password generation, strength scoring and crack-time estimation.

pub mod cli;
pub mod core;
pub mod generators;
pub mod models;
pub mod utils;

pub use crate::generators::{
    calculate_password_strength, estimate_crack_time, generate_multiple_passwords, generate_password,
    get_password_strength_label, validate_password_options, GeneratorError, PasswordGenerator,
};
pub use crate::models::{PasswordOptions, PasswordStrength};
