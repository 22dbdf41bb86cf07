// src/cli/menu.rs
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, CustomUserError, Password, Select, Text};
use std::error::Error;

use crate::cli::handlers::{analyze, styled_strength};
use crate::core::config::Config;
use crate::generators::{validation_errors, DynRandomSource, PasswordGenerator};
use crate::generators::strength::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::models::PasswordOptions;

const GENERATE: &str = "🔐  Generate a password";
const GENERATE_BATCH: &str = "📋  Generate several passwords";
const ANALYZE: &str = "🔍  Check password strength";
const EXIT: &str = "🚪  Exit";

pub fn run_cli_menu(config: &Config, mut generator: PasswordGenerator<DynRandomSource>) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║          🦀 PASSFORGE                ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        let choice = Select::new("What would you like to do?", vec![GENERATE, GENERATE_BATCH, ANALYZE, EXIT])
            .prompt()?;

        match choice {
            GENERATE => {
                let options = prompt_options(config)?;
                match generator.generate_password(&options) {
                    Ok(password) => print_password(&password),
                    Err(e) => eprintln!("❌ Failed to generate password: {}", e),
                }
            }
            GENERATE_BATCH => {
                let options = prompt_options(config)?;
                let count: usize = CustomType::new("How many passwords?")
                    .with_default(5)
                    .prompt()?;
                match generator.generate_multiple(&options, count) {
                    Ok(passwords) => passwords.iter().for_each(|p| print_password(p)),
                    Err(e) => eprintln!("❌ Failed to generate passwords: {}", e),
                }
            }
            ANALYZE => {
                let password = Password::new("Password to check:")
                    .with_display_mode(inquire::PasswordDisplayMode::Masked)
                    .without_confirmation()
                    .prompt()?;
                let report = analyze(&password);
                println!("\nStrength:   {}", styled_strength(report.strength));
                println!("Entropy:    {:.1} bits", report.entropy_bits);
                println!("Crack time: {}", report.crack_time);
                for line in &report.feedback {
                    println!("  • {}", line);
                }
                println!();
            }
            _ => {
                println!("👋 Goodbye!");
                return Ok(());
            }
        }
    }
}

fn print_password(password: &str) {
    let report = analyze(password);
    println!("\nGenerated Password: {}", password);
    println!("Strength: {}  Crack time: {}\n", styled_strength(report.strength), report.crack_time);
}

fn prompt_options(config: &Config) -> Result<PasswordOptions, Box<dyn Error>> {
    let defaults = config.default_options();

    let length: usize = CustomType::new("Password length:")
        .with_default(defaults.length)
        .with_help_message(&format!("{} to {} characters", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH))
        .with_validator(|length: &usize| -> Result<Validation, CustomUserError> {
            if *length > MAX_PASSWORD_LENGTH {
                Ok(Validation::Invalid(
                    format!("Password length must be at most {} characters", MAX_PASSWORD_LENGTH).into(),
                ))
            } else {
                Ok(Validation::Valid)
            }
        })
        .prompt()?;

    let include_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(defaults.include_lowercase)
        .prompt()?;

    let include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(defaults.include_uppercase)
        .prompt()?;

    let include_numbers = Confirm::new("Include numbers?")
        .with_default(defaults.include_numbers)
        .prompt()?;

    let include_symbols = Confirm::new("Include symbols?")
        .with_default(defaults.include_symbols)
        .prompt()?;

    let exclude_ambiguous = Confirm::new("Exclude ambiguous characters (like l, 1, L, O, 0)?")
        .with_default(defaults.exclude_ambiguous)
        .prompt()?;

    let exclude_characters = Text::new("Characters to exclude (optional):").prompt()?;
    let custom_characters = Text::new("Extra characters to include (optional):").prompt()?;

    let options = PasswordOptions {
        length,
        include_lowercase,
        include_uppercase,
        include_numbers,
        include_symbols,
        exclude_ambiguous,
        exclude_characters,
        custom_characters,
    };

    for error in validation_errors(&options) {
        println!("⚠️ {}", error);
    }

    Ok(options)
}
