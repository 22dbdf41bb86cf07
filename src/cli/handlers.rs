// src/cli/handlers.rs
use console::{style, StyledObject};
use std::error::Error;

use crate::core::config::Config;
use crate::generators::{
    calculate_password_strength, estimate_crack_time, estimate_entropy_bits, password_feedback,
    select_random_source, validation_errors, DynRandomSource, PasswordGenerator,
};
use crate::generators::strength::MAX_PASSWORD_LENGTH;
use crate::models::{
    AnalysisReport, GeneratedPassword, GenerationReport, PasswordOptions, PasswordStrength, ValidationReport,
};
use crate::utils::mask_secret;

// Build a generator over the random source chosen for this run
pub fn build_generator(config: &Config, allow_weak_random: bool) -> Result<PasswordGenerator<DynRandomSource>, Box<dyn Error>> {
    let allow_weak = allow_weak_random || config.allow_weak_random;
    let source = select_random_source(allow_weak)?;
    let generator = PasswordGenerator::with_source(source).max_attempts(config.max_shuffle_attempts);
    Ok(if allow_weak { generator.allow_best_effort() } else { generator })
}

pub fn styled_strength(strength: PasswordStrength) -> StyledObject<String> {
    let label = strength.to_string();
    match strength {
        PasswordStrength::VeryWeak | PasswordStrength::Weak => style(label).red().bold(),
        PasswordStrength::Fair => style(label).yellow(),
        PasswordStrength::Good => style(label).cyan(),
        PasswordStrength::Strong | PasswordStrength::VeryStrong => style(label).green().bold(),
    }
}

fn describe(password: String) -> GeneratedPassword {
    let strength = calculate_password_strength(&password);
    GeneratedPassword {
        strength_label: strength.to_string(),
        crack_time: estimate_crack_time(&password),
        strength,
        password,
    }
}

pub fn handle_generate(
    generator: &mut PasswordGenerator<DynRandomSource>,
    options: &PasswordOptions,
    count: usize,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    if options.length > MAX_PASSWORD_LENGTH {
        return Err(format!(
            "Password length must be at most {} characters (got {})",
            MAX_PASSWORD_LENGTH, options.length
        )
        .into());
    }

    let errors = validation_errors(options);
    if !errors.is_empty() {
        // Advisory only; generation normalizes degenerate options
        log::warn!("Generating with questionable options: {}", errors.join("; "));
    }

    let passwords = generator.generate_multiple(options, count)?;
    log::info!("Generated {} password(s) of length {}", passwords.len(), options.length);
    for password in &passwords {
        log::debug!("Generated {}", mask_secret(password));
    }

    let generated: Vec<GeneratedPassword> = passwords.into_iter().map(describe).collect();

    if json {
        let report = GenerationReport {
            success: true,
            options: options.clone(),
            passwords: generated,
            error: None,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for entry in &generated {
        println!("{}", style(&entry.password).bold());
        println!(
            "  Strength: {}  Crack time: {}",
            styled_strength(entry.strength),
            entry.crack_time
        );
    }

    Ok(())
}

pub fn analyze(password: &str) -> AnalysisReport {
    let strength = calculate_password_strength(password);
    AnalysisReport {
        strength,
        strength_label: strength.to_string(),
        entropy_bits: estimate_entropy_bits(password),
        crack_time: estimate_crack_time(password),
        feedback: password_feedback(password),
    }
}

pub fn handle_analyze(password: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let report = analyze(password);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Strength:   {} ({}/5)", styled_strength(report.strength), report.strength.score());
    println!("Entropy:    {:.1} bits", report.entropy_bits);
    println!("Crack time: {}", report.crack_time);
    for line in &report.feedback {
        println!("  • {}", line);
    }

    Ok(())
}

// Returns whether the options are valid so the caller can set the exit code
pub fn handle_validate(options: &PasswordOptions, json: bool) -> Result<bool, Box<dyn Error>> {
    let errors = validation_errors(options);
    let report = ValidationReport {
        valid: errors.is_empty(),
        errors,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.valid {
        println!("✅ Options are valid");
    } else {
        println!("❌ Options are invalid:");
        for error in &report.errors {
            println!("  • {}", error);
        }
    }

    Ok(report.valid)
}
