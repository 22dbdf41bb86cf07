// src/cli/commands.rs
use clap::{Args, Subcommand};

use crate::core::config::Config;
use crate::generators::password::LENGTH_LIMIT;
use crate::models::PasswordOptions;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        #[command(flatten)]
        options: OptionArgs,

        /// Number of passwords to generate
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },

    /// Score a password and estimate its crack time
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },

    /// Check whether a set of generation options is valid
    Validate {
        #[command(flatten)]
        options: OptionArgs,
    },

    /// Interactive menu
    Interactive,
}

/// Generation options shared by `generate` and `validate`. Unset flags take
/// the configured defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// Password length
    #[arg(long, short, value_parser = parse_length)]
    pub length: Option<usize>,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Drop confusable characters (i, l, 1, L, o, 0, O)
    #[arg(long)]
    pub exclude_ambiguous: bool,

    /// Characters to remove from every pool
    #[arg(long, short = 'x', default_value = "")]
    pub exclude: String,

    /// Extra characters to add to the pool
    #[arg(long, default_value = "")]
    pub custom: String,
}

fn parse_length(value: &str) -> Result<usize, String> {
    let length: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a valid length", value))?;
    if length > LENGTH_LIMIT {
        return Err(format!("length must be at most {}", LENGTH_LIMIT));
    }
    Ok(length)
}

impl OptionArgs {
    pub fn to_options(&self, config: &Config) -> PasswordOptions {
        let defaults = config.default_options();
        PasswordOptions {
            length: self.length.unwrap_or(defaults.length),
            include_lowercase: defaults.include_lowercase && !self.no_lowercase,
            include_uppercase: defaults.include_uppercase && !self.no_uppercase,
            include_numbers: defaults.include_numbers && !self.no_numbers,
            include_symbols: defaults.include_symbols && !self.no_symbols,
            exclude_ambiguous: defaults.exclude_ambiguous || self.exclude_ambiguous,
            exclude_characters: self.exclude.clone(),
            custom_characters: self.custom.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;

    #[test]
    fn flags_override_config_defaults() {
        let args = Args::try_parse_from([
            "passforge", "generate", "--length", "20", "--no-symbols", "--exclude-ambiguous", "-x", "abc", "--count", "3",
        ])
        .unwrap();

        match args.command {
            Some(CliCommand::Generate { options, count }) => {
                let opts = options.to_options(&Config::default());
                assert_eq!(count, 3);
                assert_eq!(opts.length, 20);
                assert!(!opts.include_symbols);
                assert!(opts.include_lowercase);
                assert!(opts.exclude_ambiguous);
                assert_eq!(opts.exclude_characters, "abc");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn absurd_lengths_are_rejected_at_parse_time() {
        let huge = Args::try_parse_from(["passforge", "generate", "--length", "18446744073709551615"]);
        assert!(huge.is_err());
        assert!(Args::try_parse_from(["passforge", "generate", "--length", "-3"]).is_err());

        // out of the advisory range but still parseable, so `validate` can report it
        let args = Args::try_parse_from(["passforge", "validate", "--length", "200"]).unwrap();
        match args.command {
            Some(CliCommand::Validate { options }) => assert_eq!(options.length, Some(200)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn unset_flags_use_defaults() {
        let opts = OptionArgs::default().to_options(&Config::default());
        assert_eq!(opts, PasswordOptions::default());
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let args = Args::try_parse_from(["passforge", "--json"]).unwrap();
        assert!(args.json);
        assert!(args.command.is_none());
    }
}
