// src/generators/charset.rs
use crate::models::PasswordOptions;

pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBER_CHARS: &str = "0123456789";
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
pub const AMBIGUOUS_CHARS: &str = "il1Lo0O";

/// Coarse character class used for pool coverage and pattern checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharCategory {
    Lowercase,
    Uppercase,
    Number,
    Symbol,
}

impl CharCategory {
    /// Anything outside ASCII letters and digits counts as a symbol.
    pub fn of(c: char) -> Self {
        if c.is_ascii_lowercase() {
            CharCategory::Lowercase
        } else if c.is_ascii_uppercase() {
            CharCategory::Uppercase
        } else if c.is_ascii_digit() {
            CharCategory::Number
        } else {
            CharCategory::Symbol
        }
    }
}

/// Filtered character pools for one set of options.
#[derive(Debug, Clone, Default)]
pub struct CharacterPools {
    pub lowercase: Vec<char>,
    pub uppercase: Vec<char>,
    pub numbers: Vec<char>,
    pub symbols: Vec<char>,
    pub custom: Vec<char>,
    available: Vec<char>,
    fallback: bool,
}

impl CharacterPools {
    pub fn from_options(options: &PasswordOptions) -> Self {
        let excluded: Vec<char> = options.exclude_characters.chars().collect();
        let keep = |c: &char| {
            !excluded.contains(c) && !(options.exclude_ambiguous && AMBIGUOUS_CHARS.contains(*c))
        };
        let pool = |enabled: bool, chars: &str| -> Vec<char> {
            if enabled {
                chars.chars().filter(|c| keep(c)).collect()
            } else {
                Vec::new()
            }
        };

        let mut pools = CharacterPools {
            lowercase: pool(options.include_lowercase, LOWERCASE_CHARS),
            uppercase: pool(options.include_uppercase, UPPERCASE_CHARS),
            numbers: pool(options.include_numbers, NUMBER_CHARS),
            symbols: pool(options.include_symbols, SYMBOL_CHARS),
            custom: options.custom_characters.chars().filter(|c| keep(c)).collect(),
            available: Vec::new(),
            fallback: false,
        };

        pools.available = [
            &pools.lowercase,
            &pools.uppercase,
            &pools.numbers,
            &pools.symbols,
            &pools.custom,
        ]
        .iter()
        .flat_map(|p| p.iter().copied())
        .collect();

        if pools.available.is_empty() {
            pools.fallback = true;
            let default_pool = || LOWERCASE_CHARS.chars().chain(UPPERCASE_CHARS.chars()).chain(NUMBER_CHARS.chars());
            pools.available = default_pool().filter(|c| keep(c)).collect();

            if pools.available.is_empty() {
                log::warn!("Exclusions remove every default character; using the unfiltered default pool");
                pools.available = default_pool().collect();
            } else {
                log::debug!("No usable character source selected; using the default pool");
            }
        }

        pools
    }

    /// Every character eligible for the random fill.
    pub fn available(&self) -> &[char] {
        &self.available
    }

    /// Whether the default pool replaced an empty selection.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Non-empty category pools that must each contribute one character.
    pub fn required_pools(&self) -> impl Iterator<Item = &[char]> {
        [&self.lowercase, &self.uppercase, &self.numbers, &self.symbols]
            .into_iter()
            .filter(|p| !p.is_empty())
            .map(|p| p.as_slice())
    }

    /// Number of distinct categories represented in the available pool.
    pub fn category_span(&self) -> usize {
        let mut seen: Vec<CharCategory> = Vec::with_capacity(4);
        for c in &self.available {
            let category = CharCategory::of(*c);
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen.len()
    }
}
