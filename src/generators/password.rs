// src/generators/password.rs
use crate::models::PasswordOptions;

use super::charset::CharacterPools;
use super::patterns;
use super::random::{self, OsRandom, RandomSource, SecurityTier};
use super::strength::MAX_PASSWORD_LENGTH;
use super::{GeneratorError, Result};

pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Hard ceiling on generated length. Lengths between
/// `MAX_PASSWORD_LENGTH` and this value are still produced.
pub const LENGTH_LIMIT: usize = 1 << 16;

pub struct PasswordGenerator<R: RandomSource = OsRandom> {
    source: R,
    max_attempts: usize,
    minimum_tier: SecurityTier,
}

impl PasswordGenerator<OsRandom> {
    pub fn new() -> Self {
        PasswordGenerator::with_source(OsRandom)
    }
}

impl Default for PasswordGenerator<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    pub fn with_source(source: R) -> Self {
        Self {
            source,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            minimum_tier: SecurityTier::Cryptographic,
        }
    }

    /// Bound on shuffles spent avoiding weak patterns. At least one shuffle
    /// always happens.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Accept sources below the cryptographic tier.
    pub fn allow_best_effort(mut self) -> Self {
        self.minimum_tier = SecurityTier::BestEffort;
        self
    }

    pub fn source_tier(&self) -> SecurityTier {
        self.source.tier()
    }

    fn ensure_tier(&self) -> Result<()> {
        let tier = self.source.tier();
        if tier < self.minimum_tier {
            return Err(GeneratorError::WeakRandomSource { tier });
        }
        Ok(())
    }

    /// Generate one password of exactly `options.length` characters.
    ///
    /// Each enabled category with a non-empty pool contributes at least one
    /// character. Degenerate options fall back to the default pool rather
    /// than failing. Only lengths past `LENGTH_LIMIT` are refused.
    pub fn generate_password(&mut self, options: &PasswordOptions) -> Result<String> {
        self.ensure_tier()?;

        let length = options.length;
        if length > LENGTH_LIMIT {
            return Err(GeneratorError::LengthTooLarge { length, limit: LENGTH_LIMIT });
        }

        let pools = CharacterPools::from_options(options);

        let mut chars: Vec<char> = Vec::with_capacity(length.min(MAX_PASSWORD_LENGTH));
        for pool in pools.required_pools() {
            if let Some(c) = random::choose(&mut self.source, pool)? {
                chars.push(c);
            }
        }

        if chars.len() > length {
            // Too short to hold one of each category; keep a random subset
            random::shuffle(&mut self.source, &mut chars)?;
            chars.truncate(length);
        }

        let available = pools.available();
        debug_assert!(!available.is_empty(), "fallback pool is never empty");
        while chars.len() < length {
            match random::choose(&mut self.source, available)? {
                Some(c) => chars.push(c),
                None => break,
            }
        }

        let span = pools.category_span();
        for attempt in 1..=self.max_attempts {
            random::shuffle(&mut self.source, &mut chars)?;
            if !patterns::is_weak_candidate(&chars, span) {
                break;
            }
            if attempt == self.max_attempts {
                log::debug!("Weak pattern persisted after {} shuffles; keeping last candidate", attempt);
            }
        }

        Ok(chars.into_iter().collect())
    }

    /// Generate `count` independent passwords.
    pub fn generate_multiple(&mut self, options: &PasswordOptions, count: usize) -> Result<Vec<String>> {
        (0..count).map(|_| self.generate_password(options)).collect()
    }
}

/// Generate a password from the OS random source.
pub fn generate_password(options: &PasswordOptions) -> Result<String> {
    PasswordGenerator::new().generate_password(options)
}

/// Generate `count` passwords from the OS random source.
pub fn generate_multiple_passwords(options: &PasswordOptions, count: usize) -> Result<Vec<String>> {
    PasswordGenerator::new().generate_multiple(options, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::charset::{AMBIGUOUS_CHARS, LOWERCASE_CHARS, NUMBER_CHARS, SYMBOL_CHARS, UPPERCASE_CHARS};
    use crate::generators::random::SeededRandom;
    use std::collections::HashSet;

    fn options(length: usize) -> PasswordOptions {
        PasswordOptions {
            length,
            ..PasswordOptions::default()
        }
    }

    fn lowercase_only(length: usize) -> PasswordOptions {
        PasswordOptions {
            length,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            ..PasswordOptions::default()
        }
    }

    #[test]
    fn generates_exact_length() {
        for length in [4, 5, 12, 16, 64, 128] {
            let password = generate_password(&options(length)).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn lowercase_only_scenario() {
        let password = generate_password(&lowercase_only(20)).unwrap();
        assert_eq!(password.len(), 20);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()), "{password}");
    }

    #[test]
    fn every_enabled_category_is_present() {
        let mut generator = PasswordGenerator::new();
        for _ in 0..50 {
            let password = generator.generate_password(&options(4)).unwrap();
            assert!(password.chars().any(|c| LOWERCASE_CHARS.contains(c)), "{password}");
            assert!(password.chars().any(|c| UPPERCASE_CHARS.contains(c)), "{password}");
            assert!(password.chars().any(|c| NUMBER_CHARS.contains(c)), "{password}");
            assert!(password.chars().any(|c| SYMBOL_CHARS.contains(c)), "{password}");
        }
    }

    #[test]
    fn never_emits_excluded_or_ambiguous_characters() {
        let opts = PasswordOptions {
            length: 50,
            exclude_ambiguous: true,
            exclude_characters: "aA2#".to_string(),
            ..PasswordOptions::default()
        };
        for password in generate_multiple_passwords(&opts, 20).unwrap() {
            assert!(!password.chars().any(|c| AMBIGUOUS_CHARS.contains(c)), "{password}");
            assert!(!password.chars().any(|c| "aA2#".contains(c)), "{password}");
        }
    }

    #[test]
    fn custom_characters_join_the_pool() {
        let opts = PasswordOptions {
            length: 12,
            include_lowercase: false,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            custom_characters: "ж".to_string(),
            ..PasswordOptions::default()
        };
        let password = generate_password(&opts).unwrap();
        assert_eq!(password, "ж".repeat(12));
    }

    #[test]
    fn empty_selection_uses_default_pool() {
        let opts = PasswordOptions {
            length: 10,
            include_lowercase: false,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            ..PasswordOptions::default()
        };
        let password = generate_password(&opts).unwrap();
        assert_eq!(password.len(), 10);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn short_lengths_are_honoured() {
        assert_eq!(generate_password(&options(0)).unwrap(), "");
        assert_eq!(generate_password(&options(2)).unwrap().chars().count(), 2);
    }

    #[test]
    fn batches_are_statistically_unique() {
        let passwords = generate_multiple_passwords(&options(12), 100).unwrap();
        assert_eq!(passwords.len(), 100);
        let unique: HashSet<_> = passwords.iter().collect();
        assert!(unique.len() >= 95);
    }

    #[test]
    fn shuffled_output_avoids_weak_patterns() {
        let opts = options(16);
        let span = CharacterPools::from_options(&opts).category_span();
        for password in generate_multiple_passwords(&opts, 50).unwrap() {
            let chars: Vec<char> = password.chars().collect();
            assert!(!patterns::is_weak_candidate(&chars, span), "{password}");
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a = PasswordGenerator::with_source(SeededRandom::from_seed(2024)).allow_best_effort();
        let mut b = PasswordGenerator::with_source(SeededRandom::from_seed(2024)).allow_best_effort();
        assert_eq!(
            a.generate_password(&options(24)).unwrap(),
            b.generate_password(&options(24)).unwrap()
        );
    }

    #[test]
    fn best_effort_source_is_rejected_by_default() {
        let mut generator = PasswordGenerator::with_source(SeededRandom::from_seed(1));
        match generator.generate_password(&options(12)) {
            Err(GeneratorError::WeakRandomSource { tier }) => assert_eq!(tier, SecurityTier::BestEffort),
            other => panic!("expected WeakRandomSource, got {:?}", other),
        }
    }

    #[test]
    fn oversized_lengths_are_refused_without_panicking() {
        let result = std::panic::catch_unwind(|| generate_password(&options(usize::MAX)));
        match result {
            Ok(Err(GeneratorError::LengthTooLarge { length, limit })) => {
                assert_eq!(length, usize::MAX);
                assert_eq!(limit, LENGTH_LIMIT);
            }
            other => panic!("expected LengthTooLarge, got {:?}", other.map(|r| r.map(|p| p.len()))),
        }
        assert!(matches!(
            generate_password(&options(LENGTH_LIMIT + 1)),
            Err(GeneratorError::LengthTooLarge { .. })
        ));

        // past the advisory maximum but under the hard limit still works
        let long = generate_password(&options(MAX_PASSWORD_LENGTH * 2)).unwrap();
        assert_eq!(long.chars().count(), MAX_PASSWORD_LENGTH * 2);
    }

    /// Source whose backing generator has gone away.
    struct Unavailable;

    impl RandomSource for Unavailable {
        fn tier(&self) -> SecurityTier {
            SecurityTier::Cryptographic
        }

        fn next_u32(&mut self) -> Result<u32> {
            Err(GeneratorError::RandomUnavailable("entropy source closed".to_string()))
        }
    }

    #[test]
    fn failing_source_fails_closed() {
        let mut generator = PasswordGenerator::with_source(Unavailable).allow_best_effort();
        match generator.generate_password(&options(16)) {
            Err(GeneratorError::RandomUnavailable(reason)) => assert_eq!(reason, "entropy source closed"),
            other => panic!("expected RandomUnavailable, got {:?}", other),
        }
        assert!(matches!(
            generator.generate_multiple(&options(16), 3),
            Err(GeneratorError::RandomUnavailable(_))
        ));

        // the fill and shuffle steps fail too, not only the required draws
        let fallback_only = PasswordOptions {
            length: 8,
            include_lowercase: false,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            ..PasswordOptions::default()
        };
        assert!(matches!(
            generator.generate_password(&fallback_only),
            Err(GeneratorError::RandomUnavailable(_))
        ));
    }

    #[test]
    fn single_attempt_still_shuffles() {
        let mut generator = PasswordGenerator::with_source(SeededRandom::from_seed(5))
            .allow_best_effort()
            .max_attempts(0);
        let password = generator.generate_password(&options(8)).unwrap();
        assert_eq!(password.chars().count(), 8);
    }
}
