// src/generators/random.rs
use rand::rngs::OsRng;
use rand::RngCore;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use super::{GeneratorError, Result};

/// How much a random source can be trusted for secret material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SecurityTier {
    BestEffort,
    Cryptographic,
}

impl fmt::Display for SecurityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityTier::BestEffort => write!(f, "best-effort"),
            SecurityTier::Cryptographic => write!(f, "cryptographic"),
        }
    }
}

/// A capability that yields uniformly distributed 32-bit words.
pub trait RandomSource {
    fn tier(&self) -> SecurityTier;

    fn next_u32(&mut self) -> Result<u32>;
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn tier(&self) -> SecurityTier {
        (**self).tier()
    }

    fn next_u32(&mut self) -> Result<u32> {
        (**self).next_u32()
    }
}

/// Operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn tier(&self) -> SecurityTier {
        SecurityTier::Cryptographic
    }

    fn next_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| GeneratorError::RandomUnavailable(e.to_string()))?;
        Ok(u32::from_le_bytes(buf))
    }
}

/// ChaCha20 stream from a caller-supplied seed. Reproducible, so never
/// trusted above `BestEffort`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha20Rng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn tier(&self) -> SecurityTier {
        SecurityTier::BestEffort
    }

    fn next_u32(&mut self) -> Result<u32> {
        Ok(self.rng.next_u32())
    }
}

pub type DynRandomSource = Box<dyn RandomSource + Send>;

/// Pick the random source once at startup.
///
/// The OS generator is probed first. If it fails and `allow_best_effort` is
/// set, a clock-seeded ChaCha stream is returned instead; otherwise the
/// failure is reported.
pub fn select_random_source(allow_best_effort: bool) -> Result<DynRandomSource> {
    let mut os = OsRandom;
    match os.next_u32() {
        Ok(_) => {
            log::debug!("Using OS random source");
            Ok(Box::new(os))
        }
        Err(e) if allow_best_effort => {
            log::warn!("OS random source unavailable ({}); falling back to a best-effort generator", e);
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default();
            Ok(Box::new(SeededRandom::from_seed(nanos ^ u64::from(std::process::id()))))
        }
        Err(e) => {
            log::error!("OS random source unavailable: {}", e);
            Err(e)
        }
    }
}

/// Uniform integer in `[0, max)` without modulo bias.
///
/// Draws outside the largest multiple of `max` that fits in the draw range
/// are discarded. Bounds above `u32::MAX` draw 64-bit words. `max == 0`
/// yields 0.
pub fn random_below<R: RandomSource + ?Sized>(source: &mut R, max: usize) -> Result<usize> {
    if max <= 1 {
        return Ok(0);
    }
    let max = max as u64;
    if max > u64::from(u32::MAX) {
        // 2^64 mod max; draws below this fall in the biased tail
        let threshold = max.wrapping_neg() % max;
        loop {
            let draw = (u64::from(source.next_u32()?) << 32) | u64::from(source.next_u32()?);
            if draw >= threshold {
                return Ok((draw % max) as usize);
            }
        }
    }
    let range = 1u64 << 32;
    let limit = (range / max) * max;
    loop {
        let draw = u64::from(source.next_u32()?);
        if draw < limit {
            return Ok((draw % max) as usize);
        }
    }
}

/// Draw one element uniformly. Returns `None` for an empty slice.
pub fn choose<T: Copy, R: RandomSource + ?Sized>(source: &mut R, items: &[T]) -> Result<Option<T>> {
    if items.is_empty() {
        return Ok(None);
    }
    Ok(Some(items[random_below(source, items.len())?]))
}

/// Fisher-Yates shuffle.
pub fn shuffle<T, R: RandomSource + ?Sized>(source: &mut R, items: &mut [T]) -> Result<()> {
    for i in (1..items.len()).rev() {
        let j = random_below(source, i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed sequence of words.
    struct Scripted(Vec<u32>);

    impl RandomSource for Scripted {
        fn tier(&self) -> SecurityTier {
            SecurityTier::BestEffort
        }

        fn next_u32(&mut self) -> Result<u32> {
            Ok(self.0.remove(0))
        }
    }

    #[test]
    fn random_below_stays_in_range() {
        let mut source = SeededRandom::from_seed(7);
        for max in [1usize, 2, 3, 10, 26, 94, 1000] {
            for _ in 0..200 {
                assert!(random_below(&mut source, max).unwrap() < max);
            }
        }
        assert_eq!(random_below(&mut source, 0).unwrap(), 0);
    }

    #[test]
    fn random_below_rejects_biased_tail() {
        // limit for max = 3 is 4294967295 (u32::MAX); u32::MAX itself is rejected
        let mut source = Scripted(vec![u32::MAX, 5]);
        assert_eq!(random_below(&mut source, 3).unwrap(), 2);
        assert!(source.0.is_empty());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn random_below_handles_bounds_past_u32() {
        let mut source = SeededRandom::from_seed(11);
        let max = (1usize << 33) + 7;
        for _ in 0..200 {
            assert!(random_below(&mut source, max).unwrap() < max);
        }

        // high word 0 and low word 0 land in the biased tail for 2^33 + 7
        let mut scripted = Scripted(vec![0, 0, 1, 5]);
        assert_eq!(random_below(&mut scripted, max).unwrap(), ((1u64 << 32) | 5) as usize);
        assert!(scripted.0.is_empty());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut source = SeededRandom::from_seed(42);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut source, &mut items).unwrap();
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let mut a = SeededRandom::from_seed(99);
        let mut b = SeededRandom::from_seed(99);
        for _ in 0..16 {
            assert_eq!(a.next_u32().unwrap(), b.next_u32().unwrap());
        }
    }

    #[test]
    fn choose_handles_empty_slice() {
        let mut source = SeededRandom::from_seed(1);
        let empty: [char; 0] = [];
        assert_eq!(choose(&mut source, &empty).unwrap(), None);
        assert_eq!(choose(&mut source, &['x']).unwrap(), Some('x'));
    }

    #[test]
    fn os_source_is_cryptographic() {
        let mut source = select_random_source(false).unwrap();
        assert_eq!(source.tier(), SecurityTier::Cryptographic);
        assert!(source.next_u32().is_ok());
    }
}
