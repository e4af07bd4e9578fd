//! RNG module - secret number generation
//!
//! A small LCG is enough for picking a secret: the game needs uniform draws
//! over a bounded range, not cryptographic strength. Keeping the generator in
//! crate means a seed fully determines a model, which the tests rely on.

use std::time::{SystemTime, UNIX_EPOCH};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG seeded from the clock and the process id.
    pub fn from_entropy() -> Self {
        Self::new(seed_from_time())
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a value in the inclusive range `[low, high]`.
    ///
    /// Uses the high bits of the LCG output (multiply-shift), since the low
    /// bits of a power-of-two LCG cycle with a short period.
    ///
    /// `low` must not exceed `high`.
    pub fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
        debug_assert!(low <= high);
        let span = (i64::from(high) - i64::from(low) + 1) as u64;
        let offset = (u64::from(self.next_u32()) * span) >> 32;
        (i64::from(low) + offset as i64) as i32
    }
}

/// Seed derived from wall-clock time and the process id.
///
/// Different processes (and different runs of the same binary) get different
/// secrets.
pub fn seed_from_time() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1);
    nanos ^ std::process::id().rotate_left(16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_range_stays_inside_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_in_range(-3, 4);
            assert!((-3..=4).contains(&v), "{v} escaped [-3, 4]");
        }
    }

    #[test]
    fn test_range_hits_every_value() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 6];
        for _ in 0..1_000 {
            let v = rng.next_in_range(10, 15);
            seen[(v - 10) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "not every value drawn: {seen:?}");
    }

    #[test]
    fn test_two_value_range_is_not_alternating() {
        // The low bit of the raw LCG output strictly alternates; the range
        // draw must not inherit that pattern.
        let mut rng = SimpleRng::new(3);
        let draws: Vec<i32> = (0..64).map(|_| rng.next_in_range(0, 1)).collect();
        let alternating = draws.windows(2).all(|w| w[0] != w[1]);
        assert!(!alternating);
    }

    #[test]
    fn test_full_i32_range() {
        let mut rng = SimpleRng::new(42);
        for _ in 0..1_000 {
            // Must not overflow.
            let _ = rng.next_in_range(i32::MIN, i32::MAX);
        }
    }

    #[test]
    fn test_single_value_range() {
        let mut rng = SimpleRng::new(5);
        assert_eq!(rng.next_in_range(8, 8), 8);
    }
}
