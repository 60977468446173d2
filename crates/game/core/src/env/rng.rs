//! RNG oracle for seedable random number generation.
//!
//! Every random decision in generation and combat (trait draws, rarity rolls,
//! crit checks, target picks, passive procs) goes through [`RngOracle`], so a
//! caller that injects a seeded generator gets a reproducible run.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed,
//! they must produce the same sequence of random numbers. This is what makes
//! seeded battles replayable in tests.

use rand::RngCore;
use rand::rngs::StdRng;

/// RNG oracle for random number generation.
///
/// The trait is object safe; combat strategies receive `&mut dyn RngOracle`.
pub trait RngOracle {
    /// Advance the generator and return the next 32 random bits.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Returns true with probability `probability`.
    ///
    /// Mirrors the `roll < p` idiom: `chance(0.0)` never fires and
    /// `chance(1.0)` always fires.
    fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }

    /// Uniform index into a collection of `len` elements.
    ///
    /// Returns 0 for an empty collection; callers guard emptiness themselves.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.unit() * len as f64) as usize).min(len - 1)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG is a family of simple, fast, space-efficient RNGs with excellent
/// statistical quality. This implementation uses PCG-XSH-RR, which produces
/// 32-bit output from 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same sequence
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from an explicit seed.
    pub fn new(seed: u64) -> Self {
        let mut rng = Self {
            state: Self::pcg_step(seed.wrapping_add(Self::INCREMENT)),
        };
        // Discard the first output so nearby seeds diverge immediately.
        rng.next_u32();
        rng
    }

    /// Creates a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

impl RngOracle for StdRng {
    fn next_u32(&mut self) -> u32 {
        RngCore::next_u32(self)
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn unit(&mut self) -> f64 {
        (**self).unit()
    }
}

/// Replays a fixed sequence of unit values, cycling when exhausted.
///
/// Useful for pinning individual rolls in tests and tooling.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    /// Creates a generator that yields `values` (each clamped to `[0, 1)`).
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.unit() * (f64::from(u32::MAX) + 1.0)) as u32
    }

    fn unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 0.999_999_999)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PcgRng::new(42);
        let mut b = PcgRng::new(42);
        let left: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
        let right: Vec<u32> = (0..16).map(|_| b.next_u32()).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = PcgRng::new(1);
        let mut b = PcgRng::new(2);
        let left: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let right: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(left, right);
    }

    #[test]
    fn unit_stays_in_half_open_range() {
        let mut rng = PcgRng::new(7);
        for _ in 0..10_000 {
            let value = rng.unit();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn index_is_bounded() {
        let mut rng = PcgRng::new(99);
        for _ in 0..1_000 {
            assert!(rng.index(3) < 3);
        }
        assert_eq!(rng.index(0), 0);
    }

    #[test]
    fn scripted_rng_replays_values() {
        let mut rng = ScriptedRng::new(vec![0.1, 0.9]);
        assert!(rng.chance(0.2));
        assert!(!rng.chance(0.5));
        assert!(rng.chance(0.2));
        assert_eq!(rng.index(10), 9);
    }
}
