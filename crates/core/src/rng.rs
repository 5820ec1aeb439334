//! RNG module - injectable uniform randomness for dealing boards
//!
//! The board never reaches for ambient randomness. It draws from a
//! [`RandomSource`]. The provided one is the deterministic [`SimpleRng`]
//! (seeded, for replays and tests); `rand` only supplies entropy for seeds.

use rand::Rng;

/// Source of uniform random integers
pub trait RandomSource {
    /// Uniform value in `[0, bound)`. `bound` must be non-zero.
    fn below(&mut self, bound: u32) -> u32;

    /// Shuffle a slice in place using Fisher-Yates
    ///
    /// Walks `i` from `len - 1` down to `1`, swapping with a uniform `j` in `[0, i]`.
    fn shuffle<T>(&mut self, slice: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..slice.len()).rev() {
            let j = self.below((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes, with a murmur3 finalizer on output
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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);

        // Raw LCG low bits have period 2^k; the finalizer spreads every state
        // bit over the output.
        let mut x = self.state;
        x ^= x >> 16;
        x = x.wrapping_mul(0x85eb_ca6b);
        x ^= x >> 13;
        x = x.wrapping_mul(0xc2b2_ae35);
        x ^= x >> 16;
        x
    }

    /// Generate random value in range [0, max) without bias
    ///
    /// Multiply-shift with rejection (Lemire), so the result comes from the
    /// high bits of the product.
    pub fn next_range(&mut self, max: u32) -> u32 {
        let mut m = u64::from(self.next_u32()) * u64::from(max);
        if (m as u32) < max {
            // 2^32 mod max
            let threshold = max.wrapping_neg() % max;
            while (m as u32) < threshold {
                m = u64::from(self.next_u32()) * u64::from(max);
            }
        }
        (m >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn below(&mut self, bound: u32) -> u32 {
        self.next_range(bound)
    }
}

/// Fresh seed from OS-backed entropy, for seeding a [`SimpleRng`]
pub fn entropy_seed() -> u32 {
    rand::rng().random::<u32>()
}
