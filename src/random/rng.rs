/// Minimal 32-bit linear congruential generator.
///
/// `state <- 1664525 * state + 1013904223 (mod 2^32)`, and every draw is `state / (2^32 - 1)`.
/// The sequence for a given seed is part of the reproducibility contract: sampled batches,
/// mutations and the manifest seeds all depend on it, so the constants never change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// LCG multiplier.
    pub const MULTIPLIER: u32 = 1_664_525;
    /// LCG increment.
    pub const INCREMENT: u32 = 1_013_904_223;

    /// Create a generator seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Create a generator from a wider seed, keeping only the low 32 bits.
    pub fn from_u64(seed: u64) -> Self {
        Self::new((seed & 0xffff_ffff) as u32)
    }

    /// Advance and return the next draw in `[0, 1]`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = Self::MULTIPLIER
            .wrapping_mul(self.state)
            .wrapping_add(Self::INCREMENT);
        f64::from(self.state) / f64::from(u32::MAX)
    }

    /// Uniform draw in `[min, max]`.
    pub fn float(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }

    /// Uniform draw in `[-1, 1]`.
    pub fn signed(&mut self) -> f64 {
        self.next_f64() * 2.0 - 1.0
    }

    /// Uniform integer in `[min, max]` (inclusive on both ends).
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        let v = self.float(min as f64, max as f64 + 1.0).floor() as i64;
        // a draw of exactly 1.0 lands on max + 1
        v.min(max)
    }

    /// Uniformly pick one element; `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = (self.next_f64() * items.len() as f64).floor() as usize;
        items.get(idx.min(items.len() - 1))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/random/rng.rs"]
mod tests;
