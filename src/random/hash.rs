/// 32-bit FNV-1a accumulator.
#[derive(Clone, Copy, Debug)]
pub struct Fnv1a32(u32);

impl Fnv1a32 {
    /// Standard FNV-1a 32-bit offset basis.
    pub const OFFSET_BASIS: u32 = 2_166_136_261;
    const PRIME: u32 = 16_777_619;

    /// Start from the standard offset basis.
    pub fn new() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    /// Fold one byte.
    pub fn write_u8(&mut self, v: u8) {
        self.0 = (self.0 ^ u32::from(v)).wrapping_mul(Self::PRIME);
    }

    /// Fold the 4 bytes of `v`, least significant first.
    pub fn write_u32(&mut self, v: u32) {
        for b in v.to_le_bytes() {
            self.write_u8(b);
        }
    }

    /// Fold raw bytes in order.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_u8(b);
        }
    }

    /// Current hash value.
    pub fn finish(self) -> u32 {
        self.0
    }
}

impl Default for Fnv1a32 {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold an ordered sequence of 32-bit parts into one seed.
///
/// Order-sensitive: `hash_seed(&[a, b])` and `hash_seed(&[b, a])` differ in general. Batch item
/// `i` of a batch seeded with `s` uses `hash_seed(&[s, i + 1])`.
pub fn hash_seed(parts: &[u32]) -> u32 {
    let mut h = Fnv1a32::new();
    for &p in parts {
        h.write_u32(p);
    }
    h.finish()
}

/// Single-precision sine hash: `fract(sin(p * 127.1 + 311.7) * 43758.5453123)`.
pub fn hash11(p: f32) -> f32 {
    let v = (p * 127.1 + 311.7).sin() * 43_758.547;
    v - v.floor()
}

/// Deterministic `[0, 1)` value for a seed and small integer salts.
///
/// The parts are folded with [`hash_seed`] first so neighbouring salts decorrelate, then the low
/// 16 bits feed [`hash11`] at a magnitude where `f32` still resolves every step.
pub(crate) fn rand01(parts: &[u32]) -> f32 {
    let h = hash_seed(parts);
    hash11((h & 0xffff) as f32 / 64.0 + (h >> 16) as f32 / 65_536.0)
}

#[cfg(test)]
#[path = "../../tests/unit/random/hash.rs"]
mod tests;
