//! Blend operators for composition stages.

/// Operator combining the running signal with an auxiliary signal, both in `[-1, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// Average of the two.
    Mix,
    /// Weighted sum, clamped.
    Add,
    /// Scaled product, clamped.
    Multiply,
    /// Screen in `[0, 1]` space.
    Screen,
    /// Component maximum.
    Max,
}

impl BlendMode {
    /// All modes in selector order.
    pub const ALL: [BlendMode; 5] = [
        BlendMode::Mix,
        BlendMode::Add,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Max,
    ];

    /// Mode at `index` modulo the mode count.
    pub fn from_index(index: u32) -> Self {
        Self::ALL[index as usize % Self::ALL.len()]
    }

    /// Mode for a continuous `blend_mode` parameter (rounded, negative maps to [`BlendMode::Mix`]).
    pub fn from_selector(v: f64) -> Self {
        Self::from_index(v.round().max(0.0) as u32)
    }

    /// Position in [`BlendMode::ALL`].
    pub fn index(self) -> u32 {
        self as u32
    }

    pub(crate) fn apply(self, a: f32, b: f32, add_weight: f32) -> f32 {
        match self {
            BlendMode::Mix => 0.5 * (a + b),
            BlendMode::Add => (a + b * add_weight).clamp(-1.0, 1.0),
            BlendMode::Multiply => (a * b * 1.8).clamp(-1.0, 1.0),
            BlendMode::Screen => {
                let a01 = a * 0.5 + 0.5;
                let b01 = b * 0.5 + 0.5;
                (1.0 - (1.0 - a01) * (1.0 - b01)) * 2.0 - 1.0
            }
            BlendMode::Max => a.max(b),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/blend.rs"]
mod tests;
