use crate::foundation::core::{Range, Rgb};
use crate::foundation::error::ProcgenResult;

/// Cosine-palette coefficients: `color = a + b * cos(2π (c * t + d))` per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Base color.
    pub pal_a: Rgb,
    /// Amplitude.
    pub pal_b: Rgb,
    /// Frequency.
    pub pal_c: Rgb,
    /// Phase.
    pub pal_d: Rgb,
}

impl Palette {
    /// Triples in sampling order (A, B, C, D).
    pub fn triples(&self) -> [&Rgb; 4] {
        [&self.pal_a, &self.pal_b, &self.pal_c, &self.pal_d]
    }
}

/// Per-channel ranges for each palette triple.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PaletteRanges {
    /// Ranges for the base color.
    pub pal_a: [Range; 3],
    /// Ranges for the amplitude.
    pub pal_b: [Range; 3],
    /// Ranges for the frequency.
    pub pal_c: [Range; 3],
    /// Ranges for the phase.
    pub pal_d: [Range; 3],
}

impl PaletteRanges {
    /// Triples in sampling order (A, B, C, D).
    pub fn triples(&self) -> [&[Range; 3]; 4] {
        [&self.pal_a, &self.pal_b, &self.pal_c, &self.pal_d]
    }

    /// Validate every channel range.
    pub fn validate(&self) -> ProcgenResult<()> {
        const NAMES: [&str; 4] = ["pal_a", "pal_b", "pal_c", "pal_d"];
        for (name, triple) in NAMES.iter().zip(self.triples()) {
            for (ch, r) in ["r", "g", "b"].iter().zip(triple) {
                r.validate(&format!("palette '{name}.{ch}'"))?;
            }
        }
        Ok(())
    }

    /// Whether every channel of `palette` lies inside its range.
    pub fn contains(&self, palette: &Palette) -> bool {
        self.triples()
            .iter()
            .zip(palette.triples())
            .all(|(ranges, values)| ranges.iter().zip(values).all(|(r, v)| r.contains(*v)))
    }
}

/// The "stable iridescent" ranges shared by every built-in preset.
pub const STABLE_IRIDESCENT: PaletteRanges = PaletteRanges {
    pal_a: [Range::of(0.38, 0.58), Range::of(0.35, 0.56), Range::of(0.4, 0.62)],
    pal_b: [Range::of(0.3, 0.58), Range::of(0.25, 0.5), Range::of(0.35, 0.6)],
    pal_c: [Range::of(0.65, 1.5), Range::of(0.75, 1.65), Range::of(0.6, 1.45)],
    pal_d: [Range::of(0.05, 0.95), Range::of(0.15, 1.1), Range::of(0.05, 1.2)],
};
