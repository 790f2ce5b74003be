//! Cosine palette, chromatic split and gloss.

use crate::foundation::math::{TAU, V2, V3};
use crate::schema::palette::Palette;

const SPLIT_REACH: f32 = 0.012;
const GLOSS_TINT: V3 = V3::new(0.35, 0.25, 0.18);

/// `a + b * cos(TAU * (c * t + d))` per channel.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CosinePalette {
    a: V3,
    b: V3,
    c: V3,
    d: V3,
}

impl CosinePalette {
    pub(crate) fn new(palette: &Palette) -> Self {
        Self {
            a: V3::from_f64(palette.pal_a),
            b: V3::from_f64(palette.pal_b),
            c: V3::from_f64(palette.pal_c),
            d: V3::from_f64(palette.pal_d),
        }
    }

    fn channel(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
        a + b * (TAU * (c * t + d)).cos()
    }

    /// Map per-channel signals (already phase-shifted) to color.
    pub(crate) fn eval(&self, t: V3) -> V3 {
        V3::new(
            Self::channel(self.a.x, self.b.x, self.c.x, self.d.x, t.x),
            Self::channel(self.a.y, self.b.y, self.c.y, self.d.y, t.y),
            Self::channel(self.a.z, self.b.z, self.c.z, self.d.z, t.z),
        )
    }
}

/// Per-channel signal with red and blue pushed apart along `dir`.
///
/// `grad` is the signal change per pixel; `px` is one pixel in uv units.
pub(crate) fn split_channels(signal: f32, grad: V2, dir: V2, amount: f32, px: V2) -> V3 {
    let reach = dir.mul_xy(V2::new(1.0 / px.x, 1.0 / px.y)) * (amount * SPLIT_REACH);
    let ds = grad.dot(reach);
    V3::new(signal + ds, signal, signal - ds).map(|v| v.clamp(-1.5, 1.5))
}

/// Warm specular highlight from the per-pixel signal gradient.
pub(crate) fn apply_gloss(col: V3, grad: V2, gloss: f32) -> V3 {
    let highlight = (grad.length() * 2.0).clamp(0.0, 1.0).powf(1.4) * gloss;
    (col + GLOSS_TINT * highlight) * (1.0 + highlight * 1.2)
}

#[cfg(test)]
#[path = "../../tests/unit/synth/palette.rs"]
mod tests;
