//! Inner frame bands and the outer vignette.

use crate::foundation::math::{V2, V3, mix, smoothstep};
use crate::random::hash::rand01;

pub(crate) const MAX_FRAME_BANDS: usize = 4;
const SALT: u32 = 0xf7a3;
const EDGE: f32 = 0.0015;

#[derive(Clone, Copy, Debug, Default)]
struct Band {
    offset: f32,
    thickness: f32,
    tint: V3,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct FramePlan {
    bands: [Band; MAX_FRAME_BANDS],
    count: usize,
    outer: f32,
}

impl FramePlan {
    pub(crate) fn new(seed: u32, frame: f64, frame_bands: f64) -> Self {
        let mut bands = [Band::default(); MAX_FRAME_BANDS];
        for (k, band) in bands.iter_mut().enumerate() {
            let r = |j: u32| rand01(&[seed, SALT, k as u32, j]);
            *band = Band {
                offset: 0.02 + 0.025 * k as f32 + r(0) * 0.012,
                thickness: 0.004 + r(1) * 0.008,
                tint: V3::new(r(2) - 0.5, r(3) - 0.5, r(4) - 0.5) * 0.16,
            };
        }
        Self {
            bands,
            count: (frame_bands.round().max(0.0) as usize).min(MAX_FRAME_BANDS),
            outer: 0.03 + frame.max(0.0) as f32 * 0.08,
        }
    }

    pub(crate) fn apply(&self, col: V3, uv: V2) -> V3 {
        let edge = uv.x.min(1.0 - uv.x).min(uv.y.min(1.0 - uv.y));
        let mut col = col;
        for band in &self.bands[..self.count] {
            let lo = band.offset;
            let hi = band.offset + band.thickness;
            let inside = smoothstep(lo - EDGE, lo + EDGE, edge) - smoothstep(hi - EDGE, hi + EDGE, edge);
            col += band.tint * inside.clamp(0.0, 1.0);
            col = col * mix(0.93, 1.0, smoothstep(lo - 2.0 * EDGE, lo, edge));
        }
        col * mix(0.24, 1.0, smoothstep(0.0, self.outer, edge))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/frame.rs"]
mod tests;
