//! Hashed graphic masks: a vertical band, a rectangle, a checker grid and a diagonal split.

use crate::foundation::math::{TAU, V2, mix, smoothstep, step};
use crate::random::hash::rand01;

const SALT: u32 = 0x50a1;

/// Mask shapes in the order `panels` enables them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKind {
    /// Vertical stripe across the full height.
    Band,
    /// Axis-aligned rectangle.
    Rect,
    /// Checkerboard over a small grid.
    Grid,
    /// Half-plane split along a hashed line.
    Diagonal,
}

impl PanelKind {
    /// All kinds, in enable order.
    pub const ALL: [PanelKind; 4] = [
        PanelKind::Band,
        PanelKind::Rect,
        PanelKind::Grid,
        PanelKind::Diagonal,
    ];

    /// How much a shape counts towards quantization strength.
    fn graphic_weight(self) -> f32 {
        match self {
            PanelKind::Band => 0.4,
            PanelKind::Rect | PanelKind::Grid | PanelKind::Diagonal => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PanelSample {
    /// Combined coverage in `[0, 1]`, scaled by hardness.
    pub(crate) mask: f32,
    /// Coverage weighted towards the rect/grid/diagonal shapes.
    pub(crate) graphic: f32,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct PanelMasks {
    active: usize,
    strength: f32,
    soft: f32,
    band: (f32, f32),
    rect_min: V2,
    rect_max: V2,
    grid_cells: f32,
    diag_normal: V2,
    diag_origin: V2,
}

impl PanelMasks {
    pub(crate) fn new(seed: u32, panels: f64, hard: f64) -> Self {
        let r = |k: u32| rand01(&[seed, SALT, k]);
        let hard = hard.clamp(0.0, 1.0) as f32;

        let band_x = 0.1 + r(0) * 0.5;
        let band_w = 0.08 + r(1) * 0.22;
        let centre = V2::new(0.25 + r(2) * 0.5, 0.25 + r(3) * 0.5);
        let half = V2::new(0.12 + r(4) * 0.2, 0.12 + r(5) * 0.2);

        Self {
            active: (panels.round().max(0.0) as usize).min(PanelKind::ALL.len()),
            strength: mix(0.08, 1.0, hard),
            soft: mix(0.06, 0.0015, hard),
            band: (band_x, band_x + band_w),
            rect_min: centre - half,
            rect_max: centre + half,
            grid_cells: 2.0 + (r(6) * 4.0).floor(),
            diag_normal: V2::from_angle(r(7) * TAU),
            diag_origin: V2::new(0.3 + r(8) * 0.4, 0.3 + r(9) * 0.4),
        }
    }

    fn coverage(&self, kind: PanelKind, uv: V2) -> f32 {
        let soft = self.soft;
        let inside = |lo: f32, hi: f32, x: f32| {
            smoothstep(lo - soft, lo + soft, x) * (1.0 - smoothstep(hi - soft, hi + soft, x))
        };
        match kind {
            PanelKind::Band => inside(self.band.0, self.band.1, uv.x),
            PanelKind::Rect => {
                inside(self.rect_min.x, self.rect_max.x, uv.x)
                    * inside(self.rect_min.y, self.rect_max.y, uv.y)
            }
            PanelKind::Grid => {
                let n = self.grid_cells;
                let parity = ((uv.x * n).floor() + (uv.y * n).floor()).rem_euclid(2.0);
                step(0.5, parity)
            }
            PanelKind::Diagonal => {
                let d = (uv - self.diag_origin).dot(self.diag_normal);
                smoothstep(-soft, soft, d)
            }
        }
    }

    pub(crate) fn sample(&self, uv: V2) -> PanelSample {
        let mut mask = 0.0;
        let mut graphic = 0.0;
        for kind in PanelKind::ALL.into_iter().take(self.active) {
            let c = self.coverage(kind, uv);
            mask += c;
            graphic += c * kind.graphic_weight();
        }
        PanelSample {
            mask: mask.clamp(0.0, 1.0) * self.strength,
            graphic: graphic.clamp(0.0, 1.0) * self.strength,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/panels.rs"]
mod tests;
