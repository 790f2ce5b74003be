//! The per-layer signal: warp, fold, tile, polar modulation, ribbon remap, sharpening.

use crate::foundation::math::{TAU, V2, mix, sign, smoothstep};
use crate::random::hash::{hash_seed, rand01};

pub(crate) const MAX_LAYERS: usize = 6;
pub(crate) const MAX_WARP_PASSES: usize = 6;

/// Continuous controls shared by every layer of one instance.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FieldShape {
    pub(crate) warp: f32,
    pub(crate) warp_passes: usize,
    pub(crate) fold: f32,
    pub(crate) tile_mix: f32,
    pub(crate) tile_count: f32,
    pub(crate) sweep: f32,
    pub(crate) f_rad: f32,
    pub(crate) f_ang: f32,
    pub(crate) f_x: f32,
    pub(crate) f_y: f32,
    pub(crate) ribbons: f32,
    pub(crate) sharp: f32,
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct WarpPass {
    freq: f32,
    phase: f32,
}

/// Hashed constants of one layer, derived from `hash_seed(seed, layer_index)`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LayerPlan {
    rot: V2,
    offset: V2,
    aniso: V2,
    phase_rad: f32,
    phase_ang: f32,
    passes: [WarpPass; MAX_WARP_PASSES],
}

impl LayerPlan {
    pub(crate) fn new(seed: u32, index: usize) -> Self {
        let layer_seed = hash_seed(&[seed, index as u32]);
        let r = |k: u32| rand01(&[layer_seed, k]);

        let mut passes = [WarpPass::default(); MAX_WARP_PASSES];
        for (i, pass) in passes.iter_mut().enumerate() {
            let pass_seed = hash_seed(&[layer_seed, 100 + i as u32]);
            pass.freq = 1.0 + i as f32 * 0.41 + rand01(&[pass_seed, 0]) * 2.2;
            pass.phase = rand01(&[pass_seed, 1]) * TAU;
        }

        Self {
            rot: V2::from_angle((r(0) - 0.5) * 0.6),
            offset: V2::new((r(1) - 0.5) * 0.4, (r(2) - 0.5) * 0.4),
            aniso: V2::new(0.75 + r(3) * 0.5, 0.75 + r(4) * 0.5),
            phase_rad: r(5) * TAU,
            phase_ang: r(6) * TAU,
            passes,
        }
    }
}

/// Evaluate one layer at centred, aspect-corrected point `p0`.
pub(crate) fn layer_signal(shape: &FieldShape, layer: &LayerPlan, p0: V2) -> f32 {
    let mut p = p0.rotate(layer.rot) + layer.offset;
    let sx = p.x * shape.sweep;
    let sy = p.y * shape.sweep;

    for pass in &layer.passes[..shape.warp_passes] {
        let fi = pass.freq;
        let phase = pass.phase;
        let mut delta = V2::new(
            (p.y * fi + phase + sx * 2.0).sin(),
            (p.x * fi + phase * 1.37 + sy * 2.0).cos(),
        ) * (shape.warp * 0.12);
        delta += V2::new(
            ((p.x + p.y) * fi * 0.7 + phase).sin(),
            ((p.x - p.y) * fi * 0.6 + phase).cos(),
        ) * (shape.warp * 0.05);
        p += delta;
    }

    p = p.mix(p.abs(), shape.fold);

    let cells = (p * shape.tile_count).fract() - V2::new(0.5, 0.5);
    p = p.mix(cells, shape.tile_mix);

    let pa = p.mul_xy(layer.aniso);
    let r = pa.length();
    let a = pa.y.atan2(pa.x);

    let s_rad = (r * shape.f_rad + layer.phase_rad + sx * 3.0).sin();
    let s_ang = (a * shape.f_ang + layer.phase_ang + sy * 3.0).cos();
    let s_ax = (p.x * shape.f_x + s_rad * 2.0).sin() + (p.y * shape.f_y + s_ang * 2.0).cos();

    let stripe = (s_ax + s_rad + s_ang).sin();
    let ribbon = smoothstep(0.35, 0.65, 0.5 + 0.5 * stripe);
    let signal = mix(stripe, ribbon * 2.0 - 1.0, shape.ribbons);

    sign(signal) * signal.abs().powf(shape.sharp.max(0.001))
}

#[cfg(test)]
#[path = "../../tests/unit/synth/field.rs"]
mod tests;
