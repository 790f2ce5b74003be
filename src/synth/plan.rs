use std::f32::consts::FRAC_PI_2;

use crate::foundation::core::Resolution;
use crate::foundation::math::{TAU, V2, mix, step};
use crate::generate::batch::Instance;
use crate::random::hash::{hash_seed, rand01};
use crate::schema::palette::Palette;
use crate::schema::params::Params;
use crate::synth::blend::BlendMode;
use crate::synth::field::{FieldShape, LayerPlan, MAX_LAYERS, MAX_WARP_PASSES, layer_signal};
use crate::synth::frame::FramePlan;
use crate::synth::palette::{CosinePalette, apply_gloss, split_channels};
use crate::synth::panels::{PanelMasks, PanelSample};

const MAX_SMEAR_TAPS: usize = 24;
const MAX_STEPS: f64 = 256.0;
const SMEAR_REACH: f32 = 0.35;
const PANEL_HUE: f32 = 0.18;
const STAGES: usize = 3;

const SALT_CELL: u32 = 0xce11;
const SALT_SMEAR: u32 = 0x5ea7;
const SALT_STAGE: u32 = 0x57a9;
const SALT_SPLIT: u32 = 0x5b17;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SmearMode {
    Mean,
    Max,
}

#[derive(Clone, Copy, Debug)]
struct Stage {
    mode: BlendMode,
    add_weight: f32,
}

/// Everything about one instance that does not depend on the pixel.
///
/// Building the plan does all the per-instance hashing once; [`FieldPlan::shade`] is then a pure
/// function of the pixel coordinate and gives the same bits as [`synthesize`].
#[derive(Clone, Debug)]
pub struct FieldPlan {
    seed: u32,
    shape: FieldShape,
    layers: [LayerPlan; MAX_LAYERS],
    active: usize,
    cell_grid: f32,
    panels: PanelMasks,
    smear: f32,
    smear_dir: V2,
    smear_taps: usize,
    smear_mode: SmearMode,
    steps: Option<u32>,
    stages: [Stage; STAGES],
    gloss: f32,
    hue_shift: f32,
    rgb_split: f32,
    split_dir: V2,
    palette: CosinePalette,
    frame: FramePlan,
}

fn count(v: f64, lo: usize, hi: usize) -> usize {
    (v.round().max(0.0) as usize).clamp(lo, hi)
}

impl FieldPlan {
    /// Compile the plan for one `(seed, params, palette)` triple.
    pub fn new(seed: u32, params: &Params, palette: &Palette) -> Self {
        let p = params;
        let shape = FieldShape {
            warp: p.warp as f32,
            warp_passes: count(p.warp_passes, 0, MAX_WARP_PASSES),
            fold: p.fold as f32,
            tile_mix: p.tile_mix as f32,
            tile_count: p.tile_count.max(1.0) as f32,
            sweep: p.sweep as f32,
            f_rad: p.f_rad as f32,
            f_ang: p.f_ang as f32,
            f_x: p.f_x as f32,
            f_y: p.f_y as f32,
            ribbons: p.ribbons as f32,
            sharp: p.sharp as f32,
        };

        let base = BlendMode::from_selector(p.blend_mode);
        let mut index = base.index();
        let stages = std::array::from_fn(|k| {
            if k > 0 {
                index += 1 + (rand01(&[seed, SALT_STAGE, k as u32, 0]) * 3.0).floor() as u32;
            }
            Stage {
                mode: BlendMode::from_index(index),
                add_weight: 0.55 + 0.1 * rand01(&[seed, SALT_STAGE, k as u32, 1]),
            }
        });

        let steps = p.steps.round().min(MAX_STEPS);

        Self {
            seed,
            shape,
            layers: std::array::from_fn(|i| LayerPlan::new(seed, i)),
            active: count(p.layers, 1, MAX_LAYERS),
            cell_grid: 3.0 + (rand01(&[seed, SALT_CELL]) * 5.0).floor().min(4.0),
            panels: PanelMasks::new(seed, p.panels, p.panel_hard),
            smear: p.smear.max(0.0) as f32,
            smear_dir: V2::from_angle(rand01(&[seed, SALT_SMEAR, 0]) * TAU),
            smear_taps: count(p.smear_taps, 0, MAX_SMEAR_TAPS),
            smear_mode: if rand01(&[seed, SALT_SMEAR, 1]) < 0.5 {
                SmearMode::Mean
            } else {
                SmearMode::Max
            },
            steps: (steps >= 1.0).then_some(steps as u32),
            stages,
            gloss: p.gloss as f32,
            hue_shift: p.hue_shift as f32,
            rgb_split: p.rgb_split as f32,
            split_dir: V2::from_angle(rand01(&[seed, SALT_SPLIT]) * TAU),
            palette: CosinePalette::new(palette),
            frame: FramePlan::new(seed, p.frame, p.frame_bands),
        }
    }

    /// Plan for a generated instance.
    pub fn from_instance(instance: &Instance) -> Self {
        Self::new(instance.seed, &instance.params, &instance.palette)
    }

    /// Scalar composite in `[-1, 1]` and the panel coverage at `uv`.
    fn composite(&self, uv: V2, aspect: f32) -> (f32, PanelSample) {
        let p = V2::new((uv.x * 2.0 - 1.0) * aspect, uv.y * 2.0 - 1.0);
        let n = self.active;

        let mut s = [0.0f32; MAX_LAYERS];
        for (slot, layer) in s.iter_mut().zip(&self.layers[..n]) {
            *slot = layer_signal(&self.shape, layer, p);
        }

        let panel = self.panels.sample(uv);

        let cell = V2::new(
            (uv.x * self.cell_grid).floor(),
            (uv.y * self.cell_grid).floor(),
        );
        let cx = cell.x as i32 as u32;
        let cy = cell.y as i32 as u32;
        let cell_hash = |k: u32| hash_seed(&[self.seed, SALT_CELL, cx, cy, k]);

        let base = cell_hash(0) as usize % n;
        let mut v = s[base];

        if panel.mask > 0.0 {
            let a = cell_hash(1) as usize % n;
            let b = cell_hash(2) as usize % n;
            let local = (uv * self.cell_grid).fract() - V2::new(0.5, 0.5);
            let dir = V2::from_angle(rand01(&[self.seed, SALT_CELL, cx, cy, 3]) * TAU);
            let threshold = rand01(&[self.seed, SALT_CELL, cx, cy, 4]) - 0.5;
            let split = mix(s[a], s[b], step(threshold, local.dot(dir)));
            v = mix(v, split, panel.mask);
        }

        if self.smear_taps > 0 && self.smear > 0.0 {
            let smeared = self.smear_layer(&self.layers[base], p);
            let w = (self.smear * (0.6 + 0.4 * panel.mask)).clamp(0.0, 1.0);
            v = mix(v, smeared, w);
        }

        if let Some(bands) = self.steps {
            let bands = bands as f32;
            let t = (v * 0.5 + 0.5).clamp(0.0, 1.0);
            let band = (t * bands).floor().min(bands - 1.0);
            let centre = (band + 0.5) / bands * 2.0 - 1.0;
            v = mix(v, centre, 0.35 + 0.65 * panel.graphic);
        }

        let next = s[(base + 1) % n];
        let after = s[(base + 2) % n];
        let prev = s[(base + n - 1) % n];

        let (sum, weight) = s[..n]
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(acc, wsum), (i, &sv)| {
                let w = 1.0 / (1.0 + i as f32);
                (acc + sv * w, wsum + w)
            });
        let aux = [
            sum / weight,
            next * after,
            (FRAC_PI_2 * (next + prev)).sin(),
        ];
        let stages = if n >= 3 { STAGES } else { STAGES - 1 };
        for (stage, a) in self.stages.iter().zip(aux).take(stages) {
            v = stage.mode.apply(v, a, stage.add_weight);
        }

        (v, panel)
    }

    fn smear_layer(&self, layer: &LayerPlan, p: V2) -> f32 {
        let taps = self.smear_taps;
        let mut acc = match self.smear_mode {
            SmearMode::Mean => 0.0,
            SmearMode::Max => f32::NEG_INFINITY,
        };
        for k in 0..taps {
            let t = if taps > 1 {
                k as f32 / (taps - 1) as f32 - 0.5
            } else {
                0.0
            };
            let q = p + self.smear_dir * (t * self.smear * SMEAR_REACH);
            let sv = layer_signal(&self.shape, layer, q);
            match self.smear_mode {
                SmearMode::Mean => acc += sv,
                SmearMode::Max => acc = acc.max(sv),
            }
        }
        match self.smear_mode {
            SmearMode::Mean => acc / taps as f32,
            SmearMode::Max => acc,
        }
    }

    /// Linear-to-display RGB in `[0, 1]` for normalized pixel centre `uv`.
    pub fn shade(&self, uv: [f32; 2], resolution: Resolution) -> [f32; 3] {
        let uv = V2::new(uv[0], uv[1]);
        let aspect = resolution.aspect();
        let px = V2::new(
            1.0 / resolution.width.max(1) as f32,
            1.0 / resolution.height.max(1) as f32,
        );

        let (s, panel) = self.composite(uv, aspect);
        let (sx, _) = self.composite(uv + V2::new(px.x, 0.0), aspect);
        let (sy, _) = self.composite(uv + V2::new(0.0, px.y), aspect);
        let grad = V2::new(sx - s, sy - s);

        let phase = self.hue_shift + panel.mask * PANEL_HUE;
        let t = split_channels(s, grad, self.split_dir, self.rgb_split, px).map(|c| c + phase);

        let mut col = self.palette.eval(t);
        col = apply_gloss(col, grad, self.gloss);
        col = self.frame.apply(col, uv);
        col.map(|c| c.max(0.0).powf(1.0 / 2.2).clamp(0.0, 1.0))
            .to_array()
    }
}

/// Color of one pixel of an instance.
///
/// `uv` is the pixel centre in `[0, 1]^2` with `y` up. Pure and deterministic: the same inputs give
/// the same bits on every call.
pub fn synthesize(
    uv: [f32; 2],
    resolution: Resolution,
    seed: u32,
    params: &Params,
    palette: &Palette,
) -> [f32; 3] {
    FieldPlan::new(seed, params, palette).shade(uv, resolution)
}

#[cfg(test)]
#[path = "../../tests/unit/synth/plan.rs"]
mod tests;
