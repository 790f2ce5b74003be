//! Grid-position-driven spreading of batch members.
//!
//! Every formula is written in terms of the grid shape (`rows`, `columns`, `count`) so a batch of
//! any size spans each field's range. For the default 24-item, 6-column grid the fractions reduce
//! to `row / 3`, `col / 5`, `((row + col) % 4) / 3`, `((2 row + col) % 12) / 11` and `k i % 24 / 23`.

use crate::foundation::error::{ProcgenError, ProcgenResult};
use crate::generate::sampler::settle;
use crate::random::rng::SeededRng;
use crate::schema::params::{ParamKey, Params};
use crate::schema::preset::Preset;

/// Number of blend-mode operators the selector cycles through.
const BLEND_MODE_COUNT: usize = 5;

/// Shape of a batch: how many items and how many per row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridLayout {
    /// Items per batch.
    pub count: usize,
    /// Items per row.
    pub columns: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            count: 24,
            columns: 6,
        }
    }
}

impl GridLayout {
    /// Build a validated layout (`count >= 1`, `columns >= 1`).
    pub fn new(count: usize, columns: usize) -> ProcgenResult<Self> {
        let layout = Self { count, columns };
        layout.validate()?;
        Ok(layout)
    }

    /// Reject empty grids.
    pub fn validate(&self) -> ProcgenResult<()> {
        if self.count == 0 {
            return Err(ProcgenError::validation("grid count must be >= 1"));
        }
        if self.columns == 0 {
            return Err(ProcgenError::validation("grid columns must be >= 1"));
        }
        Ok(())
    }

    /// Number of (possibly partial) rows.
    pub fn rows(&self) -> usize {
        self.count.div_ceil(self.columns.max(1))
    }

    /// `(row, col)` of item `i`.
    pub fn cell(&self, i: usize) -> (usize, usize) {
        let cols = self.columns.max(1);
        (i / cols, i % cols)
    }
}

/// `k / (n - 1)`, or 0 when there is a single slot.
fn frac(k: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        k as f64 / (n - 1) as f64
    }
}

fn set_by_range(next: &mut Params, preset: &Preset, key: ParamKey, t: f64) {
    let range = preset.range(key);
    next.set(key, settle(key, range, range.lerp(t.clamp(0.0, 1.0))));
}

fn nudge(next: &mut Params, preset: &Preset, key: ParamKey, delta: f64) {
    let range = preset.range(key);
    next.set(key, settle(key, range, next.get(key) + delta));
}

/// Spread a freshly sampled vector according to item `i`'s grid position.
///
/// RNG order: smear, smear taps, rgb split, fold, hue shift, sweep.
pub fn diversify_fresh(
    params: &Params,
    preset: &Preset,
    layout: &GridLayout,
    i: usize,
    rng: &mut SeededRng,
) -> Params {
    use ParamKey::*;

    let mut next = *params;
    let rows = layout.rows().max(1);
    let cols = layout.columns.max(1);
    let n = layout.count.max(1);
    let (row, col) = layout.cell(i);
    let parity = |k: usize| if k % 2 == 0 { 1.0 } else { -1.0 };
    let zig = parity(col) * parity(row);

    set_by_range(&mut next, preset, Layers, frac(row, rows));
    set_by_range(&mut next, preset, Panels, frac(col, cols));
    set_by_range(&mut next, preset, FrameBands, frac((row + col) % rows, rows));
    set_by_range(&mut next, preset, BlendMode, frac(i % BLEND_MODE_COUNT, BLEND_MODE_COUNT));
    set_by_range(&mut next, preset, Steps, frac((row * 2 + col) % (2 * cols), 2 * cols));
    set_by_range(&mut next, preset, Smear, frac(col, cols) * 0.65 + rng.next_f64() * 0.35);
    set_by_range(&mut next, preset, SmearTaps, frac(row, rows) * 0.6 + rng.next_f64() * 0.4);
    set_by_range(
        &mut next,
        preset,
        RgbSplit,
        frac((cols - 1).saturating_sub(col), cols) * 0.55 + rng.next_f64() * 0.45,
    );
    set_by_range(
        &mut next,
        preset,
        TileMix,
        frac(row, rows) * 0.5 + ((col + 1) as f64 / cols as f64) * 0.5,
    );
    set_by_range(
        &mut next,
        preset,
        Fold,
        frac((rows - 1).saturating_sub(row), rows) * 0.55 + rng.next_f64() * 0.45,
    );
    set_by_range(&mut next, preset, FRad, frac(i % n, n));
    set_by_range(&mut next, preset, FAng, frac((i * 7) % n, n));
    set_by_range(&mut next, preset, FX, frac((i * 11) % n, n));
    set_by_range(&mut next, preset, FY, frac((i * 17) % n, n));

    nudge(&mut next, preset, HueShift, zig * 0.2 + rng.signed() * 0.15);
    let centre = (rows as f64 - 1.0) / 2.0;
    nudge(
        &mut next,
        preset,
        Sweep,
        (row as f64 - centre) * 0.12 + rng.signed() * 0.08,
    );

    next
}

/// Fields drifted by [`diversify_mutation`] before the grid overrides.
pub const MUTATION_DRIFT_KEYS: [ParamKey; 13] = [
    ParamKey::Layers,
    ParamKey::Panels,
    ParamKey::Steps,
    ParamKey::Smear,
    ParamKey::SmearTaps,
    ParamKey::BlendMode,
    ParamKey::RgbSplit,
    ParamKey::TileMix,
    ParamKey::Fold,
    ParamKey::FRad,
    ParamKey::FAng,
    ParamKey::FX,
    ParamKey::FY,
];

/// Spread a mutated vector, weighting smear and steps toward the parent's own values.
///
/// RNG order: one drift draw per [`MUTATION_DRIFT_KEYS`] entry.
pub fn diversify_mutation(
    params: &Params,
    parent: &Params,
    preset: &Preset,
    layout: &GridLayout,
    i: usize,
    rng: &mut SeededRng,
) -> Params {
    use ParamKey::*;

    let mut next = *params;
    let rows = layout.rows().max(1);
    let cols = layout.columns.max(1);
    let (row, col) = layout.cell(i);
    let drift_scale = preset.mutation_strength() * 0.9;

    for key in MUTATION_DRIFT_KEYS {
        let span = preset.range(key).span();
        nudge(&mut next, preset, key, rng.signed() * span * drift_scale);
    }

    let parent_smear = preset.range(Smear).unlerp(parent.smear);
    let parent_steps = preset.range(Steps).unlerp(parent.steps);

    set_by_range(&mut next, preset, BlendMode, frac(i % BLEND_MODE_COUNT, BLEND_MODE_COUNT));
    set_by_range(&mut next, preset, Panels, frac(col, cols));
    set_by_range(
        &mut next,
        preset,
        Smear,
        parent_smear * 0.45 + frac(row, rows) * 0.55,
    );
    set_by_range(
        &mut next,
        preset,
        Steps,
        parent_steps * 0.4 + frac((row + col) % cols, cols) * 0.6,
    );

    next
}

#[cfg(test)]
#[path = "../../tests/unit/generate/diversify.rs"]
mod tests;
