use crate::foundation::core::Range;
use crate::random::rng::SeededRng;
use crate::schema::palette::Palette;
use crate::schema::params::{ParamKey, Params};
use crate::schema::preset::Preset;

/// Round integer fields, then clamp into the field's range.
pub(crate) fn settle(key: ParamKey, range: Range, v: f64) -> f64 {
    range.clamp(key.quantize(v))
}

/// Draw a fresh parameter vector, one RNG draw per field in declaration order.
pub fn sample_params(preset: &Preset, rng: &mut SeededRng) -> Params {
    let mut params = Params::default();
    for (key, range) in preset.param_ranges().iter() {
        params.set(key, settle(key, range, rng.float(range.min, range.max)));
    }
    params
}

/// Draw a palette: triples A..D, channels r, g, b.
pub fn sample_palette(preset: &Preset, rng: &mut SeededRng) -> Palette {
    let [a, b, c, d] = preset.palette_ranges().triples();
    let mut draw = |ranges: &[Range; 3]| (*ranges).map(|r| r.clamp(rng.float(r.min, r.max)));
    Palette {
        pal_a: draw(a),
        pal_b: draw(b),
        pal_c: draw(c),
        pal_d: draw(d),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generate/sampler.rs"]
mod tests;
