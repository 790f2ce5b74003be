use crate::generate::sampler::settle;
use crate::random::rng::SeededRng;
use crate::schema::params::{ParamKey, Params};
use crate::schema::preset::Preset;

/// Scale of the structural nudge relative to the per-field jitter.
pub const STRUCTURAL_NUDGE: f64 = 2.4;

/// Perturb `parent` within range-relative bounds.
///
/// Every field moves by at most `span * mutation_strength`. Then one structural field
/// (fold, tile mix or sweep) is picked and re-drawn around the parent value with a jitter
/// `STRUCTURAL_NUDGE` times wider, so no child is a near-duplicate of its parent.
///
/// The nudge replaces that field's jitter instead of stacking on it: the nudged field stays within
/// `span * mutation_strength * STRUCTURAL_NUDGE` of the parent, where a stacked nudge could reach
/// `1 + STRUCTURAL_NUDGE` times the jitter bound. Children of the same seed therefore differ from a
/// stacked mutation in that one field.
///
/// RNG order: one draw per field in declaration order, the pick, one draw for the nudge.
pub fn mutate_params(parent: &Params, preset: &Preset, rng: &mut SeededRng) -> Params {
    let strength = preset.mutation_strength();
    let mut child = *parent;

    for (key, range) in preset.param_ranges().iter() {
        let jitter = rng.signed() * range.span() * strength;
        child.set(key, settle(key, range, parent.get(key) + jitter));
    }

    if let Some(&key) = rng.pick(&ParamKey::STRUCTURAL) {
        let range = preset.range(key);
        let nudge = rng.signed() * range.span() * strength * STRUCTURAL_NUDGE;
        child.set(key, settle(key, range, parent.get(key) + nudge));
    }

    child
}

#[cfg(test)]
#[path = "../../tests/unit/generate/mutator.rs"]
mod tests;
