use crate::foundation::error::{ProcgenError, ProcgenResult};
use crate::generate::diversify::{GridLayout, diversify_fresh, diversify_mutation};
use crate::generate::mutator::mutate_params;
use crate::generate::sampler::{sample_palette, sample_params};
use crate::random::hash::hash_seed;
use crate::random::rng::SeededRng;
use crate::schema::palette::Palette;
use crate::schema::params::Params;
use crate::schema::preset::Preset;

/// Parent reference recorded on mutated instances.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Lineage {
    /// Parent seed.
    pub seed: u32,
    /// Parent parameter vector.
    pub params: Params,
}

/// One reproducible image description.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Instance {
    /// `"<presetId>-<seed hex>"`, see [`instance_id`].
    pub id: String,
    /// Per-instance seed; drives the field synthesizer's hashed constants.
    pub seed: u32,
    /// Preset the instance was generated under.
    pub preset_id: String,
    /// Parameter vector.
    pub params: Params,
    /// Cosine palette.
    pub palette: Palette,
    /// Parent, when produced by mutation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Lineage>,
}

/// Instance identity string: preset id, a dash, the seed in lowercase hex.
pub fn instance_id(preset_id: &str, seed: u32) -> String {
    format!("{preset_id}-{seed:x}")
}

/// Split an instance id back into `(preset_id, seed)`.
///
/// Only canonical ids parse: the seed must be lowercase hex without leading zeros, so parsing
/// and re-formatting always yield the same string.
pub fn parse_instance_id(id: &str) -> ProcgenResult<(String, u32)> {
    let (preset_id, hex) = id
        .rsplit_once('-')
        .ok_or_else(|| ProcgenError::validation(format!("instance id '{id}' has no seed part")))?;
    if preset_id.is_empty() {
        return Err(ProcgenError::validation(format!(
            "instance id '{id}' has an empty preset part"
        )));
    }
    let seed = u32::from_str_radix(hex, 16)
        .map_err(|e| ProcgenError::validation(format!("instance id '{id}': {e}")))?;
    if format!("{seed:x}") != hex {
        return Err(ProcgenError::validation(format!(
            "instance id '{id}' is not canonical lowercase hex"
        )));
    }
    Ok((preset_id.to_string(), seed))
}

/// Seed of batch item `i` derived from a batch (or parent) seed.
pub fn item_seed(batch_seed: u32, i: usize) -> u32 {
    hash_seed(&[batch_seed, (i as u32).wrapping_add(1)])
}

/// Generate a fresh batch.
///
/// Item `i` uses its own RNG seeded with [`item_seed`]: sample params, spread them by grid
/// position, then sample a palette from the same RNG.
#[tracing::instrument(skip(preset), fields(preset = preset.id()))]
pub fn generate_batch(preset: &Preset, batch_seed: u32, layout: &GridLayout) -> Vec<Instance> {
    let out: Vec<_> = (0..layout.count)
        .map(|i| {
            let seed = item_seed(batch_seed, i);
            let mut rng = SeededRng::new(seed);
            let sampled = sample_params(preset, &mut rng);
            let params = diversify_fresh(&sampled, preset, layout, i, &mut rng);
            let palette = sample_palette(preset, &mut rng);
            Instance {
                id: instance_id(preset.id(), seed),
                seed,
                preset_id: preset.id().to_string(),
                params,
                palette,
                parent: None,
            }
        })
        .collect();
    tracing::debug!(count = out.len(), "generated batch");
    out
}

/// Derive a batch of children from `selected`.
///
/// Item seeds derive from the parent seed, so mutating the same instance twice yields the same
/// children. Each child gets a freshly sampled palette.
#[tracing::instrument(skip(selected, preset), fields(parent = %selected.id, preset = preset.id()))]
pub fn mutate_batch(selected: &Instance, preset: &Preset, layout: &GridLayout) -> Vec<Instance> {
    let out: Vec<_> = (0..layout.count)
        .map(|i| {
            let seed = item_seed(selected.seed, i);
            let mut rng = SeededRng::new(seed);
            let mutated = mutate_params(&selected.params, preset, &mut rng);
            let params =
                diversify_mutation(&mutated, &selected.params, preset, layout, i, &mut rng);
            let palette = sample_palette(preset, &mut rng);
            Instance {
                id: instance_id(preset.id(), seed),
                seed,
                preset_id: preset.id().to_string(),
                params,
                palette,
                parent: Some(Lineage {
                    seed: selected.seed,
                    params: selected.params,
                }),
            }
        })
        .collect();
    tracing::debug!(count = out.len(), "mutated batch");
    out
}

/// Regenerate a fresh batch, then follow `picks`: each pick selects an item of the current batch
/// and replaces the batch with its mutations.
#[tracing::instrument(skip(preset), fields(preset = preset.id()))]
pub fn descend(
    preset: &Preset,
    batch_seed: u32,
    picks: &[usize],
    layout: &GridLayout,
) -> ProcgenResult<Vec<Instance>> {
    layout.validate()?;
    let mut batch = generate_batch(preset, batch_seed, layout);
    for (depth, &pick) in picks.iter().enumerate() {
        let selected = batch.get(pick).ok_or_else(|| {
            ProcgenError::validation(format!(
                "pick {pick} at depth {depth} is out of range (batch has {} items)",
                batch.len()
            ))
        })?;
        tracing::debug!(depth, pick, parent = %selected.id, "descending");
        batch = mutate_batch(selected, preset, layout);
    }
    Ok(batch)
}

/// A batch seed mixed from the wall clock and process id.
pub fn seed_from_clock() -> u32 {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    hash_seed(&[
        now.as_secs() as u32,
        (now.as_secs() >> 32) as u32,
        now.subsec_nanos(),
        std::process::id(),
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/generate/batch.rs"]
mod tests;
