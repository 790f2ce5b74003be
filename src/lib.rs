//! Procgen is a seeded generator of abstract raster artwork.
//!
//! A preset defines numeric ranges for 24 shading parameters and a cosine palette. Everything else
//! follows from a 32-bit seed:
//!
//! 1. **Sample**: `Preset + seed -> Params + Palette` (one LCG stream, declaration order)
//! 2. **Diversify**: spread structural parameters over the batch grid so thumbnails differ visibly
//! 3. **Mutate** (optional): small, bounded steps around a selected parent
//! 4. **Synthesize**: `(uv, seed, Params, Palette) -> RGB`, pure per pixel
//! 5. **Rasterize**: run the synthesizer over a whole image on a rayon pool
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same preset, seed and grid give the same parameters everywhere, and the
//!   same pixel bits for any thread count on a given platform. Synthesis calls the platform's `f32`
//!   `sin`/`cos`/`powf`/`atan2`, so pixels may differ in the last bits across math libraries.
//! - **Range-closed**: sampled and mutated parameters always lie inside their preset ranges.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod generate;
mod random;
mod render;
mod schema;
mod synth;

pub use foundation::core::{Range, Resolution, Rgb};
pub use foundation::error::{ProcgenError, ProcgenResult};
pub use generate::batch::{
    Instance, Lineage, descend, generate_batch, instance_id, item_seed, mutate_batch,
    parse_instance_id, seed_from_clock,
};
pub use generate::diversify::{GridLayout, MUTATION_DRIFT_KEYS, diversify_fresh, diversify_mutation};
pub use generate::mutator::{STRUCTURAL_NUDGE, mutate_params};
pub use generate::sampler::{sample_palette, sample_params};
pub use random::hash::{Fnv1a32, hash_seed, hash11};
pub use random::rng::SeededRng;
pub use render::raster::{FrameRGBA, Origin, RasterExecutor, RasterOpts, contact_sheet};
pub use schema::builtin::base_param_ranges;
pub use schema::palette::{Palette, PaletteRanges, STABLE_IRIDESCENT};
pub use schema::params::{PARAM_COUNT, ParamKey, ParamRanges, Params};
pub use schema::preset::{Preset, PresetCatalog, PresetConfig};
pub use synth::blend::BlendMode;
pub use synth::panels::PanelKind;
pub use synth::plan::{FieldPlan, synthesize};
