use std::collections::BTreeMap;
use std::path::Path;

use crate::foundation::core::Range;
use crate::foundation::error::{ProcgenError, ProcgenResult};
use crate::schema::builtin::{base_param_ranges, builtin_presets};
use crate::schema::palette::{PaletteRanges, STABLE_IRIDESCENT};
use crate::schema::params::{ParamKey, ParamRanges};

/// A named bundle of parameter ranges, palette ranges and a mutation strength.
///
/// Presets are validated once at construction and immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    id: String,
    name: String,
    mutation_strength: f64,
    param_ranges: ParamRanges,
    palette_ranges: PaletteRanges,
}

impl Preset {
    /// Build a validated preset.
    ///
    /// Rejects an empty id, a mutation strength outside `(0, 1]`, any degenerate range, and
    /// fractional bounds on integer fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        mutation_strength: f64,
        param_ranges: ParamRanges,
        palette_ranges: PaletteRanges,
    ) -> ProcgenResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ProcgenError::validation("preset id must be non-empty"));
        }
        if !(mutation_strength.is_finite() && mutation_strength > 0.0 && mutation_strength <= 1.0)
        {
            return Err(ProcgenError::validation(format!(
                "preset '{id}': mutation_strength must be in (0, 1] (got {mutation_strength})"
            )));
        }
        param_ranges.validate().map_err(|e| in_preset(&id, e))?;
        palette_ranges.validate().map_err(|e| in_preset(&id, e))?;

        Ok(Self {
            id,
            name: name.into(),
            mutation_strength,
            param_ranges,
            palette_ranges,
        })
    }

    /// Build from the base ranges with per-field overrides.
    pub fn with_overrides(
        id: impl Into<String>,
        name: impl Into<String>,
        mutation_strength: f64,
        overrides: &[(ParamKey, Range)],
        palette_ranges: PaletteRanges,
    ) -> ProcgenResult<Self> {
        let mut ranges = base_param_ranges();
        for &(key, range) in overrides {
            ranges[key] = range;
        }
        Self::new(id, name, mutation_strength, ranges, palette_ranges)
    }

    /// Stable preset id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mutation strength in `(0, 1]`.
    pub fn mutation_strength(&self) -> f64 {
        self.mutation_strength
    }

    /// Per-field ranges.
    pub fn param_ranges(&self) -> &ParamRanges {
        &self.param_ranges
    }

    /// Range of a single field.
    pub fn range(&self, key: ParamKey) -> Range {
        self.param_ranges[key]
    }

    /// Per-channel palette ranges.
    pub fn palette_ranges(&self) -> &PaletteRanges {
        &self.palette_ranges
    }
}

fn in_preset(id: &str, e: ProcgenError) -> ProcgenError {
    match e {
        ProcgenError::Validation(msg) => ProcgenError::validation(format!("preset '{id}': {msg}")),
        other => other,
    }
}

/// Serialized preset description.
///
/// `params` overrides the base ranges field by field; `palette` defaults to the shared iridescent
/// ranges.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PresetConfig {
    /// Stable preset id.
    pub id: String,
    /// Display name (defaults to the id).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Mutation strength in `(0, 1]`.
    pub mutation_strength: f64,
    /// Per-field range overrides.
    #[serde(default)]
    pub params: BTreeMap<ParamKey, Range>,
    /// Palette ranges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<PaletteRanges>,
}

impl PresetConfig {
    /// Validate and turn into a [`Preset`].
    pub fn into_preset(self) -> ProcgenResult<Preset> {
        let overrides: Vec<_> = self.params.into_iter().collect();
        let name = self.name.unwrap_or_else(|| self.id.clone());
        Preset::with_overrides(
            self.id,
            name,
            self.mutation_strength,
            &overrides,
            self.palette.unwrap_or(STABLE_IRIDESCENT),
        )
    }
}

impl From<&Preset> for PresetConfig {
    fn from(p: &Preset) -> Self {
        Self {
            id: p.id.clone(),
            name: Some(p.name.clone()),
            mutation_strength: p.mutation_strength,
            params: p.param_ranges.iter().collect(),
            palette: Some(p.palette_ranges),
        }
    }
}

/// Ordered, id-unique collection of presets.
#[derive(Clone, Debug)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// Build a catalog, rejecting an empty list and duplicate ids.
    pub fn new(presets: Vec<Preset>) -> ProcgenResult<Self> {
        if presets.is_empty() {
            return Err(ProcgenError::validation("preset catalog must not be empty"));
        }
        for (i, p) in presets.iter().enumerate() {
            if presets[..i].iter().any(|q| q.id == p.id) {
                return Err(ProcgenError::validation(format!(
                    "duplicate preset id '{}'",
                    p.id
                )));
            }
        }
        Ok(Self { presets })
    }

    /// The six built-in presets, validated like any other.
    pub fn builtin() -> ProcgenResult<Self> {
        Self::new(builtin_presets()?)
    }

    /// Parse a JSON array of [`PresetConfig`].
    pub fn from_json_str(json: &str) -> ProcgenResult<Self> {
        let configs: Vec<PresetConfig> = serde_json::from_str(json)?;
        let presets = configs
            .into_iter()
            .map(PresetConfig::into_preset)
            .collect::<ProcgenResult<Vec<_>>>()?;
        Self::new(presets)
    }

    /// Read and parse a JSON preset file.
    pub fn from_path(path: &Path) -> ProcgenResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ProcgenError::Other(anyhow::Error::new(e).context(format!(
                "read preset catalog '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&text)
    }

    /// Look up a preset by id.
    pub fn get(&self, id: &str) -> ProcgenResult<&Preset> {
        self.presets
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ProcgenError::unknown_preset(id))
    }

    /// Iterate presets in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/preset.rs"]
mod tests;
