use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::foundation::core::Range;
use crate::foundation::error::{ProcgenError, ProcgenResult};

macro_rules! param_schema {
    ($( $variant:ident => $field:ident, $int:expr; )*) => {
        /// Names every field of the [`Params`] vector.
        ///
        /// Variant order is declaration order, which is also the order the sampler and mutator
        /// consume the RNG in. Reordering changes every seeded batch.
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        pub enum ParamKey {
            $(
                #[allow(missing_docs)]
                $variant,
            )*
        }

        impl ParamKey {
            /// All keys in declaration order.
            pub const ALL: [ParamKey; PARAM_COUNT] = [$(ParamKey::$variant,)*];

            /// Whether the field holds whole numbers (rounded after every draw or nudge).
            pub fn is_integer(self) -> bool {
                match self {
                    $(ParamKey::$variant => $int,)*
                }
            }

            /// Stable snake_case name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(ParamKey::$variant => stringify!($field),)*
                }
            }
        }

        impl FromStr for ParamKey {
            type Err = ProcgenError;

            fn from_str(s: &str) -> ProcgenResult<Self> {
                match s.trim() {
                    $(stringify!($field) => Ok(ParamKey::$variant),)*
                    other => Err(ProcgenError::unknown_param(other)),
                }
            }
        }

        /// One image's numeric controls.
        ///
        /// Integer-typed fields are stored as `f64` holding whole numbers so the vector can be
        /// treated uniformly by the sampler, mutator and diversifier.
        #[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct Params {
            $(
                #[allow(missing_docs)]
                pub $field: f64,
            )*
        }

        impl Params {
            /// Read a field by key.
            pub fn get(&self, key: ParamKey) -> f64 {
                match key {
                    $(ParamKey::$variant => self.$field,)*
                }
            }

            /// Write a field by key (no clamping).
            pub fn set(&mut self, key: ParamKey, v: f64) {
                match key {
                    $(ParamKey::$variant => self.$field = v,)*
                }
            }
        }
    };
}

/// Number of fields in the parameter vector.
pub const PARAM_COUNT: usize = 24;

param_schema! {
    Warp => warp, false;
    WarpPasses => warp_passes, true;
    Fold => fold, false;
    TileMix => tile_mix, false;
    TileCount => tile_count, true;
    Sweep => sweep, false;
    FRad => f_rad, false;
    FAng => f_ang, false;
    FX => f_x, false;
    FY => f_y, false;
    Ribbons => ribbons, false;
    Sharp => sharp, false;
    Gloss => gloss, false;
    HueShift => hue_shift, false;
    Frame => frame, false;
    Layers => layers, true;
    Smear => smear, false;
    SmearTaps => smear_taps, true;
    Panels => panels, true;
    PanelHard => panel_hard, false;
    Steps => steps, true;
    RgbSplit => rgb_split, false;
    BlendMode => blend_mode, true;
    FrameBands => frame_bands, true;
}

impl ParamKey {
    /// Fields eligible for the mutator's extra structural nudge.
    pub const STRUCTURAL: [ParamKey; 3] = [ParamKey::Fold, ParamKey::TileMix, ParamKey::Sweep];

    /// Round integer-typed values; continuous values pass through.
    pub fn quantize(self, v: f64) -> f64 {
        if self.is_integer() { v.round() } else { v }
    }
}

impl std::fmt::Display for ParamKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One [`Range`] per parameter, indexed by [`ParamKey`].
#[derive(Clone, Debug, PartialEq)]
pub struct ParamRanges([Range; PARAM_COUNT]);

impl ParamRanges {
    /// Build from a lookup function, called once per key in declaration order.
    pub fn from_fn(mut f: impl FnMut(ParamKey) -> Range) -> Self {
        Self(ParamKey::ALL.map(&mut f))
    }

    /// Validate every range (finite, `min <= max`, whole-number bounds for integer fields).
    pub fn validate(&self) -> ProcgenResult<()> {
        for key in ParamKey::ALL {
            let range = self[key];
            range.validate(&format!("param '{key}'"))?;
            if key.is_integer() && (range.min.fract() != 0.0 || range.max.fract() != 0.0) {
                return Err(ProcgenError::validation(format!(
                    "param '{key}': integer field needs whole-number bounds (got {}..{})",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }

    /// Iterate `(key, range)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamKey, Range)> + '_ {
        ParamKey::ALL.iter().map(|&k| (k, self[k]))
    }

    /// Whether every field of `params` lies inside its range.
    pub fn contains(&self, params: &Params) -> bool {
        self.iter().all(|(k, r)| r.contains(params.get(k)))
    }
}

impl Index<ParamKey> for ParamRanges {
    type Output = Range;

    fn index(&self, key: ParamKey) -> &Range {
        &self.0[key as usize]
    }
}

impl IndexMut<ParamKey> for ParamRanges {
    fn index_mut(&mut self, key: ParamKey) -> &mut Range {
        &mut self.0[key as usize]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/params.rs"]
mod tests;
