use crate::foundation::core::Range;
use crate::foundation::error::ProcgenResult;
use crate::schema::palette::STABLE_IRIDESCENT;
use crate::schema::params::{ParamKey, ParamRanges};
use crate::schema::preset::Preset;

use ParamKey::*;

/// Ranges every preset starts from before its overrides.
pub fn base_param_ranges() -> ParamRanges {
    ParamRanges::from_fn(|key| match key {
        Warp => Range::of(0.0, 2.5),
        WarpPasses => Range::of(3.0, 6.0),
        Fold => Range::of(0.0, 1.0),
        TileMix => Range::of(0.0, 1.0),
        TileCount => Range::of(1.0, 14.0),
        Sweep => Range::of(0.0, 1.0),
        FRad => Range::of(0.5, 18.0),
        FAng => Range::of(0.5, 18.0),
        FX => Range::of(0.5, 24.0),
        FY => Range::of(0.5, 24.0),
        Ribbons => Range::of(0.0, 1.0),
        Sharp => Range::of(0.2, 3.0),
        Gloss => Range::of(0.0, 1.0),
        HueShift => Range::of(-1.0, 1.0),
        Frame => Range::of(0.0, 1.0),
        Layers => Range::of(2.0, 6.0),
        Smear => Range::of(0.0, 1.0),
        SmearTaps => Range::of(6.0, 24.0),
        Panels => Range::of(0.0, 4.0),
        PanelHard => Range::of(0.0, 1.0),
        Steps => Range::of(0.0, 64.0),
        RgbSplit => Range::of(0.0, 1.0),
        BlendMode => Range::of(0.0, 4.0),
        FrameBands => Range::of(1.0, 4.0),
    })
}

const fn r(min: f64, max: f64) -> Range {
    Range::of(min, max)
}

pub(crate) fn builtin_presets() -> ProcgenResult<Vec<Preset>> {
    Ok(vec![
        Preset::with_overrides(
            "liquid-ribbons",
            "Liquid Ribbons",
            0.11,
            &[
                (Warp, r(1.25, 2.4)),
                (Fold, r(0.0, 0.35)),
                (TileMix, r(0.0, 0.25)),
                (Sweep, r(0.1, 0.5)),
                (Ribbons, r(0.62, 1.0)),
                (Gloss, r(0.42, 1.0)),
                (Layers, r(3.0, 6.0)),
                (Smear, r(0.2, 0.85)),
                (SmearTaps, r(8.0, 24.0)),
                (Panels, r(1.0, 3.0)),
                (PanelHard, r(0.35, 0.9)),
                (Steps, r(0.0, 26.0)),
                (RgbSplit, r(0.05, 0.35)),
                (BlendMode, r(0.0, 3.0)),
                (FrameBands, r(2.0, 4.0)),
            ],
            STABLE_IRIDESCENT,
        )?,
        Preset::with_overrides(
            "panel-drift",
            "Panel Drift",
            0.14,
            &[
                (Warp, r(0.7, 1.7)),
                (Fold, r(0.25, 0.72)),
                (TileMix, r(0.25, 0.72)),
                (TileCount, r(6.0, 14.0)),
                (Sweep, r(0.28, 0.72)),
                (Gloss, r(0.35, 0.8)),
                (Layers, r(3.0, 6.0)),
                (Smear, r(0.35, 1.0)),
                (SmearTaps, r(10.0, 24.0)),
                (Panels, r(2.0, 4.0)),
                (PanelHard, r(0.65, 1.0)),
                (Steps, r(6.0, 48.0)),
                (RgbSplit, r(0.0, 0.25)),
                (BlendMode, r(0.0, 4.0)),
                (FrameBands, r(2.0, 4.0)),
            ],
            STABLE_IRIDESCENT,
        )?,
        Preset::with_overrides(
            "sweep-strata",
            "Sweep Strata",
            0.1,
            &[
                (Sweep, r(0.62, 1.0)),
                (Warp, r(0.7, 1.7)),
                (Fold, r(0.1, 0.55)),
                (TileMix, r(0.0, 0.28)),
                (Ribbons, r(0.35, 0.75)),
                (Gloss, r(0.3, 0.75)),
                (Layers, r(3.0, 5.0)),
                (Smear, r(0.15, 0.55)),
                (SmearTaps, r(6.0, 18.0)),
                (Panels, r(1.0, 3.0)),
                (PanelHard, r(0.4, 0.85)),
                (Steps, r(14.0, 64.0)),
                (RgbSplit, r(0.05, 0.4)),
                (BlendMode, r(0.0, 2.0)),
                (FrameBands, r(1.0, 4.0)),
            ],
            STABLE_IRIDESCENT,
        )?,
        Preset::with_overrides(
            "hard-fold-gloss",
            "Hard Fold Gloss",
            0.12,
            &[
                (Fold, r(0.62, 1.0)),
                (Warp, r(0.75, 1.8)),
                (TileMix, r(0.15, 0.5)),
                (Ribbons, r(0.6, 1.0)),
                (Sharp, r(1.2, 3.0)),
                (Gloss, r(0.62, 1.0)),
                (Layers, r(2.0, 5.0)),
                (Smear, r(0.05, 0.45)),
                (SmearTaps, r(6.0, 14.0)),
                (Panels, r(1.0, 4.0)),
                (PanelHard, r(0.75, 1.0)),
                (Steps, r(10.0, 56.0)),
                (RgbSplit, r(0.0, 0.2)),
                (BlendMode, r(2.0, 4.0)),
                (FrameBands, r(2.0, 4.0)),
            ],
            STABLE_IRIDESCENT,
        )?,
        Preset::with_overrides(
            "soft-bloom",
            "Soft Bloom",
            0.08,
            &[
                (Warp, r(0.55, 1.45)),
                (Fold, r(0.0, 0.28)),
                (TileMix, r(0.0, 0.22)),
                (Ribbons, r(0.25, 0.6)),
                (Sharp, r(0.2, 1.1)),
                (Gloss, r(0.1, 0.62)),
                (Layers, r(2.0, 4.0)),
                (Smear, r(0.2, 0.75)),
                (SmearTaps, r(10.0, 24.0)),
                (Panels, r(0.0, 2.0)),
                (PanelHard, r(0.15, 0.55)),
                (Steps, r(0.0, 22.0)),
                (RgbSplit, r(0.1, 0.55)),
                (BlendMode, r(0.0, 1.0)),
                (FrameBands, r(1.0, 3.0)),
            ],
            STABLE_IRIDESCENT,
        )?,
        Preset::with_overrides(
            "dense-interference",
            "Dense Interference",
            0.16,
            &[
                (FX, r(8.0, 24.0)),
                (FY, r(8.0, 24.0)),
                (FRad, r(6.0, 18.0)),
                (FAng, r(6.0, 18.0)),
                (Warp, r(0.75, 1.8)),
                (Ribbons, r(0.4, 0.85)),
                (Sharp, r(0.95, 2.7)),
                (Layers, r(4.0, 6.0)),
                (Smear, r(0.2, 0.8)),
                (SmearTaps, r(12.0, 24.0)),
                (Panels, r(1.0, 4.0)),
                (PanelHard, r(0.45, 0.95)),
                (Steps, r(12.0, 64.0)),
                (RgbSplit, r(0.0, 0.45)),
                (BlendMode, r(0.0, 4.0)),
                (FrameBands, r(2.0, 4.0)),
            ],
            STABLE_IRIDESCENT,
        )?,
    ])
}
