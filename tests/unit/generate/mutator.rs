use super::*;
use crate::generate::sampler::sample_params;
use crate::schema::preset::PresetCatalog;

/// Replay the draws `mutate_params` makes: one jitter per field, the pick, then the nudge.
fn replay_nudge(rng: &SeededRng) -> (ParamKey, f64) {
    let mut replay = rng.clone();
    for _ in ParamKey::ALL {
        replay.signed();
    }
    let key = *replay.pick(&ParamKey::STRUCTURAL).unwrap();
    (key, replay.signed())
}

#[test]
fn children_stay_in_range() {
    let catalog = PresetCatalog::builtin().unwrap();
    for preset in catalog.iter() {
        let mut rng = SeededRng::new(31);
        let mut params = sample_params(preset, &mut rng);
        for _ in 0..200 {
            params = mutate_params(&params, preset, &mut rng);
            assert!(preset.param_ranges().contains(&params), "{}", preset.id());
        }
    }
}

#[test]
fn mutation_is_local() {
    let catalog = PresetCatalog::builtin().unwrap();
    for preset in catalog.iter() {
        let m = preset.mutation_strength();
        for seed in 0..300u32 {
            let mut rng = SeededRng::new(seed);
            let parent = sample_params(preset, &mut rng);
            let (nudged, _) = replay_nudge(&rng);
            let child = mutate_params(&parent, preset, &mut rng);
            for (key, range) in preset.param_ranges().iter() {
                let mut bound = range.span() * m;
                if key == nudged {
                    bound *= STRUCTURAL_NUDGE;
                }
                if key.is_integer() {
                    bound += 0.5;
                }
                let delta = (child.get(key) - parent.get(key)).abs();
                assert!(
                    delta <= bound + 1e-9,
                    "{} {key}: |{delta}| > {bound}",
                    preset.id()
                );
            }
        }
    }
}

#[test]
fn some_structural_field_moves_beyond_plain_jitter() {
    let catalog = PresetCatalog::builtin().unwrap();
    let preset = catalog.get("panel-drift").unwrap();
    let m = preset.mutation_strength();
    let mut wide = 0;
    for seed in 0..200u32 {
        let mut rng = SeededRng::new(seed ^ 0x5a5a);
        let parent = sample_params(preset, &mut rng);
        let (key, _) = replay_nudge(&rng);
        let child = mutate_params(&parent, preset, &mut rng);
        if (child.get(key) - parent.get(key)).abs() > preset.range(key).span() * m {
            wide += 1;
        }
    }
    assert!(wide > 20, "only {wide} wide nudges");
}

#[test]
fn mutation_is_reproducible() {
    let catalog = PresetCatalog::builtin().unwrap();
    let preset = catalog.get("liquid-ribbons").unwrap();
    let parent = sample_params(preset, &mut SeededRng::new(1));
    let a = mutate_params(&parent, preset, &mut SeededRng::new(2));
    let b = mutate_params(&parent, preset, &mut SeededRng::new(2));
    assert_eq!(a, b);
    assert_ne!(a, parent);
}

#[test]
fn nudge_replaces_the_jitter_of_its_field() {
    let catalog = PresetCatalog::builtin().unwrap();
    for preset in catalog.iter() {
        let m = preset.mutation_strength();
        for seed in 0..50u32 {
            let mut rng = SeededRng::new(seed);
            let parent = sample_params(preset, &mut rng);
            let (key, draw) = replay_nudge(&rng);
            let child = mutate_params(&parent, preset, &mut rng);
            let range = preset.range(key);
            let expected = settle(
                key,
                range,
                parent.get(key) + draw * range.span() * m * STRUCTURAL_NUDGE,
            );
            assert_eq!(child.get(key), expected, "{} {key}", preset.id());
        }
    }
}
