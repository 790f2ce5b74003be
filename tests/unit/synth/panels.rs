use super::*;

fn grid(n: usize) -> impl Iterator<Item = V2> {
    (0..n).flat_map(move |i| {
        (0..n).map(move |j| V2::new((i as f32 + 0.5) / n as f32, (j as f32 + 0.5) / n as f32))
    })
}

#[test]
fn zero_panels_leave_the_field_untouched() {
    let masks = PanelMasks::new(11, 0.0, 1.0);
    assert_eq!(masks.active, 0);
    for uv in grid(16) {
        let s = masks.sample(uv);
        assert_eq!(s.mask, 0.0);
        assert_eq!(s.graphic, 0.0);
    }
}

#[test]
fn panel_count_is_rounded_and_capped() {
    assert_eq!(PanelMasks::new(1, 1.4, 1.0).active, 1);
    assert_eq!(PanelMasks::new(1, 1.6, 1.0).active, 2);
    assert_eq!(PanelMasks::new(1, 9.0, 1.0).active, 4);
}

#[test]
fn samples_stay_in_unit_interval() {
    for seed in 0..8 {
        let masks = PanelMasks::new(seed, 4.0, 1.0);
        for uv in grid(24) {
            let s = masks.sample(uv);
            assert!((0.0..=1.0).contains(&s.mask));
            assert!((0.0..=1.0).contains(&s.graphic));
        }
    }
}

#[test]
fn soft_panels_are_nearly_inert() {
    let masks = PanelMasks::new(5, 4.0, 0.0);
    for uv in grid(16) {
        assert!(masks.sample(uv).mask <= 0.08 + 1e-6);
    }
}

#[test]
fn hard_band_covers_part_of_the_frame() {
    let masks = PanelMasks::new(9, 1.0, 1.0);
    let covered = grid(32).filter(|&uv| masks.sample(uv).mask > 0.5).count();
    assert!(covered > 0);
    assert!(covered < 32 * 32);
}
