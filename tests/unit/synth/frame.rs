use super::*;

#[test]
fn centre_is_untouched_without_bands() {
    let plan = FramePlan::new(3, 0.5, 0.0);
    let col = V3::new(0.2, 0.4, 0.6);
    assert_eq!(plan.apply(col, V2::new(0.5, 0.5)), col);
}

#[test]
fn border_darkens_towards_the_edge() {
    let plan = FramePlan::new(3, 0.5, 0.0);
    let col = V3::new(1.0, 1.0, 1.0);
    let at_edge = plan.apply(col, V2::new(0.0, 0.5));
    assert!((at_edge.x - 0.24).abs() < 1e-6);
    let near = plan.apply(col, V2::new(0.02, 0.5));
    assert!(near.x > at_edge.x && near.x < 1.0);
}

#[test]
fn band_count_is_rounded_and_capped() {
    assert_eq!(FramePlan::new(1, 0.0, 2.4).count, 2);
    assert_eq!(FramePlan::new(1, 0.0, 9.0).count, 4);
    assert_eq!(FramePlan::new(1, 0.0, -1.0).count, 0);
}

#[test]
fn bands_tint_near_the_border() {
    let bare = FramePlan::new(8, 0.2, 0.0);
    let banded = FramePlan::new(8, 0.2, 4.0);
    let col = V3::new(0.5, 0.5, 0.5);
    let differs = (0..200).any(|i| {
        let uv = V2::new(i as f32 / 2000.0, 0.5);
        bare.apply(col, uv) != banded.apply(col, uv)
    });
    assert!(differs);
    assert_eq!(bare.apply(col, V2::new(0.5, 0.5)), banded.apply(col, V2::new(0.5, 0.5)));
}
