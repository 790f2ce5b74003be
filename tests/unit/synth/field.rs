use super::*;

fn shape() -> FieldShape {
    FieldShape {
        warp: 1.5,
        warp_passes: 4,
        fold: 0.3,
        tile_mix: 0.2,
        tile_count: 5.0,
        sweep: 0.4,
        f_rad: 6.0,
        f_ang: 3.0,
        f_x: 9.0,
        f_y: 12.0,
        ribbons: 0.7,
        sharp: 1.3,
    }
}

#[test]
fn layer_signal_is_bounded_and_deterministic() {
    let layer = LayerPlan::new(42, 0);
    let s = shape();
    for i in 0..32 {
        for j in 0..32 {
            let p = V2::new(i as f32 / 16.0 - 1.0, j as f32 / 16.0 - 1.0);
            let v = layer_signal(&s, &layer, p);
            assert!((-1.0..=1.0).contains(&v), "{v}");
            assert_eq!(v.to_bits(), layer_signal(&s, &LayerPlan::new(42, 0), p).to_bits());
        }
    }
}

#[test]
fn layers_decorrelate_by_index() {
    let s = shape();
    let a = LayerPlan::new(7, 0);
    let b = LayerPlan::new(7, 1);
    let differs = (0..16).any(|i| {
        let p = V2::new(i as f32 * 0.1 - 0.8, 0.3);
        layer_signal(&s, &a, p) != layer_signal(&s, &b, p)
    });
    assert!(differs);
}

#[test]
fn zero_passes_ignore_warp_strength() {
    let layer = LayerPlan::new(3, 2);
    let mut calm = shape();
    calm.warp_passes = 0;
    let mut wild = calm;
    wild.warp = 2.5;
    let p = V2::new(0.2, -0.4);
    assert_eq!(layer_signal(&calm, &layer, p), layer_signal(&wild, &layer, p));
}
