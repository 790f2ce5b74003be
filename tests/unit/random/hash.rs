use super::*;

#[test]
fn empty_sequence_is_offset_basis() {
    assert_eq!(hash_seed(&[]), 2_166_136_261);
}

#[test]
fn fnv_matches_reference_vector() {
    let mut h = Fnv1a32::new();
    h.write_bytes(b"a");
    assert_eq!(h.finish(), 0xe40c_292c);
}

#[test]
fn parts_fold_little_endian_bytes() {
    let mut h = Fnv1a32::new();
    h.write_bytes(&[0x78, 0x56, 0x34, 0x12, 0x01, 0x00, 0x00, 0x00]);
    assert_eq!(hash_seed(&[0x1234_5678, 1]), h.finish());
}

#[test]
fn hash_is_deterministic_and_order_sensitive() {
    assert_eq!(hash_seed(&[7, 11]), hash_seed(&[7, 11]));
    assert_ne!(hash_seed(&[7, 11]), hash_seed(&[11, 7]));
    assert_ne!(hash_seed(&[7, 1]), hash_seed(&[7, 2]));
}

#[test]
fn float_hash_is_unit_interval() {
    for i in 0..4096 {
        let v = hash11(i as f32 * 0.37);
        assert!((0.0..=1.0).contains(&v));
        let r = rand01(&[i, 3]);
        assert!((0.0..=1.0).contains(&r));
    }
    assert_eq!(rand01(&[99, 1]).to_bits(), rand01(&[99, 1]).to_bits());
}
