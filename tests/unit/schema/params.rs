use super::*;

#[test]
fn keys_are_in_declaration_order() {
    assert_eq!(ParamKey::ALL.len(), PARAM_COUNT);
    assert_eq!(ParamKey::ALL[0], ParamKey::Warp);
    assert_eq!(ParamKey::ALL[PARAM_COUNT - 1], ParamKey::FrameBands);
    for (i, k) in ParamKey::ALL.iter().enumerate() {
        assert_eq!(*k as usize, i);
    }
}

#[test]
fn integer_fields_match_schema() {
    let ints: Vec<_> = ParamKey::ALL
        .iter()
        .copied()
        .filter(|k| k.is_integer())
        .collect();
    assert_eq!(
        ints,
        vec![
            ParamKey::WarpPasses,
            ParamKey::TileCount,
            ParamKey::Layers,
            ParamKey::SmearTaps,
            ParamKey::Panels,
            ParamKey::Steps,
            ParamKey::BlendMode,
            ParamKey::FrameBands,
        ]
    );
    assert_eq!(ParamKey::Layers.quantize(3.5), 4.0);
    assert_eq!(ParamKey::Fold.quantize(0.37), 0.37);
}

#[test]
fn names_round_trip_and_unknown_names_fail() {
    for k in ParamKey::ALL {
        assert_eq!(k.as_str().parse::<ParamKey>().unwrap(), k);
    }
    assert_eq!("smear_taps".parse::<ParamKey>().unwrap(), ParamKey::SmearTaps);
    let err = "wobble".parse::<ParamKey>().unwrap_err();
    assert!(matches!(err, ProcgenError::UnknownParam(ref n) if n == "wobble"));
}

#[test]
fn serde_names_match_as_str() {
    for k in ParamKey::ALL {
        let json = serde_json::to_string(&k).unwrap();
        assert_eq!(json, format!("\"{}\"", k.as_str()));
    }
}

#[test]
fn get_set_cover_every_field() {
    let mut p = Params::default();
    for (i, k) in ParamKey::ALL.iter().enumerate() {
        p.set(*k, i as f64 + 0.5);
    }
    for (i, k) in ParamKey::ALL.iter().enumerate() {
        assert_eq!(p.get(*k), i as f64 + 0.5);
    }
}

#[test]
fn ranges_index_and_validate() {
    let mut r = ParamRanges::from_fn(|_| Range::of(0.0, 1.0));
    assert!(r.validate().is_ok());
    r[ParamKey::Steps] = Range::of(64.0, 0.0);
    let err = r.validate().unwrap_err().to_string();
    assert!(err.contains("steps"), "{err}");
}
