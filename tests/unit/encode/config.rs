use super::*;

#[test]
fn defaults_are_in_range() {
    let cfg = EncodeConfig::default();
    assert_eq!(cfg, cfg.clamped());
    assert_eq!(cfg.color_depth(), 4);
    assert_eq!(cfg.bits_per_tile(), 6);
    assert_eq!(cfg.encode_id, DEFAULT_ENCODE_ID);
}

#[test]
fn out_of_range_values_clamp_to_defaults() {
    let cfg = EncodeConfig {
        color_bits: 4,
        ecc_bytes: 150,
        compression_level: 23,
        shaking: false,
        legacy_mode: true,
        encode_id: 3,
    }
    .clamped();
    assert_eq!(cfg.color_bits, DEFAULT_COLOR_BITS);
    assert_eq!(cfg.ecc_bytes, DEFAULT_ECC_BYTES);
    assert_eq!(cfg.compression_level, DEFAULT_COMPRESSION_LEVEL);
    assert!(!cfg.shaking);
    assert!(cfg.legacy_mode);
    assert_eq!(cfg.encode_id, 3);
}

#[test]
fn range_edges_are_kept() {
    let cfg = EncodeConfig {
        color_bits: 3,
        ecc_bytes: 149,
        compression_level: 22,
        ..EncodeConfig::default()
    };
    assert_eq!(cfg.clamped(), cfg);
    assert_eq!(cfg.color_depth(), 8);

    let zero = EncodeConfig {
        color_bits: 0,
        ecc_bytes: 0,
        compression_level: 0,
        ..EncodeConfig::default()
    };
    assert_eq!(zero.clamped(), zero);
    assert_eq!(zero.color_depth(), 1);
}

#[test]
fn same_encoding_ignores_encode_id() {
    let a = EncodeConfig::default();
    let b = EncodeConfig {
        encode_id: 1,
        ..a
    };
    assert!(a.same_encoding(&b));
    let c = EncodeConfig {
        shaking: !a.shaking,
        ..a
    };
    assert!(!a.same_encoding(&c));
}

#[test]
fn json_fills_defaults_and_clamps() {
    let cfg = EncodeConfig::from_json_str(r#"{"color_bits": 1, "ecc_bytes": 255}"#).unwrap();
    assert_eq!(cfg.color_bits, 1);
    assert_eq!(cfg.ecc_bytes, DEFAULT_ECC_BYTES);
    assert_eq!(cfg.compression_level, DEFAULT_COMPRESSION_LEVEL);
    assert!(cfg.shaking);

    assert!(EncodeConfig::from_json_str("{not json").is_err());
}

#[test]
fn encoder_opts_round_trip_through_json() {
    let opts: EncoderOpts = serde_json::from_str(r#"{"dark": false}"#).unwrap();
    assert!(!opts.dark);
    assert_eq!(opts.cell_gap_px, EncoderOpts::default().cell_gap_px);
    let back: EncoderOpts = serde_json::from_str(&serde_json::to_string(&opts).unwrap()).unwrap();
    assert_eq!(back, opts);
}
