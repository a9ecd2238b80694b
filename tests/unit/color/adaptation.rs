use super::*;

fn assert_close(actual: f64, expected: f64, eps: f64) {
    assert!(
        (actual - expected).abs() <= eps,
        "expected {expected}, got {actual} (eps {eps})"
    );
}

#[test]
fn von_kries_matrix_matches_reference_values() {
    let m = get_adaptation_matrix([192.0, 255.0, 255.0], [255.0, 255.0, 255.0]).unwrap();
    let rows = m.matrix().rows();

    let expected = [
        [1.065577644398845, 0.2109225385610203, -0.01323982375544511],
        [0.02316834486251534, 0.9872336916455102, -0.00467809248316883],
        [0.0, 0.0, 1.0],
    ];
    for (row, exp_row) in rows.iter().zip(expected.iter()) {
        for (v, e) in row.iter().zip(exp_row.iter()) {
            assert_close(*v, *e, 1e-12);
        }
    }
    assert_eq!(rows[2], [0.0, 0.0, 1.0]);
}

#[test]
fn transform_adapts_sample() {
    let cc = ColorCorrector::new((192.0, 255.0, 255.0), (255.0, 255.0, 255.0)).unwrap();
    let [r, g, b] = cc.transform([180.0, 98.0, 255.0]);
    assert_close(r, 209.09822971, 1e-5);
    assert_close(g, 99.72629027, 1e-5);
    assert_close(b, 255.0, 1e-5);
}

#[test]
fn same_white_point_is_identity() {
    for w in [[255.0, 255.0, 255.0], [192.0, 240.0, 210.0], [1.0, 2.0, 3.0]] {
        let m = get_adaptation_matrix(w, w).unwrap();
        assert_eq!(*m.matrix(), Mat3::IDENTITY);

        let cc = ColorCorrector::from_matrix(m);
        assert_eq!(cc.transform([12.5, 200.0, 3.0]), [12.5, 200.0, 3.0]);
    }
}

#[test]
fn zero_source_channel_is_rejected() {
    let err = get_adaptation_matrix([0.0, 255.0, 255.0], [255.0, 255.0, 255.0]).unwrap_err();
    assert!(matches!(err, ChromacastError::InvalidWhitePoint(_)));

    let err = get_adaptation_matrix([f64::NAN, 255.0, 255.0], [255.0, 255.0, 255.0]).unwrap_err();
    assert!(matches!(err, ChromacastError::InvalidWhitePoint(_)));

    let err = get_adaptation_matrix([255.0, 255.0, 255.0], [255.0, -1.0, 255.0]).unwrap_err();
    assert!(matches!(err, ChromacastError::InvalidWhitePoint(_)));
}

#[test]
fn inverse_undoes_adaptation() {
    let cc = ColorCorrector::new((192.0, 255.0, 255.0), (255.0, 255.0, 255.0)).unwrap();
    let back = cc.inverse().unwrap();
    let sample = [180.0, 98.0, 255.0];
    let round = back.transform(cc.transform(sample));
    for (a, b) in round.iter().zip(sample.iter()) {
        assert_close(*a, *b, 1e-9);
    }
}

#[test]
fn bradford_basis_also_maps_white_to_white() {
    let src = WhitePoint::new(230.0, 250.0, 200.0);
    let dst = WhitePoint::new(255.0, 255.0, 255.0);
    let m = adaptation_matrix_in(AdaptationBasis::Bradford, src, dst).unwrap();
    let out = m.matrix().mul_vec(src.channels());
    for (a, b) in out.iter().zip(dst.channels().iter()) {
        assert_close(*a, *b, 1e-9);
    }
    assert_eq!(m.basis(), AdaptationBasis::Bradford);
}

#[test]
fn update_recomputes_only_on_change() {
    let mut cc = ColorCorrector::new((255.0, 255.0, 255.0), (255.0, 255.0, 255.0)).unwrap();
    cc.update((255.0, 255.0, 255.0), (255.0, 255.0, 255.0))
        .unwrap();
    assert_eq!(*cc.adaptation().matrix(), Mat3::IDENTITY);

    cc.update((192.0, 255.0, 255.0), (255.0, 255.0, 255.0))
        .unwrap();
    assert_close(cc.adaptation().matrix().rows()[0][0], 1.065577644398845, 1e-12);
    assert_eq!(cc.adaptation().src(), WhitePoint::new(192.0, 255.0, 255.0));

    assert!(cc.update((0.0, 0.0, 0.0), (255.0, 255.0, 255.0)).is_err());
    // a rejected update keeps the previous matrix
    assert_eq!(cc.adaptation().src(), WhitePoint::new(192.0, 255.0, 255.0));
}

#[test]
fn correct_image_matches_per_pixel_path() {
    let cc = ColorCorrector::new((192.0, 255.0, 255.0), (255.0, 255.0, 255.0)).unwrap();
    let mut img = image::RgbImage::from_fn(5, 3, |x, y| {
        image::Rgb([(x * 40) as u8, (y * 90) as u8, 200])
    });
    let expected: Vec<image::Rgb<u8>> = img.pixels().map(|p| cc.correct_rgb8(*p)).collect();

    cc.correct_image(&mut img);
    let got: Vec<image::Rgb<u8>> = img.pixels().copied().collect();
    assert_eq!(got, expected);

    assert_eq!(
        cc.correct_rgb8(image::Rgb([180, 98, 255])),
        image::Rgb([209, 100, 255])
    );
}
