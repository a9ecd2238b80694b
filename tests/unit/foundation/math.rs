use super::*;

#[rustfmt::skip]
const SAMPLE: Mat3 = Mat3([
    [ 2.0, 0.0, 1.0],
    [ 1.0, 3.0, 0.0],
    [ 0.0, 1.0, 4.0],
]);

#[test]
fn identity_is_neutral() {
    assert_eq!(Mat3::IDENTITY * SAMPLE, SAMPLE);
    assert_eq!(SAMPLE * Mat3::IDENTITY, SAMPLE);
    assert_eq!(Mat3::IDENTITY.mul_vec([1.5, -2.0, 3.0]), [1.5, -2.0, 3.0]);
}

#[test]
fn inverse_round_trips_to_identity() {
    let inv = SAMPLE.inv().unwrap();
    assert!((SAMPLE * inv).approx_eq(&Mat3::IDENTITY, 1e-12));
    assert!((inv * SAMPLE).approx_eq(&Mat3::IDENTITY, 1e-12));
}

#[test]
fn singular_matrix_has_no_inverse() {
    let m = Mat3([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
    assert_eq!(m.det(), 0.0);
    assert!(m.inv().is_none());
}

#[test]
fn diag_scales_components() {
    let d = Mat3::diag([2.0, 3.0, 0.5]);
    assert_eq!(d * [1.0, 1.0, 4.0], [2.0, 3.0, 2.0]);
}
