//! lcms transforms against the CMYK profile committed under `testdata/profiles`.
//!
//! The profile maps Lab straight to ink: K follows lightness, C and M split
//! the a* axis and Y takes positive b*.

use sidewalk_icc::{CmykTransform, ColorTransform, IccError, Profile};
use std::path::{Path, PathBuf};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../testdata/profiles/sidewalk_test_cmyk.icc")
}

fn transform() -> CmykTransform {
    CmykTransform::from_file(&fixture()).unwrap()
}

fn ink(t: &CmykTransform, r: f32, g: f32, b: f32) -> [f32; 4] {
    t.to_cmyk(&[r, g, b, 1.0]).unwrap()
}

#[test]
fn loads_as_cmyk() {
    let profile = Profile::from_file(&fixture()).unwrap();
    assert!(profile.is_cmyk());
    assert!(!profile.is_rgb());
    assert!(profile.description().contains("sidewalk test CMYK"));
    assert!(transform().description().contains("sidewalk test CMYK"));
}

#[test]
fn white_takes_no_ink() {
    let [c, m, y, k] = ink(&transform(), 1.0, 1.0, 1.0);
    for v in [c, m, y, k] {
        assert!(v < 0.01, "white -> {:?}", [c, m, y, k]);
    }
}

#[test]
fn black_is_pure_k() {
    let [c, m, y, k] = ink(&transform(), 0.0, 0.0, 0.0);
    assert!((0.95..1.05).contains(&k), "k = {k}");
    assert!(c < 0.01 && m < 0.01 && y < 0.01, "black -> {:?}", [c, m, y, k]);
}

#[test]
fn primaries_land_on_expected_inks() {
    let t = transform();

    let [c, m, y, _] = ink(&t, 1.0, 0.0, 0.0);
    assert!(c < 0.05, "red c = {c}");
    assert!((0.5..0.75).contains(&m), "red m = {m}");
    assert!((0.4..0.7).contains(&y), "red y = {y}");

    let [c, m, _, _] = ink(&t, 0.0, 1.0, 0.0);
    assert!(c > 0.5, "green c = {c}");
    assert!(m < 0.05, "green m = {m}");

    let [c, m, y, k] = ink(&t, 0.5, 0.5, 0.5);
    assert!(c < 0.02 && m < 0.02 && y < 0.02, "grey -> {:?}", [c, m, y, k]);
    assert!((0.3..0.7).contains(&k), "grey k = {k}");
}

#[test]
fn deterministic_and_alpha_blind() {
    let t = transform();
    let opaque = t.to_cmyk(&[0.2, 0.6, 0.9, 1.0]).unwrap();
    assert_eq!(t.to_cmyk(&[0.2, 0.6, 0.9, 1.0]).unwrap(), opaque);
    assert_eq!(t.to_cmyk(&[0.2, 0.6, 0.9, 0.0]).unwrap(), opaque);
    assert!(opaque.iter().all(|v| (0.0..=1.0).contains(v)));
}

#[test]
fn rejects_rgb_arity() {
    let err = transform().to_cmyk(&[0.2, 0.6, 0.9]).unwrap_err();
    assert!(matches!(err, IccError::InvalidInput(_)));
    assert!(!err.is_profile_error());
}
