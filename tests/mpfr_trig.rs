#![cfg(feature = "mpfr")]

//! MPFR accuracy sweeps for the four public functions.
//!
//! Walks bit-level neighborhoods around the anchors where each
//! implementation changes formula, comparing against 256-bit MPFR. Run with
//! `cargo test --features mpfr`.

use rug::Float;

const MPFR_PREC: u32 = 256;
const SWEEP_RADIUS: i64 = 256;
const ULP_TOL: f64 = 1.5;

fn mpfr_unary(x: f64, f: fn(&mut Float)) -> f64 {
    let mut v = Float::with_val(MPFR_PREC, x);
    f(&mut v);
    v.to_f64()
}

fn ulp_size(x: f64) -> f64 {
    if x == 0.0 {
        return f64::from_bits(1);
    }
    if x.is_nan() || x.is_infinite() {
        return f64::NAN;
    }
    let next = if x.is_sign_negative() {
        x.next_down()
    } else {
        x.next_up()
    };
    (next - x).abs()
}

fn ulp_error(actual: f64, expected: f64) -> f64 {
    if actual.to_bits() == expected.to_bits() {
        return 0.0;
    }
    let diff = (actual - expected).abs();
    let ulp = ulp_size(expected);
    if !ulp.is_finite() || ulp == 0.0 {
        return f64::INFINITY;
    }
    diff / ulp
}

/// Sweep `radius` representable values on each side of every anchor.
fn sweep(
    name: &str,
    anchors: &[f64],
    ours: fn(f64) -> f64,
    reference: fn(&mut Float),
) {
    let mut worst = 0.0f64;
    let mut worst_x = 0.0f64;
    for &anchor in anchors {
        let mut x = anchor;
        for _ in 0..SWEEP_RADIUS {
            x = x.next_down();
        }
        for _ in 0..(2 * SWEEP_RADIUS + 1) {
            let expected = mpfr_unary(x, reference);
            let actual = ours(x);
            if expected.is_nan() {
                assert!(actual.is_nan(), "{name}({x}): expected NaN, got {actual}");
            } else if expected.is_infinite() {
                assert_eq!(actual, expected, "{name}({x})");
            } else {
                let err = ulp_error(actual, expected);
                if err > worst {
                    worst = err;
                    worst_x = x;
                }
            }
            x = x.next_up();
        }
    }
    assert!(
        worst <= ULP_TOL,
        "{name}: worst error {worst} ulp at {worst_x:e}"
    );
}

#[test]
fn tan_neighborhood_sweep() {
    let anchors = [
        1e-9,
        0.5,
        0.6744,
        std::f64::consts::FRAC_PI_4,
        1.0,
        std::f64::consts::FRAC_PI_2,
        2.0,
        10.0,
        1e3,
        1e5,
    ];
    sweep("tan", &anchors, exactrig::tan, Float::tan_mut);
}

#[test]
fn sinh_neighborhood_sweep() {
    let anchors = [1e-9, 0.5, 1.0, 5.0, 22.0, 100.0, 709.7822265625, 710.0];
    sweep("sinh", &anchors, exactrig::sinh, Float::sinh_mut);
}

#[test]
fn cosh_neighborhood_sweep() {
    let anchors = [1e-17, 0.25, 0.3465735912322998, 1.0, 22.0, 100.0, 710.0];
    sweep("cosh", &anchors, exactrig::cosh, Float::cosh_mut);
}

#[test]
fn tanh_neighborhood_sweep() {
    let anchors = [1e-17, 0.25, 0.5, 1.0, 2.0, 10.0, 21.9];
    sweep("tanh", &anchors, exactrig::tanh, Float::tanh_mut);
}
