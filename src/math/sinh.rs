//! sinh(x) implementation.
//!
//! Tiered by |x|: expm1-based formulas below 22 keep full precision through
//! the cancellation-prone region, a single exp covers the mid range, and a
//! split exponential exp(x/2)^2 avoids premature overflow just below the
//! cliff. Thresholds follow fdlibm/V8.

use super::{exp, expm1, fabs};

const TWO_M28: f64 = 3.725290298461914e-09; // 2^-28, empty lower half
const LOG_MAXD: f64 = 709.7822265625; // 0x40862E4200000000, empty lower half
const OVERFLOW: f64 = 710.4758600739439;

#[inline(always)]
pub fn sinh(x: f64) -> f64 {
    // h carries both the sign and the /2 of (e^x - e^-x)/2
    let h = if x < 0.0 { -0.5 } else { 0.5 };
    let ax = fabs(x);
    if ax < 22.0 {
        if ax < TWO_M28 {
            return x;
        }
        let t = expm1(ax);
        if ax < 1.0 {
            return h * (2.0 * t - t * t / (t + 1.0));
        }
        return h * (t + t / (t + 1.0));
    }
    // |x| in [22, log(maxdouble)]: e^-x is negligible
    if ax < LOG_MAXD {
        return h * exp(ax);
    }
    // |x| in [log(maxdouble), overflow threshold]
    if ax <= OVERFLOW {
        let w = exp(0.5 * ax);
        let t = h * w;
        return t * w;
    }
    // overflow, or NaN (every comparison above is false for NaN)
    x * f64::INFINITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_threshold_is_exact() {
        assert!(sinh(OVERFLOW).is_finite());
        assert_eq!(sinh(OVERFLOW.next_up()), f64::INFINITY);
        assert_eq!(sinh(-OVERFLOW.next_up()), f64::NEG_INFINITY);
        assert_eq!(sinh(711.0), f64::INFINITY);
    }

    #[test]
    fn split_exponential_stays_finite() {
        // plain exp would overflow on this tier
        let y = sinh(710.0);
        assert!(y.is_finite());
        assert!((y / 1.1169973830808555e308 - 1.0).abs() < 1e-14);
    }

    #[test]
    fn nan_flows_through_terminal_branch() {
        // NaN falls through every magnitude tier; x * INFINITY must stay NaN
        assert!(sinh(f64::NAN).is_nan());
    }
}
