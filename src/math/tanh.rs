//! tanh(x) implementation.
//!
//! expm1(+/-2|x|) keeps the quotient forms fully accurate below |x| = 22;
//! beyond that tanh has saturated to within half an ulp of +/-1.

use super::{expm1, fabs};

const TWO_M55: f64 = 2.77555756156289135105e-17; // 2^-55, empty lower half

#[inline(always)]
pub fn tanh(x: f64) -> f64 {
    if !x.is_finite() {
        if x > 0.0 {
            return 1.0;
        }
        if x < 0.0 {
            return -1.0;
        }
        return x; // NaN
    }

    let ax = fabs(x);
    let z;
    if ax < 22.0 {
        if ax < TWO_M55 {
            return x;
        }
        if ax >= 1.0 {
            let t = expm1(2.0 * ax);
            z = 1.0 - 2.0 / (t + 2.0);
        } else {
            let t = expm1(-2.0 * ax);
            z = -t / (t + 2.0);
        }
    } else {
        z = 1.0;
    }
    if x >= 0.0 { z } else { -z }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturation() {
        assert_eq!(tanh(22.0), 1.0);
        assert_eq!(tanh(-22.0), -1.0);
        assert_eq!(tanh(1e300), 1.0);
        assert_eq!(tanh(f64::INFINITY), 1.0);
        assert_eq!(tanh(f64::NEG_INFINITY), -1.0);
    }

    #[test]
    fn tiny_identity() {
        let x = 1e-20;
        assert_eq!(tanh(x).to_bits(), x.to_bits());
        assert_eq!(tanh(-x).to_bits(), (-x).to_bits());
        assert_eq!(tanh(0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(tanh(-0.0).to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn one_is_a_tier_boundary() {
        let below = tanh(1.0f64.next_down());
        let above = tanh(1.0);
        assert!((above - below).abs() <= 4.0 * f64::EPSILON);
    }
}
