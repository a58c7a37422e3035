//! cosh(x) implementation.
//!
//! Tier dispatch compares the exponent field of |x| directly against fixed
//! bit patterns rather than floating magnitudes, as fdlibm/V8 do. The NaN
//! check sits at the terminal branch: a NaN input fails every magnitude
//! comparison and would otherwise fall into the overflow return.

use super::{exp, expm1, fabs, hi_word};

const OVERFLOW: f64 = 710.4758600739439;

#[inline(always)]
pub fn cosh(x: f64) -> f64 {
    let ix = hi_word(x) & 0x7fff_ffff;

    // |x| < 0.5*ln2: 1 + expm1(|x|)^2/(2*exp(|x|))
    if ix < 0x3fd6_2e43 {
        let t = expm1(fabs(x));
        let w = 1.0 + t;
        if ix < 0x3c80_0000 {
            // |x| < 2^-55
            return w;
        }
        return 1.0 + (t * t) / (w + w);
    }

    // |x| in [0.5*ln2, 22]: (exp(|x|) + 1/exp(|x|))/2
    if ix < 0x4036_0000 {
        let t = exp(fabs(x));
        return 0.5 * t + 0.5 / t;
    }

    // |x| in [22, log(maxdouble)]: 1/exp(|x|) is negligible
    if ix < 0x4086_2e42 {
        return 0.5 * exp(fabs(x));
    }

    // [log(maxdouble), overflow threshold]: split the exponential
    if fabs(x) <= OVERFLOW {
        let w = exp(0.5 * fabs(x));
        let t = 0.5 * w;
        return t * w;
    }

    if x.is_nan() {
        return x;
    }
    f64::INFINITY
}
