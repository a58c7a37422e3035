//! exp(x) implementation.
//!
//! fdlibm scheme: reduce x = k*ln2 + r with a hi/lo split of ln2, evaluate a
//! degree-5 rational fit of (e^r - 1)/r on |r| <= 0.5*ln2, then scale by 2^k
//! through the exponent field. Serves as the collaborator for the
//! hyperbolic tiers; evaluation order is load-bearing for the sub-ulp error
//! bound, so no fused operations.

use super::{hi_word, lo_word, with_hi_lo};

const ONE: f64 = 1.0;
const HUGE: f64 = 1.0e300;
const TWOM1000: f64 = 9.33263618503218878990e-302; // 2^-1000
const O_THRESHOLD: f64 = 7.09782712893383973096e+02; // 0x40862E42FEFA39EF
const U_THRESHOLD: f64 = -7.45133219101941108420e+02; // 0xC0874910D52D3051
const LN2_HI: f64 = 6.93147180369123816490e-01; // 0x3FE62E42FEE00000
const LN2_LO: f64 = 1.90821492927058770002e-10; // 0x3DEA39EF35793C76
const INVLN2: f64 = 1.44269504088896338700e+00; // 0x3FF71547652B82FE

const P1: f64 = 1.66666666666666019037e-01; // 0x3FC555555555553E
const P2: f64 = -2.77777777770155933842e-03; // 0xBF66C16C16BEBD93
const P3: f64 = 6.61375632143793436117e-05; // 0x3F11566AAF25DE2C
const P4: f64 = -1.65339022054652515390e-06; // 0xBEBBBD41C5D26BF1
const P5: f64 = 4.13813679705723846039e-08; // 0x3E66376972BEA4D0

#[inline(always)]
pub fn exp(mut x: f64) -> f64 {
    let hx = hi_word(x);
    let sign_neg = (hx >> 31) != 0;
    let hx = hx & 0x7fff_ffff;

    if hx >= 0x4086_2e42 {
        // |x| >= 709.78: overflow/underflow/non-finite region
        if hx >= 0x7ff0_0000 {
            if ((hx & 0xf_ffff) | lo_word(x)) != 0 {
                return x + x; // NaN
            }
            return if sign_neg { 0.0 } else { x }; // exp(-inf)=0, exp(inf)=inf
        }
        if x > O_THRESHOLD {
            return HUGE * HUGE;
        }
        if x < U_THRESHOLD {
            return TWOM1000 * TWOM1000;
        }
    }

    // argument reduction: x = k*ln2 + hi - lo
    let mut k = 0i32;
    let mut hi = 0.0;
    let mut lo = 0.0;
    if hx > 0x3fd6_2e42 {
        // |x| > 0.5*ln2
        if hx < 0x3ff0_a2b2 {
            // |x| < 1.5*ln2: k is +/-1
            if sign_neg {
                k = -1;
                hi = x + LN2_HI;
                lo = -LN2_LO;
            } else {
                k = 1;
                hi = x - LN2_HI;
                lo = LN2_LO;
            }
        } else {
            k = (INVLN2 * x + if sign_neg { -0.5 } else { 0.5 }) as i32;
            let t = k as f64;
            hi = x - t * LN2_HI; // t*LN2_HI is exact here
            lo = t * LN2_LO;
        }
        x = hi - lo;
    } else if hx < 0x3e30_0000 {
        // |x| < 2^-28
        if HUGE + x > ONE {
            return ONE + x; // inexact
        }
    }

    // x is now in the primary range
    let t = x * x;
    let c = x - t * (P1 + t * (P2 + t * (P3 + t * (P4 + t * P5))));
    if k == 0 {
        return ONE - ((x * c) / (c - 2.0) - x);
    }
    let y = ONE - ((lo - (x * c) / (2.0 - c)) - hi);
    if k >= -1021 {
        let yh = hi_word(y).wrapping_add((k as u32) << 20);
        return with_hi_lo(yh, lo_word(y));
    }
    let yh = hi_word(y).wrapping_add(((k + 1000) as u32) << 20);
    with_hi_lo(yh, lo_word(y)) * TWOM1000
}
