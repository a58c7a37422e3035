//! expm1(x) implementation.
//!
//! fdlibm scheme: after the k*ln2 reduction a degree-5 rational fit delivers
//! e^r - 1 without the catastrophic cancellation exp(x) - 1 would suffer for
//! small x. The 2^k rescaling splits into several cases so the final
//! subtraction of 1 never loses low bits.

use super::{hi_word, lo_word, with_hi_lo};

const ONE: f64 = 1.0;
const HUGE: f64 = 1.0e300;
const TINY: f64 = 1.0e-300;
const O_THRESHOLD: f64 = 7.09782712893383973096e+02; // 0x40862E42FEFA39EF
const LN2_HI: f64 = 6.93147180369123816490e-01; // 0x3FE62E42FEE00000
const LN2_LO: f64 = 1.90821492927058770002e-10; // 0x3DEA39EF35793C76
const INVLN2: f64 = 1.44269504088896338700e+00; // 0x3FF71547652B82FE

// scaled coefficients of the rational fit on [-0.5*ln2, 0.5*ln2]
const Q1: f64 = -3.33333333333331316428e-02; // 0xBFA11111111110F4
const Q2: f64 = 1.58730158725481460165e-03; // 0x3F5A01A019FE5585
const Q3: f64 = -7.93650757867487942473e-05; // 0xBF14CE199EAADBB7
const Q4: f64 = 4.00821782732936239552e-06; // 0x3ED0CFCA86E65239
const Q5: f64 = -2.01099218183624371326e-07; // 0xBE8AFDB76E09C32D

#[inline(always)]
fn set_high_word(x: f64, hi: u32) -> f64 {
    with_hi_lo(hi, lo_word(x))
}

#[inline(always)]
pub fn expm1(mut x: f64) -> f64 {
    let hx = hi_word(x);
    let xsb = hx & 0x8000_0000;
    let hx = hx & 0x7fff_ffff;

    // filter the huge, non-finite and saturated-negative cases
    if hx >= 0x4043_687a {
        // |x| >= 56*ln2
        if hx >= 0x4086_2e42 {
            if hx >= 0x7ff0_0000 {
                if ((hx & 0xf_ffff) | lo_word(x)) != 0 {
                    return x + x; // NaN
                }
                return if xsb == 0 { x } else { -1.0 }; // expm1(+/-inf)
            }
            if x > O_THRESHOLD {
                return HUGE * HUGE;
            }
        }
        if xsb != 0 {
            // x < -56*ln2: expm1 = -1 to working precision
            return TINY - ONE;
        }
    }

    // argument reduction
    let mut k = 0i32;
    let mut c = 0.0;
    if hx > 0x3fd6_2e42 {
        // |x| > 0.5*ln2
        let (hi, lo) = if hx < 0x3ff0_a2b2 {
            if xsb == 0 {
                k = 1;
                (x - LN2_HI, LN2_LO)
            } else {
                k = -1;
                (x + LN2_HI, -LN2_LO)
            }
        } else {
            k = (INVLN2 * x + if xsb == 0 { 0.5 } else { -0.5 }) as i32;
            let t = k as f64;
            (x - t * LN2_HI, t * LN2_LO)
        };
        x = hi - lo;
        c = (hi - x) - lo;
    } else if hx < 0x3c90_0000 {
        // |x| < 2^-54: expm1(x) = x to working precision
        let t = HUGE + x;
        return x - (t - (HUGE + x));
    }

    // rational approximation of expm1 on the reduced interval
    let hfx = 0.5 * x;
    let hxs = x * hfx;
    let r1 = ONE + hxs * (Q1 + hxs * (Q2 + hxs * (Q3 + hxs * (Q4 + hxs * Q5))));
    let t = 3.0 - r1 * hfx;
    let mut e = hxs * ((r1 - t) / (6.0 - x * t));

    if k == 0 {
        // no scaling needed
        return x - (x * e - hxs);
    }

    e = (x * (e - c) - c) - hxs;
    if k == -1 {
        return 0.5 * (x - e) - 0.5;
    }
    if k == 1 {
        if x < -0.25 {
            return -2.0 * (e - (x + 0.5));
        }
        return ONE + 2.0 * (x - e);
    }

    if k <= -2 || k > 56 {
        // result dominates the subtracted 1
        let y = ONE - (e - x);
        let yh = hi_word(y).wrapping_add((k as u32) << 20);
        return set_high_word(y, yh) - ONE;
    }

    if k < 20 {
        let t = set_high_word(ONE, 0x3ff0_0000 - (0x0020_0000 >> k)); // 1 - 2^-k
        let y = t - (e - x);
        let yh = hi_word(y).wrapping_add((k as u32) << 20);
        return set_high_word(y, yh);
    }

    let t = set_high_word(ONE, (0x3ffu32.wrapping_sub(k as u32)) << 20); // 2^-k
    let mut y = x - (e + t);
    y += ONE;
    let yh = hi_word(y).wrapping_add((k as u32) << 20);
    set_high_word(y, yh)
}
