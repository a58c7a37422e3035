//! tan(x) implementation.
//!
//! A degree-27 odd minimax polynomial covers the reduced domain
//! [-pi/4, pi/4]; quadrant parity from the reduction selects between tan and
//! -1/tan. Near the pi/4 boundary the kernel folds through
//! tan(x) = (1 - tan(pi/4 - x))/(1 + tan(pi/4 - x)), and reciprocals are
//! rebuilt with a split-word compensation step so cot stays accurate near
//! its pole. Constants follow fdlibm/V8.

use super::rem_pio2::rem_pio2;
use super::{fabs, hi_word, lo_word, with_hi_lo};

const EXP_MASK: u64 = 0x7ff0_0000_0000_0000u64;

const PIO4: f64 = 7.85398163397448278999e-01; // 0x3FE921FB54442D18
const PIO4_LO: f64 = 3.06161699786838301793e-17; // 0x3C81A62633145C07

// tan(x)/x - 1 minimax coefficients on [0, 0.67434]
const T: [f64; 13] = [
    3.33333333333334091986e-01,
    1.33333333333201242699e-01,
    5.39682539762260521377e-02,
    2.18694882948595424599e-02,
    8.86323982359930005737e-03,
    3.59207910759131235356e-03,
    1.45620945432529025516e-03,
    5.88041240820264096874e-04,
    2.46463134818469906812e-04,
    7.81794442939557092300e-05,
    7.14072491382608190305e-05,
    -1.85586374855275456654e-05,
    2.59073051863633712884e-05,
];

/// -1/w to better than working precision.
///
/// Splits `w` and the first-cut reciprocal at the 32-bit word boundary so
/// the residual `1 + t*z + t*v` can be folded back in exactly.
#[inline(always)]
fn neg_recip(w: f64, x: f64, tail: f64) -> f64 {
    let z = with_hi_lo(hi_word(w), 0);
    let v = tail - (z - x);
    let a = -1.0 / w;
    let t = with_hi_lo(hi_word(a), 0);
    let s = 1.0 + t * z;
    t + a * (s + t * v)
}

/// Kernel: tan (mode = 1) or -1/tan (mode = -1) of the double-double
/// `x + y`, which the caller has reduced to [-pi/4, pi/4].
fn kernel_tan(mut x: f64, mut y: f64, mode: i32) -> f64 {
    let hx = hi_word(x) as i32;
    let ix = hx & 0x7fff_ffff;

    if ix < 0x3e30_0000 {
        // |x| < 2^-28: polynomial terms are negligible
        if (ix as u32 | lo_word(x)) == 0 && mode == -1 {
            // cot(0) pole
            return 1.0 / fabs(x);
        }
        if mode == 1 {
            return x;
        }
        return neg_recip(x + y, x, y);
    }

    let folded = ix >= 0x3fe5_9428; // |x| >= 0.6744
    if folded {
        if hx < 0 {
            x = -x;
            y = -y;
        }
        let z = PIO4 - x;
        let w = PIO4_LO - y;
        x = z + w;
        y = 0.0;
    }

    let z = x * x;
    let w = z * z;
    // split the odd tail into even and odd powers of z so the two Horner
    // chains can run in parallel
    let r = T[1] + w * (T[3] + w * (T[5] + w * (T[7] + w * (T[9] + w * T[11]))));
    let v = z * (T[2] + w * (T[4] + w * (T[6] + w * (T[8] + w * (T[10] + w * T[12])))));
    let s = z * x;
    let mut r = y + z * (s * (r + v) + y);
    r += T[0] * s;
    let w = x + r;

    if folded {
        // undo the fold; one expression restores both the original sign and
        // the tan/cot duality
        let m = mode as f64;
        return ((1 - ((hx >> 30) & 2)) as f64) * (m - 2.0 * (x - (w * w / (w + m) - r)));
    }
    if mode == 1 {
        return w;
    }
    neg_recip(w, x, r)
}

/// tan(x), correctly rounded over the full double range.
#[inline(always)]
pub fn tan(x: f64) -> f64 {
    let xb = x.to_bits();
    if (xb & EXP_MASK) == EXP_MASK {
        // NaN and +/-infinity
        return f64::NAN;
    }

    if (hi_word(x) & 0x7fff_ffff) <= 0x3fe9_21fb {
        // |x| < pi/4, no reduction needed
        return kernel_tan(x, 0.0, 1);
    }
    let (n, y0, y1) = rem_pio2(x);
    kernel_tan(y0, y1, if n & 1 != 0 { -1 } else { 1 })
}
