//! Argument reduction modulo pi/2.
//!
//! `rem_pio2` maps a finite double to a quadrant count `n` and a
//! double-double remainder `(y0, y1)` with `|y0 + y1| <= pi/4` and
//! `n` the integer nearest `2x/pi`. Three escalating tiers of split pi/2
//! constants cover |x| up to 2^19*pi/2; beyond that a Payne-Hanek core
//! recovers the remainder from a 24-bit-limb expansion of 2/pi.

use super::{fabs, floor_f64, hi_word, lo_word, scalbn, with_hi_lo};

const INVPIO2: f64 = 6.36619772367581382433e-01; // 0x3FE45F306DC9C883
const PIO2_1: f64 = 1.57079632673412561417e+00; // 0x3FF921FB54400000
const PIO2_1T: f64 = 6.07710050650619224932e-11; // 0x3DD0B4611A626331
const PIO2_2: f64 = 6.07710050630396597660e-11; // 0x3DD0B4611A600000
const PIO2_2T: f64 = 2.02226624879595063154e-21; // 0x3BA3198A2E037073
const PIO2_3: f64 = 2.02226624871116645580e-21; // 0x3BA3198A2E000000
const PIO2_3T: f64 = 8.47842766036889956997e-32; // 0x397B839A252049C1

/// Reduce `x` to `(n, y0, y1)` with `x = n*pi/2 + y0 + y1`.
///
/// Finite `x` only; the caller screens NaN and infinity.
#[inline(always)]
pub(super) fn rem_pio2(x: f64) -> (i32, f64, f64) {
    let hx = hi_word(x) as i32;
    let ix = (hx & 0x7fff_ffff) as u32;

    // |x| <= pi/4, no reduction
    if ix <= 0x3fe9_21fbu32 {
        return (0, x, 0.0);
    }

    // |x| < 3pi/4: n is +/-1, one compensated subtraction
    if ix < 0x4002_d97cu32 {
        if hx > 0 {
            let z = x - PIO2_1;
            if ix != 0x3ff9_21fbu32 {
                // 33+53 bit pi is good enough
                let y0 = z - PIO2_1T;
                let y1 = (z - y0) - PIO2_1T;
                return (1, y0, y1);
            }
            // near pi/2, use 33+33+53 bit pi
            let z = z - PIO2_2;
            let y0 = z - PIO2_2T;
            let y1 = (z - y0) - PIO2_2T;
            return (1, y0, y1);
        }
        let z = x + PIO2_1;
        if ix != 0x3ff9_21fbu32 {
            let y0 = z + PIO2_1T;
            let y1 = (z - y0) + PIO2_1T;
            return (-1, y0, y1);
        }
        let z = z + PIO2_2;
        let y0 = z + PIO2_2T;
        let y1 = (z - y0) + PIO2_2T;
        return (-1, y0, y1);
    }

    // |x| <= 2^19*pi/2, medium size
    if ix <= 0x4139_21fbu32 {
        let t = fabs(x);
        let n = (t * INVPIO2 + 0.5) as i32;
        let fn_ = n as f64;
        let mut r = t - fn_ * PIO2_1;
        let mut w = fn_ * PIO2_1T;
        // first round good to 85 bits
        let mut y0 = r - w;
        if (ix as i32) - ((hi_word(y0) & 0x7ff0_0000) as i32) > 0x0100_0000 {
            // second iteration, good to 118 bits
            let t2 = r;
            w = fn_ * PIO2_2;
            r = t2 - w;
            w = fn_ * PIO2_2T - ((t2 - r) - w);
            y0 = r - w;
            if (ix as i32) - ((hi_word(y0) & 0x7ff0_0000) as i32) > 0x0310_0000 {
                // third iteration, 151 bits
                let t3 = r;
                w = fn_ * PIO2_3;
                r = t3 - w;
                w = fn_ * PIO2_3T - ((t3 - r) - w);
                y0 = r - w;
            }
        }
        let y1 = (r - y0) - w;
        if hx < 0 {
            return (-n, -y0, -y1);
        }
        return (n, y0, y1);
    }

    if ix >= 0x7ff0_0000u32 {
        return (0, f64::NAN, f64::NAN);
    }

    // huge: split |x| into up to three 24-bit chunks scaled to [2^23, 2^24)
    // and hand them to the Payne-Hanek core
    let e0 = ((ix >> 20) as i32) - 1046; // ilogb(x) - 23
    let hi = ix - ((e0 as u32) << 20);
    let mut z = with_hi_lo(hi, lo_word(x));

    let mut tx = [0.0f64; 3];
    for chunk in tx.iter_mut().take(2) {
        *chunk = (z as i32) as f64;
        z = (z - *chunk) * TWO24;
    }
    tx[2] = z;

    let mut nx = 3;
    while nx > 0 && tx[nx - 1] == 0.0 {
        nx -= 1;
    }
    if nx == 0 {
        return (0, 0.0, 0.0);
    }

    let (n, y0, y1) = payne_hanek(&tx, e0, nx as i32);
    if hx < 0 {
        (-n, -y0, -y1)
    } else {
        (n, y0, y1)
    }
}

// ---- Payne-Hanek core (fdlibm __kernel_rem_pio2, two-term result) ----

// 2/pi in 24-bit limbs
const TWO_OVER_PI: [u32; 66] = [
    0xa2f983, 0x6e4e44, 0x1529fc, 0x2757d1, 0xf534dd, 0xc0db62, 0x95993c, 0x439041, 0xfe5163,
    0xabdebb, 0xc561b7, 0x246e3a, 0x424dd2, 0xe00649, 0x2eea09, 0xd1921c, 0xfe1deb, 0x1cb129,
    0xa73ee8, 0x8235f5, 0x2ebb44, 0x84e99c, 0x7026b4, 0x5f7e41, 0x3991d6, 0x398353, 0x39f49c,
    0x845f8b, 0xbdf928, 0x3b1ff8, 0x97ffde, 0x05980f, 0xef2f11, 0x8b5a0a, 0x6d1f6d, 0x367ecf,
    0x27cb09, 0xb74f46, 0x3f669e, 0x5fea2d, 0x7527ba, 0xc7ebe5, 0xf17b3d, 0x0739f7, 0x8a5292,
    0xea6bfb, 0x5fb11f, 0x8d5d08, 0x560330, 0x46fc7b, 0x6babf0, 0xcfbc20, 0x9af436, 0x1da9e3,
    0x91615e, 0xe61b08, 0x659985, 0x5f14a0, 0x68408d, 0xffd880, 0x4d7327, 0x310606, 0x1556ca,
    0x73a8c9, 0x60e27b, 0xc08c6b,
];

// pi/2 in 24-bit double chunks
const PIO2_CHUNKS: [f64; 8] = [
    1.57079625129699707031e+00,
    7.54978941586159635335e-08,
    5.39030252995776476554e-15,
    3.28200341580791294123e-22,
    1.27065575308067607349e-29,
    1.22933308981111328932e-36,
    2.73370053816464559624e-44,
    2.16741683877804819444e-51,
];

const TWO24: f64 = 1.67772160000000000000e+07; // 2^24
const TWON24: f64 = 5.96046447753906250000e-08; // 2^-24

// number of 2/pi terms carried; 4 terms give the 118+ bits the two-word
// result needs
const JK: i32 = 4;

/// Reduce the chunked value `x[0..nx]*2^e0` modulo pi/2.
///
/// Returns `(n & 7, y0, y1)` where `y0 + y1` is the remainder. Straight port
/// of the fdlibm limb algorithm: accumulate x against the 2/pi table,
/// distill integer limbs, detect the nearest-multiple rounding via the
/// leading limb bit, recompute with more terms when the result cancels to
/// zero, then multiply the fraction back by pi/2.
fn payne_hanek(x: &[f64; 3], e0: i32, nx: i32) -> (i32, f64, f64) {
    let mut iq = [0i32; 20];
    let mut f = [0f64; 20];
    let mut fq = [0f64; 20];
    let mut q = [0f64; 20];

    let jx = nx - 1;
    let mut jv = (e0 - 3) / 24;
    if jv < 0 {
        jv = 0;
    }
    let mut q0 = e0 - 24 * (jv + 1);

    // set up f[] with the needed 2/pi terms, padding below with zeros
    let mut j = jv - jx;
    let m = (jx + JK) as usize;
    for fi in f.iter_mut().take(m + 1) {
        *fi = if j < 0 {
            0.0
        } else {
            TWO_OVER_PI[j as usize] as f64
        };
        j += 1;
    }

    for i in 0..=(JK as usize) {
        let mut fw = 0.0;
        for jj in 0..=(jx as usize) {
            fw += x[jj] * f[(jx as usize + i) - jj];
        }
        q[i] = fw;
    }

    let mut jz = JK;

    'recompute: loop {
        // distill q[] into 24-bit integer limbs iq[], least significant first
        let mut z = q[jz as usize];
        let mut i = 0usize;
        let mut jj = jz;
        while jj > 0 {
            let fw = ((TWON24 * z) as i32) as f64;
            iq[i] = (z - TWO24 * fw) as i32;
            z = q[(jj - 1) as usize] + fw;
            i += 1;
            jj -= 1;
        }

        // integer part of z mod 8
        z = scalbn(z, q0);
        z -= 8.0 * floor_f64(z * 0.125);
        let mut n = z as i32;
        z -= n as f64;

        // ih > 0 means the fraction is >= 0.5, so round to the next multiple
        let mut ih = 0;
        if q0 > 0 {
            let i2 = iq[(jz - 1) as usize] >> (24 - q0);
            n += i2;
            iq[(jz - 1) as usize] -= i2 << (24 - q0);
            ih = iq[(jz - 1) as usize] >> (23 - q0);
        } else if q0 == 0 {
            ih = iq[(jz - 1) as usize] >> 23;
        } else if z >= 0.5 {
            ih = 2;
        }

        if ih > 0 {
            n += 1;
            // negate the fraction: iq becomes its 24-bit complement
            let mut carry = 0;
            for limb in iq.iter_mut().take(jz as usize) {
                if carry == 0 {
                    if *limb != 0 {
                        carry = 1;
                        *limb = 0x0100_0000 - *limb;
                    }
                } else {
                    *limb = 0x00ff_ffff - *limb;
                }
            }
            if q0 > 0 {
                match q0 {
                    1 => iq[(jz - 1) as usize] &= 0x7f_ffff,
                    2 => iq[(jz - 1) as usize] &= 0x3f_ffff,
                    _ => {}
                }
            }
            if ih == 2 {
                z = 1.0 - z;
                if carry != 0 {
                    z -= scalbn(1.0, q0);
                }
            }
        }

        // if the fraction cancelled to exactly zero, more 2/pi terms are
        // needed to decide the result
        if z == 0.0 {
            let mut nonzero = 0;
            for limb in iq.iter().take(jz as usize).skip(JK as usize) {
                nonzero |= *limb;
            }
            if nonzero == 0 {
                let mut k = 1;
                while iq[(JK - k) as usize] == 0 {
                    k += 1;
                }
                for ii in (jz + 1)..=(jz + k) {
                    f[(jx + ii) as usize] = TWO_OVER_PI[(jv + ii) as usize] as f64;
                    let mut fw = 0.0;
                    for jj in 0..=(jx as usize) {
                        fw += x[jj] * f[(jx as usize + ii as usize) - jj];
                    }
                    q[ii as usize] = fw;
                }
                jz += k;
                continue 'recompute;
            }
        }

        // chop off trailing zero limbs, or carry an overflowed top limb
        if z == 0.0 {
            jz -= 1;
            q0 -= 24;
            while iq[jz as usize] == 0 {
                jz -= 1;
                q0 -= 24;
            }
        } else {
            z = scalbn(z, -q0);
            if z >= TWO24 {
                let fw = ((TWON24 * z) as i32) as f64;
                iq[jz as usize] = (z - TWO24 * fw) as i32;
                jz += 1;
                q0 += 24;
                iq[jz as usize] = fw as i32;
            } else {
                iq[jz as usize] = z as i32;
            }
        }

        // convert the limbs back to doubles
        let mut fw = scalbn(1.0, q0);
        for i in (0..=(jz as usize)).rev() {
            q[i] = fw * (iq[i] as f64);
            fw *= TWON24;
        }

        // multiply by pi/2, most significant products first
        for i in (0..=(jz as usize)).rev() {
            let mut acc = 0.0;
            let mut k = 0usize;
            while k < PIO2_CHUNKS.len() && k <= (jz as usize - i) {
                acc += PIO2_CHUNKS[k] * q[i + k];
                k += 1;
            }
            fq[jz as usize - i] = acc;
        }

        // compress fq[] into the two result words
        let mut head = 0.0;
        for i in (0..=(jz as usize)).rev() {
            head += fq[i];
        }
        let mut tail = fq[0] - head;
        for i in 1..=(jz as usize) {
            tail += fq[i];
        }
        let (y0, y1) = if ih == 0 {
            (head, tail)
        } else {
            (-head, -tail)
        };
        return (n & 7, y0, y1);
    }
}
