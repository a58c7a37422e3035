//! Double-precision tan and hyperbolic functions.
//!
//! Algorithms follow fdlibm (Sun) as adapted by the V8 runtime: bit-level
//! magnitude classification, three-tier compensated subtraction of pi/2
//! multiples, a Payne-Hanek core for huge arguments, and tiered closed-form
//! hyperbolics over exp/expm1. Everything is no_std; the only module-level
//! state is immutable constant tables.

#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]

mod cosh;
mod exp;
mod expm1;
mod rem_pio2;
mod sinh;
mod tan;
mod tanh;

pub use cosh::cosh;
pub use exp::exp;
pub use expm1::expm1;
pub use sinh::sinh;
pub use tan::tan;
pub use tanh::tanh;

// ========= bit helpers =========

#[inline(always)]
fn hi_word(x: f64) -> u32 {
    (x.to_bits() >> 32) as u32
}

#[inline(always)]
fn lo_word(x: f64) -> u32 {
    (x.to_bits() & 0xffff_ffffu64) as u32
}

#[inline(always)]
fn with_hi_lo(hi: u32, lo: u32) -> f64 {
    f64::from_bits(((hi as u64) << 32) | (lo as u64))
}

#[inline(always)]
fn fabs(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & 0x7fff_ffff_ffff_ffffu64)
}

/// scalbn(x, n): multiply by 2^n without calling any libm.
///
/// Only exercised by the Payne-Hanek core, which feeds it normal values and
/// exponents far from the overflow/underflow cliffs, but the staged scaling
/// keeps the helper total and correctly rounded anyway.
#[inline(always)]
fn scalbn(x: f64, mut n: i32) -> f64 {
    const TWO1023: f64 = f64::from_bits(0x7fe0_0000_0000_0000u64);
    const TWOM1022: f64 = f64::from_bits(0x0010_0000_0000_0000u64);
    const TWO53: f64 = f64::from_bits(0x4340_0000_0000_0000u64);

    let mut y = x;
    if n > 1023 {
        y *= TWO1023;
        n -= 1023;
        if n > 1023 {
            y *= TWO1023;
            n -= 1023;
            if n > 1023 {
                n = 1023;
            }
        }
    } else if n < -1022 {
        y *= TWOM1022 * TWO53;
        n += 1022 - 53;
        if n < -1022 {
            y *= TWOM1022 * TWO53;
            n += 1022 - 53;
            if n < -1022 {
                n = -1022;
            }
        }
    }
    y * f64::from_bits(((0x3ff + n) as u64) << 52)
}

/// floor(x) via bit manipulation (no libm).
#[inline(always)]
fn floor_f64(x: f64) -> f64 {
    let u = x.to_bits();
    let sx = u >> 63;
    let e = ((u >> 52) & 0x7ff) as i32;
    if e == 0x7ff {
        return x;
    }
    let j0 = e - 1023;
    if j0 < 0 {
        // |x| < 1
        return if sx == 1 && (u << 1) != 0 { -1.0 } else { 0.0 };
    }
    if j0 >= 52 {
        return x;
    }
    let mask = (1u64 << (52 - j0)) - 1;
    if (u & mask) == 0 {
        return x;
    }
    let mut ui = u & !mask;
    if sx == 1 {
        ui = ui.wrapping_add(1u64 << (52 - j0));
    }
    f64::from_bits(ui)
}
