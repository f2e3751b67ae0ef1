//! IEEE-754 bridge: seeding and conversion without `std` float intrinsics.
//!
//! Only field extraction and basic arithmetic are used, so everything here
//! works in `core`. Conversions truncate toward zero; magnitudes beyond the
//! width wrap like every other construction path.

use fixdec_internals::{ConvertError, Digit};

use crate::logic::{tables, uint};

const F64_MANT_BITS: u32 = 52;
const F64_MANT_MASK: u64 = (1 << F64_MANT_BITS) - 1;
const F64_EXP_MASK: u64 = 0x7ff;
const F64_EXP_BIAS: i64 = 1023;
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Converts a non-negative finite float to words, truncating toward zero
pub(crate) fn f64_to_words<const N: usize>(v: f64) -> [Digit; N] {
    if v < 1.0 {
        return [0; N]
    }
    let bits = v.to_bits();
    let exp = (((bits >> F64_MANT_BITS) & F64_EXP_MASK) as i64) - F64_EXP_BIAS - (F64_MANT_BITS as i64);
    // v >= 1 implies a normal float, so the implicit bit is set
    let mant = (bits & F64_MANT_MASK) | (1 << F64_MANT_BITS);
    if exp >= 0 {
        if exp as usize >= N * 64 {
            return [0; N]
        }
        uint::shl(&uint::from_u64(mant), exp as usize)
    } else {
        // v >= 1 bounds the downshift at 52
        uint::from_u64(mant >> ((-exp) as u32))
    }
}

/// Raw words from a finite float: integer part scaled by `10^S` plus the
/// floor-scaled fraction, sign restored, precision policy applied.
pub(crate) fn from_f64<const N: usize, const N2: usize>(
    v: f64,
    table: &[[Digit; N]],
    scale: usize,
    scale_f64: f64,
) -> Result<[Digit; N], ConvertError> {
    if !v.is_finite() {
        return Err(ConvertError::NonFinite)
    }
    let negative = v.is_sign_negative();
    let v = if negative { -v } else { v };
    let (int_f, frac_f) = split(v);
    let int_words: [Digit; N] = f64_to_words(int_f);
    let frac_words: [Digit; N] = f64_to_words(frac_f * scale_f64);
    let mag = uint::add(&uint::mul_low(&int_words, &table[scale]), &frac_words);
    let raw = if negative { uint::neg(&mag) } else { mag };
    Ok(tables::apply_precision::<N, N2>(raw, table, scale))
}

/// Integer and fractional parts of a non-negative finite float
fn split(v: f64) -> (f64, f64) {
    // at and beyond 2^53 every representable float is integral
    if v >= 9_007_199_254_740_992.0 {
        return (v, 0.0)
    }
    let int_f = (v as u64) as f64;
    (int_f, v - int_f)
}

/// Approximate value of a raw decimal as a float, for seeding only
pub(crate) fn to_f64<const N: usize>(raw: &[Digit; N], scale_f64: f64) -> f64 {
    let (mag, negative) = crate::logic::arith::abs(raw);
    let mut f = 0.0;
    let mut i = N;
    while i > 0 {
        i -= 1;
        f = f * TWO_POW_64 + (mag[i] as f64);
    }
    let v = f / scale_f64;
    if negative {
        -v
    } else {
        v
    }
}

/// Square root approximation from the bit pattern plus a few float Newton
/// steps; `core` has no `f64::sqrt`. Good to roughly one unit in the last
/// place, which the decimal Newton loop then tightens.
pub(crate) fn sqrt_f64(v: f64) -> f64 {
    if v <= 0.0 || !v.is_finite() {
        return 1.0
    }
    // halve the unbiased exponent: (bits >> 1) + (1023 << 52) / 2
    let mut y = f64::from_bits((v.to_bits() >> 1) + 0x1ff8_0000_0000_0000);
    let mut i = 0;
    while i < 4 {
        y = 0.5 * (y + v / y);
        i += 1;
    }
    y
}
