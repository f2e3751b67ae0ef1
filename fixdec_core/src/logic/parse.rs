//! The lexical layer: one parser for every width.
//!
//! Accepted form: `[ws] [sign] digits [. digits] [(e|E) [sign] digits] [ws]`
//! with `_` separators permitted between digits. The exponent is applied
//! before scaling: the accumulated significand is multiplied by
//! `10^(exp - frac_digits + S)` when that shift is non-negative, otherwise
//! divided by the corresponding power of ten truncating toward zero.

use fixdec_internals::{ConvertError, Digit};

use crate::logic::{tables, uint};

/// Exponent magnitudes are clamped here; anything beyond it already shifts
/// every representable digit out of the value.
const EXP_CLAMP: i64 = 1 << 60;

pub(crate) fn from_bytes<const N: usize, const N2: usize>(
    src: &[u8],
    table: &[[Digit; N]],
    scale: usize,
) -> Result<[Digit; N], ConvertError> {
    // trim control bytes and spaces on both ends
    let mut start = 0;
    let mut end = src.len();
    while start < end && src[start] <= 0x20 {
        start += 1;
    }
    while end > start && src[end - 1] <= 0x20 {
        end -= 1;
    }
    let s = &src[start..end];
    if s.is_empty() {
        return Err(ConvertError::Empty)
    }

    let mut i = 0;
    let mut negative = false;
    match s[0] {
        b'+' => i = 1,
        b'-' => {
            negative = true;
            i = 1;
        }
        _ => (),
    }

    let mut val: [Digit; N] = [0; N];
    let mut digits = 0usize;
    let mut seen_dot = false;
    let mut frac_digits = 0usize;
    let mut has_exp = false;
    while i < s.len() {
        match s[i] {
            c @ b'0'..=b'9' => {
                val = uint::mul_digit(&val, 10);
                val = uint::add(&val, &uint::from_u64((c - b'0') as Digit));
                digits += 1;
                if seen_dot {
                    frac_digits += 1;
                }
            }
            b'_' => (),
            b'.' => {
                if seen_dot {
                    return Err(ConvertError::DuplicateDot)
                }
                seen_dot = true;
            }
            b'e' | b'E' => {
                has_exp = true;
                i += 1;
                break
            }
            _ => return Err(ConvertError::InvalidChar),
        }
        i += 1;
    }
    if digits == 0 {
        return Err(ConvertError::Empty)
    }

    let mut exp: i64 = 0;
    if has_exp {
        let mut exp_negative = false;
        if i < s.len() {
            match s[i] {
                b'+' => i += 1,
                b'-' => {
                    exp_negative = true;
                    i += 1;
                }
                _ => (),
            }
        }
        let mut exp_digits = 0usize;
        while i < s.len() {
            match s[i] {
                c @ b'0'..=b'9' => {
                    if exp < EXP_CLAMP {
                        exp = exp.saturating_mul(10).saturating_add((c - b'0') as i64);
                    }
                    exp_digits += 1;
                }
                b'_' => (),
                _ => return Err(ConvertError::InvalidChar),
            }
            i += 1;
        }
        if exp_digits == 0 {
            return Err(ConvertError::EmptyExponent)
        }
        if exp > EXP_CLAMP {
            exp = EXP_CLAMP;
        }
        if exp_negative {
            exp = -exp;
        }
    }

    // land the significand at the fixed scale
    let shift = exp - (frac_digits as i64) + (scale as i64);
    if shift >= 0 {
        val = uint::mul_low(&val, &tables::pow10_mod(shift as u64));
    } else {
        let div = tables::pow10_or_zero(table, (-shift) as usize);
        if uint::is_zero(&div) {
            // more digits shifted out than the width can even represent
            val = [0; N];
        } else {
            let wide: [Digit; N2] = uint::widen(&val);
            val = uint::divide::<N2, N>(&wide, &div).0;
        }
    }
    if negative {
        val = uint::neg(&val);
    }
    Ok(tables::apply_precision::<N, N2>(val, table, scale))
}
