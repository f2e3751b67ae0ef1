//! Digit-position rounding and shifting.
//!
//! Position `n` counts fractional digits when positive and integer positions
//! when negative (`n = -k` targets the `10^k` place). All operators share the
//! same clamps: `n` above the scale returns the value unchanged, `n` at or
//! below the negated scale returns zero. In between, the magnitude is split
//! as `u = q * 10^(S - n) + r` and each mode decides whether `q` gains one.

use core::cmp::Ordering;

use fixdec_internals::Digit;

use crate::logic::{arith, uint};

/// Carry rule selector for [round_at]
#[derive(Clone, Copy)]
pub(crate) enum Mode {
    /// Drop the remainder: `Truncate` and `RoundTowardZero`
    TowardZero,
    /// Any nonzero remainder grows the magnitude
    AwayFromZero,
    /// Banker's rounding: past half up, at half to even
    HalfEven,
    /// Toward positive infinity
    Ceil,
    /// Toward negative infinity
    Floor,
}

pub(crate) fn round_at<const N: usize, const N2: usize>(
    raw: &[Digit; N],
    n: i32,
    mode: Mode,
    table: &[[Digit; N]],
    scale: usize,
) -> [Digit; N] {
    if (n as i64) > (scale as i64) {
        return *raw
    }
    if (n as i64) <= -(scale as i64) {
        return [0; N]
    }
    let (mag, negative) = arith::abs(raw);
    let k = ((scale as i64) - (n as i64)) as usize;
    let factor = &table[k];
    let wide: [Digit; N2] = uint::widen(&mag);
    let (q, r) = uint::divide::<N2, N>(&wide, factor);
    let increment = match mode {
        Mode::TowardZero => false,
        Mode::AwayFromZero => !uint::is_zero(&r),
        Mode::HalfEven => {
            // compare 2r against the factor; ties go to the even quotient
            let twice = uint::shl(&r, 1);
            match uint::cmp(&twice, factor) {
                Ordering::Greater => true,
                Ordering::Equal => (q[0] & 1) != 0,
                Ordering::Less => false,
            }
        }
        Mode::Ceil => !uint::is_zero(&r) && !negative,
        Mode::Floor => !uint::is_zero(&r) && negative,
    };
    let q = if increment {
        uint::add(&q, &uint::from_u64(1))
    } else {
        q
    };
    arith::with_sign(uint::mul_low(&q, factor), negative)
}

/// Moves the decimal point: positive `n` multiplies by `10^n` wrapping,
/// negative `n` divides by `10^|n|` truncating toward zero. Shares the
/// digit-position clamps of [round_at].
pub(crate) fn shift_digits<const N: usize, const N2: usize>(
    raw: &[Digit; N],
    n: i32,
    table: &[[Digit; N]],
    scale: usize,
) -> [Digit; N] {
    if (n as i64) > (scale as i64) {
        return *raw
    }
    if (n as i64) <= -(scale as i64) {
        return [0; N]
    }
    if n == 0 {
        return *raw
    }
    if n > 0 {
        // a positive power of ten preserves two's complement under wrapping
        // multiplication, so no sign dance is needed
        uint::mul_low(raw, &table[n as usize])
    } else {
        let (mag, negative) = arith::abs(raw);
        let wide: [Digit; N2] = uint::widen(&mag);
        let (q, _) = uint::divide::<N2, N>(&wide, &table[(-n) as usize]);
        arith::with_sign(q, negative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::tables::POW10_128;

    #[test]
    fn half_even_tie_goes_to_even() {
        // 1.25 at one fractional digit: tie, quotient 12 is even, stays
        let raw = uint::mul_digit(&POW10_128[14], 125);
        let out = round_at::<2, 4>(&raw, 1, Mode::HalfEven, &POW10_128, 16);
        assert_eq!(out, uint::mul_digit(&POW10_128[15], 12));
        // 1.35: tie, quotient 13 is odd, bumps to 14
        let raw = uint::mul_digit(&POW10_128[14], 135);
        let out = round_at::<2, 4>(&raw, 1, Mode::HalfEven, &POW10_128, 16);
        assert_eq!(out, uint::mul_digit(&POW10_128[15], 14));
    }
}
