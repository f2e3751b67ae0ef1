//! Sign-normalized scaled arithmetic.
//!
//! Every operation here follows the same shape: strip signs, compute on
//! magnitudes with a double-width intermediate where the scale factor
//! requires it, then reapply the result sign. Division and modulo by zero
//! return the dividend unchanged; long operator chains stay total.

use core::cmp::Ordering;

use fixdec_internals::Digit;

use crate::logic::uint;

/// Magnitude and sign of a raw value
#[inline]
pub(crate) const fn abs<const N: usize>(raw: &[Digit; N]) -> ([Digit; N], bool) {
    if uint::is_neg(raw) {
        (uint::neg(raw), true)
    } else {
        (*raw, false)
    }
}

/// Negates the magnitude back when the result sign is negative
#[inline]
pub(crate) const fn with_sign<const N: usize>(mag: [Digit; N], negative: bool) -> [Digit; N] {
    if negative {
        uint::neg(&mag)
    } else {
        mag
    }
}

/// `(a * b) / 10^S`: the exact double-width product collapsed back to the
/// fixed scale by one double-by-single division
pub(crate) fn mul_scaled<const N: usize, const N2: usize>(
    a: &[Digit; N],
    b: &[Digit; N],
    pow10_s: &[Digit; N],
) -> [Digit; N] {
    let (ma, na) = abs(a);
    let (mb, nb) = abs(b);
    let prod: [Digit; N2] = uint::mul(&ma, &mb);
    let (q, _) = uint::divide::<N2, N>(&prod, pow10_s);
    with_sign(q, na != nb)
}

/// `(a * 10^S) / b`, truncating toward zero. Division by zero returns `a`.
pub(crate) fn div_scaled<const N: usize, const N2: usize>(
    a: &[Digit; N],
    b: &[Digit; N],
    pow10_s: &[Digit; N],
) -> [Digit; N] {
    if uint::is_zero(b) {
        return *a
    }
    let (ma, na) = abs(a);
    let (mb, nb) = abs(b);
    let num: [Digit; N2] = uint::mul(&ma, pow10_s);
    let (q, _) = uint::divide::<N2, N>(&num, &mb);
    with_sign(q, na != nb)
}

/// Remainder of the truncating division; the result carries the dividend's
/// sign. Modulo by zero returns `a`.
pub(crate) fn rem_trunc<const N: usize, const N2: usize>(
    a: &[Digit; N],
    b: &[Digit; N],
) -> [Digit; N] {
    if uint::is_zero(b) {
        return *a
    }
    let (ma, na) = abs(a);
    let (mb, _) = abs(b);
    let wide: [Digit; N2] = uint::widen(&ma);
    let (_, r) = uint::divide::<N2, N>(&wide, &mb);
    with_sign(r, na)
}

/// Multiplicative inverse `10^(2S) / raw`. Zero returns itself.
pub(crate) fn recip<const N: usize, const N2: usize>(
    raw: &[Digit; N],
    pow10_2s: &[Digit; N],
) -> [Digit; N] {
    if uint::is_zero(raw) {
        return *raw
    }
    let (mag, negative) = abs(raw);
    let num: [Digit; N2] = uint::widen(pow10_2s);
    let (q, _) = uint::divide::<N2, N>(&num, &mag);
    with_sign(q, negative)
}

/// Scales a non-negative raw value by `2^k`: a wrapping left shift for
/// positive `k`, a truncating right shift for negative `k`. This is the
/// final `· 2^k` step of the exponential range reconstruction.
pub(crate) fn shift_pow2<const N: usize>(raw: &[Digit; N], k: i64) -> [Digit; N] {
    let width = (N * 64) as i64;
    if k >= 0 {
        if k >= width {
            return [0; N]
        }
        uint::shl(raw, k as usize)
    } else {
        if -k >= width {
            return [0; N]
        }
        uint::shr(raw, (-k) as usize)
    }
}

/// `x.LessThan(y)` and friends reduce to this signed three-way compare
#[inline]
pub(crate) const fn cmp_signed<const N: usize>(a: &[Digit; N], b: &[Digit; N]) -> Ordering {
    uint::cmp_signed(a, b)
}
