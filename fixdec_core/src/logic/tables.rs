//! Powers of ten and the precision policy.
//!
//! Each width carries a compile-time table of `10^k` word arrays covering
//! `k` in `0..=M`, where `M` is the largest power of ten below `2^W`. Lookups
//! past the table yield zero, which downstream division paths read as "the
//! base-10 representation overflowed" and collapse to zero.

use fixdec_internals::*;

use crate::logic::uint;

/// Builds the `10^k` table for one width in a const context. `COUNT` must
/// not exceed `M + 1`; the builder checks that no entry overflows.
const fn build_pow10<const N: usize, const COUNT: usize>() -> [[Digit; N]; COUNT] {
    let mut t = [[0; N]; COUNT];
    t[0] = uint::from_u64(1);
    let mut k = 1;
    while k < COUNT {
        let (next, carry) = uint::mul_digit_carry(&t[k - 1], 10);
        assert!(carry == 0);
        t[k] = next;
        k += 1;
    }
    t
}

/// `10^k` for `k ∈ [0, 38]` as 128-bit words
pub(crate) const POW10_128: [[Digit; 2]; 39] = build_pow10();

/// `10^k` for `k ∈ [0, 77]` as 256-bit words
pub(crate) const POW10_256: [[Digit; 4]; 78] = build_pow10();

/// `10^k` for `k ∈ [0, 154]` as 512-bit words
pub(crate) const POW10_512: [[Digit; 8]; 155] = build_pow10();

/// `10^k` from a width's table, or zero when `k` exceeds the width's digit
/// capacity
#[inline]
pub(crate) fn pow10_or_zero<const N: usize>(table: &[[Digit; N]], k: usize) -> [Digit; N] {
    if k < table.len() {
        table[k]
    } else {
        [0; N]
    }
}

/// `10^k mod 2^(64 * N)` by square-and-multiply, for the wrapping exponent
/// shifts of the parser. Unlike the tables this accepts any `k`; for
/// `k >= 64 * N` the result is naturally zero since `2^(64 * N)` divides
/// `10^k`.
pub(crate) const fn pow10_mod<const N: usize>(mut k: u64) -> [Digit; N] {
    let mut result: [Digit; N] = uint::from_u64(1);
    let mut base: [Digit; N] = uint::from_u64(10);
    while k != 0 {
        if (k & 1) != 0 {
            result = uint::mul_low(&result, &base);
        }
        base = uint::mul_low(&base, &base);
        k >>= 1;
    }
    result
}

/// Enforces the per-width digit caps after a construction that could
/// exceed it: the integer part is reduced modulo `10^S` while the fractional
/// part (already exactly `S` digits by construction) is preserved, and the
/// sign is reapplied.
pub(crate) const fn apply_precision<const N: usize, const N2: usize>(
    raw: [Digit; N],
    table: &[[Digit; N]],
    scale: usize,
) -> [Digit; N] {
    let negative = uint::is_neg(&raw);
    let mag = if negative { uint::neg(&raw) } else { raw };
    let pow10_s = &table[scale];
    let wide: [Digit; N2] = uint::widen(&mag);
    let (int_part, frac_part) = uint::divide::<N2, N>(&wide, pow10_s);
    let int_wide: [Digit; N2] = uint::widen(&int_part);
    let (_, int_mod) = uint::divide::<N2, N>(&int_wide, pow10_s);
    let rebuilt = uint::add(&uint::mul_low(&int_mod, pow10_s), &frac_part);
    if negative {
        uint::neg(&rebuilt)
    } else {
        rebuilt
    }
}

/// `ln 2` scaled by `10^16`
pub(crate) const LN2_128: [Digit; 2] = [0x0018_a023_0abe_4edd, 0];

/// `ln 10` scaled by `10^16`
pub(crate) const LN10_128: [Digit; 2] = [0x0051_cde3_b154_87e8, 0];

/// `ln 2` scaled by `10^32`
pub(crate) const LN2_256: [Digit; 4] = [0x797c_3113_4d26_6499, 0x0000_036a_dfee_f0c4, 0, 0];

/// `ln 10` scaled by `10^32`
pub(crate) const LN10_256: [Digit; 4] = [0x686e_1a5c_5b72_3214, 0x0000_0b5a_455e_c490, 0, 0];

/// `ln 2` scaled by `10^64`
pub(crate) const LN2_512: [Digit; 8] = [
    0x0ab6_1e00_79bf_e6de,
    0x15f4_c452_11bf_4ade,
    0x2aa4_9d40_09a6_0be2,
    0x0000_0000_0010_d977,
    0,
    0,
    0,
    0,
];

/// `ln 10` scaled by `10^64`
pub(crate) const LN10_512: [Digit; 8] = [
    0xea71_dc16_17d1_2f21,
    0xdbb8_f113_8566_b86c,
    0xafb4_2c6b_2c86_25b2,
    0x0000_0000_0037_f905,
    0,
    0,
    0,
    0,
];
