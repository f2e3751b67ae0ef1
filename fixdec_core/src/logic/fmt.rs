//! Decimal string rendering into caller-provided buffers.
//!
//! The integer part is produced by repeatedly extracting base-`10^18` chunks
//! with one word-level short division each, so the loop count scales with the
//! digit count divided by 18 rather than with the digit count. The fraction
//! is rendered zero-padded to exactly `S` digits and then either trimmed
//! (shortest form) or cut at the requested width (fixed form, truncating).

use fixdec_internals::{Digit, CHUNK_DIGITS, POW10_CHUNK};

use crate::logic::uint;

/// Enough chunk slots for the widest integer part (155 digits)
const MAX_CHUNKS: usize = 12;

/// Writes the decimal form of `raw` into `out` and returns the byte length.
///
/// `fixed` of `None` selects the shortest form: no trailing fractional
/// zeros, no dot when the fraction is zero. `Some(n)` renders exactly
/// `min(n, scale)` fractional digits, truncated toward zero, with no dot
/// when that count is zero.
///
/// `out` must be large enough for the widest rendering of the given width;
/// the per-type capacity constants guarantee this.
pub(crate) fn format<const N: usize, const N2: usize>(
    raw: &[Digit; N],
    table: &[[Digit; N]],
    scale: usize,
    fixed: Option<usize>,
    out: &mut [u8],
) -> usize {
    let negative = uint::is_neg(raw);
    let mag = if negative { uint::neg(raw) } else { *raw };
    let wide: [Digit; N2] = uint::widen(&mag);
    let (int_part, frac_part) = uint::divide::<N2, N>(&wide, &table[scale]);

    let mut pos = 0;
    if negative {
        out[pos] = b'-';
        pos += 1;
    }
    pos = write_int_part(&int_part, out, pos);

    let frac_width = match fixed {
        None => {
            if uint::is_zero(&frac_part) {
                return pos
            }
            scale
        }
        Some(n) => {
            if n == 0 {
                return pos
            }
            if n < scale {
                n
            } else {
                scale
            }
        }
    };

    out[pos] = b'.';
    pos += 1;
    let frac_start = pos;
    write_frac_part(&frac_part, scale, out, frac_start);
    pos = frac_start + frac_width;
    if fixed.is_none() {
        // shortest form: trim trailing zeros, never past the first fractional
        // digit position (the fraction is nonzero here, so this terminates)
        while out[pos - 1] == b'0' {
            pos -= 1;
        }
    }
    pos
}

/// Renders the integer part; at least one digit is always produced
fn write_int_part<const N: usize>(int_part: &[Digit; N], out: &mut [u8], mut pos: usize) -> usize {
    let mut chunks = [0 as Digit; MAX_CHUNKS];
    let mut n_chunks = 0;
    let mut q = *int_part;
    loop {
        let (next, rem) = uint::div_rem_digit(&q, POW10_CHUNK);
        chunks[n_chunks] = rem;
        n_chunks += 1;
        q = next;
        if uint::is_zero(&q) {
            break
        }
    }
    // most significant chunk unpadded, interior chunks zero-padded to 18
    pos = write_u64(chunks[n_chunks - 1], out, pos);
    for i in (0..n_chunks - 1).rev() {
        pos = write_u64_padded(chunks[i], CHUNK_DIGITS, out, pos);
    }
    pos
}

/// Renders the fraction zero-padded to exactly `scale` digits
fn write_frac_part<const N: usize>(
    frac_part: &[Digit; N],
    scale: usize,
    out: &mut [u8],
    mut pos: usize,
) -> usize {
    let full_chunks = scale / CHUNK_DIGITS;
    let head_digits = scale % CHUNK_DIGITS;
    let mut chunks = [0 as Digit; MAX_CHUNKS];
    let mut r = *frac_part;
    for chunk in chunks.iter_mut().take(full_chunks) {
        let (next, rem) = uint::div_rem_digit(&r, POW10_CHUNK);
        *chunk = rem;
        r = next;
    }
    if head_digits != 0 {
        // what remains has fewer than 18 digits and fits one word
        pos = write_u64_padded(r[0], head_digits, out, pos);
    }
    for i in (0..full_chunks).rev() {
        pos = write_u64_padded(chunks[i], CHUNK_DIGITS, out, pos);
    }
    pos
}

fn write_u64(v: Digit, out: &mut [u8], pos: usize) -> usize {
    let mut tmp = [0u8; 20];
    let mut len = 0;
    let mut v = v;
    loop {
        tmp[len] = b'0' + ((v % 10) as u8);
        len += 1;
        v /= 10;
        if v == 0 {
            break
        }
    }
    for i in 0..len {
        out[pos + i] = tmp[len - 1 - i];
    }
    pos + len
}

fn write_u64_padded(v: Digit, width: usize, out: &mut [u8], pos: usize) -> usize {
    let mut v = v;
    let mut i = width;
    while i > 0 {
        i -= 1;
        out[pos + i] = b'0' + ((v % 10) as u8);
        v /= 10;
    }
    pos + width
}
