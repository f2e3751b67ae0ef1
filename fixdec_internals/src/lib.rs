//! This crate contains common digit-level utilities for crates within the
//! `fixdec` system, such as the widening primitives that every carry chain in
//! `fixdec_core` is built from, and the shared conversion error. Most users
//! should never have to interact with this directly.
//!
//! There is a hidden reexport of this crate for `fixdec_core` and `fixdec`.

#![no_std]

mod widening;

use core::fmt;

pub use widening::{borrowing_sub, carrying_mul_add, dd_div_rem, widen_add, widen_mul_add};

/// The basic element of the word arrays backing every decimal width. Unlike a
/// register-sized digit, this is pinned to `u64`: the decimal widths, the
/// scale constants, and the base-`10^18` formatter chunking are all specified
/// in terms of 64-bit little-endian words.
pub type Digit = u64;

/// Signed version of `Digit`
pub type IDigit = i64;

/// Bitwidth of a `Digit`
pub const BITS: usize = Digit::BITS as usize;

/// Maximum value of a `Digit`
pub const MAX: Digit = Digit::MAX;

/// Number of bytes in a `Digit`
pub const DIGIT_BYTES: usize = (Digit::BITS / u8::BITS) as usize;

/// The power of ten used for chunked base-10 formatting. Extracting 18
/// decimal digits per word-level division keeps the formatter loop count
/// proportional to the digit count divided by 18.
pub const POW10_CHUNK: Digit = 1_000_000_000_000_000_000;

/// Number of decimal digits in a full [POW10_CHUNK] chunk
pub const CHUNK_DIGITS: usize = 18;

/// A conversion error produced by the fallible decimal constructors. The
/// arithmetic operators never produce these; only parsing and decoding can
/// fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConvertError {
    /// The input has no digits
    Empty,
    /// There is an unrecognized byte that is not `_`, `.`, a sign, an
    /// exponent marker, or `0..=9`
    InvalidChar,
    /// More than one `.` in the significand
    DuplicateDot,
    /// An exponent marker is given but the exponent has no digits
    EmptyExponent,
    /// A byte representation does not have exactly the width of the decimal
    InvalidLength,
    /// A float input was NaN or infinite
    NonFinite,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
