//! Exact fixed-scale decimal arithmetic on stack-resident fixed-width
//! integers, in three widths.
//!
//! This crate compiles all the interfaces of `fixdec_core`. Each width is a
//! plain `Copy` value wrapping a little-endian word array interpreted as a
//! two's complement integer scaled by a fixed power of ten:
//!
//! | type | bits | integer digits | fractional digits |
//! |------|------|----------------|-------------------|
//! | [Decimal128] | 128 | 16 | 16 |
//! | [Decimal256] | 256 | 32 | 32 |
//! | [Decimal512] | 512 | 64 | 64 |
//!
//! Values never allocate and every operation is a pure function of its
//! operands. Overflow wraps modulo the width; operators that could fault
//! return an operand unchanged instead of erroring, so arithmetic chains
//! stay total:
//!
//! ```
//! use fixdec::Decimal128;
//!
//! let price: Decimal128 = "123.45".parse().unwrap();
//! let qty = Decimal128::new(2, 5); // 2.5
//! assert_eq!((price * qty).to_string(), "308.625");
//! assert_eq!((price / Decimal128::ZERO), price);
//! ```
//!
//! Feature flags (all off by default): `serde_support` serializes as the
//! canonical decimal string in human-readable formats and as fixed-length
//! little-endian bytes in compact ones; `rand_support` adds a
//! `rand_core`-driven constructor.

#![no_std]

#[doc(hidden)]
pub use fixdec_core::fixdec_internals;
pub use fixdec_core::{ConvertError, Decimal128, Decimal256, Decimal512, Sign};

/// Reexports every user-intended type except for `ConvertError`.
pub mod prelude {
    pub use fixdec_core::{Decimal128, Decimal256, Decimal512, Sign};
}
