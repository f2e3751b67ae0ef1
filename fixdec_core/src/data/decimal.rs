//! The three decimal widths.
//!
//! Each width is a thin façade over the width-generic kernel: a word array,
//! a scale constant, and a pow10 table. The `decimal_width!` matrix below is
//! the single place where width, scale, and constants meet; everything else
//! is shared logic.

use fixdec_internals::{ConvertError, Digit};

use crate::logic::{arith, float, parse, round, tables, uint};

/// Three-way sign classification of a decimal value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Sign {
    /// The value is exactly zero
    Zero = 0,
    /// The value is greater than zero
    Positive = 1,
    /// The value is less than zero
    Negative = 2,
}

macro_rules! decimal_width {
    (
        $(#[$outer:meta])*
        $name:ident, $n:literal, $n2:literal, $scale:literal, $digits:literal,
        $cap:literal, $scale_f64:literal, $pow10:ident, $ln2:ident, $ln10:ident
    ) => {
        $(#[$outer])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name {
            raw: [Digit; $n],
        }

        /// # Basic constants
        impl $name {
            /// Number of 64-bit words in the backing array
            pub const WORDS: usize = $n;
            /// Total bit width
            pub const BITS: usize = $n * 64;
            /// Byte width of the little-endian binary form
            pub const BYTES: usize = $n * 8;
            /// Fixed fractional digit count; the stored integer equals the
            /// numeric value times `10^SCALE`
            pub const SCALE: usize = $scale;
            /// Largest `k` with `10^k` representable in this width
            pub const DIGITS: usize = $digits;

            /// Exactly `0`
            pub const ZERO: Self = Self { raw: [0; $n] };
            /// Exactly `1`
            pub const ONE: Self = Self { raw: tables::$pow10[$scale] };
            /// Exactly `10`
            pub const TEN: Self = Self { raw: tables::$pow10[$scale + 1] };
            /// Exactly `100`
            pub const HUNDRED: Self = Self { raw: tables::$pow10[$scale + 2] };

            const LN2: Self = Self { raw: tables::$ln2 };
            const LN10: Self = Self { raw: tables::$ln10 };
            const SCALE_F64: f64 = $scale_f64;
            pub(crate) const STR_CAPACITY: usize = $cap;
        }

        /// # Constructors
        impl $name {
            /// Builds a decimal from an integer part and a fractional part
            /// interpreted by its own digit count: `new(123, 45)` is
            /// `123.45`, `new(1, 5)` is `1.5`, and `new(1, 50)` is `1.50`
            /// (the same value). A negative fractional part is subtracted
            /// instead of added. Fractional digits beyond the scale are
            /// dropped toward zero.
            pub fn new(int_part: i64, frac_part: i64) -> Self {
                let int_raw = uint::mul_low(&uint::sext_i64(int_part), &tables::$pow10[$scale]);
                let mag = frac_part.unsigned_abs();
                let mut d = 1usize;
                let mut t = mag / 10;
                while t != 0 {
                    d += 1;
                    t /= 10;
                }
                let frac_mag: [Digit; $n] = if d > $scale {
                    uint::from_u64(mag / 10u64.pow((d - $scale) as u32))
                } else {
                    uint::mul_low(&uint::from_u64(mag), &tables::$pow10[$scale - d])
                };
                let raw = if frac_part < 0 {
                    uint::sub(&int_raw, &frac_mag)
                } else {
                    uint::add(&int_raw, &frac_mag)
                };
                Self {
                    raw: tables::apply_precision::<$n, $n2>(raw, &tables::$pow10, $scale),
                }
            }

            /// The decimal with the value of `v`
            pub fn from_int(v: i64) -> Self {
                let raw = uint::mul_low(&uint::sext_i64(v), &tables::$pow10[$scale]);
                Self {
                    raw: tables::apply_precision::<$n, $n2>(raw, &tables::$pow10, $scale),
                }
            }

            /// Converts a finite float, truncating fractional digits beyond
            /// the scale toward zero
            ///
            /// # Errors
            ///
            /// NaN and infinities return [ConvertError::NonFinite].
            pub fn from_f64(v: f64) -> Result<Self, ConvertError> {
                let raw = float::from_f64::<$n, $n2>(v, &tables::$pow10, $scale, Self::SCALE_F64)?;
                Ok(Self { raw })
            }

            /// Wraps a little-endian word array directly. The words are the
            /// numeric value times `10^SCALE` in two's complement; the
            /// precision policy is not reapplied.
            #[inline]
            pub const fn from_raw(raw: [Digit; $n]) -> Self {
                Self { raw }
            }

            /// The backing little-endian word array
            #[inline]
            pub const fn to_raw(self) -> [Digit; $n] {
                self.raw
            }
        }

        /// # Predicates and sign
        impl $name {
            /// If `self` is zero
            #[inline]
            pub const fn is_zero(self) -> bool {
                uint::is_zero(&self.raw)
            }

            /// If `self` is greater than zero
            #[inline]
            pub const fn is_positive(self) -> bool {
                !uint::is_neg(&self.raw) && !uint::is_zero(&self.raw)
            }

            /// If `self` is less than zero
            #[inline]
            pub const fn is_negative(self) -> bool {
                uint::is_neg(&self.raw)
            }

            /// Three-way sign classification
            pub const fn sign(self) -> Sign {
                if uint::is_zero(&self.raw) {
                    Sign::Zero
                } else if uint::is_neg(&self.raw) {
                    Sign::Negative
                } else {
                    Sign::Positive
                }
            }

            /// The magnitude of `self`
            #[inline]
            pub fn abs(self) -> Self {
                Self {
                    raw: arith::abs(&self.raw).0,
                }
            }

            /// Multiplicative inverse `1 / self`, truncating toward zero.
            /// Zero returns itself.
            pub fn recip(self) -> Self {
                Self {
                    raw: arith::recip::<$n, $n2>(&self.raw, &tables::$pow10[2 * $scale]),
                }
            }
        }

        /// # Rounding and digit shifting
        ///
        /// Position `n` counts fractional digits when positive; `n = -k`
        /// targets the `10^k` integer place. Positions above the scale leave
        /// the value unchanged and positions at or below the negated scale
        /// yield zero.
        impl $name {
            /// Keeps `n` fractional digits, dropping the rest toward zero
            pub fn truncate(self, n: i32) -> Self {
                self.round_mode(n, round::Mode::TowardZero)
            }

            /// Rounds at position `n` with banker's rounding: past the
            /// halfway point away from zero, at the halfway point to the
            /// even neighbor
            pub fn round(self, n: i32) -> Self {
                self.round_mode(n, round::Mode::HalfEven)
            }

            /// Rounds at position `n`; any nonzero dropped portion grows the
            /// magnitude
            pub fn round_away_from_zero(self, n: i32) -> Self {
                self.round_mode(n, round::Mode::AwayFromZero)
            }

            /// Alias of [truncate](Self::truncate)
            pub fn round_toward_zero(self, n: i32) -> Self {
                self.round_mode(n, round::Mode::TowardZero)
            }

            /// Rounds at position `n` toward positive infinity
            pub fn ceil(self, n: i32) -> Self {
                self.round_mode(n, round::Mode::Ceil)
            }

            /// Rounds at position `n` toward negative infinity
            pub fn floor(self, n: i32) -> Self {
                self.round_mode(n, round::Mode::Floor)
            }

            /// Moves the decimal point `n` digits: multiplies by `10^n`
            /// (wrapping) for positive `n`, divides truncating toward zero
            /// for negative `n`
            pub fn shift(self, n: i32) -> Self {
                Self {
                    raw: round::shift_digits::<$n, $n2>(&self.raw, n, &tables::$pow10, $scale),
                }
            }

            fn round_mode(self, n: i32, mode: round::Mode) -> Self {
                Self {
                    raw: round::round_at::<$n, $n2>(&self.raw, n, mode, &tables::$pow10, $scale),
                }
            }
        }

        /// # Transcendental functions
        ///
        /// None of these are correctly rounded to the last place; they carry
        /// the full scale and converge within fixed iteration bounds. Domain
        /// errors return the input unchanged.
        impl $name {
            /// Raises `self` to an integer power. The exponent operand is
            /// truncated toward zero and narrowed to 64 bits; negative
            /// exponents invert the positive-power result. `pow(0)` is one.
            pub fn pow(self, exp: Self) -> Self {
                let e = exp.to_i64_trunc();
                if e == 0 {
                    return Self::ONE
                }
                let mut remaining = e.unsigned_abs();
                let mut acc = Self::ONE;
                let mut base = self;
                loop {
                    if (remaining & 1) != 0 {
                        acc = acc * base;
                    }
                    remaining >>= 1;
                    if remaining == 0 {
                        break
                    }
                    base = base * base;
                }
                if e < 0 {
                    acc.recip()
                } else {
                    acc
                }
            }

            /// Square root by Newton iteration seeded from float arithmetic.
            /// Negative inputs are returned unchanged and zero stays zero.
            pub fn sqrt(self) -> Self {
                if self.is_negative() || self.is_zero() {
                    return self
                }
                let seed = float::sqrt_f64(float::to_f64(&self.raw, Self::SCALE_F64));
                let mut g = match Self::from_f64(seed) {
                    Ok(g) if !g.is_zero() => g,
                    _ => Self::ONE,
                };
                let mut i = 0;
                while i < 32 {
                    let next = (g + self / g).half();
                    if next == g {
                        break
                    }
                    g = next;
                    i += 1;
                }
                g
            }

            /// `e^self` via range reduction `self = k ln 2 + r` and the
            /// Taylor series of `e^r`, reconstructed with a binary shift
            pub fn exp(self) -> Self {
                let k_dec = (self / Self::LN2).round(0);
                let k = k_dec.to_i64_trunc();
                let r = self - k_dec * Self::LN2;
                let mut term = Self::ONE;
                let mut sum = Self::ONE;
                let mut i: i64 = 1;
                while i <= 96 {
                    term = term * r / Self::from_int(i);
                    if term.is_zero() {
                        break
                    }
                    sum = sum + term;
                    i += 1;
                }
                Self {
                    raw: arith::shift_pow2(&sum.raw, k),
                }
            }

            /// Natural logarithm via bit-length range reduction to
            /// `m` near one and the Gregory series of `2 artanh(t)` with
            /// `t = (m - 1) / (m + 1)`. Non-positive inputs are returned
            /// unchanged.
            pub fn ln(self) -> Self {
                if self.is_negative() || self.is_zero() {
                    return self
                }
                let k = (uint::bit_len(&self.raw) as i64)
                    - (uint::bit_len(&tables::$pow10[$scale]) as i64);
                let m = Self {
                    raw: if k >= 0 {
                        uint::shr(&self.raw, k as usize)
                    } else {
                        uint::shl(&self.raw, (-k) as usize)
                    },
                };
                let t = (m - Self::ONE) / (m + Self::ONE);
                let t2 = t * t;
                let mut term = t;
                let mut sum = Self::ZERO;
                let mut i: i64 = 1;
                while i <= 199 {
                    let contrib = term / Self::from_int(i);
                    if contrib.is_zero() {
                        break
                    }
                    sum = sum + contrib;
                    term = term * t2;
                    i += 2;
                }
                sum + sum + Self::from_int(k) * Self::LN2
            }

            /// Base-2 logarithm, `ln(self) / ln(2)`. Non-positive inputs are
            /// returned unchanged.
            pub fn log2(self) -> Self {
                if self.is_negative() || self.is_zero() {
                    return self
                }
                self.ln() / Self::LN2
            }

            /// Base-10 logarithm, `ln(self) / ln(10)`. Non-positive inputs
            /// are returned unchanged.
            pub fn log10(self) -> Self {
                if self.is_negative() || self.is_zero() {
                    return self
                }
                self.ln() / Self::LN10
            }

            /// Integer part as a wrapping 64-bit value, used for exponent
            /// extraction
            fn to_i64_trunc(self) -> i64 {
                let (mag, negative) = arith::abs(&self.raw);
                let wide: [Digit; $n2] = uint::widen(&mag);
                let (q, _) = uint::divide::<$n2, $n>(&wide, &tables::$pow10[$scale]);
                let v = q[0] as i64;
                if negative {
                    v.wrapping_neg()
                } else {
                    v
                }
            }

            /// Halves a non-negative value, truncating toward zero
            #[inline]
            const fn half(self) -> Self {
                Self {
                    raw: uint::shr(&self.raw, 1),
                }
            }
        }

        /// # Byte representation
        impl $name {
            /// The fixed-length little-endian two's complement form
            pub const fn to_le_bytes(self) -> [u8; Self::BYTES] {
                let mut b = [0; Self::BYTES];
                let mut i = 0;
                while i < $n {
                    let w = self.raw[i];
                    let mut j = 0;
                    while j < 8 {
                        b[i * 8 + j] = (w >> (8 * j)) as u8;
                        j += 1;
                    }
                    i += 1;
                }
                b
            }

            /// Decodes the little-endian binary form produced by
            /// [to_le_bytes](Self::to_le_bytes), then applies the precision
            /// policy
            ///
            /// # Errors
            ///
            /// Any length other than [BYTES](Self::BYTES) returns
            /// [ConvertError::InvalidLength].
            pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, ConvertError> {
                if bytes.len() != Self::BYTES {
                    return Err(ConvertError::InvalidLength)
                }
                let mut raw = [0; $n];
                let mut i = 0;
                while i < $n {
                    let mut w: Digit = 0;
                    let mut j = 0;
                    while j < 8 {
                        w |= (bytes[i * 8 + j] as Digit) << (8 * j);
                        j += 1;
                    }
                    raw[i] = w;
                    i += 1;
                }
                Ok(Self {
                    raw: tables::apply_precision::<$n, $n2>(raw, &tables::$pow10, $scale),
                })
            }
        }

        #[cfg(feature = "rand_support")]
        /// # Random generation, a `rand_support` impl
        impl $name {
            /// A decimal with uniformly random words, passed through the
            /// precision policy so the result is a valid value of this width
            pub fn rand_with<R: rand_core::RngCore + ?Sized>(rng: &mut R) -> Self {
                let mut raw = [0; $n];
                let mut i = 0;
                while i < $n {
                    raw[i] = rng.next_u64();
                    i += 1;
                }
                Self {
                    raw: tables::apply_precision::<$n, $n2>(raw, &tables::$pow10, $scale),
                }
            }
        }

        impl $name {
            pub(crate) fn parse_bytes(src: &[u8]) -> Result<Self, ConvertError> {
                let raw = parse::from_bytes::<$n, $n2>(src, &tables::$pow10, $scale)?;
                Ok(Self { raw })
            }

            pub(crate) fn format_into<'a>(
                self,
                fixed: Option<usize>,
                buf: &'a mut [u8],
            ) -> &'a str {
                let len = crate::logic::fmt::format::<$n, $n2>(
                    &self.raw,
                    &tables::$pow10,
                    $scale,
                    fixed,
                    buf,
                );
                // the formatter writes only ASCII digits, `-`, and `.`
                core::str::from_utf8(&buf[..len]).unwrap()
            }

            pub(crate) fn raw_ref(&self) -> &[Digit; $n] {
                &self.raw
            }

            pub(crate) fn wrap(raw: [Digit; $n]) -> Self {
                Self { raw }
            }
        }
    };
}

decimal_width!(
    /// A signed fixed-scale decimal in 128 bits: 16 integer digits and 16
    /// fractional digits.
    ///
    /// The numeric value is `raw / 10^16` with `raw` a two's complement
    /// 128-bit integer stored as two little-endian 64-bit words. Arithmetic
    /// is closed over the width: results wrap modulo `2^128` and operators
    /// that could fault return an operand unchanged instead (division by
    /// zero yields the dividend, domain errors yield the input), so call
    /// chains never branch on errors.
    Decimal128, 2, 4, 16, 38, 44, 1e16, POW10_128, LN2_128, LN10_128
);

decimal_width!(
    /// A signed fixed-scale decimal in 256 bits: 32 integer digits and 32
    /// fractional digits.
    ///
    /// See [Decimal128] for the value model; only the width, scale, and
    /// constants differ.
    Decimal256, 4, 8, 32, 77, 80, 1e32, POW10_256, LN2_256, LN10_256
);

decimal_width!(
    /// A signed fixed-scale decimal in 512 bits: 64 integer digits and 64
    /// fractional digits.
    ///
    /// See [Decimal128] for the value model; only the width, scale, and
    /// constants differ.
    Decimal512, 8, 16, 64, 154, 160, 1e64, POW10_512, LN2_512, LN10_512
);
