//! Standard trait impls for the decimal widths.
//!
//! The operator traits carry the wrap-on-overflow, non-fault semantics of
//! the inherent arithmetic: `Div` and `Rem` by zero return the dividend and
//! nothing here can panic on any input.

use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
    str::FromStr,
};

use fixdec_internals::ConvertError;

use crate::logic::{arith, tables, uint};

macro_rules! decimal_traits {
    ($name:ident, $n:literal, $n2:literal, $scale:literal, $pow10:ident) => {
        impl fmt::Display for crate::data::decimal::$name {
            /// The shortest decimal form: no trailing fractional zeros, no
            /// dot for integral values, a leading `0` before a purely
            /// fractional value, and a `-` prefix for negatives.
            ///
            /// A precision such as `{:.2}` switches to fixed-fraction form
            /// with exactly that many fractional digits, truncated toward
            /// zero (never rounded), clamped to the scale.
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut buf = [0u8; Self::STR_CAPACITY];
                f.write_str(self.format_into(f.precision(), &mut buf))
            }
        }

        impl fmt::Debug for crate::data::decimal::$name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }

        impl FromStr for crate::data::decimal::$name {
            type Err = ConvertError;

            /// Parses `[ws] [sign] digits [. digits] [(e|E) [sign] digits]
            /// [ws]` with `_` separators between digits. Fractional digits
            /// beyond the scale are dropped toward zero; integer digits
            /// beyond the scale are reduced by the precision policy.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_bytes(s.as_bytes())
            }
        }

        impl Default for crate::data::decimal::$name {
            /// The zero value
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl From<i64> for crate::data::decimal::$name {
            fn from(v: i64) -> Self {
                Self::from_int(v)
            }
        }

        impl From<i32> for crate::data::decimal::$name {
            fn from(v: i32) -> Self {
                Self::from_int(v as i64)
            }
        }

        impl From<u32> for crate::data::decimal::$name {
            fn from(v: u32) -> Self {
                Self::from_int(v as i64)
            }
        }

        impl From<u64> for crate::data::decimal::$name {
            fn from(v: u64) -> Self {
                let raw = uint::mul_low(&uint::from_u64(v), &tables::$pow10[$scale]);
                Self::wrap(tables::apply_precision::<$n, $n2>(
                    raw,
                    &tables::$pow10,
                    $scale,
                ))
            }
        }

        impl TryFrom<f64> for crate::data::decimal::$name {
            type Error = ConvertError;

            fn try_from(v: f64) -> Result<Self, Self::Error> {
                Self::from_f64(v)
            }
        }

        impl PartialOrd for crate::data::decimal::$name {
            fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
                Some(self.cmp(rhs))
            }
        }

        impl Ord for crate::data::decimal::$name {
            /// Signed comparison over the raw words
            fn cmp(&self, rhs: &Self) -> Ordering {
                arith::cmp_signed(self.raw_ref(), rhs.raw_ref())
            }
        }

        impl Neg for crate::data::decimal::$name {
            type Output = Self;

            fn neg(self) -> Self {
                Self::wrap(uint::neg(self.raw_ref()))
            }
        }

        impl Add for crate::data::decimal::$name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self::wrap(uint::add(self.raw_ref(), rhs.raw_ref()))
            }
        }

        impl Sub for crate::data::decimal::$name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self::wrap(uint::sub(self.raw_ref(), rhs.raw_ref()))
            }
        }

        impl Mul for crate::data::decimal::$name {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                Self::wrap(arith::mul_scaled::<$n, $n2>(
                    self.raw_ref(),
                    rhs.raw_ref(),
                    &tables::$pow10[$scale],
                ))
            }
        }

        impl Div for crate::data::decimal::$name {
            type Output = Self;

            /// Truncating toward zero; division by zero returns `self`
            fn div(self, rhs: Self) -> Self {
                Self::wrap(arith::div_scaled::<$n, $n2>(
                    self.raw_ref(),
                    rhs.raw_ref(),
                    &tables::$pow10[$scale],
                ))
            }
        }

        impl Rem for crate::data::decimal::$name {
            type Output = Self;

            /// The remainder carries the dividend's sign; modulo by zero
            /// returns `self`
            fn rem(self, rhs: Self) -> Self {
                Self::wrap(arith::rem_trunc::<$n, $n2>(self.raw_ref(), rhs.raw_ref()))
            }
        }

        impl AddAssign for crate::data::decimal::$name {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for crate::data::decimal::$name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl MulAssign for crate::data::decimal::$name {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl DivAssign for crate::data::decimal::$name {
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl RemAssign for crate::data::decimal::$name {
            fn rem_assign(&mut self, rhs: Self) {
                *self = *self % rhs;
            }
        }
    };
}

decimal_traits!(Decimal128, 2, 4, 16, POW10_128);
decimal_traits!(Decimal256, 4, 8, 32, POW10_256);
decimal_traits!(Decimal512, 8, 16, 64, POW10_512);
