//! A `serde_support` impl for the decimal widths.
//!
//! Human-readable formats see the canonical decimal string, so a JSON
//! document carries `"123.45"`. Deserialization also accepts bare JSON
//! numbers, both integers and floats. Compact formats exchange the
//! fixed-length little-endian byte form instead, with no allocation on
//! either path.

use core::fmt::{self, Write};

use serde::{de, de::Visitor, Deserialize, Deserializer, Serialize, Serializer};

/// Stack sink for rendering a float without allocation. The longest finite
/// f64 rendering (a small subnormal) needs a little over a kilobyte.
struct FloatBuf {
    bytes: [u8; 1100],
    len: usize,
}

impl Write for FloatBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        if self.len + bytes.len() > self.bytes.len() {
            return Err(fmt::Error)
        }
        self.bytes[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        Ok(())
    }
}

/// Renders `v` in its shortest decimal form and parses that, so a bare JSON
/// number like `123.45` lands on exactly `123.45` instead of the truncated
/// binary expansion of the nearest float.
fn parse_shortest<T, E>(v: f64) -> Result<T, E>
where
    T: core::str::FromStr,
    T::Err: fmt::Display,
    E: de::Error,
{
    let mut buf = FloatBuf {
        bytes: [0; 1100],
        len: 0,
    };
    write!(buf, "{v}").map_err(de::Error::custom)?;
    // the rendering is pure ASCII
    core::str::from_utf8(&buf.bytes[..buf.len])
        .unwrap()
        .parse()
        .map_err(de::Error::custom)
}

macro_rules! decimal_serde {
    ($name:ident) => {
        impl Serialize for crate::data::decimal::$name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                if serializer.is_human_readable() {
                    let mut buf = [0u8; Self::STR_CAPACITY];
                    serializer.serialize_str(self.format_into(None, &mut buf))
                } else {
                    serializer.serialize_bytes(&self.to_le_bytes())
                }
            }
        }

        impl<'de> Deserialize<'de> for crate::data::decimal::$name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct V;

                impl<'de> Visitor<'de> for V {
                    type Value = crate::data::decimal::$name;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        formatter.write_str("a decimal string, number, or little-endian bytes")
                    }

                    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
                    where
                        E: de::Error,
                    {
                        value.parse().map_err(de::Error::custom)
                    }

                    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
                    where
                        E: de::Error,
                    {
                        Ok(crate::data::decimal::$name::from_int(value))
                    }

                    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
                    where
                        E: de::Error,
                    {
                        Ok(crate::data::decimal::$name::from(value))
                    }

                    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
                    where
                        E: de::Error,
                    {
                        parse_shortest(value)
                    }

                    fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E>
                    where
                        E: de::Error,
                    {
                        crate::data::decimal::$name::from_le_bytes(value).map_err(de::Error::custom)
                    }
                }

                if deserializer.is_human_readable() {
                    deserializer.deserialize_any(V)
                } else {
                    deserializer.deserialize_bytes(V)
                }
            }
        }
    };
}

decimal_serde!(Decimal128);
decimal_serde!(Decimal256);
decimal_serde!(Decimal512);
