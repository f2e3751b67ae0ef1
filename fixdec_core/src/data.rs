pub(crate) mod decimal;
#[cfg(feature = "serde_support")]
mod serde;
mod traits;

pub use decimal::{Decimal128, Decimal256, Decimal512, Sign};
