pub(crate) mod arith;
pub(crate) mod float;
pub(crate) mod fmt;
pub(crate) mod parse;
pub(crate) mod round;
pub(crate) mod tables;
pub(crate) mod uint;
