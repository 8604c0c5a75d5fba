//! Convenience re-exports.

#[doc(no_inline)]
pub use crate::{
    bits, parse_bits, BitOperation, Bitwise, ByteOperation, ByteSequence, Bytewise, Error,
};
