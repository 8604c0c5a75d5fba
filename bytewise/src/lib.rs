//! Bitwise logic and shifts over bytes and byte sequences.
//!
//! The crate works at two levels:
//!
//! - [`Bitwise`] implements [`BitOperation`] on a single `u8`.
//! - [`Bytewise`] implements [`ByteOperation`] on a [`ByteSequence`], which is
//!   read as a big-endian unsigned integer. Shifts carry bits across byte
//!   boundaries and always preserve the length of the sequence.
//!
//! Sequences can be built from raw bytes, parsed from a string of binary digits
//! with [`parse_bits`], or written as compile-time literals with [`bits!`].
//!
//! ```
//! # use bytewise::prelude::*;
//! let x = bits!("0010 1101 1110 1001 0010 1111 1111 1110");
//! assert_eq!(x.shift_left(2).as_bytes(), &[0xb7, 0xa4, 0xbf, 0xf8]);
//! assert_eq!((&x >> 2).to_string(), "0x0b7a4bff");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

use snafu::Snafu;

#[cfg(any(test, feature = "quickcheck"))]
mod arbitrary;
pub mod byte_op;
mod parse;
pub mod prelude;
pub mod sequence;
pub mod sequence_op;

// For macro access via `$crate`.
#[doc(hidden)]
pub mod __private {
    pub use bytewise_macros::bits;
}

pub use byte_op::{BitOperation, Bitwise};
pub use parse::parse_bits;
pub use sequence::ByteSequence;
pub use sequence_op::{ByteOperation, Bytewise};

/// The error type for fallible sequence operations and parsing.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum Error {
    /// A binary operation received operands of different lengths.
    #[snafu(display("operand lengths differ: {left} bytes and {right} bytes"))]
    LengthMismatch {
        /// The length of the left operand.
        left: usize,
        /// The length of the right operand.
        right: usize,
    },

    /// A bit string contained a character other than `'0'`, `'1'` or `' '`.
    #[snafu(display("bad formatted bits representation: unexpected character {character:?}"))]
    BadFormat {
        /// The first offending character.
        character: char,
    },

    /// The bit string validator itself failed, independently of the input.
    #[snafu(display("internal error while validating bits representation: {reason}"))]
    ValidationFailure {
        /// What went wrong inside the validator.
        reason: String,
    },
}

/// A specialized [`Result`](core::result::Result) type for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Constructs a [`ByteSequence`] from a bit string literal.
///
/// The literal follows the rules of [`parse_bits`]: spaces are ignored and the
/// digits are zero-extended on the left to a whole number of bytes. The string
/// is checked at compile time, so invalid digits are a compile error rather
/// than a runtime [`Error`].
///
/// # Examples
///
/// ```
/// # use bytewise::prelude::*;
/// let x = bits!("1 0000 0001");
/// assert_eq!(x.as_bytes(), &[0x01, 0x01]);
/// assert!(bits!("").is_empty());
/// ```
///
/// ```compile_fail
/// # use bytewise::prelude::*;
/// // `2` is not a binary digit.
/// bits!("0102");
/// ```
///
/// ```compile_fail
/// # use bytewise::prelude::*;
/// // Only string literals are accepted.
/// bits!(0b0101);
/// ```
#[macro_export]
macro_rules! bits {
    ($($tt:tt)*) => {
        $crate::__private::bits! { ($crate, $($tt)*) }
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_bits_literal() {
        assert_eq!(bits!("011100").to_uint::<u8>(), Some(28));
        assert_eq!(
            bits!("01 110 1110 1010 1101 1001"),
            parse_bits("01 110 1110 1010 1101 1001").unwrap(),
        );
    }

    #[test]
    fn test_error_display() {
        let e = Bytewise::new()
            .and(&ByteSequence::zeroed(3), &ByteSequence::zeroed(1))
            .unwrap_err();
        assert_eq!(e.to_string(), "operand lengths differ: 3 bytes and 1 bytes");
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<Error>();
    }

    #[test]
    fn test_operators_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Bitwise>();
        assert_send_sync::<Bytewise>();
        assert_send_sync::<ByteSequence>();
    }
}
