//! The [`ByteSequence`] value type.

use std::fmt::{self, Display, Formatter, LowerHex, UpperHex};
use std::str::FromStr;

use num_traits::{NumCast, PrimInt, Unsigned};

use crate::{parse, Error};

/// An ordered sequence of bytes interpreted as a big-endian unsigned integer.
///
/// The first byte is the most significant. Operations never modify a sequence
/// in place; each returns a new sequence with the same length as its
/// operands.
///
/// # Examples
///
/// ```
/// # use bytewise::prelude::*;
/// let x = ByteSequence::new([0x2d, 0xe9]);
/// assert_eq!(x.len(), 2);
/// assert_eq!(x.to_uint::<u32>(), Some(0x2de9));
/// assert_eq!(x.to_string(), "0x2de9");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteSequence {
    bytes: Vec<u8>,
}

impl ByteSequence {
    /// Creates a sequence holding `bytes`, most significant byte first.
    ///
    /// No validation is performed.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self::from_vec(bytes.into())
    }

    /// Creates a sequence that takes ownership of `bytes`.
    #[inline(always)]
    #[must_use]
    pub const fn from_vec(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Creates a sequence of `len` zero bytes.
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self::from_vec(vec![0; len])
    }

    /// Parses a string of binary digits, which may contain spaces.
    ///
    /// See [`parse_bits`](crate::parse_bits).
    pub fn from_bits(bits: &str) -> Result<Self, Error> {
        parse::parse_bits(bits)
    }

    /// The number of bytes in the sequence.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the sequence holds no bytes.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The total width of the sequence in bits.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Whether every byte in the sequence is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    /// The raw bytes, most significant first.
    #[inline(always)]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the sequence and returns its bytes.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Converts the big-endian value to an unsigned primitive integer.
    ///
    /// Returns `None` if the value does not fit in `T`. Leading zero bytes do
    /// not count against the width of `T`, and an empty sequence is zero.
    ///
    /// ```
    /// # use bytewise::prelude::*;
    /// let x = ByteSequence::new([0x00, 0x00, 0x01, 0x02]);
    /// assert_eq!(x.to_uint::<u16>(), Some(0x0102));
    /// assert_eq!(x.to_uint::<u8>(), None);
    /// ```
    #[must_use]
    pub fn to_uint<T: PrimInt + Unsigned>(&self) -> Option<T> {
        self.bytes.iter().try_fold(T::zero(), |acc, &byte| {
            let byte: T = NumCast::from(byte)?;
            if acc.is_zero() {
                Some(byte)
            } else if acc.leading_zeros() < 8 {
                None
            } else {
                Some(acc << 8 | byte)
            }
        })
    }

    /// Renders the sequence as `0x` followed by two lowercase hex digits per
    /// byte.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{self}")
    }
}

impl Display for ByteSequence {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "0x{self:x}")
    }
}

impl LowerHex for ByteSequence {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for byte in &self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl UpperHex for ByteSequence {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for byte in &self.bytes {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl FromStr for ByteSequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        parse::parse_bits(s)
    }
}

impl AsRef<[u8]> for ByteSequence {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for ByteSequence {
    fn from(value: Vec<u8>) -> Self {
        Self::from_vec(value)
    }
}

impl From<&[u8]> for ByteSequence {
    fn from(value: &[u8]) -> Self {
        Self::from_vec(value.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for ByteSequence {
    fn from(value: [u8; N]) -> Self {
        Self::from_vec(value.to_vec())
    }
}

impl From<ByteSequence> for Vec<u8> {
    fn from(value: ByteSequence) -> Self {
        value.into_vec()
    }
}
