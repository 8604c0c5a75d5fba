//! Bitwise operations across a [`ByteSequence`].

use std::ops::{Not, Shl, Shr};

use paste::paste;
use snafu::ensure;

use crate::byte_op::Bitwise;
use crate::{ByteSequence, LengthMismatchSnafu, Result};

/// Bitwise algebra on byte sequences.
///
/// A sequence is treated as one big-endian unsigned integer. Binary operations
/// require operands of equal length, and every operation produces a sequence of
/// the same length as its operands.
pub trait ByteOperation {
    /// Computes `a & b` byte by byte.
    ///
    /// Returns [`Error::LengthMismatch`](crate::Error::LengthMismatch) if the
    /// operands differ in length.
    fn and(&self, a: &ByteSequence, b: &ByteSequence) -> Result<ByteSequence>;

    /// Computes `a | b` byte by byte.
    ///
    /// Returns [`Error::LengthMismatch`](crate::Error::LengthMismatch) if the
    /// operands differ in length.
    fn or(&self, a: &ByteSequence, b: &ByteSequence) -> Result<ByteSequence>;

    /// Computes `a ^ b` byte by byte.
    ///
    /// Returns [`Error::LengthMismatch`](crate::Error::LengthMismatch) if the
    /// operands differ in length.
    fn xor(&self, a: &ByteSequence, b: &ByteSequence) -> Result<ByteSequence>;

    /// Computes the one's complement of every byte.
    fn not(&self, a: &ByteSequence) -> ByteSequence;

    /// Shifts the whole sequence left by `n` bits.
    ///
    /// Bits shifted out of the most significant byte are discarded and zeros
    /// are shifted into the least significant byte.
    fn shift_left(&self, a: &ByteSequence, n: u32) -> ByteSequence;

    /// Shifts the whole sequence right by `n` bits.
    ///
    /// Bits shifted out of the least significant byte are discarded and zeros
    /// are shifted into the most significant byte.
    fn shift_right(&self, a: &ByteSequence, n: u32) -> ByteSequence;
}

/// The [`ByteOperation`] implementation built on [`Bitwise`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bytewise {
    bit: Bitwise,
}

impl Bytewise {
    /// Creates the operator. It carries no state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bit: Bitwise::new(),
        }
    }
}

/// Splits a shift amount into whole bytes and the remaining bits.
fn split_shift(n: u32) -> (usize, u32) {
    let whole = usize::try_from(n / 8).unwrap_or(usize::MAX);
    (whole, n % 8)
}

macro_rules! impl_binary_op {
    ($($op:ident),+) => {
        $(
            fn $op(&self, a: &ByteSequence, b: &ByteSequence) -> Result<ByteSequence> {
                ensure!(
                    a.len() == b.len(),
                    LengthMismatchSnafu {
                        left: a.len(),
                        right: b.len(),
                    }
                );
                Ok(ByteSequence::from_vec(
                    a.as_bytes()
                        .iter()
                        .zip(b.as_bytes())
                        .map(|(&x, &y)| self.bit.$op(x, y))
                        .collect(),
                ))
            }
        )+
    };
}

impl ByteOperation for Bytewise {
    impl_binary_op!(and, or, xor);

    fn not(&self, a: &ByteSequence) -> ByteSequence {
        ByteSequence::from_vec(a.as_bytes().iter().map(|&x| self.bit.not(x)).collect())
    }

    fn shift_left(&self, a: &ByteSequence, n: u32) -> ByteSequence {
        let bytes = a.as_bytes();
        let (whole, bits) = split_shift(n);
        let mut result = vec![0; bytes.len()];
        if whole >= bytes.len() {
            return ByteSequence::from_vec(result);
        }

        // Walk from the least significant byte, feeding each byte's overflow
        // into the next more significant one.
        let mut carry: u16 = 0;
        for i in (0..bytes.len() - whole).rev() {
            let p = carry + (u16::from(bytes[i + whole]) << bits);
            result[i] = (p & 0xff) as u8;
            carry = p >> 8;
        }
        ByteSequence::from_vec(result)
    }

    fn shift_right(&self, a: &ByteSequence, n: u32) -> ByteSequence {
        let bytes = a.as_bytes();
        let (whole, bits) = split_shift(n);
        let mut result = vec![0; bytes.len()];
        if whole >= bytes.len() {
            return ByteSequence::from_vec(result);
        }

        // Walk from the most significant byte, carrying the bits that fall
        // below each quotient into the next less significant one.
        let mut remainder: u16 = 0;
        for i in 0..bytes.len() - whole {
            let combined = (remainder << 8) + u16::from(bytes[i]);
            result[i + whole] = (combined >> bits) as u8;
            remainder = combined & ((1 << bits) - 1);
        }
        ByteSequence::from_vec(result)
    }
}

macro_rules! impl_sequence_method {
    ($($op:ident),+) => {
        paste! {
            $(
                #[doc = "Computes `self " $op " other` byte by byte. See [`ByteOperation::" $op "`]."]
                pub fn $op(&self, other: &ByteSequence) -> Result<ByteSequence> {
                    Bytewise::new().$op(self, other)
                }
            )+
        }
    };
}

impl ByteSequence {
    impl_sequence_method!(and, or, xor);

    /// Computes the one's complement of every byte. See [`ByteOperation::not`].
    #[must_use]
    pub fn not(&self) -> ByteSequence {
        Bytewise::new().not(self)
    }

    /// Shifts the whole sequence left by `n` bits. See
    /// [`ByteOperation::shift_left`].
    #[must_use]
    pub fn shift_left(&self, n: u32) -> ByteSequence {
        Bytewise::new().shift_left(self, n)
    }

    /// Shifts the whole sequence right by `n` bits. See
    /// [`ByteOperation::shift_right`].
    #[must_use]
    pub fn shift_right(&self, n: u32) -> ByteSequence {
        Bytewise::new().shift_right(self, n)
    }
}

impl Not for &ByteSequence {
    type Output = ByteSequence;

    fn not(self) -> ByteSequence {
        ByteSequence::not(self)
    }
}

impl Not for ByteSequence {
    type Output = ByteSequence;

    fn not(self) -> ByteSequence {
        ByteSequence::not(&self)
    }
}

macro_rules! impl_shift_op {
    ($($trait:ident::$method:ident => $direction:ident),+) => {
        paste! {
            $(
                impl $trait<u32> for &ByteSequence {
                    type Output = ByteSequence;

                    fn $method(self, rhs: u32) -> ByteSequence {
                        self.[<shift_ $direction>](rhs)
                    }
                }

                impl $trait<u32> for ByteSequence {
                    type Output = ByteSequence;

                    fn $method(self, rhs: u32) -> ByteSequence {
                        (&self).[<shift_ $direction>](rhs)
                    }
                }
            )+
        }
    };
}

impl_shift_op!(Shl::shl => left, Shr::shr => right);

#[cfg(test)]
mod tests {
    use super::{ByteOperation, Bytewise};
    use crate::{ByteSequence, Error};

    fn seq<const N: usize>(bytes: [u8; N]) -> ByteSequence {
        ByteSequence::new(bytes)
    }

    #[test]
    fn test_and() {
        let op = Bytewise::new();
        assert_eq!(op.and(&seq([0x10]), &seq([0x10])).unwrap(), seq([0x10]));
        assert_eq!(op.and(&seq([0x11]), &seq([0x10])).unwrap(), seq([0x10]));
    }

    #[test]
    fn test_or() {
        let op = Bytewise::new();
        assert_eq!(op.or(&seq([0x10]), &seq([0x10])).unwrap(), seq([0x10]));
        assert_eq!(op.or(&seq([0x11]), &seq([0x10])).unwrap(), seq([0x11]));
    }

    #[test]
    fn test_xor() {
        let op = Bytewise::new();
        assert_eq!(op.xor(&seq([0x10]), &seq([0x10])).unwrap(), seq([0x00]));
        assert_eq!(op.xor(&seq([0x11]), &seq([0x10])).unwrap(), seq([0x01]));
        assert_eq!(
            op.xor(&seq([0xf0, 0x0f]), &seq([0xff, 0xff])).unwrap(),
            seq([0x0f, 0xf0]),
        );
    }

    #[test]
    fn test_not() {
        let op = Bytewise::new();
        assert_eq!(op.not(&seq([0x10])), seq([0xef]));
        assert_eq!(op.not(&seq([0x11])), seq([0xee]));
        assert_eq!(op.not(&seq([0x00, 0xff])), seq([0xff, 0x00]));
    }

    #[test]
    fn test_length_mismatch() {
        let op = Bytewise::new();
        let a = seq([0x01, 0x02]);
        let b = seq([0x01]);
        for result in [op.and(&a, &b), op.or(&a, &b), op.xor(&a, &b)] {
            assert!(matches!(
                result,
                Err(Error::LengthMismatch { left: 2, right: 1 }),
            ));
        }
    }

    #[test]
    fn test_empty_operands() {
        let op = Bytewise::new();
        let empty = ByteSequence::default();
        assert_eq!(op.and(&empty, &empty).unwrap(), empty);
        assert_eq!(op.not(&empty), empty);
        assert_eq!(op.shift_left(&empty, 3), empty);
        assert_eq!(op.shift_right(&empty, 3), empty);
    }

    #[test]
    fn test_shift_left() {
        let op = Bytewise::new();
        // 0000_0001 -> 0000_0010
        assert_eq!(op.shift_left(&seq([0x01]), 1), seq([0x02]));
        // 0000_0000 1111_0001 -> 0000_0001 1110_0010
        assert_eq!(op.shift_left(&seq([0x00, 0xf1]), 1), seq([0x01, 0xe2]));
        // 1111_0000 1111_1001 -> 1110_0001 1111_0010
        assert_eq!(op.shift_left(&seq([0xf0, 0xf9]), 1), seq([0xe1, 0xf2]));
        assert_eq!(
            op.shift_left(&seq([0x2d, 0xe9, 0x2f, 0xfe]), 2),
            seq([0xb7, 0xa4, 0xbf, 0xf8]),
        );
        assert_eq!(
            op.shift_left(&seq([0xff, 0xe9, 0x2f, 0xfe]), 3),
            seq([0xff, 0x49, 0x7f, 0xf0]),
        );
    }

    #[test]
    fn test_shift_right() {
        let op = Bytewise::new();
        assert_eq!(op.shift_right(&seq([0x01]), 1), seq([0x00]));
        assert_eq!(op.shift_right(&seq([0x00, 0xf1]), 1), seq([0x00, 0x78]));
        assert_eq!(op.shift_right(&seq([0xf0, 0xf9]), 1), seq([0x78, 0x7c]));
        assert_eq!(
            op.shift_right(&seq([0x2d, 0xe9, 0x2f, 0xfe]), 2),
            seq([0x0b, 0x7a, 0x4b, 0xff]),
        );
        assert_eq!(
            op.shift_right(&seq([0xff, 0xe9, 0x2f, 0xfe]), 3),
            seq([0x1f, 0xfd, 0x25, 0xff]),
        );
    }

    #[test]
    fn test_shift_across_whole_bytes() {
        let op = Bytewise::new();
        let x = seq([0x12, 0x34, 0x56]);
        assert_eq!(op.shift_left(&x, 8), seq([0x34, 0x56, 0x00]));
        assert_eq!(op.shift_left(&x, 12), seq([0x45, 0x60, 0x00]));
        assert_eq!(op.shift_right(&x, 8), seq([0x00, 0x12, 0x34]));
        assert_eq!(op.shift_right(&x, 12), seq([0x00, 0x01, 0x23]));
        assert_eq!(op.shift_left(&x, 23), seq([0x00, 0x00, 0x00]));
        assert_eq!(op.shift_right(&x, 20), seq([0x00, 0x00, 0x01]));
    }

    #[test]
    fn test_shift_identity_and_overflow() {
        let op = Bytewise::new();
        let x = seq([0x2d, 0xe9, 0x2f, 0xfe]);
        assert_eq!(op.shift_left(&x, 0), x);
        assert_eq!(op.shift_right(&x, 0), x);
        for n in [32, 33, 1000, u32::MAX] {
            assert_eq!(op.shift_left(&x, n), ByteSequence::zeroed(4));
            assert_eq!(op.shift_right(&x, n), ByteSequence::zeroed(4));
        }
    }

    #[test]
    fn test_operator_traits() {
        let x = seq([0x2d, 0xe9, 0x2f, 0xfe]);
        assert_eq!(&x << 2, seq([0xb7, 0xa4, 0xbf, 0xf8]));
        assert_eq!(&x >> 2, seq([0x0b, 0x7a, 0x4b, 0xff]));
        assert_eq!(!&x, seq([0xd2, 0x16, 0xd0, 0x01]));
        assert_eq!(!!x.clone(), x);
        assert_eq!(x.clone() << 0, x);
    }

    #[test]
    fn test_inherent_methods() {
        let a = seq([0xf0, 0x0f]);
        let b = seq([0x3c, 0x3c]);
        assert_eq!(a.and(&b).unwrap(), seq([0x30, 0x0c]));
        assert_eq!(a.or(&b).unwrap(), seq([0xfc, 0x3f]));
        assert_eq!(a.xor(&b).unwrap(), seq([0xcc, 0x33]));
        assert!(a.and(&seq([0x00])).is_err());
    }
}
