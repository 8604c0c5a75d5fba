//! Bitwise operations on a single byte.

/// Bitwise algebra on a single 8-bit value.
///
/// Every operation is pure and total. Shifts are logical, and a shift by the
/// full width of a byte or more yields zero rather than wrapping the shift
/// amount.
pub trait BitOperation {
    /// Computes `a & b`.
    fn and(&self, a: u8, b: u8) -> u8;

    /// Computes `a | b`.
    fn or(&self, a: u8, b: u8) -> u8;

    /// Computes `a ^ b`.
    fn xor(&self, a: u8, b: u8) -> u8;

    /// Computes the one's complement `!a`.
    fn not(&self, a: u8) -> u8;

    /// Shifts `a` left by `n` bits. Returns zero if `n >= 8`.
    fn shift_left(&self, a: u8, n: u32) -> u8;

    /// Shifts `a` right by `n` bits. Returns zero if `n >= 8`.
    fn shift_right(&self, a: u8, n: u32) -> u8;
}

/// The native [`BitOperation`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitwise;

impl Bitwise {
    /// Creates the operator. It carries no state.
    #[inline(always)]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// This method is a `const` variant of [`BitOperation::and`].
    #[inline(always)]
    #[must_use]
    pub const fn and(self, a: u8, b: u8) -> u8 {
        a & b
    }

    /// This method is a `const` variant of [`BitOperation::or`].
    #[inline(always)]
    #[must_use]
    pub const fn or(self, a: u8, b: u8) -> u8 {
        a | b
    }

    /// This method is a `const` variant of [`BitOperation::xor`].
    #[inline(always)]
    #[must_use]
    pub const fn xor(self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// This method is a `const` variant of [`BitOperation::not`].
    #[inline(always)]
    #[must_use]
    pub const fn not(self, a: u8) -> u8 {
        !a
    }

    /// This method is a `const` variant of [`BitOperation::shift_left`].
    #[inline(always)]
    #[must_use]
    pub const fn shift_left(self, a: u8, n: u32) -> u8 {
        match a.checked_shl(n) {
            Some(value) => value,
            None => 0,
        }
    }

    /// This method is a `const` variant of [`BitOperation::shift_right`].
    #[inline(always)]
    #[must_use]
    pub const fn shift_right(self, a: u8, n: u32) -> u8 {
        match a.checked_shr(n) {
            Some(value) => value,
            None => 0,
        }
    }
}

impl BitOperation for Bitwise {
    fn and(&self, a: u8, b: u8) -> u8 {
        Bitwise::and(*self, a, b)
    }

    fn or(&self, a: u8, b: u8) -> u8 {
        Bitwise::or(*self, a, b)
    }

    fn xor(&self, a: u8, b: u8) -> u8 {
        Bitwise::xor(*self, a, b)
    }

    fn not(&self, a: u8) -> u8 {
        Bitwise::not(*self, a)
    }

    fn shift_left(&self, a: u8, n: u32) -> u8 {
        Bitwise::shift_left(*self, a, n)
    }

    fn shift_right(&self, a: u8, n: u32) -> u8 {
        Bitwise::shift_right(*self, a, n)
    }
}
