//! Comparison flags register.
//!
//! `CMP` leaves exactly one of three patterns in the register; every other
//! instruction leaves it untouched. Conditional jumps compare the whole byte
//! against [`Flags::EQUAL`] rather than masking a single bit, so a register
//! holding `0b011` is not "equal".

use std::cmp::Ordering;

use crate::common::constants::{FLAG_EQUAL, FLAG_GREATER, FLAG_LESS};

/// The flags register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

impl Flags {
    /// Operands compared equal.
    pub const EQUAL: Self = Self(FLAG_EQUAL);
    /// First operand compared greater.
    pub const GREATER: Self = Self(FLAG_GREATER);
    /// First operand compared less.
    pub const LESS: Self = Self(FLAG_LESS);

    /// Wraps a raw byte.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw byte value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Flags for comparing `a` against `b` as unsigned bytes.
    pub fn compare(a: u8, b: u8) -> Self {
        a.cmp(&b).into()
    }

    /// Exact match against [`Flags::EQUAL`].
    #[inline]
    pub const fn is_equal(self) -> bool {
        self.0 == FLAG_EQUAL
    }
}

impl From<Ordering> for Flags {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Self::LESS,
            Ordering::Equal => Self::EQUAL,
            Ordering::Greater => Self::GREATER,
        }
    }
}
