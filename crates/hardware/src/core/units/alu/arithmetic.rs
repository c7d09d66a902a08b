//! ALU arithmetic operations.
//!
//! Implements addition, multiplication, and remainder on byte-wide
//! operands. Addition and multiplication wrap modulo 256.

use super::AluOp;

/// Wrapping 8-bit addition.
#[inline(always)]
pub const fn add(a: u8, b: u8) -> u8 {
    a.wrapping_add(b)
}

/// Wrapping 8-bit multiplication.
#[inline(always)]
pub const fn mul(a: u8, b: u8) -> u8 {
    a.wrapping_mul(b)
}

/// Remainder of `a / b`, or `None` when `b` is zero.
#[inline(always)]
pub const fn modulo(a: u8, b: u8) -> Option<u8> {
    a.checked_rem(b)
}

/// Executes an arithmetic operation.
///
/// # Returns
///
/// The 8-bit result, or `None` for a remainder by zero. Returns `Some(0)`
/// for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: u8, b: u8) -> Option<u8> {
    match op {
        AluOp::Add => Some(add(a, b)),
        AluOp::Mul => Some(mul(a, b)),
        AluOp::Mod => modulo(a, b),
        _ => Some(0),
    }
}
