//! ALU shift operations.
//!
//! The shift amount is the full value of the second operand. Amounts of 8 or
//! more shift every bit out and produce zero.

use super::AluOp;

/// Logical shift left.
#[inline]
pub const fn shl(a: u8, amount: u8) -> u8 {
    match a.checked_shl(amount as u32) {
        Some(v) => v,
        None => 0,
    }
}

/// Logical shift right.
#[inline]
pub const fn shr(a: u8, amount: u8) -> u8 {
    match a.checked_shr(amount as u32) {
        Some(v) => v,
        None => 0,
    }
}

/// Executes a shift. Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::Shl => shl(a, b),
        AluOp::Shr => shr(a, b),
        _ => 0,
    }
}
