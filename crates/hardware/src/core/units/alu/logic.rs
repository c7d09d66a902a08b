//! ALU logical and comparison operations.
//!
//! Implements AND, OR, XOR, NOT, and the flag-producing compare.
//!
//! AND and OR follow [`LogicMode`]. In `Logical` mode each operand is treated
//! as a truth value and the result is one of the operands themselves, never a
//! mix of their bits: `AND(0x0C, 0x0A)` is `0x0A`, not `0x08`.

use super::AluOp;
use crate::config::LogicMode;
use crate::core::arch::Flags;

/// AND under the given mode.
pub const fn and(a: u8, b: u8, mode: LogicMode) -> u8 {
    match mode {
        LogicMode::Logical => {
            if a == 0 {
                a
            } else {
                b
            }
        }
        LogicMode::Bitwise => a & b,
    }
}

/// OR under the given mode.
pub const fn or(a: u8, b: u8, mode: LogicMode) -> u8 {
    match mode {
        LogicMode::Logical => {
            if a == 0 {
                b
            } else {
                a
            }
        }
        LogicMode::Bitwise => a | b,
    }
}

/// Executes a logical operation.
///
/// `NOT` ignores `b`. Returns `0` for opcodes outside this group; `CMP` is
/// handled by [`compare`].
pub const fn execute(op: AluOp, a: u8, b: u8, mode: LogicMode) -> u8 {
    match op {
        AluOp::And => and(a, b, mode),
        AluOp::Or => or(a, b, mode),
        AluOp::Xor => a ^ b,
        AluOp::Not => !a,
        _ => 0,
    }
}

/// Unsigned comparison producing exactly one flag.
pub fn compare(a: u8, b: u8) -> Flags {
    Flags::compare(a, b)
}
