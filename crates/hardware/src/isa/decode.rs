//! Instruction decoder.
//!
//! Turns the three bytes fetched at the program counter into an [`Instruction`].
//! Operand bytes are always supplied, even when the opcode ignores them.

use crate::common::SimError;
use crate::isa::instruction::Opcode;

/// A decoded instruction with its raw operand bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The operation.
    pub opcode: Opcode,
    /// Byte at `pc + 1`.
    pub operand_a: u8,
    /// Byte at `pc + 2`.
    pub operand_b: u8,
}

/// Decodes a fetched opcode byte and its two look-ahead bytes.
///
/// # Errors
///
/// Returns [`SimError::UnknownOpcode`] when `ir` is not in the instruction table.
pub fn decode(ir: u8, operand_a: u8, operand_b: u8, pc: u8) -> Result<Instruction, SimError> {
    let opcode = Opcode::from_byte(ir).ok_or(SimError::UnknownOpcode { opcode: ir, pc })?;
    Ok(Instruction {
        opcode,
        operand_a,
        operand_b,
    })
}
