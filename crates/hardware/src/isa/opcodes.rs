//! LS-8 Opcodes.
//!
//! Raw byte values of every instruction. The operand count of each opcode is
//! fixed by [`Opcode::size`](super::instruction::Opcode::size), not by any bit
//! field of the byte itself: `ADDI` does not follow the high-bit length
//! convention the other opcodes happen to share.

/// Halt the CPU.
pub const HLT: u8 = 0b0000_0001;

/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// Print a register as a decimal number.
pub const PRN: u8 = 0b0100_0111;

/// Call the subroutine whose address is in a register.
pub const CALL: u8 = 0b0101_0000;

/// Jump to the address in a register.
pub const JMP: u8 = 0b0101_0100;

/// Jump if the last comparison was equal.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the last comparison was not equal.
pub const JNE: u8 = 0b0101_0110;

/// Bitwise complement of a register.
pub const NOT: u8 = 0b0110_1001;

/// Add an immediate to a register.
pub const ADDI: u8 = 0b0111_1111;

/// Load an immediate into a register.
pub const LDI: u8 = 0b1000_0010;

/// Add two registers.
pub const ADD: u8 = 0b1010_0000;

/// Multiply two registers.
pub const MUL: u8 = 0b1010_0010;

/// Remainder of two registers.
pub const MOD: u8 = 0b1010_0100;

/// Compare two registers and set flags.
pub const CMP: u8 = 0b1010_0111;

/// AND two registers.
pub const AND: u8 = 0b1010_1000;

/// OR two registers.
pub const OR: u8 = 0b1010_1010;

/// XOR two registers.
pub const XOR: u8 = 0b1010_1011;

/// Shift a register left.
pub const SHL: u8 = 0b1010_1100;

/// Shift a register right.
pub const SHR: u8 = 0b1010_1101;
