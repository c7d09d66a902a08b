//! Global Machine Constants.
//!
//! This module defines the fixed dimensions and reset values of the LS-8. It includes:
//! 1. **Storage Constants:** Memory size and register count.
//! 2. **Reset Constants:** Power-on values for the program counter and stack pointer.
//! 3. **Flag Constants:** Bit patterns written by `CMP`.

/// Number of addressable memory cells (8-bit address space).
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers (`R0`-`R7`).
pub const NUM_REGISTERS: usize = 8;

/// Program counter value at power-on.
pub const RESET_PC: u8 = 0x00;

/// Stack pointer value at power-on.
///
/// The stack grows downward from here through the same memory that holds
/// program and data; there is no protection between the two.
pub const RESET_SP: u8 = 0xF4;

/// Flags value: the last comparison found the operands equal.
pub const FLAG_EQUAL: u8 = 0b0000_0001;

/// Flags value: the last comparison found the first operand greater.
pub const FLAG_GREATER: u8 = 0b0000_0010;

/// Flags value: the last comparison found the first operand less.
pub const FLAG_LESS: u8 = 0b0000_0100;
