//! LS-8 Instruction Set Architecture.
//!
//! This module defines the instruction set the emulator executes. It includes:
//! 1. **Opcodes:** Raw byte values for every instruction.
//! 2. **Instruction:** The closed `Opcode` enum and its per-opcode properties.
//! 3. **Decode:** Turning fetched bytes into an `Instruction`.
//! 4. **Disassembly:** Mnemonic rendering for traces and listings.

/// Instruction decoder.
pub mod decode;

/// Instruction disassembler for debug tracing and listings.
pub mod disasm;

/// Opcode enumeration and per-opcode properties.
pub mod instruction;

/// Raw opcode byte values.
pub mod opcodes;

pub use decode::{Instruction, decode};
pub use instruction::{InstClass, Opcode, Operands};
