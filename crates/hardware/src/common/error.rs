//! Error definitions.
//!
//! This module defines every way a load or an execution can fail. It provides:
//! 1. **Load Errors:** Missing, unreadable, malformed, or oversized program images.
//! 2. **Execution Faults:** Unknown opcodes, division by zero, and out-of-range accesses.
//! 3. **Host Errors:** Output and configuration failures surfaced from the host.
//!
//! Every fault terminates the run. The CPU is left in whatever state the last
//! completed write produced; nothing is rolled back.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a program image into a memory buffer.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file is missing or unreadable.
    #[error("could not read program image '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line holds something other than a binary literal that fits in a byte.
    #[error("line {line}: '{text}' is not an 8-bit binary literal")]
    InvalidLiteral {
        /// 1-based line number in the source text.
        line: usize,
        /// The offending text with any comment stripped.
        text: String,
    },

    /// The image does not fit in memory at the requested offset.
    #[error("program image of {len} bytes does not fit at offset {offset:#04x} ({capacity} bytes of memory)")]
    ImageTooLarge {
        /// Image length in bytes.
        len: usize,
        /// Load offset in memory.
        offset: usize,
        /// Total memory size.
        capacity: usize,
    },
}

/// Errors raised by the emulator.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program image could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The fetched byte does not name an instruction.
    #[error("unknown opcode {opcode:#010b} at pc {pc:#04x}")]
    UnknownOpcode {
        /// The undecodable byte.
        opcode: u8,
        /// Address it was fetched from.
        pc: u8,
    },

    /// An instruction that is not an ALU operation was routed to the ALU.
    #[error("unsupported ALU operation: {0}")]
    UnsupportedAluOperation(&'static str),

    /// `MOD` with a zero divisor.
    #[error("division by zero: divisor register R{register} is 0")]
    DivisionByZero {
        /// Index of the divisor register.
        register: u8,
    },

    /// A register index outside `R0`-`R7`.
    #[error("register index {0} out of range")]
    RegisterOutOfRange(u8),

    /// A memory address outside the 256-byte address space.
    #[error("memory address {0:#x} out of range")]
    AddressOutOfRange(usize),

    /// The CPU was stepped after it had already halted.
    #[error("cpu is halted at pc {pc:#04x}")]
    Halted {
        /// Program counter at the time of the halt.
        pc: u8,
    },

    /// The program did not halt within the allowed number of instructions.
    #[error("program did not halt within {limit} instructions")]
    StepLimitExceeded {
        /// The instruction budget that was exhausted.
        limit: u64,
    },

    /// Writing to the output console failed.
    #[error("console output failed: {0}")]
    Output(#[source] io::Error),

    /// The configuration file could not be read.
    #[error("could not read configuration '{}': {source}", path.display())]
    ConfigRead {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid JSON or has unknown fields.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl SimError {
    /// Returns `true` for errors raised while loading, before any instruction ran.
    pub const fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::Load(_) | Self::ConfigRead { .. } | Self::Config(_)
        )
    }
}
