//! LS-8 emulator library.
//!
//! This crate implements an emulator for the LS-8, an 8-bit register machine with
//! 256 bytes of memory and eight registers:
//! 1. **Core:** Register file, flags, the ALU, and the fetch-decode-execute engine.
//! 2. **ISA:** Opcode table, decoding, and disassembly.
//! 3. **System:** Memory and the console that receives `PRN` output.
//! 4. **Simulation:** Program image loading, configuration, and statistics.
//!
//! ```
//! use ls8_core::{Config, Cpu};
//! use ls8_core::soc::BufferConsole;
//!
//! let mut cpu = Cpu::new(&Config::default(), BufferConsole::new());
//! cpu.load(&[0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001])?;
//! cpu.run()?;
//! assert_eq!(cpu.console().lines(), ["8"]);
//! # Ok::<(), ls8_core::SimError>(())
//! ```

/// Common types and constants (limits, reset values, errors).
pub mod common;
/// Emulator configuration.
pub mod config;
/// CPU core (architectural state, execution engine, ALU).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader and simulator wrapper.
pub mod sim;
/// Memory and console devices.
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Error type returned by every fallible operation.
pub use crate::common::SimError;
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, console, and stats.
pub use crate::core::Cpu;
/// CPU wrapper with file loading and an instruction budget.
pub use crate::sim::Simulator;
