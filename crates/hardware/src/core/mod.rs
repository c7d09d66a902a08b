//! Core processor implementation.
//!
//! This module contains the CPU: its architectural state, the
//! fetch-decode-execute engine, and the ALU.

/// Architectural state (register file, flags).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, RunSummary, StepOutcome};
