//! Execution units.
//!
//! The LS-8 has a single functional unit, the ALU.

/// Arithmetic Logic Unit for byte-wide integer operations.
pub mod alu;
