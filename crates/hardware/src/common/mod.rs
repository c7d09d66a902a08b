//! Common types and constants shared across the emulator.
//!
//! This module provides:
//! 1. **Constants:** Memory size, register count, reset values, and flag patterns.
//! 2. **Error Handling:** The `SimError` and `LoadError` types returned by every fallible operation.

/// Machine-wide constants.
pub mod constants;

/// Error types for loading and execution.
pub mod error;

pub use constants::{MEMORY_SIZE, NUM_REGISTERS, RESET_PC, RESET_SP};
pub use error::{LoadError, SimError};
