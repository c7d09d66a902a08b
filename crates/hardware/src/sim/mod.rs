//! Simulation utilities and program loading.
//!
//! Provides the program image loader and the `Simulator` wrapper used by
//! hosts such as the command-line runner.

/// Program image parsing and file loading.
pub mod loader;

/// CPU wrapper with file loading and an instruction budget.
pub mod simulator;

pub use simulator::Simulator;
