//! Output devices.
//!
//! This module contains the console implementations that receive `PRN` output.

/// Standard-output and in-memory consoles.
pub mod console;

pub use console::{BufferConsole, StdoutConsole};

pub use crate::soc::traits::Console;
