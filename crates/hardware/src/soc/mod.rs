//! System Components.
//!
//! This module organizes what sits around the CPU: main memory and the
//! console that receives program output.

/// `System` type pairing memory with a console.
pub mod builder;

/// Console device implementations.
pub mod devices;

/// Main memory.
pub mod memory;

/// Console trait definition.
pub mod traits;

pub use builder::System;
pub use devices::{BufferConsole, StdoutConsole};
pub use memory::Memory;
pub use traits::Console;
