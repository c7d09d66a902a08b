//! Top-level `System` type.
//!
//! The system couples main memory with the console that receives program
//! output. The CPU owns exactly one `System` and is its only mutator.

use crate::soc::memory::Memory;
use crate::soc::traits::Console;

/// Memory and output device seen by the CPU.
#[derive(Debug)]
pub struct System<C: Console> {
    /// Main memory (program, data, and stack).
    pub memory: Memory,
    /// Receiver of `PRN` output.
    pub console: C,
}

impl<C: Console> System<C> {
    /// Creates a system with zeroed memory and the given console.
    pub const fn new(console: C) -> Self {
        Self {
            memory: Memory::new(),
            console,
        }
    }
}
