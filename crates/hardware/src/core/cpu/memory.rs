//! Memory Access Helpers.
//!
//! This module provides the interface between the CPU and memory.
//! It performs the following:
//! 1. **Fetch:** Reads the opcode and both look-ahead operand bytes.
//! 2. **Stack Access:** Push and pop through the stack pointer.
//!
//! All address arithmetic wraps modulo 256.

use super::Cpu;
use crate::config::StackDiscipline;
use crate::soc::Console;

impl<C: Console> Cpu<C> {
    /// Reads the bytes at `pc`, `pc + 1`, and `pc + 2`.
    ///
    /// Both operand bytes are read for every instruction, whether it uses
    /// them or not.
    #[inline]
    pub const fn fetch(&self) -> [u8; 3] {
        let mem = &self.bus.memory;
        [
            mem.read(self.pc),
            mem.read(self.pc.wrapping_add(1)),
            mem.read(self.pc.wrapping_add(2)),
        ]
    }

    /// Decrements SP, then stores `value` at the new top of stack.
    #[inline]
    pub const fn push(&mut self, value: u8) {
        self.sp = self.sp.wrapping_sub(1);
        self.bus.memory.write(self.sp, value);
    }

    /// Reads the top of stack.
    ///
    /// Under [`StackDiscipline::Reference`] SP stays where it is, so the next
    /// push lands one cell below the value just read. Under
    /// [`StackDiscipline::Conventional`] SP moves back up past it.
    #[inline]
    pub fn pop(&mut self) -> u8 {
        let value = self.bus.memory.read(self.sp);
        if self.stack_discipline == StackDiscipline::Conventional {
            self.sp = self.sp.wrapping_add(1);
        }
        value
    }
}
