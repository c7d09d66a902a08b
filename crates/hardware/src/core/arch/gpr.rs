//! LS-8 General-Purpose Register File.
//!
//! This module implements the eight byte-wide registers `R0`-`R7`.
//! It performs the following:
//! 1. **Storage:** Maintains the register values.
//! 2. **Bounds Enforcement:** Rejects indices outside `0..8` instead of wrapping.
//! 3. **Debugging:** Renders the register state for traces and dumps.

use std::fmt::Write as _;

use crate::common::{NUM_REGISTERS, SimError};

/// General-purpose register file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gpr {
    regs: [u8; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a register file with every register zeroed.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] if `idx` is not in `0..8`.
    #[inline]
    pub fn read(&self, idx: u8) -> Result<u8, SimError> {
        self.regs
            .get(usize::from(idx))
            .copied()
            .ok_or(SimError::RegisterOutOfRange(idx))
    }

    /// Checks that `idx` names a register without reading it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] if `idx` is not in `0..8`.
    #[inline]
    pub const fn check(idx: u8) -> Result<(), SimError> {
        if (idx as usize) < NUM_REGISTERS {
            Ok(())
        } else {
            Err(SimError::RegisterOutOfRange(idx))
        }
    }

    /// Writes a register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] if `idx` is not in `0..8`.
    #[inline]
    pub fn write(&mut self, idx: u8, val: u8) -> Result<(), SimError> {
        let slot = self
            .regs
            .get_mut(usize::from(idx))
            .ok_or(SimError::RegisterOutOfRange(idx))?;
        *slot = val;
        Ok(())
    }

    /// Returns all register values in index order.
    pub const fn as_array(&self) -> &[u8; NUM_REGISTERS] {
        &self.regs
    }

    /// Zeroes every register.
    pub const fn clear(&mut self) {
        self.regs = [0; NUM_REGISTERS];
    }

    /// Formats all registers as space-separated hex bytes.
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(NUM_REGISTERS * 3);
        for (i, val) in self.regs.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{val:02X}");
        }
        out
    }
}
