//! System Memory.
//!
//! This module implements the LS-8's single 256-byte address space. Program,
//! data, and stack share it with no protection between them.
//!
//! The engine addresses memory with `u8` values, so every internal access is
//! in range by construction and address arithmetic wraps modulo 256. Callers
//! holding a wider `usize` address go through the checked accessors.

use crate::common::{LoadError, MEMORY_SIZE, SimError};

/// Main memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Creates zero-filled memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads one byte.
    #[inline(always)]
    pub const fn read(&self, addr: u8) -> u8 {
        self.cells[addr as usize]
    }

    /// Writes one byte.
    #[inline(always)]
    pub const fn write(&mut self, addr: u8, val: u8) {
        self.cells[addr as usize] = val;
    }

    /// Reads one byte at a host-supplied address.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::AddressOutOfRange`] if `addr` is not below 256.
    pub fn read_at(&self, addr: usize) -> Result<u8, SimError> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(SimError::AddressOutOfRange(addr))
    }

    /// Writes one byte at a host-supplied address.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::AddressOutOfRange`] if `addr` is not below 256.
    pub fn write_at(&mut self, addr: usize, val: u8) -> Result<(), SimError> {
        let cell = self
            .cells
            .get_mut(addr)
            .ok_or(SimError::AddressOutOfRange(addr))?;
        *cell = val;
        Ok(())
    }

    /// Copies `data` into memory starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ImageTooLarge`] if the data would run past the end
    /// of memory. Nothing is written in that case.
    pub fn load(&mut self, offset: usize, data: &[u8]) -> Result<(), SimError> {
        let end = offset
            .checked_add(data.len())
            .filter(|&end| end <= MEMORY_SIZE)
            .ok_or(LoadError::ImageTooLarge {
                len: data.len(),
                offset,
                capacity: MEMORY_SIZE,
            })?;
        self.cells[offset..end].copy_from_slice(data);
        Ok(())
    }

    /// Zeroes every cell.
    pub const fn clear(&mut self) {
        self.cells = [0; MEMORY_SIZE];
    }

    /// Returns the whole address space.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.cells.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("non_zero_cells", &used)
            .finish()
    }
}
