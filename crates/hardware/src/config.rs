//! Configuration system for the LS-8 emulator.
//!
//! This module defines the configuration structures and enums used to parameterize
//! the emulator. It provides:
//! 1. **Defaults:** Power-on register values of the stock LS-8.
//! 2. **Structures:** General, ALU, and stack configuration sections.
//! 3. **Enums:** Logic-operation mode and stack discipline.
//!
//! Configuration is deserialized from JSON; every field is optional and unknown
//! fields are rejected. Use `Config::default()` for the stock LS-8.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the emulator.
mod defaults {
    pub use crate::common::constants::{RESET_PC as START_PC, RESET_SP as INITIAL_SP};
}

/// How `AND` and `OR` combine their operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum LogicMode {
    /// Truthiness combination of whole register values.
    ///
    /// `AND` yields `dest` when `dest` is zero and `src` otherwise; `OR` yields
    /// `dest` when `dest` is non-zero and `src` otherwise.
    #[default]
    Logical,
    /// Bit-by-bit `&` and `|`.
    Bitwise,
}

/// How `POP` and `RET` treat the stack pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum StackDiscipline {
    /// `POP` and `RET` read `memory[SP]` and leave SP where it is.
    ///
    /// Nothing ever moves SP back up, so every push claims a fresh cell and a
    /// nested `RET` returns to the innermost return address again.
    #[default]
    Reference,
    /// `POP` and `RET` increment SP after reading, undoing the matching push.
    Conventional,
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General settings (tracing, reset values).
    #[serde(default)]
    pub general: GeneralConfig,
    /// ALU behaviour.
    #[serde(default)]
    pub alu: AluConfig,
    /// Stack behaviour.
    #[serde(default)]
    pub stack: StackConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the text is not valid JSON or names an
    /// unknown field.
    pub fn from_json(text: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ConfigRead`] if the file cannot be read and
    /// [`SimError::Config`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General emulation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Emit a `trace`-level event with the machine state before every instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Program counter after reset.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u8,

    /// Stack pointer after reset.
    #[serde(default = "GeneralConfig::default_initial_sp")]
    pub initial_sp: u8,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u8 {
        defaults::START_PC
    }

    /// Returns the default initial stack pointer.
    const fn default_initial_sp() -> u8 {
        defaults::INITIAL_SP
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            initial_sp: defaults::INITIAL_SP,
        }
    }
}

/// ALU settings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AluConfig {
    /// Combination rule for `AND` and `OR`.
    #[serde(default)]
    pub logic: LogicMode,
}

/// Stack settings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StackConfig {
    /// Stack-pointer behaviour of `POP` and `RET`.
    #[serde(default)]
    pub discipline: StackDiscipline,
}
