//! Simulator: a CPU plus the policies of a host run.
//!
//! The CPU itself has no notion of files or time limits. `Simulator` adds
//! loading an image from disk and an optional instruction budget for hosts
//! that must not hang on a program that never halts.

use tracing::info;

use crate::common::SimError;
use crate::config::Config;
use crate::core::{Cpu, RunSummary, StepOutcome};
use crate::sim::loader;
use crate::soc::Console;

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator<C: Console> {
    /// The emulated machine.
    pub cpu: Cpu<C>,
}

impl<C: Console> Simulator<C> {
    /// Creates a simulator with a CPU in its power-on state.
    pub fn new(config: &Config, console: C) -> Self {
        Self {
            cpu: Cpu::new(config, console),
        }
    }

    /// Loads an in-memory image.
    ///
    /// # Errors
    ///
    /// Returns a load error if the image is larger than memory.
    pub fn load(&mut self, image: &[u8]) -> Result<(), SimError> {
        self.cpu.load(image)
    }

    /// Reads, parses, and loads a program image file. Returns the image size.
    ///
    /// # Errors
    ///
    /// Returns any error from [`loader::load_image_file`].
    pub fn load_file(&mut self, path: impl AsRef<std::path::Path>) -> Result<usize, SimError> {
        let image = loader::load_image_file(path)?;
        self.cpu.load(&image)?;
        Ok(image.len())
    }

    /// Runs until `HLT`, a fault, or `max_steps` instructions.
    ///
    /// # Errors
    ///
    /// Returns the fault that stopped the CPU, or
    /// [`SimError::StepLimitExceeded`] if the budget ran out first.
    pub fn run(&mut self, max_steps: Option<u64>) -> Result<RunSummary, SimError> {
        let Some(limit) = max_steps else {
            return self.cpu.run();
        };

        let start = self.cpu.stats.instructions_retired;
        for _ in 0..limit {
            if self.cpu.step()? == StepOutcome::Halted {
                return Ok(RunSummary {
                    instructions: self.cpu.stats.instructions_retired - start,
                    halt_pc: self.cpu.pc,
                });
            }
        }
        info!(limit, pc = self.cpu.pc, "instruction budget exhausted");
        Err(SimError::StepLimitExceeded { limit })
    }
}
