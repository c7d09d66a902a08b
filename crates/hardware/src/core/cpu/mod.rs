//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Maintains registers, program counter, stack pointer, and flags.
//! 2. **System Integration:** Owns memory and the console through `System`.
//! 3. **Lifecycle:** Program loading, reset, and halt tracking.
//! 4. **Observability:** Trace-line rendering and statistics.

/// Fetch-decode-execute cycle and opcode dispatch.
pub mod execution;

/// Instruction fetch and stack access.
pub mod memory;

use tracing::debug;

use crate::common::SimError;
use crate::config::{Config, LogicMode, StackDiscipline};
use crate::core::arch::{Flags, Gpr};
use crate::isa::disasm::disassemble;
use crate::soc::{Console, System};
use crate::stats::SimStats;

pub use execution::{RunSummary, StepOutcome};

/// Main CPU structure containing all machine state.
#[derive(Debug)]
pub struct Cpu<C: Console> {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Program counter.
    pub pc: u8,
    /// Stack pointer.
    pub sp: u8,
    /// Flags written by `CMP`.
    pub flags: Flags,
    /// Memory and console.
    pub bus: System<C>,
    /// Emit a trace event before each instruction.
    pub trace: bool,
    /// Combination rule for `AND` and `OR`.
    pub logic: LogicMode,
    /// Stack-pointer behaviour of `POP` and `RET`.
    pub stack_discipline: StackDiscipline,
    /// Execution statistics.
    pub stats: SimStats,
    halted: bool,
    start_pc: u8,
    initial_sp: u8,
}

impl<C: Console> Cpu<C> {
    /// Creates a CPU in its power-on state.
    ///
    /// # Arguments
    ///
    /// * `config` - Reset values, ALU mode, stack discipline, and tracing.
    /// * `console` - Receiver of `PRN` output.
    pub fn new(config: &Config, console: C) -> Self {
        Self {
            regs: Gpr::new(),
            pc: config.general.start_pc,
            sp: config.general.initial_sp,
            flags: Flags::default(),
            bus: System::new(console),
            trace: config.general.trace_instructions,
            logic: config.alu.logic,
            stack_discipline: config.stack.discipline,
            stats: SimStats::default(),
            halted: false,
            start_pc: config.general.start_pc,
            initial_sp: config.general.initial_sp,
        }
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns a load error if the image is larger than memory.
    pub fn load(&mut self, image: &[u8]) -> Result<(), SimError> {
        self.bus.memory.load(0, image)?;
        debug!(bytes = image.len(), "program loaded");
        Ok(())
    }

    /// Restores the power-on state: memory and registers zeroed, PC, SP and
    /// flags at their reset values, statistics cleared, and the halt latch
    /// released. The console is kept.
    pub fn reset(&mut self) {
        self.bus.memory.clear();
        self.regs.clear();
        self.pc = self.start_pc;
        self.sp = self.initial_sp;
        self.flags = Flags::default();
        self.stats = SimStats::default();
        self.halted = false;
        debug!(pc = self.pc, sp = self.sp, "cpu reset");
    }

    /// Returns `true` once `HLT` has executed or a fault has occurred.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// The console receiving program output.
    pub const fn console(&self) -> &C {
        &self.bus.console
    }

    /// Mutable access to the console.
    pub const fn console_mut(&mut self) -> &mut C {
        &mut self.bus.console
    }

    /// Renders the machine state about to execute as one line:
    /// `PC | IR A B | R0 .. R7 | mnemonic`, all bytes in hex.
    pub fn trace_line(&self) -> String {
        let [ir, a, b] = self.fetch();
        format!(
            "{:02X} | {ir:02X} {a:02X} {b:02X} | {} | {}",
            self.pc,
            self.regs.dump(),
            disassemble(ir, a, b)
        )
    }

    /// Formats registers, PC, SP, and flags for post-mortem output.
    pub fn dump_state(&self) -> String {
        format!(
            "PC={:#04x} SP={:#04x} FL={:#010b} REGS=[{}]",
            self.pc,
            self.sp,
            self.flags.bits(),
            self.regs.dump()
        )
    }
}
