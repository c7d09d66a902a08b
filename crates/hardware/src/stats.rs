//! Emulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the LS-8 emulator. It provides:
//! 1. **Throughput:** Retired instructions and host-side instructions per second.
//! 2. **Instruction mix:** Counts by category (ALU, load, stack, branch, I/O, system).
//! 3. **Control flow:** How many jumps, calls, and returns actually transferred control.

use std::fmt;
use std::time::{Duration, Instant};

use crate::isa::InstClass;

/// Emulation statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions that completed without faulting.
    pub instructions_retired: u64,
    /// Arithmetic, logic, and compare instructions retired.
    pub inst_alu: u64,
    /// `LDI` instructions retired.
    pub inst_load: u64,
    /// `PUSH` and `POP` instructions retired.
    pub inst_stack: u64,
    /// Jump, call, and return instructions retired.
    pub inst_branch: u64,
    /// `PRN` instructions retired.
    pub inst_io: u64,
    /// `HLT` instructions retired.
    pub inst_system: u64,
    /// Control transfers that overwrote the program counter.
    pub branches_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_stack: 0,
            inst_branch: 0,
            inst_io: 0,
            inst_system: 0,
            branches_taken: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction of the given class.
    pub const fn retire(&mut self, class: InstClass) {
        self.instructions_retired += 1;
        match class {
            InstClass::Alu => self.inst_alu += 1,
            InstClass::Load => self.inst_load += 1,
            InstClass::Stack => self.inst_stack += 1,
            InstClass::Branch => self.inst_branch += 1,
            InstClass::Io => self.inst_io += 1,
            InstClass::System => self.inst_system += 1,
        }
    }

    /// Host time elapsed since the counters were created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.elapsed().as_secs_f64();
        let retired = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / retired) * 100.0;
        let kips = if seconds > 0.0 {
            (self.instructions_retired as f64 / seconds) / 1000.0
        } else {
            0.0
        };

        writeln!(f, "==========================================================")?;
        writeln!(f, "LS-8 EMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host_seconds             {seconds:.4} s")?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_kips                 {kips:.2}")?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, count) in [
            ("alu", self.inst_alu),
            ("load", self.inst_load),
            ("stack", self.inst_stack),
            ("branch", self.inst_branch),
            ("io", self.inst_io),
            ("system", self.inst_system),
        ] {
            writeln!(f, "  op.{name:<20} {count} ({:.2}%)", pct(count))?;
        }
        writeln!(f, "  branches.taken         {}", self.branches_taken)?;
        write!(f, "==========================================================")
    }
}
