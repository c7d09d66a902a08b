//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle of the CPU. It performs the following:
//! 1. **Fetch:** Reads the opcode at PC and the two bytes after it.
//! 2. **Decode:** Maps the opcode byte onto the closed `Opcode` table.
//! 3. **Dispatch:** Runs the handler for that opcode. Each handler advances PC by its own
//!    encoded length or overwrites it; the loop never moves PC on its own.
//! 4. **Halt:** Latches the halted state on `HLT` or on any fault.

use tracing::{debug, trace, warn};

use super::Cpu;
use crate::common::SimError;
use crate::core::arch::Gpr;
use crate::core::units::alu::{Alu, AluOp, AluOutput, arithmetic};
use crate::isa::{Instruction, Opcode, decode};
use crate::soc::Console;

/// Result of executing a single instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The instruction completed and the CPU is ready for the next one.
    Continue,
    /// `HLT` executed.
    Halted,
}

/// Summary of a run that ended with `HLT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Instructions retired during this run, the `HLT` included.
    pub instructions: u64,
    /// Address of the `HLT` that ended the run.
    pub halt_pc: u8,
}

impl<C: Console> Cpu<C> {
    /// Runs until `HLT` or a fault.
    ///
    /// # Errors
    ///
    /// Returns the fault that stopped execution. The CPU is halted either way.
    pub fn run(&mut self) -> Result<RunSummary, SimError> {
        let start = self.stats.instructions_retired;
        while self.step()? == StepOutcome::Continue {}
        Ok(RunSummary {
            instructions: self.stats.instructions_retired - start,
            halt_pc: self.pc,
        })
    }

    /// Executes exactly one instruction.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Halted`] if the CPU already halted. Any fault raised
    /// by the instruction halts the CPU and is returned; an instruction that
    /// faults has no further effects beyond those already written.
    pub fn step(&mut self) -> Result<StepOutcome, SimError> {
        if self.halted {
            return Err(SimError::Halted { pc: self.pc });
        }

        if self.trace || cfg!(feature = "always-trace") {
            trace!(target: "ls8::trace", "{}", self.trace_line());
        }

        let pc = self.pc;
        let [ir, operand_a, operand_b] = self.fetch();
        let inst = decode(ir, operand_a, operand_b, pc).map_err(|e| self.fault(e))?;

        match self.execute(inst) {
            Ok(outcome) => {
                self.stats.retire(inst.opcode.class());
                if outcome == StepOutcome::Halted {
                    self.halted = true;
                    debug!(pc, "halted");
                }
                Ok(outcome)
            }
            Err(e) => Err(self.fault(e)),
        }
    }

    /// Latches the halted state and passes the fault through.
    fn fault(&mut self, err: SimError) -> SimError {
        self.halted = true;
        warn!(pc = self.pc, %err, "execution fault");
        err
    }

    /// Branch table: routes a decoded instruction to its handler.
    fn execute(&mut self, inst: Instruction) -> Result<StepOutcome, SimError> {
        let Instruction {
            opcode,
            operand_a: a,
            operand_b: b,
        } = inst;

        match opcode {
            Opcode::Hlt => return Ok(StepOutcome::Halted),
            Opcode::Ldi => self.op_ldi(a, b)?,
            Opcode::Addi => self.op_addi(a, b)?,
            Opcode::Prn => self.op_prn(a)?,
            Opcode::Add
            | Opcode::Mul
            | Opcode::Mod
            | Opcode::Cmp
            | Opcode::And
            | Opcode::Or
            | Opcode::Xor
            | Opcode::Not
            | Opcode::Shl
            | Opcode::Shr => self.op_alu(opcode, a, b)?,
            Opcode::Push => self.op_push(a)?,
            Opcode::Pop => self.op_pop(a)?,
            Opcode::Call => self.op_call(a)?,
            Opcode::Ret => self.op_ret(),
            Opcode::Jmp => self.op_jump(opcode, a, true)?,
            Opcode::Jeq => {
                let taken = self.flags.is_equal();
                self.op_jump(opcode, a, taken)?;
            }
            Opcode::Jne => {
                let taken = !self.flags.is_equal();
                self.op_jump(opcode, a, taken)?;
            }
        }
        Ok(StepOutcome::Continue)
    }

    /// Moves PC past the current instruction.
    #[inline(always)]
    const fn advance(&mut self, op: Opcode) {
        self.pc = self.pc.wrapping_add(op.size());
    }

    /// Transfers control and counts the taken branch.
    #[inline(always)]
    const fn branch_to(&mut self, target: u8) {
        self.pc = target;
        self.stats.branches_taken += 1;
    }

    fn op_ldi(&mut self, reg: u8, imm: u8) -> Result<(), SimError> {
        self.regs.write(reg, imm)?;
        self.advance(Opcode::Ldi);
        Ok(())
    }

    fn op_addi(&mut self, reg: u8, imm: u8) -> Result<(), SimError> {
        let val = self.regs.read(reg)?;
        self.regs.write(reg, arithmetic::add(val, imm))?;
        self.advance(Opcode::Addi);
        Ok(())
    }

    fn op_prn(&mut self, reg: u8) -> Result<(), SimError> {
        let val = self.regs.read(reg)?;
        self.bus
            .console
            .write_line(&val.to_string())
            .map_err(SimError::Output)?;
        self.advance(Opcode::Prn);
        Ok(())
    }

    fn op_alu(&mut self, opcode: Opcode, reg_a: u8, reg_b: u8) -> Result<(), SimError> {
        let op = AluOp::try_from(opcode)?;
        self.alu(op, reg_a, reg_b)?;
        self.advance(opcode);
        Ok(())
    }

    /// Applies an ALU operation to two registers.
    ///
    /// The result lands in `reg_a`; `Cmp` writes the flags instead. `Not`
    /// never touches `reg_b`, so whatever byte follows it need not be a valid
    /// register index.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] for a bad index. A `Mod` by a
    /// zero divisor first writes `"<reg_b> is 0"` to the console and then
    /// returns [`SimError::DivisionByZero`].
    pub fn alu(&mut self, op: AluOp, reg_a: u8, reg_b: u8) -> Result<(), SimError> {
        let a = self.regs.read(reg_a)?;
        let b = if op.is_unary() {
            0
        } else {
            self.regs.read(reg_b)?
        };

        match Alu::execute(op, a, b, self.logic) {
            Some(AluOutput::Value(val)) => self.regs.write(reg_a, val),
            Some(AluOutput::Flags(flags)) => {
                self.flags = flags;
                Ok(())
            }
            None => {
                self.bus
                    .console
                    .write_line(&format!("{reg_b} is 0"))
                    .map_err(SimError::Output)?;
                Err(SimError::DivisionByZero { register: reg_b })
            }
        }
    }

    fn op_push(&mut self, reg: u8) -> Result<(), SimError> {
        let val = self.regs.read(reg)?;
        self.push(val);
        self.advance(Opcode::Push);
        Ok(())
    }

    fn op_pop(&mut self, reg: u8) -> Result<(), SimError> {
        // Validate before popping so a bad index leaves SP untouched.
        Gpr::check(reg)?;
        let val = self.pop();
        self.regs.write(reg, val)?;
        self.advance(Opcode::Pop);
        Ok(())
    }

    fn op_call(&mut self, reg: u8) -> Result<(), SimError> {
        let target = self.regs.read(reg)?;
        let return_addr = self.pc.wrapping_add(Opcode::Call.size());
        self.push(return_addr);
        self.branch_to(target);
        Ok(())
    }

    fn op_ret(&mut self) {
        let target = self.pop();
        self.branch_to(target);
    }

    /// Jumps to the address in `reg` when `taken`; otherwise falls through.
    /// The target register is only read for a taken jump.
    fn op_jump(&mut self, opcode: Opcode, reg: u8, taken: bool) -> Result<(), SimError> {
        if taken {
            let target = self.regs.read(reg)?;
            self.branch_to(target);
        } else {
            self.advance(opcode);
        }
        Ok(())
    }
}
