//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the byte-wide ALU used by the execution engine.
//! It is a pure function of an operation and two register values; the engine
//! reads the operands and stores the result.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Mul, Mod
//! - [`logic`]:      And, Or, Xor, Not, Cmp
//! - [`shifts`]:     Shl, Shr

/// Arithmetic operations (add, multiply, remainder).
pub mod arithmetic;

/// Logical and comparison operations (and, or, xor, not, cmp).
pub mod logic;

/// Shift operations (shl, shr).
pub mod shifts;

use crate::common::SimError;
use crate::config::LogicMode;
use crate::core::arch::Flags;
use crate::isa::Opcode;

/// Operations the ALU can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping multiplication.
    Mul,
    /// Remainder.
    Mod,
    /// Compare; writes flags instead of a register.
    Cmp,
    /// AND, per [`LogicMode`].
    And,
    /// OR, per [`LogicMode`].
    Or,
    /// Bitwise exclusive or.
    Xor,
    /// Bitwise complement of the first operand.
    Not,
    /// Shift left.
    Shl,
    /// Shift right.
    Shr,
}

impl AluOp {
    /// Returns `true` if the operation reads only its first operand.
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Not)
    }
}

impl TryFrom<Opcode> for AluOp {
    type Error = SimError;

    fn try_from(op: Opcode) -> Result<Self, Self::Error> {
        Ok(match op {
            Opcode::Add => Self::Add,
            Opcode::Mul => Self::Mul,
            Opcode::Mod => Self::Mod,
            Opcode::Cmp => Self::Cmp,
            Opcode::And => Self::And,
            Opcode::Or => Self::Or,
            Opcode::Xor => Self::Xor,
            Opcode::Not => Self::Not,
            Opcode::Shl => Self::Shl,
            Opcode::Shr => Self::Shr,
            other => return Err(SimError::UnsupportedAluOperation(other.mnemonic())),
        })
    }
}

/// What an ALU operation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOutput {
    /// A value for the destination register.
    Value(u8),
    /// A new flags value; registers are left unchanged.
    Flags(Flags),
}

/// Arithmetic Logic Unit for byte-wide integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op`    - The operation to perform.
    /// * `a`     - Destination register value.
    /// * `b`     - Source register value (ignored by `Not`).
    /// * `logic` - How `And` and `Or` combine their operands.
    ///
    /// # Returns
    ///
    /// The produced value or flags, or `None` when the operation is undefined
    /// for its operands (a remainder by zero).
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::config::LogicMode;
    /// use ls8_core::core::arch::Flags;
    /// use ls8_core::core::units::alu::{Alu, AluOp, AluOutput};
    ///
    /// let sum = Alu::execute(AluOp::Add, 250, 10, LogicMode::Logical);
    /// assert_eq!(sum, Some(AluOutput::Value(4)));
    ///
    /// let cmp = Alu::execute(AluOp::Cmp, 3, 3, LogicMode::Logical);
    /// assert_eq!(cmp, Some(AluOutput::Flags(Flags::EQUAL)));
    ///
    /// assert_eq!(Alu::execute(AluOp::Mod, 7, 0, LogicMode::Logical), None);
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8, logic: LogicMode) -> Option<AluOutput> {
        let value = match op {
            AluOp::Add | AluOp::Mul | AluOp::Mod => arithmetic::execute(op, a, b)?,
            AluOp::Cmp => return Some(AluOutput::Flags(logic::compare(a, b))),
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Not => logic::execute(op, a, b, logic),
            AluOp::Shl | AluOp::Shr => shifts::execute(op, a, b),
        };
        Some(AluOutput::Value(value))
    }
}
