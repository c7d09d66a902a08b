//! Instruction set definition.
//!
//! Provides the closed [`Opcode`] enumeration and the per-opcode properties the
//! engine and disassembler need: encoded length, operand shape, mnemonic, and
//! statistics class.

use super::opcodes;

/// Every instruction the LS-8 understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// `HLT`
    Hlt = opcodes::HLT,
    /// `RET`
    Ret = opcodes::RET,
    /// `PUSH reg`
    Push = opcodes::PUSH,
    /// `POP reg`
    Pop = opcodes::POP,
    /// `PRN reg`
    Prn = opcodes::PRN,
    /// `CALL reg`
    Call = opcodes::CALL,
    /// `JMP reg`
    Jmp = opcodes::JMP,
    /// `JEQ reg`
    Jeq = opcodes::JEQ,
    /// `JNE reg`
    Jne = opcodes::JNE,
    /// `NOT reg`
    Not = opcodes::NOT,
    /// `ADDI reg, imm`
    Addi = opcodes::ADDI,
    /// `LDI reg, imm`
    Ldi = opcodes::LDI,
    /// `ADD reg, reg`
    Add = opcodes::ADD,
    /// `MUL reg, reg`
    Mul = opcodes::MUL,
    /// `MOD reg, reg`
    Mod = opcodes::MOD,
    /// `CMP reg, reg`
    Cmp = opcodes::CMP,
    /// `AND reg, reg`
    And = opcodes::AND,
    /// `OR reg, reg`
    Or = opcodes::OR,
    /// `XOR reg, reg`
    Xor = opcodes::XOR,
    /// `SHL reg, reg`
    Shl = opcodes::SHL,
    /// `SHR reg, reg`
    Shr = opcodes::SHR,
}

/// Shape of the operand bytes following an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operands {
    /// No operands.
    None,
    /// One register index.
    Reg,
    /// Two register indices.
    RegReg,
    /// A register index followed by an immediate byte.
    RegImm,
}

/// Coarse instruction category used for statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstClass {
    /// Arithmetic, logic, and compare.
    Alu,
    /// Immediate loads.
    Load,
    /// `PUSH` and `POP`.
    Stack,
    /// Jumps, calls, and returns.
    Branch,
    /// Console output.
    Io,
    /// `HLT`.
    System,
}

impl Opcode {
    /// All opcodes in table order.
    pub const ALL: [Self; 21] = [
        Self::Hlt,
        Self::Ret,
        Self::Push,
        Self::Pop,
        Self::Prn,
        Self::Call,
        Self::Jmp,
        Self::Jeq,
        Self::Jne,
        Self::Not,
        Self::Addi,
        Self::Ldi,
        Self::Add,
        Self::Mul,
        Self::Mod,
        Self::Cmp,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Shl,
        Self::Shr,
    ];

    /// Looks up the opcode for a raw byte, or `None` if the byte is unassigned.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        let op = match byte {
            opcodes::HLT => Self::Hlt,
            opcodes::RET => Self::Ret,
            opcodes::PUSH => Self::Push,
            opcodes::POP => Self::Pop,
            opcodes::PRN => Self::Prn,
            opcodes::CALL => Self::Call,
            opcodes::JMP => Self::Jmp,
            opcodes::JEQ => Self::Jeq,
            opcodes::JNE => Self::Jne,
            opcodes::NOT => Self::Not,
            opcodes::ADDI => Self::Addi,
            opcodes::LDI => Self::Ldi,
            opcodes::ADD => Self::Add,
            opcodes::MUL => Self::Mul,
            opcodes::MOD => Self::Mod,
            opcodes::CMP => Self::Cmp,
            opcodes::AND => Self::And,
            opcodes::OR => Self::Or,
            opcodes::XOR => Self::Xor,
            opcodes::SHL => Self::Shl,
            opcodes::SHR => Self::Shr,
            _ => return None,
        };
        Some(op)
    }

    /// Raw byte value.
    #[inline(always)]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Operand shape.
    pub const fn operands(self) -> Operands {
        match self {
            Self::Hlt | Self::Ret => Operands::None,
            Self::Push
            | Self::Pop
            | Self::Prn
            | Self::Call
            | Self::Jmp
            | Self::Jeq
            | Self::Jne
            | Self::Not => Operands::Reg,
            Self::Addi | Self::Ldi => Operands::RegImm,
            Self::Add
            | Self::Mul
            | Self::Mod
            | Self::Cmp
            | Self::And
            | Self::Or
            | Self::Xor
            | Self::Shl
            | Self::Shr => Operands::RegReg,
        }
    }

    /// Encoded length in bytes, opcode included.
    pub const fn size(self) -> u8 {
        match self.operands() {
            Operands::None => 1,
            Operands::Reg => 2,
            Operands::RegReg | Operands::RegImm => 3,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Hlt => "HLT",
            Self::Ret => "RET",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Prn => "PRN",
            Self::Call => "CALL",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
            Self::Not => "NOT",
            Self::Addi => "ADDI",
            Self::Ldi => "LDI",
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Mod => "MOD",
            Self::Cmp => "CMP",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
        }
    }

    /// Statistics category.
    pub const fn class(self) -> InstClass {
        match self {
            Self::Hlt => InstClass::System,
            Self::Prn => InstClass::Io,
            Self::Ldi => InstClass::Load,
            Self::Push | Self::Pop => InstClass::Stack,
            Self::Call | Self::Ret | Self::Jmp | Self::Jeq | Self::Jne => InstClass::Branch,
            Self::Addi
            | Self::Not
            | Self::Add
            | Self::Mul
            | Self::Mod
            | Self::Cmp
            | Self::And
            | Self::Or
            | Self::Xor
            | Self::Shl
            | Self::Shr => InstClass::Alu,
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte).ok_or(byte)
    }
}
