//! Instruction Disassembler for the LS-8.
//!
//! Converts an opcode byte and its operand bytes into a human-readable
//! mnemonic string for debug tracing, listings, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0b1000_0010, 0, 8), "LDI R0, 8");
//! ```

use crate::isa::instruction::{Opcode, Operands};

/// Disassembles one instruction.
///
/// Unused operand bytes are ignored. Unassigned opcode bytes render as a
/// `.byte` directive.
pub fn disassemble(ir: u8, operand_a: u8, operand_b: u8) -> String {
    let Some(op) = Opcode::from_byte(ir) else {
        return format!(".byte {ir:#010b}");
    };
    let name = op.mnemonic();
    match op.operands() {
        Operands::None => name.to_string(),
        Operands::Reg => format!("{name} R{operand_a}"),
        Operands::RegReg => format!("{name} R{operand_a}, R{operand_b}"),
        Operands::RegImm => format!("{name} R{operand_a}, {operand_b}"),
    }
}

/// Disassembles a whole image, one line per instruction.
///
/// Each line holds the address, the raw bytes, and the mnemonic. Decoding
/// resumes one byte after any unassigned opcode, so data embedded in the
/// image shows up as `.byte` lines. An instruction cut short by the end of
/// the image is padded with zero operands.
pub fn listing(image: &[u8]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut addr = 0usize;
    while addr < image.len() {
        let ir = image[addr];
        let size = Opcode::from_byte(ir).map_or(1, |op| usize::from(op.size()));
        let end = (addr + size).min(image.len());
        let bytes = &image[addr..end];
        let operand_a = bytes.get(1).copied().unwrap_or(0);
        let operand_b = bytes.get(2).copied().unwrap_or(0);

        let raw: Vec<String> = bytes.iter().map(|b| format!("{b:02X}")).collect();
        lines.push(format!(
            "{addr:02X}: {:<9} {}",
            raw.join(" "),
            disassemble(ir, operand_a, operand_b)
        ));
        addr += size;
    }
    lines
}
