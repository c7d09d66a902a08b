//! # Disassembler Tests

use ls8_core::isa::disasm::{disassemble, listing};
use ls8_core::isa::opcodes::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(HLT, 0, 0, "HLT")]
#[case(RET, 7, 7, "RET")]
#[case(PRN, 0, 9, "PRN R0")]
#[case(PUSH, 3, 0, "PUSH R3")]
#[case(NOT, 2, 0, "NOT R2")]
#[case(LDI, 0, 8, "LDI R0, 8")]
#[case(ADDI, 1, 255, "ADDI R1, 255")]
#[case(MUL, 0, 1, "MUL R0, R1")]
#[case(CMP, 4, 5, "CMP R4, R5")]
#[case(0xFF, 0, 0, ".byte 0b11111111")]
fn test_disassemble(#[case] ir: u8, #[case] a: u8, #[case] b: u8, #[case] expected: &str) {
    assert_eq!(disassemble(ir, a, b), expected);
}

#[test]
fn test_listing_walks_by_instruction_size() {
    let image = [LDI, 0, 8, PRN, 0, HLT, 0xFF];
    assert_eq!(
        listing(&image),
        vec![
            "00: 82 00 08  LDI R0, 8",
            "03: 47 00     PRN R0",
            "05: 01        HLT",
            "06: FF        .byte 0b11111111",
        ]
    );
}

#[test]
fn test_listing_pads_truncated_instruction() {
    let lines = listing(&[LDI, 2]);
    assert_eq!(lines, vec!["00: 82 02     LDI R2, 0"]);
}

#[test]
fn test_listing_of_empty_image() {
    assert!(listing(&[]).is_empty());
}
