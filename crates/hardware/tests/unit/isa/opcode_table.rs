//! # Opcode Table Tests
//!
//! The encoded length of every instruction except `ADDI` is
//! `1 + (opcode >> 6)`, and each opcode byte maps back to exactly one
//! instruction.

use ls8_core::isa::{InstClass, Opcode, Operands};

#[test]
fn test_size_follows_top_two_bits() {
    for op in Opcode::ALL.into_iter().filter(|&op| op != Opcode::Addi) {
        assert_eq!(op.size(), 1 + (op.byte() >> 6), "{}", op.mnemonic());
    }
}

#[test]
fn test_addi_is_three_bytes_despite_its_encoding() {
    assert_eq!(Opcode::Addi.byte() >> 6, 1);
    assert_eq!(Opcode::Addi.size(), 3);
}

#[test]
fn test_every_opcode_round_trips_through_its_byte() {
    for op in Opcode::ALL {
        assert_eq!(Opcode::from_byte(op.byte()), Some(op));
        assert_eq!(Opcode::try_from(op.byte()), Ok(op));
    }
}

#[test]
fn test_exactly_21_bytes_decode() {
    let count = (0..=u8::MAX).filter(|&b| Opcode::from_byte(b).is_some()).count();
    assert_eq!(count, 21);
}

#[test]
fn test_unassigned_bytes_are_rejected() {
    for byte in [0x00, 0x02, 0xA1, 0xFF] {
        assert_eq!(Opcode::from_byte(byte), None);
        assert_eq!(Opcode::try_from(byte), Err(byte));
    }
}

#[test]
fn test_operand_shapes() {
    assert_eq!(Opcode::Hlt.operands(), Operands::None);
    assert_eq!(Opcode::Prn.operands(), Operands::Reg);
    assert_eq!(Opcode::Ldi.operands(), Operands::RegImm);
    assert_eq!(Opcode::Addi.operands(), Operands::RegImm);
    assert_eq!(Opcode::Mul.operands(), Operands::RegReg);
}

#[test]
fn test_classes() {
    assert_eq!(Opcode::Ldi.class(), InstClass::Load);
    assert_eq!(Opcode::Addi.class(), InstClass::Alu);
    assert_eq!(Opcode::Push.class(), InstClass::Stack);
    assert_eq!(Opcode::Ret.class(), InstClass::Branch);
    assert_eq!(Opcode::Prn.class(), InstClass::Io);
    assert_eq!(Opcode::Hlt.class(), InstClass::System);
}
