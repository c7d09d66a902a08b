//! ALU Arithmetic Operation Tests
//!
//! Edge-case vectors for ADD, MUL, and MOD on 8-bit operands, plus property
//! checks that every result is the mathematical result reduced modulo 256.

use ls8_core::config::LogicMode;
use ls8_core::core::units::alu::{Alu, AluOp, AluOutput, arithmetic};
use proptest::prelude::*;
use rstest::rstest;

fn alu(op: AluOp, a: u8, b: u8) -> Option<AluOutput> {
    Alu::execute(op, a, b, LogicMode::Logical)
}

#[rstest]
#[case(0, 0, 0)]
#[case(8, 9, 17)]
#[case(255, 1, 0)]
#[case(250, 10, 4)]
#[case(255, 255, 254)]
fn add_wraps(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(alu(AluOp::Add, a, b), Some(AluOutput::Value(expected)));
}

#[rstest]
#[case(8, 9, 72)]
#[case(0, 200, 0)]
#[case(16, 16, 0)]
#[case(20, 20, 144)]
#[case(255, 255, 1)]
fn mul_wraps(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(alu(AluOp::Mul, a, b), Some(AluOutput::Value(expected)));
}

#[rstest]
#[case(17, 5, 2)]
#[case(5, 17, 5)]
#[case(255, 16, 15)]
#[case(0, 3, 0)]
fn mod_remainder(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(alu(AluOp::Mod, a, b), Some(AluOutput::Value(expected)));
}

#[test]
fn mod_by_zero_is_undefined() {
    assert_eq!(arithmetic::modulo(42, 0), None);
    assert_eq!(alu(AluOp::Mod, 42, 0), None);
}

proptest! {
    #[test]
    fn add_matches_modular_sum(a: u8, b: u8) {
        let expected = ((u16::from(a) + u16::from(b)) % 256) as u8;
        prop_assert_eq!(arithmetic::add(a, b), expected);
    }

    #[test]
    fn mul_matches_modular_product(a: u8, b: u8) {
        let expected = ((u16::from(a) * u16::from(b)) % 256) as u8;
        prop_assert_eq!(arithmetic::mul(a, b), expected);
    }

    #[test]
    fn mod_below_divisor(a: u8, b in 1u8..=255) {
        let r = arithmetic::modulo(a, b).unwrap();
        prop_assert!(r < b);
        prop_assert_eq!(r, a % b);
    }
}
