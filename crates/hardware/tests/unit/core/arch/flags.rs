//! # Flags Tests

use ls8_core::core::arch::Flags;
use rstest::rstest;

#[rstest]
#[case(5, 5, Flags::EQUAL)]
#[case(9, 3, Flags::GREATER)]
#[case(3, 9, Flags::LESS)]
#[case(0, 255, Flags::LESS)]
#[case(255, 0, Flags::GREATER)]
fn test_compare_is_unsigned(#[case] a: u8, #[case] b: u8, #[case] expected: Flags) {
    assert_eq!(Flags::compare(a, b), expected);
}

#[test]
fn test_flag_bits() {
    assert_eq!(Flags::EQUAL.bits(), 0b001);
    assert_eq!(Flags::GREATER.bits(), 0b010);
    assert_eq!(Flags::LESS.bits(), 0b100);
    assert_eq!(Flags::default().bits(), 0);
}

#[test]
fn test_is_equal_requires_exact_pattern() {
    assert!(Flags::EQUAL.is_equal());
    assert!(!Flags::default().is_equal());
    assert!(!Flags::GREATER.is_equal());
    assert!(!Flags::from_bits(0b011).is_equal());
    assert!(!Flags::from_bits(0b101).is_equal());
}
