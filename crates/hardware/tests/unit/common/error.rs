//! # Error Tests
//!
//! Classification of errors into load-time and run-time failures, and the
//! messages shown to the operator.

use std::io;
use std::path::PathBuf;

use ls8_core::common::{LoadError, SimError};

#[test]
fn test_load_errors_are_classified_as_load() {
    let err: SimError = LoadError::InvalidLiteral {
        line: 3,
        text: "102".into(),
    }
    .into();
    assert!(err.is_load_error());

    let err: SimError = LoadError::Io {
        path: PathBuf::from("missing.ls8"),
        source: io::Error::from(io::ErrorKind::NotFound),
    }
    .into();
    assert!(err.is_load_error());
}

#[test]
fn test_config_errors_are_classified_as_load() {
    let err = SimError::ConfigRead {
        path: PathBuf::from("cfg.json"),
        source: io::Error::from(io::ErrorKind::NotFound),
    };
    assert!(err.is_load_error());
}

#[test]
fn test_execution_faults_are_not_load_errors() {
    let faults = [
        SimError::UnknownOpcode { opcode: 0xFF, pc: 0 },
        SimError::DivisionByZero { register: 1 },
        SimError::RegisterOutOfRange(9),
        SimError::AddressOutOfRange(300),
        SimError::Halted { pc: 5 },
        SimError::StepLimitExceeded { limit: 10 },
        SimError::UnsupportedAluOperation("LDI"),
    ];
    for fault in faults {
        assert!(!fault.is_load_error(), "{fault} classified as load error");
    }
}

#[test]
fn test_invalid_literal_message_names_the_line() {
    let err = LoadError::InvalidLiteral {
        line: 7,
        text: "10a1".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("line 7"), "{msg}");
    assert!(msg.contains("10a1"), "{msg}");
}

#[test]
fn test_unknown_opcode_message_shows_byte_and_pc() {
    let err = SimError::UnknownOpcode {
        opcode: 0b1111_1111,
        pc: 0x0C,
    };
    assert_eq!(err.to_string(), "unknown opcode 0b11111111 at pc 0x0c");
}

#[test]
fn test_load_error_is_transparent_through_sim_error() {
    let inner = LoadError::ImageTooLarge {
        len: 300,
        offset: 0,
        capacity: 256,
    };
    let expected = inner.to_string();
    let err: SimError = inner.into();
    assert_eq!(err.to_string(), expected);
}
