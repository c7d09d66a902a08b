//! # Unit Components
//!
//! This module serves as the central hub for tests of the emulator's
//! components, from the register file up to complete program runs.

/// Unit tests for shared constants and error types.
pub mod common;
