//! Program Image Loader.
//!
//! This module turns a program image into bytes for [`Cpu::load`](crate::core::Cpu::load). It performs:
//! 1. **File reading:** Reads the image text from disk.
//! 2. **Parsing:** One binary literal per line; `#` starts a comment; blank lines are skipped.
//! 3. **Validation:** Rejects malformed literals and images larger than memory.
//!
//! ```text
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::{LoadError, MEMORY_SIZE, SimError};

/// Parses program image text into bytes.
///
/// Each non-blank line, after stripping any `#` comment and surrounding
/// whitespace, must be a binary literal of at most eight significant bits.
/// A leading `0b` is accepted.
///
/// # Errors
///
/// Returns [`LoadError::InvalidLiteral`] naming the first bad line, or
/// [`LoadError::ImageTooLarge`] if more than 256 bytes are produced.
pub fn parse_image(source: &str) -> Result<Vec<u8>, SimError> {
    let mut bytes = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let code = raw.split_once('#').map_or(raw, |(code, _)| code).trim();
        if code.is_empty() {
            continue;
        }
        let digits = code.strip_prefix("0b").unwrap_or(code);
        let value = parse_binary(digits).ok_or_else(|| LoadError::InvalidLiteral {
            line: idx + 1,
            text: code.to_owned(),
        })?;
        bytes.push(value);
    }

    if bytes.len() > MEMORY_SIZE {
        return Err(LoadError::ImageTooLarge {
            len: bytes.len(),
            offset: 0,
            capacity: MEMORY_SIZE,
        }
        .into());
    }
    Ok(bytes)
}

/// Parses a string of `0`/`1` characters into a byte.
fn parse_binary(digits: &str) -> Option<u8> {
    if digits.is_empty() || !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u8::from_str_radix(digits, 2).ok()
}

/// Reads and parses a program image file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file is missing or unreadable, or any
/// error from [`parse_image`].
pub fn load_image_file(path: impl AsRef<Path>) -> Result<Vec<u8>, SimError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bytes = parse_image(&text)?;
    debug!(path = %path.display(), bytes = bytes.len(), "program image parsed");
    Ok(bytes)
}
