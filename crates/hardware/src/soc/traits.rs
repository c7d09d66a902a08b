//! Output device trait.
//!
//! The LS-8 has exactly one output path: `PRN` writes a decimal number as a
//! line of text. Anything implementing [`Console`] can receive those lines.

use std::fmt;
use std::io;

/// A line-oriented output device.
pub trait Console: fmt::Debug {
    /// Emits one line of output. The line carries no trailing newline.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the underlying sink.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}
