//! Console devices.
//!
//! Two implementations of [`Console`]: one writing to the host's standard
//! output and one collecting lines in memory for embedding and tests.

use std::io::{self, Write};

use crate::soc::traits::Console;

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}

/// Collects lines in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferConsole {
    lines: Vec<String>,
}

impl BufferConsole {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Lines written so far, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Removes and returns every line written so far.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Console for BufferConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_owned());
        Ok(())
    }
}
