//! Output module
//!
//! Buffered line writer that appends the terminator and keeps counts.

use std::io::{BufWriter, Write};

/// Default buffer size for output (64KB)
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Buffered line writer
pub struct OutputWriter<W: Write> {
    writer: BufWriter<W>,
    lines_written: u64,
    bytes_written: u64,
}

impl<W: Write> OutputWriter<W> {
    /// Create a new output writer with the default buffer size
    pub fn new(inner: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, inner)
    }

    pub fn with_capacity(buffer_size: usize, inner: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(buffer_size, inner),
            lines_written: 0,
            bytes_written: 0,
        }
    }

    /// Write a line followed by `\n`
    pub fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.lines_written += 1;
        self.bytes_written += line.len() as u64 + 1; // +1 for newline
        Ok(())
    }

    /// Write every line in order
    pub fn write_all_lines<I, S>(&mut self, lines: I) -> std::io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.write_line(line.as_ref())?;
        }
        Ok(())
    }

    /// Flush buffered output
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    /// Get number of lines written
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Get bytes written
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}
