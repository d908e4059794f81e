//! Plain-text benchmark report.

use cachebench_core::CodecName;
use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;

/// Formats a timing line: `<label> = <millis> ms`.
#[must_use]
pub fn format_timing(label: &str, elapsed: Duration) -> String {
    format!("{} = {} ms", label, elapsed.as_millis())
}

/// Writes report lines to an output sink, flushing after each line.
#[derive(Debug)]
pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter writing to `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes a timing line.
    ///
    /// # Errors
    /// Returns IO error if writing fails.
    pub fn timing(&mut self, label: &str, elapsed: Duration) -> io::Result<()> {
        self.line(&format_timing(label, elapsed))
    }

    /// Writes a codec recommendation line.
    ///
    /// # Errors
    /// Returns IO error if writing fails.
    pub fn recommendation(&mut self, codec: CodecName, value: impl Display) -> io::Result<()> {
        self.line(&format!(
            "Use the {} serializer = {}",
            codec.serializer_name(),
            value
        ))
    }

    /// Writes an empty separator line.
    ///
    /// # Errors
    /// Returns IO error if writing fails.
    pub fn blank(&mut self) -> io::Result<()> {
        self.line("")
    }

    /// Consumes the reporter and returns the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}
