use super::MessageSink;
use crate::severity::Severity;
use crate::style::Style;
use std::io::{self, Write};

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes `<style><label>: <reset><payload>\n` in a single write.
    ///
    /// The style escape sequences are only emitted when colour is enabled.
    pub fn write_line(&mut self, style: Style, label: &str, payload: &str) -> io::Result<()> {
        self.scratch.clear();
        if self.color {
            self.scratch.extend_from_slice(style.prefix().as_bytes());
        }
        self.scratch.extend_from_slice(label.as_bytes());
        self.scratch.extend_from_slice(b": ");
        if self.color {
            self.scratch.extend_from_slice(style.suffix().as_bytes());
        }
        self.scratch.extend_from_slice(payload.as_bytes());
        self.scratch.push(b'\n');

        self.writer.write_all(&self.scratch)
    }

    /// Writes `payload` under the severity's own label and style.
    pub fn write_severity(&mut self, severity: Severity, payload: &str) -> io::Result<()> {
        self.write_line(severity.style(), severity.label(), payload)
    }

    /// Writes `payload\n` with no label and no styling.
    pub fn write_plain(&mut self, payload: &str) -> io::Result<()> {
        self.scratch.clear();
        self.scratch.extend_from_slice(payload.as_bytes());
        self.scratch.push(b'\n');

        self.writer.write_all(&self.scratch)
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
