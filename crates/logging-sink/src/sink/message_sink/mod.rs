use std::fmt;

mod constructors;
mod writing;

/// Line writer that renders labelled diagnostics into an [`std::io::Write`]
/// target.
///
/// The sink owns the writer together with a reusable scratch buffer. Each
/// line is assembled in the scratch buffer first and then handed to the
/// writer with a single `write_all`, so a line is never split across
/// several writes. The same scratch allocation is reused for every line.
///
/// # Examples
///
/// ```
/// use logging_sink::{MessageSink, Severity};
///
/// let mut sink = MessageSink::new(Vec::new());
/// sink.write_severity(Severity::Warn, "disk almost full")?;
/// sink.write_severity(Severity::Error, "disk full")?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "WARN: disk almost full\nERROR: disk full\n");
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Coloured output wraps the label and the colon in the severity style:
///
/// ```
/// use logging_sink::{MessageSink, Severity};
///
/// let mut sink = MessageSink::with_color(Vec::new(), true);
/// sink.write_severity(Severity::Info, "ready")?;
/// assert_eq!(sink.into_inner(), b"\x1b[1;34mINFO: \x1b[0mready\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct MessageSink<W> {
    writer: W,
    scratch: Vec<u8>,
    color: bool,
}

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .field("color", &self.color)
            .finish()
    }
}
