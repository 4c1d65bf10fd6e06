//! Severity router that owns one guarded sink per standard stream.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use super::MessageSink;
use crate::severity::Severity;
use crate::stream::Stream;
use crate::style::ColorMode;

/// Type-erased writer stored behind each destination.
pub type BoxedWriter = Box<dyn Write + Send>;

struct Destination {
    sink: Mutex<MessageSink<BoxedWriter>>,
    terminal: bool,
}

impl Destination {
    fn new(writer: BoxedWriter, terminal: bool) -> Self {
        Self {
            sink: Mutex::new(MessageSink::new(writer)),
            terminal,
        }
    }

    fn lock(&self) -> MutexGuard<'_, MessageSink<BoxedWriter>> {
        self.sink
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

/// Routes rendered lines to the stream configured for their severity.
///
/// Each destination is guarded by its own mutex, so lines written from
/// several threads never interleave. Writes are best-effort: [`emit`]
/// and [`emit_labeled`] drop I/O errors after a single attempt, while
/// [`try_emit_labeled`] reports them.
///
/// [`emit`]: Self::emit
/// [`emit_labeled`]: Self::emit_labeled
/// [`try_emit_labeled`]: Self::try_emit_labeled
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use std::sync::{Arc, Mutex};
/// use logging_sink::{Severity, SeverityRouter};
///
/// #[derive(Clone, Default)]
/// struct Shared(Arc<Mutex<Vec<u8>>>);
///
/// impl Write for Shared {
///     fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
///         self.0.lock().unwrap().write(buf)
///     }
///     fn flush(&mut self) -> std::io::Result<()> {
///         Ok(())
///     }
/// }
///
/// let out = Shared::default();
/// let err = Shared::default();
/// let router = SeverityRouter::from_writers(out.clone(), err.clone());
///
/// router.emit(Severity::Info, "hello");
/// router.emit(Severity::Error, "boom");
///
/// assert_eq!(out.0.lock().unwrap().as_slice(), b"INFO: hello\n");
/// assert_eq!(err.0.lock().unwrap().as_slice(), b"ERROR: boom\n");
/// ```
pub struct SeverityRouter {
    stdout: Destination,
    stderr: Destination,
    routes: [Stream; 5],
}

impl SeverityRouter {
    /// Builds a router over the real process streams.
    ///
    /// `color` is resolved once per stream; [`ColorMode::Auto`] colours a
    /// stream only when it is attached to a terminal.
    #[must_use]
    pub fn standard(color: ColorMode) -> Self {
        let router = Self {
            stdout: Destination::new(Box::new(io::stdout()), Stream::Stdout.is_terminal()),
            stderr: Destination::new(Box::new(io::stderr()), Stream::Stderr.is_terminal()),
            routes: default_routes(),
        };
        router.with_color(color)
    }

    /// Builds a router over caller-supplied writers.
    ///
    /// Injected writers are never treated as terminals and start uncoloured.
    #[must_use]
    pub fn from_writers<O, E>(stdout: O, stderr: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            stdout: Destination::new(Box::new(stdout), false),
            stderr: Destination::new(Box::new(stderr), false),
            routes: default_routes(),
        }
    }

    /// Replaces the severity to stream mapping.
    ///
    /// `routes` is indexed by [`Severity::index`].
    #[must_use]
    pub fn with_routes(mut self, routes: [Stream; 5]) -> Self {
        self.routes = routes;
        self
    }

    /// Applies a colour policy to both destinations.
    #[must_use]
    pub fn with_color(self, mode: ColorMode) -> Self {
        for destination in [&self.stdout, &self.stderr] {
            destination
                .lock()
                .set_color(mode.enabled_for(destination.terminal));
        }
        self
    }

    /// Stream that receives lines of `severity`.
    #[must_use]
    pub const fn stream_for(&self, severity: Severity) -> Stream {
        self.routes[severity.index()]
    }

    /// Reports whether lines sent to `stream` carry escape sequences.
    #[must_use]
    pub fn is_colored(&self, stream: Stream) -> bool {
        self.destination(stream).lock().color()
    }

    const fn destination(&self, stream: Stream) -> &Destination {
        match stream {
            Stream::Stdout => &self.stdout,
            Stream::Stderr => &self.stderr,
        }
    }

    /// Writes `line` under the severity's own label.
    pub fn emit(&self, severity: Severity, line: &str) {
        self.emit_labeled(severity, severity.label(), line);
    }

    /// Writes `line` under `label`, styled and routed by `severity`.
    pub fn emit_labeled(&self, severity: Severity, label: &str, line: &str) {
        let _ = self.try_emit_labeled(severity, label, line);
    }

    /// Fallible form of [`emit_labeled`](Self::emit_labeled).
    pub fn try_emit_labeled(&self, severity: Severity, label: &str, line: &str) -> io::Result<()> {
        self.destination(self.stream_for(severity))
            .lock()
            .write_line(severity.style(), label, line)
    }

    /// Writes `line` to `stream` without a label, ignoring errors.
    pub fn write_plain(&self, stream: Stream, line: &str) {
        let _ = self.try_write_plain(stream, line);
    }

    /// Fallible form of [`write_plain`](Self::write_plain).
    pub fn try_write_plain(&self, stream: Stream, line: &str) -> io::Result<()> {
        self.destination(stream).lock().write_plain(line)
    }

    /// Flushes both destinations, ignoring errors.
    pub fn flush(&self) {
        for destination in [&self.stdout, &self.stderr] {
            let _ = destination.lock().flush();
        }
    }
}

impl fmt::Debug for SeverityRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeverityRouter")
            .field("routes", &self.routes)
            .field("stdout_terminal", &self.stdout.terminal)
            .field("stderr_terminal", &self.stderr.terminal)
            .finish_non_exhaustive()
    }
}

/// Default mapping from [`Severity::default_stream`], indexed by [`Severity::index`].
#[must_use]
pub const fn default_routes() -> [Stream; 5] {
    [
        Severity::Info.default_stream(),
        Severity::Warn.default_stream(),
        Severity::Error.default_stream(),
        Severity::Todo.default_stream(),
        Severity::Debug.default_stream(),
    ]
}
