//! crates/logging/src/logger.rs
//! Filtered, routed emission of rendered lines.

use std::borrow::Cow;
use std::io::Write;

use logging_sink::{Severity, SeverityRouter, Stream};

use crate::config::LogConfig;
use crate::filter::GroupFilter;
use crate::levels::Group;
use crate::thread_local::{self, LogEvent};

/// Emits already-rendered payloads according to a fixed [`LogConfig`].
///
/// A logger never changes its filter or routes after construction. Lines
/// that pass the filter go to the [`capture`](crate::capture) buffer of the
/// calling thread when one is active and to the routed stream otherwise.
///
/// # Examples
///
/// ```
/// use logging::{Group, LogConfig, Logger};
/// use test_support::SharedBuffer;
///
/// let out = SharedBuffer::new();
/// let logger = Logger::with_writers(LogConfig::default(), out.clone(), SharedBuffer::new());
///
/// logger.info("plain");
/// logger.info_group(Group::Extra, "grouped");
/// logger.info_group(Group::Inactive, "hidden");
///
/// assert_eq!(out.contents(), "INFO: plain\nINFO[extra]: grouped\n");
/// ```
#[derive(Debug)]
pub struct Logger {
    config: LogConfig,
    filter: GroupFilter,
    router: SeverityRouter,
}

impl Logger {
    /// Builds a logger writing to the process's stdout and stderr.
    #[must_use]
    pub fn new(config: LogConfig) -> Self {
        let router = SeverityRouter::standard(config.color).with_routes(config.routes);
        Self::with_router(config, router)
    }

    /// Builds a logger writing to the supplied writers instead of the
    /// standard streams. The writers are never treated as terminals.
    #[must_use]
    pub fn with_writers<O, E>(config: LogConfig, stdout: O, stderr: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        let router = SeverityRouter::from_writers(stdout, stderr)
            .with_routes(config.routes)
            .with_color(config.color);
        Self::with_router(config, router)
    }

    fn with_router(config: LogConfig, router: SeverityRouter) -> Self {
        Self {
            filter: config.filter(),
            config,
            router,
        }
    }

    /// Configuration the logger was built from.
    #[must_use]
    pub const fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Filter applied to every line.
    #[must_use]
    pub const fn filter(&self) -> GroupFilter {
        self.filter
    }

    /// Router owning the destination streams.
    #[must_use]
    pub const fn router(&self) -> &SeverityRouter {
        &self.router
    }

    /// Reports whether a line of `severity` in `group` would be emitted.
    #[must_use]
    pub const fn is_active(&self, severity: Severity, group: Group) -> bool {
        self.filter.is_active(severity, group)
    }

    /// Emits `payload` at `severity` in `group` when the filter allows it.
    ///
    /// `group` only matters for [`Severity::Info`].
    pub fn emit(&self, severity: Severity, group: Group, payload: &str) {
        if !self.is_active(severity, group) {
            return;
        }
        let label = label_for(severity, group);
        let captured = thread_local::record(|| LogEvent {
            severity,
            group,
            label: label.clone().into_owned(),
            payload: payload.to_owned(),
        });
        if !captured {
            self.router.emit_labeled(severity, &label, payload);
        }
    }

    /// Info line in [`Group::Default`].
    pub fn info(&self, payload: &str) {
        self.emit(Severity::Info, Group::Default, payload);
    }

    /// Info line in `group`.
    pub fn info_group(&self, group: Group, payload: &str) {
        self.emit(Severity::Info, group, payload);
    }

    /// Warning line.
    pub fn warn(&self, payload: &str) {
        self.emit(Severity::Warn, Group::Default, payload);
    }

    /// Error line.
    pub fn error(&self, payload: &str) {
        self.emit(Severity::Error, Group::Default, payload);
    }

    /// Reminder line.
    pub fn todo(&self, payload: &str) {
        self.emit(Severity::Todo, Group::Default, payload);
    }

    /// Debug line describing an expression and its rendered value.
    ///
    /// Prints `<expression> = <value>`, or just `<value>` when the expression
    /// text is itself a string literal.
    ///
    /// ```
    /// use logging::{LogConfig, Logger};
    /// use test_support::SharedBuffer;
    ///
    /// let out = SharedBuffer::new();
    /// let logger = Logger::with_writers(LogConfig::default(), out.clone(), SharedBuffer::new());
    ///
    /// logger.emit_debug("i", "8");
    /// logger.emit_debug("\"debug message\"", "debug message");
    ///
    /// assert_eq!(out.contents(), "DBG: i = 8\nDBG: debug message\n");
    /// ```
    pub fn emit_debug(&self, expression: &str, value: &str) {
        if !self.is_active(Severity::Debug, Group::Default) {
            return;
        }
        let payload = debug_payload(expression, value);
        self.emit(Severity::Debug, Group::Default, &payload);
    }

    /// Writes `payload` to `stream` as a bare line with no label.
    ///
    /// Plain lines bypass the filter and are never captured.
    ///
    /// ```
    /// use logging::{LogConfig, Logger, Stream};
    /// use test_support::SharedBuffer;
    ///
    /// let out = SharedBuffer::new();
    /// let logger = Logger::with_writers(LogConfig::default(), out.clone(), SharedBuffer::new());
    ///
    /// logger.write_plain(Stream::Stdout, "hello world: 1, 2");
    ///
    /// assert_eq!(out.contents(), "hello world: 1, 2\n");
    /// ```
    pub fn write_plain(&self, stream: Stream, payload: &str) {
        self.router.write_plain(stream, payload);
    }

    /// Flushes both destination streams.
    pub fn flush(&self) {
        self.router.flush();
    }
}

/// Label printed in front of a line.
///
/// Info lines outside [`Group::Default`] name their group, as in
/// `INFO[extra]`.
pub(crate) fn label_for(severity: Severity, group: Group) -> Cow<'static, str> {
    match (severity, group) {
        (Severity::Info, Group::Extra | Group::Inactive) => {
            Cow::Owned(format!("{}[{group}]", severity.label()))
        }
        _ => Cow::Borrowed(severity.label()),
    }
}

/// Reports whether `text` is the source of exactly one string literal,
/// plain (`"..."`) or raw (`r"..."`, `r#"..."#`).
pub(crate) fn is_string_literal(text: &str) -> bool {
    let text = text.trim();
    if let Some(body) = text.strip_prefix('"') {
        return closes_at_end(body);
    }
    let Some(rest) = text.strip_prefix('r') else {
        return false;
    };
    let body = rest.trim_start_matches('#');
    let hashes = rest.len() - body.len();
    let Some(body) = body.strip_prefix('"') else {
        return false;
    };
    let terminator = format!("\"{}", "#".repeat(hashes));
    body.find(&terminator)
        .is_some_and(|end| end + terminator.len() == body.len())
}

/// Reports whether the first unescaped quote in `body` is its last byte.
fn closes_at_end(body: &str) -> bool {
    let mut chars = body.char_indices();
    while let Some((index, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '"' => return index + 1 == body.len(),
            _ => {}
        }
    }
    false
}

fn debug_payload<'a>(expression: &str, value: &'a str) -> Cow<'a, str> {
    if is_string_literal(expression) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("{} = {value}", expression.trim()))
    }
}
