//! crates/logging/src/global.rs
//! Process-wide logger used by the logging macros.

use std::sync::OnceLock;

use logging_sink::{Severity, Stream};

use crate::config::{ConfigError, LogConfig};
use crate::levels::Group;
use crate::logger::Logger;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Error returned when installing the process-wide logger fails.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// A logger was already installed, explicitly or by an earlier log call.
    #[error("the global logger is already initialised")]
    AlreadyInitialized,
    /// The environment held an invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Another `tracing` subscriber was already installed.
    #[cfg(feature = "tracing")]
    #[error("failed to install tracing subscriber: {0}")]
    Tracing(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs a logger built from `config` as the process-wide logger.
///
/// Must run before the first log call; otherwise the default configuration
/// has already been installed and [`InitError::AlreadyInitialized`] is
/// returned.
pub fn init(config: LogConfig) -> Result<(), InitError> {
    init_with(Logger::new(config))
}

/// Installs `logger` as the process-wide logger.
pub fn init_with(logger: Logger) -> Result<(), InitError> {
    LOGGER
        .set(logger)
        .map_err(|_| InitError::AlreadyInitialized)
}

/// Installs a logger configured from the `LOGH_*` environment variables.
pub fn init_from_env() -> Result<(), InitError> {
    init(LogConfig::from_env()?)
}

/// The process-wide logger, installing [`LogConfig::default`] on first use.
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(LogConfig::default()))
}

/// Reports whether the process-wide logger emits `severity` in `group`.
#[must_use]
pub fn enabled(severity: Severity, group: Group) -> bool {
    logger().is_active(severity, group)
}

/// Emits a rendered payload through the process-wide logger.
pub fn dispatch(severity: Severity, group: Group, payload: &str) {
    logger().emit(severity, group, payload);
}

/// Emits a debug line for `expression` through the process-wide logger.
pub fn dispatch_debug(expression: &str, value: &str) {
    logger().emit_debug(expression, value);
}

/// Writes an unlabelled line to `stream` through the process-wide logger.
pub fn dispatch_plain(stream: Stream, payload: &str) {
    logger().write_plain(stream, payload);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_initialisation_is_rejected() {
        let _ = logger();
        let error = init(LogConfig::default()).unwrap_err();
        assert!(matches!(error, InitError::AlreadyInitialized));
        assert_eq!(error.to_string(), "the global logger is already initialised");
    }

    #[test]
    fn default_logger_uses_default_groups() {
        assert!(enabled(Severity::Info, Group::Default));
        assert!(enabled(Severity::Info, Group::Extra));
        assert!(!enabled(Severity::Info, Group::Inactive));
        assert!(enabled(Severity::Todo, Group::Inactive));
    }

    #[test]
    fn dispatch_feeds_capture() {
        let events = crate::capture(|| {
            dispatch(Severity::Warn, Group::Default, "careful");
            dispatch_debug("n", "3");
        });
        let lines: Vec<_> = events.iter().map(|event| event.plain_line()).collect();
        assert_eq!(lines, ["WARN: careful", "DBG: n = 3"]);
    }

    #[test]
    fn config_errors_convert() {
        let error = InitError::from(ConfigError::UnknownGroup("bogus".to_owned()));
        assert_eq!(error.to_string(), "unknown info group `bogus`");
    }
}
