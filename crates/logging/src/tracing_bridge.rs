//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the process-wide logger.
//!
//! [`LoghLayer`] is a tracing-subscriber layer that turns tracing events into
//! lines of the matching severity, so libraries instrumented with `tracing`
//! print through the same filter, routes and colours as the logging macros.
//!
//! # Mapping
//!
//! | tracing level | severity |
//! |---|---|
//! | `ERROR` | [`Severity::Error`] |
//! | `WARN` | [`Severity::Warn`] |
//! | `INFO` | [`Severity::Info`], group taken from the target |
//! | `DEBUG`, `TRACE` | [`Severity::Debug`] |
//!
//! An info event whose target ends in `::extra` or `::inactive` (or is exactly
//! `extra` or `inactive`) belongs to that group; every other info event is in
//! [`Group::Default`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{LogConfig, init_tracing};
//!
//! init_tracing(LogConfig::default())?;
//!
//! tracing::info!(target: "app::extra", "cache warmed");
//! tracing::warn!("disk almost full");
//! ```

use std::fmt::{self, Write as _};

use logging_sink::Severity;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LogConfig;
use crate::global::{self, InitError};
use crate::levels::Group;

/// A tracing layer that forwards events to the process-wide logger.
#[derive(Copy, Clone, Debug, Default)]
pub struct LoghLayer {
    _private: (),
}

impl LoghLayer {
    /// Creates the layer.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    const fn level_to_severity(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warn,
            Level::INFO => Severity::Info,
            Level::DEBUG | Level::TRACE => Severity::Debug,
        }
    }

    fn target_to_group(target: &str) -> Group {
        let tail = target.rsplit("::").next().unwrap_or(target);
        match tail {
            "extra" => Group::Extra,
            "inactive" => Group::Inactive,
            _ => Group::Default,
        }
    }
}

impl<S> Layer<S> for LoghLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Self::level_to_severity(metadata.level());
        let group = match severity {
            Severity::Info => Self::target_to_group(metadata.target()),
            _ => Group::Default,
        };
        if !global::enabled(severity, group) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        global::dispatch(severity, group, &visitor.finish());
    }
}

/// Collects the `message` field followed by any other fields as `name=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, field: &Field, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={value}", field.name());
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            self.push_field(field, format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field, format_args!("{value}"));
        }
    }
}

/// Installs a logger built from `config` and a tracing subscriber that
/// forwards events to it.
///
/// # Errors
///
/// Fails when a logger or a global tracing subscriber is already installed.
pub fn init_tracing(config: LogConfig) -> Result<(), InitError> {
    global::init(config)?;
    tracing_subscriber::registry()
        .with(LoghLayer::new())
        .try_init()?;
    Ok(())
}

/// Like [`init_tracing`], with an extra layer such as an `EnvFilter` placed
/// in front of the bridge.
///
/// # Errors
///
/// Fails when a logger or a global tracing subscriber is already installed.
pub fn init_tracing_with_filter<F>(config: LogConfig, filter: F) -> Result<(), InitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    global::init(config)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(LoghLayer::new())
        .try_init()?;
    Ok(())
}
