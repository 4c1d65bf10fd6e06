#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` provides leveled debug printing: the [`info_log!`],
//! [`group_log!`], [`warn_log!`], [`error_log!`], [`todo_log!`] and
//! [`dbg_log!`] macros render any mix of values into one line and print it
//! with a coloured severity label. [`log!`] prints such a line to a chosen
//! stream with no label at all. Info lines belong to a [`Group`], and only
//! lines of the configured active groups are printed.
//!
//! # Design
//!
//! - [`Render`] turns a value into text: scalars and strings verbatim,
//!   collections as `[e1, e2]`, tuples as `<f1, f2>`. The macros fall back to
//!   `Display` and finally to `<type name>` for values without a [`Render`]
//!   impl.
//! - [`GroupFilter`] decides whether a severity and group pair is printed.
//! - [`LogConfig`] collects the enabled severities, active groups, per
//!   severity streams and colour policy, from code or from `LOGH_*`
//!   environment variables.
//! - [`Logger`] applies the filter and hands labelled lines to the
//!   [`logging_sink::SeverityRouter`]. The macros use a process-wide logger
//!   installed by [`init`] or created with defaults on first use.
//! - [`capture`] diverts the lines emitted on the current thread into a
//!   vector for tests.
//!
//! # Invariants
//!
//! - The configuration of an installed logger never changes.
//! - Arguments of a suppressed line are never evaluated.
//! - Rendering never fails; unknown shapes print their type name.
//!
//! # Errors
//!
//! Logging calls never fail. Building a configuration reports
//! [`ConfigError`]; installing a second global logger reports
//! [`InitError`].
//!
//! # Examples
//!
//! ```
//! use logging::{capture, dbg_log, error_log, group_log, info_log};
//!
//! let i = 8;
//! let events = capture(|| {
//!     info_log!("hello world: ", 1, ", ", 2);
//!     group_log!(Inactive, "this message should not be displayed!");
//!     error_log!("i = ", i);
//!     dbg_log!(i);
//! });
//!
//! let lines: Vec<_> = events.iter().map(|event| event.plain_line()).collect();
//! assert_eq!(lines, ["INFO: hello world: 1, 2", "ERROR: i = 8", "DBG: i = 8"]);
//! ```
//!
//! # See also
//!
//! - [`logging_sink`] for line framing, colours and stream routing.

mod config;
mod filter;
mod global;
mod levels;
mod logger;
mod macros;
mod render;
mod thread_local;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{
    COLOR_ENV, ConfigError, GROUPS_ENV, LEVELS_ENV, LogConfig, NO_COLOR_ENV, ROUTE_ENV,
};
pub use filter::{GroupFilter, compiled_in};
pub use global::{
    InitError, dispatch, dispatch_debug, dispatch_plain, enabled, init, init_from_env,
    init_with, logger,
};
pub use levels::{Group, GroupSet, SeveritySet};
pub use logger::Logger;
pub use logging_sink::{ColorMode, Severity, Stream, Style};
pub use render::{Displayed, Render, render_all, render_type_name};
pub use thread_local::{LogEvent, capture};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoghLayer, init_tracing, init_tracing_with_filter};

#[doc(hidden)]
pub mod __private {
    pub use crate::render::probe::{Probe, ViaDisplay, ViaFallback, ViaRender};
}
