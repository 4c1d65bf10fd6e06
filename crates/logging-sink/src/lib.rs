#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` is the bottom layer of the logh debug printer. It knows the
//! fixed set of [`Severity`] tags, how each one is labelled and coloured, and
//! which standard stream it is written to. Higher layers hand it an already
//! rendered payload; this crate only frames and writes the line.
//!
//! # Design
//!
//! [`MessageSink`] wraps any [`std::io::Write`] implementor together with a
//! reusable scratch buffer. A line is assembled as
//! `<style><label>: <reset><payload>\n` in the scratch buffer and written
//! with one `write_all`. [`SeverityRouter`] owns one sink per standard
//! stream, each behind its own mutex, and picks the destination from a
//! severity to [`Stream`] table fixed at construction.
//!
//! # Invariants
//!
//! - Every emitted line ends with exactly one newline.
//! - A severity's destination never changes after the router is built.
//! - Concurrent callers never interleave partial lines on one stream.
//! - [`ColorMode::Auto`] never colours an injected writer.
//!
//! # Errors
//!
//! [`MessageSink`] surfaces [`std::io::Error`] values from the writer.
//! [`SeverityRouter::emit`] is best-effort and drops them.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{MessageSink, Severity};
//!
//! let mut sink = MessageSink::new(Vec::new());
//! sink.write_severity(Severity::Todo, "wire up the cache").unwrap();
//! assert_eq!(sink.into_inner(), b"TODO: wire up the cache\n".to_vec());
//! ```
//!
//! # See also
//!
//! - `logging` crate for groups, filtering, value rendering and the
//!   `info_log!`/`dbg_log!` macros.

mod severity;
mod sink;
mod stream;
mod style;

pub use severity::{ParseSeverityError, Severity};
pub use sink::{BoxedWriter, MessageSink, SeverityRouter, default_routes};
pub use stream::{ParseStreamError, Stream};
pub use style::{ColorMode, ParseColorModeError, RESET, Style};
