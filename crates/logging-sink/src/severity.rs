//! crates/logging-sink/src/severity.rs
//! Severity tags and their fixed presentation.

use std::fmt;
use std::str::FromStr;

use crate::stream::Stream;
use crate::style::Style;

/// Severity of a diagnostic line.
///
/// Each severity owns a fixed label, a terminal style and a default
/// destination stream. The mapping is immutable; routing overrides are
/// resolved once when a [`SeverityRouter`](crate::SeverityRouter) is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Informational output, subject to info group filtering.
    Info,
    /// Recoverable problems worth a second look.
    Warn,
    /// Failures.
    Error,
    /// Reminders about unfinished work.
    Todo,
    /// Debug output, usually produced with an expression prefix.
    Debug,
}

impl Severity {
    /// Every severity in declaration order.
    pub const ALL: [Self; 5] = [Self::Info, Self::Warn, Self::Error, Self::Todo, Self::Debug];

    /// Position of the severity inside [`Severity::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Label printed in front of every line of this severity.
    ///
    /// ```
    /// use logging_sink::Severity;
    ///
    /// assert_eq!(Severity::Debug.label(), "DBG");
    /// assert_eq!(Severity::Error.label(), "ERROR");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Todo => "TODO",
            Self::Debug => "DBG",
        }
    }

    /// Terminal style used for the label.
    #[must_use]
    pub const fn style(self) -> Style {
        match self {
            Self::Info => Style::BOLD_BLUE,
            Self::Warn => Style::BOLD_YELLOW,
            Self::Error => Style::BOLD_RED,
            Self::Todo => Style::BOLD_GREEN,
            Self::Debug => Style::MAGENTA,
        }
    }

    /// Stream a severity is written to unless a route overrides it.
    #[must_use]
    pub const fn default_stream(self) -> Stream {
        match self {
            Self::Warn | Self::Error => Stream::Stderr,
            Self::Info | Self::Todo | Self::Debug => Stream::Stdout,
        }
    }

    /// Lowercase configuration token for the severity.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Todo => "todo",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a severity token is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: {0}")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            "todo" => Ok(Self::Todo),
            "debug" | "dbg" => Ok(Self::Debug),
            _ => Err(ParseSeverityError(token.to_owned())),
        }
    }
}
