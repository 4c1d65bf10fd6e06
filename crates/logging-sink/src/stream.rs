//! crates/logging-sink/src/stream.rs
//! Standard stream identifiers used for severity routing.

use std::fmt;
use std::str::FromStr;

/// One of the process's standard output streams.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Stream {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

impl Stream {
    /// Reports whether the real process stream is attached to a terminal.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        use is_terminal::IsTerminal;

        match self {
            Self::Stdout => std::io::stdout().is_terminal(),
            Self::Stderr => std::io::stderr().is_terminal(),
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        })
    }
}

/// Error returned when a stream token is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown stream: {0}")]
pub struct ParseStreamError(pub String);

impl FromStr for Stream {
    type Err = ParseStreamError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "stdout" | "out" | "1" => Ok(Self::Stdout),
            "stderr" | "err" | "2" => Ok(Self::Stderr),
            _ => Err(ParseStreamError(token.to_owned())),
        }
    }
}
