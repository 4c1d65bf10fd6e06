//! crates/logging-sink/src/style.rs
//! ANSI styling for severity labels and the colour policy that enables it.

use std::fmt;
use std::str::FromStr;

/// Escape sequence that clears every attribute.
pub const RESET: &str = "\x1b[0m";

/// ANSI escape sequence applied to a severity label.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Style {
    sequence: &'static str,
}

impl Style {
    /// Bold red, used for errors.
    pub const BOLD_RED: Self = Self::new("\x1b[1;31m");
    /// Bold yellow, used for warnings.
    pub const BOLD_YELLOW: Self = Self::new("\x1b[1;33m");
    /// Bold green, used for todo reminders.
    pub const BOLD_GREEN: Self = Self::new("\x1b[1;32m");
    /// Bold blue, used for info lines.
    pub const BOLD_BLUE: Self = Self::new("\x1b[1;34m");
    /// Plain magenta, used for debug lines.
    pub const MAGENTA: Self = Self::new("\x1b[35m");

    const fn new(sequence: &'static str) -> Self {
        Self { sequence }
    }

    /// Escape sequence that switches the style on.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        self.sequence
    }

    /// Escape sequence that switches the style off again.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        RESET
    }
}

/// Whether severity labels are coloured.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorMode {
    /// Colour only destinations attached to a terminal.
    #[default]
    Auto,
    /// Always emit escape sequences.
    Always,
    /// Never emit escape sequences.
    Never,
}

impl ColorMode {
    /// Resolves the policy for a destination.
    ///
    /// `is_terminal` reports whether the destination is an interactive
    /// terminal; it is only consulted in [`ColorMode::Auto`].
    ///
    /// ```
    /// use logging_sink::ColorMode;
    ///
    /// assert!(ColorMode::Always.enabled_for(false));
    /// assert!(!ColorMode::Never.enabled_for(true));
    /// assert!(ColorMode::Auto.enabled_for(true));
    /// assert!(!ColorMode::Auto.enabled_for(false));
    /// ```
    #[must_use]
    pub const fn enabled_for(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        })
    }
}

/// Error returned when a colour mode token is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown color mode: {0}")]
pub struct ParseColorModeError(pub String);

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" | "on" | "yes" => Ok(Self::Always),
            "never" | "off" | "no" => Ok(Self::Never),
            _ => Err(ParseColorModeError(token.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_use_expected_sequences() {
        assert_eq!(Style::BOLD_RED.prefix(), "\x1b[1;31m");
        assert_eq!(Style::BOLD_YELLOW.prefix(), "\x1b[1;33m");
        assert_eq!(Style::BOLD_GREEN.prefix(), "\x1b[1;32m");
        assert_eq!(Style::BOLD_BLUE.prefix(), "\x1b[1;34m");
        assert_eq!(Style::MAGENTA.prefix(), "\x1b[35m");
        assert_eq!(Style::MAGENTA.suffix(), RESET);
    }

    #[test]
    fn color_mode_parses_synonyms() {
        assert_eq!("ON".parse::<ColorMode>(), Ok(ColorMode::Always));
        assert_eq!("no".parse::<ColorMode>(), Ok(ColorMode::Never));
        assert_eq!("auto".parse::<ColorMode>(), Ok(ColorMode::Auto));
        assert!("sometimes".parse::<ColorMode>().is_err());
    }

    #[test]
    fn default_mode_is_auto() {
        assert_eq!(ColorMode::default(), ColorMode::Auto);
    }
}
