//! crates/logging/src/config.rs
//! Logger configuration: enabled severities, active groups, routes and colour.

use logging_sink::{
    ColorMode, ParseColorModeError, ParseSeverityError, ParseStreamError, Severity, Stream,
    default_routes,
};

use crate::filter::GroupFilter;
use crate::levels::{Group, GroupSet, SeveritySet};

/// Environment variable holding the comma-separated severity list.
pub const LEVELS_ENV: &str = "LOGH_LEVELS";
/// Environment variable holding the comma-separated active group list.
pub const GROUPS_ENV: &str = "LOGH_GROUPS";
/// Environment variable selecting `auto`, `always` or `never` colour.
pub const COLOR_ENV: &str = "LOGH_COLOR";
/// Environment variable holding `severity=stream` routing overrides.
pub const ROUTE_ENV: &str = "LOGH_ROUTE";
/// Conventional variable that disables colour when [`COLOR_ENV`] is unset.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Error produced while building a [`LogConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A severity token did not name a severity.
    #[error("unknown severity `{0}`")]
    UnknownSeverity(String),
    /// A group token did not name an info group.
    #[error("unknown info group `{0}`")]
    UnknownGroup(String),
    /// A route named a stream other than stdout or stderr.
    #[error("unknown stream `{0}`")]
    UnknownStream(String),
    /// The colour mode was not `auto`, `always` or `never`.
    #[error("unknown color mode `{0}`")]
    UnknownColorMode(String),
    /// A route token lacked the `SEVERITY=STREAM` shape.
    #[error("malformed route `{0}`, expected SEVERITY=STREAM")]
    MalformedRoute(String),
}

impl From<ParseSeverityError> for ConfigError {
    fn from(error: ParseSeverityError) -> Self {
        Self::UnknownSeverity(error.0)
    }
}

impl From<ParseStreamError> for ConfigError {
    fn from(error: ParseStreamError) -> Self {
        Self::UnknownStream(error.0)
    }
}

impl From<ParseColorModeError> for ConfigError {
    fn from(error: ParseColorModeError) -> Self {
        Self::UnknownColorMode(error.0)
    }
}

/// Complete configuration of a [`Logger`](crate::Logger).
///
/// The configuration is settled before the logger is built and never
/// changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogConfig {
    /// Severities that produce output.
    pub severities: SeveritySet,
    /// Info groups whose lines are emitted.
    pub active_groups: GroupSet,
    /// Destination stream per severity, indexed by [`Severity::index`].
    pub routes: [Stream; 5],
    /// Colour policy for severity labels.
    pub color: ColorMode,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            severities: SeveritySet::all(),
            active_groups: GroupSet::of(&[Group::Default, Group::Extra]),
            routes: default_routes(),
            color: ColorMode::Auto,
        }
    }
}

impl LogConfig {
    /// Filter derived from the enabled severities and active groups.
    #[must_use]
    pub const fn filter(&self) -> GroupFilter {
        GroupFilter::new(self.severities, self.active_groups)
    }

    /// Applies one severity token: `warn` enables, `-warn` disables.
    pub fn apply_severity_token(&mut self, token: &str) -> Result<(), ConfigError> {
        let (enable, name) = split_sign(token);
        let severity: Severity = name.parse()?;
        if enable {
            self.severities.insert(severity);
        } else {
            self.severities.remove(severity);
        }
        Ok(())
    }

    /// Applies one group token: `extra` activates, `-extra` deactivates.
    pub fn apply_group_token(&mut self, token: &str) -> Result<(), ConfigError> {
        let (enable, name) = split_sign(token);
        let group: Group = name.parse()?;
        if enable {
            self.active_groups.insert(group);
        } else {
            self.active_groups.remove(group);
        }
        Ok(())
    }

    /// Applies one route token such as `info=stderr`.
    pub fn apply_route_token(&mut self, token: &str) -> Result<(), ConfigError> {
        let (severity, stream) = token
            .split_once('=')
            .ok_or_else(|| ConfigError::MalformedRoute(token.trim().to_owned()))?;
        let severity: Severity = severity.parse()?;
        self.routes[severity.index()] = stream.parse()?;
        Ok(())
    }

    /// Applies a comma-separated severity list.
    ///
    /// When the list contains at least one positive token it replaces the
    /// current set; a list of only `-name` tokens edits the current set.
    /// An empty list disables every severity.
    pub fn apply_severity_list(&mut self, list: &str) -> Result<(), ConfigError> {
        if replaces_set(list) {
            self.severities = SeveritySet::empty();
        }
        for token in tokens(list) {
            self.apply_severity_token(token)?;
        }
        Ok(())
    }

    /// Applies a comma-separated group list with the same rules as
    /// [`apply_severity_list`](Self::apply_severity_list).
    pub fn apply_group_list(&mut self, list: &str) -> Result<(), ConfigError> {
        if replaces_set(list) {
            self.active_groups = GroupSet::empty();
        }
        for token in tokens(list) {
            self.apply_group_token(token)?;
        }
        Ok(())
    }

    /// Builds a configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from the defaults and the variables reported
    /// by `lookup`.
    ///
    /// ```
    /// use logging::{Group, LogConfig, Severity};
    ///
    /// let config = LogConfig::from_lookup(|key| match key {
    ///     "LOGH_LEVELS" => Some("-todo".to_owned()),
    ///     "LOGH_GROUPS" => Some("default,inactive".to_owned()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert!(!config.severities.contains(Severity::Todo));
    /// assert!(config.severities.contains(Severity::Debug));
    /// assert!(config.active_groups.contains(Group::Inactive));
    /// assert!(!config.active_groups.contains(Group::Extra));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(levels) = lookup(LEVELS_ENV) {
            config.apply_severity_list(&levels)?;
        }
        if let Some(groups) = lookup(GROUPS_ENV) {
            config.apply_group_list(&groups)?;
        }
        if let Some(routes) = lookup(ROUTE_ENV) {
            for token in tokens(&routes) {
                config.apply_route_token(token)?;
            }
        }
        match lookup(COLOR_ENV) {
            Some(mode) => config.color = mode.parse()?,
            None if lookup(NO_COLOR_ENV).is_some_and(|value| !value.is_empty()) => {
                config.color = ColorMode::Never;
            }
            None => {}
        }

        Ok(config)
    }
}

fn split_sign(token: &str) -> (bool, &str) {
    let token = token.trim();
    match token.strip_prefix('-') {
        Some(name) => (false, name),
        None => (true, token.strip_prefix('+').unwrap_or(token)),
    }
}

fn tokens(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|token| !token.is_empty())
}

fn replaces_set(list: &str) -> bool {
    let mut tokens = tokens(list).peekable();
    tokens.peek().is_none() || tokens.any(|token| !token.starts_with('-'))
}
