//! crates/logging/src/filter.rs
//! Emission predicate combining enabled severities and active info groups.

use logging_sink::Severity;

use crate::levels::{Group, GroupSet, SeveritySet};

/// Decides whether a line of a given severity and group is emitted.
///
/// Severities other than [`Severity::Info`] ignore the group entirely; info
/// lines are emitted only when their group is in the active set. An empty
/// active set therefore silences every info line, including those in
/// [`Group::Default`].
///
/// # Examples
///
/// ```
/// use logging::{Group, GroupFilter, GroupSet, Severity, SeveritySet};
///
/// let filter = GroupFilter::new(
///     SeveritySet::all(),
///     GroupSet::of(&[Group::Default, Group::Extra]),
/// );
///
/// assert!(filter.is_active(Severity::Info, Group::Extra));
/// assert!(!filter.is_active(Severity::Info, Group::Inactive));
/// assert!(filter.is_active(Severity::Error, Group::Inactive));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GroupFilter {
    severities: SeveritySet,
    groups: GroupSet,
}

impl GroupFilter {
    /// Creates a filter from the enabled severities and active info groups.
    #[must_use]
    pub const fn new(severities: SeveritySet, groups: GroupSet) -> Self {
        Self { severities, groups }
    }

    /// Enabled severities.
    #[must_use]
    pub const fn severities(&self) -> SeveritySet {
        self.severities
    }

    /// Active info groups.
    #[must_use]
    pub const fn groups(&self) -> GroupSet {
        self.groups
    }

    /// Reports whether a line of `severity` in `group` is emitted.
    #[must_use]
    pub const fn is_active(&self, severity: Severity, group: Group) -> bool {
        if !self.severities.contains(severity) {
            return false;
        }
        match severity {
            Severity::Info => self.groups.contains(group),
            Severity::Warn | Severity::Error | Severity::Todo | Severity::Debug => true,
        }
    }
}

/// Reports whether `severity` was compiled in through its `level-*` feature.
///
/// The logging macros evaluate this in a `const` item, so a severity whose
/// feature is off leaves nothing behind at the call site: arguments are not
/// evaluated and no filter lookup happens.
#[must_use]
pub const fn compiled_in(severity: Severity) -> bool {
    match severity {
        Severity::Info => cfg!(feature = "level-info"),
        Severity::Warn => cfg!(feature = "level-warn"),
        Severity::Error => cfg!(feature = "level-error"),
        Severity::Todo => cfg!(feature = "level-todo"),
        Severity::Debug => cfg!(feature = "level-debug"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(groups: &[Group]) -> GroupFilter {
        GroupFilter::new(SeveritySet::all(), GroupSet::of(groups))
    }

    #[test]
    fn info_follows_active_groups() {
        let filter = filter(&[Group::Default, Group::Extra]);
        assert!(filter.is_active(Severity::Info, Group::Default));
        assert!(filter.is_active(Severity::Info, Group::Extra));
        assert!(!filter.is_active(Severity::Info, Group::Inactive));
    }

    #[test]
    fn non_info_severities_ignore_groups() {
        let filter = filter(&[]);
        for severity in [Severity::Warn, Severity::Error, Severity::Todo, Severity::Debug] {
            for group in Group::ALL {
                assert!(filter.is_active(severity, group));
            }
        }
    }

    #[test]
    fn empty_group_set_silences_default_info() {
        let filter = filter(&[]);
        assert!(!filter.is_active(Severity::Info, Group::Default));
    }

    #[test]
    fn disabled_severity_is_never_active() {
        let filter = GroupFilter::new(SeveritySet::of(&[Severity::Info]), GroupSet::all());
        assert!(filter.is_active(Severity::Info, Group::Inactive));
        assert!(!filter.is_active(Severity::Error, Group::Default));
        assert!(!filter.is_active(Severity::Debug, Group::Default));
    }

    #[cfg(all(
        feature = "level-info",
        feature = "level-warn",
        feature = "level-error",
        feature = "level-todo",
        feature = "level-debug"
    ))]
    #[test]
    fn default_features_compile_every_severity_in() {
        for severity in Severity::ALL {
            assert!(compiled_in(severity), "{severity} compiled out");
        }
    }

    #[cfg(not(feature = "level-debug"))]
    #[test]
    fn disabled_level_feature_compiles_debug_out() {
        assert!(!compiled_in(Severity::Debug));
    }
}
