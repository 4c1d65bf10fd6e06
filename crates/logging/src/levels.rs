//! crates/logging/src/levels.rs
//! Info groups and the small bitsets used to configure groups and severities.

use std::fmt;
use std::str::FromStr;

use logging_sink::Severity;

use crate::config::ConfigError;

/// Info group: the category an info-level line belongs to.
///
/// Only info lines carry a group. Lines logged through `info_log!` use
/// [`Group::Default`]; `group_log!` names the group explicitly, so an
/// unknown group is a compile error rather than a runtime condition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Group {
    /// Implicit group of ungrouped info lines.
    Default,
    /// Additional detail that is usually worth seeing.
    Extra,
    /// Category that is switched off unless configured otherwise.
    Inactive,
}

impl Group {
    /// Every group in declaration order.
    pub const ALL: [Self; 3] = [Self::Default, Self::Extra, Self::Inactive];

    /// Lowercase name used in configuration tokens and line labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Extra => "extra",
            Self::Inactive => "inactive",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Group {
    type Err = ConfigError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "extra" => Ok(Self::Extra),
            "inactive" => Ok(Self::Inactive),
            _ => Err(ConfigError::UnknownGroup(token.trim().to_owned())),
        }
    }
}

macro_rules! tag_set {
    ($(#[$meta:meta])* $name:ident, $tag:ty, $bit:path, $vec:tt) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(from = $vec, into = $vec))]
        pub struct $name(u8);

        impl $name {
            /// Set with no members.
            #[must_use]
            pub const fn empty() -> Self {
                Self(0)
            }

            /// Builds a set from a slice of members.
            #[must_use]
            pub const fn of(tags: &[$tag]) -> Self {
                let mut bits = 0;
                let mut index = 0;
                while index < tags.len() {
                    bits |= $bit(tags[index]);
                    index += 1;
                }
                Self(bits)
            }

            /// Reports whether `tag` is a member.
            #[must_use]
            pub const fn contains(self, tag: $tag) -> bool {
                self.0 & $bit(tag) != 0
            }

            /// Reports whether the set has no members.
            #[must_use]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Adds `tag` to the set.
            pub fn insert(&mut self, tag: $tag) {
                self.0 |= $bit(tag);
            }

            /// Removes `tag` from the set.
            pub fn remove(&mut self, tag: $tag) {
                self.0 &= !$bit(tag);
            }

            /// Members in declaration order.
            pub fn iter(self) -> impl Iterator<Item = $tag> {
                <$tag>::ALL.into_iter().filter(move |tag| self.contains(*tag))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_set().entries(self.iter()).finish()
            }
        }

        impl FromIterator<$tag> for $name {
            fn from_iter<I: IntoIterator<Item = $tag>>(iter: I) -> Self {
                let mut set = Self::empty();
                for tag in iter {
                    set.insert(tag);
                }
                set
            }
        }

        impl From<Vec<$tag>> for $name {
            fn from(tags: Vec<$tag>) -> Self {
                tags.into_iter().collect()
            }
        }

        impl From<$name> for Vec<$tag> {
            fn from(set: $name) -> Self {
                set.iter().collect()
            }
        }
    };
}

const fn group_bit(group: Group) -> u8 {
    group.bit()
}

const fn severity_bit(severity: Severity) -> u8 {
    1 << severity.index()
}

tag_set!(
    /// Set of info groups whose lines are emitted.
    GroupSet,
    Group,
    group_bit,
    "Vec<Group>"
);

tag_set!(
    /// Set of enabled severities.
    SeveritySet,
    Severity,
    severity_bit,
    "Vec<Severity>"
);

impl SeveritySet {
    /// Every severity.
    #[must_use]
    pub const fn all() -> Self {
        Self::of(&Severity::ALL)
    }
}

impl GroupSet {
    /// Every group.
    #[must_use]
    pub const fn all() -> Self {
        Self::of(&Group::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_names_round_trip() {
        for group in Group::ALL {
            assert_eq!(group.name().parse::<Group>(), Ok(group));
        }
        assert_eq!(" EXTRA ".parse::<Group>(), Ok(Group::Extra));
    }

    #[test]
    fn unknown_group_is_a_config_error() {
        assert_eq!(
            "network".parse::<Group>(),
            Err(ConfigError::UnknownGroup("network".to_owned()))
        );
    }

    #[test]
    fn group_set_membership() {
        let mut set = GroupSet::of(&[Group::Default, Group::Extra]);
        assert!(set.contains(Group::Default));
        assert!(set.contains(Group::Extra));
        assert!(!set.contains(Group::Inactive));

        set.remove(Group::Default);
        set.insert(Group::Inactive);
        assert_eq!(set.iter().collect::<Vec<_>>(), [Group::Extra, Group::Inactive]);
    }

    #[test]
    fn empty_sets_have_no_members() {
        assert!(GroupSet::empty().is_empty());
        assert!(GroupSet::default().is_empty());
        assert_eq!(SeveritySet::empty().iter().count(), 0);
    }

    #[test]
    fn severity_set_all_contains_every_severity() {
        let all = SeveritySet::all();
        for severity in Severity::ALL {
            assert!(all.contains(severity));
        }
    }

    #[test]
    fn sets_collect_from_iterators() {
        let set: SeveritySet = [Severity::Warn, Severity::Error].into_iter().collect();
        assert!(set.contains(Severity::Warn));
        assert!(!set.contains(Severity::Info));
        assert_eq!(format!("{set:?}"), "{Warn, Error}");
    }
}
