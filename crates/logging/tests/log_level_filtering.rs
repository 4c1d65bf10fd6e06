//! Integration tests for severity and info group filtering.
//!
//! These tests verify that info lines follow the active group set, that
//! other severities ignore groups, and that a disabled severity produces no
//! output at all.

use logging::{
    Group, GroupFilter, GroupSet, LogConfig, Logger, Severity, SeveritySet, capture, error_log,
    group_log, info_log, todo_log, warn_log,
};
use test_support::SharedBuffer;

fn logger_with(config: LogConfig) -> (Logger, SharedBuffer, SharedBuffer) {
    let out = SharedBuffer::new();
    let err = SharedBuffer::new();
    let logger = Logger::with_writers(config, out.clone(), err.clone());
    (logger, out, err)
}

// ============================================================================
// Group Filter Tests
// ============================================================================

/// Verifies the default active set is {Default, Extra}.
#[test]
fn default_active_groups() {
    let filter = LogConfig::default().filter();
    assert!(filter.is_active(Severity::Info, Group::Default));
    assert!(filter.is_active(Severity::Info, Group::Extra));
    assert!(!filter.is_active(Severity::Info, Group::Inactive));
}

/// Verifies every non-info severity is active for every group.
#[test]
fn non_info_severities_ignore_groups() {
    let filter = GroupFilter::new(SeveritySet::all(), GroupSet::empty());
    for severity in [Severity::Warn, Severity::Error, Severity::Todo, Severity::Debug] {
        for group in Group::ALL {
            assert!(filter.is_active(severity, group), "{severity} {group}");
        }
    }
}

/// Verifies the filter gives the same answer on repeated calls.
#[test]
fn filter_is_deterministic() {
    let filter = LogConfig::default().filter();
    for _ in 0..3 {
        assert!(!filter.is_active(Severity::Info, Group::Inactive));
    }
}

// ============================================================================
// Macro Filtering Tests
// ============================================================================

/// Verifies grouped info lines follow the default active set.
#[test]
fn group_macro_follows_active_set() {
    let events = capture(|| {
        group_log!(Default, "info group message");
        group_log!(Extra, "info group message");
        group_log!(Inactive, "this message should not be displayed!");
    });
    let lines: Vec<_> = events.iter().map(|event| event.plain_line()).collect();
    assert_eq!(
        lines,
        ["INFO: info group message", "INFO[extra]: info group message"]
    );
}

/// Verifies the canonical end-to-end lines.
#[test]
fn end_to_end_lines() {
    let i = 8;
    let events = capture(|| {
        info_log!("hello world: ", 1, ", ", 2);
        info_log!(i);
        warn_log!("warn message");
        error_log!("i = ", i);
        todo_log!("todo message");
    });
    let lines: Vec<_> = events.iter().map(|event| event.plain_line()).collect();
    assert_eq!(
        lines,
        [
            "INFO: hello world: 1, 2",
            "INFO: 8",
            "WARN: warn message",
            "ERROR: i = 8",
            "TODO: todo message",
        ]
    );
}

// ============================================================================
// Logger Output Tests
// ============================================================================

/// Verifies a disabled severity writes zero bytes to either stream.
#[test]
fn disabled_severity_produces_zero_bytes() {
    for disabled in Severity::ALL {
        let mut config = LogConfig::default();
        config.severities.remove(disabled);
        let (logger, out, err) = logger_with(config);

        logger.emit(disabled, Group::Default, "nothing");

        assert!(out.bytes().is_empty(), "{disabled} wrote to stdout");
        assert!(err.bytes().is_empty(), "{disabled} wrote to stderr");
    }
}

/// Verifies error lines print regardless of the group configuration.
#[test]
fn error_ignores_group_configuration() {
    let config = LogConfig {
        active_groups: GroupSet::empty(),
        ..LogConfig::default()
    };
    let (logger, out, err) = logger_with(config);

    logger.info("hidden");
    logger.emit(Severity::Error, Group::Inactive, "i = 8");

    assert!(out.bytes().is_empty());
    assert_eq!(err.contents(), "ERROR: i = 8\n");
}

/// Verifies activating the inactive group prints its lines.
#[test]
fn inactive_group_can_be_activated() {
    let config = LogConfig {
        active_groups: GroupSet::all(),
        ..LogConfig::default()
    };
    let (logger, out, _err) = logger_with(config);

    logger.info_group(Group::Inactive, "now visible");

    assert_eq!(out.contents(), "INFO[inactive]: now visible\n");
}

/// Verifies warnings and errors go to stderr and the rest to stdout.
#[test]
fn default_stream_routing() {
    let (logger, out, err) = logger_with(LogConfig::default());

    logger.info("a");
    logger.warn("b");
    logger.error("c");
    logger.todo("d");
    logger.emit_debug("e", "f");

    assert_eq!(out.contents(), "INFO: a\nTODO: d\nDBG: e = f\n");
    assert_eq!(err.contents(), "WARN: b\nERROR: c\n");
}
