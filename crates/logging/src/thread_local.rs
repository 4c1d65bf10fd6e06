//! crates/logging/src/thread_local.rs
//! Thread-local capture of emitted lines.

use std::cell::RefCell;

use logging_sink::Severity;

use crate::levels::Group;

thread_local! {
    static CAPTURED: RefCell<Option<Vec<LogEvent>>> = const { RefCell::new(None) };
}

/// Line that passed the filter while a [`capture`] was active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEvent {
    /// Severity the line was logged at.
    pub severity: Severity,
    /// Info group of the line; [`Group::Default`] for other severities.
    pub group: Group,
    /// Label the line would have been printed with.
    pub label: String,
    /// Rendered payload.
    pub payload: String,
}

impl LogEvent {
    /// The line as it would appear on an uncoloured stream, without the
    /// trailing newline.
    #[must_use]
    pub fn plain_line(&self) -> String {
        format!("{}: {}", self.label, self.payload)
    }
}

/// Runs `f` and returns every line emitted on this thread meanwhile.
///
/// Captured lines are filtered exactly like real output but are not
/// written to any stream. Captures nest: an inner capture sees only its own
/// lines and the outer capture resumes afterwards.
///
/// ```
/// use logging::{capture, info_log};
///
/// let events = capture(|| info_log!("answer: ", 42));
/// assert_eq!(events[0].plain_line(), "INFO: answer: 42");
/// ```
pub fn capture<F>(f: F) -> Vec<LogEvent>
where
    F: FnOnce(),
{
    struct Restore(Option<Vec<LogEvent>>);

    impl Drop for Restore {
        fn drop(&mut self) {
            let previous = self.0.take();
            CAPTURED.with(|captured| *captured.borrow_mut() = previous);
        }
    }

    let previous = CAPTURED.with(|captured| captured.borrow_mut().replace(Vec::new()));
    let restore = Restore(previous);
    f();
    let events = CAPTURED.with(|captured| captured.borrow_mut().take().unwrap_or_default());
    drop(restore);
    events
}

/// Stores the event built by `event` when a capture is active.
///
/// Returns `false`, without calling `event`, when nothing is capturing.
pub(crate) fn record<F>(event: F) -> bool
where
    F: FnOnce() -> LogEvent,
{
    CAPTURED.with(|captured| match captured.borrow_mut().as_mut() {
        Some(events) => {
            events.push(event());
            true
        }
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(payload: &str) -> LogEvent {
        LogEvent {
            severity: Severity::Todo,
            group: Group::Default,
            label: "TODO".to_owned(),
            payload: payload.to_owned(),
        }
    }

    #[test]
    fn record_without_capture_is_a_no_op() {
        assert!(!record(|| panic!("must not build the event")));
    }

    #[test]
    fn capture_collects_recorded_events() {
        let events = capture(|| {
            assert!(record(|| event("one")));
            assert!(record(|| event("two")));
        });
        let lines: Vec<_> = events.iter().map(LogEvent::plain_line).collect();
        assert_eq!(lines, ["TODO: one", "TODO: two"]);
        assert!(!record(|| event("after")));
    }

    #[test]
    fn nested_captures_are_isolated() {
        let mut inner = Vec::new();
        let outer = capture(|| {
            record(|| event("outer-before"));
            inner = capture(|| {
                record(|| event("inner"));
            });
            record(|| event("outer-after"));
        });
        assert_eq!(inner.len(), 1);
        assert_eq!(inner[0].payload, "inner");
        let payloads: Vec<_> = outer.iter().map(|e| e.payload.as_str()).collect();
        assert_eq!(payloads, ["outer-before", "outer-after"]);
    }

    #[test]
    fn capture_is_restored_after_panic() {
        let result = std::panic::catch_unwind(|| {
            capture(|| panic!("boom"));
        });
        assert!(result.is_err());
        assert!(!record(|| event("after panic")));
    }
}
