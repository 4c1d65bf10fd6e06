//! Integration tests for rendering edge cases.
//!
//! These tests verify correct handling of empty payloads, special
//! characters, unicode content, deep nesting, user types and values that
//! have no text form at all.

use std::fmt;

use logging::{Render, capture, info_log, render, render_all, warn_log};

// ============================================================================
// Empty Payload Tests
// ============================================================================

/// Verifies an empty string message still produces a labelled line.
#[test]
fn empty_message_info_log() {
    let events = capture(|| info_log!(""));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].payload, "");
    assert_eq!(events[0].plain_line(), "INFO: ");
}

/// Verifies rendering an empty argument list yields an empty string.
#[test]
fn render_all_of_nothing_is_empty() {
    assert_eq!(render_all(&[]), "");
    assert_eq!(render!(), "");
}

// ============================================================================
// Special Character Tests
// ============================================================================

/// Verifies strings with separators and brackets are printed verbatim.
#[test]
fn strings_are_never_treated_as_collections() {
    assert_eq!(render!("[a, b]"), "[a, b]");
    assert_eq!(render!(String::from("<x>")), "<x>");
}

/// Verifies unicode payloads survive unchanged.
#[test]
fn unicode_payload() {
    let events = capture(|| warn_log!("héllo ", '世', " ", "🦀"));
    assert_eq!(events[0].plain_line(), "WARN: héllo 世 🦀");
}

// ============================================================================
// Nesting Tests
// ============================================================================

/// Verifies the canonical nesting example.
#[cfg(feature = "containers")]
#[test]
fn vector_of_tuples() {
    let v: Vec<(i32, i32)> = vec![(1, 2), (3, 4)];
    assert_eq!(v.render(), "[<1, 2>, <3, 4>]");
}

/// Verifies deeply mixed nesting composes recursively.
#[cfg(feature = "containers")]
#[test]
fn deep_nesting() {
    let value: Vec<(u8, Vec<(char, [bool; 2])>)> =
        vec![(1, vec![('a', [true, false])]), (2, vec![])];
    assert_eq!(value.render(), "[<1, [<a, [true, false]>]>, <2, []>]");
}

/// Verifies maps render as bracketed key/value pairs in order.
#[cfg(feature = "containers")]
#[test]
fn ordered_map_and_set() {
    use std::collections::{BTreeMap, BTreeSet};

    let map = BTreeMap::from([("b", 2u8), ("a", 1u8)]);
    assert_eq!(render!(map), "[<a, 1>, <b, 2>]");
    let set = BTreeSet::from([3u16, 1, 2]);
    assert_eq!(render!(set), "[1, 2, 3]");
}

// ============================================================================
// User Type Tests
// ============================================================================

struct Point {
    x: i32,
    y: i32,
}

impl Render for Point {
    fn render_to(&self, out: &mut String) {
        out.push('<');
        self.x.render_to(out);
        out.push_str(", ");
        self.y.render_to(out);
        out.push('>');
    }
}

struct Meters(f64);

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}

struct Unprintable {
    _secret: u64,
}

/// Verifies user `Render` impls nest inside collections.
#[cfg(feature = "containers")]
#[test]
fn user_render_impl_nests() {
    let points = vec![Point { x: 1, y: 2 }, Point { x: -1, y: 0 }];
    assert_eq!(render!(points), "[<1, 2>, <-1, 0>]");
}

/// Verifies user `Render` impls print without any container support.
#[test]
fn user_render_impl_prints_directly() {
    assert_eq!(render!(Point { x: 3, y: -4 }), "<3, -4>");
}

/// Verifies `Display` types print directly.
#[test]
fn display_types() {
    assert_eq!(render!(Meters(1.5)), "1.5m");
}

/// Verifies `Display` types nest through `Displayed`.
#[cfg(feature = "containers")]
#[test]
fn displayed_wrapper_nests() {
    use logging::Displayed;

    assert_eq!(render!(vec![Displayed(Meters(2.0))]), "[2m]");
}

/// Verifies the crate's own tags render inside collections and tuples.
#[cfg(feature = "containers")]
#[test]
fn tags_render_inside_containers() {
    use logging::{Group, Severity, Stream};

    assert_eq!(render!(vec![Severity::Warn, Severity::Error]), "[warn, error]");
    assert_eq!(render!((1, Group::Extra)), "<1, extra>");
    assert_eq!(render!([Stream::Stderr]), "[stderr]");
}

/// Verifies values without any text form print their type name.
#[test]
fn unprintable_value_falls_back_to_type_name() {
    let rendered = render!(Unprintable { _secret: 1 });
    assert!(rendered.starts_with('<'), "{rendered}");
    assert!(rendered.ends_with("Unprintable>"), "{rendered}");
}

/// Verifies a collection of unprintable values falls back as a whole.
#[cfg(feature = "containers")]
#[test]
fn collection_of_unprintable_values_falls_back() {
    let rendered = render!(vec![Unprintable { _secret: 1 }]);
    assert!(rendered.starts_with("<alloc::vec::Vec<"), "{rendered}");
    assert!(rendered.ends_with("Unprintable>>"), "{rendered}");
}

/// Verifies `Option` has no text form and takes the fallback.
#[test]
fn option_falls_back_to_type_name() {
    assert_eq!(render!(Some(3u8)), "<core::option::Option<u8>>");
}

// ============================================================================
// Purity Tests
// ============================================================================

/// Verifies rendering the same value twice is byte-identical.
#[cfg(feature = "containers")]
#[test]
fn rendering_is_idempotent() {
    let value = (vec!["a", "b"], 'c', 4.25f64);
    assert_eq!(value.render(), value.render());
    assert_eq!(render!(value), value.render());
}

/// Verifies long payloads are not truncated.
#[test]
fn long_payload_is_not_truncated() {
    let long = "x".repeat(10_000);
    let events = capture(|| info_log!(long));
    assert_eq!(events[0].payload.len(), 10_000);
}
