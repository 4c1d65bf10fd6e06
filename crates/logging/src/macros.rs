//! crates/logging/src/macros.rs
//! Logging macros over the process-wide logger.
//!
//! Every macro accepts a comma-separated list of values of any type. Values
//! are rendered in order and concatenated without a separator; put literal
//! separators between them as needed. Arguments are evaluated only when the
//! line will be emitted, and a severity whose `level-*` cargo feature is off
//! compiles to nothing.

/// Renders values into a `String` using the logging dispatch.
///
/// Each value uses its [`Render`](crate::Render) impl when one exists, then
/// its `Display` impl, and otherwise prints as `<type name>`.
///
/// ```
/// use logging::render;
///
/// struct Opaque;
///
/// assert_eq!(render!("n = ", 3), "n = 3");
/// # #[cfg(feature = "containers")]
/// assert_eq!(render!(vec![(1, 'a')]), "[<1, a>]");
/// assert!(render!(Opaque).ends_with("Opaque>"));
/// assert_eq!(render!(), "");
/// ```
#[macro_export]
macro_rules! render {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut out = ::std::string::String::new();
        $( $crate::__render_into!(out, $value); )+
        out
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __render_into {
    ($out:ident, $value:expr) => {{
        #[allow(unused_imports)]
        use $crate::__private::{ViaDisplay as _, ViaFallback as _, ViaRender as _};
        (&&&$crate::__private::Probe(&$value)).render_probe(&mut $out);
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($severity:expr, $group:expr $(, $value:expr)* $(,)?) => {{
        const COMPILED: bool = $crate::compiled_in($severity);
        if COMPILED && $crate::enabled($severity, $group) {
            $crate::dispatch($severity, $group, &$crate::render!($($value),*));
        }
    }};
}

/// Unlabelled line written to a chosen [`Stream`](crate::Stream).
///
/// The line has no severity, so it ignores the filter, the `level-*`
/// features and [`capture`](crate::capture).
///
/// ```
/// use logging::{Stream, log};
///
/// log!(Stream::Stdout, "hello world: ", 1, ", ", 2);
/// ```
#[macro_export]
macro_rules! log {
    ($stream:expr $(, $value:expr)* $(,)?) => {
        $crate::dispatch_plain($stream, &$crate::render!($($value),*))
    };
}

/// Info line in the default group.
///
/// ```
/// use logging::{capture, info_log};
///
/// let events = capture(|| info_log!("hello world: ", 1, ", ", 2));
/// assert_eq!(events[0].plain_line(), "INFO: hello world: 1, 2");
/// ```
#[macro_export]
macro_rules! info_log {
    ($($value:expr),* $(,)?) => {
        $crate::__log!($crate::Severity::Info, $crate::Group::Default $(, $value)*)
    };
}

/// Info line in a named [`Group`](crate::Group).
///
/// The group is given by its variant name, so a misspelt group fails to
/// compile. Lines in groups other than `Default` are labelled
/// `INFO[<group>]`.
///
/// ```
/// use logging::{capture, group_log};
///
/// let events = capture(|| {
///     group_log!(Extra, "info group message");
///     group_log!(Inactive, "this message should not be displayed!");
/// });
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].plain_line(), "INFO[extra]: info group message");
/// ```
#[macro_export]
macro_rules! group_log {
    ($group:ident $(, $value:expr)* $(,)?) => {
        $crate::__log!($crate::Severity::Info, $crate::Group::$group $(, $value)*)
    };
}

/// Warning line.
#[macro_export]
macro_rules! warn_log {
    ($($value:expr),* $(,)?) => {
        $crate::__log!($crate::Severity::Warn, $crate::Group::Default $(, $value)*)
    };
}

/// Error line.
///
/// ```
/// use logging::{capture, error_log};
///
/// let i = 8;
/// let events = capture(|| error_log!("i = ", i));
/// assert_eq!(events[0].plain_line(), "ERROR: i = 8");
/// ```
#[macro_export]
macro_rules! error_log {
    ($($value:expr),* $(,)?) => {
        $crate::__log!($crate::Severity::Error, $crate::Group::Default $(, $value)*)
    };
}

/// Reminder line for unfinished code paths.
#[macro_export]
macro_rules! todo_log {
    ($($value:expr),* $(,)?) => {
        $crate::__log!($crate::Severity::Todo, $crate::Group::Default $(, $value)*)
    };
}

/// Debug line showing an expression and its value.
///
/// A string literal argument is printed as is; any other expression is
/// printed as `<source text> = <value>`. Several expressions produce one
/// line each.
///
/// ```
/// use logging::{capture, dbg_log};
///
/// let i = 8;
/// let events = capture(|| {
///     dbg_log!("debug message");
///     dbg_log!(i);
/// });
/// assert_eq!(events[0].plain_line(), "DBG: debug message");
/// assert_eq!(events[1].plain_line(), "DBG: i = 8");
/// ```
#[macro_export]
macro_rules! dbg_log {
    ($value:expr $(,)?) => {{
        const COMPILED: bool = $crate::compiled_in($crate::Severity::Debug);
        if COMPILED && $crate::enabled($crate::Severity::Debug, $crate::Group::Default) {
            $crate::dispatch_debug(::std::stringify!($value), &$crate::render!($value));
        }
    }};
    ($($value:expr),+ $(,)?) => {{
        $( $crate::dbg_log!($value); )+
    }};
}
