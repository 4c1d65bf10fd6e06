//! Call-site selection between [`Render`], `Display` and the type-name
//! fallback.
//!
//! The macros evaluate `(&&&Probe(&value)).render_probe(&mut out)` with all
//! three traits in scope. Method resolution tries the receiver types
//! `&&&Probe`, `&&Probe` and `&Probe` in that order and stops at the first
//! impl whose bounds hold, so a value uses the strongest capability it has.
//! The choice is made at compile time for the concrete argument type.

use std::fmt::{self, Write as _};

use super::{Render, render_type_name};

/// Borrowed value under inspection.
pub struct Probe<'a, T: ?Sized>(pub &'a T);

/// Selected when the value implements [`Render`].
pub trait ViaRender {
    /// Appends the rendered value to `out`.
    fn render_probe(&self, out: &mut String);
}

impl<T: Render + ?Sized> ViaRender for &&Probe<'_, T> {
    fn render_probe(&self, out: &mut String) {
        self.0.render_to(out);
    }
}

/// Selected when the value only implements `Display`.
pub trait ViaDisplay {
    /// Appends the displayed value to `out`.
    fn render_probe(&self, out: &mut String);
}

impl<T: fmt::Display + ?Sized> ViaDisplay for &Probe<'_, T> {
    fn render_probe(&self, out: &mut String) {
        let _ = write!(out, "{}", self.0);
    }
}

/// Selected for every other value.
pub trait ViaFallback {
    /// Appends the `<type name>` placeholder to `out`.
    fn render_probe(&self, out: &mut String);
}

impl<T: ?Sized> ViaFallback for Probe<'_, T> {
    fn render_probe(&self, out: &mut String) {
        render_type_name::<T>(out);
    }
}
