//! crates/logging/src/render/mod.rs
//! Conversion of logged values into text.
//!
//! Values render through the first strategy that applies:
//!
//! 1. direct textual conversion for scalars, strings and `Display` types;
//! 2. `[e1, e2, ...]` for ordered collections (strings never count as one);
//! 3. `<f1, f2, ...>` for tuples;
//! 4. `<type name>` for anything else.
//!
//! Rules 1 to 3 are expressed through the [`Render`] trait. The macros pick
//! between [`Render`], `Display` and the type-name fallback at the call site,
//! so an argument without either capability still compiles and prints its
//! type instead.

use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::num::{
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize, Wrapping,
};
use std::rc::Rc;
use std::sync::Arc;

use logging_sink::{ColorMode, Severity, Stream};

use crate::levels::Group;

#[cfg(feature = "containers")]
mod containers;
pub(crate) mod probe;

/// Text conversion used for every logged value.
///
/// Implement it for your own types to control how they print, or wrap a
/// `Display` type in [`Displayed`] to reuse its formatting inside
/// collections.
///
/// ```
/// use logging::Render;
///
/// assert_eq!(8i32.render(), "8");
/// assert_eq!("text".render(), "text");
/// # #[cfg(feature = "containers")]
/// assert_eq!(vec![(1, 2), (3, 4)].render(), "[<1, 2>, <3, 4>]");
/// ```
pub trait Render {
    /// Appends the text form of `self` to `out`.
    fn render_to(&self, out: &mut String);

    /// Returns the text form of `self`.
    fn render(&self) -> String {
        let mut out = String::new();
        self.render_to(&mut out);
        out
    }
}

macro_rules! render_with_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Render for $ty {
                fn render_to(&self, out: &mut String) {
                    let _ = write!(out, "{self}");
                }
            }
        )+
    };
}

render_with_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

render_with_display!(
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
);

render_with_display!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6);

render_with_display!(Severity, Group, Stream, ColorMode);

impl<T: fmt::Display> Render for Wrapping<T> {
    fn render_to(&self, out: &mut String) {
        let _ = write!(out, "{self}");
    }
}

impl Render for Cow<'_, str> {
    fn render_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Render for fmt::Arguments<'_> {
    fn render_to(&self, out: &mut String) {
        let _ = out.write_fmt(*self);
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render_to(&self, out: &mut String) {
        (**self).render_to(out);
    }
}

impl<T: Render + ?Sized> Render for &mut T {
    fn render_to(&self, out: &mut String) {
        (**self).render_to(out);
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render_to(&self, out: &mut String) {
        (**self).render_to(out);
    }
}

impl<T: Render + ?Sized> Render for Rc<T> {
    fn render_to(&self, out: &mut String) {
        (**self).render_to(out);
    }
}

impl<T: Render + ?Sized> Render for Arc<T> {
    fn render_to(&self, out: &mut String) {
        (**self).render_to(out);
    }
}

/// Adapter that renders any `Display` value verbatim.
///
/// ```
/// use std::fmt;
/// use logging::{Displayed, Render};
///
/// struct Port(u16);
///
/// impl fmt::Display for Port {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, ":{}", self.0)
///     }
/// }
///
/// assert_eq!(Displayed(Port(80)).render(), ":80");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display> Render for Displayed<T> {
    fn render_to(&self, out: &mut String) {
        let _ = write!(out, "{}", self.0);
    }
}

/// Appends the `<type name>` placeholder used for values that cannot be
/// rendered.
pub fn render_type_name<T: ?Sized>(out: &mut String) {
    out.push('<');
    out.push_str(std::any::type_name::<T>());
    out.push('>');
}

/// Concatenates the rendering of every value, in order, with no separator.
///
/// ```
/// use logging::render_all;
///
/// assert_eq!(render_all(&[&"hello world: ", &1, &", ", &2]), "hello world: 1, 2");
/// ```
#[must_use]
pub fn render_all(values: &[&dyn Render]) -> String {
    let mut out = String::new();
    for value in values {
        value.render_to(&mut out);
    }
    out
}
