//! Rendering of collections as `[...]` and tuples as `<...>`.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use super::Render;

/// Writes `open`, the comma-separated items, then `close`.
fn render_delimited<'a, I>(items: I, open: char, close: char, out: &mut String)
where
    I: IntoIterator<Item = &'a dyn Render>,
{
    out.push(open);
    for (position, item) in items.into_iter().enumerate() {
        if position > 0 {
            out.push_str(", ");
        }
        item.render_to(out);
    }
    out.push(close);
}

fn render_sequence<'a, I, T>(items: I, out: &mut String)
where
    I: IntoIterator<Item = &'a T>,
    T: Render + 'a,
{
    render_delimited(items.into_iter().map(|item| item as &dyn Render), '[', ']', out);
}

/// A map entry, rendered as the pair `<key, value>`.
struct Entry<'a, K, V>(&'a K, &'a V);

impl<K: Render, V: Render> Render for Entry<'_, K, V> {
    fn render_to(&self, out: &mut String) {
        render_delimited([self.0 as &dyn Render, self.1 as &dyn Render], '<', '>', out);
    }
}

fn render_entries<'a, I, K, V>(entries: I, out: &mut String)
where
    I: IntoIterator<Item = (&'a K, &'a V)>,
    K: Render + 'a,
    V: Render + 'a,
{
    out.push('[');
    for (position, (key, value)) in entries.into_iter().enumerate() {
        if position > 0 {
            out.push_str(", ");
        }
        Entry(key, value).render_to(out);
    }
    out.push(']');
}

impl<T: Render> Render for [T] {
    fn render_to(&self, out: &mut String) {
        render_sequence(self, out);
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn render_to(&self, out: &mut String) {
        render_sequence(self, out);
    }
}

macro_rules! render_sequence_for {
    ($($collection:ident<T $(, $extra:ident)*>),+ $(,)?) => {
        $(
            impl<T: Render $(, $extra)*> Render for $collection<T $(, $extra)*> {
                fn render_to(&self, out: &mut String) {
                    render_sequence(self.iter(), out);
                }
            }
        )+
    };
}

render_sequence_for!(
    Vec<T>,
    VecDeque<T>,
    LinkedList<T>,
    BTreeSet<T>,
    HashSet<T, S>,
);

impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    fn render_to(&self, out: &mut String) {
        render_entries(self, out);
    }
}

impl<K: Render, V: Render, S> Render for HashMap<K, V, S> {
    fn render_to(&self, out: &mut String) {
        render_entries(self, out);
    }
}

impl Render for () {
    fn render_to(&self, out: &mut String) {
        out.push_str("<>");
    }
}

macro_rules! render_tuple {
    ($($ty:ident $field:ident),+) => {
        impl<$($ty: Render),+> Render for ($($ty,)+) {
            fn render_to(&self, out: &mut String) {
                let ($($field,)+) = self;
                render_delimited([$($field as &dyn Render),+], '<', '>', out);
            }
        }
    };
}

render_tuple!(A a);
render_tuple!(A a, B b);
render_tuple!(A a, B b, C c);
render_tuple!(A a, B b, C c, D d);
render_tuple!(A a, B b, C c, D d, E e);
render_tuple!(A a, B b, C c, D d, E e, F f);
render_tuple!(A a, B b, C c, D d, E e, F f, G g);
render_tuple!(A a, B b, C c, D d, E e, F f, G g, H h);
render_tuple!(A a, B b, C c, D d, E e, F f, G g, H h, I i);
render_tuple!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j);
render_tuple!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k);
render_tuple!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l);
