use crate::{
    handle::Slice,
    view::{IntoView, View},
};

/// A view that owns the buffer it iterates.
///
/// Cursors yield clones of the buffered values, so the view stays reusable
/// and is independent of whatever expression produced the elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Owned<T> {
    items: Vec<T>,
}

impl<T> Owned<T> {
    /// Moves every element of `source` into a new buffer.
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let source = source.into_iter();
        let mut items = Vec::with_capacity(source.size_hint().0);
        for item in source {
            items.push(item);
        }
        Owned { items }
    }

    /// A borrowed view over the buffer, yielding references instead of clones.
    pub fn as_view(&self) -> Slice<'_, T> {
        Slice::new(&self.items)
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for Owned<T> {
    fn from(items: Vec<T>) -> Self {
        Owned { items }
    }
}

impl<T> FromIterator<T> for Owned<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Owned::new(iter)
    }
}

impl<T> View for Owned<T>
where
    T: Clone,
{
    type Item = T;
    type Cursor<'c> = std::iter::Cloned<std::slice::Iter<'c, T>> where Self: 'c;
    type Prefix<'c> = std::iter::Cloned<std::slice::Iter<'c, T>> where Self: 'c;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.items.iter().cloned()
    }

    fn prefix(&self, count: usize) -> Self::Prefix<'_> {
        self.items[..count.min(self.items.len())].iter().cloned()
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn known_size(&self) -> Option<usize> {
        Some(self.items.len())
    }
}

impl<T> IntoView for Vec<T>
where
    T: Clone,
{
    type View = Owned<T>;

    fn into_view(self) -> Owned<T> {
        Owned::from(self)
    }
}
