use crate::view::{IntoView, View};

/// A borrowed view over contiguous storage.
#[derive(Debug)]
pub struct Slice<'a, T> {
    items: &'a [T],
}

impl<'a, T> Slice<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Slice { items }
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}

impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

impl<'a, T> View for Slice<'a, T> {
    type Item = &'a T;
    type Cursor<'c> = std::slice::Iter<'a, T> where Self: 'c;
    type Prefix<'c> = std::slice::Iter<'a, T> where Self: 'c;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.items.iter()
    }

    fn prefix(&self, count: usize) -> Self::Prefix<'_> {
        self.items[..count.min(self.items.len())].iter()
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn known_size(&self) -> Option<usize> {
        Some(self.items.len())
    }
}

impl<'a, T> From<&'a [T]> for Slice<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Slice::new(items)
    }
}

impl<'a, T> IntoView for &'a [T] {
    type View = Slice<'a, T>;

    fn into_view(self) -> Slice<'a, T> {
        Slice::new(self)
    }
}

impl<'a, T> IntoView for &'a Vec<T> {
    type View = Slice<'a, T>;

    fn into_view(self) -> Slice<'a, T> {
        Slice::new(self)
    }
}

impl<'a, T, const N: usize> IntoView for &'a [T; N] {
    type View = Slice<'a, T>;

    fn into_view(self) -> Slice<'a, T> {
        Slice::new(self)
    }
}
