use crate::view::View;

/// At most `count` leading elements of the upstream view.
///
/// The traversal strategy is the upstream's [`View::Prefix`]: slicing for
/// random-access sources, a [`Counted`] cursor for everything else.
#[derive(Clone, Debug)]
pub struct Take<S> {
    source: S,
    count: usize,
}

impl<S> Take<S> {
    pub fn new(source: S, count: usize) -> Self {
        Take { source, count }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl<S> View for Take<S>
where
    S: View,
{
    type Item = S::Item;
    type Cursor<'c> = S::Prefix<'c> where Self: 'c;
    type Prefix<'c> = S::Prefix<'c> where Self: 'c;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.source.prefix(self.count)
    }

    fn prefix(&self, count: usize) -> Self::Prefix<'_> {
        self.source.prefix(count.min(self.count))
    }

    fn size(&self) -> usize {
        self.source.size().min(self.count)
    }

    fn known_size(&self) -> Option<usize> {
        self.source.known_size().map(|size| size.min(self.count))
    }
}

/// A cursor that stops after a fixed number of elements, or when its inner
/// cursor runs out, whichever comes first.
#[derive(Clone, Debug)]
pub struct Counted<I> {
    inner: I,
    left: usize,
}

impl<I> Counted<I>
where
    I: Iterator,
{
    pub fn new(inner: I, count: usize) -> Self {
        Counted { inner, left: count }
    }

    pub fn remaining(&self) -> usize {
        self.left
    }
}

impl<I> Iterator for Counted<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.left == 0 {
            return None;
        }
        match self.inner.next() {
            Some(item) => {
                self.left -= 1;
                Some(item)
            }
            None => {
                // Upstream ended first; further calls must not touch it again.
                self.left = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.left == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.inner.size_hint();
        let upper = match upper {
            Some(upper) => upper.min(self.left),
            None => self.left,
        };
        (lower.min(self.left), Some(upper))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{handle::Seq, view::view};

    #[test]
    fn takes_leading_elements() {
        let items = [1, 2, 3, 4];
        assert_eq!(view(&items).take(2).collect_vec(), vec![&1, &2]);
    }

    #[test]
    fn shorter_upstream_ends_early() {
        let items = [1, 2, 3];
        let taken = view(&items).take(10);
        assert_eq!(taken.size(), 3);
        assert_eq!(taken.collect_vec(), vec![&1, &2, &3]);
        assert!(view(&items).take(0).is_empty());
    }

    #[test]
    fn forward_source_is_counted() {
        let seq = Seq::new("abcdef".chars().filter(|c| *c != 'b'));
        let taken = seq.take(3);
        assert_eq!(taken.collect::<String>(), "acd");
        assert_eq!(taken.size(), 3);
    }

    #[test]
    fn does_not_pull_past_the_count() {
        let pulled = Cell::new(0);
        let items = [1, 2, 3, 4, 5];
        let evens = view(&items).filter(|x| {
            pulled.set(pulled.get() + 1);
            **x % 2 == 0
        });
        let taken = evens.take(1);
        assert_eq!(taken.collect_vec(), vec![&2]);
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn nested_take_uses_smaller_count() {
        let items = [1, 2, 3, 4, 5];
        let taken = view(&items).take(4).take(2);
        assert_eq!(taken.size(), 2);
        assert_eq!(taken.collect_vec(), vec![&1, &2]);
        let taken = view(&items).take(2).take(4);
        assert_eq!(taken.collect_vec(), vec![&1, &2]);
    }

    #[test]
    fn counted_stops_at_inner_end() {
        let mut counted = Counted::new([1, 2].into_iter(), 5);
        assert_eq!(counted.next(), Some(1));
        assert_eq!(counted.next(), Some(2));
        assert_eq!(counted.next(), None);
        assert_eq!(counted.remaining(), 0);
    }
}
