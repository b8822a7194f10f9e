use crate::{adaptor::Counted, view::View};

pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub fn new(source: S, predicate: P) -> Self {
        Filter { source, predicate }
    }
}

impl<S, P> Clone for Filter<S, P>
where
    S: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        Filter {
            source: self.source.clone(),
            predicate: self.predicate.clone(),
        }
    }
}

impl<S, P> std::fmt::Debug for Filter<S, P>
where
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<S, P> View for Filter<S, P>
where
    S: View,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'c> = FilterCursor<'c, S::Cursor<'c>, P> where Self: 'c;
    type Prefix<'c> = Counted<FilterCursor<'c, S::Cursor<'c>, P>> where Self: 'c;

    fn cursor(&self) -> Self::Cursor<'_> {
        FilterCursor {
            inner: self.source.cursor(),
            predicate: &self.predicate,
        }
    }

    fn prefix(&self, count: usize) -> Self::Prefix<'_> {
        Counted::new(self.cursor(), count)
    }

    /// The upstream size. The number of matching elements is not known
    /// without evaluating the predicate on every element.
    fn size(&self) -> usize {
        self.source.size()
    }

    fn known_size(&self) -> Option<usize> {
        self.source.known_size()
    }
}

pub struct FilterCursor<'c, I, P> {
    inner: I,
    predicate: &'c P,
}

impl<I, P> Clone for FilterCursor<'_, I, P>
where
    I: Clone,
{
    fn clone(&self) -> Self {
        FilterCursor {
            inner: self.inner.clone(),
            predicate: self.predicate,
        }
    }
}

impl<I, P> Iterator for FilterCursor<'_, I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.inner.find(self.predicate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::view::{view, View};

    #[test]
    fn keeps_matching_elements_in_order() {
        let items = [5, 2, 8, 3, 6];
        let evens = view(&items).filter(|x| **x % 2 == 0);
        assert_eq!(evens.collect_vec(), vec![&2, &8, &6]);
    }

    #[test]
    fn size_is_upstream_upper_bound() {
        let items = [1, 2, 3, 4, 5];
        let evens = view(&items).filter(|x| **x % 2 == 0);
        assert_eq!(evens.size(), 5);
        assert_eq!(evens.len(), 2);
    }

    #[test]
    fn predicate_runs_once_per_visited_element() {
        let calls = Cell::new(0);
        let items = [1, 2, 3, 4, 5, 6];
        let evens = view(&items).filter(|x| {
            calls.set(calls.get() + 1);
            **x % 2 == 0
        });
        assert_eq!(evens.len(), 3);
        assert_eq!(calls.get(), 6);

        calls.set(0);
        let mut cursor = evens.cursor();
        assert_eq!(cursor.next(), Some(&2));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn nothing_matches() {
        let items = [1, 3, 5];
        let evens = view(&items).filter(|x| **x % 2 == 0);
        assert!(evens.is_empty());
        assert_eq!(evens.take(2).collect_vec(), Vec::<&i32>::new());
    }
}
