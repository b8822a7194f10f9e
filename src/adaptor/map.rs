use crate::view::View;

pub struct Map<S, F> {
    source: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub fn new(source: S, f: F) -> Self {
        Map { source, f }
    }
}

impl<S, F> Clone for Map<S, F>
where
    S: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Map {
            source: self.source.clone(),
            f: self.f.clone(),
        }
    }
}

impl<S, F> std::fmt::Debug for Map<S, F>
where
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<S, F, U> View for Map<S, F>
where
    S: View,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Cursor<'c> = MapCursor<'c, S::Cursor<'c>, F> where Self: 'c;
    // Mapping keeps positions, so the upstream prefix strategy carries over.
    type Prefix<'c> = MapCursor<'c, S::Prefix<'c>, F> where Self: 'c;

    fn cursor(&self) -> Self::Cursor<'_> {
        MapCursor {
            inner: self.source.cursor(),
            f: &self.f,
        }
    }

    fn prefix(&self, count: usize) -> Self::Prefix<'_> {
        MapCursor {
            inner: self.source.prefix(count),
            f: &self.f,
        }
    }

    fn size(&self) -> usize {
        self.source.size()
    }

    fn known_size(&self) -> Option<usize> {
        self.source.known_size()
    }
}

pub struct MapCursor<'c, I, F> {
    inner: I,
    f: &'c F,
}

impl<I, F> Clone for MapCursor<'_, I, F>
where
    I: Clone,
{
    fn clone(&self) -> Self {
        MapCursor {
            inner: self.inner.clone(),
            f: self.f,
        }
    }
}

impl<I, F, U> Iterator for MapCursor<'_, I, F>
where
    I: Iterator,
    F: Fn(I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        self.inner.next().map(self.f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::view::{view, View};

    #[test]
    fn applies_function_in_order() {
        let items = [1, 2, 3];
        let mapped = view(&items).map(|x| x * 10);
        assert_eq!(mapped.collect_vec(), vec![10, 20, 30]);
        assert_eq!(mapped.size(), 3);
    }

    #[test]
    fn invokes_function_once_per_element_on_demand() {
        let calls = Cell::new(0);
        let items = [1, 2, 3, 4];
        let mapped = view(&items).map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });
        assert_eq!(calls.get(), 0);

        let mut cursor = mapped.cursor();
        assert_eq!(cursor.next(), Some(2));
        assert_eq!(calls.get(), 1);

        assert_eq!(mapped.take(2).collect_vec(), vec![2, 3]);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn flattening_terminals_invoke_function_once_per_element() {
        let calls = Cell::new(0);
        let nested = vec![vec![1, 2], vec![], vec![3]];
        let flat = view(&nested)
            .map(|inner| {
                calls.set(calls.get() + 1);
                inner
            })
            .flatten();
        assert_eq!(flat.collect_vec(), vec![&1, &2, &3]);
        assert_eq!(calls.get(), 3);

        calls.set(0);
        let taken = flat.take(2);
        assert_eq!(taken.collect_vec(), vec![&1, &2]);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn empty_source_maps_to_nothing() {
        let items: Vec<i32> = Vec::new();
        let mapped = view(&items).map(|x| x.to_string());
        assert!(mapped.collect_vec().is_empty());
        assert_eq!(mapped.size(), 0);
    }
}
