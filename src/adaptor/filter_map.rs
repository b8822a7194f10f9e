use crate::{adaptor::Counted, view::View};

/// Filter and map fused into a single scan.
///
/// `g` runs exactly once per upstream element visited. Elements for which
/// it returns `None` are skipped.
pub struct FilterMap<S, G> {
    source: S,
    g: G,
}

impl<S, G> FilterMap<S, G> {
    pub fn new(source: S, g: G) -> Self {
        FilterMap { source, g }
    }
}

impl<S, G> Clone for FilterMap<S, G>
where
    S: Clone,
    G: Clone,
{
    fn clone(&self) -> Self {
        FilterMap {
            source: self.source.clone(),
            g: self.g.clone(),
        }
    }
}

impl<S, G, U> View for FilterMap<S, G>
where
    S: View,
    G: Fn(S::Item) -> Option<U>,
{
    type Item = U;
    type Cursor<'c> = FilterMapCursor<'c, S::Cursor<'c>, G, U> where Self: 'c;
    type Prefix<'c> = Counted<FilterMapCursor<'c, S::Cursor<'c>, G, U>> where Self: 'c;

    fn cursor(&self) -> Self::Cursor<'_> {
        FilterMapCursor {
            inner: self.source.cursor(),
            g: &self.g,
            current: None,
        }
    }

    fn prefix(&self, count: usize) -> Self::Prefix<'_> {
        Counted::new(self.cursor(), count)
    }

    fn size(&self) -> usize {
        self.source.size()
    }

    fn known_size(&self) -> Option<usize> {
        self.source.known_size()
    }
}

pub struct FilterMapCursor<'c, I, G, U> {
    inner: I,
    g: &'c G,
    // Lookahead filled by `peek`, handed out by the next call to `next`.
    current: Option<U>,
}

impl<I, G, U> FilterMapCursor<'_, I, G, U>
where
    I: Iterator,
    G: Fn(I::Item) -> Option<U>,
{
    /// The next present result, without advancing past it.
    pub fn peek(&mut self) -> Option<&U> {
        if self.current.is_none() {
            self.current = self.scan();
        }
        self.current.as_ref()
    }

    fn scan(&mut self) -> Option<U> {
        self.inner.find_map(self.g)
    }
}

impl<I, G, U> Iterator for FilterMapCursor<'_, I, G, U>
where
    I: Iterator,
    G: Fn(I::Item) -> Option<U>,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        match self.current.take() {
            Some(value) => Some(value),
            None => self.scan(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = usize::from(self.current.is_some());
        let upper = self
            .inner
            .size_hint()
            .1
            .and_then(|upper| upper.checked_add(buffered));
        (buffered, upper)
    }
}
