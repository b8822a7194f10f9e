use crate::{
    adaptor::Counted,
    error::{Error, Result},
    view::View,
};

/// The upstream view concatenated with itself `count` times.
///
/// With a cut position, traversal starts at the cut, wraps around at the
/// end of each cycle, and stops when it reaches the cut again on the last
/// cycle, so one cycle's worth of elements is dropped in total.
#[derive(Clone, Debug)]
pub struct Repeat<S> {
    source: S,
    count: usize,
    cut: Option<usize>,
}

impl<S> Repeat<S>
where
    S: View,
{
    pub fn new(source: S, count: usize) -> Self {
        Repeat {
            source,
            count,
            cut: None,
        }
    }

    /// Fails if `cut` lies past the [`known_size`](View::known_size) of
    /// `source`. A source that only turns out to be shorter than `cut` while
    /// it is traversed repeats to nothing.
    pub fn with_cut(source: S, count: usize, cut: usize) -> Result<Self> {
        if let Some(len) = source.known_size() {
            if cut > len {
                tracing::debug!(cut, len, "rejected repeat cut position");
                return Err(Error::CutOutOfRange { cut, len });
            }
        }
        Ok(Repeat {
            source,
            count,
            cut: Some(cut),
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn cut(&self) -> Option<usize> {
        self.cut
    }

    fn cycles(&self) -> usize {
        self.count.saturating_sub(usize::from(self.cut.is_some()))
    }
}

impl<S> View for Repeat<S>
where
    S: View,
{
    type Item = S::Item;
    type Cursor<'c> = RepeatCursor<'c, S> where Self: 'c;
    type Prefix<'c> = Counted<RepeatCursor<'c, S>> where Self: 'c;

    fn cursor(&self) -> Self::Cursor<'_> {
        let position = self.cut.unwrap_or(0);
        RepeatCursor {
            source: &self.source,
            current: self.source.cursor(),
            skip: position,
            position,
            cycles_left: self.count,
            stop: self.cut,
        }
    }

    fn prefix(&self, count: usize) -> Self::Prefix<'_> {
        Counted::new(self.cursor(), count)
    }

    fn size(&self) -> usize {
        self.cycles().saturating_mul(self.source.size())
    }

    fn known_size(&self) -> Option<usize> {
        let cycles = self.cycles();
        self.source
            .known_size()
            .map(|size| cycles.saturating_mul(size))
    }
}

pub struct RepeatCursor<'c, S>
where
    S: View + 'c,
{
    source: &'c S,
    current: S::Cursor<'c>,
    /// Leading elements of the first cycle still to be stepped over.
    skip: usize,
    /// Index of the next element within the current cycle.
    position: usize,
    cycles_left: usize,
    stop: Option<usize>,
}

impl<'c, S> Clone for RepeatCursor<'c, S>
where
    S: View + 'c,
    S::Cursor<'c>: Clone,
{
    fn clone(&self) -> Self {
        RepeatCursor {
            source: self.source,
            current: self.current.clone(),
            skip: self.skip,
            position: self.position,
            cycles_left: self.cycles_left,
            stop: self.stop,
        }
    }
}

impl<S> Iterator for RepeatCursor<'_, S>
where
    S: View,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.skip > 0 {
            let skip = std::mem::take(&mut self.skip);
            if self.cycles_left > 0 && self.current.nth(skip - 1).is_none() {
                // The source is shorter than the cut.
                self.cycles_left = 0;
            }
        }
        loop {
            if self.cycles_left == 0 {
                return None;
            }
            if self.cycles_left == 1 && self.stop == Some(self.position) {
                self.cycles_left = 0;
                return None;
            }
            if let Some(item) = self.current.next() {
                self.position += 1;
                return Some(item);
            }
            // A cycle that ends without yielding anything means the source is
            // empty, whatever the remaining count.
            if self.position == 0 {
                self.cycles_left = 0;
                return None;
            }
            self.cycles_left -= 1;
            if self.cycles_left == 0 {
                return None;
            }
            self.current = self.source.cursor();
            self.position = 0;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cycles_left == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.current.size_hint();
        // A cut ends the last cycle early and the pending skip has not been
        // taken off `current` yet.
        let lower = if self.stop.is_some() { 0 } else { lower };
        let rest = self
            .source
            .known_size()
            .and_then(|size| size.checked_mul(self.cycles_left - 1));
        let upper = match (upper, rest) {
            (Some(upper), Some(rest)) => upper.checked_add(rest),
            _ => None,
        };
        (lower, upper)
    }
}
