use crate::{adaptor::Counted, util::size::SizeTracker, view::View};

/// Concatenation of the inner sequences produced by a view of sequences.
#[derive(Clone, Debug)]
pub struct Flatten<S> {
    source: S,
    size: SizeTracker,
}

impl<S> Flatten<S>
where
    S: View,
    S::Item: IntoIterator,
{
    pub fn new(source: S) -> Self {
        Flatten {
            source,
            size: SizeTracker::new(),
        }
    }
}

type InnerIter<S> = <<S as View>::Item as IntoIterator>::IntoIter;

impl<S> View for Flatten<S>
where
    S: View,
    S::Item: IntoIterator,
{
    type Item = <S::Item as IntoIterator>::Item;
    type Cursor<'c> = FlattenCursor<S::Cursor<'c>, InnerIter<S>> where Self: 'c;
    type Prefix<'c> = Counted<FlattenCursor<S::Cursor<'c>, InnerIter<S>>> where Self: 'c;

    fn cursor(&self) -> Self::Cursor<'_> {
        FlattenCursor {
            outer: self.source.cursor(),
            inner: None,
        }
    }

    fn prefix(&self, count: usize) -> Self::Prefix<'_> {
        Counted::new(self.cursor(), count)
    }

    /// The exact number of inner elements, counted on first use.
    fn size(&self) -> usize {
        self.size.get_or_count(|| self.cursor().count())
    }

    /// Only a length cached by an earlier call to `size`. Finding it any
    /// other way means running the whole pipeline.
    fn known_size(&self) -> Option<usize> {
        self.size.get()
    }
}

pub struct FlattenCursor<O, I> {
    outer: O,
    inner: Option<I>,
}

impl<O, I> Clone for FlattenCursor<O, I>
where
    O: Clone,
    I: Clone,
{
    fn clone(&self) -> Self {
        FlattenCursor {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<O, I> Iterator for FlattenCursor<O, I>
where
    O: Iterator,
    O::Item: IntoIterator<IntoIter = I>,
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
            }
            // Keep advancing the outer cursor until a non-empty inner
            // sequence turns up, however many empty ones sit in between.
            match self.outer.next() {
                Some(sequence) => self.inner = Some(sequence.into_iter()),
                None => {
                    self.inner = None;
                    return None;
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = match &self.inner {
            Some(inner) => inner.size_hint(),
            None => (0, Some(0)),
        };
        match self.outer.size_hint() {
            (0, Some(0)) => (lower, upper),
            _ => (lower, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::view::{view, View};

    #[test]
    fn concatenates_inner_sequences() {
        let nested = vec![vec![1, 2], vec![3], vec![4, 5]];
        let flat = view(&nested).flatten();
        assert_eq!(flat.collect_vec(), vec![&1, &2, &3, &4, &5]);
        assert_eq!(flat.size(), 5);
    }

    #[test]
    fn skips_consecutive_empty_inner_sequences() {
        let nested: Vec<Vec<i32>> = vec![vec![], vec![1], vec![], vec![], vec![2, 3], vec![]];
        let flat = view(&nested).flatten();
        assert_eq!(flat.collect_vec(), vec![&1, &2, &3]);
    }

    #[test]
    fn all_empty_is_empty() {
        let nested: Vec<Vec<i32>> = vec![vec![], vec![], vec![]];
        let flat = view(&nested).flatten();
        assert!(flat.is_empty());
        assert_eq!(flat.size(), 0);
    }

    #[test]
    fn flattens_owned_inner_values() {
        let nested = view(vec![vec!['a', 'b'], vec![], vec!['c']]);
        let flat = nested.flatten();
        assert_eq!(flat.collect::<String>(), "abc");
    }

    #[test]
    fn take_stops_inside_an_inner_sequence() {
        let nested = vec![vec![1, 2, 3], vec![4, 5]];
        let flat = view(&nested).flatten().take(4);
        assert_eq!(flat.collect_vec(), vec![&1, &2, &3, &4]);
    }
}
