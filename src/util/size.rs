use std::cell::OnceCell;

/// A memoized sequence length.
///
/// The length is either known up front, or computed by the first caller of
/// [`SizeTracker::get_or_count`]. Once set it never changes.
#[derive(Clone, Debug, Default)]
pub struct SizeTracker(OnceCell<usize>);

impl SizeTracker {
    pub fn new() -> Self {
        SizeTracker(OnceCell::new())
    }

    pub fn known(size: usize) -> Self {
        SizeTracker(OnceCell::from(size))
    }

    pub fn get(&self) -> Option<usize> {
        self.0.get().copied()
    }

    pub fn get_or_count<F>(&self, count: F) -> usize
    where
        F: FnOnce() -> usize,
    {
        *self.0.get_or_init(|| {
            let size = count();
            tracing::trace!(size, "counted sequence length");
            size
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::test_utils::init_test_logging;

    #[test]
    fn counts_only_once() {
        init_test_logging();
        let calls = Cell::new(0);
        let tracker = SizeTracker::new();
        assert_eq!(tracker.get(), None);
        for _ in 0..3 {
            let size = tracker.get_or_count(|| {
                calls.set(calls.get() + 1);
                7
            });
            assert_eq!(size, 7);
        }
        assert_eq!(calls.get(), 1);
        assert_eq!(tracker.get(), Some(7));
    }

    #[test]
    fn known_size_skips_counting() {
        let tracker = SizeTracker::known(4);
        assert_eq!(tracker.get_or_count(|| unreachable!()), 4);
    }
}
