use std::{cell::Cell, rc::Rc};

use crate::view::View;

#[derive(Debug, Default)]
struct Registry {
    live: Cell<usize>,
    peak: Cell<usize>,
}

impl Registry {
    fn register(&self) {
        let live = self.live.get() + 1;
        self.live.set(live);
        self.peak.set(self.peak.get().max(live));
    }

    fn release(&self) {
        let live = self.live.get();
        debug_assert!(live > 0, "released an unregistered view");
        self.live.set(live.saturating_sub(1));
    }
}

/// Counts the views that are currently alive over a borrowed source.
///
/// The owner of the storage can check [`ViewCounter::is_zero`] before
/// freeing or mutating it.
#[derive(Clone, Debug, Default)]
pub struct ViewCounter(Rc<Registry>);

impl ViewCounter {
    pub fn new() -> Self {
        ViewCounter(Rc::default())
    }

    pub fn track<S>(&self, source: S) -> RefCounted<S>
    where
        S: View,
    {
        RefCounted::new(self, source)
    }

    pub fn live(&self) -> usize {
        self.0.live.get()
    }

    /// The most views that were alive at the same time.
    pub fn peak(&self) -> usize {
        self.0.peak.get()
    }

    pub fn is_zero(&self) -> bool {
        self.live() == 0
    }
}

/// A view that behaves exactly like its source while registered with a
/// [`ViewCounter`].
#[derive(Debug)]
pub struct RefCounted<S> {
    source: S,
    registry: Rc<Registry>,
}

impl<S> RefCounted<S> {
    pub fn new(counter: &ViewCounter, source: S) -> Self {
        counter.0.register();
        RefCounted {
            source,
            registry: counter.0.clone(),
        }
    }
}

impl<S> Clone for RefCounted<S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        self.registry.register();
        RefCounted {
            source: self.source.clone(),
            registry: self.registry.clone(),
        }
    }
}

impl<S> Drop for RefCounted<S> {
    fn drop(&mut self) {
        self.registry.release();
        tracing::trace!(live = self.registry.live.get(), "dropped counted view");
    }
}

impl<S> View for RefCounted<S>
where
    S: View,
{
    type Item = S::Item;
    type Cursor<'c> = S::Cursor<'c> where Self: 'c;
    type Prefix<'c> = S::Prefix<'c> where Self: 'c;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.source.cursor()
    }

    fn prefix(&self, count: usize) -> Self::Prefix<'_> {
        self.source.prefix(count)
    }

    fn size(&self) -> usize {
        self.source.size()
    }

    fn known_size(&self) -> Option<usize> {
        self.source.known_size()
    }
}
