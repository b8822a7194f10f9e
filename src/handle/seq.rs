use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use crate::{
    adaptor::Counted,
    util::size::SizeTracker,
    view::{IntoView, View},
};

/// A borrowed view over a forward-only cursor.
///
/// The cursor is cloned to start each traversal, so it plays the role of a
/// begin position that knows its own end. Its length is taken from an exact
/// `size_hint` when the cursor reports one, and is otherwise counted the
/// first time it is needed.
#[derive(Clone, Debug)]
pub struct Seq<I> {
    begin: I,
    size: SizeTracker,
}

impl<I> Seq<I>
where
    I: Iterator + Clone,
{
    pub fn new(begin: I) -> Self {
        let size = match begin.size_hint() {
            (lower, Some(upper)) if lower == upper => SizeTracker::known(lower),
            _ => SizeTracker::new(),
        };
        Seq { begin, size }
    }
}

impl<I> View for Seq<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;
    type Cursor<'c> = I where Self: 'c;
    type Prefix<'c> = Counted<I> where Self: 'c;

    fn cursor(&self) -> I {
        self.begin.clone()
    }

    fn prefix(&self, count: usize) -> Counted<I> {
        Counted::new(self.begin.clone(), count)
    }

    fn size(&self) -> usize {
        self.size.get_or_count(|| self.begin.clone().count())
    }

    fn known_size(&self) -> Option<usize> {
        self.size.get()
    }
}

macro_rules! borrowed_seq {
    ($($container:ident<$($param:ident),*> => $iter:ty),* $(,)?) => {
        $(
            impl<'a, $($param),*> IntoView for &'a $container<$($param),*> {
                type View = Seq<$iter>;

                fn into_view(self) -> Self::View {
                    Seq::new(self.iter())
                }
            }
        )*
    };
}

borrowed_seq!(
    VecDeque<T> => std::collections::vec_deque::Iter<'a, T>,
    LinkedList<T> => std::collections::linked_list::Iter<'a, T>,
    BTreeSet<T> => std::collections::btree_set::Iter<'a, T>,
    HashSet<T, S> => std::collections::hash_set::Iter<'a, T>,
    BTreeMap<K, V> => std::collections::btree_map::Iter<'a, K, V>,
    HashMap<K, V, S> => std::collections::hash_map::Iter<'a, K, V>,
);

#[cfg(test)]
mod tests {
    use std::collections::LinkedList;

    use super::*;
    use crate::view::view;

    #[test]
    fn exact_hint_is_used_without_counting() {
        let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        let seq = view(&list);
        assert_eq!(seq.size.get(), Some(3));
        assert_eq!(seq.size(), 3);
    }

    #[test]
    fn inexact_hint_is_counted_once_and_cached() {
        let seq = Seq::new("héllo".chars());
        assert_eq!(seq.size.get(), None);
        assert_eq!(seq.size(), 5);
        assert_eq!(seq.size.get(), Some(5));
        assert_eq!(seq.collect::<String>(), "héllo");
    }

    #[test]
    fn each_cursor_starts_over() {
        let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
        let seq = view(&set);
        assert_eq!(seq.collect_vec(), vec![&1, &2, &3]);
        assert_eq!(seq.collect_vec(), vec![&1, &2, &3]);
    }

    #[test]
    fn prefix_counts_down() {
        let deque: VecDeque<i32> = (1..=5).collect();
        let seq = view(&deque);
        assert_eq!(seq.prefix(2).collect::<Vec<_>>(), vec![&1, &2]);
        assert_eq!(seq.prefix(9).count(), 5);
    }
}
