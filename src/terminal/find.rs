use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use crate::view::View;

pub(crate) fn find_if<S, P>(view: &S, mut predicate: P) -> Option<S::Item>
where
    S: View + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    view.cursor().find(|item| predicate(item))
}

pub(crate) fn find_first<S, P>(view: &S, mut predicate: P) -> Option<(usize, S::Item)>
where
    S: View + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    for (index, item) in view.cursor().enumerate() {
        if predicate(&item) {
            return Some((index, item));
        }
    }
    None
}

/// Containers with a keyed lookup that beats a linear scan.
pub trait KeyedLookup<Q>
where
    Q: ?Sized,
{
    type Key;
    type Value;

    fn lookup(&self, key: &Q) -> Option<(&Self::Key, &Self::Value)>;
}

impl<K, V, Q, S> KeyedLookup<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<(&K, &V)> {
        self.get_key_value(key)
    }
}

impl<K, V, Q> KeyedLookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<(&K, &V)> {
        self.get_key_value(key)
    }
}

/// Finds the entry for `key`: constant time for hash maps, logarithmic for
/// ordered maps.
pub fn find_key<'m, M, Q>(map: &'m M, key: &Q) -> Option<(&'m M::Key, &'m M::Value)>
where
    M: KeyedLookup<Q>,
    Q: ?Sized,
{
    map.lookup(key)
}

pub fn first<A, B>(pair: &(A, B)) -> &A {
    &pair.0
}

pub fn second<A, B>(pair: &(A, B)) -> &B {
    &pair.1
}
