use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque},
    hash::{BuildHasher, Hash},
};

use num_traits::{NumCast, ToPrimitive};

use crate::{
    error::{Error, Result},
    view::View,
};

/// A container a pipeline can be drained into.
pub trait Collector: Default {
    type Elem;

    /// Whether capacity can be reserved up front. When set, the view's
    /// [`known_size`](View::known_size) is queried once before the elements
    /// are transferred. Views that cannot bound themselves without a
    /// traversal are collected without a reservation.
    const RESERVES: bool = false;

    fn with_capacity(_capacity: usize) -> Self {
        Self::default()
    }

    fn put(&mut self, elem: Self::Elem);
}

impl<T> Collector for Vec<T> {
    type Elem = T;
    const RESERVES: bool = true;

    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn put(&mut self, elem: T) {
        self.push(elem);
    }
}

impl<T> Collector for VecDeque<T> {
    type Elem = T;
    const RESERVES: bool = true;

    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    fn put(&mut self, elem: T) {
        self.push_back(elem);
    }
}

impl<T> Collector for LinkedList<T> {
    type Elem = T;

    fn put(&mut self, elem: T) {
        self.push_back(elem);
    }
}

impl Collector for String {
    type Elem = char;
    const RESERVES: bool = true;

    fn with_capacity(capacity: usize) -> Self {
        String::with_capacity(capacity)
    }

    fn put(&mut self, elem: char) {
        self.push(elem);
    }
}

impl<T, S> Collector for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    type Elem = T;
    const RESERVES: bool = true;

    fn with_capacity(capacity: usize) -> Self {
        HashSet::with_capacity_and_hasher(capacity, S::default())
    }

    fn put(&mut self, elem: T) {
        self.insert(elem);
    }
}

impl<T> Collector for BTreeSet<T>
where
    T: Ord,
{
    type Elem = T;

    fn put(&mut self, elem: T) {
        self.insert(elem);
    }
}

impl<K, V, S> Collector for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Elem = (K, V);
    const RESERVES: bool = true;

    fn with_capacity(capacity: usize) -> Self {
        HashMap::with_capacity_and_hasher(capacity, S::default())
    }

    fn put(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

impl<K, V> Collector for BTreeMap<K, V>
where
    K: Ord,
{
    type Elem = (K, V);

    fn put(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

fn start<S, C>(view: &S) -> C
where
    S: View + ?Sized,
    C: Collector,
{
    if !C::RESERVES {
        return C::default();
    }
    match view.known_size() {
        Some(size) => {
            tracing::trace!(size, "reserving collect capacity");
            C::with_capacity(size)
        }
        None => C::default(),
    }
}

pub(crate) fn collect_with<S, C, F>(view: &S, mut convert: F) -> C
where
    S: View + ?Sized,
    C: Collector,
    F: FnMut(S::Item) -> C::Elem,
{
    let mut output: C = start(view);
    for item in view.cursor() {
        output.put(convert(item));
    }
    output
}

pub(crate) fn try_collect_cast<S, C>(view: &S) -> Result<C>
where
    S: View + ?Sized,
    S::Item: ToPrimitive,
    C: Collector,
    C::Elem: NumCast,
{
    let mut output: C = start(view);
    for (index, item) in view.cursor().enumerate() {
        let elem = <C::Elem as NumCast>::from(item).ok_or(Error::Conversion { index })?;
        output.put(elem);
    }
    Ok(output)
}
