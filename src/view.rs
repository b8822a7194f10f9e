//! The composable view capability.
//!
//! A view is an immutable description of a sequence. Each call to
//! [`View::cursor`] starts a fresh traversal which pulls elements one at a
//! time through every adaptor layered on top of the source. Nothing is
//! evaluated until a terminal operation drives a cursor.

use num_traits::{AsPrimitive, NumCast, ToPrimitive};

use crate::{
    adaptor::{Filter, FilterMap, Flatten, Map, Repeat, Take},
    error::Result,
    terminal::{collect, compare, find, Collector},
};

pub trait View {
    type Item;

    /// A traversal over every element of the view.
    type Cursor<'c>: Iterator<Item = Self::Item>
    where
        Self: 'c;

    /// A traversal over a bounded number of leading elements.
    ///
    /// Views over random-access storage bound this by index arithmetic.
    /// Forward-only views wrap their cursor in a [`Counted`](crate::adaptor::Counted).
    type Prefix<'c>: Iterator<Item = Self::Item>
    where
        Self: 'c;

    fn cursor(&self) -> Self::Cursor<'_>;

    fn prefix(&self, count: usize) -> Self::Prefix<'_>;

    /// The number of elements, or an upper bound on it for adaptors that
    /// may drop elements.
    fn size(&self) -> usize;

    /// An upper bound on the number of elements that is available without
    /// evaluating any element, if there is one.
    fn known_size(&self) -> Option<usize> {
        None
    }

    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    fn filter_map<G, U>(self, g: G) -> FilterMap<Self, G>
    where
        Self: Sized,
        G: Fn(Self::Item) -> Option<U>,
    {
        FilterMap::new(self, g)
    }

    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: IntoIterator,
    {
        Flatten::new(self)
    }

    fn repeat(self, count: usize) -> Repeat<Self>
    where
        Self: Sized,
    {
        Repeat::new(self, count)
    }

    /// Repeats the view `count` times, starting and ending at position `cut`.
    fn repeat_from(self, count: usize, cut: usize) -> Result<Repeat<Self>>
    where
        Self: Sized,
    {
        Repeat::with_cut(self, count, cut)
    }

    fn cloned<'a, T>(self) -> Map<Self, fn(&'a T) -> T>
    where
        Self: Sized + View<Item = &'a T>,
        T: Clone + 'a,
    {
        Map::new(self, T::clone as fn(&'a T) -> T)
    }

    fn collect<C>(&self) -> C
    where
        C: Collector<Elem = Self::Item>,
    {
        collect::collect_with(self, |item| item)
    }

    fn collect_vec(&self) -> Vec<Self::Item> {
        self.collect()
    }

    /// Collects into a container whose element type converts losslessly
    /// from this view's elements.
    fn collect_into<C>(&self) -> C
    where
        C: Collector,
        C::Elem: From<Self::Item>,
    {
        collect::collect_with(self, <C::Elem as From<Self::Item>>::from)
    }

    /// Collects numeric elements with `as`-style narrowing or widening.
    fn collect_as<C>(&self) -> C
    where
        C: Collector,
        C::Elem: Copy + 'static,
        Self::Item: AsPrimitive<C::Elem>,
    {
        collect::collect_with(self, |item| item.as_())
    }

    fn try_collect_as<C>(&self) -> Result<C>
    where
        C: Collector,
        C::Elem: NumCast,
        Self::Item: ToPrimitive,
    {
        collect::try_collect_cast(self)
    }

    fn extend_into<C>(&self, target: &mut C)
    where
        C: Extend<Self::Item>,
    {
        target.extend(self.cursor());
    }

    fn for_each<F>(&self, f: F)
    where
        F: FnMut(Self::Item),
    {
        self.cursor().for_each(f);
    }

    fn fold<A, F>(&self, init: A, op: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        self.cursor().fold(init, op)
    }

    /// The exact number of elements, found by a full traversal.
    fn len(&self) -> usize {
        self.cursor().count()
    }

    fn is_empty(&self) -> bool {
        self.cursor().next().is_none()
    }

    fn find<V>(&self, value: V) -> Option<Self::Item>
    where
        Self::Item: PartialEq<V>,
    {
        find::find_if(self, |item| *item == value)
    }

    fn find_if<P>(&self, predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        find::find_if(self, predicate)
    }

    fn find_first<P>(&self, predicate: P) -> Option<(usize, Self::Item)>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        find::find_first(self, predicate)
    }

    fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        find::find_first(self, predicate).map(|(index, _)| index)
    }

    /// Finds the first element whose projection equals `value`.
    fn find_by<V, W, P>(&self, value: W, projection: P) -> Option<Self::Item>
    where
        P: Fn(&Self::Item) -> &V,
        V: PartialEq<W> + ?Sized,
    {
        find::find_if(self, |item| *projection(item) == value)
    }

    fn contains<V>(&self, value: V) -> bool
    where
        Self::Item: PartialEq<V>,
    {
        self.find(value).is_some()
    }

    fn contains_by<V, W, P>(&self, value: W, projection: P) -> bool
    where
        P: Fn(&Self::Item) -> &V,
        V: PartialEq<W> + ?Sized,
    {
        self.find_by(value, projection).is_some()
    }

    fn max(&self) -> Option<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        compare::max_by(self, |a, b| a < b)
    }

    fn min(&self) -> Option<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        compare::min_by(self, |a, b| a < b)
    }

    /// The first greatest element under the strict ordering `less`.
    fn max_by<F>(&self, less: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        compare::max_by(self, less)
    }

    /// The first least element under the strict ordering `less`.
    fn min_by<F>(&self, less: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        compare::min_by(self, less)
    }

    fn equal<R>(&self, other: &R) -> bool
    where
        R: View + ?Sized,
        Self::Item: PartialEq<R::Item>,
    {
        compare::equal(self, other)
    }
}

/// Sources that can be wrapped in a view.
pub trait IntoView {
    type View: View;

    fn into_view(self) -> Self::View;
}

pub fn view<R>(source: R) -> R::View
where
    R: IntoView,
{
    source.into_view()
}
