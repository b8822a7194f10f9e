//! Left-to-right composition with `|`.
//!
//! ```
//! use lazyview::{pipe::*, view};
//!
//! let items = [1, 2, 3, 4, 5, 6];
//! let strings = view(&items)
//!     | filter(|x: &&i32| **x % 2 == 0)
//!     | map(|x: &i32| x.to_string())
//!     | collect_vec();
//! assert_eq!(strings, ["2", "4", "6"]);
//! ```
//!
//! The operator is only implemented for views. A plain container has to be
//! wrapped with [`view`](crate::view()) first.

use std::{marker::PhantomData, ops::BitOr};

use crate::{
    adaptor::{Filter, FilterMap, Flatten, Map, RefCounted, Repeat, Take},
    handle::{Owned, Seq, Slice},
    terminal::Collector,
    view::View,
};

/// One step of a pipeline, applied to the view on its left.
pub trait Stage<S> {
    type Output;

    fn apply(self, source: S) -> Self::Output;
}

pub struct MapStage<F>(F);

pub fn map<F>(f: F) -> MapStage<F> {
    MapStage(f)
}

impl<S, F> Stage<S> for MapStage<F>
where
    S: View,
{
    type Output = Map<S, F>;

    fn apply(self, source: S) -> Map<S, F> {
        Map::new(source, self.0)
    }
}

pub struct FilterStage<P>(P);

pub fn filter<P>(predicate: P) -> FilterStage<P> {
    FilterStage(predicate)
}

impl<S, P> Stage<S> for FilterStage<P>
where
    S: View,
{
    type Output = Filter<S, P>;

    fn apply(self, source: S) -> Filter<S, P> {
        Filter::new(source, self.0)
    }
}

pub struct FilterMapStage<G>(G);

pub fn filter_map<G>(g: G) -> FilterMapStage<G> {
    FilterMapStage(g)
}

impl<S, G> Stage<S> for FilterMapStage<G>
where
    S: View,
{
    type Output = FilterMap<S, G>;

    fn apply(self, source: S) -> FilterMap<S, G> {
        FilterMap::new(source, self.0)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TakeStage(usize);

pub fn take(count: usize) -> TakeStage {
    TakeStage(count)
}

impl<S> Stage<S> for TakeStage
where
    S: View,
{
    type Output = Take<S>;

    fn apply(self, source: S) -> Take<S> {
        Take::new(source, self.0)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FlattenStage;

pub fn flatten() -> FlattenStage {
    FlattenStage
}

impl<S> Stage<S> for FlattenStage
where
    S: View,
    S::Item: IntoIterator,
{
    type Output = Flatten<S>;

    fn apply(self, source: S) -> Flatten<S> {
        Flatten::new(source)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RepeatStage(usize);

pub fn repeat(count: usize) -> RepeatStage {
    RepeatStage(count)
}

impl<S> Stage<S> for RepeatStage
where
    S: View,
{
    type Output = Repeat<S>;

    fn apply(self, source: S) -> Repeat<S> {
        Repeat::new(source, self.0)
    }
}

pub struct CollectStage<C>(PhantomData<fn() -> C>);

/// Drains the pipeline into `C`.
pub fn collect<C>() -> CollectStage<C> {
    CollectStage(PhantomData)
}

impl<S, C> Stage<S> for CollectStage<C>
where
    S: View,
    C: Collector<Elem = S::Item>,
{
    type Output = C;

    fn apply(self, source: S) -> C {
        source.collect()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CollectVecStage;

pub fn collect_vec() -> CollectVecStage {
    CollectVecStage
}

impl<S> Stage<S> for CollectVecStage
where
    S: View,
{
    type Output = Vec<S::Item>;

    fn apply(self, source: S) -> Vec<S::Item> {
        source.collect_vec()
    }
}

pub struct ForEachStage<F>(F);

pub fn for_each<F>(f: F) -> ForEachStage<F> {
    ForEachStage(f)
}

impl<S, F> Stage<S> for ForEachStage<F>
where
    S: View,
    F: FnMut(S::Item),
{
    type Output = ();

    fn apply(self, source: S) {
        source.for_each(self.0);
    }
}

pub struct FoldStage<A, F> {
    init: A,
    op: F,
}

pub fn fold<A, F>(init: A, op: F) -> FoldStage<A, F> {
    FoldStage { init, op }
}

impl<S, A, F> Stage<S> for FoldStage<A, F>
where
    S: View,
    F: FnMut(A, S::Item) -> A,
{
    type Output = A;

    fn apply(self, source: S) -> A {
        source.fold(self.init, self.op)
    }
}

macro_rules! impl_pipe {
    ($($view:ident<$($param:tt),*>),* $(,)?) => {
        $(
            impl<$($param,)* Z> BitOr<Z> for $view<$($param),*>
            where
                Z: Stage<Self>,
            {
                type Output = Z::Output;

                fn bitor(self, stage: Z) -> Z::Output {
                    stage.apply(self)
                }
            }
        )*
    };
}

impl_pipe!(
    Slice<'a, T>,
    Seq<I>,
    Owned<T>,
    Map<S, F>,
    Filter<S, P>,
    FilterMap<S, G>,
    Take<S>,
    Flatten<S>,
    Repeat<S>,
    RefCounted<S>,
);

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::view::view;

    #[test]
    fn chains_left_to_right() {
        let items = [1, 2, 3, 4, 5, 6];
        let result = view(&items)
            | filter(|x: &&i32| **x > 2)
            | map(|x: &i32| x * 10)
            | take(2)
            | collect_vec();
        assert_eq!(result, vec![30, 40]);
    }

    #[test]
    fn stages_can_be_built_before_the_source() {
        let evens = filter(|x: &&i32| **x % 2 == 0);
        let items = vec![1, 2, 3, 4];
        let result: Vec<&i32> = view(&items) | evens | collect();
        assert_eq!(result, vec![&2, &4]);
    }

    #[test]
    fn terminal_stages() {
        let items = [1, 2, 3];
        let sum = view(&items) | fold(0, |acc: i32, x: &i32| acc + x);
        assert_eq!(sum, 6);

        let seen = RefCell::new(Vec::new());
        view(&items) | repeat(2) | for_each(|x: &i32| seen.borrow_mut().push(*x));
        assert_eq!(seen.into_inner(), vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn flatten_and_filter_map_stages() {
        let nested = vec![vec![1, 2], vec![], vec![3, 4]];
        let result = view(&nested)
            | flatten()
            | filter_map(|x: &i32| (*x != 3).then(|| x * x))
            | collect_vec();
        assert_eq!(result, vec![1, 4, 16]);
    }
}
