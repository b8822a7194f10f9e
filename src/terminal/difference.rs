use crate::{adaptor::Filter, view::View};

/// A lazy view over the elements of `lhs` that do not occur in `rhs`.
///
/// Each element of `lhs` is checked with a fresh scan of `rhs` when it is
/// reached, so `rhs` must stay unchanged while the result is traversed.
pub fn difference<L, R>(lhs: L, rhs: R) -> Filter<L, impl Fn(&L::Item) -> bool>
where
    L: View,
    R: View,
    R::Item: PartialEq<L::Item>,
{
    lhs.filter(move |item: &L::Item| !rhs.cursor().any(|other| other == *item))
}
