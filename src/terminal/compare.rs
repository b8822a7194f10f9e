use crate::view::View;

pub(crate) fn max_by<S, F>(view: &S, mut less: F) -> Option<S::Item>
where
    S: View + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut cursor = view.cursor();
    let mut best = cursor.next()?;
    for item in cursor {
        if less(&best, &item) {
            best = item;
        }
    }
    Some(best)
}

pub(crate) fn min_by<S, F>(view: &S, mut less: F) -> Option<S::Item>
where
    S: View + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut cursor = view.cursor();
    let mut best = cursor.next()?;
    for item in cursor {
        if less(&item, &best) {
            best = item;
        }
    }
    Some(best)
}

/// True when both views have the same length and pairwise equal elements.
pub fn equal<L, R>(lhs: &L, rhs: &R) -> bool
where
    L: View + ?Sized,
    R: View + ?Sized,
    L::Item: PartialEq<R::Item>,
{
    let mut left = lhs.cursor();
    let mut right = rhs.cursor();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a == b => {}
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{handle::Owned, view::view};

    #[test]
    fn extremes_of_a_view() {
        let items = [3, 9, 1, 9, 1];
        assert_eq!(view(&items).max(), Some(&9));
        assert_eq!(view(&items).min(), Some(&1));
    }

    #[test]
    fn extremes_of_empty_view_are_none() {
        let items: Vec<i32> = Vec::new();
        assert_eq!(view(&items).max(), None);
        assert_eq!(view(&items).min(), None);
    }

    #[test]
    fn ties_keep_the_first_element() {
        let items = [(1, 'a'), (3, 'b'), (0, 'c'), (3, 'd'), (0, 'e')];
        let by_key = |a: &&(i32, char), b: &&(i32, char)| a.0 < b.0;
        assert_eq!(view(&items).max_by(by_key), Some(&(3, 'b')));
        assert_eq!(view(&items).min_by(by_key), Some(&(0, 'c')));
    }

    #[test]
    fn extremes_over_a_pipeline() {
        let words: Owned<&str> = Owned::new(["pear", "fig", "banana"]);
        let lengths = words.map(|word| word.len());
        assert_eq!(lengths.max(), Some(6));
        assert_eq!(lengths.min(), Some(3));
    }

    #[test]
    fn equal_compares_length_and_elements() {
        let full = [1, 2, 3];
        let short = [1, 2];
        assert!(view(&full).equal(&view(&full)));
        assert!(!view(&full).equal(&view(&short)));
        assert!(!view(&short).equal(&view(&full)));
        assert!(!view(&full).equal(&view(&[1, 2, 4])));
    }

    #[test]
    fn equal_across_view_kinds() {
        let items = vec![2, 4, 6];
        let doubled = view(&[1, 2, 3]).map(|x| x * 2);
        assert!(equal(&doubled, &view(&items).cloned()));

        let empty: [i32; 0] = [];
        assert!(equal(&view(&empty), &view(&items).filter(|x| **x > 10)));
    }
}
