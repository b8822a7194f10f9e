//! Lazy, composable views over sequences.
//!
//! A pipeline starts from a handle created with [`view`] (borrowed storage)
//! or [`Owned`] (a buffer the view keeps), layers adaptors such as
//! [`View::map`] or [`View::take`] on top, and ends in a terminal operation
//! like [`View::collect`] or [`View::fold`]. Adaptors do no work when they
//! are built. Elements are pulled one at a time when a terminal operation
//! drives the outermost cursor.
//!
//! ```
//! use lazyview::{view, View};
//!
//! let items = [1, 2, 3, 4, 5, 6];
//! let evens: Vec<String> = view(&items)
//!     .filter(|x| **x % 2 == 0)
//!     .map(|x| x.to_string())
//!     .collect();
//! assert_eq!(evens, ["2", "4", "6"]);
//! ```

pub mod adaptor;
pub mod error;
pub mod handle;
pub mod pipe;
pub mod terminal;
pub mod util;
mod view;

pub use error::{Error, Result};
pub use handle::{Owned, Seq, Slice};
pub use view::{view, IntoView, View};


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_over_owned_buffer_outlives_its_source() {
        test_utils::init_test_logging();
        let owned = {
            let transient: Vec<i32> = (1..=5).collect();
            Owned::from(transient)
        };
        let squares = owned.map(|x| x * x).filter(|x| *x > 4);
        assert_eq!(squares.collect_vec(), vec![9, 16, 25]);
        assert_eq!(squares.size(), 5);
    }
}
