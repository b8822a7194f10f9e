//! Operations that drive a view to completion.
//!
//! Most of these are reached through the provided methods on
//! [`View`](crate::View). The free functions here cover the ones that take
//! more than one view, or no view at all.

pub(crate) mod collect;
pub(crate) mod compare;
mod difference;
pub(crate) mod find;

pub use collect::Collector;
pub use compare::equal;
pub use difference::difference;
pub use find::{find_key, first, second, KeyedLookup};
