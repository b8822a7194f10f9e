//! Lazy adaptors. Each one owns its upstream view and its callable, and
//! hands out cursors that borrow both.

mod filter;
mod filter_map;
mod flatten;
mod map;
mod refcount;
mod repeat;
mod take;

pub use filter::{Filter, FilterCursor};
pub use filter_map::{FilterMap, FilterMapCursor};
pub use flatten::{Flatten, FlattenCursor};
pub use map::{Map, MapCursor};
pub use refcount::{RefCounted, ViewCounter};
pub use repeat::{Repeat, RepeatCursor};
pub use take::{Counted, Take};
