//! Sequence handles: the views every pipeline starts from.
//!
//! [`Slice`] and [`Seq`] borrow caller-owned storage and must not outlive
//! it. [`Owned`] holds its own buffer and can be returned from the
//! expression that built it.

mod owned;
mod seq;
mod slice;

pub use owned::Owned;
pub use seq::Seq;
pub use slice::Slice;
