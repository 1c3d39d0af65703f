//! Ordered, case-sensitive string-to-strings multimap.
mod entry;
mod map;
mod iter;
pub mod error;

pub use entry::Entry;
pub use map::StringsMap;
pub use iter::{Iter, Keys};
pub use error::TryReserveError;
