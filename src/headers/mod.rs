//! Case-insensitive HTTP Header Multimap.
mod map;

pub use map::HeaderMap;
pub use crate::strings::{Iter, Keys, TryReserveError};
