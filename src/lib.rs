//! Case-insensitive HTTP Header Multimap.
//!
//! [`HeaderMap`] looks up header names ignoring ASCII case, as required by RFC 7230, on top of
//! an ordered, case-sensitive [`StringsMap`]. It keeps the lookup rules expected by scripts
//! written against a string-to-strings header map.
//!
//! ```rust
//! use headermap_compat::HeaderMap;
//!
//! let mut map = HeaderMap::new();
//! map.add("Content-Type", "application/json");
//!
//! assert_eq!(map.get("content-type"), Some(&["application/json".to_owned()][..]));
//! assert!(!map.has_values("X-Missing"));
//! assert_eq!(map.get_or("X-Missing", "text/plain"), "text/plain");
//! ```
#![warn(missing_debug_implementations)]

mod log;
mod matches;

pub mod strings;
pub mod headers;

pub use strings::StringsMap;
pub use headers::HeaderMap;
