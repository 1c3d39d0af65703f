use crate::{
    log, matches,
    strings::{Iter, Keys, StringsMap, TryReserveError},
};

/// HTTP Headers Multimap with case-insensitive lookup.
///
/// Header names are compared ignoring ASCII case, as specified by RFC 7230. The casing used
/// when a header is first added is kept as its stored name.
///
/// Storage is delegated to a case-sensitive [`StringsMap`], so entries whose names differ only
/// in case can coexist when they are put there directly. Lookups then resolve to the first of
/// them, in insertion order, that holds a value.
///
/// The map is a plain value without interior synchronization, one is expected to be built per
/// request, response, or script execution.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    strings: StringsMap,
}

impl HeaderMap {
    /// Create new empty [`HeaderMap`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            strings: StringsMap::new(),
        }
    }

    /// Create new empty [`HeaderMap`] with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            strings: StringsMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries, including entries without values.
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns `true` if headers has no entry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Returns the underlying [`StringsMap`].
    #[inline]
    pub fn as_strings(&self) -> &StringsMap {
        &self.strings
    }

    /// Consume [`HeaderMap`] into the underlying [`StringsMap`].
    #[inline]
    pub fn into_strings(self) -> StringsMap {
        self.strings
    }
}

impl From<StringsMap> for HeaderMap {
    #[inline]
    fn from(strings: StringsMap) -> Self {
        Self { strings }
    }
}

// ===== Lookup =====

impl HeaderMap {
    /// Returns the values of the first header matching `name` ignoring ASCII case.
    ///
    /// Matching entries without values are skipped, so a header that is present but empty is
    /// reported as absent.
    ///
    /// ```rust
    /// use headermap_compat::HeaderMap;
    ///
    /// let mut map = HeaderMap::new();
    /// map.add("Content-Type", "text/html");
    ///
    /// assert_eq!(map.get("content-type").unwrap(), ["text/html"]);
    /// assert_eq!(map.get("CONTENT-TYPE").unwrap(), ["text/html"]);
    /// assert!(map.get("accept").is_none());
    /// ```
    pub fn get(&self, name: &str) -> Option<&[String]> {
        let hash = matches::hash_to_lowercase(name.as_bytes());
        self.strings
            .entries()
            .iter()
            .find(|e| e.eq_hash_ignore_case(hash, name) && e.has_values())
            .map(|e| e.values())
    }

    /// Returns `true` if a header matching `name` ignoring ASCII case holds at least one value.
    pub fn has_values(&self, name: &str) -> bool {
        self.strings.contains_key_ignore_case(name) && self.get(name).is_some_and(|v| !v.is_empty())
    }

    /// Returns the first value of a header matching `name` ignoring ASCII case, or `default`.
    #[inline]
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.strings.get_case_insensitive(name, default)
    }

    /// Returns `true` if a header matching `name` ignoring ASCII case is present, with or
    /// without values.
    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.strings.contains_key_ignore_case(name)
    }

    /// Returns an iterator over header names and values, in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        self.strings.iter()
    }

    /// Returns an iterator over header names as stored, in insertion order.
    #[inline]
    pub fn keys(&self) -> Keys<'_> {
        self.strings.keys()
    }
}

// ===== Mutation =====

impl HeaderMap {
    /// Append a value to the header matching `name` ignoring ASCII case.
    ///
    /// If no header matches, a new entry is created under `name` exactly as given. Otherwise the
    /// value goes to the entry [`get`][HeaderMap::get] would return, or, when every match is
    /// empty, to the first match.
    ///
    /// ```rust
    /// use headermap_compat::HeaderMap;
    ///
    /// let mut map = HeaderMap::new();
    /// map.add("X-Count", "1");
    /// map.add("x-count", "2");
    ///
    /// assert_eq!(map.get("X-COUNT").unwrap(), ["1", "2"]);
    /// assert_eq!(map.keys().collect::<Vec<_>>(), ["X-Count"]);
    /// ```
    pub fn add<V: Into<String>>(&mut self, name: &str, value: V) {
        let hash = matches::hash_to_lowercase(name.as_bytes());
        let entries = self.strings.entries_mut();

        let index = entries
            .iter()
            .position(|e| e.eq_hash_ignore_case(hash, name) && e.has_values())
            .or_else(|| entries.iter().position(|e| e.eq_hash_ignore_case(hash, name)));

        match index {
            Some(index) => entries[index].push(value.into()),
            None => {
                log::debug!("new header {name:?}");
                self.strings.put(name, vec![value.into()]);
            }
        }
    }

    /// Tries to reserve capacity for at least `additional` more headers.
    ///
    /// # Errors
    ///
    /// Returns error if the capacity overflows or the allocator reports a failure.
    #[inline]
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.strings.try_reserve(additional)
    }
}

impl<K: AsRef<str>, V: Into<String>> Extend<(K, V)> for HeaderMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.add(name.as_ref(), value);
        }
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for HeaderMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = HeaderMap::new();
        map.extend(iter);
        map
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = <Iter<'a> as Iterator>::Item;

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
