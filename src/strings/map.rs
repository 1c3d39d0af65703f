use super::{
    Entry,
    error::TryReserveError,
    iter::{Iter, Keys},
};
use crate::{log, matches};

/// Ordered string to strings multimap.
///
/// Keys are unique by exact string equality, entries keep insertion order, and each key maps to
/// an ordered list of values which may contain duplicates or be empty.
///
/// Case-insensitive operations are provided as primitives, but they never merge entries whose
/// keys differ only in case.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StringsMap {
    entries: Vec<Entry>,
}

impl StringsMap {
    /// Create new empty [`StringsMap`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Create new empty [`StringsMap`] with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the total number of values across all entries.
    pub fn value_count(&self) -> usize {
        self.entries.iter().map(|e| e.values().len()).sum()
    }

    /// Returns the entries in insertion order.
    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub(crate) fn entries_mut(&mut self) -> &mut [Entry] {
        &mut self.entries
    }

    /// Returns an iterator over key and values pairs, in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.entries)
    }

    /// Returns an iterator over keys, in insertion order.
    #[inline]
    pub fn keys(&self) -> Keys<'_> {
        Keys::new(&self.entries)
    }
}

// ===== Lookup =====

impl StringsMap {
    /// Returns `true` if an entry exists with exactly `key`.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Returns `true` if an entry exists whose key equals `key` ignoring ASCII case.
    pub fn contains_key_ignore_case(&self, key: &str) -> bool {
        let hash = matches::hash_to_lowercase(key.as_bytes());
        self.entries.iter().any(|e| e.eq_hash_ignore_case(hash, key))
    }

    /// Returns the values stored under exactly `key`.
    #[inline]
    pub fn get_exact(&self, key: &str) -> Option<&[String]> {
        self.position(key).map(|i| self.entries[i].values())
    }

    /// Returns a mutable reference to the values stored under exactly `key`.
    #[inline]
    pub fn get_exact_mut(&mut self, key: &str) -> Option<&mut Vec<String>> {
        let index = self.position(key)?;
        Some(self.entries[index].values_mut())
    }

    /// Returns the first value of the first entry matching `key` ignoring ASCII case.
    ///
    /// Matching entries without values are skipped. If no entry qualifies, `default` is
    /// returned.
    ///
    /// ```rust
    /// use headermap_compat::StringsMap;
    ///
    /// let mut map = StringsMap::new();
    /// map.put("Accept", vec!["text/html".into(), "*/*".into()]);
    ///
    /// assert_eq!(map.get_case_insensitive("ACCEPT", "none"), "text/html");
    /// assert_eq!(map.get_case_insensitive("Host", "none"), "none");
    /// ```
    pub fn get_case_insensitive<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        let hash = matches::hash_to_lowercase(key.as_bytes());
        self.entries
            .iter()
            .filter(|e| e.eq_hash_ignore_case(hash, key))
            .find_map(|e| e.values().first())
            .map_or(default, String::as_str)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key() == key)
    }
}

// ===== Mutation =====

impl StringsMap {
    /// Inserts values under exactly `key`.
    ///
    /// If the map did have this key present, the values are replaced in place, keeping the
    /// entry's position, and the old values are returned.
    ///
    /// If the map did not have this key present, a new entry is appended and [`None`] is
    /// returned.
    pub fn put<K: Into<String>>(&mut self, key: K, values: Vec<String>) -> Option<Vec<String>> {
        let key = key.into();
        match self.position(&key) {
            Some(index) => Some(self.entries[index].replace(values)),
            None => {
                log::trace!("new entry {key:?}");
                self.entries.push(Entry::new(key, values));
                None
            }
        }
    }

    /// Replace the values under exactly `key` with a single value.
    #[inline]
    pub fn put_single<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> Option<Vec<String>> {
        self.put(key, vec![value.into()])
    }

    /// Tries to reserve capacity for at least `additional` more entries.
    ///
    /// # Errors
    ///
    /// Returns error if the capacity overflows or the allocator reports a failure.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        match self.entries.try_reserve(additional) {
            Ok(()) => Ok(()),
            Err(_) => {
                log::warning!("failed to reserve {additional} entries");
                Err(TryReserveError::new(additional))
            }
        }
    }

    /// Clear the map, removing all entries.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl std::fmt::Debug for StringsMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|&v| v.to_owned()).collect()
    }

    #[test]
    fn strings_map() {
        let mut map = StringsMap::new();
        assert!(map.is_empty());
        assert!(!map.contains_key("Host"));
        assert!(!map.contains_key_ignore_case("host"));
        assert_eq!(map.get_case_insensitive("Host", "none"), "none");

        assert!(map.put("Host", strings(&["example.com"])).is_none());
        assert!(map.put("Accept", strings(&["text/html", "*/*"])).is_none());

        assert_eq!(map.len(), 2);
        assert_eq!(map.value_count(), 3);

        // exact
        assert!(map.contains_key("Host"));
        assert!(!map.contains_key("host"));
        assert_eq!(map.get_exact("Accept"), Some(&strings(&["text/html", "*/*"])[..]));
        assert!(map.get_exact("accept").is_none());

        // ignore case
        assert!(map.contains_key_ignore_case("HOST"));
        assert!(map.contains_key_ignore_case("accept"));
        assert!(!map.contains_key_ignore_case("accepts"));
        assert_eq!(map.get_case_insensitive("aCCEPT", "none"), "text/html");

        // Replace keeps position

        let old = map.put("Host", strings(&["example.org"]));
        assert_eq!(old, Some(strings(&["example.com"])));
        assert_eq!(map.keys().collect::<Vec<_>>(), ["Host", "Accept"]);
        assert_eq!(map.get_exact("Host"), Some(&strings(&["example.org"])[..]));

        map.put_single("Accept", "application/json");
        assert_eq!(map.get_exact("Accept"), Some(&strings(&["application/json"])[..]));

        map.get_exact_mut("Accept").unwrap().push("text/plain".to_owned());
        assert_eq!(map.value_count(), 3);

        // Clear

        map.clear();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert!(!map.contains_key("Host"));
    }

    #[test]
    fn case_variants_are_separate_entries() {
        let mut map = StringsMap::new();
        map.put("X-Count", Vec::new());
        map.put("x-count", strings(&["2"]));

        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["X-Count", "x-count"]);

        // the empty first match is skipped
        assert_eq!(map.get_case_insensitive("X-COUNT", "none"), "2");
    }

    #[test]
    fn iteration_order() {
        let mut map = StringsMap::with_capacity(4);
        map.put("b", strings(&["1"]));
        map.put("a", strings(&["2", "3"]));
        map.put("c", Vec::new());

        let pairs = map.iter().collect::<Vec<_>>();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], ("b", &strings(&["1"])[..]));
        assert_eq!(pairs[1], ("a", &strings(&["2", "3"])[..]));
        assert_eq!(pairs[2], ("c", &[][..]));

        assert_eq!(map.iter().rev().next().map(|(k, _)| k), Some("c"));
        assert_eq!(map.entries()[1].key(), "a");
        assert!(!map.entries()[2].has_values());

        assert_eq!(format!("{map:?}"), r#"{"b": ["1"], "a": ["2", "3"], "c": []}"#);
    }

    #[test]
    fn reserve() {
        let mut map = StringsMap::new();
        assert!(map.try_reserve(8).is_ok());

        let err = map.try_reserve(usize::MAX).unwrap_err();
        assert_eq!(err.additional(), usize::MAX);
        assert!(err.to_string().contains("capacity exceeded"));
    }
}
