use crate::matches;

/// Strings map entry.
///
/// Contains a key, in the exact casing it was inserted with, and its ordered values.
#[derive(Clone, PartialEq, Eq)]
pub struct Entry {
    /// lowercase-folded hash of `key`
    hash: u64,
    key: String,
    values: Vec<String>,
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("values", &self.values)
            .finish()
    }
}

impl Entry {
    pub(crate) fn new(key: String, values: Vec<String>) -> Self {
        Self {
            hash: matches::hash_to_lowercase(key.as_bytes()),
            key,
            values,
        }
    }

    /// Returns the key as inserted.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the values in insertion order.
    #[inline]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns `true` if the entry holds at least one value.
    #[inline]
    pub fn has_values(&self) -> bool {
        !self.values.is_empty()
    }

    #[inline]
    pub(crate) fn values_mut(&mut self) -> &mut Vec<String> {
        &mut self.values
    }

    #[inline]
    pub(crate) fn push(&mut self, value: String) {
        self.values.push(value);
    }

    pub(crate) fn replace(&mut self, values: Vec<String>) -> Vec<String> {
        std::mem::replace(&mut self.values, values)
    }

    /// `hash` must be [`matches::hash_to_lowercase`] of `key`.
    #[inline]
    pub(crate) fn eq_hash_ignore_case(&self, hash: u64, key: &str) -> bool {
        self.hash == hash && matches::eq_ignore_case(self.key.as_bytes(), key.as_bytes())
    }

    /// Consume [`Entry`] into key and values.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.key, self.values)
    }
}
