//! Error types that can occur during strings map operation.

/// An error that can occur when performing allocation in [`StringsMap`].
///
/// [`StringsMap`]: crate::strings::StringsMap
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct TryReserveError {
    additional: usize,
}

impl TryReserveError {
    pub(crate) const fn new(additional: usize) -> Self {
        Self { additional }
    }

    /// Returns the number of entries that was requested.
    pub const fn additional(&self) -> usize {
        self.additional
    }
}

impl std::error::Error for TryReserveError {}

impl std::fmt::Display for TryReserveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "strings map capacity exceeded reserving {} entries", self.additional)
    }
}
