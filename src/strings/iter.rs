use super::{Entry, StringsMap};

impl<'a> IntoIterator for &'a StringsMap {
    type Item = <Iter<'a> as Iterator>::Item;

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over key and values pairs, in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    iter: std::slice::Iter<'a, Entry>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(entries: &'a [Entry]) -> Self {
        Self { iter: entries.iter() }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a [String]);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|e| (e.key(), e.values()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|e| (e.key(), e.values()))
    }
}

impl ExactSizeIterator for Iter<'_> { }

/// Iterator over keys, in insertion order.
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    iter: std::slice::Iter<'a, Entry>,
}

impl<'a> Keys<'a> {
    pub(crate) fn new(entries: &'a [Entry]) -> Self {
        Self { iter: entries.iter() }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(Entry::key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Keys<'_> { }
