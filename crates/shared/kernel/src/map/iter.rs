use super::Slot;
use enumkit_domain::{Constant, Enumeration};
use std::fmt;
use std::iter::{FusedIterator, Zip};
use std::slice;

/// Iterator over the mapped `(key, value)` pairs of an [`EnumMap`](super::EnumMap), in
/// ordinal order. Returned by [`EnumMap::iter`](super::EnumMap::iter).
pub struct Iter<'a, K: 'static, V> {
    inner: Zip<slice::Iter<'static, &'static Constant<K>>, slice::Iter<'a, Slot<V>>>,
    remaining: usize,
}

impl<'a, K: Enumeration, V> Iter<'a, K, V> {
    pub(super) fn new(keys: &'static [&'static Constant<K>], slots: &'a [Slot<V>], size: usize) -> Self {
        Self { inner: keys.iter().zip(slots), remaining: size }
    }
}

impl<'a, K: Enumeration, V> Iterator for Iter<'a, K, V> {
    type Item = (&'static Constant<K>, Option<&'a V>);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.find_map(|(key, slot)| slot.entry().map(|value| (*key, value)))?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Enumeration, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K: Enumeration, V> FusedIterator for Iter<'_, K, V> {}

impl<K: Enumeration, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone(), remaining: self.remaining }
    }
}

impl<K: 'static, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.remaining).finish_non_exhaustive()
    }
}

/// Iterator over the mapped keys of an [`EnumMap`](super::EnumMap).
pub struct Keys<'a, K: 'static, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K: Enumeration, V> Keys<'a, K, V> {
    pub(super) const fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<K: Enumeration, V> Iterator for Keys<'_, K, V> {
    type Item = &'static Constant<K>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Enumeration, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K: Enumeration, V> FusedIterator for Keys<'_, K, V> {}

impl<K: 'static, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys").field("remaining", &self.inner.remaining).finish()
    }
}

/// Iterator over the stored values of an [`EnumMap`](super::EnumMap); `None` is a stored null.
pub struct Values<'a, K: 'static, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K: Enumeration, V> Values<'a, K, V> {
    pub(super) const fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K: Enumeration, V> Iterator for Values<'a, K, V> {
    type Item = Option<&'a V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Enumeration, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K: Enumeration, V> FusedIterator for Values<'_, K, V> {}

impl<K: 'static, V> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values").field("remaining", &self.inner.remaining).finish()
    }
}
