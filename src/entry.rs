/// An immutable key-value pair stored in the [`SkipList`](crate::SkipList).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry<K, V> {
  key: K,
  value: V,
}

impl<K, V> Entry<K, V> {
  /// Creates a new entry.
  #[inline]
  pub const fn new(key: K, value: V) -> Self {
    Self { key, value }
  }

  /// Returns the key of the entry.
  #[inline]
  pub const fn key(&self) -> &K {
    &self.key
  }

  /// Returns the value of the entry.
  #[inline]
  pub const fn value(&self) -> &V {
    &self.value
  }

  /// Consumes the entry and returns the key and value.
  #[inline]
  pub fn into_parts(self) -> (K, V) {
    (self.key, self.value)
  }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
  #[inline]
  fn from((key, value): (K, V)) -> Self {
    Self::new(key, value)
  }
}

/// A reference to an entry in the [`SkipList`](crate::SkipList).
#[derive(Debug, PartialEq, Eq)]
pub struct EntryRef<'a, K, V>(pub(crate) &'a Entry<K, V>);

impl<K, V> Clone for EntryRef<'_, K, V> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<K, V> Copy for EntryRef<'_, K, V> {}

impl<'a, K, V> EntryRef<'a, K, V> {
  /// Returns the key of the entry.
  #[inline]
  pub const fn key(&self) -> &'a K {
    &self.0.key
  }

  /// Returns the value of the entry.
  #[inline]
  pub const fn value(&self) -> &'a V {
    &self.0.value
  }

  /// Returns the underlying entry.
  #[inline]
  pub const fn entry(&self) -> &'a Entry<K, V> {
    self.0
  }

  /// Clones the key and value into an owned [`Entry`].
  #[inline]
  pub fn to_entry(&self) -> Entry<K, V>
  where
    K: Clone,
    V: Clone,
  {
    self.0.clone()
  }
}
