use core::iter::FusedIterator;

use slab::Slab;

use crate::{
  node::{Node, NodeId},
  EntryRef,
};

/// An iterator over the entries of a [`SkipList`](crate::SkipList) in ascending key order.
///
/// The iterator walks level 0 from the first node and can be cloned to
/// remember a position.
pub struct Iter<'a, K, V> {
  arena: &'a Slab<Node<K, V>>,
  next: Option<NodeId>,
  remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
  #[inline]
  pub(crate) fn new(arena: &'a Slab<Node<K, V>>, first: Option<NodeId>) -> Self {
    Self {
      arena,
      next: first,
      remaining: arena.len(),
    }
  }
}

impl<K, V> Clone for Iter<'_, K, V> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      arena: self.arena,
      next: self.next,
      remaining: self.remaining,
    }
  }
}

impl<K, V> core::fmt::Debug for Iter<'_, K, V> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Iter")
      .field("remaining", &self.remaining)
      .finish()
  }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
  type Item = EntryRef<'a, K, V>;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let id = self.next?;
    let node = &self.arena[id];
    self.next = node.next(0);
    self.remaining -= 1;
    Some(EntryRef(node.entry()))
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
