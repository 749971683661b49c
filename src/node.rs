use std::vec::Vec;

use crate::Entry;

/// Key of a node slot in the list's [`Slab`](slab::Slab).
///
/// A key stays valid until its node is removed; the slot may then be handed
/// out again to a later insert.
pub(crate) type NodeId = usize;

/// A data-bearing node.
///
/// The tower holds one forward link per level the node occupies, so a node of
/// level `L` has exactly `L + 1` links. The level is fixed at creation.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
  entry: Entry<K, V>,
  tower: Vec<Option<NodeId>>,
}

impl<K, V> Node<K, V> {
  #[inline]
  pub(crate) fn new(entry: Entry<K, V>, tower: Vec<Option<NodeId>>) -> Self {
    debug_assert!(!tower.is_empty());
    Self { entry, tower }
  }

  #[inline]
  pub(crate) const fn entry(&self) -> &Entry<K, V> {
    &self.entry
  }

  #[inline]
  pub(crate) fn into_entry(self) -> Entry<K, V> {
    self.entry
  }

  #[inline]
  pub(crate) fn level(&self) -> usize {
    self.tower.len() - 1
  }

  #[inline]
  pub(crate) fn next(&self, level: usize) -> Option<NodeId> {
    self.tower[level]
  }

  #[inline]
  pub(crate) fn set_next(&mut self, level: usize, next: Option<NodeId>) {
    self.tower[level] = next;
  }
}

/// The sentinel anchoring every level. It carries no entry, so it can never
/// take part in a key comparison.
#[derive(Debug)]
pub(crate) struct Head {
  tower: Vec<Option<NodeId>>,
}

impl Default for Head {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Head {
  #[inline]
  pub(crate) fn new() -> Self {
    Self {
      tower: std::vec![None],
    }
  }

  #[inline]
  pub(crate) fn level(&self) -> usize {
    self.tower.len() - 1
  }

  #[inline]
  pub(crate) fn next(&self, level: usize) -> Option<NodeId> {
    self.tower[level]
  }

  #[inline]
  pub(crate) fn set_next(&mut self, level: usize, next: Option<NodeId>) {
    self.tower[level] = next;
  }

  /// Builds a taller head carrying over the links of every existing level.
  /// The new top levels start out empty.
  pub(crate) fn grow(&self, level: usize) -> Self {
    debug_assert!(level > self.level());
    let mut tower = Vec::with_capacity(level + 1);
    tower.extend_from_slice(&self.tower);
    tower.resize(level + 1, None);
    Self { tower }
  }
}

/// The node a traversal currently stands on: either the head or a data node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position {
  Head,
  Node(NodeId),
}
