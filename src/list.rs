use core::borrow::Borrow;
use std::vec::Vec;

use slab::Slab;

use crate::{
  error::Error,
  level::{CoinFlip, LevelGenerator},
  node::{Head, Node, NodeId, Position},
  options::{Options, SearchMode},
  Entry, EntryRef,
};

mod dump;
pub use dump::Dump;

mod iterator;
pub use iterator::Iter;


/// An ordered multimap based on skiplist.
///
/// Duplicate keys are allowed: every [`insert`](SkipList::insert) adds a new
/// entry. Nodes live in a [`Slab`] owned by the list and are linked by key,
/// so callers only ever see [`EntryRef`]s borrowed from the list or owned
/// [`Entry`]s moved out of it by a removal.
///
/// The list has no internal synchronization. Share it between threads behind
/// an external lock.
pub struct SkipList<K, V, G = CoinFlip> {
  arena: Slab<Node<K, V>>,
  head: Head,
  opts: Options,
  generator: G,
}

impl<K, V> Default for SkipList<K, V> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<K, V> SkipList<K, V> {
  /// Creates an empty skiplist whose levels are drawn from a [`CoinFlip`]
  /// seeded by the operating system.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use multiskip::SkipList;
  ///
  /// let list = SkipList::<u64, String>::new();
  /// assert!(list.is_empty());
  /// ```
  #[inline]
  pub fn new() -> Self {
    Self::with_options(Options::new())
  }

  /// Like [`SkipList::new`], but with [`Options`].
  #[inline]
  pub fn with_options(opts: Options) -> Self {
    Self::with_options_and_generator(opts, CoinFlip::from_os_rng())
  }
}

impl<K, V, G> SkipList<K, V, G> {
  /// Like [`SkipList::new`], but with a custom [`LevelGenerator`].
  #[inline]
  pub fn with_generator(generator: G) -> Self {
    Self::with_options_and_generator(Options::new(), generator)
  }

  /// Like [`SkipList::new`], but with [`Options`] and a custom [`LevelGenerator`].
  #[inline]
  pub fn with_options_and_generator(opts: Options, generator: G) -> Self {
    Self {
      arena: Slab::new(),
      head: Head::new(),
      opts,
      generator,
    }
  }

  /// Returns the number of entries in the skiplist.
  #[inline]
  pub fn len(&self) -> usize {
    self.arena.len()
  }

  /// Alias of [`SkipList::len`].
  #[inline]
  pub fn size(&self) -> usize {
    self.len()
  }

  /// Returns `true` if the skiplist holds no entries.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns the level of the head, which is at least the level of every node.
  ///
  /// The head only grows; removals never lower it.
  #[inline]
  pub fn height(&self) -> usize {
    self.head.level()
  }

  /// Returns the options of the skiplist.
  #[inline]
  pub const fn options(&self) -> &Options {
    &self.opts
  }

  /// Returns the smallest entry, or `None` if the skiplist is empty.
  #[inline]
  pub fn first(&self) -> Option<EntryRef<'_, K, V>> {
    self
      .head
      .next(0)
      .map(|id| EntryRef(self.arena[id].entry()))
  }

  /// Returns an iterator over the entries in ascending key order.
  ///
  /// Entries with equal keys come out in their level 0 order, which puts the
  /// most recently inserted one first. Every call starts a fresh traversal.
  #[inline]
  pub fn iter(&self) -> Iter<'_, K, V> {
    Iter::new(&self.arena, self.head.next(0))
  }

  /// Returns a [`Display`](core::fmt::Display) adapter listing every node with its level.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use multiskip::{Entry, SkipList};
  ///
  /// let mut list = SkipList::new();
  /// list.insert(Entry::new(1, "one")).unwrap();
  /// println!("{}", list.dump());
  /// ```
  #[inline]
  pub fn dump(&self) -> Dump<'_, K, V, G> {
    Dump::new(self)
  }

  /// Removes every entry and resets the head to level 0.
  pub fn clear(&mut self) {
    #[cfg(feature = "tracing")]
    tracing::debug!(len = self.len(), height = self.height(), "clearing skiplist");

    self.arena.clear();
    self.head = Head::new();
  }

  /// Returns every entry whose key equals `key`, or `None` if there is none.
  ///
  /// With [`SearchMode::Unique`] each matching entry appears once. With
  /// [`SearchMode::PerLevel`] the matches are collected again at every level
  /// the descent reaches them directly, so the same entry may repeat.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use multiskip::{Entry, SkipList};
  ///
  /// let mut list = SkipList::new();
  /// list.insert(Entry::new(5, "x1")).unwrap();
  /// list.insert(Entry::new(5, "x2")).unwrap();
  ///
  /// let found = list.search(&5).unwrap();
  /// assert_eq!(found.len(), 2);
  /// assert!(list.search(&6).is_none());
  /// ```
  pub fn search<Q>(&self, key: &Q) -> Option<Vec<EntryRef<'_, K, V>>>
  where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    let per_level = self.opts.search_mode == SearchMode::PerLevel;
    let mut found = Vec::new();
    let mut at = Position::Head;
    for level in (0..=self.head.level()).rev() {
      at = self.seek_lt(at, level, key);
      if per_level || level == 0 {
        self.collect_run(at, level, key, &mut found);
      }
    }

    if found.is_empty() {
      None
    } else {
      Some(found)
    }
  }

  /// Returns the first entry, in iteration order, whose key equals `key`.
  pub fn get<Q>(&self, key: &Q) -> Option<EntryRef<'_, K, V>>
  where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    let at = self.lower_bound(key);
    self
      .next(at, 0)
      .map(|id| self.arena[id].entry())
      .filter(|ent| {
        let k: &Q = ent.key().borrow();
        k == key
      })
      .map(EntryRef)
  }

  /// Returns `true` if some entry has a key equal to `key`.
  #[inline]
  pub fn contains_key<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    self.get(key).is_some()
  }

  /// Removes one entry whose key equals `key` and returns it.
  ///
  /// When the key is duplicated, the removed entry is the one the descent
  /// meets first, i.e. the matching node on the highest level. Returns `None`
  /// and leaves the skiplist untouched if no key matches.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use multiskip::{Entry, SkipList};
  ///
  /// let mut list = SkipList::new();
  /// list.insert(Entry::new("k", 1)).unwrap();
  ///
  /// assert_eq!(list.remove("k"), Some(Entry::new("k", 1)));
  /// assert_eq!(list.remove("k"), None);
  /// ```
  pub fn remove<Q>(&mut self, key: &Q) -> Option<Entry<K, V>>
  where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    let (target, top, mut at) = self.find_highest(key)?;

    // Below the level where the target was met, earlier duplicates may still
    // sit in front of it, so walk up to the target node itself.
    let mut update = std::vec![at; top + 1];
    for level in (0..top).rev() {
      at = self.seek_node(at, level, target);
      update[level] = at;
    }

    Some(self.unlink(target, &update))
  }

  /// Removes one entry whose value equals `value` and returns it.
  ///
  /// The removed entry is the one a top-down descent would meet first: among
  /// the matching nodes, the one on the highest level, leftmost there. This is
  /// the same choice [`remove`](SkipList::remove) makes among duplicate keys.
  /// Values are not ordered, so every node on level 0 is visited and the walk
  /// is linear. Returns `None` and leaves the skiplist untouched if no value
  /// matches.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use multiskip::{Entry, SkipList};
  ///
  /// let mut list = SkipList::new();
  /// list.insert(Entry::new(1, String::from("a"))).unwrap();
  /// list.insert(Entry::new(2, String::from("b"))).unwrap();
  ///
  /// let removed = list.remove_by_value("b").unwrap();
  /// assert_eq!(removed.key(), &2);
  /// assert!(list.remove_by_value("nonexistent").is_none());
  /// assert_eq!(list.len(), 1);
  /// ```
  pub fn remove_by_value<Q>(&mut self, value: &Q) -> Option<Entry<K, V>>
  where
    V: Borrow<Q>,
    Q: ?Sized + PartialEq,
  {
    // update[i] is the last node seen so far that occupies level i.
    let mut update = std::vec![Position::Head; self.head.level() + 1];
    // The tallest match so far with its predecessors. Only a strictly taller
    // match replaces it, which keeps the leftmost one on that level.
    let mut best: Option<(NodeId, Vec<Position>)> = None;
    let mut cursor = self.head.next(0);
    while let Some(id) = cursor {
      let node = &self.arena[id];
      let level = node.level();
      let v: &Q = node.entry().value().borrow();
      if v == value && best.as_ref().map_or(true, |(_, prev)| level >= prev.len()) {
        best = Some((id, update[..=level].to_vec()));
      }

      update[..=level].fill(Position::Node(id));
      cursor = node.next(0);
    }

    let (target, update) = best?;
    Some(self.unlink(target, &update))
  }

  #[inline]
  fn next(&self, at: Position, level: usize) -> Option<NodeId> {
    match at {
      Position::Head => self.head.next(level),
      Position::Node(id) => self.arena[id].next(level),
    }
  }

  #[inline]
  fn set_next(&mut self, at: Position, level: usize, next: Option<NodeId>) {
    match at {
      Position::Head => self.head.set_next(level, next),
      Position::Node(id) => self.arena[id].set_next(level, next),
    }
  }

  /// Advances along `level` while the next key is strictly less than `key` and
  /// returns the last position reached.
  fn seek_lt<Q>(&self, mut at: Position, level: usize, key: &Q) -> Position
  where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    while let Some(next) = self.next(at, level) {
      let next_key: &Q = self.arena[next].entry().key().borrow();
      if next_key >= key {
        break;
      }
      at = Position::Node(next);
    }
    at
  }

  /// Returns the rightmost position on level 0 whose key is strictly less than `key`.
  fn lower_bound<Q>(&self, key: &Q) -> Position
  where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    (0..=self.head.level())
      .rev()
      .fold(Position::Head, |at, level| self.seek_lt(at, level, key))
  }

  /// Advances along `level` until the next node is `target`.
  ///
  /// `at` must precede `target` on `level`. Callers pass the predecessor of
  /// `target` on the level above, which holds because every node on a level
  /// is also linked on all levels below it in the same order.
  fn seek_node(&self, mut at: Position, level: usize, target: NodeId) -> Position {
    while let Some(next) = self.next(at, level) {
      if next == target {
        return at;
      }
      at = Position::Node(next);
    }

    unreachable!("node is not linked at level {level}")
  }

  /// Appends the run of entries equal to `key` that starts right after `at` on `level`.
  fn collect_run<'a, Q>(
    &'a self,
    at: Position,
    level: usize,
    key: &Q,
    out: &mut Vec<EntryRef<'a, K, V>>,
  ) where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    let mut cursor = self.next(at, level);
    while let Some(id) = cursor {
      let node = &self.arena[id];
      let k: &Q = node.entry().key().borrow();
      if k != key {
        break;
      }
      out.push(EntryRef(node.entry()));
      cursor = node.next(level);
    }
  }

  /// Descends from the top level and stops at the first level whose next node
  /// matches `key`, returning that node, the level and its predecessor there.
  ///
  /// The first level a match shows up on is the top level of the matched node.
  fn find_highest<Q>(&self, key: &Q) -> Option<(NodeId, usize, Position)>
  where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    let mut at = Position::Head;
    for level in (0..=self.head.level()).rev() {
      at = self.seek_lt(at, level, key);
      if let Some(next) = self.next(at, level) {
        let k: &Q = self.arena[next].entry().key().borrow();
        if k == key {
          debug_assert_eq!(self.arena[next].level(), level);
          return Some((next, level, at));
        }
      }
    }

    None
  }

  /// Splices `target` out of every level it occupies and frees its slot.
  ///
  /// `update[i]` must be the predecessor of `target` on level `i`.
  fn unlink(&mut self, target: NodeId, update: &[Position]) -> Entry<K, V> {
    debug_assert_eq!(update.len(), self.arena[target].level() + 1);
    for (level, at) in update.iter().enumerate() {
      let next = self.arena[target].next(level);
      self.set_next(*at, level, next);
    }

    self.arena.remove(target).into_entry()
  }
}

impl<K, V, G> SkipList<K, V, G>
where
  K: Ord,
  G: LevelGenerator,
{
  /// Inserts an entry.
  ///
  /// Entries with a key already present are kept alongside the existing ones,
  /// in front of them.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use multiskip::{Entry, SkipList};
  ///
  /// let mut list = SkipList::new();
  /// list.insert(Entry::new(1, "a")).unwrap();
  /// list.insert(Entry::new(3, "c")).unwrap();
  /// list.insert(Entry::new(2, "b")).unwrap();
  ///
  /// let keys = list.iter().map(|ent| *ent.key()).collect::<Vec<_>>();
  /// assert_eq!(keys, [1, 2, 3]);
  /// ```
  pub fn insert(&mut self, entry: Entry<K, V>) -> Result<(), Error> {
    if let Some(capacity) = self.opts.capacity {
      if self.len() >= capacity {
        #[cfg(feature = "tracing")]
        tracing::warn!(capacity, "skiplist is full, insert rejected");
        return Err(Error::Full { capacity });
      }
    }

    let level = self.random_level();
    if level > self.head.level() {
      #[cfg(feature = "tracing")]
      tracing::trace!(from = self.head.level(), to = level, "growing skiplist head");
      self.head = self.head.grow(level);
    }

    let mut splice = std::vec![Position::Head; level + 1];
    let mut at = Position::Head;
    for l in (0..=self.head.level()).rev() {
      at = self.seek_lt(at, l, entry.key());
      if l <= level {
        splice[l] = at;
      }
    }

    let tower = splice
      .iter()
      .enumerate()
      .map(|(l, at)| self.next(*at, l))
      .collect();
    let id = self.arena.insert(Node::new(entry, tower));
    for (l, at) in splice.into_iter().enumerate() {
      self.set_next(at, l, Some(id));
    }

    Ok(())
  }

  #[inline]
  fn random_level(&mut self) -> usize {
    let level = self.generator.random_level();
    match self.opts.max_level {
      Some(max) if level > max => {
        #[cfg(feature = "tracing")]
        tracing::trace!(level, max, "clamping sampled level");
        max
      }
      _ => level,
    }
  }
}

impl<K, V, G> core::fmt::Debug for SkipList<K, V, G>
where
  K: core::fmt::Debug,
  V: core::fmt::Debug,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<'a, K, V, G> IntoIterator for &'a SkipList<K, V, G> {
  type Item = EntryRef<'a, K, V>;
  type IntoIter = Iter<'a, K, V>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<K, V, G> Extend<Entry<K, V>> for SkipList<K, V, G>
where
  K: Ord,
  G: LevelGenerator,
{
  /// # Panics
  /// Panics if the skiplist reaches its configured capacity.
  fn extend<T: IntoIterator<Item = Entry<K, V>>>(&mut self, iter: T) {
    for entry in iter {
      if let Err(e) = self.insert(entry) {
        panic!("{e}");
      }
    }
  }
}

impl<K, V, G> Extend<(K, V)> for SkipList<K, V, G>
where
  K: Ord,
  G: LevelGenerator,
{
  /// # Panics
  /// Panics if the skiplist reaches its configured capacity.
  #[inline]
  fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
    self.extend(iter.into_iter().map(Entry::from));
  }
}

impl<K: Ord, V> FromIterator<(K, V)> for SkipList<K, V> {
  fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
    let mut list = Self::new();
    list.extend(iter);
    list
  }
}
