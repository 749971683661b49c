/// How [`SkipList::search`](crate::SkipList::search) collects matching entries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum SearchMode {
  /// Collect the run of matching entries once, at level 0.
  #[default]
  Unique,
  /// Collect the run of matching entries at every level the descent passes
  /// through where the next node already matches.
  ///
  /// The same entry is reported once per such level, so the result may
  /// contain repeats. Only useful when parity with that behavior is required.
  PerLevel,
}

/// Options for [`SkipList`](crate::SkipList).
#[viewit::viewit(vis_all = "pub(crate)", getters(skip), setters(skip))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
  max_level: Option<usize>,
  capacity: Option<usize>,
  search_mode: SearchMode,
}

impl Default for Options {
  #[inline]
  fn default() -> Options {
    Options::new()
  }
}

impl Options {
  /// Creates a new set of options with the default values.
  #[inline]
  pub const fn new() -> Self {
    Self {
      max_level: None,
      capacity: None,
      search_mode: SearchMode::Unique,
    }
  }

  /// Set the ceiling for the level of newly inserted nodes.
  ///
  /// Sampled levels above the ceiling are clamped to it. Levels are
  /// geometrically distributed, so the head stays around `log2(len)` in
  /// practice; the ceiling only guards against pathological draws.
  ///
  /// The default is `None`, which means no ceiling.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use multiskip::Options;
  ///
  /// let opts = Options::new().with_max_level(Some(16));
  /// assert_eq!(opts.max_level(), Some(16));
  /// ```
  #[inline]
  pub const fn with_max_level(mut self, max_level: Option<usize>) -> Self {
    self.max_level = max_level;
    self
  }

  /// Set the maximum number of entries the skiplist may hold.
  ///
  /// Once reached, [`SkipList::insert`](crate::SkipList::insert) returns
  /// [`Error::Full`](crate::Error::Full).
  ///
  /// The default is `None`, which means unbounded.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use multiskip::Options;
  ///
  /// let opts = Options::new().with_capacity(Some(1024));
  /// ```
  #[inline]
  pub const fn with_capacity(mut self, capacity: Option<usize>) -> Self {
    self.capacity = capacity;
    self
  }

  /// Set the [`SearchMode`].
  ///
  /// The default is [`SearchMode::Unique`].
  ///
  /// ## Example
  ///
  /// ```rust
  /// use multiskip::{Options, SearchMode};
  ///
  /// let opts = Options::new().with_search_mode(SearchMode::PerLevel);
  /// ```
  #[inline]
  pub const fn with_search_mode(mut self, search_mode: SearchMode) -> Self {
    self.search_mode = search_mode;
    self
  }

  /// Returns the level ceiling.
  #[inline]
  pub const fn max_level(&self) -> Option<usize> {
    self.max_level
  }

  /// Returns the capacity.
  #[inline]
  pub const fn capacity(&self) -> Option<usize> {
    self.capacity
  }

  /// Returns the [`SearchMode`].
  #[inline]
  pub const fn search_mode(&self) -> SearchMode {
    self.search_mode
  }
}
