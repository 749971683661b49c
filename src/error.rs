/// Error type for the [`SkipList`](crate::SkipList).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Indicates that the skiplist already holds as many entries as its
  /// configured capacity allows.
  Full {
    /// The configured capacity.
    capacity: usize,
  },
}

impl core::fmt::Display for Error {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::Full { capacity } => write!(f, "skiplist is full (capacity {capacity})"),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
