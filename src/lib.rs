#![doc = include_str!("../README.md")]
#![cfg_attr(not(all(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

#[cfg(feature = "std")]
extern crate std;

mod node;

mod entry;
pub use entry::{Entry, EntryRef};

mod error;
pub use error::Error;

mod level;
pub use level::{CoinFlip, LevelGenerator};

/// The skiplist and its iterators.
pub mod list;
pub use list::SkipList;

mod options;
pub use options::{Options, SearchMode};
