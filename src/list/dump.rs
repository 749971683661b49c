use core::fmt;

use super::SkipList;

/// Human readable view of a [`SkipList`], created by [`SkipList::dump`].
///
/// The first line reports the head level and the number of entries, then
/// every node follows on its own line in ascending key order:
///
/// ```text
/// head: level 1, 2 entries
/// 1 => "a" (level 1)
/// 2 => "b" (level 0)
/// ```
pub struct Dump<'a, K, V, G> {
  list: &'a SkipList<K, V, G>,
}

impl<'a, K, V, G> Dump<'a, K, V, G> {
  #[inline]
  pub(super) const fn new(list: &'a SkipList<K, V, G>) -> Self {
    Self { list }
  }
}

impl<K, V, G> fmt::Display for Dump<'_, K, V, G>
where
  K: fmt::Debug,
  V: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let list = self.list;
    writeln!(f, "head: level {}, {} entries", list.head.level(), list.len())?;

    let mut cursor = list.head.next(0);
    while let Some(id) = cursor {
      let node = &list.arena[id];
      let entry = node.entry();
      writeln!(
        f,
        "{:?} => {:?} (level {})",
        entry.key(),
        entry.value(),
        node.level()
      )?;
      cursor = node.next(0);
    }
    Ok(())
  }
}
