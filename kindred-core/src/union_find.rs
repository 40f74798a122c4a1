//! Union-find (disjoint set union) over interned word ids.
//!
//! Variant links are applied to this forest to merge words into clusters. The
//! forest is an arena indexed by [`WordId`]; entries are registered explicitly
//! with [`DisjointSet::add`] and every lookup of an unregistered id is reported
//! as [`KindredError::UnknownWord`].

use crate::{Result, error::KindredError, vocabulary::WordId};

#[derive(Clone, Copy, Debug)]
struct Entry {
    parent: usize,
    rank: u8,
}

/// Disjoint-set forest with path compression and union by rank.
///
/// # Examples
/// ```
/// use kindred_core::{DisjointSet, WordId};
///
/// let mut forest = DisjointSet::new();
/// for raw in 0..3 {
///     forest.add(WordId::new(raw));
/// }
/// forest.union(WordId::new(0), WordId::new(2))?;
/// assert_eq!(forest.find(WordId::new(0))?, forest.find(WordId::new(2))?);
/// assert_ne!(forest.find(WordId::new(0))?, forest.find(WordId::new(1))?);
/// assert_eq!(forest.components(), 2);
/// # Ok::<(), kindred_core::KindredError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct DisjointSet {
    entries: Vec<Option<Entry>>,
    registered: usize,
    components: usize,
}

impl DisjointSet {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty forest with room for `capacity` ids.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            registered: 0,
            components: 0,
        }
    }

    /// Registers `id` as a singleton class. Returns `false` if it was already
    /// present.
    pub fn add(&mut self, id: WordId) -> bool {
        let index = id.index();
        if index >= self.entries.len() {
            self.entries.resize(index + 1, None);
        }
        let Some(slot) = self.entries.get_mut(index) else {
            return false;
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(Entry {
            parent: index,
            rank: 0,
        });
        self.registered += 1;
        self.components += 1;
        true
    }

    /// Returns the root of the class containing `id`, redirecting every node
    /// on the walked path straight to the root.
    ///
    /// # Errors
    /// Returns [`KindredError::UnknownWord`] if `id` was never added.
    pub fn find(&mut self, id: WordId) -> Result<WordId> {
        let start = id.index();
        let mut root = start;
        loop {
            let parent = self.entry(root, id)?.parent;
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut node = start;
        while node != root {
            let entry = self.entry_mut(node, id)?;
            let next = entry.parent;
            entry.parent = root;
            node = next;
        }

        Ok(Self::id_at(root, id))
    }

    /// Merges the classes of `left` and `right`. The lower-rank root is
    /// attached beneath the higher-rank one; on a tie `left`'s root survives.
    /// Returns whether two distinct classes were merged.
    ///
    /// # Errors
    /// Returns [`KindredError::UnknownWord`] if either id was never added.
    pub fn union(&mut self, left: WordId, right: WordId) -> Result<bool> {
        let mut left_root = self.find(left)?.index();
        let mut right_root = self.find(right)?.index();
        if left_root == right_root {
            return Ok(false);
        }
        let left_rank = self.entry(left_root, left)?.rank;
        let right_rank = self.entry(right_root, right)?.rank;
        if left_rank < right_rank {
            std::mem::swap(&mut left_root, &mut right_root);
        }
        self.entry_mut(right_root, right)?.parent = left_root;
        if left_rank == right_rank {
            let survivor = self.entry_mut(left_root, left)?;
            survivor.rank = survivor.rank.saturating_add(1);
        }
        self.components -= 1;
        Ok(true)
    }

    /// Number of registered ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registered
    }

    /// Whether no id has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registered == 0
    }

    /// Number of disjoint classes.
    #[must_use]
    pub fn components(&self) -> usize {
        self.components
    }

    fn entry(&self, index: usize, requested: WordId) -> Result<&Entry> {
        self.entries
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(KindredError::UnknownWord {
                id: requested,
                registered: self.registered,
            })
    }

    fn entry_mut(&mut self, index: usize, requested: WordId) -> Result<&mut Entry> {
        let registered = self.registered;
        self.entries
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(KindredError::UnknownWord {
                id: requested,
                registered,
            })
    }

    // Entries are only created through `add`, which takes a `WordId`, so every
    // in-range index fits back into one.
    fn id_at(index: usize, fallback: WordId) -> WordId {
        u32::try_from(index).map_or(fallback, WordId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn forest_with(count: u32) -> DisjointSet {
        let mut forest = DisjointSet::with_capacity(count as usize);
        for raw in 0..count {
            forest.add(WordId::new(raw));
        }
        forest
    }

    fn id(raw: u32) -> WordId {
        WordId::new(raw)
    }

    #[test]
    fn add_is_idempotent() {
        let mut forest = DisjointSet::new();
        assert!(forest.add(id(0)));
        assert!(!forest.add(id(0)));
        assert_eq!(forest.len(), 1);
        assert_eq!(forest.components(), 1);
    }

    #[test]
    fn sparse_add_leaves_gaps_unregistered() {
        let mut forest = DisjointSet::new();
        forest.add(id(3));
        assert_eq!(forest.len(), 1);
        assert_eq!(forest.find(id(3)).expect("3 is registered"), id(3));
        let err = forest.find(id(1)).expect_err("1 was never added");
        assert_eq!(
            err,
            KindredError::UnknownWord {
                id: id(1),
                registered: 1
            }
        );
    }

    #[rstest]
    #[case::find_out_of_range(5)]
    #[case::find_just_past_end(3)]
    fn find_rejects_unknown_ids(#[case] raw: u32) {
        let mut forest = forest_with(3);
        let err = forest.find(id(raw)).expect_err("unknown id must fail");
        assert!(matches!(err, KindredError::UnknownWord { .. }));
    }

    #[test]
    fn union_rejects_unknown_ids() {
        let mut forest = forest_with(2);
        assert!(forest.union(id(0), id(9)).is_err());
        assert!(forest.union(id(9), id(0)).is_err());
        assert_eq!(forest.components(), 2);
    }

    #[test]
    fn union_is_idempotent() {
        let mut forest = forest_with(3);
        assert!(forest.union(id(0), id(1)).expect("union succeeds"));
        assert!(!forest.union(id(1), id(0)).expect("union succeeds"));
        assert!(!forest.union(id(0), id(1)).expect("union succeeds"));
        assert_eq!(forest.components(), 2);
    }

    #[test]
    fn union_merges_transitively() {
        let mut forest = forest_with(5);
        forest.union(id(0), id(1)).expect("union succeeds");
        forest.union(id(3), id(4)).expect("union succeeds");
        forest.union(id(1), id(4)).expect("union succeeds");
        let root = forest.find(id(0)).expect("find succeeds");
        for raw in [1, 3, 4] {
            assert_eq!(forest.find(id(raw)).expect("find succeeds"), root);
        }
        assert_ne!(forest.find(id(2)).expect("find succeeds"), root);
        assert_eq!(forest.components(), 2);
    }

    #[test]
    fn lower_rank_root_is_attached_under_higher_rank_root() {
        let mut forest = forest_with(3);
        forest.union(id(0), id(1)).expect("union succeeds");
        let tall = forest.find(id(0)).expect("find succeeds");
        forest.union(id(2), id(0)).expect("union succeeds");
        assert_eq!(forest.find(id(2)).expect("find succeeds"), tall);
    }

    #[test]
    fn find_compresses_paths() {
        let mut forest = forest_with(4);
        forest.union(id(0), id(1)).expect("union succeeds");
        forest.union(id(2), id(3)).expect("union succeeds");
        forest.union(id(0), id(2)).expect("union succeeds");
        let root = forest.find(id(3)).expect("find succeeds");
        let parent = forest
            .entries
            .get(3)
            .copied()
            .flatten()
            .map(|entry| entry.parent);
        assert_eq!(parent, Some(root.index()));
    }
}
