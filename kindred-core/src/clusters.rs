//! Cluster construction from harvested variant links.
//!
//! Every vocabulary word is registered with a [`DisjointSet`], the harvested
//! links are applied as unions, and the final partition is frozen into a
//! read-only [`ClusterSnapshot`]. Singleton clusters stay in the snapshot so
//! every word still resolves to a root, but they are never variant groups.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::{
    Result,
    error::KindredError,
    links::LinkHarvest,
    union_find::DisjointSet,
    vocabulary::{Vocabulary, WordId},
};

/// Frozen partition of a vocabulary into clusters.
///
/// # Examples
/// ```
/// use kindred_core::{Vocabulary, build_clusters, harvest_links};
///
/// let (vocabulary, _) = Vocabulary::intern_all(&["dog", "dug", "dig", "zebra"])?;
/// let snapshot = build_clusters(&vocabulary, &harvest_links(&vocabulary))?;
/// let dog = vocabulary.id("dog").expect("dog is interned");
/// let root = snapshot.root_of(dog).expect("every word has a root");
/// let representative = snapshot.representative(root).expect("every root has one");
/// assert_eq!(vocabulary.word(representative), Some("dig"));
/// assert_eq!(snapshot.variant_group_count(), 1);
/// # Ok::<(), kindred_core::KindredError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClusterSnapshot {
    roots: Vec<WordId>,
    variant_roots: Vec<Option<WordId>>,
    members: HashMap<WordId, Vec<WordId>>,
}

impl ClusterSnapshot {
    /// Freezes the partition held by `forest` for every word of `vocabulary`.
    ///
    /// Members of each cluster are ordered lexicographically by their word, so
    /// the first member is the representative.
    ///
    /// # Errors
    /// Returns [`KindredError::UnknownWord`] if a vocabulary word was never
    /// registered with `forest`.
    pub fn from_forest(vocabulary: &Vocabulary, forest: &mut DisjointSet) -> Result<Self> {
        let mut roots = Vec::with_capacity(vocabulary.len());
        let mut members: HashMap<WordId, Vec<WordId>> = HashMap::new();
        for (id, _) in vocabulary.iter() {
            let root = forest.find(id)?;
            roots.push(root);
            members.entry(root).or_default().push(id);
        }
        for group in members.values_mut() {
            group.sort_by(|a, b| vocabulary.word(*a).cmp(&vocabulary.word(*b)));
        }
        let variant_roots = roots
            .iter()
            .map(|root| {
                members
                    .get(root)
                    .filter(|group| group.len() > 1)
                    .map(|_| *root)
            })
            .collect();
        Ok(Self {
            roots,
            variant_roots,
            members,
        })
    }

    /// Root of the cluster containing `id`.
    #[must_use]
    pub fn root_of(&self, id: WordId) -> Option<WordId> {
        self.roots.get(id.index()).copied()
    }

    /// Root of the cluster containing `id`, or `None` when that cluster is a
    /// singleton.
    ///
    /// # Errors
    /// Returns [`KindredError::UnknownWord`] if `id` is not part of the
    /// snapshot.
    pub fn variant_root_of(&self, id: WordId) -> Result<Option<WordId>> {
        self.variant_roots
            .get(id.index())
            .copied()
            .ok_or(KindredError::UnknownWord {
                id,
                registered: self.roots.len(),
            })
    }

    /// Members of the cluster rooted at `root`, ordered by word.
    #[must_use]
    pub fn members(&self, root: WordId) -> &[WordId] {
        self.members.get(&root).map_or(&[], Vec::as_slice)
    }

    /// Lexicographically smallest member of the cluster rooted at `root`.
    #[must_use]
    pub fn representative(&self, root: WordId) -> Option<WordId> {
        self.members(root).first().copied()
    }

    /// Whether the cluster rooted at `root` has more than one member.
    #[must_use]
    pub fn is_variant_group(&self, root: WordId) -> bool {
        self.members(root).len() > 1
    }

    /// Roots of clusters with more than one member, in ascending id order.
    #[must_use]
    pub fn variant_groups(&self) -> Vec<WordId> {
        let mut roots: Vec<WordId> = self
            .members
            .iter()
            .filter(|(_, group)| group.len() > 1)
            .map(|(root, _)| *root)
            .collect();
        roots.sort_unstable();
        roots
    }

    /// Number of clusters, singletons included.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.members.len()
    }

    /// Number of clusters with more than one member.
    #[must_use]
    pub fn variant_group_count(&self) -> usize {
        self.members.values().filter(|group| group.len() > 1).count()
    }
}

/// Applies every link in `harvest` to a fresh forest over `vocabulary` and
/// freezes the result.
///
/// # Errors
/// Returns [`KindredError::UnknownWord`] if a link refers to a word outside
/// `vocabulary`.
#[instrument(
    name = "core.build_clusters",
    err,
    skip(vocabulary, harvest),
    fields(words = vocabulary.len(), links = harvest.len()),
)]
pub fn build_clusters(vocabulary: &Vocabulary, harvest: &LinkHarvest) -> Result<ClusterSnapshot> {
    let mut forest = DisjointSet::with_capacity(vocabulary.len());
    for (id, _) in vocabulary.iter() {
        forest.add(id);
    }
    let mut merges = 0_usize;
    for link in harvest {
        if forest.union(link.left(), link.right())? {
            merges += 1;
        }
    }
    let snapshot = ClusterSnapshot::from_forest(vocabulary, &mut forest)?;
    debug!(
        merges,
        clusters = snapshot.cluster_count(),
        variant_groups = snapshot.variant_group_count(),
        "clusters built"
    );
    Ok(snapshot)
}
