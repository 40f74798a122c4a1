//! Ranking of variant groups by co-occurrence count.

use crate::{
    Result,
    clusters::ClusterSnapshot,
    cooccurrence::CooccurrenceCounts,
    error::KindredError,
    vocabulary::{Vocabulary, WordId},
};

/// One ranked variant group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedCluster {
    representative: String,
    count: usize,
    members: Vec<String>,
}

impl RankedCluster {
    /// Creates a ranked entry.
    #[must_use]
    pub fn new(representative: impl Into<String>, count: usize, members: Vec<String>) -> Self {
        Self {
            representative: representative.into(),
            count,
            members,
        }
    }

    /// Lexicographically smallest member, used as the display label.
    #[must_use]
    pub fn representative(&self) -> &str {
        &self.representative
    }

    /// Number of positions with a nearby same-cluster neighbour.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Every member of the cluster, in lexicographic order.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }
}

/// Variant groups ordered by descending count, then ascending representative.
///
/// # Examples
/// ```
/// use kindred_core::{RankedCluster, VariantRanking};
///
/// let ranking = VariantRanking::from_unsorted(vec![
///     RankedCluster::new("dig", 2, vec!["dig".into(), "dog".into()]),
///     RankedCluster::new("bat", 2, vec!["bat".into(), "cat".into()]),
///     RankedCluster::new("hop", 5, vec!["hop".into(), "hope".into()]),
/// ]);
/// let labels: Vec<&str> = ranking.iter().map(|entry| entry.representative()).collect();
/// assert_eq!(labels, ["hop", "bat", "dig"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariantRanking(Vec<RankedCluster>);

impl VariantRanking {
    /// Sorts `entries` into ranking order, dropping zero counts.
    #[must_use]
    pub fn from_unsorted(mut entries: Vec<RankedCluster>) -> Self {
        entries.retain(|entry| entry.count > 0);
        entries.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.representative.cmp(&b.representative))
        });
        Self(entries)
    }

    /// Number of ranked groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no group qualified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the entries in ranking order.
    pub fn iter(&self) -> std::slice::Iter<'_, RankedCluster> {
        self.0.iter()
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn entries(&self) -> &[RankedCluster] {
        &self.0
    }
}

impl IntoIterator for VariantRanking {
    type Item = RankedCluster;
    type IntoIter = std::vec::IntoIter<RankedCluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a VariantRanking {
    type Item = &'a RankedCluster;
    type IntoIter = std::slice::Iter<'a, RankedCluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Resolves every counted cluster to its words and ranks the result.
///
/// # Errors
/// Returns [`KindredError::UnknownWord`] if a counted root or one of its
/// members has no word in `vocabulary`.
pub fn rank_clusters(
    counts: &CooccurrenceCounts,
    snapshot: &ClusterSnapshot,
    vocabulary: &Vocabulary,
) -> Result<VariantRanking> {
    let entries = counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(root, count)| {
            let members = snapshot
                .members(root)
                .iter()
                .map(|id| word_of(vocabulary, *id))
                .collect::<Result<Vec<_>>>()?;
            let representative = members.first().cloned().ok_or(KindredError::UnknownWord {
                id: root,
                registered: vocabulary.len(),
            })?;
            Ok(RankedCluster::new(representative, count, members))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(VariantRanking::from_unsorted(entries))
}

fn word_of(vocabulary: &Vocabulary, id: WordId) -> Result<String> {
    vocabulary
        .word(id)
        .map(ToOwned::to_owned)
        .ok_or(KindredError::UnknownWord {
            id,
            registered: vocabulary.len(),
        })
}
