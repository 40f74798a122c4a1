//! Windowed co-occurrence counting over the token sequence.
//!
//! For every position whose word belongs to a variant group, the counter
//! looks at the positions within `radius` on either side. The first other
//! position from the same cluster adds one to that cluster's count and ends
//! the scan, so a count is the number of positions with at least one nearby
//! sibling, not the number of sibling pairs.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::{Result, clusters::ClusterSnapshot, vocabulary::WordId};

/// Selects how the per-position scan is executed.
///
/// # Examples
/// ```
/// use kindred_core::CountingStrategy;
///
/// assert_eq!(CountingStrategy::default(), CountingStrategy::Sequential);
/// assert_eq!(CountingStrategy::Parallel.as_str(), "parallel");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CountingStrategy {
    /// Scan every position on the calling thread.
    #[default]
    Sequential,
    /// Split positions across the rayon thread pool and merge the per-worker
    /// counts. Requires the `parallel` feature.
    Parallel,
}

impl CountingStrategy {
    /// Stable label used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }

    /// Whether this strategy is compiled into the current build.
    #[must_use]
    pub const fn is_available(self) -> bool {
        match self {
            Self::Sequential => true,
            Self::Parallel => cfg!(feature = "parallel"),
        }
    }
}

/// Per-cluster counts of positions with a nearby same-cluster neighbour.
///
/// Only clusters with a non-zero count are stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CooccurrenceCounts(HashMap<WordId, usize>);

impl CooccurrenceCounts {
    /// Count recorded for the cluster rooted at `root` (zero if absent).
    #[must_use]
    pub fn get(&self, root: WordId) -> usize {
        self.0.get(&root).copied().unwrap_or(0)
    }

    /// Number of clusters with a non-zero count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no cluster qualified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Iterates over `(root, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, usize)> + '_ {
        self.0.iter().map(|(root, count)| (*root, *count))
    }

    fn merge(mut self, other: Self) -> Self {
        for (root, count) in other.0 {
            *self.0.entry(root).or_insert(0) += count;
        }
        self
    }

    fn bump(&mut self, root: WordId) {
        *self.0.entry(root).or_insert(0) += 1;
    }
}

/// Counts, for every variant group, the positions of `sequence` that have
/// another member of the same group within `radius` positions.
///
/// # Errors
/// Returns [`crate::KindredError::UnknownWord`] if `sequence` contains an id
/// that is not part of `snapshot`, or
/// [`crate::KindredError::StrategyUnavailable`] if `strategy` is not compiled
/// in.
///
/// # Examples
/// ```
/// use kindred_core::{
///     CountingStrategy, Vocabulary, build_clusters, count_cooccurrences, harvest_links,
/// };
///
/// let (vocabulary, sequence) = Vocabulary::intern_all(&["cat", "cats", "bat"])?;
/// let snapshot = build_clusters(&vocabulary, &harvest_links(&vocabulary))?;
/// let counts = count_cooccurrences(&sequence, &snapshot, 1, CountingStrategy::Sequential)?;
/// assert_eq!(counts.total(), 3);
/// # Ok::<(), kindred_core::KindredError>(())
/// ```
#[instrument(
    name = "core.count",
    err,
    skip(sequence, snapshot),
    fields(positions = sequence.len(), strategy = strategy.as_str()),
)]
pub fn count_cooccurrences(
    sequence: &[WordId],
    snapshot: &ClusterSnapshot,
    radius: usize,
    strategy: CountingStrategy,
) -> Result<CooccurrenceCounts> {
    let roots = sequence
        .iter()
        .map(|id| snapshot.variant_root_of(*id))
        .collect::<Result<Vec<_>>>()?;
    let counts = match strategy {
        CountingStrategy::Sequential => count_sequential(&roots, radius),
        #[cfg(feature = "parallel")]
        CountingStrategy::Parallel => count_parallel(&roots, radius),
        #[cfg(not(feature = "parallel"))]
        CountingStrategy::Parallel => {
            return Err(crate::KindredError::StrategyUnavailable {
                requested: CountingStrategy::Parallel,
            });
        }
    };
    debug!(
        qualifying_clusters = counts.len(),
        qualifying_positions = counts.total(),
        "co-occurrence counted"
    );
    Ok(counts)
}

fn count_sequential(roots: &[Option<WordId>], radius: usize) -> CooccurrenceCounts {
    let mut counts = CooccurrenceCounts::default();
    for (position, root) in roots.iter().enumerate() {
        if let Some(root) = *root
            && has_neighbour(roots, position, root, radius)
        {
            counts.bump(root);
        }
    }
    counts
}

#[cfg(feature = "parallel")]
fn count_parallel(roots: &[Option<WordId>], radius: usize) -> CooccurrenceCounts {
    use rayon::prelude::*;

    roots
        .par_iter()
        .enumerate()
        .filter_map(|(position, root)| {
            root.filter(|root| has_neighbour(roots, position, *root, radius))
        })
        .fold(CooccurrenceCounts::default, |mut counts, root| {
            counts.bump(root);
            counts
        })
        .reduce(CooccurrenceCounts::default, CooccurrenceCounts::merge)
}

fn has_neighbour(roots: &[Option<WordId>], position: usize, root: WordId, radius: usize) -> bool {
    let start = position.saturating_sub(radius);
    let end = position
        .saturating_add(radius)
        .min(roots.len().saturating_sub(1));
    roots.get(start..=end).is_some_and(|window| {
        window
            .iter()
            .zip(start..)
            .any(|(candidate, index)| index != position && *candidate == Some(root))
    })
}
