//! Pipeline orchestration for the Kindred library.
//!
//! Provides the [`Kindred`] entry point, which runs vocabulary interning, link
//! harvesting, cluster construction, windowed counting and ranking in order.

use tracing::{info, instrument};

use crate::{
    Result,
    clusters::build_clusters,
    cooccurrence::{CountingStrategy, count_cooccurrences},
    links::{LinkHarvest, harvest_links},
    rank::{VariantRanking, rank_clusters},
    source::TokenSource,
    vocabulary::Vocabulary,
};

/// Entry point for running the variant pipeline.
///
/// # Examples
/// ```
/// use kindred_core::{KindredBuilder, TokenSource};
///
/// struct Words(Vec<String>);
///
/// impl TokenSource for Words {
///     fn name(&self) -> &str { "words" }
///     fn tokens(&self) -> &[String] { &self.0 }
/// }
///
/// let kindred = KindredBuilder::new()
///     .with_window_radius(1)
///     .build()
///     .expect("builder must succeed");
/// let source = Words(vec!["cat".into(), "cats".into(), "bat".into()]);
/// let ranking = kindred.run(&source).expect("run must succeed");
/// let first = ranking.iter().next().expect("one group qualifies");
/// assert_eq!((first.representative(), first.count()), ("bat", 3));
/// ```
#[derive(Debug, Clone)]
pub struct Kindred {
    window_radius: usize,
    strategy: CountingStrategy,
}

impl Kindred {
    pub(crate) fn new(window_radius: usize, strategy: CountingStrategy) -> Self {
        Self {
            window_radius,
            strategy,
        }
    }

    /// Window radius used when a source carries none.
    #[must_use]
    pub fn window_radius(&self) -> usize {
        self.window_radius
    }

    /// Counting strategy used by [`Self::run`].
    #[must_use]
    pub fn strategy(&self) -> CountingStrategy {
        self.strategy
    }

    /// Runs the pipeline against `source`.
    ///
    /// The source's own window radius, if any, wins over
    /// [`Self::window_radius`]. A source with no tokens, or one whose window
    /// is empty, yields an empty ranking.
    ///
    /// # Errors
    /// Returns [`crate::KindredError::VocabularyOverflow`] when the source has
    /// more distinct words than ids can address and
    /// [`crate::KindredError::StrategyUnavailable`] when the configured
    /// strategy is not compiled in. [`crate::KindredError::UnknownWord`]
    /// signals an internal invariant violation.
    pub fn run<S: TokenSource>(&self, source: &S) -> Result<VariantRanking> {
        if source.window_is_empty() {
            info!(
                data_source = source.name(),
                tokens = source.len(),
                "window covers no neighbours; nothing ranked"
            );
            return Ok(VariantRanking::default());
        }
        let radius = source.window_radius().unwrap_or(self.window_radius);
        self.run_tokens(source.name(), source.tokens(), radius)
    }

    #[instrument(
        name = "core.run",
        err,
        skip(self, tokens),
        fields(tokens = tokens.len(), strategy = self.strategy.as_str()),
    )]
    fn run_tokens(&self, data_source: &str, tokens: &[String], radius: usize) -> Result<VariantRanking> {
        let (vocabulary, sequence) = Vocabulary::intern_all(tokens)?;
        let harvest = harvest_links(&vocabulary);
        let snapshot = build_clusters(&vocabulary, &harvest)?;
        let counts = count_cooccurrences(&sequence, &snapshot, radius, self.strategy)?;
        let ranking = rank_clusters(&counts, &snapshot, &vocabulary)?;
        record_metrics(&vocabulary, &harvest, &ranking);
        info!(
            data_source,
            words = vocabulary.len(),
            links = harvest.len(),
            variant_groups = snapshot.variant_group_count(),
            ranked = ranking.len(),
            "variant ranking completed"
        );
        Ok(ranking)
    }
}

#[cfg(feature = "metrics")]
fn record_metrics(vocabulary: &Vocabulary, harvest: &LinkHarvest, ranking: &VariantRanking) {
    use crate::links::LinkRule;

    for rule in [LinkRule::Substitution, LinkRule::Suffix] {
        metrics::counter!("kindred_variant_links_total", "rule" => rule.as_str())
            .increment(u64::try_from(harvest.count(rule)).unwrap_or(u64::MAX));
    }
    metrics::counter!("kindred_ranked_clusters_total")
        .increment(u64::try_from(ranking.len()).unwrap_or(u64::MAX));
    metrics::histogram!("kindred_vocabulary_size")
        .record(f64::from(u32::try_from(vocabulary.len()).unwrap_or(u32::MAX)));
}

#[cfg(not(feature = "metrics"))]
fn record_metrics(_vocabulary: &Vocabulary, _harvest: &LinkHarvest, _ranking: &VariantRanking) {}
