//! Kindred core library.
//!
//! Groups spelling variants of the words in a document and ranks the groups
//! by how often their members appear close to one another.
//!
//! Two words are variants when they have the same length and differ in one
//! character, or when one is the other plus a trailing `e` or `s`. Variant
//! relations are closed transitively with a disjoint-set forest, and each group
//! is labelled by its lexicographically smallest member.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled every run emits:
//!
//! - `kindred_variant_links_total` (counter, labelled by `rule`)
//! - `kindred_ranked_clusters_total` (counter)
//! - `kindred_vocabulary_size` (histogram)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod clusters;
mod cooccurrence;
mod error;
mod kindred;
mod links;
mod rank;
mod source;
mod union_find;
mod vocabulary;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::KindredBuilder,
    clusters::{ClusterSnapshot, build_clusters},
    cooccurrence::{CooccurrenceCounts, CountingStrategy, count_cooccurrences},
    error::{KindredError, KindredErrorCode, Result},
    kindred::Kindred,
    links::{LinkHarvest, LinkRule, VariantLink, harvest_links},
    rank::{RankedCluster, VariantRanking, rank_clusters},
    source::TokenSource,
    union_find::DisjointSet,
    vocabulary::{Vocabulary, WordId},
};
