//! Brute-force oracles for clustering and counting.
//!
//! Every pair of distinct words is compared directly, and every window is
//! scanned in full. Quadratic, but obviously correct on small inputs.

use std::collections::{BTreeMap, BTreeSet};

use strsim::hamming;

/// Whether `a` and `b` are linked by either variant rule.
pub(super) fn is_variant_pair(a: &str, b: &str) -> bool {
    one_substitution(a, b) || suffix_pair(a, b) || suffix_pair(b, a)
}

fn one_substitution(a: &str, b: &str) -> bool {
    a.chars().count() >= 2 && matches!(hamming(a, b), Ok(1))
}

fn suffix_pair(short: &str, long: &str) -> bool {
    short.chars().count() >= 2
        && ["e", "s"]
            .iter()
            .any(|suffix| long.strip_suffix(*suffix) == Some(short))
}

/// Partitions the distinct words of `tokens` into clusters, each given as the
/// sorted set of its words.
pub(super) fn naive_clusters(tokens: &[String]) -> BTreeSet<BTreeSet<String>> {
    let words: Vec<&str> = tokens
        .iter()
        .map(String::as_str)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let mut label: Vec<usize> = (0..words.len()).collect();
    // Relabel until stable: each linked pair adopts the smaller label.
    let mut changed = true;
    while changed {
        changed = false;
        for (i, a) in words.iter().enumerate() {
            for (j, b) in words.iter().enumerate() {
                if i != j && is_variant_pair(a, b) && label[i] != label[j] {
                    let low = label[i].min(label[j]);
                    label[i] = low;
                    label[j] = low;
                    changed = true;
                }
            }
        }
    }
    let mut groups: BTreeMap<usize, BTreeSet<String>> = BTreeMap::new();
    for (index, word) in words.iter().enumerate() {
        groups
            .entry(label[index])
            .or_default()
            .insert((*word).to_owned());
    }
    groups.into_values().collect()
}

/// Representative-to-count map computed by scanning every window in full.
pub(super) fn naive_counts(tokens: &[String], radius: usize) -> BTreeMap<String, usize> {
    let clusters = naive_clusters(tokens);
    let cluster_of = |word: &str| clusters.iter().find(|group| group.contains(word));
    let mut counts = BTreeMap::new();
    for (i, token) in tokens.iter().enumerate() {
        let Some(group) = cluster_of(token) else {
            continue;
        };
        if group.len() < 2 {
            continue;
        }
        let qualifies = tokens.iter().enumerate().any(|(j, other)| {
            j != i && i.abs_diff(j) <= radius && group.contains(other.as_str())
        });
        if qualifies {
            let representative = group.iter().next().cloned().unwrap_or_default();
            *counts.entry(representative).or_insert(0) += 1;
        }
    }
    counts
}
