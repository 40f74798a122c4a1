//! Discovery of variant links between vocabulary words.
//!
//! Two rules produce links:
//!
//! - **Substitution**: equal-length words (at least two characters) that
//!   differ in exactly one position. Each word is hashed once per position
//!   under a key made of its length, the position and the word with that
//!   character removed, so words sharing a key are exactly the words one
//!   substitution apart. Bucket members are linked to the first word that
//!   claimed the bucket, which is enough for connectivity.
//! - **Suffix**: a word of at least two characters and the same word with a
//!   trailing `e` or `s` added or removed, provided the shorter form also has
//!   at least two characters.
//!
//! All links are harvested before any of them is applied to a partition.

use std::{collections::HashMap, fmt};

use tracing::{debug, instrument};

use crate::vocabulary::{Vocabulary, WordId};

const SUFFIXES: [char; 2] = ['e', 's'];
const MIN_LINKED_LEN: usize = 2;

/// Rule that produced a [`VariantLink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LinkRule {
    /// Same length, one substituted character.
    Substitution,
    /// Trailing `e` or `s` added or removed.
    Suffix,
}

impl LinkRule {
    /// Stable label used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Substitution => "substitution",
            Self::Suffix => "suffix",
        }
    }
}

impl fmt::Display for LinkRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unordered pair of words that belong to the same cluster.
///
/// The endpoints are stored with the smaller id first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariantLink {
    left: WordId,
    right: WordId,
    rule: LinkRule,
}

impl VariantLink {
    /// Creates a link between `a` and `b`.
    #[must_use]
    pub fn new(a: WordId, b: WordId, rule: LinkRule) -> Self {
        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        Self { left, right, rule }
    }

    /// The endpoint with the smaller id.
    #[must_use]
    pub const fn left(&self) -> WordId {
        self.left
    }

    /// The endpoint with the larger id.
    #[must_use]
    pub const fn right(&self) -> WordId {
        self.right
    }

    /// Rule that produced the link.
    #[must_use]
    pub const fn rule(&self) -> LinkRule {
        self.rule
    }
}

/// Links harvested from a vocabulary, sorted and free of duplicates.
///
/// # Examples
/// ```
/// use kindred_core::{LinkRule, Vocabulary, harvest_links};
///
/// let (vocabulary, _) = Vocabulary::intern_all(&["cat", "cats", "bat"])?;
/// let harvest = harvest_links(&vocabulary);
/// assert_eq!(harvest.count(LinkRule::Substitution), 1);
/// assert_eq!(harvest.count(LinkRule::Suffix), 1);
/// # Ok::<(), kindred_core::KindredError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkHarvest(Vec<VariantLink>);

impl LinkHarvest {
    /// Builds a harvest from links in any order.
    #[must_use]
    pub fn from_unsorted(mut links: Vec<VariantLink>) -> Self {
        links.sort_unstable();
        links.dedup();
        Self(links)
    }

    /// Number of harvested links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no links were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the links.
    pub fn iter(&self) -> std::slice::Iter<'_, VariantLink> {
        self.0.iter()
    }

    /// Number of links produced by `rule`.
    #[must_use]
    pub fn count(&self, rule: LinkRule) -> usize {
        self.0.iter().filter(|link| link.rule == rule).count()
    }
}

impl<'a> IntoIterator for &'a LinkHarvest {
    type Item = &'a VariantLink;
    type IntoIter = std::slice::Iter<'a, VariantLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects every substitution and suffix link in `vocabulary`.
#[instrument(name = "core.harvest_links", skip(vocabulary), fields(words = vocabulary.len()))]
#[must_use]
pub fn harvest_links(vocabulary: &Vocabulary) -> LinkHarvest {
    let mut links = Vec::new();
    substitution_links(vocabulary, &mut links);
    suffix_links(vocabulary, &mut links);
    let harvest = LinkHarvest::from_unsorted(links);
    debug!(
        substitution = harvest.count(LinkRule::Substitution),
        suffix = harvest.count(LinkRule::Suffix),
        "variant links harvested"
    );
    harvest
}

fn substitution_links(vocabulary: &Vocabulary, out: &mut Vec<VariantLink>) {
    let mut buckets: HashMap<(usize, usize, String), WordId> = HashMap::new();
    for (id, word) in vocabulary.iter() {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < MIN_LINKED_LEN {
            continue;
        }
        for position in 0..chars.len() {
            let key = (chars.len(), position, without_position(&chars, position));
            match buckets.get(&key) {
                Some(&anchor) => out.push(VariantLink::new(anchor, id, LinkRule::Substitution)),
                None => {
                    buckets.insert(key, id);
                }
            }
        }
    }
}

fn without_position(chars: &[char], position: usize) -> String {
    chars
        .iter()
        .enumerate()
        .filter_map(|(index, &ch)| (index != position).then_some(ch))
        .collect()
}

fn suffix_links(vocabulary: &Vocabulary, out: &mut Vec<VariantLink>) {
    for (id, word) in vocabulary.iter() {
        if word.chars().count() < MIN_LINKED_LEN {
            continue;
        }
        for suffix in SUFFIXES {
            let partner = match word.strip_suffix(suffix) {
                Some(stem) if stem.chars().count() >= MIN_LINKED_LEN => vocabulary.id(stem),
                Some(_) => None,
                None => vocabulary.id(&format!("{word}{suffix}")),
            };
            if let Some(partner) = partner {
                out.push(VariantLink::new(id, partner, LinkRule::Suffix));
            }
        }
    }
}
