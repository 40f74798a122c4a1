//! Strategy builders for the property suites.

use proptest::prelude::*;
use proptest::sample::select;
use rand::Rng;
use rand::rngs::SmallRng;

use super::types::{CorpusFixture, CorpusShape, UnionFixture};

const MAX_VOCABULARY: usize = 12;
const MAX_TOKENS: usize = 48;
const MAX_RADIUS: usize = 6;
const MAX_NODES: u32 = 32;

/// Generates corpora of every [`CorpusShape`].
pub(super) fn corpus_strategy() -> impl Strategy<Value = CorpusFixture> {
    any::<CorpusShape>().prop_flat_map(|shape| {
        (
            prop::collection::vec(word_strategy(shape), 1..=MAX_VOCABULARY),
            0..=MAX_RADIUS,
        )
            .prop_flat_map(move |(words, radius)| {
                prop::collection::vec(select(words), 0..=MAX_TOKENS).prop_map(move |tokens| {
                    CorpusFixture {
                        tokens,
                        radius,
                        shape,
                    }
                })
            })
    })
}

fn word_strategy(shape: CorpusShape) -> BoxedStrategy<String> {
    match shape {
        CorpusShape::Dense => "[ab]{1,3}".boxed(),
        CorpusShape::Suffixed => "[hop]{1,3}[es]?".boxed(),
        CorpusShape::Sparse => "[a-z']{2,6}".boxed(),
    }
}

/// Generates unions over a small forest together with a shuffled copy.
pub(super) fn union_strategy() -> impl Strategy<Value = UnionFixture> {
    (1..=MAX_NODES).prop_flat_map(|node_count| {
        prop::collection::vec((0..node_count, 0..node_count), 0..64).prop_flat_map(
            move |pairs| {
                Just(pairs.clone())
                    .prop_shuffle()
                    .prop_map(move |shuffled| UnionFixture {
                        node_count,
                        pairs: pairs.clone(),
                        shuffled,
                    })
            },
        )
    })
}

/// Builds a corpus of the given shape from a seeded generator.
///
/// Used by rstest cases that pin specific seeds rather than sampling through
/// proptest.
pub(super) fn generate_corpus(shape: CorpusShape, rng: &mut SmallRng) -> CorpusFixture {
    let alphabet: &[char] = match shape {
        CorpusShape::Dense => &['a', 'b'],
        CorpusShape::Suffixed => &['h', 'o', 'p'],
        CorpusShape::Sparse => &['c', 'd', 'k', 'q', 'x', 'z', '\''],
    };
    let vocabulary_size = rng.gen_range(1..=MAX_VOCABULARY);
    let words: Vec<String> = (0..vocabulary_size)
        .map(|_| {
            let len = rng.gen_range(1..=3);
            let mut word: String = (0..len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect();
            if shape == CorpusShape::Suffixed && rng.gen_bool(0.5) {
                word.push(if rng.gen_bool(0.5) { 'e' } else { 's' });
            }
            word
        })
        .collect();
    let token_count = rng.gen_range(0..=MAX_TOKENS);
    let tokens = (0..token_count)
        .map(|_| words[rng.gen_range(0..words.len())].clone())
        .collect();
    CorpusFixture {
        tokens,
        radius: rng.gen_range(0..=MAX_RADIUS),
        shape,
    }
}
