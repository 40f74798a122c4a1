//! Fixture types for the property suites.

use test_strategy::Arbitrary;

/// Shape of a generated corpus. Controls the alphabet and word lengths so
/// that some corpora are dense with variant links and others are sparse.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum CorpusShape {
    /// Two-letter alphabet with short words: most words are linked.
    Dense,
    /// Short stems over a small alphabet, often followed by `e` or `s`.
    Suffixed,
    /// Wide alphabet with longer words: links are rare.
    Sparse,
}

/// Generated document together with the window radius used to count it.
#[derive(Clone, Debug)]
pub(super) struct CorpusFixture {
    /// Tokens in document order.
    pub tokens: Vec<String>,
    /// Window radius.
    pub radius: usize,
    /// Shape the tokens were drawn from.
    pub shape: CorpusShape,
}

/// Generated sequence of unions over `node_count` ids, plus a permutation of
/// the same unions.
#[derive(Clone, Debug)]
pub(super) struct UnionFixture {
    /// Number of registered ids.
    pub node_count: u32,
    /// Unions in generation order.
    pub pairs: Vec<(u32, u32)>,
    /// The same unions in a shuffled order.
    pub shuffled: Vec<(u32, u32)>,
}
