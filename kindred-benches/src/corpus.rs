//! Seeded generator for variant-rich token streams.
//!
//! Each token is drawn from a small set of template stems and then mutated by
//! a single substitution, an `e`/`s` suffix, or left alone. The result links
//! into many multi-member groups, which stresses every pipeline stage.

use kindred_core::TokenSource;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::SyntheticError;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Configuration for synthetic corpus generation.
#[derive(Clone, Debug)]
pub struct SyntheticCorpusConfig {
    /// Number of tokens in the generated stream.
    pub token_count: usize,
    /// Number of distinct template stems.
    pub stem_count: usize,
    /// Minimum stem length.
    pub min_length: usize,
    /// Maximum stem length.
    pub max_length: usize,
    /// Random seed for reproducibility.
    pub seed: u64,
}

/// A generated token stream.
#[derive(Clone, Debug)]
pub struct SyntheticCorpus {
    tokens: Vec<String>,
}

impl SyntheticCorpus {
    /// Generates a token stream from `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration is invalid.
    ///
    /// # Examples
    /// ```
    /// use kindred_benches::corpus::{SyntheticCorpus, SyntheticCorpusConfig};
    /// use kindred_core::TokenSource;
    ///
    /// let config = SyntheticCorpusConfig {
    ///     token_count: 32,
    ///     stem_count: 4,
    ///     min_length: 3,
    ///     max_length: 6,
    ///     seed: 7,
    /// };
    /// let corpus = SyntheticCorpus::generate(&config).expect("config is valid");
    /// assert_eq!(corpus.len(), 32);
    /// ```
    pub fn generate(config: &SyntheticCorpusConfig) -> Result<Self, SyntheticError> {
        validate(config)?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let stems: Vec<Vec<u8>> = (0..config.stem_count)
            .map(|_| random_word(&mut rng, config.min_length, config.max_length))
            .collect();

        let mut tokens = Vec::with_capacity(config.token_count);
        for _ in 0..config.token_count {
            let mut word = stems
                .get(rng.gen_range(0..stems.len()))
                .cloned()
                .ok_or(SyntheticError::ZeroStems)?;
            mutate(&mut word, &mut rng);
            tokens.push(word.into_iter().map(char::from).collect());
        }
        Ok(Self { tokens })
    }
}

impl TokenSource for SyntheticCorpus {
    fn name(&self) -> &str {
        "synthetic-corpus"
    }

    fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

const fn validate(config: &SyntheticCorpusConfig) -> Result<(), SyntheticError> {
    if config.token_count == 0 {
        return Err(SyntheticError::ZeroTokens);
    }
    if config.stem_count == 0 {
        return Err(SyntheticError::ZeroStems);
    }
    if config.min_length < 2 || config.min_length > config.max_length {
        return Err(SyntheticError::InvalidStemLength {
            min_length: config.min_length,
            max_length: config.max_length,
        });
    }
    Ok(())
}

fn random_letter(rng: &mut SmallRng) -> u8 {
    ALPHABET
        .get(rng.gen_range(0..ALPHABET.len()))
        .copied()
        .unwrap_or(b'a')
}

fn random_word(rng: &mut SmallRng, min_length: usize, max_length: usize) -> Vec<u8> {
    let length = rng.gen_range(min_length..=max_length);
    (0..length).map(|_| random_letter(rng)).collect()
}

fn mutate(word: &mut Vec<u8>, rng: &mut SmallRng) {
    match rng.gen_range(0..4_u8) {
        0 => {
            let position = rng.gen_range(0..word.len());
            let letter = random_letter(rng);
            if let Some(slot) = word.get_mut(position) {
                *slot = letter;
            }
        }
        1 => word.push(if rng.gen_bool(0.5) { b'e' } else { b's' }),
        _ => {}
    }
}
