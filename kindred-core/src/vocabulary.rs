//! Interning of distinct tokens into dense word identifiers.
//!
//! Clustering and counting operate on small integer ids rather than strings.
//! The [`Vocabulary`] owns the id-to-word table and the reverse index used to
//! resolve suffix variants, and is immutable once built.

use std::{collections::HashMap, fmt};

use crate::{Result, error::KindredError};

/// Dense identifier assigned to each distinct word in first-appearance order.
///
/// # Examples
/// ```
/// use kindred_core::WordId;
///
/// let id = WordId::new(4);
/// assert_eq!(id.get(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(u32);

impl WordId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }

    fn from_index(index: usize) -> Result<Self> {
        u32::try_from(index)
            .map(Self)
            .map_err(|_| KindredError::VocabularyOverflow { words: index })
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of distinct words of a document.
///
/// # Examples
/// ```
/// use kindred_core::Vocabulary;
///
/// let (vocabulary, sequence) = Vocabulary::intern_all(&["cat", "bat", "cat"])?;
/// assert_eq!(vocabulary.len(), 2);
/// assert_eq!(sequence.len(), 3);
/// assert_eq!(sequence[0], sequence[2]);
/// assert_eq!(vocabulary.word(sequence[1]), Some("bat"));
/// # Ok::<(), kindred_core::KindredError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    words: Vec<Box<str>>,
    index: HashMap<Box<str>, WordId>,
}

impl Vocabulary {
    /// Interns every token and returns the vocabulary together with the token
    /// sequence rewritten as word ids, in document order.
    ///
    /// # Errors
    /// Returns [`KindredError::VocabularyOverflow`] when there are more
    /// distinct words than `u32` can address.
    pub fn intern_all<S: AsRef<str>>(tokens: &[S]) -> Result<(Self, Vec<WordId>)> {
        let mut vocabulary = Self::default();
        let sequence = tokens
            .iter()
            .map(|token| vocabulary.intern(token.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok((vocabulary, sequence))
    }

    fn intern(&mut self, word: &str) -> Result<WordId> {
        if let Some(&id) = self.index.get(word) {
            return Ok(id);
        }
        let id = WordId::from_index(self.words.len())?;
        self.words.push(Box::from(word));
        self.index.insert(Box::from(word), id);
        Ok(id)
    }

    /// Returns the id assigned to `word`, if it occurs in the document.
    #[must_use]
    pub fn id(&self, word: &str) -> Option<WordId> {
        self.index.get(word).copied()
    }

    /// Returns the word behind `id`.
    #[must_use]
    pub fn word(&self, id: WordId) -> Option<&str> {
        self.words.get(id.index()).map(AsRef::as_ref)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the document contained no words at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over `(id, word)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &str)> {
        self.words
            .iter()
            .zip(0_u32..)
            .map(|(word, raw)| (WordId(raw), word.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_first_appearance() {
        let (vocabulary, sequence) =
            Vocabulary::intern_all(&["hope", "hopes", "hope", "cat"]).expect("interning succeeds");
        let raw: Vec<u32> = sequence.iter().map(|id| id.get()).collect();
        assert_eq!(raw, vec![0, 1, 0, 2]);
        let words: Vec<&str> = vocabulary.iter().map(|(_, word)| word).collect();
        assert_eq!(words, vec!["hope", "hopes", "cat"]);
    }

    #[test]
    fn lookups_are_consistent() {
        let (vocabulary, _) = Vocabulary::intern_all(&["dog", "dig"]).expect("interning succeeds");
        let id = vocabulary.id("dig").expect("dig is interned");
        assert_eq!(vocabulary.word(id), Some("dig"));
        assert_eq!(vocabulary.id("dug"), None);
        assert_eq!(vocabulary.word(WordId::new(7)), None);
    }

    #[test]
    fn empty_input_builds_empty_vocabulary() {
        let tokens: [&str; 0] = [];
        let (vocabulary, sequence) = Vocabulary::intern_all(&tokens).expect("interning succeeds");
        assert!(vocabulary.is_empty());
        assert!(sequence.is_empty());
    }
}
