//! Text provider reading windowed documents into a [`TokenSource`].
//!
//! The first line of the input carries the window radius. Document text
//! follows and ends at the first empty line or at end of input.
use std::io::BufRead;

use kindred_core::{TokenSource, define_error_codes};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors raised while reading a text corpus.
#[derive(Debug, Error)]
pub enum TextCorpusError {
    /// The first line is not an integer.
    #[error("window radius line `{line}` is not an integer")]
    InvalidWindowRadius { line: String },
    /// Reading from the underlying source failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

define_error_codes! {
    /// Stable codes describing [`TextCorpusError`] variants.
    enum TextCorpusErrorCode for TextCorpusError {
        /// The radius header did not parse.
        InvalidWindowRadius => InvalidWindowRadius { .. } => "TEXT_INVALID_WINDOW_RADIUS",
        /// Reading the input failed.
        Io => Io(..) => "TEXT_IO",
    }
}

/// Window declared by the first line of a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowHeader {
    /// Positions up to this distance on either side are neighbours.
    Radius(usize),
    /// A negative radius. The window holds no positions, so nothing ranks.
    Negative,
}

/// Normalized document tokens together with the window read from the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCorpus {
    name: String,
    header: Option<WindowHeader>,
    tokens: Vec<String>,
}

impl TextCorpus {
    /// Creates a corpus from already normalized tokens.
    ///
    /// # Examples
    /// ```
    /// use kindred_core::TokenSource;
    /// use kindred_providers_text::{TextCorpus, WindowHeader};
    ///
    /// let corpus = TextCorpus::new(
    ///     "demo",
    ///     Some(WindowHeader::Radius(2)),
    ///     vec!["cat".into(), "bat".into()],
    /// );
    /// assert_eq!(corpus.len(), 2);
    /// assert_eq!(corpus.window_radius(), Some(2));
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, header: Option<WindowHeader>, tokens: Vec<String>) -> Self {
        Self {
            name: name.into(),
            header,
            tokens,
        }
    }

    /// Window declared by the header, or `None` for input with no lines.
    #[must_use]
    pub fn header(&self) -> Option<WindowHeader> {
        self.header
    }

    /// Reads a corpus from `reader`.
    ///
    /// Input with no lines at all yields a corpus with no header and no
    /// tokens. Lines after the first empty line are not read. A negative
    /// radius is accepted and leaves the window empty.
    ///
    /// # Errors
    /// Returns [`TextCorpusError::InvalidWindowRadius`] when the first line
    /// is not an integer, and [`TextCorpusError::Io`] when reading fails.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use kindred_core::TokenSource;
    /// use kindred_providers_text::TextCorpus;
    ///
    /// let input = Cursor::new("1\nThe Cat's hat.\n\nignored\n");
    /// let corpus = TextCorpus::try_from_reader("demo", input).expect("input is well formed");
    /// assert_eq!(corpus.window_radius(), Some(1));
    /// assert_eq!(corpus.tokens(), ["the", "cat's", "hat"]);
    /// ```
    #[instrument(name = "text.read", err, skip_all, fields(name = name.as_ref()))]
    pub fn try_from_reader<N, R>(name: N, reader: R) -> Result<Self, TextCorpusError>
    where
        N: AsRef<str>,
        R: BufRead,
    {
        let mut lines = reader.lines();
        let Some(first) = lines.next().transpose()? else {
            debug!("input has no lines");
            return Ok(Self::new(name.as_ref(), None, Vec::new()));
        };
        let header = parse_window_header(&first)?;

        let mut tokens = Vec::new();
        let mut text_lines = 0_usize;
        for line in lines {
            let line = line?;
            if line.is_empty() {
                break;
            }
            text_lines += 1;
            tokens.extend(tokenize_line(&line));
        }
        debug!(header = ?header, text_lines, tokens = tokens.len(), "corpus read");
        Ok(Self::new(name.as_ref(), Some(header), tokens))
    }
}

impl TokenSource for TextCorpus {
    fn name(&self) -> &str {
        &self.name
    }

    fn tokens(&self) -> &[String] {
        &self.tokens
    }

    fn window_radius(&self) -> Option<usize> {
        match self.header {
            Some(WindowHeader::Radius(radius)) => Some(radius),
            Some(WindowHeader::Negative) | None => None,
        }
    }

    fn window_is_empty(&self) -> bool {
        self.header == Some(WindowHeader::Negative)
    }
}

/// Parses the header as a signed decimal integer.
///
/// Surrounding whitespace, one leading sign and single `_` separators
/// between digits are accepted. Radii beyond `usize::MAX` saturate and `-0`
/// is zero.
fn parse_window_header(line: &str) -> Result<WindowHeader, TextCorpusError> {
    let invalid = || TextCorpusError::InvalidWindowRadius {
        line: line.to_owned(),
    };
    let trimmed = line.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits = strip_digit_separators(unsigned).ok_or_else(invalid)?;
    if negative && digits.bytes().any(|digit| digit != b'0') {
        return Ok(WindowHeader::Negative);
    }
    // Only ASCII digits remain, so the parse can fail on overflow alone.
    Ok(WindowHeader::Radius(digits.parse().unwrap_or(usize::MAX)))
}

/// Returns the digits of `raw` with separators removed, or `None` unless
/// `raw` is one or more ASCII digits with single `_` between some of them.
fn strip_digit_separators(raw: &str) -> Option<String> {
    let mut digits = String::with_capacity(raw.len());
    let mut after_digit = false;
    for ch in raw.chars() {
        match ch {
            '0'..='9' => {
                digits.push(ch);
                after_digit = true;
            }
            '_' if after_digit => after_digit = false,
            _ => return None,
        }
    }
    after_digit.then_some(digits)
}

/// Keeps ASCII letters and apostrophes from `raw`, lowercased.
///
/// Returns `None` when nothing survives.
///
/// # Examples
/// ```
/// use kindred_providers_text::normalize_token;
///
/// assert_eq!(normalize_token("Don't!"), Some("don't".to_owned()));
/// assert_eq!(normalize_token("42"), None);
/// ```
#[must_use]
pub fn normalize_token(raw: &str) -> Option<String> {
    let token: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == '\'')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    (!token.is_empty()).then_some(token)
}

/// Splits `line` on whitespace and normalizes each piece, dropping empties.
pub fn tokenize_line(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split_whitespace().filter_map(normalize_token)
}
