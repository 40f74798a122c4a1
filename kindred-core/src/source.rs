//! Token source abstraction for the Kindred pipeline.

/// A named, already tokenized document.
///
/// # Examples
/// ```
/// use kindred_core::TokenSource;
///
/// struct Words(Vec<String>);
///
/// impl TokenSource for Words {
///     fn name(&self) -> &str { "words" }
///     fn tokens(&self) -> &[String] { &self.0 }
/// }
///
/// let source = Words(vec!["cat".into(), "bat".into()]);
/// assert_eq!(source.len(), 2);
/// assert!(!source.is_empty());
/// assert_eq!(source.window_radius(), None);
/// assert!(!source.window_is_empty());
/// ```
pub trait TokenSource {
    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the normalized tokens in document order, duplicates included.
    fn tokens(&self) -> &[String];

    /// Window radius carried by the document itself, if any. When present it
    /// takes precedence over the radius configured on [`crate::Kindred`].
    fn window_radius(&self) -> Option<usize> {
        None
    }

    /// Whether the document declares a window that covers no neighbours at
    /// all, such as a negative radius. Such a document ranks nothing.
    fn window_is_empty(&self) -> bool {
        false
    }

    /// Returns the number of tokens.
    #[must_use]
    fn len(&self) -> usize {
        self.tokens().len()
    }

    /// Returns whether the document has no tokens.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.tokens().is_empty()
    }
}
