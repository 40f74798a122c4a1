use kindred_core::TokenSource;

#[derive(Clone)]
pub struct WordList {
    tokens: Vec<String>,
    radius: Option<usize>,
    empty_window: bool,
}

impl WordList {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            tokens: text.split_whitespace().map(ToOwned::to_owned).collect(),
            radius: None,
            empty_window: false,
        }
    }

    #[must_use]
    pub fn with_radius(mut self, radius: usize) -> Self {
        self.radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_empty_window(mut self) -> Self {
        self.empty_window = true;
        self
    }
}

impl TokenSource for WordList {
    fn name(&self) -> &str {
        "word-list"
    }

    fn tokens(&self) -> &[String] {
        &self.tokens
    }

    fn window_radius(&self) -> Option<usize> {
        self.radius
    }

    fn window_is_empty(&self) -> bool {
        self.empty_window
    }
}
