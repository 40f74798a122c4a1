//! Builder utilities for configuring Kindred runs.
//!
//! Exposes the window radius and counting strategy and validates them before
//! constructing [`Kindred`] instances.

use crate::{Result, cooccurrence::CountingStrategy, error::KindredError, kindred::Kindred};

/// Configures and constructs [`Kindred`] instances.
///
/// # Examples
/// ```
/// use kindred_core::{CountingStrategy, KindredBuilder};
///
/// let kindred = KindredBuilder::new()
///     .with_window_radius(3)
///     .with_strategy(CountingStrategy::Sequential)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(kindred.window_radius(), 3);
/// assert_eq!(kindred.strategy(), CountingStrategy::Sequential);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KindredBuilder {
    window_radius: usize,
    strategy: CountingStrategy,
}

impl KindredBuilder {
    /// Creates a builder with a zero window radius and sequential counting.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the window radius used when a source carries none.
    #[must_use]
    pub fn with_window_radius(mut self, radius: usize) -> Self {
        self.window_radius = radius;
        self
    }

    /// Returns the configured window radius.
    #[must_use]
    pub fn window_radius(&self) -> usize {
        self.window_radius
    }

    /// Sets the counting strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: CountingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured counting strategy.
    #[must_use]
    pub fn strategy(&self) -> CountingStrategy {
        self.strategy
    }

    /// Validates the configuration and constructs a [`Kindred`] instance.
    ///
    /// # Errors
    /// Returns [`KindredError::StrategyUnavailable`] when the requested
    /// strategy is not compiled into this build.
    pub fn build(self) -> Result<Kindred> {
        if !self.strategy.is_available() {
            return Err(KindredError::StrategyUnavailable {
                requested: self.strategy,
            });
        }
        Ok(Kindred::new(self.window_radius, self.strategy))
    }
}
