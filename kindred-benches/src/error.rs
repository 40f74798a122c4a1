//! Benchmark setup error types.

use kindred_core::KindredError;

/// Errors raised by an invalid [`crate::corpus::SyntheticCorpusConfig`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// No tokens were requested.
    #[error("token count must be greater than zero")]
    ZeroTokens,
    /// No template stems were requested.
    #[error("stem count must be greater than zero")]
    ZeroStems,
    /// Stem length bounds are empty or start below two characters.
    #[error("invalid stem length range {min_length}..={max_length}; minimum is 2")]
    InvalidStemLength {
        /// Requested minimum length.
        min_length: usize,
        /// Requested maximum length.
        max_length: usize,
    },
}

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic corpus generation failed.
    #[error("synthetic corpus generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A core pipeline stage failed.
    #[error("pipeline stage failed: {0}")]
    Core(#[from] KindredError),
}
