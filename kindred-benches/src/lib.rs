//! Benchmark support crate for kindred.
//!
//! Provides seeded synthetic corpora rich in spelling variants for the
//! Criterion benchmarks of link harvesting, cluster construction and windowed
//! counting.

pub mod corpus;
pub mod error;
