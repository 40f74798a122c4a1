//! Property-based tests for variant clustering and windowed counting.
//!
//! Checks the disjoint-set forest for order independence, compares cluster
//! construction and counting against a brute-force oracle, and verifies that
//! both counting strategies agree on generated corpora.

mod oracle;
mod strategies;
mod types;
