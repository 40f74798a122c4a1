//! Shared test utilities used across kindred crates.
//!
//! - [`tracing`] captures spans and events so instrumentation can be asserted.
//! - [`proptest_profile`] reads environment overrides for property suites.

pub mod proptest_profile;
pub mod tracing;
