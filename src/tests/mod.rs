//! Internal test modules - whitebox tests with crate access
//!
//! Tests here drive the real application shell on a TestBackend through the
//! acceptance harness, or exercise view-state internals with proptest.

// Harness-based acceptance tests
mod acceptance_lookup;
