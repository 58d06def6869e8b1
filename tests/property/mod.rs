//! Property-based tests for the snapshot invariants

mod determinism;
