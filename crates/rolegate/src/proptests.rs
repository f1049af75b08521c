//! Property-based tests for permission evaluation.
