//! Property-based tests for vector geometry.
