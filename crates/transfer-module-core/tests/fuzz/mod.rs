//! Fuzz tests module
//!
//! Property-based tests using proptest.
