//! Crate-level tests and shared fixtures
