//! Unit tests for the palaver crate.
//!
//! Tests are organised by concept, covering happy paths, error cases, and
//! edge cases for all public APIs.

mod domain_tests;
mod support;
