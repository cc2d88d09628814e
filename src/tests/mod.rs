//! Test modules for the Lexicon Index.
//!
//! This module contains crate-internal testing infrastructure, including:
//! - Property-based tests of the trie using proptest
//! - Table-driven tests using test-case
//! - Mocked word sources using mockall
//! - Test fixtures and utilities
//!
//! Unit tests for individual modules live next to the code they test.

pub mod config_tests;
pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, lexicon_strategy, word_strategy, TestFixture};
