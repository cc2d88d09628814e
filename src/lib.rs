//! Lexicon Index Library
//!
//! This library contains the core components of the Lexicon Index: the
//! lexicon trie and its search algorithms, word list loading, configuration
//! and error handling. The `lexicon` binary is a thin front end over it.
//!
//! # Architecture
//!
//! The Lexicon Index is designed with the following principles in mind:
//! - Strict component boundaries
//! - Validation at the API boundary, typed errors everywhere else
//! - Single ownership of every trie node
//! - Deterministic, lexicographically ordered results

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod source;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for the Lexicon Index.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
