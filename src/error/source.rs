//! Word source error module.
//!
//! Errors raised while reading a word list and loading it into a trie.

use std::path::PathBuf;
use thiserror::Error;

use crate::data_structures::lexicon_trie::LexiconTrieError;

/// Result type for word source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while reading or loading words.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The word list could not be opened.
    #[error("Failed to open word list {path}: {source}")]
    Open {
        /// Path of the word list
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Reading from the underlying stream failed.
    #[error("Failed to read word list at line {line}: {source}")]
    Read {
        /// 1-based line number being read
        line: usize,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A word was rejected by the trie and the policy forbids skipping it.
    #[error("Invalid word '{word}' at line {line}: {source}")]
    InvalidWord {
        /// The offending token
        word: String,
        /// 1-based line number of the token
        line: usize,
        /// Why the trie rejected it
        #[source]
        source: LexiconTrieError,
    },
}
