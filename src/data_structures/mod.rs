//! Data structures for the Lexicon Index.
//!
//! This module contains the in-memory word index and its search algorithms.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Input validated at the API boundary, never indexed unchecked
//! - Nodes owned by a single arena, addressed by stable ids

pub mod lexicon_trie;

// Re-export common data structures
pub use lexicon_trie::{
    LexiconTrie, LexiconTrieConfig, LexiconTrieError, LexiconTrieResult, SharedLexiconTrie,
};
