// Copyright (c) 2025 Lexicon Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lexicon Trie.
//!
//! Only malformed input is an error. Words that are simply absent produce
//! ordinary negative results (`false`, an empty `Vec`, a no-op delete).

/// Errors that can occur in Lexicon Trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexiconTrieError {
    /// Error when an empty word or pattern is provided.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// Error when input contains a character outside the accepted alphabet.
    #[error("Invalid character {character:?} at position {position} in '{input}'")]
    InvalidCharacter {
        /// The rejected input.
        input: String,
        /// The offending character.
        character: char,
        /// Zero-based character position within the input.
        position: usize,
    },

    /// Error when input exceeds the configured maximum word length.
    #[error("Word '{word}' exceeds maximum length of {max_len}")]
    WordTooLong {
        /// The word that was too long.
        word: String,
        /// The maximum allowed length.
        max_len: usize,
    },
}

/// Result type for Lexicon Trie operations.
pub type LexiconTrieResult<T> = Result<T, LexiconTrieError>;
