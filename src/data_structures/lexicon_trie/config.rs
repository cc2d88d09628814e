// Copyright (c) 2025 Lexicon Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Lexicon Trie.

/// Default maximum word length accepted by the trie.
pub const DEFAULT_MAX_WORD_LEN: usize = 64;

/// Default wildcard symbol for [`wildcard_match`](super::LexiconTrie::wildcard_match).
pub const DEFAULT_WILDCARD_SYMBOL: char = '*';

/// Configuration for the Lexicon Trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconTrieConfig {
    /// Longest word, prefix, suffix or pattern accepted.
    /// Also bounds the recursion depth of every traversal.
    max_word_len: usize,

    /// Symbol that matches any single letter in wildcard search
    wildcard_symbol: char,
}

impl LexiconTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - max_word_len: 64
    /// - wildcard_symbol: `*`
    pub fn new() -> Self {
        Self {
            max_word_len: DEFAULT_MAX_WORD_LEN,
            wildcard_symbol: DEFAULT_WILDCARD_SYMBOL,
        }
    }

    /// Set the maximum accepted word length.
    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        if max_word_len == 0 {
            panic!("Maximum word length must be greater than 0");
        }
        self.max_word_len = max_word_len;
        self
    }

    /// Set the wildcard symbol used by wildcard search.
    ///
    /// Lowercase letters are always literal, so they cannot be wildcards.
    pub fn with_wildcard_symbol(mut self, wildcard_symbol: char) -> Self {
        if wildcard_symbol.is_ascii_lowercase() {
            panic!("Wildcard symbol must not be a lowercase letter");
        }
        self.wildcard_symbol = wildcard_symbol;
        self
    }

    /// Get the maximum accepted word length
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// Get the wildcard symbol
    pub fn wildcard_symbol(&self) -> char {
        self.wildcard_symbol
    }
}

impl Default for LexiconTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
