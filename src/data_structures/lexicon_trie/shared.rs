// Copyright (c) 2025 Lexicon Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-safe handle around a [`LexiconTrie`].
//!
//! Mutations take the write lock for their whole duration. Read-only
//! traversals share the read lock, since `delete` can reshape any node a
//! traversal might be visiting.

use std::sync::Arc;

use parking_lot::RwLock;

use super::config::LexiconTrieConfig;
use super::error::LexiconTrieResult;
use super::LexiconTrie;

/// A cloneable, thread-safe Lexicon Trie.
///
/// Clones share the same underlying trie.
///
/// # Examples
///
/// ```
/// use std::thread;
/// use lexicon_index_lib::data_structures::lexicon_trie::SharedLexiconTrie;
///
/// let shared = SharedLexiconTrie::new();
/// shared.insert("shared").unwrap();
///
/// let reader = shared.clone();
/// let found = thread::spawn(move || reader.exists("shared").unwrap())
///     .join()
///     .unwrap();
/// assert!(found);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedLexiconTrie {
    inner: Arc<RwLock<LexiconTrie>>,
}

impl SharedLexiconTrie {
    /// Creates a new empty shared trie with default configuration.
    pub fn new() -> Self {
        Self::from_trie(LexiconTrie::new())
    }

    /// Creates a new empty shared trie with the specified configuration.
    pub fn with_config(config: LexiconTrieConfig) -> Self {
        Self::from_trie(LexiconTrie::with_config(config))
    }

    /// Wraps an already populated trie.
    pub fn from_trie(trie: LexiconTrie) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Inserts a word under the write lock. See [`LexiconTrie::insert`].
    pub fn insert(&self, word: &str) -> LexiconTrieResult<bool> {
        self.inner.write().insert(word)
    }

    /// Deletes a word under the write lock, pruning dead nodes.
    pub fn delete(&self, word: &str) -> LexiconTrieResult<bool> {
        self.inner.write().delete(word)
    }

    /// Validates then inserts a batch under one write lock.
    pub fn insert_all<I, S>(&self, words: I) -> LexiconTrieResult<Vec<bool>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.write().insert_all(words)
    }

    /// Validates then deletes a batch under one write lock.
    pub fn delete_all<I, S>(&self, words: I) -> LexiconTrieResult<Vec<bool>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.write().delete_all(words)
    }

    /// Bulk insert under a single write lock.
    pub fn load<I, S>(&self, words: I) -> LexiconTrieResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.write().load(words)
    }

    /// Removes every word.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Checks whether `word` is stored.
    pub fn exists(&self, word: &str) -> LexiconTrieResult<bool> {
        self.inner.read().exists(word)
    }

    /// Checks each word under one read lock, preserving input order.
    pub fn exists_all<I, S>(&self, words: I) -> LexiconTrieResult<Vec<bool>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.read().exists_all(words)
    }

    /// Collects every word in lexicographic order.
    pub fn all_words(&self) -> Vec<String> {
        self.inner.read().all_words()
    }

    /// Words starting with `prefix`.
    pub fn with_prefix(&self, prefix: &str) -> LexiconTrieResult<Vec<String>> {
        self.inner.read().with_prefix(prefix)
    }

    /// Words ending with `suffix`.
    pub fn with_suffix(&self, suffix: &str) -> LexiconTrieResult<Vec<String>> {
        self.inner.read().with_suffix(suffix)
    }

    /// Same-length words; non-letters in `pattern` match any letter.
    pub fn fuzzy_match(&self, pattern: &str) -> LexiconTrieResult<Vec<String>> {
        self.inner.read().fuzzy_match(pattern)
    }

    /// Same-length words; the wildcard symbol matches any letter.
    pub fn wildcard_match(&self, pattern: &str) -> LexiconTrieResult<Vec<String>> {
        self.inner.read().wildcard_match(pattern)
    }

    /// Same-length words differing from `word` in at most `max_mismatches` letters.
    pub fn within_mismatch_budget(
        &self,
        word: &str,
        max_mismatches: usize,
    ) -> LexiconTrieResult<Vec<String>> {
        self.inner.read().within_mismatch_budget(word, max_mismatches)
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether no word is stored.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Runs `f` against the trie while holding the read lock.
    ///
    /// Use this for lazy traversals such as [`LexiconTrie::words`], which
    /// borrow the trie and cannot outlive the lock.
    pub fn read<R>(&self, f: impl FnOnce(&LexiconTrie) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` against the trie while holding the write lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut LexiconTrie) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl From<LexiconTrie> for SharedLexiconTrie {
    fn from(trie: LexiconTrie) -> Self {
        Self::from_trie(trie)
    }
}
