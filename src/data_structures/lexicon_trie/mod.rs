// Copyright (c) 2025 Lexicon Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lexicon Trie Implementation
//!
//! An in-memory index over lowercase alphabetic words: a rooted 26-ary tree
//! where every edge is one letter and every node carries a terminal marker.
//!
//! # Features
//!
//! - Exact lookup, single and batched
//! - Lazy lexicographic enumeration of all words or of a prefix subtree
//! - Suffix filtering over the whole lexicon
//! - Fixed-length matching: fuzzy (any non-letter is a wildcard), wildcard
//!   (one designated symbol) and bounded Hamming distance
//! - Deletion with path-local pruning of dead nodes
//!
//! # Example
//!
//! ```
//! use lexicon_index_lib::data_structures::lexicon_trie::LexiconTrie;
//!
//! let mut trie = LexiconTrie::new();
//! trie.load(["cat", "cot", "cut", "cost"]).unwrap();
//!
//! assert!(trie.exists("cat").unwrap());
//! assert!(!trie.exists("ca").unwrap());
//! assert_eq!(trie.wildcard_match("c*t").unwrap(), vec!["cat", "cot", "cut"]);
//! assert_eq!(trie.within_mismatch_budget("cab", 1).unwrap(), vec!["cat"]);
//!
//! trie.delete("cost").unwrap();
//! assert_eq!(trie.with_prefix("co").unwrap(), vec!["cot"]);
//! ```
//!
//! # Ownership
//!
//! Nodes live in a [`NodeArena`] and refer to their children by [`NodeId`].
//! The arena is the only owner, so a node can never have two parents and
//! dropping the trie releases every node exactly once.
//!
//! # Concurrency
//!
//! `LexiconTrie` is a plain single-threaded structure. Use
//! [`SharedLexiconTrie`] to share one across threads.

mod alphabet;
mod arena;
mod config;
mod error;
mod iter;
mod node;
mod search;
mod shared;

use tracing::{debug, info};

pub use alphabet::{Letter, PatternSymbol, ALPHABET_SIZE};
pub use arena::NodeArena;
pub use self::config::{LexiconTrieConfig, DEFAULT_MAX_WORD_LEN, DEFAULT_WILDCARD_SYMBOL};
pub use error::{LexiconTrieError, LexiconTrieResult};
pub use iter::Words;
pub use node::{NodeId, TrieNode};
pub use shared::SharedLexiconTrie;

/// Outcome of pruning one level of a deletion path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pruning {
    /// The node still carries a word or leads to one
    Retain,
    /// The node is dead and must be detached from its parent
    Detach,
}

impl Pruning {
    fn of(node: &TrieNode) -> Self {
        if node.is_dead() {
            Self::Detach
        } else {
            Self::Retain
        }
    }
}

/// Lexicon Trie over the lowercase alphabet `a..=z`.
///
/// Key properties:
/// * The root always exists and stands for the empty prefix
/// * No dead (childless, non-terminal) node is left attached after a delete
/// * Every traversal visits children in letter order, so results are sorted
#[derive(Debug, Clone)]
pub struct LexiconTrie {
    /// Owner of every node
    arena: NodeArena,

    /// The root node
    root: NodeId,

    /// Number of terminal nodes
    word_count: usize,

    /// Configuration options
    config: LexiconTrieConfig,
}

impl LexiconTrie {
    /// Creates a new empty `LexiconTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LexiconTrieConfig::default())
    }

    /// Creates a new empty `LexiconTrie` with the specified configuration.
    pub fn with_config(config: LexiconTrieConfig) -> Self {
        let mut arena = NodeArena::new();
        let root = arena.alloc();
        Self {
            arena,
            root,
            word_count: 0,
            config,
        }
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &LexiconTrieConfig {
        &self.config
    }

    /// Inserts a word into the trie.
    ///
    /// Nodes are allocated lazily, one per letter not yet on the path.
    /// Inserting a word twice leaves the trie unchanged.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was newly added, `false` if it was already present.
    /// * `Err(LexiconTrieError)` - If the word is empty, too long or not lowercase ASCII.
    pub fn insert(&mut self, word: &str) -> LexiconTrieResult<bool> {
        let letters = self.parse_word(word)?;
        Ok(self.insert_letters(word, &letters))
    }

    /// Inserts a batch of words, preserving input order in the result.
    ///
    /// Every word is validated before the trie is touched; a malformed word
    /// fails the whole batch and nothing is inserted.
    pub fn insert_all<I, S>(&mut self, words: I) -> LexiconTrieResult<Vec<bool>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = self.parse_batch(words)?;
        Ok(parsed
            .iter()
            .map(|(word, letters)| self.insert_letters(word, letters))
            .collect())
    }

    fn insert_letters(&mut self, word: &str, letters: &[Letter]) -> bool {
        let mut current = self.root;
        for &letter in letters {
            current = match self.arena[current].child(letter) {
                Some(next) => next,
                None => {
                    let next = self.arena.alloc();
                    self.arena[current].set_child(letter, next);
                    next
                }
            };
        }

        let node = &mut self.arena[current];
        let is_new = !node.terminal;
        node.terminal = true;
        if is_new {
            self.word_count += 1;
        }

        debug!(word, is_new, "inserted word");
        is_new
    }

    /// Inserts every word of `words`, in order.
    ///
    /// Stops at the first malformed word; words before it stay inserted.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of words that were newly added.
    /// * `Err(LexiconTrieError)` - The first validation failure.
    pub fn load<I, S>(&mut self, words: I) -> LexiconTrieResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for word in words {
            if self.insert(word.as_ref())? {
                added += 1;
            }
        }

        info!(added, total = self.word_count, nodes = self.node_count(), "loaded words");
        Ok(added)
    }

    /// Checks whether `word` was inserted and not since deleted.
    ///
    /// A strict prefix of a stored word is not itself a match.
    pub fn exists(&self, word: &str) -> LexiconTrieResult<bool> {
        let letters = self.parse_word(word)?;
        Ok(self.is_stored(&letters))
    }

    /// Checks each word independently, preserving input order.
    ///
    /// Every word is validated before any lookup runs; a malformed word fails
    /// the whole batch.
    pub fn exists_all<I, S>(&self, words: I) -> LexiconTrieResult<Vec<bool>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = self.parse_batch(words)?;
        Ok(parsed
            .iter()
            .map(|(_, letters)| self.is_stored(letters))
            .collect())
    }

    /// Removes a word, pruning nodes that no longer lead to any word.
    ///
    /// Pruning only walks back up the deleted word's own path and stops at
    /// the first node that is terminal or still has a child. Deleting a word
    /// that is not stored is a no-op.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was removed, `false` if it wasn't stored.
    /// * `Err(LexiconTrieError)` - If the word is malformed.
    pub fn delete(&mut self, word: &str) -> LexiconTrieResult<bool> {
        let letters = self.parse_word(word)?;
        Ok(self.delete_letters(word, &letters))
    }

    /// Deletes a batch of words, preserving input order in the result.
    ///
    /// Like [`insert_all`](Self::insert_all), nothing is deleted unless every
    /// word is well formed.
    pub fn delete_all<I, S>(&mut self, words: I) -> LexiconTrieResult<Vec<bool>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = self.parse_batch(words)?;
        Ok(parsed
            .iter()
            .map(|(word, letters)| self.delete_letters(word, letters))
            .collect())
    }

    fn delete_letters(&mut self, word: &str, letters: &[Letter]) -> bool {
        let nodes_before = self.arena.live_count();
        // The root is never detached, whatever its own outcome.
        let (removed, _) = self.delete_from(self.root, letters);
        if removed {
            self.word_count -= 1;
        }

        debug!(
            word,
            removed,
            pruned = nodes_before - self.arena.live_count(),
            "deleted word"
        );
        removed
    }

    /// Post-order step of [`delete`](Self::delete).
    ///
    /// Returns whether a word was unmarked below `node`, and whether `node`
    /// itself is now dead.
    fn delete_from(&mut self, node: NodeId, rest: &[Letter]) -> (bool, Pruning) {
        let Some((&letter, tail)) = rest.split_first() else {
            let target = &mut self.arena[node];
            let removed = std::mem::replace(&mut target.terminal, false);
            return (removed, Pruning::of(target));
        };

        let Some(child) = self.arena[node].child(letter) else {
            return (false, Pruning::Retain);
        };

        let (removed, outcome) = self.delete_from(child, tail);
        if outcome == Pruning::Detach {
            self.arena[node].take_child(letter);
            self.arena.release(child);
        }

        (removed, Pruning::of(&self.arena[node]))
    }

    /// Lazily enumerates every stored word in lexicographic order.
    ///
    /// Each call starts a fresh traversal.
    pub fn words(&self) -> Words<'_> {
        Words::from_node(&self.arena, self.root, String::new())
    }

    /// Collects every stored word in lexicographic order.
    pub fn all_words(&self) -> Vec<String> {
        self.words().collect()
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns the number of live nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.arena.live_count()
    }

    /// Returns the node arena.
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// Returns the id of the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Removes every word, releasing all nodes but a fresh root.
    pub fn clear(&mut self) {
        let released = self.arena.live_count().saturating_sub(1);
        self.arena = NodeArena::new();
        self.root = self.arena.alloc();
        self.word_count = 0;
        debug!(released, "cleared lexicon");
    }

    /// Walks `letters` from the root, returning the node at the end of the path.
    fn descend(&self, letters: &[Letter]) -> Option<NodeId> {
        letters
            .iter()
            .try_fold(self.root, |node, &letter| self.arena[node].child(letter))
    }

    fn is_stored(&self, letters: &[Letter]) -> bool {
        self.descend(letters)
            .is_some_and(|node| self.arena[node].terminal)
    }

    fn parse_word(&self, word: &str) -> LexiconTrieResult<Vec<Letter>> {
        alphabet::parse_word(word, self.config.max_word_len())
    }

    fn parse_batch<I, S>(&self, words: I) -> LexiconTrieResult<Vec<(String, Vec<Letter>)>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|word| {
                let word = word.as_ref();
                self.parse_word(word).map(|letters| (word.to_string(), letters))
            })
            .collect()
    }

    fn parse_letters(&self, input: &str) -> LexiconTrieResult<Vec<Letter>> {
        alphabet::parse_letters(input, self.config.max_word_len())
    }
}

impl Default for LexiconTrie {
    fn default() -> Self {
        Self::new()
    }
}
