// Copyright (c) 2025 Lexicon Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Derived searches over a [`LexiconTrie`].
//!
//! Prefix search descends once and enumerates a subtree. Suffix search is a
//! filtered full enumeration. Fuzzy, wildcard and mismatch-bounded search
//! all walk the trie one pattern position per level and only emit words of
//! exactly the pattern's length.

use tracing::trace;

use super::alphabet::{self, Letter, PatternSymbol};
use super::error::LexiconTrieResult;
use super::iter::Words;
use super::node::NodeId;
use super::LexiconTrie;

impl LexiconTrie {
    /// Lazily enumerates the stored words starting with `prefix`.
    ///
    /// The empty prefix enumerates every word. A prefix with no path in the
    /// trie yields nothing.
    pub fn words_with_prefix(&self, prefix: &str) -> LexiconTrieResult<Words<'_>> {
        let letters = self.parse_letters(prefix)?;

        Ok(match self.descend(&letters) {
            Some(node) => Words::from_node(&self.arena, node, prefix.to_string()),
            None => Words::empty(&self.arena),
        })
    }

    /// Returns every stored word starting with `prefix`, in lexicographic order.
    pub fn with_prefix(&self, prefix: &str) -> LexiconTrieResult<Vec<String>> {
        let matches: Vec<String> = self.words_with_prefix(prefix)?.collect();
        trace!(prefix, matches = matches.len(), "prefix search");
        Ok(matches)
    }

    /// Checks whether any stored word starts with `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> LexiconTrieResult<bool> {
        let letters = self.parse_letters(prefix)?;

        // Pruning guarantees every non-root node leads to a word; the root
        // only does when the trie is non-empty.
        Ok(match self.descend(&letters) {
            Some(node) => node != self.root || self.word_count > 0,
            None => false,
        })
    }

    /// Returns every stored word ending with `suffix`, in lexicographic order.
    ///
    /// This scans the whole trie; there is no reverse index.
    pub fn with_suffix(&self, suffix: &str) -> LexiconTrieResult<Vec<String>> {
        self.parse_letters(suffix)?;

        let matches: Vec<String> = self
            .words()
            .filter(|word| word.ends_with(suffix))
            .collect();
        trace!(suffix, matches = matches.len(), "suffix search");
        Ok(matches)
    }

    /// Fixed-length match where every non-letter character in `pattern`
    /// matches any single letter.
    ///
    /// ```
    /// use lexicon_index_lib::data_structures::lexicon_trie::LexiconTrie;
    ///
    /// let mut trie = LexiconTrie::new();
    /// trie.load(["cat", "cot", "cost"]).unwrap();
    /// assert_eq!(trie.fuzzy_match("c.t").unwrap(), vec!["cat", "cot"]);
    /// assert_eq!(trie.fuzzy_match("c?#t").unwrap(), vec!["cost"]);
    /// ```
    pub fn fuzzy_match(&self, pattern: &str) -> LexiconTrieResult<Vec<String>> {
        let symbols = alphabet::parse_fuzzy_pattern(pattern, self.config.max_word_len())?;
        let matches = self.match_pattern(&symbols);
        trace!(pattern, matches = matches.len(), "fuzzy search");
        Ok(matches)
    }

    /// Fixed-length match where only the configured wildcard symbol (`*` by
    /// default) matches any single letter.
    ///
    /// Any other non-letter character is rejected.
    pub fn wildcard_match(&self, pattern: &str) -> LexiconTrieResult<Vec<String>> {
        let symbols = alphabet::parse_wildcard_pattern(
            pattern,
            self.config.wildcard_symbol(),
            self.config.max_word_len(),
        )?;
        let matches = self.match_pattern(&symbols);
        trace!(pattern, matches = matches.len(), "wildcard search");
        Ok(matches)
    }

    /// Returns the stored words of the same length as `word` that differ
    /// from it in at most `max_mismatches` positions.
    ///
    /// This is a Hamming distance bound: substitutions only, no insertions
    /// or deletions. A budget of zero degenerates to an exact lookup.
    pub fn within_mismatch_budget(
        &self,
        word: &str,
        max_mismatches: usize,
    ) -> LexiconTrieResult<Vec<String>> {
        let letters = self.parse_word(word)?;

        let mut path = String::with_capacity(letters.len());
        let mut matches = Vec::new();
        self.collect_within_budget(self.root, &letters, max_mismatches, &mut path, &mut matches);

        trace!(word, max_mismatches, matches = matches.len(), "mismatch search");
        Ok(matches)
    }

    fn match_pattern(&self, symbols: &[PatternSymbol]) -> Vec<String> {
        let mut path = String::with_capacity(symbols.len());
        let mut matches = Vec::new();
        self.collect_pattern(self.root, symbols, &mut path, &mut matches);
        matches
    }

    fn collect_pattern(
        &self,
        node: NodeId,
        symbols: &[PatternSymbol],
        path: &mut String,
        matches: &mut Vec<String>,
    ) {
        let Some((symbol, rest)) = symbols.split_first() else {
            if self.arena[node].terminal {
                matches.push(path.clone());
            }
            return;
        };

        match *symbol {
            PatternSymbol::Exact(letter) => {
                if let Some(child) = self.arena[node].child(letter) {
                    path.push(letter.as_char());
                    self.collect_pattern(child, rest, path, matches);
                    path.pop();
                }
            }
            PatternSymbol::Any => {
                for (letter, child) in self.arena[node].children() {
                    path.push(letter.as_char());
                    self.collect_pattern(child, rest, path, matches);
                    path.pop();
                }
            }
        }
    }

    fn collect_within_budget(
        &self,
        node: NodeId,
        expected: &[Letter],
        budget: usize,
        path: &mut String,
        matches: &mut Vec<String>,
    ) {
        let Some((&wanted, rest)) = expected.split_first() else {
            if self.arena[node].terminal {
                matches.push(path.clone());
            }
            return;
        };

        for (letter, child) in self.arena[node].children() {
            let cost = usize::from(letter != wanted);
            // Over budget: abandon this branch
            let Some(remaining) = budget.checked_sub(cost) else {
                continue;
            };
            path.push(letter.as_char());
            self.collect_within_budget(child, rest, remaining, path, matches);
            path.pop();
        }
    }
}
