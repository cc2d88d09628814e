//! Benchmarking support for the Lexicon Index.
//!
//! Deterministic synthetic lexicons, so benchmark runs are comparable
//! without a word list on disk or a random number generator.

use crate::data_structures::lexicon_trie::{LexiconTrie, LexiconTrieResult};

/// Generates `count` distinct lowercase words of `min_len..=max_len` letters.
///
/// Words are produced by a fixed linear congruential sequence; the same
/// arguments always yield the same words in the same order.
pub fn synthetic_words(count: usize, min_len: usize, max_len: usize) -> Vec<String> {
    assert!(min_len > 0 && min_len <= max_len, "invalid word length range");

    let span = (max_len - min_len + 1) as u64;
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        state >> 33
    };

    let mut seen = std::collections::BTreeSet::new();
    let mut words = Vec::with_capacity(count);
    while words.len() < count {
        let len = min_len + (next() % span) as usize;
        let word: String = (0..len)
            .map(|_| char::from(b'a' + (next() % 26) as u8))
            .collect();
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }
    words
}

/// Builds a trie holding `count` synthetic words.
///
/// Fails only if `max_len` exceeds the trie's default maximum word length.
pub fn synthetic_trie(
    count: usize,
    min_len: usize,
    max_len: usize,
) -> LexiconTrieResult<(LexiconTrie, Vec<String>)> {
    let words = synthetic_words(count, min_len, max_len);
    let mut trie = LexiconTrie::new();
    trie.load(&words)?;
    Ok((trie, words))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_words_are_deterministic() {
        let first = synthetic_words(100, 3, 8);
        assert_eq!(first, synthetic_words(100, 3, 8));
        assert!(first.iter().all(|w| (3..=8).contains(&w.len())));

        let (trie, words) = synthetic_trie(100, 3, 8).unwrap();
        assert_eq!(trie.len(), words.len());
    }
}
