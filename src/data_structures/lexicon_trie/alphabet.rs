// Copyright (c) 2025 Lexicon Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The fixed lowercase alphabet and boundary validation.
//!
//! Every word, prefix, suffix and pattern is validated here before any
//! character is turned into a child index, so traversal code only ever sees
//! [`Letter`] values in the range `0..ALPHABET_SIZE`.

use super::error::{LexiconTrieError, LexiconTrieResult};

/// Number of symbols in the alphabet (`a` through `z`).
pub const ALPHABET_SIZE: usize = 26;

/// A single lowercase ASCII letter, stored as its offset from `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Converts a character into a letter.
    ///
    /// Returns `None` for anything outside `a..=z`, including uppercase.
    pub fn from_char(character: char) -> Option<Self> {
        if character.is_ascii_lowercase() {
            Some(Self(character as u8 - b'a'))
        } else {
            None
        }
    }

    /// Returns the letter at `index` in alphabet order.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Position of this letter in alphabet order.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The character this letter stands for.
    pub const fn as_char(self) -> char {
        (b'a' + self.0) as char
    }
}

/// One position of a fixed-length search pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSymbol {
    /// Only this letter matches.
    Exact(Letter),
    /// Any letter matches.
    Any,
}

/// Parses a possibly-empty run of letters (prefixes and suffixes).
pub(crate) fn parse_letters(input: &str, max_len: usize) -> LexiconTrieResult<Vec<Letter>> {
    check_length(input, max_len)?;

    input
        .chars()
        .enumerate()
        .map(|(position, character)| {
            Letter::from_char(character).ok_or_else(|| LexiconTrieError::InvalidCharacter {
                input: input.to_string(),
                character,
                position,
            })
        })
        .collect()
}

/// Parses a complete word. The empty word is rejected.
pub(crate) fn parse_word(input: &str, max_len: usize) -> LexiconTrieResult<Vec<Letter>> {
    if input.is_empty() {
        return Err(LexiconTrieError::EmptyWord);
    }
    parse_letters(input, max_len)
}

/// Parses a fuzzy pattern: letters are literal, every other character is a wildcard.
pub(crate) fn parse_fuzzy_pattern(
    input: &str,
    max_len: usize,
) -> LexiconTrieResult<Vec<PatternSymbol>> {
    if input.is_empty() {
        return Err(LexiconTrieError::EmptyWord);
    }
    check_length(input, max_len)?;

    Ok(input
        .chars()
        .map(|character| match Letter::from_char(character) {
            Some(letter) => PatternSymbol::Exact(letter),
            None => PatternSymbol::Any,
        })
        .collect())
}

/// Parses a wildcard pattern: letters are literal, `wildcard` matches any
/// letter and every other character is rejected.
pub(crate) fn parse_wildcard_pattern(
    input: &str,
    wildcard: char,
    max_len: usize,
) -> LexiconTrieResult<Vec<PatternSymbol>> {
    if input.is_empty() {
        return Err(LexiconTrieError::EmptyWord);
    }
    check_length(input, max_len)?;

    input
        .chars()
        .enumerate()
        .map(|(position, character)| {
            if character == wildcard {
                return Ok(PatternSymbol::Any);
            }
            Letter::from_char(character)
                .map(PatternSymbol::Exact)
                .ok_or_else(|| LexiconTrieError::InvalidCharacter {
                    input: input.to_string(),
                    character,
                    position,
                })
        })
        .collect()
}

fn check_length(input: &str, max_len: usize) -> LexiconTrieResult<()> {
    if input.chars().count() > max_len {
        return Err(LexiconTrieError::WordTooLong {
            word: input.to_string(),
            max_len,
        });
    }
    Ok(())
}
