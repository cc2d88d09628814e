// Copyright (c) 2025 Lexicon Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word sources that feed a trie before it is queried.
//!
//! A word list is a plain text stream of whitespace-separated words, read
//! fully and inserted in stream order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::data_structures::lexicon_trie::LexiconTrie;
use crate::error::source::{SourceError, SourceResult};

/// A word read from a source, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceWord {
    /// The word as it appeared in the source, unvalidated
    pub word: String,
    /// Line the word was read from
    pub line: usize,
}

impl SourceWord {
    /// Creates a word read from `line`.
    pub fn new<S: Into<String>>(word: S, line: usize) -> Self {
        Self {
            word: word.into(),
            line,
        }
    }
}

/// Supplier of an ordered sequence of words.
#[cfg_attr(test, mockall::automock)]
pub trait WordSource {
    /// Reads every remaining word, in order.
    fn read_words(&mut self) -> SourceResult<Vec<SourceWord>>;
}

/// Reads whitespace-separated words from any buffered reader.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> WordSource for ReaderSource<R> {
    fn read_words(&mut self) -> SourceResult<Vec<SourceWord>> {
        let mut words = Vec::new();
        for (index, line) in (&mut self.reader).lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|source| SourceError::Read {
                line: line_no,
                source,
            })?;
            words.extend(
                line.split_whitespace()
                    .map(|word| SourceWord::new(word, line_no)),
            );
        }
        Ok(words)
    }
}

/// Reads a word list from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for the file at `path`; nothing is opened yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the word list.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileSource {
    fn read_words(&mut self) -> SourceResult<Vec<SourceWord>> {
        let file = File::open(&self.path).map_err(|source| SourceError::Open {
            path: self.path.clone(),
            source,
        })?;
        ReaderSource::new(BufReader::new(file)).read_words()
    }
}

/// What to do with a word the trie rejects while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidWordPolicy {
    /// Abort the load at the first invalid word.
    Reject,
    /// Log the invalid word and carry on.
    #[default]
    Skip,
}

/// Summary of a [`populate`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LoadReport {
    /// Words read from the source
    pub read: usize,
    /// Words that were new to the trie
    pub inserted: usize,
    /// Valid words that were already present
    pub duplicates: usize,
    /// Invalid words skipped under [`InvalidWordPolicy::Skip`]
    pub skipped: usize,
}

/// Loads every word of `source` into `trie`, in source order.
///
/// Under [`InvalidWordPolicy::Reject`] the first invalid word aborts the
/// load; words before it stay inserted.
pub fn populate<S>(
    trie: &mut LexiconTrie,
    source: &mut S,
    policy: InvalidWordPolicy,
) -> SourceResult<LoadReport>
where
    S: WordSource + ?Sized,
{
    let words = source.read_words()?;
    let mut report = LoadReport {
        read: words.len(),
        ..LoadReport::default()
    };

    for SourceWord { word, line } in words {
        match trie.insert(&word) {
            Ok(true) => report.inserted += 1,
            Ok(false) => report.duplicates += 1,
            Err(source) => match policy {
                InvalidWordPolicy::Reject => {
                    return Err(SourceError::InvalidWord { word, line, source });
                }
                InvalidWordPolicy::Skip => {
                    warn!(word = %word, line, error = %source, "skipping invalid word");
                    report.skipped += 1;
                }
            },
        }
    }

    info!(
        read = report.read,
        inserted = report.inserted,
        duplicates = report.duplicates,
        skipped = report.skipped,
        "word list loaded"
    );
    Ok(report)
}
