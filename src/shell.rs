// Copyright (c) 2025 Lexicon Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Line-oriented command session over a loaded lexicon.
//!
//! The interactive `shell` subcommand reads one request per line. One-shot
//! subcommands build the same [`Request`] and run it through a [`Session`],
//! so both surfaces render results identically.

use std::io::{BufRead, Write};
use std::str::FromStr;

use lexicon_index_lib::data_structures::lexicon_trie::LexiconTrie;
use lexicon_index_lib::error::{LexiconError, LexiconResult};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

const HELP: &str = "\
Commands:
  exists <word>...          check whether words are stored
  insert <word>...          add words
  delete <word>...          remove words
  prefix <prefix>           words starting with prefix
  suffix <suffix>           words ending with suffix
  fuzzy <pattern>           fixed length, any non-letter matches any letter
  wildcard <pattern>        fixed length, the wildcard symbol matches any letter
  mismatch <word> [max]     same length, at most max differing letters (default 1)
  all                       every stored word
  count                     number of stored words
  help                      show this text
  quit                      leave the shell";

/// Errors parsing a shell line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command '{0}', type 'help' for a list")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' is not a valid mismatch count")]
    InvalidCount(String),
}

/// One operation against the lexicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Exists(Vec<String>),
    Insert(Vec<String>),
    Delete(Vec<String>),
    Prefix(String),
    Suffix(String),
    Fuzzy(String),
    Wildcard(String),
    Mismatch { word: String, max_mismatches: usize },
    All,
    Count,
    Help,
    Quit,
}

impl FromStr for Request {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return Err(ParseError::MissingArgument {
                command: "a line",
                argument: "a command",
            });
        };
        let rest: Vec<String> = tokens.map(str::to_string).collect();

        let words = |command: &'static str| {
            if rest.is_empty() {
                Err(ParseError::MissingArgument {
                    command,
                    argument: "at least one word",
                })
            } else {
                Ok(rest.clone())
            }
        };
        let single = |command: &'static str, argument: &'static str| {
            rest.first().cloned().ok_or(ParseError::MissingArgument { command, argument })
        };

        match command {
            "exists" => words("exists").map(Request::Exists),
            "insert" => words("insert").map(Request::Insert),
            "delete" => words("delete").map(Request::Delete),
            // Missing prefix or suffix means "every word"
            "prefix" => Ok(Request::Prefix(rest.first().cloned().unwrap_or_default())),
            "suffix" => Ok(Request::Suffix(rest.first().cloned().unwrap_or_default())),
            "fuzzy" => single("fuzzy", "a pattern").map(Request::Fuzzy),
            "wildcard" => single("wildcard", "a pattern").map(Request::Wildcard),
            "mismatch" => {
                let word = single("mismatch", "a word")?;
                let max_mismatches = match rest.get(1) {
                    Some(count) => count
                        .parse()
                        .map_err(|_| ParseError::InvalidCount(count.clone()))?,
                    None => 1,
                };
                Ok(Request::Mismatch {
                    word,
                    max_mismatches,
                })
            }
            "all" => Ok(Request::All),
            "count" => Ok(Request::Count),
            "help" | "?" => Ok(Request::Help),
            "quit" | "exit" => Ok(Request::Quit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

/// Whether a session keeps reading after a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Executes requests against a trie and renders the results.
pub struct Session<'a, W: Write> {
    trie: &'a mut LexiconTrie,
    out: W,
    json: bool,
}

impl<'a, W: Write> Session<'a, W> {
    pub fn new(trie: &'a mut LexiconTrie, out: W, json: bool) -> Self {
        Self { trie, out, json }
    }

    /// Reads requests from `input` until it ends or `quit` is entered.
    ///
    /// Malformed lines and rejected words are reported and the loop goes on;
    /// only output failures end it early.
    pub fn run<R: BufRead>(&mut self, input: R) -> LexiconResult<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let outcome = line
                .parse::<Request>()
                .map_err(|e| LexiconError::Custom(e.to_string()))
                .and_then(|request| self.execute(request));

            match outcome {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(LexiconError::Io(e)) => return Err(LexiconError::Io(e)),
                Err(e) => writeln!(self.out, "error: {e}")?,
            }
        }
        Ok(())
    }

    /// Runs one request.
    pub fn execute(&mut self, request: Request) -> LexiconResult<Flow> {
        debug!(?request, "executing request");
        match request {
            Request::Exists(words) => {
                let found = self.trie.exists_all(&words)?;
                self.render_flags(&words, &found, "Found", "Not Found")?;
            }
            Request::Insert(words) => {
                let added = self.trie.insert_all(&words)?;
                self.render_flags(&words, &added, "Inserted", "Already present")?;
            }
            Request::Delete(words) => {
                let removed = self.trie.delete_all(&words)?;
                self.render_flags(&words, &removed, "Deleted", "Not found")?;
            }
            Request::Prefix(prefix) => {
                let words = self.trie.with_prefix(&prefix)?;
                self.render_words(&words)?;
            }
            Request::Suffix(suffix) => {
                let words = self.trie.with_suffix(&suffix)?;
                self.render_words(&words)?;
            }
            Request::Fuzzy(pattern) => {
                let words = self.trie.fuzzy_match(&pattern)?;
                self.render_words(&words)?;
            }
            Request::Wildcard(pattern) => {
                let words = self.trie.wildcard_match(&pattern)?;
                self.render_words(&words)?;
            }
            Request::Mismatch {
                word,
                max_mismatches,
            } => {
                let words = self.trie.within_mismatch_budget(&word, max_mismatches)?;
                self.render_words(&words)?;
            }
            Request::All => {
                if self.json {
                    let words = self.trie.all_words();
                    self.render_words(&words)?;
                } else {
                    // Stream instead of collecting; the lexicon may be large
                    for word in self.trie.words() {
                        writeln!(self.out, "{word}")?;
                    }
                }
            }
            Request::Count => {
                if self.json {
                    let value = json!({ "words": self.trie.len(), "nodes": self.trie.node_count() });
                    serde_json::to_writer(&mut self.out, &value)?;
                    writeln!(self.out)?;
                } else {
                    writeln!(self.out, "{}", self.trie.len())?;
                }
            }
            Request::Help => writeln!(self.out, "{HELP}")?,
            Request::Quit => return Ok(Flow::Quit),
        }
        self.out.flush()?;
        Ok(Flow::Continue)
    }

    fn render_words(&mut self, words: &[String]) -> LexiconResult<()> {
        if self.json {
            serde_json::to_writer(&mut self.out, words)?;
            writeln!(self.out)?;
        } else {
            for word in words {
                writeln!(self.out, "{word}")?;
            }
        }
        Ok(())
    }

    fn render_flags(
        &mut self,
        words: &[String],
        flags: &[bool],
        yes: &str,
        no: &str,
    ) -> LexiconResult<()> {
        if self.json {
            // One entry per input word, in input order, repeats included
            let value: Vec<serde_json::Value> = words
                .iter()
                .zip(flags)
                .map(|(word, &flag)| json!({ "word": word, "found": flag }))
                .collect();
            serde_json::to_writer(&mut self.out, &value)?;
            writeln!(self.out)?;
        } else {
            for (word, &flag) in words.iter().zip(flags) {
                writeln!(self.out, "{word}: {}", if flag { yes } else { no })?;
            }
        }
        Ok(())
    }
}
