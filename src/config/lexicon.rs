//! Trie and word source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::data_structures::lexicon_trie::{
    LexiconTrieConfig, DEFAULT_MAX_WORD_LEN, DEFAULT_WILDCARD_SYMBOL,
};
use crate::error::config::ConfigError;
use crate::source::InvalidWordPolicy;

/// Trie settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieSettings {
    /// Longest accepted word or pattern, in letters
    pub max_word_len: usize,

    /// Symbol that matches any letter in wildcard search
    pub wildcard_symbol: char,
}

impl Default for TrieSettings {
    fn default() -> Self {
        Self {
            max_word_len: DEFAULT_MAX_WORD_LEN,
            wildcard_symbol: DEFAULT_WILDCARD_SYMBOL,
        }
    }
}

impl TrieSettings {
    /// Builds the data structure configuration.
    ///
    /// Call [`Validate::validate`] first; the builder panics on the values
    /// validation rejects.
    pub fn to_trie_config(&self) -> LexiconTrieConfig {
        LexiconTrieConfig::new()
            .with_max_word_len(self.max_word_len)
            .with_wildcard_symbol(self.wildcard_symbol)
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_len == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_word_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.wildcard_symbol.is_ascii_lowercase() {
            return Err(ConfigError::ValidationError(format!(
                "Wildcard symbol {:?} is a lowercase letter",
                self.wildcard_symbol
            )));
        }

        Ok(())
    }
}

/// Word list settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SourceSettings {
    /// Word list loaded at startup, if any
    pub path: Option<PathBuf>,

    /// What to do with words the trie rejects
    pub invalid_words: InvalidWordPolicy,
}

impl Validate for SourceSettings {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "source.path must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
