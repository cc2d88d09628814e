//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{
    get_global_config, init_global_config, load_config, ConfigLoader, LexiconConfig, LogConfig,
    Validate, DEFAULT_CONFIG_PATH,
};
use crate::error::config::ConfigError;
use crate::source::InvalidWordPolicy;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = LexiconConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.trie.max_word_len, 64);
    assert_eq!(config.trie.wildcard_symbol, '*');
    assert_eq!(config.source.invalid_words, InvalidWordPolicy::Skip);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = LexiconConfig::default();

    config.trie.max_word_len = 0;
    assert!(config.validate().is_err());

    config.trie.max_word_len = 16;
    config.trie.wildcard_symbol = 'a';
    assert!(config.validate().is_err());

    config.trie.wildcard_symbol = '?';
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log = LogConfig::default();
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    std::env::remove_var("TEST_FILE__TRIE__MAX_WORD_LEN");

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_file_test.toml");

    let config_content = r#"
    [trie]
    max_word_len = 20
    wildcard_symbol = "?"

    [source]
    path = "dataset.txt"
    invalid_words = "reject"
    "#;

    fs::write(&config_path, config_content).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.trie.max_word_len, 20);
    assert_eq!(config.trie.wildcard_symbol, '?');
    assert_eq!(config.source.path, Some(PathBuf::from("dataset.txt")));
    assert_eq!(config.source.invalid_words, InvalidWordPolicy::Reject);

    // Other values should be defaults
    assert_eq!(config.log, LogConfig::default());
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, r#"{ "log": { "level": "debug", "json": true } }"#).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON").load().unwrap();
    assert_eq!(config.log.level, "debug");
    assert!(config.log.json);
    assert_eq!(config.trie.max_word_len, 64);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_env_test.toml");
    fs::write(&config_path, "[trie]\nmax_word_len = 20\n").unwrap();

    // Set environment variables with a unique prefix
    std::env::set_var("TEST_ENV__TRIE__MAX_WORD_LEN", "12");
    std::env::set_var("TEST_ENV__LOG__LEVEL", "warn");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    // Verify environment variables took precedence
    assert_eq!(config.trie.max_word_len, 12);
    assert_eq!(config.log.level, "warn");

    std::env::remove_var("TEST_ENV__TRIE__MAX_WORD_LEN");
    std::env::remove_var("TEST_ENV__LOG__LEVEL");
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("invalid.toml");
    fs::write(&config_path, "[trie\nmax_word_len = twenty\"\n").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Values that parse but fail validation are rejected by the loader.
#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("zero.toml");
    fs::write(&config_path, "[trie]\nmax_word_len = 0\n").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ZERO");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));
}

/// Test missing and unsupported files.
#[test]
fn test_load_missing_or_unsupported_file() {
    let dir = tempdir().unwrap();

    let missing = dir.path().join("missing.toml");
    let loader = ConfigLoader::new(Some(&missing), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));

    let ini = dir.path().join("config.ini");
    fs::write(&ini, "").unwrap();
    let loader = ConfigLoader::new(Some(&ini), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Defaults alone load when no file is given.
#[test]
fn test_load_without_file() {
    let config = ConfigLoader::new(None::<&Path>, "TEST_NONE").load().unwrap();
    assert_eq!(config, LexiconConfig::default());
}

/// A generated configuration loads back unchanged.
#[test]
fn test_generated_config_loads_back() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("generated.toml");
    fs::write(&config_path, LexiconConfig::default().to_toml().unwrap()).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_GEN").load().unwrap();
    assert_eq!(config, LexiconConfig::default());
}

/// Without an explicit path the shipped default file is picked up.
#[test]
fn test_load_config_uses_default_file() {
    assert!(Path::new(DEFAULT_CONFIG_PATH).exists());

    let config = load_config(None).unwrap();
    assert_eq!(config, LexiconConfig::default());
}

/// An explicit path never falls back to defaults.
#[test]
fn test_load_config_explicit_path_must_exist() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    assert!(matches!(
        load_config(Some(&missing)),
        Err(ConfigError::FileNotFound(path)) if path == missing
    ));

    let present = dir.path().join("present.toml");
    fs::write(&present, "[trie]\nwildcard_symbol = \"_\"\n").unwrap();
    assert_eq!(load_config(Some(&present)).unwrap().trie.wildcard_symbol, '_');
}

/// The first global configuration wins and is readable afterwards.
#[test]
fn test_global_config_first_write_wins() {
    let mut first = LexiconConfig::default();
    first.trie.max_word_len = 21;
    init_global_config(first.clone());

    let mut second = LexiconConfig::default();
    second.trie.max_word_len = 42;
    init_global_config(second);

    assert_eq!(get_global_config().unwrap().get(), &first);
}
