// Copyright (c) 2025 Lexicon Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Lexicon Trie through the public library API.

use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;

use lexicon_index_lib::config::{ConfigLoader, Validate};
use lexicon_index_lib::data_structures::lexicon_trie::{
    LexiconTrie, LexiconTrieConfig, LexiconTrieError, SharedLexiconTrie,
};
use lexicon_index_lib::source::{populate, FileSource, InvalidWordPolicy};

const DATASET: &str = "\
apple apply ape
banana band bandana
cat cot cut cost car cart
dog dot
";

fn dataset_trie() -> LexiconTrie {
    let mut trie = LexiconTrie::new();
    trie.load(DATASET.split_whitespace()).unwrap();
    trie
}

#[test]
fn test_full_query_surface() {
    let trie = dataset_trie();

    assert_eq!(trie.len(), 14);
    assert_eq!(
        trie.exists_all(["apple", "app", "band", "bands"]).unwrap(),
        vec![true, false, true, false]
    );
    assert_eq!(trie.with_prefix("ban").unwrap(), vec!["banana", "band", "bandana"]);
    assert_eq!(trie.with_suffix("na").unwrap(), vec!["banana", "bandana"]);
    assert_eq!(trie.fuzzy_match("d.?").unwrap(), vec!["dog", "dot"]);
    assert_eq!(trie.wildcard_match("c*t").unwrap(), vec!["cat", "cot", "cut"]);
    assert_eq!(
        trie.within_mismatch_budget("dat", 1).unwrap(),
        vec!["cat", "dot"]
    );

    let all = trie.all_words();
    let mut sorted = all.clone();
    sorted.sort();
    assert_eq!(all, sorted);
}

#[test]
fn test_delete_and_reinsert() {
    let mut trie = dataset_trie();
    let nodes = trie.node_count();

    assert!(trie.delete("bandana").unwrap());
    assert!(trie.exists("band").unwrap());
    assert_eq!(trie.node_count(), nodes - 3);

    assert!(trie.insert("bandana").unwrap());
    assert_eq!(trie.node_count(), nodes);
    assert_eq!(trie.all_words(), dataset_trie().all_words());
}

#[test]
fn test_lazy_words_stop_early() {
    let trie = dataset_trie();

    let first: Vec<String> = trie.words().take(3).collect();
    assert_eq!(first, vec!["ape", "apple", "apply"]);

    let in_car: Vec<String> = trie.words_with_prefix("car").unwrap().collect();
    assert_eq!(in_car, vec!["car", "cart"]);
}

#[test]
fn test_configured_limits() {
    let config = LexiconTrieConfig::new().with_max_word_len(4).with_wildcard_symbol('_');
    let mut trie = LexiconTrie::with_config(config);
    trie.load(["cat", "cost"]).unwrap();

    assert!(matches!(
        trie.insert("costly"),
        Err(LexiconTrieError::WordTooLong { max_len: 4, .. })
    ));
    assert_eq!(trie.wildcard_match("c__t").unwrap(), vec!["cost"]);
    assert!(trie.wildcard_match("c**t").is_err());
}

#[test]
fn test_config_file_drives_loading() {
    let dir = tempfile::tempdir().unwrap();
    let words_path = dir.path().join("dataset.txt");
    fs::write(&words_path, "alpha Beta gamma\n").unwrap();

    let config_path = dir.path().join("lexicon.toml");
    fs::write(
        &config_path,
        format!(
            "[trie]\nmax_word_len = 10\n\n[source]\npath = {:?}\ninvalid_words = \"skip\"\n",
            words_path
        ),
    )
    .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "LEXICON_IT").load().unwrap();
    assert!(config.validate().is_ok());

    let mut trie = LexiconTrie::with_config(config.trie.to_trie_config());
    let path = config.source.path.as_ref().unwrap();
    let report = populate(&mut trie, &mut FileSource::new(path), config.source.invalid_words).unwrap();

    assert_eq!(config.source.invalid_words, InvalidWordPolicy::Skip);
    assert_eq!(report.skipped, 1);
    assert_eq!(trie.all_words(), vec!["alpha", "gamma"]);
}

#[test]
fn test_shared_trie_concurrent_access() {
    const WRITERS: usize = 4;
    const READERS: usize = 4;

    let shared = SharedLexiconTrie::new();
    shared.load(["base", "basis"]).unwrap();

    let barrier = Arc::new(Barrier::new(WRITERS + READERS));
    let mut handles = Vec::new();

    for w in 0..WRITERS {
        let trie = shared.clone();
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            let letter = char::from(b'k' + w as u8);
            for i in 0..26u8 {
                let word = format!("{letter}{}", char::from(b'a' + i));
                trie.insert(&word).unwrap();
                if i % 2 == 0 {
                    trie.delete(&word).unwrap();
                }
            }
        }));
    }

    for _ in 0..READERS {
        let trie = shared.clone();
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for _ in 0..100 {
                // Words untouched by writers stay visible throughout
                assert_eq!(trie.with_prefix("bas").unwrap(), vec!["base", "basis"]);
                assert!(trie.wildcard_match("ba*e").unwrap().contains(&"base".to_string()));
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // Each writer keeps the 13 words at odd offsets
    assert_eq!(shared.len(), 2 + WRITERS * 13);
    shared.read(|trie| {
        assert!(trie.words().all(|word| word.len() == 2 || word.starts_with("bas")));
    });
}
