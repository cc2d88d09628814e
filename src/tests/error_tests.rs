//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::data_structures::lexicon_trie::{LexiconTrie, LexiconTrieError};
use crate::error::config::ConfigError;
use crate::error::source::SourceError;
use crate::error::{
    get_error_reporting, has_error_reporter, report_error, set_error_reporter, ErrorContext,
    ErrorReporter, LexiconError, LexiconResult, TracingErrorReporter,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = LexiconError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let lexicon_error = LexiconError::Io(io_error);

    let error_string = format!("{lexicon_error}");
    assert!(error_string.contains("file not found"));
}

/// Component errors convert into the crate error with `?`.
#[test]
fn test_component_errors_convert() {
    fn insert_shouting() -> LexiconResult<bool> {
        let mut trie = LexiconTrie::new();
        Ok(trie.insert("LOUD")?)
    }

    let err = insert_shouting().unwrap_err();
    assert!(matches!(
        err,
        LexiconError::Trie(LexiconTrieError::InvalidCharacter { character: 'L', position: 0, .. })
    ));
    assert!(err.to_string().starts_with("Lexicon error: "));

    let err: LexiconError = ConfigError::ValidationError("bad level".to_string()).into();
    assert!(matches!(err, LexiconError::Config(_)));

    let err: LexiconError = SourceError::InvalidWord {
        word: "Dog".to_string(),
        line: 4,
        source: LexiconTrieError::EmptyWord,
    }
    .into();
    assert!(err.to_string().contains("line 4"));
}

/// Source errors keep the trie error as their source.
#[test]
fn test_source_error_chain() {
    use std::error::Error as _;

    let err = SourceError::InvalidWord {
        word: "x1".to_string(),
        line: 2,
        source: LexiconTrieError::InvalidCharacter {
            input: "x1".to_string(),
            character: '1',
            position: 1,
        },
    };
    let source = err.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("Invalid character '1' at position 1 in 'x1'"));
}

/// Mock error reporter for testing.
#[derive(Debug)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn new() -> Self {
        Self {
            reported_count: AtomicUsize::new(0),
        }
    }

    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter works correctly.
///
/// Note: This test modifies global state.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::new());
    set_error_reporter(reporter.clone());
    assert!(has_error_reporter());

    let error = LexiconError::Custom("test error".to_string());
    get_error_reporting().report(ErrorContext::new(error, "test_component"));

    let error = LexiconError::Custom("second error".to_string());
    report_error(ErrorContext::new(error, "test_component"));

    assert_eq!(reporter.reported_count(), 2);
}

/// Test that the default tracing error reporter can be created.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter::new();
    let error = LexiconError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
