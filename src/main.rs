//! Lexicon Index - Main entrypoint.
//!
//! Loads the configuration and word list, initializes logging, then either
//! runs a single query or opens an interactive shell.

mod shell;

use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use lexicon_index_lib::config::{self, LexiconConfig, LogConfig, Validate};
use lexicon_index_lib::data_structures::lexicon_trie::LexiconTrie;
use lexicon_index_lib::error::{
    report_error, set_error_reporter, ErrorContext, LexiconError, LexiconResult,
    TracingErrorReporter,
};
use lexicon_index_lib::source::{populate, FileSource, LoadReport};
use serde_json::json;
use tracing::info;

use shell::{Request, Session};

/// Command line arguments for the Lexicon Index.
#[derive(Parser, Debug)]
#[clap(name = "lexicon", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load, overriding `source.path` from the configuration
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    #[clap(flatten)]
    Query(QueryCommand),

    /// Print word, node and load statistics
    Stats,

    /// Start an interactive shell (default)
    Shell,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// One-shot queries, each mapped onto a shell request.
#[derive(Subcommand, Debug)]
enum QueryCommand {
    /// Check whether each word is stored
    Exists {
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// List words starting with a prefix
    Prefix { prefix: String },

    /// List words ending with a suffix
    Suffix { suffix: String },

    /// Fixed-length search where any non-letter matches any letter
    Fuzzy { pattern: String },

    /// Fixed-length search where the wildcard symbol matches any letter
    Wildcard { pattern: String },

    /// Same-length words differing in at most `max` letters
    Mismatch {
        word: String,

        /// Largest number of differing letters
        #[clap(short, long, default_value_t = 1)]
        max: usize,
    },

    /// List every stored word
    All,

    /// Report which words a delete would remove; the word list is not modified
    Delete {
        #[clap(required = true)]
        words: Vec<String>,
    },
}

impl From<QueryCommand> for Request {
    fn from(query: QueryCommand) -> Self {
        match query {
            QueryCommand::Exists { words } => Request::Exists(words),
            QueryCommand::Prefix { prefix } => Request::Prefix(prefix),
            QueryCommand::Suffix { suffix } => Request::Suffix(suffix),
            QueryCommand::Fuzzy { pattern } => Request::Fuzzy(pattern),
            QueryCommand::Wildcard { pattern } => Request::Wildcard(pattern),
            QueryCommand::Mismatch { word, max } => Request::Mismatch {
                word,
                max_mismatches: max,
            },
            QueryCommand::All => Request::All,
            QueryCommand::Delete { words } => Request::Delete(words),
        }
    }
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> LexiconResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| LexiconError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds a trie from the configuration and fills it from the word list, if any.
fn load_lexicon(config: &LexiconConfig) -> LexiconResult<(LexiconTrie, Option<LoadReport>)> {
    let mut trie = LexiconTrie::with_config(config.trie.to_trie_config());

    let Some(path) = &config.source.path else {
        info!("No word list configured, starting with an empty lexicon");
        return Ok((trie, None));
    };

    let mut source = FileSource::new(path);
    let report = populate(&mut trie, &mut source, config.source.invalid_words)?;
    Ok((trie, Some(report)))
}

fn generate_config(output: &Path) -> LexiconResult<()> {
    info!("Generating default configuration");
    let toml = LexiconConfig::default().to_toml()?;

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

fn print_stats(trie: &LexiconTrie, report: Option<LoadReport>, compact: bool) -> LexiconResult<()> {
    let stats = json!({
        "words": trie.len(),
        "nodes": trie.node_count(),
        "arena_slots": trie.arena().capacity(),
        "load": report,
    });
    if compact {
        println!("{stats}");
    } else {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }
    Ok(())
}

fn run(args: Args) -> LexiconResult<()> {
    let global = config::get_global_config()?;
    let config = global.get();

    match args.command.unwrap_or(Command::Shell) {
        Command::GenConfig { output } => generate_config(&output),
        Command::Validate => {
            config.validate()?;
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::Stats => {
            let (trie, report) = load_lexicon(config)?;
            print_stats(&trie, report, args.json)
        }
        Command::Shell => {
            let (mut trie, _) = load_lexicon(config)?;

            info!(words = trie.len(), "starting shell, type 'help' for commands");
            let stdout = io::stdout();
            Session::new(&mut trie, stdout.lock(), args.json).run(io::stdin().lock())
        }
        Command::Query(query) => {
            let (mut trie, _) = load_lexicon(config)?;

            let stdout = io::stdout();
            Session::new(&mut trie, BufWriter::new(stdout.lock()), args.json)
                .execute(query.into())?;
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(mut config) => {
            if let Some(words) = &args.words {
                config.source.path = Some(words.clone());
            }
            config
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(2);
        }
    };

    if let Err(e) = init_logging(&config.log) {
        eprintln!("{e}");
        process::exit(2);
    }
    set_error_reporter(Arc::new(TracingErrorReporter::new()));
    config::init_global_config(config);

    if let Err(e) = run(args) {
        report_error(ErrorContext::new(e, "lexicon"));
        process::exit(1);
    }
}
