use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::profile::tokenize::StopWords;

/// Central configuration loaded from environment variables.
///
/// These are per-installation defaults; the CLI flags in main.rs override
/// them per run. The .env file is loaded automatically at startup via
/// dotenvy.
pub struct Config {
    /// Directory scanned for `.txt` books.
    pub books_dir: PathBuf,
    /// How many top words each profile retains.
    pub top_words: usize,
    /// How many best pairs the ranking retains.
    pub top_pairs: usize,
    /// Words excluded from frequency counting.
    pub stop_words: StopWords,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every value has a default; a variable that is set but invalid is an
    /// error rather than a silent fallback.
    pub fn load() -> Result<Self> {
        let books_dir = env::var("KINDRED_BOOKS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./books"));

        let top_words = parse_positive("KINDRED_TOP_WORDS", 100)?;
        let top_pairs = parse_positive("KINDRED_TOP_PAIRS", 10)?;

        // KINDRED_STOP_WORDS replaces the default six; the extended flag
        // unions the English list on top of whichever base is active.
        let mut stop_words = match env::var("KINDRED_STOP_WORDS") {
            Ok(list) => StopWords::new(list.split(',')),
            Err(_) => StopWords::default(),
        };
        if matches!(
            env::var("KINDRED_EXTENDED_STOPWORDS").as_deref(),
            Ok("1") | Ok("true")
        ) {
            stop_words.extend_english();
        }

        Ok(Self {
            books_dir,
            top_words,
            top_pairs,
            stop_words,
        })
    }
}

/// Parse a positive-integer env var, falling back to `default` when unset.
fn parse_positive(var: &str, default: usize) -> Result<usize> {
    match env::var(var) {
        Ok(raw) => match raw.parse::<usize>() {
            Ok(value) if value > 0 => Ok(value),
            _ => anyhow::bail!("{var} must be a positive integer, got '{raw}'"),
        },
        Err(_) => Ok(default),
    }
}
