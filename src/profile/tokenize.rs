// Tokenization and normalization.
//
// A token is a whitespace-delimited word reduced to its uppercase
// alphanumeric characters. Words that normalize to the empty string are
// dropped entirely — they contribute to neither counts nor totals.

use std::collections::HashSet;

/// The classic closed-class words excluded from counting by default.
/// Matched after normalization.
pub const DEFAULT_STOP_WORDS: [&str; 6] = ["A", "AND", "AN", "OF", "IN", "THE"];

/// A case-normalized stop-word set.
///
/// Entries are normalized at construction time so membership tests compare
/// like with like — configuring "the" and "THE" yields the same set.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS)
    }
}

impl StopWords {
    /// Build a stop-word set from raw entries, normalizing each one.
    /// Entries that normalize to the empty string are discarded.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .map(|e| normalize_word(e.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Union in the English list from the `stop-words` crate, for corpora
    /// where the classic six are too weak to be discriminative.
    pub fn extend_english(&mut self) {
        for word in stop_words::get(stop_words::LANGUAGE::English) {
            let normalized = normalize_word(&word);
            if !normalized.is_empty() {
                self.words.insert(normalized);
            }
        }
    }

    /// Membership test against an already-normalized token.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Reduce a word to its uppercase alphanumeric characters.
///
/// Idempotent: an already-normalized token maps to itself. A word with no
/// alphanumeric characters normalizes to the empty string.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Lazily yield the surviving normalized tokens of `text`.
///
/// Pure function of the input text and the stop-word set; each call starts
/// from the beginning of the text, no state is shared between calls.
pub fn tokenize<'a>(text: &'a str, stop_words: &'a StopWords) -> impl Iterator<Item = String> + 'a {
    text.split_whitespace()
        .map(normalize_word)
        .filter(move |token| !token.is_empty() && !stop_words.contains(token))
}
