// BookProfile — the ranked top-word fingerprint of one book.
//
// A profile is a list of (token, relative frequency) entries, sorted by
// descending frequency and truncated to the configured number of top words.
// Relative frequency is occurrences / total counted tokens, so the full
// (untruncated) distribution always sums to 1.0.

use std::collections::HashMap;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::tokenize::{tokenize, StopWords};
use super::traits::ProfileBuilder;

/// One ranked entry: a token and its share of the book's counted tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub token: String,
    /// Relative frequency in (0, 1]: occurrences / total counted tokens.
    pub frequency: f64,
}

/// A book's lexical fingerprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookProfile {
    /// At most `top_words` entries, sorted by descending frequency.
    /// Equal frequencies keep the order the tokens first appeared in the text.
    pub entries: Vec<FrequencyEntry>,
    /// Total number of non-empty, non-stopword tokens in the book.
    pub counted_tokens: u64,
}

impl BookProfile {
    /// Flat token -> frequency map.
    /// Used for overlap scoring against ad-hoc weight maps.
    pub fn weights(&self) -> HashMap<String, f64> {
        self.entries
            .iter()
            .map(|e| (e.token.clone(), e.frequency))
            .collect()
    }

    /// Sum of all retained frequencies — the score the profile earns against
    /// itself, and an upper bound on its score against any other profile.
    /// Less than 1.0 whenever truncation dropped part of the distribution.
    pub fn retained_mass(&self) -> f64 {
        self.entries.iter().map(|e| e.frequency).sum()
    }

    /// Display the profile as a weighted bar chart in the terminal.
    ///
    /// Bars are scaled against the book's most frequent word so mid-list
    /// entries stay visible even when absolute frequencies are small.
    pub fn display(&self, name: &str, limit: usize) {
        println!(
            "\n{}",
            format!(
                "=== Frequency profile: {} ({} counted tokens) ===",
                name, self.counted_tokens
            )
            .bold()
        );
        println!();

        if self.entries.is_empty() {
            println!("  (empty profile — the text had no countable words)");
            println!();
            return;
        }

        let bar_width: usize = 20;
        let top = self.entries[0].frequency;

        for (i, entry) in self.entries.iter().take(limit).enumerate() {
            let filled = ((entry.frequency / top) * bar_width as f64).round() as usize;
            let empty = bar_width.saturating_sub(filled);
            let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

            let colored_bar = if entry.frequency >= 0.05 {
                bar.bright_green()
            } else if entry.frequency >= 0.01 {
                bar.bright_yellow()
            } else {
                bar.bright_blue()
            };

            println!(
                "  {:>3}. {:<24} {} {:.4}",
                i + 1,
                entry.token.bold(),
                colored_bar,
                entry.frequency
            );
        }

        if self.entries.len() > limit {
            println!("  ... {} more entries", self.entries.len() - limit);
        }
        println!(
            "\n  Retained mass: {:.3} of the full distribution",
            self.retained_mass()
        );
        println!();
    }
}

/// Builds frequency profiles by counting raw word occurrences.
pub struct FrequencyProfiler {
    /// How many top words each profile retains.
    pub top_words: usize,
    /// Words excluded from counting.
    pub stop_words: StopWords,
}

impl Default for FrequencyProfiler {
    fn default() -> Self {
        Self {
            top_words: 100,
            stop_words: StopWords::default(),
        }
    }
}

impl ProfileBuilder for FrequencyProfiler {
    fn build(&self, text: &str) -> BookProfile {
        // Count occurrences, remembering when each token first appeared so
        // equal frequencies rank in a reproducible order.
        let mut counts: HashMap<String, (u64, usize)> = HashMap::new();
        let mut total: u64 = 0;

        for token in tokenize(text, &self.stop_words) {
            let first_seen = counts.len();
            let slot = counts.entry(token).or_insert((0, first_seen));
            slot.0 += 1;
            total += 1;
        }

        // Empty or all-stopword text is a valid empty profile, not an error.
        if total == 0 {
            return BookProfile {
                entries: Vec::new(),
                counted_tokens: 0,
            };
        }

        let mut ranked: Vec<(String, u64, usize)> = counts
            .into_iter()
            .map(|(token, (count, first_seen))| (token, count, first_seen))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        ranked.truncate(self.top_words);

        let entries = ranked
            .into_iter()
            .map(|(token, count, _)| FrequencyEntry {
                token,
                frequency: count as f64 / total as f64,
            })
            .collect();

        BookProfile {
            entries,
            counted_tokens: total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_basic_counts() {
        let profiler = FrequencyProfiler::default();
        let profile = profiler.build("THE cat SAT on THE MAT");

        assert_eq!(profile.counted_tokens, 4);
        assert_eq!(profile.entries.len(), 4);
        for entry in &profile.entries {
            assert!((entry.frequency - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_empty_text_is_empty_profile() {
        let profiler = FrequencyProfiler::default();
        let profile = profiler.build("");
        assert!(profile.entries.is_empty());
        assert_eq!(profile.counted_tokens, 0);
    }

    #[test]
    fn test_all_stopword_text_is_empty_profile() {
        let profiler = FrequencyProfiler::default();
        let profile = profiler.build("the THE a An of IN and");
        assert!(profile.entries.is_empty());
        assert_eq!(profile.counted_tokens, 0);
    }

    #[test]
    fn test_truncates_to_top_words() {
        let profiler = FrequencyProfiler {
            top_words: 2,
            stop_words: StopWords::default(),
        };
        let profile = profiler.build("alpha alpha alpha beta beta gamma");

        assert_eq!(profile.entries.len(), 2);
        assert_eq!(profile.entries[0].token, "ALPHA");
        assert_eq!(profile.entries[1].token, "BETA");
        // Totals still count the truncated tail
        assert_eq!(profile.counted_tokens, 6);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let profiler = FrequencyProfiler::default();
        // All counts equal — ZEBRA appeared first, APPLE second, MANGO third
        let profile = profiler.build("zebra apple mango zebra apple mango");

        let tokens: Vec<&str> = profile.entries.iter().map(|e| e.token.as_str()).collect();
        assert_eq!(tokens, vec!["ZEBRA", "APPLE", "MANGO"]);
    }

    #[test]
    fn test_weights_map_matches_entries() {
        let profiler = FrequencyProfiler::default();
        let profile = profiler.build("red red blue");
        let weights = profile.weights();

        assert!((weights["RED"] - 2.0 / 3.0).abs() < 1e-12);
        assert!((weights["BLUE"] - 1.0 / 3.0).abs() < 1e-12);
    }
}
