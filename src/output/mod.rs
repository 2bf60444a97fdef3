// Output formatting — terminal display, JSON, and report generation.

pub mod markdown;
pub mod terminal;

use serde::Serialize;

use crate::corpus::Book;
use crate::similarity::topk::SimilarityPair;

/// A similarity pair resolved to book names — the shape handed to the
/// outside world (JSON output, report tables).
#[derive(Debug, Clone, Serialize)]
pub struct RankedPair {
    pub book_a: String,
    pub book_b: String,
    pub score: f64,
}

/// Resolve pair indices to book names, preserving rank order.
pub fn resolve(books: &[Book], pairs: &[SimilarityPair]) -> Vec<RankedPair> {
    pairs
        .iter()
        .map(|pair| RankedPair {
            book_a: books[pair.a].name.clone(),
            book_b: books[pair.b].name.clone(),
            score: pair.score,
        })
        .collect()
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..30]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters in file names.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
