// Markdown report generation.
//
// Writes a standalone report so a ranking can be shared or archived without
// rerunning the tool: the ranked pair table plus a short profile excerpt
// per book.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::corpus::Book;
use crate::similarity::topk::SimilarityPair;

/// Number of top words quoted per book in the report appendix.
const PROFILE_EXCERPT: usize = 10;

/// Generate a markdown report at `path`, creating parent directories as
/// needed. Returns the path written, for display.
pub fn generate_report(books: &[Book], pairs: &[SimilarityPair], path: &Path) -> Result<String> {
    let mut out = String::new();

    out.push_str("# Kindred similarity report\n\n");
    out.push_str(&format!(
        "Generated: {}\n\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!(
        "Corpus: {} books, {} ranked pairs\n\n",
        books.len(),
        pairs.len()
    ));

    out.push_str("## Most similar pairs\n\n");
    if pairs.is_empty() {
        out.push_str("No pairs — the corpus contained fewer than two books.\n\n");
    } else {
        out.push_str("| Rank | Book A | Book B | Score |\n");
        out.push_str("|-----:|:-------|:-------|------:|\n");
        for (i, pair) in pairs.iter().enumerate() {
            out.push_str(&format!(
                "| {} | {} | {} | {:.4} |\n",
                i + 1,
                books[pair.a].name,
                books[pair.b].name,
                pair.score
            ));
        }
        out.push('\n');
    }

    out.push_str("## Book profiles\n\n");
    for book in books {
        let words: Vec<String> = book
            .profile
            .entries
            .iter()
            .take(PROFILE_EXCERPT)
            .map(|e| format!("{} ({:.3})", e.token, e.frequency))
            .collect();
        let summary = if words.is_empty() {
            "(empty profile)".to_string()
        } else {
            words.join(", ")
        };
        out.push_str(&format!(
            "- **{}** — {} counted tokens; top words: {}\n",
            book.name, book.profile.counted_tokens, summary
        ));
    }
    out.push('\n');

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Could not create report directory {}", parent.display()))?;
        }
    }
    fs::write(path, out)
        .with_context(|| format!("Could not write report to {}", path.display()))?;

    Ok(path.display().to_string())
}
