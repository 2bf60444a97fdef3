// Colored terminal output for similarity rankings and matrices.
//
// This module handles all terminal-specific formatting: colors and tables.
// The main.rs display paths delegate here.

use colored::Colorize;

use crate::corpus::Book;
use crate::similarity::topk::SimilarityPair;

/// Display the ranked pair table.
pub fn display_ranked_pairs(books: &[Book], pairs: &[SimilarityPair]) {
    if pairs.is_empty() {
        println!("No pairs to rank — the corpus needs at least two books.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top {} similar pairs ===", pairs.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<34} {:<34} {:>7}",
        "Rank".dimmed(),
        "Book A".dimmed(),
        "Book B".dimmed(),
        "Score".dimmed(),
    );
    println!("  {}", "-".repeat(84).dimmed());

    for (i, pair) in pairs.iter().enumerate() {
        println!(
            "  {:>4}. {:<34} {:<34} {}",
            i + 1,
            super::truncate_chars(&books[pair.a].name, 30),
            super::truncate_chars(&books[pair.b].name, 30),
            colorize_score(pair.score),
        );
    }
    println!();
}

/// Print the full similarity matrix. Rows and columns follow corpus order;
/// the legend below maps indices back to book names.
pub fn display_matrix(books: &[Book], matrix: &[Vec<f64>]) {
    println!("\n{}", "=== Similarity matrix ===".bold());
    println!();

    print!("  {:>4}", "");
    for j in 0..books.len() {
        print!(" {:>6}", j);
    }
    println!();

    for (i, row) in matrix.iter().enumerate() {
        print!("  {:>4}", i);
        for value in row {
            print!(" {:>6.3}", value);
        }
        println!();
    }

    println!();
    for (i, book) in books.iter().enumerate() {
        println!("  {:>4}  {}", i, book.name.dimmed());
    }
    println!();
}

/// Colorize a similarity score by magnitude.
fn colorize_score(score: f64) -> colored::ColoredString {
    let text = format!("{score:>7.4}");
    if score >= 0.5 {
        text.bright_green()
    } else if score >= 0.25 {
        text.bright_yellow()
    } else {
        text.normal()
    }
}
