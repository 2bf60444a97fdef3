use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use kindred::config::Config;
use kindred::corpus;
use kindred::output;
use kindred::pipeline;
use kindred::profile::frequency::FrequencyProfiler;
use kindred::profile::traits::ProfileBuilder;

/// Kindred: lexical similarity ranking for plain-text book collections.
///
/// Fingerprints every book by its most frequent non-trivial words and
/// reports the pairs of books whose fingerprints overlap the most.
#[derive(Parser)]
#[command(name = "kindred", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank all book pairs by top-word overlap
    Rank {
        /// Directory containing .txt books (default: ./books, or KINDRED_BOOKS_DIR)
        #[arg(long)]
        books_dir: Option<PathBuf>,

        /// Top words retained per profile (default: 100)
        #[arg(long)]
        top_words: Option<usize>,

        /// Number of best pairs to report (default: 10)
        #[arg(long)]
        top_pairs: Option<usize>,

        /// Also print the full similarity matrix
        #[arg(long)]
        matrix: bool,

        /// Write a markdown report to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Emit the ranked pairs as JSON instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Show one book's frequency profile
    Profile {
        /// Path to the book's .txt file
        file: PathBuf,

        /// Top words retained in the profile (default: 100)
        #[arg(long)]
        top_words: Option<usize>,

        /// How many entries to display (default: 20)
        #[arg(long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kindred=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            books_dir,
            top_words,
            top_pairs,
            matrix,
            report,
            json,
        } => {
            let config = Config::load()?;
            let books_dir = books_dir.unwrap_or(config.books_dir);
            let top_words = top_words.unwrap_or(config.top_words);
            let top_pairs = top_pairs.unwrap_or(config.top_pairs);
            if top_words == 0 {
                anyhow::bail!("--top-words must be at least 1");
            }
            if top_pairs == 0 {
                anyhow::bail!("--top-pairs must be at least 1");
            }

            let profiler = FrequencyProfiler {
                top_words,
                stop_words: config.stop_words,
            };

            println!("Profiling books in {}...", books_dir.display());
            let books = corpus::load(&books_dir, &profiler)?;

            // Zero or one book produces an empty ranking, not an error
            let ranking = pipeline::rank(&books, top_pairs, matrix);

            if json {
                let resolved = output::resolve(&books, &ranking.pairs);
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else {
                output::terminal::display_ranked_pairs(&books, &ranking.pairs);
                if let Some(m) = &ranking.matrix {
                    output::terminal::display_matrix(&books, m);
                }
            }

            if let Some(path) = report {
                let written = output::markdown::generate_report(&books, &ranking.pairs, &path)?;
                println!("\n{}", format!("Markdown report saved to: {written}").bold());
            }
        }

        Commands::Profile {
            file,
            top_words,
            limit,
        } => {
            let config = Config::load()?;
            let top_words = top_words.unwrap_or(config.top_words);
            if top_words == 0 {
                anyhow::bail!("--top-words must be at least 1");
            }

            let profiler = FrequencyProfiler {
                top_words,
                stop_words: config.stop_words,
            };

            let bytes = fs::read(&file)
                .with_context(|| format!("Could not read {}", file.display()))?;
            let text = String::from_utf8_lossy(&bytes);

            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());

            let profile = profiler.build(&text);
            profile.display(&name, limit);
        }
    }

    Ok(())
}
