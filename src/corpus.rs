// Corpus loading — one Book per .txt file in the books directory.
//
// File names are sorted before profiling so book indices, and therefore
// every downstream tie-break, are reproducible across runs; raw directory
// order is not.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::profile::frequency::BookProfile;
use crate::profile::traits::ProfileBuilder;

/// A loaded book: its file name and lexical fingerprint.
/// Immutable once built — the pipeline only reads it.
#[derive(Debug, Clone)]
pub struct Book {
    pub name: String,
    pub profile: BookProfile,
}

/// Load every `.txt` file under `dir` and build one profile per book.
///
/// An unreadable directory is an error; an unreadable file is skipped with
/// a warning so one bad book does not sink the whole run.
pub fn load(dir: &Path, builder: &dyn ProfileBuilder) -> Result<Vec<Book>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Could not open books directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("txt"))
        .collect();
    paths.sort();

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Profiling [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    let mut books = Vec::with_capacity(paths.len());
    for path in &paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match fs::read(path) {
            Ok(bytes) => {
                let text = String::from_utf8_lossy(&bytes);
                books.push(Book {
                    name,
                    profile: builder.build(&text),
                });
            }
            Err(e) => {
                warn!(book = %name, error = %e, "Skipping unreadable file");
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(books = books.len(), dir = %dir.display(), "Corpus loaded");
    Ok(books)
}
