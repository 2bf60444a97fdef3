// Ranking pipeline: profiles -> full pairwise loop -> top-K pairs.
//
// Every unordered pair of books is scored exactly once (i < j). Scores flow
// through the bounded TopPairs selector, so the full O(n²) result set is
// never held at once; the complete similarity matrix is filled only when
// the caller asks for it.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::corpus::Book;
use crate::similarity::overlap::histogram_intersection;
use crate::similarity::topk::{SimilarityPair, TopPairs};

/// The pipeline's output: the K best pairs, plus the full symmetric
/// similarity matrix when requested.
pub struct Ranking {
    /// Best pairs, descending by score. Length = min(K, number of pairs).
    pub pairs: Vec<SimilarityPair>,
    /// Auxiliary output: matrix[i][j] = score of books i and j, zero on the
    /// diagonal. Only filled when requested.
    pub matrix: Option<Vec<Vec<f64>>>,
}

/// Score all unordered book pairs and retain the `top_pairs` best.
///
/// A corpus of zero or one book produces zero pairs — a valid empty
/// ranking, not an error.
pub fn rank(books: &[Book], top_pairs: usize, want_matrix: bool) -> Ranking {
    let n = books.len();
    let pair_count = n * n.saturating_sub(1) / 2;

    let mut selector = TopPairs::new(top_pairs);
    let mut matrix = want_matrix.then(|| vec![vec![0.0; n]; n]);

    let pb = ProgressBar::new(pair_count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Comparing [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    for i in 0..n {
        for j in (i + 1)..n {
            let score = histogram_intersection(&books[i].profile, &books[j].profile);

            if let Some(m) = matrix.as_mut() {
                m[i][j] = score;
                m[j][i] = score;
            }

            selector.offer(SimilarityPair::new(i, j, score));
            pb.inc(1);
        }
    }
    pb.finish_and_clear();

    info!(
        books = n,
        pairs = pair_count,
        retained = selector.len(),
        "Pairwise comparison complete"
    );

    Ranking {
        pairs: selector.drain(),
        matrix,
    }
}
