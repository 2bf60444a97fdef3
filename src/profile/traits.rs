// Profile builder trait — swap-ready abstraction.
//
// The ranking pipeline only needs "raw text in, profile out". The default
// implementation counts raw word frequencies; a stemming or n-gram variant
// could slot in here without touching the rest of the pipeline.

use super::frequency::BookProfile;

/// Trait for reducing one book's raw text to its frequency profile.
///
/// Infallible by contract: every input, including empty or all-stopword
/// text, produces a valid (possibly empty) profile.
pub trait ProfileBuilder {
    fn build(&self, text: &str) -> BookProfile;
}
