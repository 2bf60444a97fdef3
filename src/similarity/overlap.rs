// Histogram intersection over top-word frequency profiles.
//
// For every token two profiles share, the smaller of the two relative
// frequencies is added to the score:
//
//   score = sum over shared tokens of min(freq_a, freq_b)
//
// 0.0 means no shared vocabulary; the score of a profile against itself is
// the sum of its own frequencies. Because each profile is truncated to its
// top words, the score can undercount the overlap of the full
// distributions — an accepted approximation, not a bug.

use std::collections::HashMap;

use crate::profile::frequency::BookProfile;

/// Score two profiles by histogram intersection.
///
/// Builds a lookup from the first profile and walks the second; tokens
/// absent from the first contribute nothing. Symmetric in result because
/// min(a, b) does not care which side the lookup was built from.
pub fn histogram_intersection(a: &BookProfile, b: &BookProfile) -> f64 {
    let lookup: HashMap<&str, f64> = a
        .entries
        .iter()
        .map(|e| (e.token.as_str(), e.frequency))
        .collect();

    let mut score = 0.0;
    for entry in &b.entries {
        if let Some(&freq_a) = lookup.get(entry.token.as_str()) {
            score += freq_a.min(entry.frequency);
        }
    }
    score
}

/// Histogram intersection over raw token weight maps.
///
/// Separated from `histogram_intersection` so it can be used with ad-hoc
/// maps (e.g. profiles deserialized from JSON without reconstructing entry
/// order). Walks the smaller map.
pub fn intersection_from_weights(
    weights_a: &HashMap<String, f64>,
    weights_b: &HashMap<String, f64>,
) -> f64 {
    let (small, large) = if weights_a.len() <= weights_b.len() {
        (weights_a, weights_b)
    } else {
        (weights_b, weights_a)
    };

    let mut score = 0.0;
    for (token, &freq) in small {
        if let Some(&other) = large.get(token) {
            score += freq.min(other);
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::frequency::FrequencyEntry;

    fn make_profile(tokens_and_freqs: &[(&str, f64)]) -> BookProfile {
        let entries: Vec<FrequencyEntry> = tokens_and_freqs
            .iter()
            .map(|(token, frequency)| FrequencyEntry {
                token: token.to_string(),
                frequency: *frequency,
            })
            .collect();
        BookProfile {
            entries,
            counted_tokens: 100,
        }
    }

    #[test]
    fn test_shared_tokens_sum_their_minima() {
        let a = make_profile(&[("CAT", 0.25), ("SAT", 0.25), ("ON", 0.25), ("MAT", 0.25)]);
        let b = make_profile(&[("CAT", 0.25), ("SAT", 0.25), ("ON", 0.25), ("HAT", 0.25)]);
        let score = histogram_intersection(&a, &b);
        assert!(
            (score - 0.75).abs() < 1e-12,
            "Three shared tokens at 0.25 each should score 0.75, got {score}"
        );
    }

    #[test]
    fn test_disjoint_profiles_score_zero() {
        let a = make_profile(&[("WHALE", 0.5), ("SHIP", 0.5)]);
        let b = make_profile(&[("MOOR", 0.5), ("HEATH", 0.5)]);
        assert_eq!(histogram_intersection(&a, &b), 0.0);
    }

    #[test]
    fn test_empty_profile_scores_zero_against_anything() {
        let empty = make_profile(&[]);
        let other = make_profile(&[("WORD", 1.0)]);
        assert_eq!(histogram_intersection(&empty, &other), 0.0);
        assert_eq!(histogram_intersection(&other, &empty), 0.0);
        assert_eq!(histogram_intersection(&empty, &empty), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = make_profile(&[("X", 0.4), ("Y", 0.3), ("Z", 0.3)]);
        let b = make_profile(&[("X", 0.1), ("Z", 0.6), ("W", 0.3)]);
        let ab = histogram_intersection(&a, &b);
        let ba = histogram_intersection(&b, &a);
        assert!(
            (ab - ba).abs() < 1e-12,
            "Intersection should be symmetric: {ab} vs {ba}"
        );
    }

    #[test]
    fn test_self_score_is_retained_mass() {
        let a = make_profile(&[("X", 0.4), ("Y", 0.35), ("Z", 0.1)]);
        let score = histogram_intersection(&a, &a);
        assert!((score - a.retained_mass()).abs() < 1e-12);
    }

    #[test]
    fn test_from_weights_matches_profile_version() {
        let a = make_profile(&[("X", 0.4), ("Y", 0.3)]);
        let b = make_profile(&[("Y", 0.5), ("Z", 0.2)]);
        let via_profiles = histogram_intersection(&a, &b);
        let via_weights = intersection_from_weights(&a.weights(), &b.weights());
        assert!((via_profiles - via_weights).abs() < 1e-12);
    }

    #[test]
    fn test_from_weights_empty_maps() {
        let empty: HashMap<String, f64> = HashMap::new();
        let one: HashMap<String, f64> = [("X".to_string(), 0.5)].into();
        assert_eq!(intersection_from_weights(&empty, &empty), 0.0);
        assert_eq!(intersection_from_weights(&empty, &one), 0.0);
        assert_eq!(intersection_from_weights(&one, &empty), 0.0);
    }
}
