//! Fuzzy title matching for cached lyrics and library tracks.

use std::collections::HashSet;

/// Default minimum word-overlap score for a candidate to be included.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// A candidate name with its match confidence in `[0.0, 1.0]`
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate {
    pub name: String,
    pub score: f64,
}

/// Rank `candidates` against `query`, best match first
///
/// Matching is case-insensitive and the first applicable rule decides each
/// candidate's score:
///
/// 1. an exact match scores `1.0`;
/// 2. a candidate containing the query as a substring scores the ratio of
///    query length to candidate length and is always included;
/// 3. otherwise the score is the Jaccard index of the whitespace-separated
///    word sets, included only when at least `threshold` and the sets share
///    at least one word.
///
/// Results are sorted by score descending; ties keep candidate input order.
#[must_use]
pub fn search<S: AsRef<str>>(query: &str, candidates: &[S], threshold: f64) -> Vec<MatchCandidate> {
    let query = query.to_lowercase();
    let query_words: HashSet<&str> = query.split_whitespace().collect();

    let mut results = Vec::new();
    for candidate in candidates {
        let name = candidate.as_ref();
        let lower = name.to_lowercase();

        if lower == query {
            results.push(MatchCandidate {
                name: name.to_string(),
                score: 1.0,
            });
            continue;
        }

        if lower.contains(&query) {
            #[allow(clippy::cast_precision_loss)]
            let score = query.chars().count() as f64 / lower.chars().count() as f64;
            results.push(MatchCandidate {
                name: name.to_string(),
                score,
            });
            continue;
        }

        let candidate_words: HashSet<&str> = lower.split_whitespace().collect();
        let shared = query_words.intersection(&candidate_words).count();
        if shared == 0 {
            continue;
        }
        #[allow(clippy::cast_precision_loss)]
        let score = shared as f64 / query_words.union(&candidate_words).count() as f64;
        if score >= threshold {
            results.push(MatchCandidate {
                name: name.to_string(),
                score,
            });
        }
    }

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}
