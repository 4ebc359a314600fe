//! "Did you mean" suggestions with fuzzy matching.

use strsim::jaro_winkler;
use wander_core::PhraseTable;

/// Minimum similarity score for a suggestion (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

/// Find aliases similar to `input`, as (canonical name, score) pairs sorted
/// by score descending. Each canonical name appears at most once.
pub fn fuzzy_match(table: &PhraseTable, input: &str, threshold: f64) -> Vec<(String, f64)> {
    let input = input.to_lowercase();
    let mut matches: Vec<(String, f64)> = Vec::new();

    for entry in table.entries() {
        let best = entry
            .aliases()
            .iter()
            .map(|alias| jaro_winkler(&input, &alias.to_string()))
            .fold(0.0_f64, f64::max);
        if best >= threshold {
            matches.push((entry.canonical().to_string(), best));
        }
    }

    matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    matches
}

/// Suggest the closest canonical name for a misspelled word, if any is
/// close enough.
pub fn suggest(table: &PhraseTable, input: &str) -> Option<String> {
    fuzzy_match(table, input, FUZZY_THRESHOLD)
        .into_iter()
        .next()
        .map(|(name, _)| name)
}
