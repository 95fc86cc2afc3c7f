use equate_indexer::EquateIndex;
use equate_protocol::Suggestion;
use strsim::levenshtein;

/// How many candidates a failed name lookup falls back to.
pub const DEFAULT_SUGGESTIONS: usize = 3;

/// Rank every known name by edit distance to `query`, nearest first.
///
/// The sort is stable, so names at equal distance keep table order.
#[must_use]
pub fn closest_names(index: &EquateIndex, query: &str, limit: usize) -> Vec<Suggestion> {
    let mut ranked: Vec<Suggestion> = index
        .iter()
        .map(|(name, address)| Suggestion {
            name: name.to_string(),
            address,
            distance: levenshtein(query, name),
        })
        .collect();
    ranked.sort_by_key(|candidate| candidate.distance);
    ranked.truncate(limit);
    ranked
}
