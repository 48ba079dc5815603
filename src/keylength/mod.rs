pub mod coincidence;
pub mod spacing;

pub use self::coincidence::{index_of_coincidence, key_length_score, rank_key_lengths_by_ic};
pub use self::spacing::{
    collect_spacings, factor_score, find_repeated_substrings, rank_key_lengths_by_spacing,
    rank_key_lengths_by_spacing_with_policy, spacings_from_positions, SubstringOccurrence,
};

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyLengthCandidate {
    pub length: usize,
    pub score: f64,
}

/// Descending score, ties by ascending length.
pub fn sort_candidates(candidates: &mut [KeyLengthCandidate]) {
    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.length.cmp(&b.length))
    });
}

pub fn top_n(candidates: &[KeyLengthCandidate], n: usize) -> &[KeyLengthCandidate] {
    &candidates[..n.min(candidates.len())]
}

/// One candidate length as seen by both scorers. Ranks are 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyLengthComparison {
    pub length: usize,
    pub ic_score: Option<f64>,
    pub ic_rank: Option<usize>,
    pub spacing_score: Option<f64>,
    pub spacing_rank: Option<usize>,
}

/// Lines the two rankings up by length so they can be read side by side.
/// Nothing is chosen here; rows come back in ascending length order.
pub fn compare_rankings(
    by_ic: &[KeyLengthCandidate],
    by_spacing: &[KeyLengthCandidate],
) -> Vec<KeyLengthComparison> {
    let mut rows: BTreeMap<usize, KeyLengthComparison> = BTreeMap::new();

    let row = |length: usize| KeyLengthComparison {
        length,
        ic_score: None,
        ic_rank: None,
        spacing_score: None,
        spacing_rank: None,
    };

    for (rank, c) in by_ic.iter().enumerate() {
        let entry = rows.entry(c.length).or_insert_with(|| row(c.length));
        entry.ic_score = Some(c.score);
        entry.ic_rank = Some(rank + 1);
    }
    for (rank, c) in by_spacing.iter().enumerate() {
        let entry = rows.entry(c.length).or_insert_with(|| row(c.length));
        entry.spacing_score = Some(c.score);
        entry.spacing_rank = Some(rank + 1);
    }

    rows.into_values().collect()
}
