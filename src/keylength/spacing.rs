use super::{sort_candidates, KeyLengthCandidate};
use crate::alphabet::LetterSequence;
use crate::config::SpacingPolicy;
use crate::error::{check_range, CfResult};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// A substring seen at two or more offsets (0-based, ascending).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstringOccurrence {
    pub substring: LetterSequence,
    pub positions: Vec<usize>,
}

impl SubstringOccurrence {
    pub fn spacings(&self) -> Vec<usize> {
        spacings_from_positions(&self.positions)
    }
}

/// Every substring of length `min_len..=min(max_len, N)` that occurs at least
/// twice, ordered by length and then alphabetically.
pub fn find_repeated_substrings(
    ciphertext: &LetterSequence,
    min_len: usize,
    max_len: usize,
) -> CfResult<Vec<SubstringOccurrence>> {
    check_range(
        "min_substring_length",
        min_len,
        "max_substring_length",
        max_len,
        1,
    )?;

    let text = ciphertext.as_slice();
    let upper = max_len.min(text.len());
    if min_len > upper {
        return Ok(Vec::new());
    }

    let mut repeated: Vec<SubstringOccurrence> = (min_len..=upper)
        .into_par_iter()
        .flat_map_iter(|len| repeats_of_length(text, len))
        .collect();

    repeated.sort_by(|a, b| {
        a.substring
            .len()
            .cmp(&b.substring.len())
            .then_with(|| a.substring.cmp(&b.substring))
    });
    Ok(repeated)
}

fn repeats_of_length(text: &[u8], len: usize) -> Vec<SubstringOccurrence> {
    let mut occ: HashMap<&[u8], Vec<usize>> = HashMap::new();
    for (i, window) in text.windows(len).enumerate() {
        occ.entry(window).or_default().push(i);
    }
    occ.into_iter()
        .filter(|(_, positions)| positions.len() >= 2)
        .map(|(sub, positions)| SubstringOccurrence {
            substring: LetterSequence::from_indices(sub.to_vec()),
            positions,
        })
        .collect()
}

/// Differences between neighbouring positions after sorting.
pub fn spacings_from_positions(positions: &[usize]) -> Vec<usize> {
    let mut sorted = positions.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).map(|w| w[1] - w[0]).collect()
}

fn pairwise_spacings(positions: &[usize]) -> Vec<usize> {
    let mut sorted = positions.to_vec();
    sorted.sort_unstable();
    let mut out = Vec::new();
    for (i, &a) in sorted.iter().enumerate() {
        for &b in &sorted[i + 1..] {
            out.push(b - a);
        }
    }
    out
}

pub fn collect_spacings(occurrences: &[SubstringOccurrence], policy: SpacingPolicy) -> Vec<usize> {
    occurrences
        .iter()
        .flat_map(|o| match policy {
            SpacingPolicy::Consecutive => spacings_from_positions(&o.positions),
            SpacingPolicy::Pairwise => pairwise_spacings(&o.positions),
        })
        .collect()
}

/// For each candidate length, how many spacings it divides exactly.
/// Zero spacings carry no information and are skipped.
pub fn factor_score(
    spacings: &[usize],
    min_key_len: usize,
    max_key_len: usize,
) -> CfResult<BTreeMap<usize, usize>> {
    check_range(
        "min_key_length",
        min_key_len,
        "max_key_length",
        max_key_len,
        1,
    )?;

    let mut counts: BTreeMap<usize, usize> = (min_key_len..=max_key_len).map(|f| (f, 0)).collect();
    for &d in spacings.iter().filter(|&&d| d > 0) {
        for (f, count) in counts.iter_mut() {
            if d % f == 0 {
                *count += 1;
            }
        }
    }
    Ok(counts)
}

pub fn rank_key_lengths_by_spacing(
    ciphertext: &LetterSequence,
    min_sub_len: usize,
    max_sub_len: usize,
    min_key_len: usize,
    max_key_len: usize,
) -> CfResult<Vec<KeyLengthCandidate>> {
    rank_key_lengths_by_spacing_with_policy(
        ciphertext,
        min_sub_len,
        max_sub_len,
        min_key_len,
        max_key_len,
        SpacingPolicy::Consecutive,
    )
}

pub fn rank_key_lengths_by_spacing_with_policy(
    ciphertext: &LetterSequence,
    min_sub_len: usize,
    max_sub_len: usize,
    min_key_len: usize,
    max_key_len: usize,
    policy: SpacingPolicy,
) -> CfResult<Vec<KeyLengthCandidate>> {
    check_range(
        "min_key_length",
        min_key_len,
        "max_key_length",
        max_key_len,
        1,
    )?;
    let repeated = find_repeated_substrings(ciphertext, min_sub_len, max_sub_len)?;
    let spacings = collect_spacings(&repeated, policy);
    rank_from_spacings(&spacings, min_key_len, max_key_len)
}

pub(crate) fn rank_from_spacings(
    spacings: &[usize],
    min_key_len: usize,
    max_key_len: usize,
) -> CfResult<Vec<KeyLengthCandidate>> {
    let mut candidates: Vec<KeyLengthCandidate> = factor_score(spacings, min_key_len, max_key_len)?
        .into_iter()
        .map(|(length, count)| KeyLengthCandidate {
            length,
            score: count as f64,
        })
        .collect();
    sort_candidates(&mut candidates);
    Ok(candidates)
}
