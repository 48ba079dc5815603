use super::{sort_candidates, KeyLengthCandidate};
use crate::alphabet::{letter_counts, LetterSequence};
use crate::cipher::split_columns;
use crate::error::{check_range, CfResult};
use rayon::prelude::*;

/// IC of uniformly random letters.
pub const RANDOM_IC: f64 = 1.0 / 26.0;

/// Probability that two letters drawn without replacement are equal.
/// Sequences of length 0 or 1 score 0.0.
pub fn index_of_coincidence(seq: &[u8]) -> f64 {
    let n = seq.len();
    if n <= 1 {
        return 0.0;
    }
    let numerator: usize = letter_counts(seq)
        .iter()
        .map(|&c| c * c.saturating_sub(1))
        .sum();
    numerator as f64 / (n * (n - 1)) as f64
}

/// Average IC over the `k` interleaved columns. Columns shorter than two
/// letters are left out; if none remain the score is 0.0.
pub fn key_length_score(ciphertext: &LetterSequence, k: usize) -> f64 {
    if k == 0 {
        return 0.0;
    }
    let ics: Vec<f64> = split_columns(ciphertext.as_slice(), k)
        .iter()
        .filter(|col| col.len() > 1)
        .map(|col| index_of_coincidence(col))
        .collect();

    if ics.is_empty() {
        0.0
    } else {
        ics.iter().sum::<f64>() / ics.len() as f64
    }
}

pub fn rank_key_lengths_by_ic(
    ciphertext: &LetterSequence,
    min_len: usize,
    max_len: usize,
) -> CfResult<Vec<KeyLengthCandidate>> {
    check_range("min_key_length", min_len, "max_key_length", max_len, 1)?;

    let mut candidates: Vec<KeyLengthCandidate> = (min_len..=max_len)
        .into_par_iter()
        .map(|k| KeyLengthCandidate {
            length: k,
            score: key_length_score(ciphertext, k),
        })
        .collect();

    sort_candidates(&mut candidates);
    Ok(candidates)
}
