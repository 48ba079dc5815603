use crate::alphabet::{letter_counts, symbol, LetterSequence, ALPHABET_SIZE};
use crate::cipher::{caesar_shift, split_columns};
use crate::error::{CfResult, CipherForgeError};
use crate::frequency::FrequencyTable;
use rayon::prelude::*;
use serde::Serialize;

pub type RecoveredKey = LetterSequence;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyLetterCandidate {
    pub position: usize,
    pub shift: u8,
    pub letter: char,
    pub chi_squared: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyRecovery {
    pub key: RecoveredKey,
    /// Best `top_n` candidates per key position, best first.
    pub positions: Vec<Vec<KeyLetterCandidate>>,
}

impl KeyRecovery {
    /// Sum of the winning chi-squared values across positions.
    pub fn total_chi_squared(&self) -> f64 {
        self.positions
            .iter()
            .filter_map(|alts| alts.first())
            .map(|c| c.chi_squared)
            .sum()
    }
}

/// Pearson chi-squared of the letter counts in `seq` against `table`.
/// Letters with zero expected count contribute nothing; an empty sequence
/// scores +inf.
pub fn chi_squared(seq: &[u8], table: &FrequencyTable) -> f64 {
    let n = seq.len();
    if n == 0 {
        return f64::INFINITY;
    }
    let counts = letter_counts(seq);
    let mut score = 0.0;
    for (i, &observed) in counts.iter().enumerate() {
        let expected = table.weight(i) * n as f64;
        if expected > 0.0 {
            let diff = observed as f64 - expected;
            score += diff * diff / expected;
        }
    }
    score
}

/// All 26 shifts for one column, lowest chi-squared first (ties by shift).
pub fn rank_shifts(group: &[u8], position: usize, table: &FrequencyTable) -> Vec<KeyLetterCandidate> {
    let mut scored: Vec<KeyLetterCandidate> = (0..ALPHABET_SIZE as u8)
        .map(|shift| {
            let plain = caesar_shift(group, -(shift as i32));
            KeyLetterCandidate {
                position,
                shift,
                letter: symbol(shift),
                chi_squared: chi_squared(&plain, table),
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        a.chi_squared
            .total_cmp(&b.chi_squared)
            .then_with(|| a.shift.cmp(&b.shift))
    });
    scored
}

pub fn recover_key(
    ciphertext: &LetterSequence,
    key_length: usize,
    table: &FrequencyTable,
    top_n: usize,
) -> CfResult<KeyRecovery> {
    if key_length < 1 {
        return Err(CipherForgeError::range("key_length", key_length, "must be >= 1"));
    }
    if top_n < 1 {
        return Err(CipherForgeError::range("top_n", top_n, "must be >= 1"));
    }

    let columns = split_columns(ciphertext.as_slice(), key_length);
    let positions: Vec<Vec<KeyLetterCandidate>> = columns
        .par_iter()
        .enumerate()
        .map(|(position, group)| {
            let mut ranked = rank_shifts(group, position, table);
            ranked.truncate(top_n);
            ranked
        })
        .collect();

    let key = positions.iter().map(|alts| alts[0].shift).collect();

    Ok(KeyRecovery {
        key: LetterSequence::from_indices(key),
        positions,
    })
}
