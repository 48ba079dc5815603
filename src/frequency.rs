use crate::alphabet::{index_of, symbol, ALPHABET_SIZE};
use crate::config::ZeroWeightPolicy;
use crate::error::{CfResult, CipherForgeError};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Letter frequencies of English text, A..Z.
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_SIZE] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, 0.06966, 0.00153,
    0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056,
    0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

/// Reference language model: one weight per alphabet index, summing to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable {
    weights: [f64; ALPHABET_SIZE],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::english()
    }
}

impl FrequencyTable {
    pub fn english() -> Self {
        // The constant is finite, non-negative and non-zero in sum.
        Self {
            weights: normalized(ENGLISH_FREQUENCIES),
        }
    }

    /// Accepts raw counts or probabilities and normalises them.
    pub fn from_weights(weights: [f64; ALPHABET_SIZE]) -> CfResult<Self> {
        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < 0.0 {
                return Err(CipherForgeError::Config(format!(
                    "weight for '{}' must be finite and non-negative, got {}",
                    symbol(i as u8),
                    w
                )));
            }
        }
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(CipherForgeError::Config(
                "frequency table has no positive weight".to_string(),
            ));
        }
        if !total.is_finite() {
            return Err(CipherForgeError::Config(
                "frequency table weights overflow when summed".to_string(),
            ));
        }
        Ok(Self {
            weights: normalized(weights),
        })
    }

    /// Builds a table from the letter counts of a reference text. Anything
    /// that is not an ASCII letter is ignored.
    pub fn from_corpus(text: &str) -> CfResult<Self> {
        let mut counts = [0.0f64; ALPHABET_SIZE];
        for c in text.chars() {
            if let Some(i) = index_of(c) {
                counts[i as usize] += 1.0;
            }
        }
        Self::from_weights(counts)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let path = path.as_ref();
        debug!("Loading frequency table from: {}", path.display());
        let file = File::open(path)?;
        Self::load_from_reader(file)
    }

    /// Reads `letter<TAB>weight` rows. Headers, comments and rows that are not
    /// a single letter followed by a number are skipped. Repeated letters
    /// accumulate.
    pub fn load_from_reader<R: Read>(reader: R) -> CfResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let mut weights = [0.0f64; ALPHABET_SIZE];
        let mut loaded = 0;
        let mut skipped = 0;

        for rec in rdr.records() {
            let rec = rec?;
            if rec.len() < 2 {
                skipped += 1;
                continue;
            }

            let mut chars = rec[0].trim().chars();
            let letter = match (chars.next().and_then(index_of), chars.next()) {
                (Some(i), None) => i,
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            match rec[1].trim().parse::<f64>() {
                Ok(w) => {
                    weights[letter as usize] += w;
                    loaded += 1;
                }
                Err(_) => skipped += 1,
            }
        }

        debug!("   -> Loaded {} rows, skipped {}.", loaded, skipped);
        Self::from_weights(weights)
    }

    /// Fails under `Reject` when any letter carries zero weight.
    pub fn validate(&self, policy: ZeroWeightPolicy) -> CfResult<()> {
        if policy == ZeroWeightPolicy::Reject {
            if let Some(i) = self.weights.iter().position(|&w| w == 0.0) {
                return Err(CipherForgeError::Config(format!(
                    "letter '{}' has zero weight; chi-squared is undefined for it",
                    symbol(i as u8)
                )));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn weight(&self, index: usize) -> f64 {
        self.weights[index]
    }

    pub fn weights(&self) -> &[f64; ALPHABET_SIZE] {
        &self.weights
    }

    /// Sum of squared weights: the IC a text in this language is expected to have.
    pub fn expected_ic(&self) -> f64 {
        self.weights.iter().map(|w| w * w).sum()
    }

    pub fn to_tsv(&self) -> String {
        let mut out = String::new();
        for (i, w) in self.weights.iter().enumerate() {
            out.push_str(&format!("{}\t{:.6}\n", symbol(i as u8), w));
        }
        out
    }
}

fn normalized(mut weights: [f64; ALPHABET_SIZE]) -> [f64; ALPHABET_SIZE] {
    let total: f64 = weights.iter().sum();
    for w in weights.iter_mut() {
        *w /= total;
    }
    weights
}
