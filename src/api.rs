use crate::alphabet::LetterSequence;
use crate::cipher::{decrypt, parse_key};
use crate::config::Config;
use crate::error::CfResult;
use crate::frequency::FrequencyTable;
use crate::keylength::coincidence::{index_of_coincidence, rank_key_lengths_by_ic, RANDOM_IC};
use crate::keylength::spacing::{collect_spacings, find_repeated_substrings, rank_from_spacings};
use crate::keylength::{compare_rankings, KeyLengthCandidate, KeyLengthComparison};
use crate::recover::{recover_key, KeyLetterCandidate, RecoveredKey};
use serde::Serialize;
use tracing::debug;

/// Coincidence-only view of the key-length analysis.
#[derive(Serialize, Debug, Clone)]
pub struct IcReport {
    pub letters: usize,
    pub overall_ic: f64,
    pub random_ic: f64,
    pub reference_ic: f64,
    pub by_ic: Vec<KeyLengthCandidate>,
}

#[derive(Serialize, Debug, Clone)]
pub struct KeyLengthReport {
    pub letters: usize,
    pub overall_ic: f64,
    pub random_ic: f64,
    /// IC the reference language predicts for monoalphabetic text.
    pub reference_ic: f64,
    pub by_ic: Vec<KeyLengthCandidate>,
    pub by_spacing: Vec<KeyLengthCandidate>,
    pub comparison: Vec<KeyLengthComparison>,
}

#[derive(Serialize, Debug, Clone)]
pub struct RepeatEntry {
    pub substring: LetterSequence,
    pub positions: Vec<usize>,
    pub spacings: Vec<usize>,
}

#[derive(Serialize, Debug, Clone)]
pub struct RepeatReport {
    pub letters: usize,
    pub repeats: Vec<RepeatEntry>,
    pub spacings: Vec<usize>,
    pub by_spacing: Vec<KeyLengthCandidate>,
}

#[derive(Serialize, Debug, Clone)]
pub struct RecoveryReport {
    pub key_length: usize,
    pub key: RecoveredKey,
    pub positions: Vec<Vec<KeyLetterCandidate>>,
    pub total_chi_squared: f64,
    pub plaintext: LetterSequence,
}

/// Runs the analysis stages with one validated configuration and reference table.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: Config,
    table: FrequencyTable,
}

impl Analyzer {
    pub fn new(config: Config, table: FrequencyTable) -> CfResult<Self> {
        config.validate()?;
        table.validate(config.recovery.zero_weight_policy)?;
        Ok(Self { config, table })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// Ranks key lengths by IC alone. Skips the repeated-substring search.
    pub fn ic_report(&self, ciphertext: &LetterSequence) -> CfResult<IcReport> {
        let p = &self.config.key_length;
        debug!(
            "Ranking key lengths {}..={} over {} letters",
            p.min_key_length,
            p.max_key_length,
            ciphertext.len()
        );

        Ok(IcReport {
            letters: ciphertext.len(),
            overall_ic: index_of_coincidence(ciphertext.as_slice()),
            random_ic: RANDOM_IC,
            reference_ic: self.table.expected_ic(),
            by_ic: rank_key_lengths_by_ic(ciphertext, p.min_key_length, p.max_key_length)?,
        })
    }

    pub fn key_lengths(&self, ciphertext: &LetterSequence) -> CfResult<KeyLengthReport> {
        let ic = self.ic_report(ciphertext)?;
        let repeats = self.repeats(ciphertext)?;
        let comparison = compare_rankings(&ic.by_ic, &repeats.by_spacing);

        Ok(KeyLengthReport {
            letters: ic.letters,
            overall_ic: ic.overall_ic,
            random_ic: ic.random_ic,
            reference_ic: ic.reference_ic,
            by_ic: ic.by_ic,
            by_spacing: repeats.by_spacing,
            comparison,
        })
    }

    pub fn repeats(&self, ciphertext: &LetterSequence) -> CfResult<RepeatReport> {
        let p = &self.config.key_length;
        let occurrences =
            find_repeated_substrings(ciphertext, p.min_substring_length, p.max_substring_length)?;
        let spacings = collect_spacings(&occurrences, p.spacing_policy);
        debug!(
            "Found {} repeated substrings, {} spacings ({} policy)",
            occurrences.len(),
            spacings.len(),
            p.spacing_policy
        );
        let by_spacing = rank_from_spacings(&spacings, p.min_key_length, p.max_key_length)?;

        let repeats = occurrences
            .into_iter()
            .map(|o| RepeatEntry {
                spacings: o.spacings(),
                substring: o.substring,
                positions: o.positions,
            })
            .collect();

        Ok(RepeatReport {
            letters: ciphertext.len(),
            repeats,
            spacings,
            by_spacing,
        })
    }

    pub fn recover(&self, ciphertext: &LetterSequence, key_length: usize) -> CfResult<RecoveryReport> {
        debug!("Recovering key letters for length {}", key_length);
        let recovery = recover_key(ciphertext, key_length, &self.table, self.config.recovery.top_n)?;
        let plaintext = decrypt(ciphertext, &recovery.key)?;

        Ok(RecoveryReport {
            key_length,
            total_chi_squared: recovery.total_chi_squared(),
            key: recovery.key,
            positions: recovery.positions,
            plaintext,
        })
    }

    pub fn decrypt(&self, ciphertext: &LetterSequence, raw_key: &str) -> CfResult<LetterSequence> {
        let key = parse_key(raw_key)?;
        decrypt(ciphertext, &key)
    }
}
