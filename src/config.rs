use crate::error::{check_range, CfResult, CipherForgeError};
use clap::parser::ValueSource;
use clap::{ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

/// Which spacings the Kasiski step extracts from a repeated substring's positions.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    ValueEnum,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SpacingPolicy {
    /// Differences between neighbouring occurrences only.
    #[default]
    Consecutive,
    /// Every `p_j - p_i` with `i < j`.
    Pairwise,
}

/// How chi-squared treats letters the reference table gives zero weight.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    ValueEnum,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ZeroWeightPolicy {
    /// Drop the term from the sum.
    #[default]
    Skip,
    /// Refuse the table up front.
    Reject,
}

#[derive(Args, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub key_length: KeyLengthParams,
    #[command(flatten)]
    pub recovery: RecoveryParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyLengthParams {
    #[arg(long, default_value_t = 2)]
    pub min_key_length: usize,
    #[arg(long, default_value_t = 20)]
    pub max_key_length: usize,

    // Kasiski substring window. Cost grows with the upper bound.
    #[arg(long, default_value_t = 3)]
    pub min_substring_length: usize,
    #[arg(long, default_value_t = 10)]
    pub max_substring_length: usize,

    #[arg(long, value_enum, default_value_t = SpacingPolicy::Consecutive)]
    pub spacing_policy: SpacingPolicy,
}

impl Default for KeyLengthParams {
    fn default() -> Self {
        Self {
            min_key_length: 2,
            max_key_length: 20,
            min_substring_length: 3,
            max_substring_length: 10,
            spacing_policy: SpacingPolicy::Consecutive,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryParams {
    /// Alternatives reported per key position.
    #[arg(long, default_value_t = 3)]
    pub top_n: usize,

    #[arg(long, value_enum, default_value_t = ZeroWeightPolicy::Skip)]
    pub zero_weight_policy: ZeroWeightPolicy,
}

impl Default for RecoveryParams {
    fn default() -> Self {
        Self {
            top_n: 3,
            zero_weight_policy: ZeroWeightPolicy::Skip,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Copies every value the user typed on the command line over the current
    /// (file-loaded) values. Defaults filled in by clap do not count.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(key_length, min_key_length);
        update_if_present!(key_length, max_key_length);
        update_if_present!(key_length, min_substring_length);
        update_if_present!(key_length, max_substring_length);
        update_if_present!(key_length, spacing_policy);
        update_if_present!(recovery, top_n);
        update_if_present!(recovery, zero_weight_policy);
    }

    pub fn validate(&self) -> CfResult<()> {
        let k = &self.key_length;
        check_range(
            "min_key_length",
            k.min_key_length,
            "max_key_length",
            k.max_key_length,
            1,
        )?;
        check_range(
            "min_substring_length",
            k.min_substring_length,
            "max_substring_length",
            k.max_substring_length,
            1,
        )?;
        if self.recovery.top_n < 1 {
            return Err(CipherForgeError::range(
                "top_n",
                self.recovery.top_n,
                "must be >= 1",
            ));
        }
        Ok(())
    }
}
