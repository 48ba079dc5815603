pub mod corpus;
pub mod decrypt;
pub mod encrypt;
pub mod ic;
pub mod input;
pub mod kasiski;
pub mod lengths;
pub mod recover;

use cipherforge::alphabet::LetterSequence;
use cipherforge::api::Analyzer;
use cipherforge::config::Config;
use cipherforge::error::CfResult;
use cipherforge::frequency::FrequencyTable;
use tracing::info;

/// Ciphertext plus the analyzer every analysis subcommand shares.
pub struct Session {
    pub ciphertext: LetterSequence,
    pub analyzer: Analyzer,
}

impl Session {
    pub fn new(ciphertext: LetterSequence, config: Config, table: FrequencyTable) -> CfResult<Self> {
        let analyzer = Analyzer::new(config, table)?;
        info!("🔐 Ciphertext length (letters only): {}", ciphertext.len());
        Ok(Self {
            ciphertext,
            analyzer,
        })
    }
}
