use crate::reports::{self, OutputFormat};
use cipherforge::error::CfResult;
use cipherforge::frequency::FrequencyTable;
use clap::Args;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Reference text in the target language.
    pub text: String,

    /// Write the table as TSV here.
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn run(args: CorpusArgs, format: OutputFormat) -> CfResult<()> {
    let content = fs::read_to_string(&args.text)?;
    let table = FrequencyTable::from_corpus(&content)?;
    info!("📚 Built frequency table from {}", args.text);

    if let Some(path) = &args.output {
        fs::write(path, table.to_tsv())?;
        info!("💾 Table written to {}", path);
    }

    match format {
        OutputFormat::Json => reports::emit_json(&table),
        OutputFormat::Table => {
            reports::print_frequency_table(&table);
            Ok(())
        }
    }
}
