use super::input::{parse_key_length, prompt_stdin};
use super::Session;
use crate::reports::{self, OutputFormat};
use cipherforge::config::Config;
use cipherforge::error::CfResult;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct RecoverArgs {
    #[command(flatten)]
    pub config: Config,

    /// Key length to solve for. Asked for interactively when omitted.
    #[arg(short = 'k', long)]
    pub key_length: Option<usize>,
}

pub fn run(args: RecoverArgs, ctx: &Session, format: OutputFormat) -> CfResult<()> {
    let key_length = match args.key_length {
        Some(k) => k,
        None => prompt_stdin("Enter key length: ", parse_key_length)?,
    };

    let report = ctx.analyzer.recover(&ctx.ciphertext, key_length)?;

    match format {
        OutputFormat::Json => reports::emit_json(&report),
        OutputFormat::Table => {
            reports::print_recovery(&report);
            Ok(())
        }
    }
}
