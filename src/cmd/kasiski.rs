use super::Session;
use crate::reports::{self, OutputFormat};
use cipherforge::config::Config;
use cipherforge::error::CfResult;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct KasiskiArgs {
    #[command(flatten)]
    pub config: Config,

    /// Skip the substring listing and print only the length scores.
    #[arg(long, default_value_t = false)]
    pub scores_only: bool,
}

pub fn run(args: KasiskiArgs, ctx: &Session, format: OutputFormat) -> CfResult<()> {
    let report = ctx.analyzer.repeats(&ctx.ciphertext)?;

    match format {
        OutputFormat::Json => reports::emit_json(&report),
        OutputFormat::Table => {
            if !args.scores_only {
                reports::print_repeats(&report);
            }
            if report.spacings.is_empty() {
                println!("No spacings collected.");
                return Ok(());
            }
            reports::print_ranking(
                "Candidate key length scores:",
                "Score",
                &report.by_spacing,
                0,
            );
            Ok(())
        }
    }
}
