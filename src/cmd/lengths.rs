use super::Session;
use crate::reports::{self, OutputFormat};
use cipherforge::config::Config;
use cipherforge::error::CfResult;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct LengthsArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(_args: LengthsArgs, ctx: &Session, format: OutputFormat) -> CfResult<()> {
    let report = ctx.analyzer.key_lengths(&ctx.ciphertext)?;

    match format {
        OutputFormat::Json => reports::emit_json(&report),
        OutputFormat::Table => {
            reports::print_ic_summary(report.overall_ic, report.random_ic, report.reference_ic);
            reports::print_comparison(&report);
            println!("\nTop by IC:");
            reports::print_top_candidates(&report.by_ic, 4);
            println!("\nTop by spacing:");
            reports::print_top_candidates(&report.by_spacing, 0);
            Ok(())
        }
    }
}
