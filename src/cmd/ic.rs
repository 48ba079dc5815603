use super::Session;
use crate::reports::{self, OutputFormat};
use cipherforge::config::Config;
use cipherforge::error::CfResult;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct IcArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(_args: IcArgs, ctx: &Session, format: OutputFormat) -> CfResult<()> {
    let report = ctx.analyzer.ic_report(&ctx.ciphertext)?;

    match format {
        OutputFormat::Json => reports::emit_json(&report),
        OutputFormat::Table => {
            let p = &ctx.analyzer.config().key_length;
            reports::print_ic_summary(report.overall_ic, report.random_ic, report.reference_ic);
            reports::print_ranking(
                &format!(
                    "Key length IC scores ({}~{}):",
                    p.min_key_length, p.max_key_length
                ),
                "Avg IC",
                &report.by_ic,
                4,
            );
            reports::print_top_candidates(&report.by_ic, 4);
            Ok(())
        }
    }
}
