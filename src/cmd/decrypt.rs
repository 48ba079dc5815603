use super::input::prompt_stdin;
use crate::reports::{self, OutputFormat};
use cipherforge::alphabet::LetterSequence;
use cipherforge::cipher::{decrypt, parse_key};
use cipherforge::error::CfResult;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct DecryptArgs {
    /// Key letters. Asked for interactively when omitted.
    #[arg(short = 'k', long)]
    pub key: Option<String>,
}

pub fn run(args: DecryptArgs, ciphertext: &LetterSequence, format: OutputFormat) -> CfResult<()> {
    let key = match args.key {
        Some(raw) => parse_key(&raw)?,
        None => prompt_stdin("Enter key: ", parse_key)?,
    };

    let plaintext = decrypt(ciphertext, &key)?;

    match format {
        OutputFormat::Json => reports::emit_json(&serde_json::json!({
            "key": key,
            "plaintext": plaintext,
        })),
        OutputFormat::Table => {
            reports::print_text("Decrypted plaintext", &plaintext);
            Ok(())
        }
    }
}
