use super::input::letters_only;
use crate::reports::{self, OutputFormat};
use cipherforge::alphabet::normalize;
use cipherforge::cipher::{encrypt, parse_key, random_key};
use cipherforge::error::{CfResult, CipherForgeError};
use clap::Args;
use std::fs;
use std::io::{self, Read};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    /// Plaintext file; `-` reads stdin.
    #[arg(short, long)]
    pub input: String,

    #[arg(short = 'k', long, conflicts_with = "random_key", required_unless_present = "random_key")]
    pub key: Option<String>,

    /// Generate a random key of this many letters.
    #[arg(short = 'r', long)]
    pub random_key: Option<usize>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Drop punctuation and digits instead of rejecting them.
    #[arg(long, default_value_t = false)]
    pub strip: bool,

    /// Write the ciphertext here instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn run(args: EncryptArgs, format: OutputFormat) -> CfResult<()> {
    let raw = if args.input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&args.input)?
    };
    let plaintext = if args.strip {
        normalize(&letters_only(&raw))?
    } else {
        normalize(&raw)?
    };

    let key = match (&args.key, args.random_key) {
        (Some(raw_key), _) => parse_key(raw_key)?,
        (None, Some(len)) => {
            let mut rng = match args.seed {
                Some(s) => fastrand::Rng::with_seed(s),
                None => fastrand::Rng::new(),
            };
            random_key(&mut rng, len)?
        }
        (None, None) => {
            return Err(CipherForgeError::Format(
                "either --key or --random-key is required".to_string(),
            ))
        }
    };
    info!("🔑 Key: {} (length {})", key, key.len());

    let ciphertext = encrypt(&plaintext, &key)?;

    if let Some(path) = &args.output {
        fs::write(path, format!("{}\n", ciphertext))?;
        info!("💾 Ciphertext written to {} ({} letters).", path, ciphertext.len());
    }

    match format {
        OutputFormat::Json => reports::emit_json(&serde_json::json!({
            "key": key,
            "ciphertext": ciphertext,
        })),
        OutputFormat::Table => {
            if args.output.is_none() {
                println!("{}", ciphertext);
            }
            Ok(())
        }
    }
}
