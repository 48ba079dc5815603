use cipherforge::config::Config;
use cipherforge::error::CfResult;
use cipherforge::frequency::FrequencyTable;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use reports::OutputFormat;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Ciphertext file; `-` reads stdin.
    #[arg(global = true, short, long, default_value = "cipher.txt")]
    cipher: String,

    /// Reference letter frequencies (TSV: letter, weight). Defaults to English.
    #[arg(global = true, short, long)]
    frequencies: Option<String>,

    /// JSON analysis config; explicit flags override it.
    #[arg(global = true, long)]
    config_file: Option<String>,

    #[arg(global = true, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank key lengths by average index of coincidence.
    Ic(cmd::ic::IcArgs),
    /// List repeated substrings and rank key lengths by their spacings.
    Kasiski(cmd::kasiski::KasiskiArgs),
    /// Show both key-length rankings side by side.
    Lengths(cmd::lengths::LengthsArgs),
    /// Recover key letters for a chosen key length.
    Recover(cmd::recover::RecoverArgs),
    /// Decrypt with a known key.
    Decrypt(cmd::decrypt::DecryptArgs),
    /// Encrypt plaintext (for building test ciphertexts).
    Encrypt(cmd::encrypt::EncryptArgs),
    /// Derive a letter-frequency table from a reference text.
    Corpus(cmd::corpus::CorpusArgs),
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &ArgMatches) -> CfResult<()> {
    let sub_matches = matches.subcommand().map(|(_, m)| m);

    match cli.command {
        Commands::Ic(args) => {
            let ctx = session(&cli.cipher, &cli.frequencies, &cli.config_file, &args.config, sub_matches)?;
            cmd::ic::run(args, &ctx, cli.format)
        }
        Commands::Kasiski(args) => {
            let ctx = session(&cli.cipher, &cli.frequencies, &cli.config_file, &args.config, sub_matches)?;
            cmd::kasiski::run(args, &ctx, cli.format)
        }
        Commands::Lengths(args) => {
            let ctx = session(&cli.cipher, &cli.frequencies, &cli.config_file, &args.config, sub_matches)?;
            cmd::lengths::run(args, &ctx, cli.format)
        }
        Commands::Recover(args) => {
            let ctx = session(&cli.cipher, &cli.frequencies, &cli.config_file, &args.config, sub_matches)?;
            cmd::recover::run(args, &ctx, cli.format)
        }
        Commands::Decrypt(args) => {
            let ciphertext = cmd::input::load_ciphertext(&cli.cipher)?;
            cmd::decrypt::run(args, &ciphertext, cli.format)
        }
        Commands::Encrypt(args) => cmd::encrypt::run(args, cli.format),
        Commands::Corpus(args) => cmd::corpus::run(args, cli.format),
    }
}

/// Loads the ciphertext, resolves configuration and builds the analyzer.
fn session(
    cipher_path: &str,
    frequencies: &Option<String>,
    config_path: &Option<String>,
    cli_config: &Config,
    sub_matches: Option<&ArgMatches>,
) -> CfResult<cmd::Session> {
    let config = match config_path {
        Some(path) => {
            info!("⚖️  Loading configuration from: {}", path);
            let mut file_config = Config::load_from_file(path)?;
            if let Some(m) = sub_matches {
                file_config.merge_from_cli(cli_config, m);
            }
            file_config
        }
        None => cli_config.clone(),
    };

    let table = match frequencies {
        Some(path) => {
            info!("📚 Loading frequency table: {}", path);
            FrequencyTable::load_from_file(path)?
        }
        None => FrequencyTable::english(),
    };

    let ciphertext = cmd::input::load_ciphertext(cipher_path)?;
    cmd::Session::new(ciphertext, config, table)
}
