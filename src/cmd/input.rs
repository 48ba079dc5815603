use cipherforge::alphabet::{normalize, LetterSequence};
use cipherforge::error::{CfResult, CipherForgeError};
use std::fs;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::Path;
use tracing::{info, warn};

pub const MAX_ATTEMPTS: usize = 3;

/// Reads ciphertext from `source` (a path, or `-` for stdin). When the file is
/// missing and stdin is a terminal, asks for the text instead.
pub fn load_ciphertext(source: &str) -> CfResult<LetterSequence> {
    if source == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return normalize(&buf);
    }

    let path = Path::new(source);
    if path.exists() {
        let text = normalize(&fs::read_to_string(path)?)?;
        info!("📂 Ciphertext loaded from {} ({} letters).", source, text.len());
        return Ok(text);
    }

    if io::stdin().is_terminal() {
        warn!("'{}' not found; reading ciphertext interactively.", source);
        return prompt_stdin("Enter ciphertext (letters only): ", normalize);
    }

    Err(CipherForgeError::Io(io::Error::new(
        io::ErrorKind::NotFound,
        format!("ciphertext file '{}' not found", source),
    )))
}

pub fn prompt_stdin<T>(prompt: &str, parse: impl Fn(&str) -> CfResult<T>) -> CfResult<T> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut out = io::stdout();
    prompt_until_valid(&mut reader, &mut out, prompt, parse)
}

/// Asks until `parse` accepts a line. Bad input (format or range errors) is
/// reported and asked again, up to `MAX_ATTEMPTS` times.
pub fn prompt_until_valid<R: BufRead, W: Write, T>(
    reader: &mut R,
    out: &mut W,
    prompt: &str,
    parse: impl Fn(&str) -> CfResult<T>,
) -> CfResult<T> {
    let mut last_err = None;
    for attempt in 1..=MAX_ATTEMPTS {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(CipherForgeError::Format("no input given".to_string()));
        }

        match parse(line.trim_end_matches(['\r', '\n'])) {
            Ok(v) => return Ok(v),
            Err(e @ (CipherForgeError::Format(_) | CipherForgeError::Range { .. })) => {
                warn!("Attempt {}/{}: {}", attempt, MAX_ATTEMPTS, e);
                last_err = Some(e);
            }
            Err(e) => return Err(e),
        }
    }
    Err(last_err.unwrap_or_else(|| CipherForgeError::Format("no valid input".to_string())))
}

pub fn parse_key_length(s: &str) -> CfResult<usize> {
    let k: usize = s
        .trim()
        .parse()
        .map_err(|_| CipherForgeError::Format(format!("'{}' is not a key length", s.trim())))?;
    if k < 1 {
        return Err(CipherForgeError::range("key_length", k, "must be >= 1"));
    }
    Ok(k)
}

/// Drops everything except ASCII letters.
pub fn letters_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}
