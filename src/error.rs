use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherForgeError {
    #[error("Format Error: {0}")]
    Format(String),

    #[error("Range Error: {name} = {value} ({reason})")]
    Range {
        name: &'static str,
        value: i64,
        reason: String,
    },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CipherForgeError {
    pub fn range(name: &'static str, value: usize, reason: impl Into<String>) -> Self {
        Self::Range {
            name,
            value: value as i64,
            reason: reason.into(),
        }
    }
}

pub type CfResult<T> = Result<T, CipherForgeError>;

/// Checks an inclusive `[min, max]` parameter pair where `min` must be at least `floor`.
pub fn check_range(
    min_name: &'static str,
    min: usize,
    max_name: &'static str,
    max: usize,
    floor: usize,
) -> CfResult<()> {
    if min < floor {
        return Err(CipherForgeError::range(
            min_name,
            min,
            format!("must be >= {}", floor),
        ));
    }
    if max < min {
        return Err(CipherForgeError::range(
            max_name,
            max,
            format!("must be >= {} ({})", min_name, min),
        ));
    }
    Ok(())
}
