use crate::error::{CfResult, CipherForgeError};
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Index;

pub const ALPHABET_SIZE: usize = 26;

/// Maps a letter to its alphabet index (`A`/`a` = 0 .. `Z`/`z` = 25).
#[inline]
pub fn index_of(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Canonical (upper-case) symbol for an alphabet index.
#[inline]
pub fn symbol(index: u8) -> char {
    debug_assert!((index as usize) < ALPHABET_SIZE);
    (b'A' + index % ALPHABET_SIZE as u8) as char
}

/// An immutable run of alphabet indices. Only the normalizer and the cipher
/// primitives construct one, so every element is in `0..26`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct LetterSequence(Vec<u8>);

impl LetterSequence {
    pub(crate) fn from_indices(indices: Vec<u8>) -> Self {
        debug_assert!(indices.iter().all(|&i| (i as usize) < ALPHABET_SIZE));
        Self(indices)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.0.iter()
    }

    /// Counts of each alphabet index.
    pub fn counts(&self) -> [usize; ALPHABET_SIZE] {
        letter_counts(&self.0)
    }
}

pub(crate) fn letter_counts(indices: &[u8]) -> [usize; ALPHABET_SIZE] {
    let mut counts = [0usize; ALPHABET_SIZE];
    for &i in indices {
        counts[i as usize] += 1;
    }
    counts
}

impl Index<usize> for LetterSequence {
    type Output = u8;

    fn index(&self, i: usize) -> &u8 {
        &self.0[i]
    }
}

impl fmt::Display for LetterSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &i in &self.0 {
            write!(f, "{}", symbol(i))?;
        }
        Ok(())
    }
}

impl Serialize for LetterSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Strips whitespace, rejects anything that is not an ASCII letter and folds
/// the rest to alphabet indices.
pub fn normalize(raw: &str) -> CfResult<LetterSequence> {
    let mut indices = Vec::with_capacity(raw.len());
    for (pos, c) in raw.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        match index_of(c) {
            Some(i) => indices.push(i),
            None => {
                return Err(CipherForgeError::Format(format!(
                    "non-alphabetic character {:?} at position {}",
                    c, pos
                )))
            }
        }
    }
    Ok(LetterSequence(indices))
}

impl std::str::FromStr for LetterSequence {
    type Err = CipherForgeError;

    fn from_str(s: &str) -> CfResult<Self> {
        normalize(s)
    }
}
