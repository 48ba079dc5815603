use crate::alphabet::{normalize, LetterSequence, ALPHABET_SIZE};
use crate::error::{CfResult, CipherForgeError};

const MODULUS: u8 = ALPHABET_SIZE as u8;

/// Parses a user-supplied key. Keys follow the ciphertext rules and must also
/// be non-empty.
pub fn parse_key(raw: &str) -> CfResult<LetterSequence> {
    let key = normalize(raw).map_err(|e| match e {
        CipherForgeError::Format(msg) => CipherForgeError::Format(format!("key: {}", msg)),
        other => other,
    })?;
    if key.is_empty() {
        return Err(CipherForgeError::Format("key is empty".to_string()));
    }
    Ok(key)
}

/// Draws a key of `len` uniformly random letters.
pub fn random_key(rng: &mut fastrand::Rng, len: usize) -> CfResult<LetterSequence> {
    if len < 1 {
        return Err(CipherForgeError::range("key_length", len, "must be >= 1"));
    }
    let key = (0..len).map(|_| rng.u8(0..MODULUS)).collect();
    Ok(LetterSequence::from_indices(key))
}

/// Splits `seq` into `k` interleaved columns; column `j` holds every letter
/// whose position is `j` modulo `k`.
pub fn split_columns(seq: &[u8], k: usize) -> Vec<Vec<u8>> {
    debug_assert!(k >= 1);
    let mut columns: Vec<Vec<u8>> = (0..k)
        .map(|_| Vec::with_capacity(seq.len() / k + 1))
        .collect();
    for (i, &c) in seq.iter().enumerate() {
        columns[i % k].push(c);
    }
    columns
}

/// Adds `shift` (mod 26) to every letter. Negative shifts decrypt.
pub fn caesar_shift(seq: &[u8], shift: i32) -> Vec<u8> {
    let s = shift.rem_euclid(MODULUS as i32) as u8;
    seq.iter().map(|&c| (c + s) % MODULUS).collect()
}

/// `p_i = (c_i - k_{i mod |k|}) mod 26`
pub fn decrypt(ciphertext: &LetterSequence, key: &LetterSequence) -> CfResult<LetterSequence> {
    apply_key(ciphertext, key, |c, k| (c + MODULUS - k) % MODULUS)
}

/// `c_i = (p_i + k_{i mod |k|}) mod 26`
pub fn encrypt(plaintext: &LetterSequence, key: &LetterSequence) -> CfResult<LetterSequence> {
    apply_key(plaintext, key, |p, k| (p + k) % MODULUS)
}

fn apply_key(
    text: &LetterSequence,
    key: &LetterSequence,
    op: impl Fn(u8, u8) -> u8,
) -> CfResult<LetterSequence> {
    if key.is_empty() {
        return Err(CipherForgeError::Format("key is empty".to_string()));
    }
    let k = key.as_slice();
    let out = text
        .iter()
        .enumerate()
        .map(|(i, &c)| op(c, k[i % k.len()]))
        .collect();
    Ok(LetterSequence::from_indices(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_interleave() {
        let cols = split_columns(&[0, 1, 2, 3, 4, 5, 6], 3);
        assert_eq!(cols, vec![vec![0, 3, 6], vec![1, 4], vec![2, 5]]);
    }

    #[test]
    fn more_columns_than_letters_leaves_empties() {
        let cols = split_columns(&[7, 8], 4);
        assert_eq!(cols[2], Vec::<u8>::new());
        assert_eq!(cols[3], Vec::<u8>::new());
    }

    #[test]
    fn seeded_random_keys_repeat() {
        let a = random_key(&mut fastrand::Rng::with_seed(7), 9).unwrap();
        let b = random_key(&mut fastrand::Rng::with_seed(7), 9).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 9);
        assert!(random_key(&mut fastrand::Rng::with_seed(7), 0).is_err());
    }

    #[test]
    fn caesar_wraps_both_ways() {
        assert_eq!(caesar_shift(&[25, 0], 1), vec![0, 1]);
        assert_eq!(caesar_shift(&[0, 1], -1), vec![25, 0]);
        assert_eq!(caesar_shift(&[3], -29), vec![0]);
    }
}
