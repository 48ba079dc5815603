#![allow(dead_code)]

use cipherforge::alphabet::{normalize, LetterSequence};
use cipherforge::cipher::{encrypt, parse_key};

/// Plain English prose used to build keyed ciphertexts.
pub const ENGLISH_PASSAGE: &str = concat!(
    "The old lighthouse keeper had lived on the island for nearly forty years, and in all that time he had never once ",
    "missed the evening lamp. Every night he climbed the narrow stairs, trimmed the wick, polished the great glass lens, ",
    "and watched the beam sweep out across the dark water toward the ships that passed in the distance. The villagers on ",
    "the mainland said that he was a strange and solitary man, but the fishermen who worked the northern banks knew ",
    "better. They had seen him row out in the worst of the winter storms to pull sailors from the freezing sea, and they ",
    "remembered the warm soup and dry blankets waiting for them in the small stone cottage at the foot of the tower. When ",
    "the government finally decided to replace the lamp with an automatic light, the keeper packed his few belongings into ",
    "a wooden chest and sat for a long while on the rocks, listening to the gulls and the steady rhythm of the waves. He ",
    "did not complain, and he did not ask for anything. On his last morning a small crowd of fishermen arrived in their ",
    "boats to carry him across the channel, and as they pulled away from the shore every one of them turned to look back ",
    "at the white tower standing against the grey sky. Some of the younger men laughed and joked to hide their feelings, ",
    "but the oldest among them simply removed his cap and held it against his chest until the island had disappeared ",
    "behind the morning mist. In the years that followed the keeper lived quietly in a rented room above the harbour, ",
    "where he could still see the light flashing on clear nights, and he would often tell visiting children about the ",
    "ships he had guided home and the storms he had watched from the gallery at the top of the stairs."
);

/// The first `n` letters of the passage (all of it when `n` is larger).
pub fn english(n: usize) -> LetterSequence {
    let letters: String = ENGLISH_PASSAGE
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(n)
        .collect();
    normalize(&letters).unwrap()
}

pub fn keyed(plaintext: &LetterSequence, key: &str) -> LetterSequence {
    encrypt(plaintext, &parse_key(key).unwrap()).unwrap()
}
