mod common;

use cipherforge::alphabet::normalize;
use cipherforge::cipher::{decrypt, encrypt, parse_key};
use cipherforge::error::CipherForgeError;
use rstest::rstest;

#[test]
fn test_textbook_lemon_example() {
    let ciphertext = normalize("LXFOPVEFRNHR").unwrap();
    let key = parse_key("LEMON").unwrap();
    let plain = decrypt(&ciphertext, &key).unwrap();
    assert_eq!(plain.to_string(), "ATTACKATDAWN");
}

#[test]
fn test_encrypt_matches_textbook() {
    let plain = normalize("attack at dawn").unwrap();
    let key = parse_key("lemon").unwrap();
    assert_eq!(encrypt(&plain, &key).unwrap().to_string(), "LXFOPVEFRNHR");
}

#[rstest]
#[case("A")]
#[case("LEMON")]
#[case("Lighthouse")]
#[case("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz")]
fn test_round_trip_over_passage(#[case] raw_key: &str) {
    let plain = common::english(usize::MAX);
    let key = parse_key(raw_key).unwrap();
    let cipher = encrypt(&plain, &key).unwrap();
    assert_eq!(decrypt(&cipher, &key).unwrap(), plain);
}

#[test]
fn test_key_a_is_identity() {
    let plain = common::english(50);
    let key = parse_key("a").unwrap();
    assert_eq!(decrypt(&plain, &key).unwrap(), plain);
}

#[rstest]
#[case("")]
#[case("   \n")]
fn test_empty_key_is_format_error(#[case] raw: &str) {
    assert!(matches!(parse_key(raw), Err(CipherForgeError::Format(_))));
}

#[rstest]
#[case("LEM0N")]
#[case("le-mon")]
#[case("clé")]
fn test_non_alphabetic_key_is_format_error(#[case] raw: &str) {
    let err = parse_key(raw).unwrap_err();
    assert!(matches!(err, CipherForgeError::Format(_)));
    assert!(err.to_string().contains("key"));
}

#[test]
fn test_key_whitespace_is_ignored() {
    let key = parse_key(" le mon\n").unwrap();
    assert_eq!(key.to_string(), "LEMON");
}

#[test]
fn test_empty_ciphertext_decrypts_to_empty() {
    let empty = normalize("").unwrap();
    let key = parse_key("KEY").unwrap();
    assert!(decrypt(&empty, &key).unwrap().is_empty());
}
