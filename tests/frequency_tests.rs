use cipherforge::config::ZeroWeightPolicy;
use cipherforge::error::CipherForgeError;
use cipherforge::frequency::{FrequencyTable, ENGLISH_FREQUENCIES};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn sums_to_one(table: &FrequencyTable) -> bool {
    (table.weights().iter().sum::<f64>() - 1.0).abs() < 1e-9
}

#[test]
fn test_english_table_is_normalised() {
    let table = FrequencyTable::english();
    assert!(sums_to_one(&table));
    let raw_total: f64 = ENGLISH_FREQUENCIES.iter().sum();
    assert!((table.weight(4) - ENGLISH_FREQUENCIES[4] / raw_total).abs() < 1e-12);
    assert!((table.expected_ic() - 0.0655).abs() < 0.002);
    assert_eq!(FrequencyTable::default(), table);
}

#[test]
fn test_loader_skips_headers_comments_and_garbage() {
    let data = "letter\tweight\n# comment line\nA\t2\nb\t1\nC\tnot-a-number\nDE\t5\n\nE\n";
    let table = FrequencyTable::load_from_reader(Cursor::new(data)).unwrap();
    assert!(sums_to_one(&table));
    assert!((table.weight(0) - 2.0 / 3.0).abs() < 1e-12);
    assert!((table.weight(1) - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(table.weight(2), 0.0);
    assert_eq!(table.weight(3), 0.0);
    assert_eq!(table.weight(4), 0.0);
}

#[test]
fn test_loader_accumulates_repeated_letters() {
    let data = "A\t1\nZ\t1\na\t2\n";
    let table = FrequencyTable::load_from_reader(Cursor::new(data)).unwrap();
    assert!((table.weight(0) - 0.75).abs() < 1e-12);
    assert!((table.weight(25) - 0.25).abs() < 1e-12);
}

#[test]
fn test_loader_rejects_table_without_weight() {
    let err = FrequencyTable::load_from_reader(Cursor::new("header\tonly\n")).unwrap_err();
    assert!(matches!(err, CipherForgeError::Config(_)));
}

#[test]
fn test_negative_weight_is_rejected() {
    let err = FrequencyTable::load_from_reader(Cursor::new("A\t1\nB\t-0.5\n")).unwrap_err();
    assert!(err.to_string().contains("'B'"));
}

#[test]
fn test_tsv_output_loads_back() {
    let original = FrequencyTable::english();
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", original.to_tsv()).unwrap();

    let loaded = FrequencyTable::load_from_file(file.path()).unwrap();
    for i in 0..26 {
        assert!((loaded.weight(i) - original.weight(i)).abs() < 1e-5);
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let err = FrequencyTable::load_from_file("/definitely/not/here.tsv").unwrap_err();
    assert!(matches!(err, CipherForgeError::Io(_)));
}

#[test]
fn test_corpus_counts_letters_only() {
    let table = FrequencyTable::from_corpus("Aab, b! 42").unwrap();
    assert!((table.weight(0) - 0.5).abs() < 1e-12);
    assert!((table.weight(1) - 0.5).abs() < 1e-12);
    assert!(FrequencyTable::from_corpus("1234 !?").is_err());
}

#[test]
fn test_zero_weight_policy() {
    let table = FrequencyTable::from_corpus("abc").unwrap();
    assert!(table.validate(ZeroWeightPolicy::Skip).is_ok());
    let err = table.validate(ZeroWeightPolicy::Reject).unwrap_err();
    assert!(matches!(err, CipherForgeError::Config(_)));
    assert!(err.to_string().contains("'D'"));

    assert!(FrequencyTable::english()
        .validate(ZeroWeightPolicy::Reject)
        .is_ok());
}

#[test]
fn test_weights_whose_sum_overflows_are_rejected() {
    let err = FrequencyTable::from_weights([f64::MAX; 26]).unwrap_err();
    assert!(matches!(err, CipherForgeError::Config(_)));

    let rows: String = (b'A'..=b'Z')
        .map(|c| format!("{}\t1e308\n", c as char))
        .collect();
    let err = FrequencyTable::load_from_reader(Cursor::new(rows)).unwrap_err();
    assert!(matches!(err, CipherForgeError::Config(_)));
}
