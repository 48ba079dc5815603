use cipherforge::alphabet::normalize;
use cipherforge::cipher::{decrypt, encrypt};
use cipherforge::frequency::FrequencyTable;
use cipherforge::keylength::{factor_score, find_repeated_substrings, index_of_coincidence, key_length_score};
use cipherforge::recover::rank_shifts;
use proptest::prelude::*;

// --- STRATEGIES ---

fn arb_letters(max: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[A-Z]{{0,{}}}", max)).unwrap()
}

fn arb_key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z]{1,12}").unwrap()
}

proptest! {
    #[test]
    fn test_ic_is_a_probability(text in arb_letters(300)) {
        let seq = normalize(&text).unwrap();
        let ic = index_of_coincidence(seq.as_slice());
        prop_assert!((0.0..=1.0).contains(&ic));
    }

    #[test]
    fn test_column_average_bounded(text in arb_letters(200), k in 1usize..25) {
        let seq = normalize(&text).unwrap();
        let score = key_length_score(&seq, k);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn test_decrypt_inverts_encrypt(text in arb_letters(200), key in arb_key()) {
        let plain = normalize(&text).unwrap();
        let key = normalize(&key).unwrap();
        let cipher = encrypt(&plain, &key).unwrap();
        prop_assert_eq!(cipher.len(), plain.len());
        prop_assert_eq!(decrypt(&cipher, &key).unwrap(), plain);
    }

    #[test]
    fn test_repeats_are_real(text in proptest::string::string_regex("[A-D]{0,80}").unwrap(), lo in 1usize..4, extra in 0usize..4) {
        let seq = normalize(&text).unwrap();
        let hi = lo + extra;
        let slice = seq.as_slice();
        for occ in find_repeated_substrings(&seq, lo, hi).unwrap() {
            let sub = occ.substring.as_slice();
            prop_assert!(sub.len() >= lo && sub.len() <= hi);
            prop_assert!(occ.positions.len() >= 2);
            for &p in &occ.positions {
                prop_assert_eq!(&slice[p..p + sub.len()], sub);
            }
        }
    }

    #[test]
    fn test_factor_score_counts_divisors(spacings in proptest::collection::vec(0usize..500, 0..40)) {
        let scores = factor_score(&spacings, 1, 20).unwrap();
        let positive = spacings.iter().filter(|&&d| d > 0).count();
        prop_assert_eq!(scores[&1], positive);
        for (&f, &count) in &scores {
            let expected = spacings.iter().filter(|&&d| d > 0 && d % f == 0).count();
            prop_assert_eq!(count, expected);
        }
    }

    #[test]
    fn test_shift_ranking_is_a_permutation(text in arb_letters(60)) {
        let seq = normalize(&text).unwrap();
        let ranked = rank_shifts(seq.as_slice(), 0, &FrequencyTable::english());
        let mut shifts: Vec<u8> = ranked.iter().map(|c| c.shift).collect();
        prop_assert!(ranked.windows(2).all(|w| w[0].chi_squared <= w[1].chi_squared));
        shifts.sort_unstable();
        prop_assert_eq!(shifts, (0..26).collect::<Vec<u8>>());
    }
}
