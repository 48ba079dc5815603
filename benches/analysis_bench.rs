use cipherforge::alphabet::{normalize, LetterSequence};
use cipherforge::cipher::{encrypt, random_key};
use cipherforge::frequency::FrequencyTable;
use cipherforge::keylength::{
    find_repeated_substrings, rank_key_lengths_by_ic, rank_key_lengths_by_spacing,
};
use cipherforge::recover::recover_key;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const SAMPLE: &str = "It was a bright cold day in April and the clocks were striking thirteen \
    Winston Smith his chin nuzzled into his breast in an effort to escape the vile wind slipped \
    quickly through the glass doors of Victory Mansions though not quickly enough to prevent a \
    swirl of gritty dust from entering along with him";

fn setup_ciphertext(letters: usize) -> LetterSequence {
    // Repeat the sample until the target size, then key it with a fixed 9-letter key.
    let base: String = SAMPLE.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    let text: String = base.chars().cycle().take(letters).collect();
    let plain = normalize(&text).expect("sample is letters only");
    let key = random_key(&mut fastrand::Rng::with_seed(42), 9).expect("key length > 0");
    encrypt(&plain, &key).expect("key is not empty")
}

fn criterion_benchmark(c: &mut Criterion) {
    let cipher = setup_ciphertext(5000);
    let table = FrequencyTable::english();

    c.bench_function("rank_by_ic (5k letters, 2..20)", |b| {
        b.iter(|| rank_key_lengths_by_ic(black_box(&cipher), 2, 20))
    });

    c.bench_function("repeated_substrings (5k letters, 3..10)", |b| {
        b.iter(|| find_repeated_substrings(black_box(&cipher), 3, 10))
    });

    c.bench_function("rank_by_spacing (5k letters)", |b| {
        b.iter(|| rank_key_lengths_by_spacing(black_box(&cipher), 3, 10, 2, 20))
    });

    c.bench_function("recover_key (5k letters, k=9)", |b| {
        b.iter(|| recover_key(black_box(&cipher), 9, &table, 3))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
