use std::sync::Arc;

use secrecy::SecretString;
use veil_envelope::{
    derive_key, open, seal, DerivedKey, EnvelopeCrypto, KdfParams, OsProvider, KEY_SIZE,
};

fn make_data(size: usize) -> Vec<u8> {
    (0..size)
        .map(|i| (i.wrapping_mul(7) ^ (i >> 3)) as u8)
        .collect()
}

#[divan::bench]
fn bench_derive_key_published_params(bencher: divan::Bencher) {
    let provider = OsProvider::probe().unwrap();
    let password = SecretString::from("bench-password-123");
    let salt = [7u8; 16];
    bencher.bench(|| {
        derive_key(
            divan::black_box(&password),
            Some(divan::black_box(&salt)),
            &KdfParams::default(),
            &provider,
        )
        .unwrap()
    });
}

#[divan::bench(args = [1024, 65536, 1048576])]
fn bench_seal(bencher: divan::Bencher, size: usize) {
    let provider = OsProvider::probe().unwrap();
    let key = DerivedKey::from_bytes([42u8; KEY_SIZE]);
    let data = make_data(size);
    bencher
        .counter(divan::counter::BytesCount::new(size))
        .bench(|| {
            seal(
                divan::black_box(&data),
                divan::black_box(&key),
                None,
                &provider,
            )
            .unwrap()
        });
}

#[divan::bench(args = [1024, 65536, 1048576])]
fn bench_open(bencher: divan::Bencher, size: usize) {
    let provider = OsProvider::probe().unwrap();
    let key = DerivedKey::from_bytes([42u8; KEY_SIZE]);
    let data = make_data(size);
    let (ciphertext, nonce) = seal(&data, &key, None, &provider).unwrap();
    bencher
        .counter(divan::counter::BytesCount::new(size))
        .bench(|| {
            open(
                divan::black_box(&ciphertext),
                divan::black_box(&key),
                divan::black_box(&nonce),
            )
            .unwrap()
        });
}

#[divan::bench(args = [1024, 65536])]
fn bench_encrypt_to_text(bencher: divan::Bencher, size: usize) {
    let crypto = EnvelopeCrypto::with_params(
        Arc::new(OsProvider::probe().unwrap()),
        KdfParams { iterations: 1_000 },
    );
    let password = SecretString::from("bench-password-123");
    let data = make_data(size);
    bencher
        .counter(divan::counter::BytesCount::new(size))
        .bench(|| {
            crypto
                .encrypt_to_text(divan::black_box(&data), &password)
                .unwrap()
        });
}

fn main() {
    divan::main();
}
