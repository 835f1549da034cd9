use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use opossum::{Opossum, OpossumCtr, OpossumKey};

fn bench_key_schedule(c: &mut Criterion) {
    let cipher = Opossum::new();
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut key_bytes = [0u8; 256];
    rng.fill_bytes(&mut key_bytes);

    let mut group = c.benchmark_group("key_schedule");
    group.sample_size(20);
    group.bench_function("expand_key_160", |b| {
        b.iter(|| {
            let key = OpossumKey::from(key_bytes);
            cipher.expand_key(&key)
        });
    });
    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let cipher = Opossum::new();
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut key_bytes = [0u8; 256];
    rng.fill_bytes(&mut key_bytes);
    let round_keys = cipher.expand_key(&OpossumKey::from(key_bytes));
    let mut block = [0u8; 256];
    rng.fill_bytes(&mut block);

    let mut group = c.benchmark_group("block");
    group.bench_function("encrypt_block", |b| {
        b.iter(|| cipher.encrypt_block(&block, &round_keys).expect("block size"));
    });
    group.finish();
}

fn bench_ctr(c: &mut Criterion) {
    let ctr = OpossumCtr::new();
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut key = [0u8; 256];
    let mut iv = [0u8; 32];
    let mut data = vec![0u8; 4096];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut iv);
    rng.fill_bytes(&mut data);

    let mut group = c.benchmark_group("ctr");
    group.sample_size(10);
    group.bench_function("encrypt_4096", |b| {
        b.iter(|| ctr.encrypt(&data, &key, &iv).expect("valid sizes"));
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_block, bench_ctr);
criterion_main!(benches);
