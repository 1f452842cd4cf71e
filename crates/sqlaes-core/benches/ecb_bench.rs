use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use sqlaes_core::{decrypt, encrypt, Aes128, BlockCipher, DerivedKey};

fn bench_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("key");
    let raw = [0x5au8; 64];
    group.bench_function("derive_64_bytes", |b| {
        b.iter(|| DerivedKey::derive(black_box(&raw)));
    });
    let key = DerivedKey::derive(&raw);
    group.bench_function("expand", |b| {
        b.iter(|| Aes128::new(black_box(&key)));
    });
    group.finish();
}

fn bench_ecb(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let key = DerivedKey::derive(b"bench key material");
    let cipher = Aes128::new(&key);

    let mut group = c.benchmark_group("ecb");
    group.bench_function("encrypt_block", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        b.iter(|| {
            let mut data = block;
            cipher.encrypt_block(&mut data);
            data
        });
    });

    for len in [16usize, 1024, 16 * 1024] {
        let mut plain = vec![0u8; len];
        rng.fill_bytes(&mut plain);
        let ct = encrypt(&plain, &key);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_function(format!("encrypt_{len}"), |b| {
            b.iter(|| encrypt(black_box(&plain), &key));
        });
        group.bench_function(format!("decrypt_{len}"), |b| {
            b.iter(|| decrypt(black_box(&ct), &key));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_key, bench_ecb);
criterion_main!(benches);
