use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamming_codec::cs::ecc::hamming::{decode, encode, inject_error, DataWord};
use hamming_codec::cs::ecc::{ErrorCorrection, Hamming74};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_words(c: &mut Criterion) {
    let words: Vec<DataWord> = DataWord::all().collect();
    let mut rng = StdRng::seed_from_u64(42);
    let corrupted: Vec<_> = words
        .iter()
        .map(|&word| inject_error(encode(word), &mut rng).0)
        .collect();

    c.bench_function("hamming74_encode_all_words", |b| {
        b.iter(|| {
            for &word in &words {
                black_box(encode(black_box(word)));
            }
        })
    });

    c.bench_function("hamming74_decode_single_errors", |b| {
        b.iter(|| {
            for &codeword in &corrupted {
                black_box(decode(black_box(codeword)));
            }
        })
    });
}

fn bench_stream(c: &mut Criterion) {
    let code = Hamming74;
    let mut group = c.benchmark_group("hamming74_stream");

    for size in [64, 1024, 16384] {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let data: Vec<u8> = (0..size).map(|_| rng.gen()).collect();
        let encoded = code.encode(&data).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| code.encode(black_box(data)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| code.decode(black_box(encoded)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_words, bench_stream);
criterion_main!(benches);
