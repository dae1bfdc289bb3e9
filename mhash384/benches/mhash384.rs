use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use mhash384::prelude::MHash384;
use rand::RngCore;

fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0_u8; len];
    rand::rng().fill_bytes(&mut bytes);
    bytes
}

fn bench_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("mhash384/one_shot");

    for size in [256_usize, 4_096, 65_536] {
        let data = random_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |bencher| {
            bencher.iter(|| MHash384::hash(&data));
        });
    }

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("mhash384/streaming");

    let size = 65_536;
    let chunk_size = 4_096;
    let data = random_bytes(size);
    group.sample_size(50);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function(BenchmarkId::new("chunked", chunk_size), |bencher| {
        bencher.iter(|| {
            let mut hasher = MHash384::new();
            for chunk in data.chunks(chunk_size) {
                hasher.update(chunk).unwrap();
            }
            hasher.digest().unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_one_shot, bench_streaming);
criterion_main!(benches);
