use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use redis_ac_keywords::testing::MemoryStore;
use redis_ac_keywords::KeywordIndex;

fn random_word(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| (b'a' + rng.random_range(0..26)) as char)
        .collect()
}

fn populated(n: usize) -> KeywordIndex<MemoryStore> {
    let index = KeywordIndex::with_store(MemoryStore::new(), "bench").unwrap();
    let mut rng = rand::rng();
    for _ in 0..n {
        index.add(&random_word(&mut rng, 6)).unwrap();
    }
    index
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for &n in &[10usize, 100, 500] {
        let index = populated(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            let mut rng = rand::rng();
            b.iter(|| {
                let word = random_word(&mut rng, 6);
                index.add(&word).unwrap();
            })
        });
    }
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    for &n in &[10usize, 100, 500] {
        let index = populated(n);
        let haystack = "the quick brown fox jumps over the lazy dog".repeat(8);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| index.find(&haystack).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add, bench_find);
criterion_main!(benches);
