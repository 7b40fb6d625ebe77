use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hotcache::LruCache;

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_1kb_resident", |b| {
        let mut cache = LruCache::new(1000);
        let data = vec![b'x'; 1024];

        // Fill the cache; every lookup below is a hit
        for key in 0..1000u64 {
            cache.put(key, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 1000)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_get_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_miss");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_1kb_absent", |b| {
        let mut cache = LruCache::new(1000);
        let data = vec![b'x'; 1024];

        for key in 0..1000u64 {
            cache.put(key, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            // Keys in this range were never inserted
            black_box(cache.get(&(1000 + counter % 1000)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_put_evicting(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_evict");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("put_1kb_full_cache", |b| {
        let mut cache = LruCache::new(1000);
        let data = vec![b'x'; 1024];

        for key in 0..1000u64 {
            cache.put(key, data.clone());
        }

        // Every further put is a fresh key, so every put evicts
        let mut next_key = 1000u64;
        b.iter(|| {
            cache.put(black_box(next_key), data.clone());
            next_key += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_read_50_write", |b| {
        let mut cache = LruCache::new(1000);
        let data = vec![b'x'; 1024];

        for key in 0..1000u64 {
            cache.put(key, data.clone());
        }

        let mut next_key = 1000u64;
        let mut counter = 0u64;
        b.iter(|| {
            if counter.is_multiple_of(2) {
                black_box(cache.get(&(counter % 1000)));
            } else {
                cache.put(black_box(next_key), data.clone());
                next_key += 1;
            }
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_get_hit,
    bench_get_miss,
    bench_put_evicting,
    bench_mixed_50_50
);
criterion_main!(benches);
