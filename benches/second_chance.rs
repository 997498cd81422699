//! Benchmarks for SecondChanceCache.
//!
//! Run with: `cargo bench --bench second_chance`

use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};

use clockbits::policy::second_chance::SecondChanceCache;
use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// Insert + Get benchmarks (mixed operations)
// ============================================================================

fn bench_insert_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("second_chance");
    let ops_per_iter = 1024u64 * 2;
    group.throughput(Throughput::Elements(ops_per_iter));

    group.bench_function("insert_get", |b| {
        b.iter_batched(
            || {
                let cache = SecondChanceCache::new(1024);
                for i in 0..1024u64 {
                    cache.insert(i, i);
                }
                cache
            },
            |cache| {
                for i in 0..1024u64 {
                    cache.insert(std::hint::black_box(i + 10_000), i);
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

// ============================================================================
// Eviction churn benchmarks (continuous eviction pressure)
// ============================================================================

fn bench_eviction_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("second_chance");
    group.throughput(Throughput::Elements(4096));

    group.bench_function("eviction_churn", |b| {
        b.iter_batched(
            || {
                let cache = SecondChanceCache::new(1024);
                for i in 0..1024u64 {
                    cache.insert(i, i);
                }
                cache
            },
            |cache| {
                for i in 0..4096u64 {
                    cache.insert(std::hint::black_box(10_000 + i), i);
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

// ============================================================================
// Get hit / contains (pure read performance)
// ============================================================================

fn bench_get_hit_ns(c: &mut Criterion) {
    c.bench_function("second_chance_get_hit_ns", |b| {
        b.iter_custom(|iters| {
            let capacity = 16_384u64;
            let cache = SecondChanceCache::new(capacity as usize);
            for i in 0..capacity {
                cache.insert(i, i);
            }
            let start = Instant::now();
            for i in 0..iters {
                let _ = std::hint::black_box(cache.get(&(i % capacity)));
            }
            start.elapsed()
        })
    });

    c.bench_function("second_chance_contains_ns", |b| {
        b.iter_custom(|iters| {
            let capacity = 16_384u64;
            let cache = SecondChanceCache::new(capacity as usize);
            for i in 0..capacity {
                cache.insert(i, i);
            }
            let start = Instant::now();
            for i in 0..iters {
                let _ = std::hint::black_box(cache.contains(&(i % capacity)));
            }
            start.elapsed()
        })
    });
}

// ============================================================================
// Concurrent readers (shared lock + atomic bit clears)
// ============================================================================

fn bench_concurrent_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("second_chance_concurrent");

    for threads in [1usize, 2, 4, 8] {
        let per_thread = 10_000u64;
        group.throughput(Throughput::Elements(per_thread * threads as u64));
        group.bench_function(format!("get_{threads}_threads"), |b| {
            let capacity = 4096u64;
            let cache = Arc::new(SecondChanceCache::new(capacity as usize));
            for i in 0..capacity {
                cache.insert(i, i);
            }
            b.iter_custom(|iters| {
                let mut total = Duration::default();
                for _ in 0..iters {
                    let barrier = Arc::new(Barrier::new(threads));
                    let handles: Vec<_> = (0..threads)
                        .map(|tid| {
                            let cache = cache.clone();
                            let barrier = barrier.clone();
                            thread::spawn(move || {
                                let mut rng = SmallRng::seed_from_u64(tid as u64);
                                barrier.wait();
                                let start = Instant::now();
                                for _ in 0..per_thread {
                                    let key = rng.random::<u64>() % capacity;
                                    let _ = std::hint::black_box(cache.get(&key));
                                }
                                start.elapsed()
                            })
                        })
                        .collect();
                    total += handles
                        .into_iter()
                        .map(|h| h.join().unwrap())
                        .max()
                        .unwrap_or_default();
                }
                total
            })
        });
    }

    group.finish();
}

// ============================================================================
// Hit rate under skewed workload
// ============================================================================

fn bench_hotset_hit_rate(c: &mut Criterion) {
    let mut group = c.benchmark_group("second_chance_workload");
    let operations = 200_000usize;
    group.throughput(Throughput::Elements(operations as u64));

    group.bench_function("hotset_90_10", |b| {
        b.iter_custom(|iters| {
            let mut total = Duration::default();
            for _ in 0..iters {
                let cache = SecondChanceCache::new(4096);
                let mut rng = SmallRng::seed_from_u64(42);
                let universe = 16_384u64;
                let hot = universe / 10;
                let mut hits = 0usize;
                let start = Instant::now();
                for _ in 0..operations {
                    let key = if rng.random::<f64>() < 0.9 {
                        rng.random::<u64>() % hot
                    } else {
                        hot + rng.random::<u64>() % (universe - hot)
                    };
                    if cache.get(&key).is_some() {
                        hits += 1;
                    } else {
                        cache.insert(key, key);
                    }
                }
                let _ = std::hint::black_box(hits as f64 / operations as f64);
                total += start.elapsed();
            }
            total
        })
    });

    group.finish();
}

criterion_group!(end_to_end, bench_insert_get, bench_eviction_churn);
criterion_group!(micro_ops, bench_get_hit_ns);
criterion_group!(concurrency, bench_concurrent_get);
criterion_group!(workloads, bench_hotset_hit_rate);
criterion_main!(end_to_end, micro_ops, concurrency, workloads);
