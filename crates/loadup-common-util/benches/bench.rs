use core::hint::black_box;
use core::ops::Range;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use loadup_common_util::uniqueid::{
    DisabledHost, RandSource, ThreadRandom, TimeSource, UniqueId, WallClock,
};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};

struct FixedMockTime {
    millis: u64,
}

impl TimeSource<u64> for FixedMockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

struct FixedMockRand;

impl RandSource<u32> for FixedMockRand {
    fn rand_in(&self, range: Range<u32>) -> u32 {
        range.start
    }
}

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

/// Benchmarks one generator producing `TOTAL_IDS` values on a single thread.
fn bench_sequential<T, R, O>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> UniqueId<T, R>,
    next: impl Fn(&UniqueId<T, R>) -> O,
) where
    T: TimeSource<u64>,
    R: RandSource<u32>,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{}", TOTAL_IDS), |b| {
        b.iter_custom(|iters| {
            let generator = generator_factory();
            let start = Instant::now();

            for _ in 0..iters {
                for _ in 0..TOTAL_IDS {
                    black_box(next(&generator));
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks a generator shared across threads contending on the timestamp
/// lock.
fn bench_contended<T, R>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> UniqueId<T, R>,
) where
    T: TimeSource<u64> + Send + Sync,
    R: RandSource<u32> + Send + Sync,
{
    let mut group = c.benchmark_group(group_name);

    for thread_count in [1, 2, 4, 8, 16] {
        let ids_per_thread = TOTAL_IDS / thread_count;

        group.throughput(Throughput::Elements(TOTAL_IDS as u64));
        group.bench_function(
            format!("elems/{}/threads/{}", TOTAL_IDS, thread_count),
            |b| {
                b.iter_custom(|iters| {
                    let start = Instant::now();

                    for _ in 0..iters {
                        let generator = Arc::new(generator_factory());
                        let barrier = Arc::new(Barrier::new(thread_count + 1));
                        scope(|s| {
                            for _ in 0..thread_count {
                                let generator = Arc::clone(&generator);
                                let barrier = Arc::clone(&barrier);
                                s.spawn(move || {
                                    barrier.wait();
                                    for _ in 0..ids_per_thread {
                                        black_box(generator.next_id());
                                    }
                                });
                            }
                            barrier.wait();
                        });
                    }

                    start.elapsed()
                });
            },
        );
    }

    group.finish();
}

fn mock_generator() -> UniqueId<FixedMockTime, FixedMockRand> {
    UniqueId::builder()
        .clock(FixedMockTime { millis: 1 })
        .rng(FixedMockRand)
        .host_resolver(DisabledHost)
        .build()
}

fn wall_generator() -> UniqueId<WallClock, ThreadRandom> {
    UniqueId::builder().host_resolver(DisabledHost).build()
}

fn benchmark_mock_timestamp(c: &mut Criterion) {
    bench_sequential(c, "mock/sequential/timestamp", mock_generator, |g| {
        g.next_timestamp()
    });
}

fn benchmark_mock_id(c: &mut Criterion) {
    bench_sequential(c, "mock/sequential/id", mock_generator, UniqueId::next_id);
}

fn benchmark_wall_id(c: &mut Criterion) {
    bench_sequential(c, "wall/sequential/id", wall_generator, UniqueId::next_id);
}

fn benchmark_wall_id_hash(c: &mut Criterion) {
    bench_sequential(
        c,
        "wall/sequential/id_hash",
        wall_generator,
        UniqueId::next_id_hash,
    );
}

fn benchmark_mock_contended(c: &mut Criterion) {
    bench_contended(c, "mock/contended/id", mock_generator);
}

fn benchmark_wall_contended(c: &mut Criterion) {
    bench_contended(c, "wall/contended/id", wall_generator);
}

criterion_group!(
    benches,
    // Mock clock
    benchmark_mock_timestamp,
    benchmark_mock_id,
    benchmark_mock_contended,
    // Wall clock
    benchmark_wall_id,
    benchmark_wall_id_hash,
    benchmark_wall_contended,
);
criterion_main!(benches);
