//! # Observable Dispatch Benchmarks
//!
//! | Operation | Expectation |
//! |-----------|-------------|
//! | `fire` | Linear in subscriber count, one snapshot clone per call |
//! | `on` | Amortized O(1) append |
//! | `off` | Linear scan of the event's callbacks |
//! | `get_events` | Linear in total registrations |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use observable::{args, event_bus, Args, Callback, EventBus, Observable};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

type Cb = Callback<EventBus, Args>;

fn counting_callbacks(count: usize, hits: &Arc<AtomicU64>) -> Vec<Cb> {
    (0..count)
        .map(|_| {
            let hits = Arc::clone(hits);
            Callback::new(move |_, _| {
                hits.fetch_add(1, Ordering::Relaxed);
            })
        })
        .collect()
}

// ============================================================================
// Publish
// ============================================================================

fn bench_fire(c: &mut Criterion) {
    let mut group = c.benchmark_group("fire");
    group.measurement_time(Duration::from_secs(5));

    for size in [1usize, 10, 100, 1_000] {
        let bus = event_bus();
        let hits = Arc::new(AtomicU64::new(0));
        bus.on("tick", counting_callbacks(size, &hits));

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("subscribers", size), &bus, |b, bus| {
            b.iter(|| black_box(bus.fire("tick", args![1, "two"]).is_ok()))
        });
    }

    let bus = event_bus();
    group.bench_function("unregistered_event", |b| {
        b.iter(|| black_box(bus.fire("nobody-listens", args![]).is_ok()))
    });

    group.finish();
}

// ============================================================================
// Subscribe / Unsubscribe
// ============================================================================

fn bench_subscribe_unsubscribe(c: &mut Criterion) {
    let mut group = c.benchmark_group("subscribe");
    let hits = Arc::new(AtomicU64::new(0));

    group.bench_function("on_then_off", |b| {
        let bus = event_bus();
        let cb = counting_callbacks(1, &hits).remove(0);
        b.iter(|| {
            bus.on("e", [cb.clone()]);
            bus.off("e", [cb.clone()]);
        })
    });

    for size in [10usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("off_from", size), &size, |b, &size| {
            let callbacks = counting_callbacks(size, &hits);
            let last = callbacks[size - 1].clone();
            b.iter_batched(
                || {
                    let bus = event_bus();
                    bus.on("e", callbacks.clone());
                    bus
                },
                |bus| {
                    bus.off("e", [last.clone()]);
                    black_box(bus.listener_count("e"))
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

// ============================================================================
// Inspect
// ============================================================================

fn bench_get_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_events");
    let hits = Arc::new(AtomicU64::new(0));

    for events in [1usize, 10, 100] {
        let bus = event_bus();
        for i in 0..events {
            bus.on(&format!("event-{i}"), counting_callbacks(5, &hits));
        }

        group.bench_with_input(BenchmarkId::new("events", events), &bus, |b, bus| {
            b.iter(|| black_box(bus.get_events().len()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fire,
    bench_subscribe_unsubscribe,
    bench_get_events,
);

criterion_main!(benches);
