// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notice queue.
//!
//! Measures the performance of:
//! - Enqueueing a burst of notices
//! - Playing a queue to completion on a simulated frame clock
//! - Draining requests posted through a `NoticeSender`

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use iced_notice::application::coordinator::CoordinatorSettings;
use iced_notice::domain::notice::{BannerMetrics, NoticeCategory, Size};
use iced_notice::ui::notices::NoticeCenter;
use std::hint::black_box;
use std::time::{Duration, Instant};

const BURST: usize = 256;
const FRAME: Duration = Duration::from_millis(16);

fn center() -> NoticeCenter {
    NoticeCenter::new(
        Size::new(390.0, 844.0),
        BannerMetrics::new(47.0, false),
        CoordinatorSettings::default(),
    )
}

/// Enqueue cost. Queued notices are not laid out until presented.
fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("notice_queue");

    group.bench_function("enqueue_burst", |b| {
        b.iter_batched(
            center,
            |mut center| {
                for index in 0..BURST {
                    center.enqueue_with(1.0, NoticeCategory::Info, format!("notice {index}"), None);
                }
                black_box(center.pending());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// A short queue played out frame by frame.
fn bench_run_to_completion(c: &mut Criterion) {
    let mut group = c.benchmark_group("notice_queue");

    group.bench_function("run_to_completion", |b| {
        b.iter_batched(
            || {
                let mut center = center();
                for category in NoticeCategory::ALL {
                    center.enqueue_with(
                        0.5,
                        category,
                        "A reasonably long notice message that wraps onto a second line",
                        None,
                    );
                }
                center
            },
            |mut center| {
                let start = Instant::now();
                let mut now = start;
                center.fire();
                while center.needs_frames() && now - start < Duration::from_secs(30) {
                    now += FRAME;
                    center.tick(now);
                }
                black_box(center.state());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Requests posted from outside, applied on one tick.
fn bench_drain_inbox(c: &mut Criterion) {
    let mut group = c.benchmark_group("notice_queue");

    group.bench_function("drain_inbox", |b| {
        b.iter_batched(
            || {
                let center = center();
                let sender = center.sender();
                for index in 0..BURST {
                    sender.enqueue_with(1.0, NoticeCategory::Warning, format!("posted {index}"), None);
                }
                center
            },
            |mut center| {
                center.tick(Instant::now());
                black_box(center.pending());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_enqueue,
    bench_run_to_completion,
    bench_drain_inbox
);
criterion_main!(benches);
