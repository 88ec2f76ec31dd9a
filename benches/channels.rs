use chrono::{NaiveDate, Utc};
use colorlog::fmt::{CallSite, Flags, render_line};
use colorlog::{Channel, Severity};
use std::hint::black_box;
use std::io;

use criterion::{Criterion, criterion_group, criterion_main};

fn bench_channel_printf(c: &mut Criterion) {
    let mut group = c.benchmark_group("Channel::printf");

    for severity in Severity::all() {
        let channel = Channel::builder(severity).writer(io::sink()).build();
        let mut i = 0u64;
        group.bench_function(severity.as_str(), |b| {
            b.iter(|| {
                i += 1;
                channel
                    .printf(format_args!("benchmark message {}", black_box(i)))
                    .expect("write failed");
            });
        });
    }

    group.finish();
}

fn bench_render_line(c: &mut Criterion) {
    let prefix = Severity::Error.prefix();
    let now = NaiveDate::from_ymd_opt(2025, 8, 7)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .map_or_else(|| Utc::now().fixed_offset(), |t| t.and_utc().fixed_offset());
    let site = CallSite::new("src/server/listener.rs", 120);
    let mut buf = Vec::with_capacity(128);

    c.bench_function("render_line", |b| {
        b.iter(|| {
            buf.clear();
            render_line(
                &mut buf,
                black_box(&prefix),
                Flags::STD | Flags::SHORT_FILE,
                now,
                Some(site),
                black_box(b"connection refused"),
            );
        });
    });
}

criterion_group!(benches, bench_channel_printf, bench_render_line);
criterion_main!(benches);
