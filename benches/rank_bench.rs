//! Benchmarks for the ranking pipeline over realistic batch sizes.
//!
//! Simulates what a peer search actually returns:
//! - small:  ~25 results   (obscure track)
//! - medium: ~250 results  (popular track)
//! - large:  ~2500 results (very popular track, wide search)
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cratedig::{rank, Candidate, RankingPolicy, Target};

/// Batch size configurations matching real-world searches.
struct BatchSize {
    name: &'static str,
    results: usize,
}

const BATCH_SIZES: &[BatchSize] = &[
    BatchSize {
        name: "small",
        results: 25,
    },
    BatchSize {
        name: "medium",
        results: 250,
    },
    BatchSize {
        name: "large",
        results: 2500,
    },
];

fn make_target() -> Target {
    Target {
        title: "Strobe".to_string(),
        artist: "deadmau5".to_string(),
        length_seconds: Some(634),
        bpm: Some(128.0),
    }
}

/// Deterministic pseudo-varied batch: cycles through formats, bitrates,
/// availability, and filename clutter so every pipeline branch gets hit.
fn make_batch(n: usize) -> Vec<Candidate> {
    let formats = ["mp3", "flac", "ogg", "m4a"];
    let bitrates = [320, 192, 256, 128, 0, 500];
    let clutter = ["", " (Extended Mix)", " [320kbps CBR]", " (Club Edit) [2009 Vinyl Rip]"];

    (0..n)
        .map(|i| {
            let format = formats[i % formats.len()];
            Candidate {
                source_id: format!("peer-{i}"),
                filename: format!("deadmau5 - Strobe{}.{format}", clutter[i % clutter.len()]),
                format: format.to_string(),
                bitrate_kbps: bitrates[i % bitrates.len()],
                length_seconds: if i % 7 == 0 { None } else { Some(620 + (i as u32 % 20)) },
                has_free_capacity: i % 3 != 0,
                queue_depth: (i as u32 * 13) % 600,
                bpm: if i % 2 == 0 { Some(128.0 + (i % 10) as f64) } else { None },
                musical_key: if i % 5 == 0 { Some("8A".to_string()) } else { None },
            }
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let target = make_target();

    for policy in [
        ("quality_first", RankingPolicy::quality_first()),
        ("dj_ready", RankingPolicy::dj_ready()),
    ] {
        let mut group = c.benchmark_group(format!("rank/{}", policy.0));
        for size in BATCH_SIZES {
            let batch = make_batch(size.results);
            group.throughput(Throughput::Elements(size.results as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(size.name),
                &batch,
                |b, batch| {
                    b.iter(|| {
                        rank(
                            black_box(&target),
                            black_box(batch.clone()),
                            black_box(&policy.1),
                        )
                        .unwrap()
                    });
                },
            );
        }
        group.finish();
    }
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
