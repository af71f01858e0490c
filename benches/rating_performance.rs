//! Performance benchmarks for rating calculations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glo_rating::{BatchRatingData, GloCalculator, SolverOptions, StreamRatingData};

fn eighteen_holes() -> Vec<f64> {
    (0..18).map(|i| 1350.0 + (i as f64 * 17.0)).collect()
}

fn bench_performance_rating(c: &mut Criterion) {
    let calculator = GloCalculator::default();
    let holes = eighteen_holes();
    let strokes: Vec<f64> = (0..18).map(|i| ((i % 3) as f64) - 1.0).collect();

    c.bench_function("performance_rating_18_holes", |b| {
        b.iter(|| {
            black_box(calculator.round_performance_rating(
                black_box(&holes),
                black_box(&strokes),
                &SolverOptions::default(),
            ))
        })
    });

    let fine = SolverOptions::default().with_tolerance(1e-6);
    c.bench_function("performance_rating_18_holes_fine_tolerance", |b| {
        b.iter(|| {
            black_box(calculator.round_performance_rating(
                black_box(&holes),
                black_box(&strokes),
                &fine,
            ))
        })
    });
}

fn bench_stream_update(c: &mut Criterion) {
    let calculator = GloCalculator::default();
    let data = StreamRatingData {
        player_rating: 1480.0,
        hole_rating: 1300.0,
        performance_rating: 1300.0,
        strokes: 1.0,
    };

    c.bench_function("stream_update", |b| {
        b.iter(|| black_box(calculator.stream_update(black_box(&data))))
    });
}

fn bench_batch_update(c: &mut Criterion) {
    let calculator = GloCalculator::default();
    let data = BatchRatingData {
        player_rating: 1500.0,
        hole_ratings: eighteen_holes(),
        performance_ratings: vec![1520.0; 18],
        strokes: (0..18).map(|i| ((i % 3) as f64) - 1.0).collect(),
    };

    c.bench_function("batch_update_18_rounds", |b| {
        b.iter(|| black_box(calculator.batch_update(black_box(&data))))
    });
}

criterion_group!(
    benches,
    bench_performance_rating,
    bench_stream_update,
    bench_batch_update
);
criterion_main!(benches);
