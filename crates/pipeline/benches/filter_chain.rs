//! Benchmarks for the filter chain
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic in-memory dataset so no data files are needed.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{Dataset, MovieRecord};
use pipeline::{FilterChain, QueryParams};

const GENRES: [&str; 5] = ["Comedy", "Drama", "Horror", "Comedy, Romance", "Sci-Fi"];
const COUNTRIES: [&str; 4] = ["USA", "France", "Italy, Spain", "Japan"];

fn synthetic_dataset(size: usize) -> Dataset {
    (0..size)
        .map(|i| {
            MovieRecord::new(
                GENRES[i % GENRES.len()],
                COUNTRIES[i % COUNTRIES.len()],
                (i % 100) as f64 / 10.0,
            )
            .with_field("film_title", format!("Movie {i}"))
        })
        .collect()
}

fn bench_filter_chain(c: &mut Criterion) {
    let dataset = synthetic_dataset(85_000);
    let chain = FilterChain::standard();

    let by_genre: QueryParams = [("genre", "comedy")].into_iter().collect();
    let by_vote: QueryParams = [("avg_vote", "7.5")].into_iter().collect();
    let fallback = QueryParams::new();

    c.bench_function("chain_genre", |b| {
        b.iter(|| black_box(chain.run(black_box(&by_genre), &dataset).unwrap().len()))
    });

    c.bench_function("chain_avg_vote", |b| {
        b.iter(|| black_box(chain.run(black_box(&by_vote), &dataset).unwrap().len()))
    });

    c.bench_function("chain_fallback", |b| {
        b.iter(|| black_box(chain.run(black_box(&fallback), &dataset).unwrap().len()))
    });
}

criterion_group!(benches, bench_filter_chain);
criterion_main!(benches);
