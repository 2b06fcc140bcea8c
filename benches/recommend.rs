use aprender_recommend::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn generate_movie_catalog(n: usize) -> Vec<Item> {
    let genres = [
        "action", "comedy", "drama", "thriller", "horror", "romance", "scifi", "fantasy",
        "mystery", "western",
    ];
    let adjectives = [
        "epic",
        "thrilling",
        "emotional",
        "intense",
        "hilarious",
        "dark",
        "heartwarming",
        "suspenseful",
        "mysterious",
        "explosive",
    ];
    let nouns = [
        "story",
        "journey",
        "adventure",
        "tale",
        "saga",
        "quest",
        "mission",
        "odyssey",
        "expedition",
        "voyage",
    ];

    (0..n)
        .map(|i| {
            let genre = genres[i % genres.len()];
            let adj = adjectives[(i / 10) % adjectives.len()];
            let noun = nouns[(i / 100) % nouns.len()];
            Item::with_description(
                format!("movie_{i}"),
                format!("{adj} {genre} {noun} about heroes and villains"),
            )
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend_build");
    group.sample_size(10);

    for size in [100, 500, 2_000].iter() {
        let catalog = generate_movie_catalog(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| IndexedCorpus::build(black_box(catalog.clone())).expect("should succeed"));
        });
    }

    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend_query");

    for size in [100, 500, 2_000].iter() {
        let corpus =
            IndexedCorpus::build(generate_movie_catalog(*size)).expect("should succeed");

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                recommend(&corpus, black_box("movie_0"), black_box(DEFAULT_TOP_K))
                    .expect("should succeed")
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_recommend);
criterion_main!(benches);
