// Criterion benchmarks for profile matching

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use profile_match::core::{calculate_match_score, Matcher};
use profile_match::models::{ScoringWeights, User};

const INTERESTS: [&str; 12] = [
    "reading", "traveling", "swimming", "yoga", "hiking", "cooking",
    "chess", "music", "cycling", "painting", "gaming", "running",
];

fn create_user(id: usize) -> User {
    User {
        id: id as i64,
        name: format!("User {}", id),
        age: 20 + (id % 30) as i32,
        gender: if id % 2 == 0 { "female" } else { "male" }.to_string(),
        email: format!("user{}@example.com", id),
        city: format!("City {}", id % 7),
        interests: (0..4)
            .map(|k| INTERESTS[(id * 5 + k * 3) % INTERESTS.len()].to_string())
            .collect(),
    }
}

fn bench_match_score(c: &mut Criterion) {
    let target = create_user(0);
    let candidate = create_user(1);
    let weights = ScoringWeights::default();

    c.bench_function("match_score", |b| {
        b.iter(|| calculate_match_score(black_box(&target), black_box(&candidate), &weights));
    });
}

fn bench_find_matches(c: &mut Criterion) {
    let matcher = Matcher::with_default_policy();
    let target = create_user(0);

    let mut group = c.benchmark_group("find_matches");
    for size in [100usize, 1_000, 10_000] {
        let candidates: Vec<User> = (0..size).map(create_user).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &candidates, |b, candidates| {
            b.iter(|| matcher.find_matches(black_box(&target), candidates.clone()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_match_score, bench_find_matches);
criterion_main!(benches);
