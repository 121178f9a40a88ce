//! Snapshot cost benchmarks: cloning, advancing and voting on large states.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pairwise_vote::core::{Entry, TournamentState, VoterId};
use pairwise_vote::rules::{advance, cast_vote, seed_entries};

fn voting_state(entries: usize, voters: usize) -> TournamentState {
    let names = (0..entries).map(|i| Entry::new(format!("entry{i}")));
    let mut state = advance(&seed_entries(&TournamentState::new(), names)).unwrap();

    let Some(pair) = state.vote().map(|vote| vote.pair.clone()) else {
        return state;
    };
    for v in 0..voters {
        let voter = VoterId::new(format!("voter{v}"));
        state = cast_vote(&state, &pair[v % 2], &voter).unwrap();
    }
    state
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    for size in [16, 1_024, 65_536] {
        let state = voting_state(size, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &state, |b, state| {
            b.iter(|| black_box(state.clone()));
        });
    }
    group.finish();
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    for size in [16, 1_024, 65_536] {
        let state = voting_state(size, 101);
        group.bench_with_input(BenchmarkId::from_parameter(size), &state, |b, state| {
            b.iter(|| advance(black_box(state)).unwrap());
        });
    }
    group.finish();
}

fn bench_vote(c: &mut Criterion) {
    let state = voting_state(64, 10_000);
    let entry = state.vote().map(|vote| vote.pair[0].clone()).unwrap();
    let voter = VoterId::new("voter1");

    c.bench_function("cast_vote/10k_voters", |b| {
        b.iter(|| cast_vote(black_box(&state), &entry, &voter).unwrap());
    });
}

criterion_group!(benches, bench_clone, bench_advance, bench_vote);
criterion_main!(benches);
