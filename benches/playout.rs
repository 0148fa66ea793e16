//! Benchmarks for the rollout hot path: cloning states and playing games out.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use duel_engine::core::{GameRng, GameState, RulesConfig};
use duel_engine::rules::{new_game, DuelRules, RulesEngine};

fn mid_game(seed: u64) -> GameState {
    let rules = DuelRules;
    let mut rng = GameRng::new(seed);
    let mut state = new_game(RulesConfig::default(), &mut rng).unwrap();
    for _ in 0..30 {
        let actions = rules.legal_actions(&state);
        if actions.is_empty() {
            break;
        }
        let choice = rng.gen_range_usize(0..actions.len());
        state = rules.apply_action(&state, &actions[choice], &mut rng).unwrap();
    }
    state
}

fn bench_state_clone(c: &mut Criterion) {
    let state = mid_game(1);
    c.bench_function("state_clone", |b| b.iter(|| black_box(&state).clone()));
}

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game", |b| {
        let mut rng = GameRng::new(2);
        b.iter(|| new_game(black_box(RulesConfig::default()), &mut rng).unwrap());
    });
}

fn bench_random_playout(c: &mut Criterion) {
    let rules = DuelRules;
    let start = new_game(RulesConfig::default(), &mut GameRng::new(3)).unwrap();

    c.bench_function("random_playout", |b| {
        let mut rng = GameRng::new(4);
        b.iter(|| {
            let end = rules.random_playout(black_box(&start), &mut rng).unwrap();
            black_box(end)
        });
    });
}

fn bench_legal_actions(c: &mut Criterion) {
    let rules = DuelRules;
    let state = mid_game(5);
    c.bench_function("legal_actions", |b| b.iter(|| rules.legal_actions(black_box(&state))));
}

criterion_group!(
    benches,
    bench_state_clone,
    bench_new_game,
    bench_random_playout,
    bench_legal_actions
);
criterion_main!(benches);
