use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use slot_machine::{
    Board, BoardGenerator, Difficulty, GameSession, Identity, PlayerAccount,
    game::{evaluate, lines},
};

/// Benchmark board generation for each fixed tier
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for difficulty in Difficulty::ALL {
        let mut generator = BoardGenerator::seeded(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(difficulty),
            difficulty.tier(),
            |b, tier| b.iter(|| generator.generate(tier)),
        );
    }

    group.finish();
}

/// Benchmark line extraction on a 5x5 board
fn bench_lines(c: &mut Criterion) {
    let board = BoardGenerator::seeded(7).generate(Difficulty::Hard.tier());

    c.bench_function("lines_5x5", |b| {
        b.iter(|| lines(black_box(&board)));
    });
}

/// Benchmark evaluation of a winning, a bonus and a losing board
fn bench_evaluate(c: &mut Criterion) {
    let boards: Vec<(&str, Board)> = vec![
        ("win", "* 7 7 / 2 5 9 / K 4 A".parse().unwrap()),
        ("bonus", "A 2 3 / 9 9 5 / J 4 Q".parse().unwrap()),
        ("loss", "Q K A / 5 5 9 / 2 7 J".parse().unwrap()),
    ];

    let mut group = c.benchmark_group("evaluate");
    for (name, board) in &boards {
        group.bench_with_input(BenchmarkId::from_parameter(name), board, |b, board| {
            b.iter(|| evaluate(black_box(board)));
        });
    }
    group.finish();
}

/// Benchmark a full round including the account updates
fn bench_play_round(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let birth = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
    let tier = Difficulty::Medium.tier();

    c.bench_function("play_round_medium", |b| {
        b.iter_batched(
            || {
                (
                    GameSession::seeded(1),
                    PlayerAccount::open(Identity::new("b@example.com", "b"), birth, 1_000, today),
                )
            },
            |(mut session, mut account)| session.play(&mut account, tier.min_wager, tier),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(board, bench_generate, bench_lines, bench_evaluate);

criterion_group!(session, bench_play_round);

criterion_main!(board, session);
