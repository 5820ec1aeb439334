use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memory_match::core::{BoardConfig, BoardController, SimpleRng, RandomSource};
use memory_match::types::RESOLVE_DELAY_MS;

fn bench_deal(c: &mut Criterion) {
    let mut board = BoardController::with_seed(BoardConfig::new(10, 10), 12345);

    c.bench_function("deal_10x10", |b| {
        b.iter(|| {
            board.init_game(black_box(10), black_box(10));
        })
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let mut values: Vec<u32> = (0..100).collect();

    c.bench_function("shuffle_100", |b| {
        b.iter(|| {
            rng.shuffle(black_box(&mut values));
        })
    });
}

fn bench_turn(c: &mut Criterion) {
    let mut board = BoardController::with_seed(BoardConfig::new(10, 10), 12345);

    c.bench_function("mismatched_turn", |b| {
        b.iter(|| {
            let first = board.tiles()[0];
            let second = board
                .tiles()
                .iter()
                .find(|t| t.value != first.value)
                .map(|t| t.id)
                .unwrap_or(1);
            board.select_tile(black_box(first.id));
            board.select_tile(black_box(second));
            board.tick(RESOLVE_DELAY_MS);
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let board = BoardController::with_seed(BoardConfig::new(10, 10), 12345);
    let mut snap = board.snapshot();

    c.bench_function("snapshot_into_10x10", |b| {
        b.iter(|| {
            board.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(benches, bench_deal, bench_shuffle, bench_turn, bench_snapshot);
criterion_main!(benches);
