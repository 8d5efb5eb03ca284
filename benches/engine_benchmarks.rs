//! Benchmarks for move generation, make/unmake and the position cache.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{Color, Grid, Position};
use chess_rules::PositionCache;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    let mut startpos = Position::standard();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(Color::White, black_box(depth)))
        });
    }

    let mut kiwipete = Position::new(Grid::from_fen(KIWIPETE));
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(Color::White, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, placement) in [
        ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
        ("middlegame", MIDDLEGAME),
        ("kiwipete", KIWIPETE),
    ] {
        let mut position = Position::new(Grid::from_fen(placement));
        group.bench_function(BenchmarkId::new("pseudo_legal", name), |b| {
            b.iter(|| black_box(position.pseudo_legal_moves(Color::White)))
        });
        group.bench_function(BenchmarkId::new("legal", name), |b| {
            b.iter(|| black_box(position.legal_moves(Color::White)))
        });
    }

    group.finish();
}

fn bench_make_unmake(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_unmake");

    let mut position = Position::new(Grid::from_fen(KIWIPETE));
    let moves = position.pseudo_legal_moves(Color::White);
    group.bench_function("kiwipete_all_moves", |b| {
        b.iter(|| {
            for &mv in &moves {
                let info = position.make_move(black_box(mv));
                position.unmake_move(info);
            }
        })
    });

    let mut grid = Grid::from_fen(MIDDLEGAME);
    let position = Position::new(grid.clone());
    let (white, black) = (
        position.pieces(Color::White).to_vec(),
        position.pieces(Color::Black).to_vec(),
    );
    group.bench_function("recompute_protections", |b| {
        b.iter(|| grid.recompute_protections(black_box(&white), black_box(&black)))
    });

    group.finish();
}

fn bench_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache");

    let mut position = Position::new(Grid::from_fen(KIWIPETE));
    let grids: Vec<Grid> = position
        .legal_moves(Color::White)
        .into_iter()
        .map(|mv| {
            let info = position.make_move(mv);
            let grid = position.grid().snapshot();
            position.unmake_move(info);
            grid
        })
        .collect();

    group.bench_function("put", |b| {
        b.iter(|| {
            let mut cache = PositionCache::with_capacity(grids.len());
            for (score, grid) in grids.iter().enumerate() {
                cache.put(grid, score as i32);
            }
            cache
        })
    });

    let mut cache = PositionCache::new();
    for grid in &grids {
        cache.put(grid, 0);
    }
    group.bench_function("probe_hit", |b| {
        b.iter(|| grids.iter().filter_map(|grid| cache.probe(black_box(grid))).count())
    });
    group.bench_function("zobrist", |b| {
        b.iter(|| grids.iter().map(|grid| black_box(grid).zobrist()).fold(0, |a, k| a ^ k))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_make_unmake,
    bench_cache
);
criterion_main!(benches);
