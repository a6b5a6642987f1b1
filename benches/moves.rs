use criterion::{criterion_group, criterion_main, Criterion};
use rust_2048::{Direction, GameRng, Grid, GridConfig};
use std::hint::black_box;

fn corpus() -> Vec<Grid> {
    let mut grid = Grid::with_config(GridConfig::default(), GameRng::new(1337));
    let mut grids = vec![grid.clone()];
    for i in 0..24 {
        grid.make_move(Direction::ALL[i % Direction::ALL.len()]);
        grids.push(grid.clone());
    }
    grids
}

fn bench_moves(c: &mut Criterion) {
    let grids = corpus();
    for direction in Direction::ALL {
        c.bench_function(&format!("grid/move_{}", direction), |b| {
            b.iter(|| {
                let mut acc = 0u64;
                for grid in &grids {
                    let mut g = grid.clone();
                    g.make_move(direction);
                    acc += g.total_value();
                }
                black_box(acc)
            })
        });
    }
}

fn bench_snapshot(c: &mut Criterion) {
    let grid = Grid::with_seed(42);
    c.bench_function("grid/snapshot", |b| b.iter(|| black_box(grid.snapshot())));
}

criterion_group!(moves, bench_moves, bench_snapshot);
criterion_main!(moves);
