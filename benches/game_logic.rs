use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{Game, Grid, Piece};
use blockfall::types::{InputState, ShapeKind, COLUMNS};

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(|| ShapeKind::T, |_, _, _| {});

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(16), InputState::default());
        })
    });
}

fn bench_full_row_scan(c: &mut Criterion) {
    let mut grid = Grid::new();
    // Bottom four rows full, a few stragglers above.
    for y in 16..20 {
        for x in 0..COLUMNS {
            grid.set(x, y, Some(ShapeKind::I));
        }
    }
    grid.set(3, 10, Some(ShapeKind::O));

    c.bench_function("full_row_scan", |b| {
        b.iter(|| black_box(&grid).full_rows())
    });
}

fn bench_move_horizontal(c: &mut Criterion) {
    let grid = Grid::new();
    let mut piece = Piece::spawn(ShapeKind::T);
    for _ in 0..6 {
        piece.move_down(&grid);
    }

    c.bench_function("move_horizontal", |b| {
        b.iter(|| {
            piece.move_horizontal(&grid, black_box(1));
            piece.move_horizontal(&grid, black_box(-1));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let grid = Grid::new();
    let mut piece = Piece::spawn(ShapeKind::T);
    for _ in 0..6 {
        piece.move_down(&grid);
    }

    c.bench_function("rotate", |b| {
        b.iter(|| piece.rotate(black_box(&grid)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_full_row_scan,
    bench_move_horizontal,
    bench_rotate
);
criterion_main!(benches);
