//! Performance measurement for successor enumeration and single slides

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use huarong::io::puzzle::parse_board;
use huarong::search::movegen::successors;
use huarong::search::scramble::scramble;
use std::hint::black_box;

const CLASSIC: &str = "\
^11^
v11v
^<>^
v22v
2..2
";

fn bench_successors(c: &mut Criterion) {
    let Ok(board) = parse_board(CLASSIC) else {
        return;
    };

    let mut group = c.benchmark_group("movegen");

    group.bench_function("classic_opening", |b| {
        b.iter(|| black_box(successors(black_box(&board))));
    });

    // A mid-game position reached by a fixed walk, with more mobile pieces.
    let scrambled = scramble(&board, 40, 99);
    group.bench_function("scrambled_position", |b| {
        b.iter(|| black_box(successors(black_box(&scrambled))));
    });

    group.finish();
}

criterion_group!(benches, bench_successors);
criterion_main!(benches);
