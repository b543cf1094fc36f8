//! Performance measurement for end-to-end solves of the classic layout

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use huarong::io::puzzle::parse_board;
use huarong::search::{SearchContext, astar, dfs};
use std::hint::black_box;

const CLASSIC: &str = "\
^11^
v11v
^<>^
v22v
2..2
";

fn bench_solvers(c: &mut Criterion) {
    let Ok(board) = parse_board(CLASSIC) else {
        return;
    };

    let mut group = c.benchmark_group("solve_classic");

    group.bench_function("astar", |b| {
        b.iter(|| {
            let mut ctx = SearchContext::new();
            black_box(astar::solve(black_box(&board), &mut ctx))
        });
    });

    group.bench_function("dfs", |b| {
        b.iter(|| {
            let mut ctx = SearchContext::new();
            black_box(dfs::solve(black_box(&board), &mut ctx))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
