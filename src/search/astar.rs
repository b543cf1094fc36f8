//! Best-first search driver
//!
//! A binary min-heap over f = depth + estimate, with goal testing on pop
//! rather than on generation. Equal-f entries resolve
//! first-inserted-first-popped through a monotone sequence number, so
//! repeated runs on identical input return identical paths.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::search::context::{Exhaustion, SearchContext, SearchOutcome};
use crate::search::heuristic::estimate;
use crate::search::movegen::successors;
use crate::search::state::NodeId;
use crate::spatial::Board;

/// Frontier entry ordered for a min-heap on (priority, sequence)
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    priority: u32,
    sequence: u64,
    id: NodeId,
}

impl Ord for FrontierEntry {
    // BinaryHeap pops the maximum; invert both keys so the lowest f wins
    // and, on ties, the earliest insertion.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Run a best-first search from `initial`
///
/// The estimate is non-admissible (see
/// [`crate::search::heuristic::LINEAR_CONFLICT_WEIGHT`]), so the returned
/// path is not guaranteed minimal. Returns `NoSolution` when the frontier
/// empties or a limit carried by `ctx` triggers.
pub fn solve(initial: &Board, ctx: &mut SearchContext<'_>) -> SearchOutcome {
    let mut frontier = BinaryHeap::new();
    let mut sequence: u64 = 0;

    let root_priority = estimate(initial);
    let root = ctx.admit_root(initial.clone(), root_priority);
    frontier.push(FrontierEntry {
        priority: root_priority,
        sequence,
        id: root,
    });

    while let Some(entry) = frontier.pop() {
        if ctx.budget_exhausted() {
            return SearchOutcome::NoSolution(Exhaustion::BudgetExceeded);
        }
        let Some((board, depth)) = ctx.node_snapshot(entry.id) else {
            continue;
        };
        if board.is_solved() {
            return SearchOutcome::Solved(ctx.solution(entry.id));
        }
        ctx.note_expansion(frontier.len());

        for next in successors(&board) {
            let g = depth + 1;
            let priority = g + estimate(&next);
            if let Some(child) = ctx.admit(next, g, priority, entry.id) {
                sequence += 1;
                frontier.push(FrontierEntry {
                    priority,
                    sequence,
                    id: child,
                });
            }
        }
    }

    SearchOutcome::NoSolution(Exhaustion::FrontierEmptied)
}
