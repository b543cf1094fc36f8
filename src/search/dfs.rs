//! Depth-first search driver
//!
//! A LIFO stack over the shared context: pop, goal-test, expand. The first
//! goal state encountered wins; stack order gives no minimal-depth
//! guarantee, and the visited set prevents any re-expansion for the life of
//! the run.

use crate::search::context::{Exhaustion, SearchContext, SearchOutcome};
use crate::search::movegen::successors;
use crate::spatial::Board;

/// Run a depth-first search from `initial`
///
/// Returns `NoSolution` when the stack empties without reaching the goal,
/// or when a limit carried by `ctx` triggers.
pub fn solve(initial: &Board, ctx: &mut SearchContext<'_>) -> SearchOutcome {
    let root = ctx.admit_root(initial.clone(), 0);
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        if ctx.budget_exhausted() {
            return SearchOutcome::NoSolution(Exhaustion::BudgetExceeded);
        }
        let Some((board, depth)) = ctx.node_snapshot(id) else {
            continue;
        };
        if board.is_solved() {
            return SearchOutcome::Solved(ctx.solution(id));
        }
        ctx.note_expansion(stack.len());

        for next in successors(&board) {
            if let Some(child) = ctx.admit(next, depth + 1, depth + 1, id) {
                stack.push(child);
            }
        }
    }

    SearchOutcome::NoSolution(Exhaustion::FrontierEmptied)
}
