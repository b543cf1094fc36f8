//! Goal-distance estimation for the best-first driver
//!
//! The estimate combines the goal piece's Manhattan distance to the target
//! corner with a doubled linear-conflict penalty. The penalty makes the
//! estimate non-admissible: the best-first driver trades guaranteed path
//! optimality for a smaller explored state space. That trade is policy, and
//! the weight below is the tunable.

use crate::spatial::Board;
use crate::spatial::board::GOAL_TARGET;
use crate::spatial::piece::{GridPos, PieceKind};

/// Multiplier applied to the linear-conflict count
///
/// No admissibility proof exists for any value above zero; path optimality
/// is explicitly waived while this is non-zero.
pub const LINEAR_CONFLICT_WEIGHT: u32 = 2;

/// Heuristic value of a board: Manhattan distance plus weighted conflicts
///
/// Zero exactly when the goal piece's corner sits on the target corner;
/// with no travel left there are no travel axes to obstruct.
pub fn estimate(board: &Board) -> u32 {
    board.goal_distance() + LINEAR_CONFLICT_WEIGHT * linear_conflict(board)
}

/// Occupied cells obstructing the goal piece's remaining travel axes
///
/// For each axis the piece still must travel, counts the occupied cells
/// strictly between its current footprint and its target footprint, within
/// the rows or columns the footprint sweeps. Cells are counted once per
/// axis, so a board may contribute on both.
pub fn linear_conflict(board: &Board) -> u32 {
    let origin = board.goal_origin();
    let (width, height) = PieceKind::Goal.size();
    let mut blocked = 0;

    let (row_start, row_end) = if origin.y < GOAL_TARGET.y {
        (origin.y + height, GOAL_TARGET.y)
    } else {
        (GOAL_TARGET.y + height, origin.y)
    };
    for y in row_start..row_end {
        for x in origin.x..origin.x + width {
            if board
                .cell_at(GridPos::new(x, y))
                .is_some_and(|cell| !cell.is_empty())
            {
                blocked += 1;
            }
        }
    }

    let (col_start, col_end) = if origin.x < GOAL_TARGET.x {
        (origin.x + width, GOAL_TARGET.x)
    } else {
        (GOAL_TARGET.x + width, origin.x)
    };
    for x in col_start..col_end {
        for y in origin.y..origin.y + height {
            if board
                .cell_at(GridPos::new(x, y))
                .is_some_and(|cell| !cell.is_empty())
            {
                blocked += 1;
            }
        }
    }

    blocked
}
