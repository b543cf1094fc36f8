//! Sliding block puzzle solver for the classic 4x5 Hua Rong Dao layout
//!
//! The system models boards as immutable piece lists over a dense cell grid,
//! enumerates legal single-cell slides anchored on the empty cells, and
//! searches the resulting state space with either a depth-first or a
//! best-first driver, reconstructing the move sequence once the goal piece
//! reaches the exit corner.

#![forbid(unsafe_code)]

/// Input/output operations, command-line orchestration and error handling
pub mod io;
/// State-space search drivers, heuristics and supporting structures
pub mod search;
/// Board, piece and grid primitives
pub mod spatial;

pub use io::error::{Result, SolverError};
