//! Legal single-slide successor enumeration
//!
//! Candidates are anchored on the empty cells: for each empty cell and each
//! direction, the piece adjacent in that direction is a candidate to slide
//! back towards the empty cell. Every newly occupied cell of a one-step
//! slide is adjacent to the moving piece, so each legal slide is discovered
//! from at least one of the cells it fills; the anchoring is therefore
//! equivalent to enumerating all pieces against all directions, at a bound
//! of empty-cells x four trial lookups per state.

use crate::spatial::Board;
use crate::spatial::piece::Direction;

/// All boards reachable from `board` by one legal slide
///
/// Candidates discovered from both empty cells (a wide piece filling two
/// cells at once) are deduplicated by (piece, direction). Each candidate is
/// validated by full board reconstruction in
/// [`Board::with_piece_moved`]; a candidate the rebuilt grid rejects is
/// dropped, keeping the recomputed overlap check authoritative over the
/// anchoring shortcut.
pub fn successors(board: &Board) -> Vec<Board> {
    let mut attempted: Vec<(usize, Direction)> = Vec::new();
    let mut boards = Vec::new();

    for &empty in board.empty_cells() {
        for direction in Direction::ALL {
            let neighbour = empty.offset(direction);
            let Some(index) = board.piece_index_at(neighbour) else {
                continue;
            };
            let slide = direction.opposite();
            if attempted.contains(&(index, slide)) {
                continue;
            }
            attempted.push((index, slide));
            if let Ok(next) = board.with_piece_moved(index, slide) {
                boards.push(next);
            }
        }
    }

    boards
}
