//! Board construction, validation and canonical identity
//!
//! A board is derived from an ordered piece list: a dense grid of per-cell
//! category tags, the coordinates of the unoccupied cells, and a canonical
//! hash over the row-major tag sequence. Every constructor revalidates the
//! full overlap and census invariants, including each board produced by a
//! slide, so the derived grid is always the ground truth for legality.

use bitvec::prelude::*;
use ndarray::Array2;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::Hasher;

use crate::spatial::piece::{Direction, GridPos, Piece, PieceKind};

/// Grid width in cells
pub const WIDTH: i32 = 4;
/// Grid height in cells
pub const HEIGHT: i32 = 5;
/// Total cell count
pub const CELL_COUNT: usize = 20;
/// Empty cells in a standard puzzle census
pub const STANDARD_EMPTY_CELLS: usize = 2;
/// Cell the goal piece's top-left corner must reach
pub const GOAL_TARGET: GridPos = GridPos::new(1, 3);

/// Per-cell occupancy tag
///
/// Horizontal and vertical pieces tag their two halves distinctly so the
/// tag grid alone determines the piece tiling; two boards are equivalent
/// exactly when their tag grids match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    /// Unoccupied cell
    Empty,
    /// Covered by the 2x2 goal piece
    Goal,
    /// Covered by a 1x1 piece
    Single,
    /// Left half of a horizontal piece
    HorizontalLeft,
    /// Right half of a horizontal piece
    HorizontalRight,
    /// Top half of a vertical piece
    VerticalTop,
    /// Bottom half of a vertical piece
    VerticalBottom,
}

impl Cell {
    /// Whether the cell is unoccupied
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Fixed-size occupancy bitset with one bit per grid cell, row-major
///
/// Provides O(1) collision testing while the grid is assembled from the
/// piece list.
#[derive(Clone, Debug, Default)]
pub struct OccupancyMask {
    bits: BitArr!(for CELL_COUNT, in u32),
}

impl OccupancyMask {
    /// Create a mask with every cell vacant
    pub const fn new() -> Self {
        Self {
            bits: BitArray::ZERO,
        }
    }

    /// Mark a cell occupied, reporting `false` if it already was
    pub fn occupy(&mut self, position: GridPos) -> bool {
        let index = position.cell_index();
        if index >= CELL_COUNT || self.bits.get(index).as_deref() == Some(&true) {
            return false;
        }
        self.bits.set(index, true);
        true
    }

    /// Test cell occupancy
    pub fn is_occupied(&self, position: GridPos) -> bool {
        self.bits.get(position.cell_index()).as_deref() == Some(&true)
    }

    /// Row-major coordinates of the vacant cells
    pub fn vacant(&self) -> Vec<GridPos> {
        self.bits
            .iter_zeros()
            .filter(|&index| index < CELL_COUNT)
            .map(|index| GridPos::new(index as i32 % WIDTH, index as i32 / WIDTH))
            .collect()
    }
}

/// Violation of a board structural invariant
///
/// Raised at construction time, before the offending board can enter a
/// frontier or visited set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidBoardError {
    /// A footprint extends beyond the grid
    OutOfBounds {
        /// The offending piece
        piece: Piece,
    },
    /// Two footprints claim the same cell
    Overlap {
        /// First doubly-claimed cell encountered
        position: GridPos,
    },
    /// The piece list does not contain exactly one goal piece
    GoalPieceCount {
        /// Number of goal pieces found
        found: usize,
    },
    /// The unoccupied-cell census does not match the expectation
    EmptyCellCount {
        /// Number of empty cells found
        found: usize,
        /// Number of empty cells required
        expected: usize,
    },
    /// A piece index outside the piece list
    UnknownPiece {
        /// The invalid index
        index: usize,
    },
}

impl fmt::Display for InvalidBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { piece } => {
                write!(
                    f,
                    "{:?} piece at ({}, {}) extends outside the {WIDTH}x{HEIGHT} grid",
                    piece.kind, piece.origin.x, piece.origin.y
                )
            }
            Self::Overlap { position } => {
                write!(
                    f,
                    "overlapping footprints at ({}, {})",
                    position.x, position.y
                )
            }
            Self::GoalPieceCount { found } => {
                write!(f, "expected exactly one goal piece, found {found}")
            }
            Self::EmptyCellCount { found, expected } => {
                write!(f, "expected {expected} empty cells, found {found}")
            }
            Self::UnknownPiece { index } => {
                write!(f, "piece index {index} is out of range")
            }
        }
    }
}

impl std::error::Error for InvalidBoardError {}

/// A validated placement of pieces on the 4x5 grid
///
/// Boards are immutable once constructed; a slide produces a new board via
/// [`Board::with_piece_moved`]. Equality and the canonical id are derived
/// from the tag grid, so piece-list ordering never affects identity.
#[derive(Debug, Clone)]
pub struct Board {
    pieces: Vec<Piece>,
    grid: Array2<Cell>,
    empty: Vec<GridPos>,
    goal_origin: GridPos,
    id: u64,
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for Board {}

impl Board {
    /// Build a board with the standard 18-occupied / 2-empty census
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoardError`] if a footprint leaves the grid, two
    /// footprints overlap, the goal-piece count is not one, or the empty
    /// cells do not number exactly [`STANDARD_EMPTY_CELLS`].
    pub fn new(pieces: Vec<Piece>) -> Result<Self, InvalidBoardError> {
        Self::from_pieces(pieces, Some(STANDARD_EMPTY_CELLS))
    }

    /// Build a board whose piece list need not fill the standard census
    ///
    /// Bounds, overlap and single-goal invariants still hold; any number of
    /// empty cells is accepted. Intended for reduced instances such as a
    /// lone goal piece on an open grid or a fully packed grid.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoardError`] for out-of-bounds footprints, overlaps
    /// or a goal-piece count other than one.
    pub fn sparse(pieces: Vec<Piece>) -> Result<Self, InvalidBoardError> {
        Self::from_pieces(pieces, None)
    }

    fn from_pieces(
        pieces: Vec<Piece>,
        expected_empty: Option<usize>,
    ) -> Result<Self, InvalidBoardError> {
        let mut grid = Array2::from_elem((HEIGHT as usize, WIDTH as usize), Cell::Empty);
        let mut mask = OccupancyMask::new();
        let mut goal_origin = GOAL_TARGET;
        let mut goal_count = 0;

        for piece in &pieces {
            if !piece.in_bounds() {
                return Err(InvalidBoardError::OutOfBounds { piece: *piece });
            }
            if piece.kind == PieceKind::Goal {
                goal_count += 1;
                goal_origin = piece.origin;
            }
            for position in piece.cells() {
                if !mask.occupy(position) {
                    return Err(InvalidBoardError::Overlap { position });
                }
                if let Some(slot) = grid.get_mut((position.y as usize, position.x as usize)) {
                    *slot = tag_for(piece, position);
                }
            }
        }

        if goal_count != 1 {
            return Err(InvalidBoardError::GoalPieceCount { found: goal_count });
        }

        let empty = mask.vacant();
        if let Some(expected) = expected_empty
            && empty.len() != expected
        {
            return Err(InvalidBoardError::EmptyCellCount {
                found: empty.len(),
                expected,
            });
        }

        let id = canonical_hash(&grid);
        Ok(Self {
            pieces,
            grid,
            empty,
            goal_origin,
            id,
        })
    }

    /// Build the board reached by sliding one piece a single cell
    ///
    /// The successor is validated by full grid reconstruction, which is the
    /// authoritative legality check: a slide onto an occupied cell surfaces
    /// as an overlap, one off the grid as an out-of-bounds footprint. The
    /// parent's empty-cell census is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoardError`] if `index` is out of range or the
    /// translated piece violates a board invariant.
    pub fn with_piece_moved(
        &self,
        index: usize,
        direction: Direction,
    ) -> Result<Self, InvalidBoardError> {
        let mut pieces = self.pieces.clone();
        let Some(piece) = pieces.get_mut(index) else {
            return Err(InvalidBoardError::UnknownPiece { index });
        };
        *piece = piece.translated(direction);
        Self::from_pieces(pieces, Some(self.empty.len()))
    }

    /// The ordered piece list the board was built from
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The tag at `position`, or `None` off the grid
    pub fn cell_at(&self, position: GridPos) -> Option<Cell> {
        if !position.in_bounds() {
            return None;
        }
        self.grid
            .get((position.y as usize, position.x as usize))
            .copied()
    }

    /// Index into [`Self::pieces`] of the piece covering `position`
    pub fn piece_index_at(&self, position: GridPos) -> Option<usize> {
        if !position.in_bounds() {
            return None;
        }
        self.pieces.iter().position(|piece| piece.contains(position))
    }

    /// Coordinates of the unoccupied cells, in row-major order
    pub fn empty_cells(&self) -> &[GridPos] {
        &self.empty
    }

    /// Canonical identity: a standard hash over the row-major tag sequence
    ///
    /// Hash equality is what the search layer trusts for deduplication; a
    /// 64-bit collision would misclassify a fresh board as already visited.
    pub const fn canonical_id(&self) -> u64 {
        self.id
    }

    /// The row-major tag serialization the canonical id is derived from
    pub fn signature(&self) -> [u8; CELL_COUNT] {
        let mut tags = [0_u8; CELL_COUNT];
        for (slot, cell) in tags.iter_mut().zip(self.grid.iter()) {
            *slot = *cell as u8;
        }
        tags
    }

    /// Top-left corner of the goal piece
    pub const fn goal_origin(&self) -> GridPos {
        self.goal_origin
    }

    /// Manhattan distance from the goal piece's corner to [`GOAL_TARGET`]
    pub const fn goal_distance(&self) -> u32 {
        (self.goal_origin.x - GOAL_TARGET.x).unsigned_abs()
            + (self.goal_origin.y - GOAL_TARGET.y).unsigned_abs()
    }

    /// Whether the goal piece has reached the target corner
    pub const fn is_solved(&self) -> bool {
        self.goal_distance() == 0
    }
}

const fn tag_for(piece: &Piece, position: GridPos) -> Cell {
    match piece.kind {
        PieceKind::Goal => Cell::Goal,
        PieceKind::Single => Cell::Single,
        PieceKind::Horizontal => {
            if position.x == piece.origin.x {
                Cell::HorizontalLeft
            } else {
                Cell::HorizontalRight
            }
        }
        PieceKind::Vertical => {
            if position.y == piece.origin.y {
                Cell::VerticalTop
            } else {
                Cell::VerticalBottom
            }
        }
    }
}

fn canonical_hash(grid: &Array2<Cell>) -> u64 {
    let mut tags = [0_u8; CELL_COUNT];
    for (slot, cell) in tags.iter_mut().zip(grid.iter()) {
        *slot = *cell as u8;
    }
    let mut hasher = DefaultHasher::new();
    hasher.write(&tags);
    hasher.finish()
}
