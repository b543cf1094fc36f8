//! Piece descriptors, slide directions and grid coordinates
//!
//! A piece is an immutable value: sliding one produces a new `Piece` rather
//! than mutating state shared between boards.

use crate::spatial::board::{HEIGHT, WIDTH};

/// One of the four single-cell slide directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller y
    Up,
    /// Towards larger y
    Down,
    /// Towards smaller x
    Left,
    /// Towards larger x
    Right,
}

impl Direction {
    /// All directions in the fixed enumeration order used by the move generator
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The reverse direction
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Coordinate delta as (dx, dy)
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// A cell coordinate, x growing rightwards and y growing downwards
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Column, in [0, 4)
    pub x: i32,
    /// Row, in [0, 5)
    pub y: i32,
}

impl GridPos {
    /// Create a position from column and row
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one cell away in `direction`
    ///
    /// May leave the grid; callers filter with [`Self::in_bounds`].
    pub const fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the position lies on the 4x5 grid
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < WIDTH && self.y >= 0 && self.y < HEIGHT
    }

    /// Row-major cell index; meaningful only for in-bounds positions
    pub const fn cell_index(self) -> usize {
        (self.y * WIDTH + self.x) as usize
    }
}

/// Piece category determining the footprint shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// The 2x2 piece that must reach the exit corner
    Goal,
    /// A 1x1 piece
    Single,
    /// A 2x1 piece (two cells side by side)
    Horizontal,
    /// A 1x2 piece (two cells stacked)
    Vertical,
}

impl PieceKind {
    /// Footprint dimensions as (width, height)
    pub const fn size(self) -> (i32, i32) {
        match self {
            Self::Goal => (2, 2),
            Self::Single => (1, 1),
            Self::Horizontal => (2, 1),
            Self::Vertical => (1, 2),
        }
    }
}

/// One placed tile: a category plus the top-left corner of its footprint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    /// Footprint category
    pub kind: PieceKind,
    /// Top-left corner of the footprint
    pub origin: GridPos,
}

impl Piece {
    /// Create a piece of `kind` anchored at `origin`
    pub const fn new(kind: PieceKind, origin: GridPos) -> Self {
        Self { kind, origin }
    }

    /// The grid cells the footprint covers, row-major within the piece
    pub fn cells(&self) -> impl Iterator<Item = GridPos> {
        let (width, height) = self.kind.size();
        let origin = self.origin;
        (0..height).flat_map(move |dy| {
            (0..width).map(move |dx| GridPos::new(origin.x + dx, origin.y + dy))
        })
    }

    /// Whether the footprint covers `position`
    pub const fn contains(&self, position: GridPos) -> bool {
        let (width, height) = self.kind.size();
        position.x >= self.origin.x
            && position.x < self.origin.x + width
            && position.y >= self.origin.y
            && position.y < self.origin.y + height
    }

    /// Whether the whole footprint lies on the grid
    pub const fn in_bounds(&self) -> bool {
        let (width, height) = self.kind.size();
        self.origin.x >= 0
            && self.origin.y >= 0
            && self.origin.x + width <= WIDTH
            && self.origin.y + height <= HEIGHT
    }

    /// The piece one slide away in `direction`
    #[must_use]
    pub const fn translated(&self, direction: Direction) -> Self {
        Self {
            kind: self.kind,
            origin: self.origin.offset(direction),
        }
    }
}
