//! Glyph rendering of boards and solution sequences
//!
//! The inverse of the parser: cell tags map back to display glyphs, so a
//! rendered board parses to an equal board. Tags themselves stay purely
//! semantic; glyphs exist only in this layer.

use std::fs;
use std::path::Path;

use crate::io::error::{Result, SolverError};
use crate::io::puzzle::{
    EMPTY_GLYPH, GOAL_GLYPH, HORIZONTAL_LEFT_GLYPH, HORIZONTAL_RIGHT_GLYPH, SINGLE_GLYPH,
    VERTICAL_BOTTOM_GLYPH, VERTICAL_TOP_GLYPH,
};
use crate::search::Solution;
use crate::spatial::Board;
use crate::spatial::board::{Cell, HEIGHT, WIDTH};
use crate::spatial::piece::GridPos;

const fn glyph_for(cell: Cell) -> char {
    match cell {
        Cell::Empty => EMPTY_GLYPH,
        Cell::Goal => GOAL_GLYPH,
        Cell::Single => SINGLE_GLYPH,
        Cell::HorizontalLeft => HORIZONTAL_LEFT_GLYPH,
        Cell::HorizontalRight => HORIZONTAL_RIGHT_GLYPH,
        Cell::VerticalTop => VERTICAL_TOP_GLYPH,
        Cell::VerticalBottom => VERTICAL_BOTTOM_GLYPH,
    }
}

/// Render a board as puzzle text, one newline-terminated row per grid row
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity((WIDTH as usize + 1) * HEIGHT as usize);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let cell = board.cell_at(GridPos::new(x, y)).unwrap_or(Cell::Empty);
            out.push(glyph_for(cell));
        }
        out.push('\n');
    }
    out
}

/// Render a solution as boards separated by blank lines, initial first
pub fn render_solution(boards: &[Board]) -> String {
    let rendered: Vec<String> = boards.iter().map(render_board).collect();
    rendered.join("\n")
}

/// Write a solution file next to the puzzle it solves
///
/// # Errors
///
/// Returns [`SolverError::FileSystem`] if the file cannot be written.
pub fn write_solution(path: &Path, solution: &Solution) -> Result<()> {
    fs::write(path, render_solution(&solution.boards)).map_err(|source| {
        SolverError::FileSystem {
            path: path.to_path_buf(),
            operation: "solution write",
            source,
        }
    })
}
