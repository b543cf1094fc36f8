//! Text puzzle format parsing
//!
//! The format is five rows of four glyphs: `1` for the goal piece's cells,
//! `2` for a single, `<`/`>` for the halves of a horizontal piece, `^`/`v`
//! for the halves of a vertical piece and `.` for an empty cell. A piece is
//! recorded at its defining glyph (the first `1`, each `2`, `<` and `^`);
//! the remaining glyphs only have to agree with their partner. Structural
//! invariants (overlap, census, goal count) are enforced by the board
//! constructor, which stays authoritative over anything the text claims.

use crate::io::error::{Result, SolverError};
use crate::spatial::Board;
use crate::spatial::board::{HEIGHT, WIDTH};
use crate::spatial::piece::{GridPos, Piece, PieceKind};

/// Glyph marking a goal-piece cell
pub const GOAL_GLYPH: char = '1';
/// Glyph marking a single piece
pub const SINGLE_GLYPH: char = '2';
/// Glyph marking the left half of a horizontal piece
pub const HORIZONTAL_LEFT_GLYPH: char = '<';
/// Glyph marking the right half of a horizontal piece
pub const HORIZONTAL_RIGHT_GLYPH: char = '>';
/// Glyph marking the top half of a vertical piece
pub const VERTICAL_TOP_GLYPH: char = '^';
/// Glyph marking the bottom half of a vertical piece
pub const VERTICAL_BOTTOM_GLYPH: char = 'v';
/// Glyph marking an empty cell
pub const EMPTY_GLYPH: char = '.';

/// Parse puzzle text into a validated standard board
///
/// # Errors
///
/// Returns [`SolverError::PuzzleFormat`] for malformed text and
/// [`SolverError::Board`] when the described pieces violate a board
/// invariant (a three-empty layout, say).
pub fn parse_board(text: &str) -> Result<Board> {
    let pieces = parse_pieces(text)?;
    Board::new(pieces).map_err(SolverError::from)
}

/// Parse puzzle text into the piece list it describes
///
/// # Errors
///
/// Returns [`SolverError::PuzzleFormat`] if the text is not exactly
/// [`HEIGHT`] rows of [`WIDTH`] known glyphs, or a partner glyph (`>`, `v`)
/// does not follow its defining half.
pub fn parse_pieces(text: &str) -> Result<Vec<Piece>> {
    let rows: Vec<&str> = text.lines().collect();
    if rows.len() != HEIGHT as usize {
        return Err(SolverError::PuzzleFormat {
            line: rows.len().min(HEIGHT as usize + 1),
            reason: format!("expected {HEIGHT} rows, found {}", rows.len()),
        });
    }

    let mut cells: Vec<Vec<char>> = Vec::with_capacity(rows.len());
    for (row_index, row) in rows.iter().enumerate() {
        let glyphs: Vec<char> = row.chars().collect();
        if glyphs.len() != WIDTH as usize {
            return Err(SolverError::PuzzleFormat {
                line: row_index + 1,
                reason: format!("expected {WIDTH} columns, found {}", glyphs.len()),
            });
        }
        cells.push(glyphs);
    }

    let mut pieces = Vec::new();
    let mut goal_seen = false;
    for (y, row) in cells.iter().enumerate() {
        for (x, &glyph) in row.iter().enumerate() {
            let origin = GridPos::new(x as i32, y as i32);
            match glyph {
                GOAL_GLYPH => {
                    if !goal_seen {
                        goal_seen = true;
                        pieces.push(Piece::new(PieceKind::Goal, origin));
                    }
                }
                SINGLE_GLYPH => pieces.push(Piece::new(PieceKind::Single, origin)),
                HORIZONTAL_LEFT_GLYPH => pieces.push(Piece::new(PieceKind::Horizontal, origin)),
                VERTICAL_TOP_GLYPH => pieces.push(Piece::new(PieceKind::Vertical, origin)),
                HORIZONTAL_RIGHT_GLYPH => {
                    let partner = x.checked_sub(1).and_then(|left| row.get(left));
                    if partner != Some(&HORIZONTAL_LEFT_GLYPH) {
                        return Err(SolverError::PuzzleFormat {
                            line: y + 1,
                            reason: format!(
                                "'{HORIZONTAL_RIGHT_GLYPH}' without a \
                                 '{HORIZONTAL_LEFT_GLYPH}' to its left"
                            ),
                        });
                    }
                }
                VERTICAL_BOTTOM_GLYPH => {
                    let partner = y
                        .checked_sub(1)
                        .and_then(|above| cells.get(above))
                        .and_then(|r| r.get(x));
                    if partner != Some(&VERTICAL_TOP_GLYPH) {
                        return Err(SolverError::PuzzleFormat {
                            line: y + 1,
                            reason: format!(
                                "'{VERTICAL_BOTTOM_GLYPH}' without a \
                                 '{VERTICAL_TOP_GLYPH}' above it"
                            ),
                        });
                    }
                }
                EMPTY_GLYPH => {}
                other => {
                    return Err(SolverError::PuzzleFormat {
                        line: y + 1,
                        reason: format!("unrecognised glyph '{other}'"),
                    });
                }
            }
        }
    }

    Ok(pieces)
}
