//! Manual puzzle play over arbitrary input and output streams
//!
//! Renders the current board, lists the legal successor boards with their
//! heuristic estimates, and applies the move the reader selects, until the
//! puzzle is solved or input ends. Generic over the streams so sessions are
//! testable without a terminal.

use std::io::{BufRead, Write};

use crate::io::error::Result;
use crate::io::render::render_board;
use crate::search::heuristic::estimate;
use crate::search::movegen::successors;
use crate::spatial::Board;

/// Drive a play session from `board` until solved, quit or end of input
///
/// Returns the number of slides applied. The reader selects moves by index;
/// `q` ends the session early.
///
/// # Errors
///
/// Returns an error if reading a move or writing the display fails.
pub fn play<R: BufRead, W: Write>(board: &Board, input: &mut R, output: &mut W) -> Result<usize> {
    let mut current = board.clone();
    let mut moves = 0;

    loop {
        writeln!(output, "{}", render_board(&current))?;
        if current.is_solved() {
            writeln!(output, "Solved in {moves} moves")?;
            return Ok(moves);
        }

        let options = successors(&current);
        if options.is_empty() {
            writeln!(output, "No legal moves remain")?;
            return Ok(moves);
        }

        writeln!(output, "Possible moves:")?;
        for (index, option) in options.iter().enumerate() {
            writeln!(output, "[{index}] estimate {}", estimate(option))?;
            writeln!(output, "{}", render_board(option))?;
        }
        write!(output, "Enter your move: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(moves);
        }
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") {
            return Ok(moves);
        }

        match trimmed.parse::<usize>().ok().and_then(|i| options.get(i)) {
            Some(choice) => {
                current = choice.clone();
                moves += 1;
            }
            None => writeln!(output, "Unrecognised move '{trimmed}'")?,
        }
    }
}
