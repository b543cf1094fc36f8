//! Validates puzzle parsing, rendering, interactive play and file processing

use std::io::Cursor;

use huarong::SolverError;
use huarong::io::cli::{Cli, FileProcessor};
use huarong::io::interactive::play;
use huarong::io::puzzle::{parse_board, parse_pieces};
use huarong::io::render::{render_board, render_solution};
use clap::Parser;

const CLASSIC: &str = "\
^11^
v11v
^<>^
v22v
2..2
";

const ONE_MOVE: &str = "\
^<>^
v<>v
2112
2112
2..2
";

#[test]
fn test_parse_render_round_trip() {
    let board = parse_board(CLASSIC).expect("classic layout parses");
    assert_eq!(render_board(&board), CLASSIC);

    let reparsed = parse_board(&render_board(&board)).expect("rendered text parses");
    assert_eq!(board, reparsed);
}

#[test]
fn test_parser_records_one_goal_piece() {
    let pieces = parse_pieces(CLASSIC).expect("classic layout parses");
    let goals = pieces
        .iter()
        .filter(|piece| piece.kind == huarong::spatial::piece::PieceKind::Goal)
        .count();
    assert_eq!(goals, 1);
    assert_eq!(pieces.len(), 10);
}

#[test]
fn test_parser_rejects_malformed_text() {
    let too_short = "^11^\nv11v\n";
    assert!(matches!(
        parse_board(too_short),
        Err(SolverError::PuzzleFormat { .. })
    ));

    let wide_row = "\
^11^
v11v2
^<>^
v22v
2..2
";
    assert!(matches!(
        parse_board(wide_row),
        Err(SolverError::PuzzleFormat { line: 2, .. })
    ));

    let unknown_glyph = "\
^11^
v11v
^<>^
v22v
2x.2
";
    assert!(matches!(
        parse_board(unknown_glyph),
        Err(SolverError::PuzzleFormat { line: 5, .. })
    ));
}

#[test]
fn test_parser_rejects_unpaired_partner_glyphs() {
    let stray_right = "\
^11^
v11v
^>.^
v22v
2..2
";
    assert!(matches!(
        parse_board(stray_right),
        Err(SolverError::PuzzleFormat { line: 3, .. })
    ));

    let stray_bottom = "\
v11^
.11v
^<>^
v22v
2..2
";
    assert!(matches!(
        parse_board(stray_bottom),
        Err(SolverError::PuzzleFormat { line: 1, .. })
    ));
}

#[test]
fn test_solution_rendering_separates_boards_with_blank_lines() {
    let board = parse_board(ONE_MOVE).expect("one-move layout parses");
    let mut ctx = huarong::search::SearchContext::new();
    let outcome = huarong::search::astar::solve(&board, &mut ctx);
    let huarong::search::SearchOutcome::Solved(solution) = outcome else {
        unreachable!("one-move layout must solve");
    };

    let text = render_solution(&solution.boards);
    let blocks: Vec<&str> = text.split("\n\n").collect();
    assert_eq!(blocks.len(), solution.boards.len());
    let first = blocks.first().copied().unwrap_or_default();
    assert_eq!(format!("{first}\n"), ONE_MOVE);
}

#[test]
fn test_interactive_session_solves_the_one_move_puzzle() {
    let board = parse_board(ONE_MOVE).expect("one-move layout parses");

    // Empty cells scan row-major and the upward neighbour is probed first,
    // so the goal piece's winning slide is listed as move 0.
    let mut input = Cursor::new(b"0\n".to_vec());
    let mut output = Vec::new();
    let moves = play(&board, &mut input, &mut output).expect("session runs");

    assert_eq!(moves, 1);
    let transcript = String::from_utf8(output).expect("session output is UTF-8");
    assert!(transcript.contains("Possible moves:"));
    assert!(transcript.contains("Solved in 1 moves"));
}

#[test]
fn test_interactive_session_quits_on_request() {
    let board = parse_board(CLASSIC).expect("classic layout parses");
    let mut input = Cursor::new(b"q\n".to_vec());
    let mut output = Vec::new();
    let moves = play(&board, &mut input, &mut output).expect("session runs");
    assert_eq!(moves, 0);
}

#[test]
fn test_file_processor_writes_a_solution_file() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let puzzle_path = dir.path().join("caocao.txt");
    std::fs::write(&puzzle_path, ONE_MOVE).expect("puzzle file written");

    let cli = Cli::parse_from([
        "huarong",
        puzzle_path.to_str().expect("path is UTF-8"),
        "--quiet",
    ]);
    let mut processor = FileProcessor::new(cli);
    processor.process().expect("processing succeeds");

    let solution_path = dir.path().join("caocao_solution.txt");
    let text = std::fs::read_to_string(&solution_path).expect("solution file exists");

    let blocks: Vec<&str> = text.split("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    let first = blocks.first().copied().unwrap_or_default();
    assert_eq!(format!("{first}\n"), ONE_MOVE);

    let last = blocks.last().copied().unwrap_or_default();
    let goal_board = parse_board(last).expect("final block parses");
    assert!(goal_board.is_solved());
}

#[test]
fn test_file_processor_skips_existing_solutions() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let puzzle_path = dir.path().join("caocao.txt");
    std::fs::write(&puzzle_path, ONE_MOVE).expect("puzzle file written");
    let solution_path = dir.path().join("caocao_solution.txt");
    std::fs::write(&solution_path, "sentinel").expect("existing solution written");

    let cli = Cli::parse_from([
        "huarong",
        dir.path().to_str().expect("path is UTF-8"),
        "--quiet",
    ]);
    let mut processor = FileProcessor::new(cli);
    processor.process().expect("processing succeeds");

    // The stale file is left untouched, and the directory scan must not
    // treat it as a puzzle input.
    let text = std::fs::read_to_string(&solution_path).expect("solution file still exists");
    assert_eq!(text, "sentinel");
}

#[test]
fn test_dfs_algorithm_flag_is_accepted() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let puzzle_path = dir.path().join("caocao.txt");
    std::fs::write(&puzzle_path, ONE_MOVE).expect("puzzle file written");

    let cli = Cli::parse_from([
        "huarong",
        puzzle_path.to_str().expect("path is UTF-8"),
        "--quiet",
        "--algorithm",
        "dfs",
    ]);
    let mut processor = FileProcessor::new(cli);
    processor.process().expect("processing succeeds");

    assert!(dir.path().join("caocao_solution.txt").exists());
}
