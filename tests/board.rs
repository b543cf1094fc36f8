//! Validates board construction invariants, canonical identity and slides

use huarong::io::puzzle::parse_board;
use huarong::spatial::Board;
use huarong::spatial::board::{
    CELL_COUNT, Cell, GOAL_TARGET, InvalidBoardError, STANDARD_EMPTY_CELLS,
};
use huarong::spatial::piece::{Direction, GridPos, Piece, PieceKind};

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

fn classic() -> Board {
    parse_board(CLASSIC).expect("classic layout parses")
}

fn occupied_cells(board: &Board) -> usize {
    board
        .signature()
        .iter()
        .filter(|&&tag| tag != Cell::Empty as u8)
        .count()
}

#[test]
fn test_standard_construction() {
    let board = classic();

    assert_eq!(board.pieces().len(), 10);
    assert_eq!(board.empty_cells(), &[GridPos::new(1, 4), GridPos::new(2, 4)]);
    assert_eq!(board.goal_origin(), GridPos::new(1, 0));
    assert_eq!(board.goal_distance(), 3);
    assert!(!board.is_solved());
    assert_eq!(
        occupied_cells(&board) + STANDARD_EMPTY_CELLS,
        CELL_COUNT,
        "occupied plus empty cells must cover the grid"
    );
}

#[test]
fn test_cell_tags_distinguish_orientation_halves() {
    let board = classic();

    assert_eq!(board.cell_at(GridPos::new(1, 0)), Some(Cell::Goal));
    assert_eq!(board.cell_at(GridPos::new(2, 1)), Some(Cell::Goal));
    assert_eq!(board.cell_at(GridPos::new(1, 2)), Some(Cell::HorizontalLeft));
    assert_eq!(
        board.cell_at(GridPos::new(2, 2)),
        Some(Cell::HorizontalRight)
    );
    assert_eq!(board.cell_at(GridPos::new(0, 0)), Some(Cell::VerticalTop));
    assert_eq!(board.cell_at(GridPos::new(0, 1)), Some(Cell::VerticalBottom));
    assert_eq!(board.cell_at(GridPos::new(1, 4)), Some(Cell::Empty));
    assert_eq!(board.cell_at(GridPos::new(4, 0)), None);
}

#[test]
fn test_three_empty_census_is_rejected() {
    let three_empty = "\
^11^
v11v
^<>^
v22v
2...
";
    let result = parse_board(three_empty);
    assert!(matches!(
        result,
        Err(huarong::SolverError::Board {
            source: InvalidBoardError::EmptyCellCount {
                found: 3,
                expected: 2
            }
        })
    ));
}

#[test]
fn test_overlap_is_rejected_even_for_sparse_boards() {
    let pieces = vec![
        Piece::new(PieceKind::Goal, GridPos::new(0, 0)),
        Piece::new(PieceKind::Single, GridPos::new(1, 1)),
    ];
    let result = Board::sparse(pieces);
    assert!(matches!(
        result,
        Err(InvalidBoardError::Overlap {
            position: GridPos { x: 1, y: 1 }
        })
    ));
}

#[test]
fn test_out_of_bounds_footprint_is_rejected() {
    let pieces = vec![
        Piece::new(PieceKind::Goal, GridPos::new(0, 0)),
        Piece::new(PieceKind::Horizontal, GridPos::new(3, 4)),
    ];
    assert!(matches!(
        Board::sparse(pieces),
        Err(InvalidBoardError::OutOfBounds { .. })
    ));
}

#[test]
fn test_goal_piece_count_is_enforced() {
    let none = vec![Piece::new(PieceKind::Single, GridPos::new(0, 0))];
    assert!(matches!(
        Board::sparse(none),
        Err(InvalidBoardError::GoalPieceCount { found: 0 })
    ));

    let two = vec![
        Piece::new(PieceKind::Goal, GridPos::new(0, 0)),
        Piece::new(PieceKind::Goal, GridPos::new(2, 2)),
    ];
    assert!(matches!(
        Board::sparse(two),
        Err(InvalidBoardError::GoalPieceCount { found: 2 })
    ));
}

#[test]
fn test_canonical_id_ignores_piece_order() {
    let board = classic();
    let mut reversed = board.pieces().to_vec();
    reversed.reverse();
    let reordered = Board::new(reversed).expect("reordered pieces still form the board");

    assert_eq!(board.canonical_id(), reordered.canonical_id());
    assert_eq!(board, reordered);
}

#[test]
fn test_slide_reversal_restores_canonical_id() {
    let board = parse_board(ONE_MOVE).expect("one-move layout parses");
    let goal_index = board
        .pieces()
        .iter()
        .position(|piece| piece.kind == PieceKind::Goal)
        .expect("board has a goal piece");

    let down = board
        .with_piece_moved(goal_index, Direction::Down)
        .expect("goal can slide down into the empty cells");
    assert_ne!(board.canonical_id(), down.canonical_id());
    assert!(down.is_solved());
    assert_eq!(down.goal_origin(), GOAL_TARGET);

    let restored = down
        .with_piece_moved(goal_index, Direction::Up)
        .expect("the slide reverses");
    assert_eq!(board.canonical_id(), restored.canonical_id());
    assert_eq!(board, restored);
}

#[test]
fn test_slide_into_occupied_cell_is_rejected() {
    let board = classic();
    let goal_index = board
        .pieces()
        .iter()
        .position(|piece| piece.kind == PieceKind::Goal)
        .expect("board has a goal piece");

    // The goal piece starts boxed in on all four sides.
    for direction in Direction::ALL {
        assert!(board.with_piece_moved(goal_index, direction).is_err());
    }
}

#[test]
fn test_unknown_piece_index_is_rejected() {
    let board = classic();
    assert!(matches!(
        board.with_piece_moved(99, Direction::Up),
        Err(InvalidBoardError::UnknownPiece { index: 99 })
    ));
}
