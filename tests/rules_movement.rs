use draughts::board::Board;
use draughts::config::BoardConfig;
use draughts::coord::Coord;
use draughts::pieces::{Piece, Side};
use draughts::rules::SelectionError;

fn board_with(side: Side, pieces: &[(Coord, Piece)]) -> Board {
    Board::from_pieces(BoardConfig::default(), side, pieces).unwrap()
}

fn play(board: &mut Board, from: Coord, to: Coord) -> Result<(), SelectionError> {
    board.select(from);
    board.execute_selection()?;
    board.select(to);
    board.execute_selection()
}

#[test]
fn empty_pieces_compare_equal_and_crowning_keeps_side() {
    assert_eq!(Piece::default(), Piece::EMPTY);
    assert_ne!(Piece::Man(Side::A), Piece::Man(Side::B));
    assert_eq!(Piece::Man(Side::B).crowned(), Piece::King(Side::B));
    assert_eq!(Piece::EMPTY.crowned(), Piece::EMPTY);
    assert_eq!(Piece::EMPTY.side(), None);
}

#[test]
fn starting_position_counts() {
    let board = Board::standard();
    assert_eq!(board.count(Side::A), 12);
    assert_eq!(board.count(Side::B), 12);
    assert_eq!(board.side_to_move(), Side::A);
    assert_eq!(board.selected(), Coord::new(4, 4));
    assert_eq!(board.queued(), None);

    // Only the front row can move: (1,2) and (3,2) and (5,2) twice, (7,2) once.
    assert!(board.has_any_move());
    assert!(!board.has_capture_move());
    assert_eq!(board.turn_moves().sets().len(), 12);
    assert_eq!(board.turn_moves().passive_count(), 7);
    assert_eq!(board.turn_moves().aggressive_count(), 0);
}

#[test]
fn opening_move_passes_the_turn() {
    let mut board = Board::standard();

    board.select(Coord::new(1, 2));
    board.execute_selection().unwrap();
    assert_eq!(board.queued(), Some(Coord::new(1, 2)));
    assert_eq!(
        board.queued_moves().passive.as_slice(),
        &[Coord::new(0, 3), Coord::new(2, 3)]
    );
    assert!(board.queued_moves().aggressive.is_empty());

    board.select(Coord::new(2, 3));
    board.execute_selection().unwrap();

    assert_eq!(board.piece_at(Coord::new(2, 3)), Piece::Man(Side::A));
    assert!(board.is_empty(Coord::new(1, 2)));
    assert!(!board.is_king(Coord::new(2, 3)));
    assert_eq!(board.side_to_move(), Side::B);
    assert_eq!(board.queued(), None);
    assert!(board.queued_moves().is_empty());
}

#[test]
fn men_only_step_forward() {
    let board = board_with(Side::A, &[(Coord::new(3, 4), Piece::Man(Side::A))]);
    let set = board.turn_moves().for_origin(Coord::new(3, 4)).unwrap();
    assert_eq!(set.passive.as_slice(), &[Coord::new(2, 5), Coord::new(4, 5)]);

    let board = board_with(Side::B, &[(Coord::new(3, 4), Piece::Man(Side::B))]);
    let set = board.turn_moves().for_origin(Coord::new(3, 4)).unwrap();
    assert_eq!(set.passive.as_slice(), &[Coord::new(2, 3), Coord::new(4, 3)]);
}

#[test]
fn kings_step_both_ways() {
    let board = board_with(Side::A, &[(Coord::new(3, 4), Piece::King(Side::A))]);
    let set = board.turn_moves().for_origin(Coord::new(3, 4)).unwrap();
    assert_eq!(set.passive.len(), 4);
    assert!(set.passive.contains(&Coord::new(2, 3)));
    assert!(set.passive.contains(&Coord::new(4, 5)));
}

#[test]
fn illegal_destination_leaves_board_unchanged() {
    let mut board = Board::standard();
    board.select(Coord::new(1, 2));
    board.execute_selection().unwrap();

    let before = board.clone();
    board.select(Coord::new(1, 3));
    assert_eq!(board.execute_selection(), Err(SelectionError::IllegalDestination));

    board.select(before.selected());
    assert_eq!(board, before);
}

#[test]
fn man_is_crowned_on_the_far_row() {
    let mut board = board_with(
        Side::A,
        &[
            (Coord::new(2, 6), Piece::Man(Side::A)),
            (Coord::new(6, 3), Piece::Man(Side::B)),
        ],
    );
    play(&mut board, Coord::new(2, 6), Coord::new(1, 7)).unwrap();
    assert_eq!(board.piece_at(Coord::new(1, 7)), Piece::King(Side::A));
    assert_eq!(board.side_to_move(), Side::B);

    play(&mut board, Coord::new(6, 3), Coord::new(5, 2)).unwrap();
    assert!(board.is_man(Coord::new(5, 2)));
}

#[test]
fn side_b_is_crowned_on_row_zero() {
    let mut board = board_with(
        Side::B,
        &[
            (Coord::new(3, 1), Piece::Man(Side::B)),
            (Coord::new(7, 6), Piece::Man(Side::A)),
        ],
    );
    play(&mut board, Coord::new(3, 1), Coord::new(2, 0)).unwrap();
    assert_eq!(board.piece_at(Coord::new(2, 0)), Piece::King(Side::B));
    assert_eq!(board.side_to_move(), Side::A);
}

#[test]
fn king_moving_back_to_its_own_baseline_stays_a_king() {
    let mut board = board_with(
        Side::A,
        &[
            (Coord::new(2, 1), Piece::King(Side::A)),
            (Coord::new(6, 6), Piece::Man(Side::B)),
        ],
    );
    play(&mut board, Coord::new(2, 1), Coord::new(1, 0)).unwrap();
    assert_eq!(board.piece_at(Coord::new(1, 0)), Piece::King(Side::A));
}

#[test]
fn force_turn_restarts_with_chosen_side() {
    let mut board = Board::standard();
    play(&mut board, Coord::new(1, 2), Coord::new(0, 3)).unwrap();
    board.force_turn(Side::B);

    assert_eq!(board.side_to_move(), Side::B);
    assert!(board.is_empty(Coord::new(0, 3)));
    assert_eq!(board.piece_at(Coord::new(1, 2)), Piece::Man(Side::A));
    assert!(board.holds_side_to_move(Coord::new(0, 5)));
    assert_eq!(board.turn_moves().passive_count(), 7);
}

#[test]
fn six_by_six_start_is_blocked() {
    let config = BoardConfig::new(6, 6, 9);
    let mut board = Board::new(config, Side::A).unwrap();
    assert_eq!(board.count(Side::A), 9);
    assert_eq!(board.count(Side::B), 9);

    // Rows 2 and 3 touch on a 6x6 board and every jump lands on an occupied square,
    // so the side to move is stuck from the start.
    assert!(!board.has_any_move());
    assert_eq!(
        play(&mut board, Coord::new(1, 2), Coord::new(2, 3)),
        Err(SelectionError::IllegalDestination)
    );
}
