use chess_game::{
    BoardStatus, ChessMove, Color, Error, Game, GameResult, InvalidMoveReason, Piece, PieceType,
    Position,
};
use std::str::FromStr;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn mv(text: &str) -> ChessMove {
    ChessMove::from_str(text).unwrap()
}

fn sq(text: &str) -> Position {
    Position::from_str(text).unwrap()
}

#[test]
fn opening_pawn_push() {
    init();
    let mut game = Game::new();
    game.make_move(mv("e2e4")).unwrap();

    assert_eq!(game.board().piece_at(sq("e2")), None);
    assert_eq!(
        game.board().piece_at(sq("e4")),
        Some(Piece::new(Color::White, PieceType::Pawn))
    );
    assert_eq!(game.side_to_move(), Color::Black);
    assert!(!game.is_game_over());
}

#[test]
fn fools_mate() {
    init();
    let mut game = Game::new();
    for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        game.make_move(mv(m)).unwrap();
    }

    assert!(game.is_in_check(Color::White));
    assert!(game.is_in_checkmate(Color::White));
    assert!(game.is_game_over());
    assert_eq!(
        game.result(),
        Some(GameResult::Checkmate {
            winner: Color::Black
        })
    );

    let err = game.make_move(mv("a2a3")).unwrap_err();
    assert_eq!(err.invalid_move_reason(), Some(InvalidMoveReason::GameOver));
}

#[test]
fn cornered_king_is_stalemated() {
    init();
    let mut game = Game::from_str("k7/2Q5/1K6/8/8/8/8/8 b").unwrap();

    assert!(!game.is_in_check(Color::Black));
    assert_eq!(game.status(Color::Black), BoardStatus::Stalemate);
    assert!(!game.is_in_checkmate(Color::Black));
    assert!(!game.is_game_over());
    assert!(game.is_in_stalemate(Color::Black));
    assert!(game.is_game_over());
    assert_eq!(game.result(), Some(GameResult::Stalemate));
}

#[test]
fn pawn_on_seventh_offers_four_promotions() {
    init();
    let mut game = Game::from_str("7k/P7/8/8/8/8/8/K7 w").unwrap();

    let mut promotions: Vec<PieceType> = game
        .valid_moves(sq("a7"))
        .map(|m| {
            assert_eq!(m.get_end(), sq("a8"));
            m.get_promotion().unwrap()
        })
        .collect();
    promotions.sort();
    let mut expected = vec![
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];
    expected.sort();
    assert_eq!(promotions, expected);
    assert_eq!(game.legal_destinations(sq("a7")), vec![sq("a8")]);

    let err = game.make_move(mv("a7a8")).unwrap_err();
    assert_eq!(err.invalid_move_reason(), Some(InvalidMoveReason::Illegal));

    let status = game.play(mv("a7a8n")).unwrap();
    assert_eq!(status, BoardStatus::Ongoing);
    assert_eq!(
        game.board().piece_at(sq("a8")),
        Some(Piece::new(Color::White, PieceType::Knight))
    );
}

#[test]
fn wrong_color_is_rejected_and_board_kept() {
    init();
    let mut game = Game::new();
    let before = *game.board();

    match game.make_move(mv("e7e5")) {
        Err(Error::InvalidMove { chess_move, reason }) => {
            assert_eq!(chess_move, mv("e7e5"));
            assert_eq!(reason, InvalidMoveReason::WrongTurn);
        }
        other => panic!("expected a wrong-turn rejection, got {:?}", other),
    }

    let err = game.make_move(mv("e3e4")).unwrap_err();
    assert_eq!(err.invalid_move_reason(), Some(InvalidMoveReason::EmptySquare));

    let err = game.make_move(mv("e2e5")).unwrap_err();
    assert_eq!(err.invalid_move_reason(), Some(InvalidMoveReason::Illegal));

    assert_eq!(*game.board(), before);
    assert_eq!(game.side_to_move(), Color::White);
}

#[test]
fn pinned_piece_cannot_expose_king() {
    init();
    let mut game = Game::from_str("4r2k/8/8/8/8/8/4B3/4K3 w").unwrap();

    assert_eq!(game.valid_moves(sq("e2")).len(), 0);
    let err = game.make_move(mv("e2d3")).unwrap_err();
    assert_eq!(err.invalid_move_reason(), Some(InvalidMoveReason::Illegal));
}

#[test]
fn resignation_ends_the_game() {
    init();
    let mut game = Game::new();
    game.make_move(mv("d2d4")).unwrap();
    game.resign();

    assert!(game.is_game_over());
    assert_eq!(
        game.result(),
        Some(GameResult::Resignation { side: Color::Black })
    );
    assert!(game.make_move(mv("d7d5")).is_err());
}

#[test]
fn board_without_kings_is_rejected() {
    init();
    assert!(matches!(
        Game::from_str("8/8/8/8/8/8/8/8 w"),
        Err(Error::InvalidBoard)
    ));
    assert!(matches!(
        Game::from_str("not a fen"),
        Err(Error::InvalidFen { .. })
    ));
}
