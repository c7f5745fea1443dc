use chess_game::{Board, BoardStatus, Color, Game, MoveGen, Position, ALL_COLORS};
use std::str::FromStr;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Castling rights and en passant squares are left off; they are not part of these rules.
const POSITIONS: [&str; 6] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w",
    "4k3/8/8/8/8/8/8/R3K2R b",
];

fn squares_changed(before: &Board, after: &Board) -> usize {
    Position::all()
        .filter(|&pos| before.piece_at(pos) != after.piece_at(pos))
        .count()
}

#[test]
fn valid_moves_are_a_subset_of_pseudo_legal_moves() {
    init();
    for fen in POSITIONS {
        let game = Game::from_str(fen).unwrap();
        for color in ALL_COLORS {
            for (src, _) in game.board().pieces(color) {
                let pseudo: Vec<_> = MoveGen::new_pseudo_legal(game.board(), src).collect();
                for m in MoveGen::new_legal(game.board(), src) {
                    assert!(pseudo.contains(&m), "{} legal but not pseudo-legal in {}", m, fen);
                    assert_eq!(m.get_start(), src);
                    assert!((1..=8).contains(&m.get_end().row()));
                    assert!((1..=8).contains(&m.get_end().column()));
                }
            }
        }
    }
}

#[test]
fn a_move_changes_exactly_two_squares() {
    init();
    for fen in POSITIONS {
        let game = Game::from_str(fen).unwrap();
        let color = game.side_to_move();
        for m in MoveGen::all_legal(game.board(), color) {
            let mut next = game.clone();
            next.make_move(m).unwrap();
            assert_eq!(squares_changed(game.board(), next.board()), 2, "{} in {}", m, fen);
            assert_eq!(next.side_to_move(), !color);
            assert!(!next.is_in_check(color), "{} left the king attacked in {}", m, fen);
        }
    }
}

#[test]
fn checkmate_implies_check_and_stalemate_implies_no_check() {
    init();
    for fen in POSITIONS {
        let game = Game::from_str(fen).unwrap();
        let color = game.side_to_move();
        for m in MoveGen::all_legal(game.board(), color) {
            let mut next = game.clone();
            let status = next.play(m).unwrap();
            let in_check = next.is_in_check(!color);
            match status {
                BoardStatus::Checkmate | BoardStatus::Check => assert!(in_check),
                BoardStatus::Stalemate | BoardStatus::Ongoing => assert!(!in_check),
            }
            if matches!(status, BoardStatus::Checkmate | BoardStatus::Stalemate) {
                assert!(next.is_game_over());
            }
        }
    }
}

#[test]
fn perft_from_the_opening() {
    init();
    let board = Board::default();
    assert_eq!(MoveGen::movegen_perft_test(&board, Color::White, 1), 20);
    assert_eq!(MoveGen::movegen_perft_test(&board, Color::White, 2), 400);
    assert_eq!(MoveGen::movegen_perft_test(&board, Color::White, 3), 8902);
}
