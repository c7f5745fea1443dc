use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::color::Color;
use crate::movegen::piece_type::*;
use crate::piece::PieceType;
use crate::position::Position;
use arrayvec::ArrayVec;
use std::iter::ExactSizeIterator;

/// Enough room for the busiest single piece: a queen in the middle of an open board has 27
/// moves, a pawn with two captures onto the last row has 12.
pub type MoveList = ArrayVec<ChessMove, 32>;

/// The moves of the piece on one square.
///
/// `MoveGen` is an iterator, so it can be counted, filtered or collected like any other.
///
/// # Examples
///
/// ```
/// use chess_game::{Board, MoveGen, Position};
///
/// // create a board with the initial position
/// let board = Board::default();
///
/// // the knight on g1 can go to f3 and h3
/// let knight = MoveGen::new_legal(&board, Position::new(1, 7).unwrap());
///
/// // make sure .len() works.
/// assert_eq!(knight.len(), 2);
///
/// // the pawn on e2 can advance one or two squares
/// let pawn: Vec<_> = MoveGen::new_legal(&board, Position::new(2, 5).unwrap())
///     .map(|m| m.get_end().to_string())
///     .collect();
/// assert_eq!(pawn, vec!["e3", "e4"]);
/// ```
pub struct MoveGen {
    moves: MoveList,
    index: usize,
}

impl MoveGen {
    /// Every pseudo-legal move of the piece on `src`, or nothing for an empty square.
    ///
    /// These moves follow the piece's pattern and the occupancy of the board, but may leave the
    /// mover's own king attacked.
    #[inline]
    pub fn new_pseudo_legal(board: &Board, src: Position) -> MoveGen {
        MoveGen {
            moves: MoveGen::enumerate_moves(board, src),
            index: 0,
        }
    }

    /// Every legal move of the piece on `src`, or nothing for an empty square.
    ///
    /// Each pseudo-legal move is tried on a copy of `board`; it is kept only if the mover's king
    /// is not attacked afterwards.  `board` itself is never modified.
    pub fn new_legal(board: &Board, src: Position) -> MoveGen {
        let mut moves = MoveGen::enumerate_moves(board, src);
        moves.retain(|m| MoveGen::leaves_king_safe(board, *m));
        MoveGen { moves, index: 0 }
    }

    fn enumerate_moves(board: &Board, src: Position) -> MoveList {
        let mut movelist = MoveList::new();

        if let Some(piece) = board.piece_at(src) {
            let color = piece.color();
            match piece.piece_type() {
                PieceType::Pawn => PawnType::pseudo_legals(board, src, color, &mut movelist),
                PieceType::Knight => KnightType::pseudo_legals(board, src, color, &mut movelist),
                PieceType::Bishop => BishopType::pseudo_legals(board, src, color, &mut movelist),
                PieceType::Rook => RookType::pseudo_legals(board, src, color, &mut movelist),
                PieceType::Queen => QueenType::pseudo_legals(board, src, color, &mut movelist),
                PieceType::King => KingType::pseudo_legals(board, src, color, &mut movelist),
            }
        }

        movelist
    }

    /// Can any piece of color `by` move onto `target`?
    ///
    /// Pawns only reach an occupied square diagonally, so for a king's square this is exactly
    /// "is the king attacked".
    ///
    /// ```
    /// use chess_game::{Board, Color, MoveGen, Position};
    ///
    /// let board = Board::default();
    /// // the g1 knight reaches f3
    /// assert!(MoveGen::is_attacked(&board, Position::new(3, 6).unwrap(), Color::White));
    /// assert!(!MoveGen::is_attacked(&board, Position::new(5, 6).unwrap(), Color::White));
    /// ```
    pub fn is_attacked(board: &Board, target: Position, by: Color) -> bool {
        board.pieces(by).any(|(src, _)| {
            MoveGen::enumerate_moves(board, src)
                .iter()
                .any(|m| m.get_end() == target)
        })
    }

    /// Would playing `m` keep the mover's king out of attack?
    ///
    /// The move is played on a scratch copy.  A side without a king has nothing to protect, so
    /// every move passes.  A move from an empty square never passes.
    pub fn leaves_king_safe(board: &Board, m: ChessMove) -> bool {
        let Some(mover) = board.piece_at(m.get_start()) else {
            return false;
        };

        let scratch = board.apply_new(m);
        let safe = match scratch.king_position(mover.color()) {
            Some(king) => !MoveGen::is_attacked(&scratch, king, !mover.color()),
            None => true,
        };

        if !safe {
            log::trace!("{} discarded: leaves the {} king attacked", m, mover.color());
        }
        safe
    }

    /// Does `color` have at least one legal move anywhere on the board?
    pub fn has_legal_move(board: &Board, color: Color) -> bool {
        board
            .pieces(color)
            .any(|(src, _)| MoveGen::new_legal(board, src).len() > 0)
    }

    /// Every legal move for `color`, over all of its pieces.
    pub fn all_legal(board: &Board, color: Color) -> Vec<ChessMove> {
        board
            .pieces(color)
            .flat_map(|(src, _)| MoveGen::new_legal(board, src))
            .collect()
    }

    /// Count the leaf positions `depth` plies below `board`, `color` to move.
    pub fn movegen_perft_test(board: &Board, color: Color, depth: usize) -> usize {
        let moves = MoveGen::all_legal(board, color);
        if depth <= 1 {
            moves.len()
        } else {
            moves
                .into_iter()
                .map(|m| MoveGen::movegen_perft_test(&board.apply_new(m), !color, depth - 1))
                .sum()
        }
    }
}

impl ExactSizeIterator for MoveGen {
    /// Give the exact length of this iterator
    fn len(&self) -> usize {
        self.moves.len() - self.index
    }
}

impl Iterator for MoveGen {
    type Item = ChessMove;

    /// Give a size_hint to some functions that need it
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    /// Find the next chess move.
    fn next(&mut self) -> Option<ChessMove> {
        let result = self.moves.get(self.index).copied();
        if result.is_some() {
            self.index += 1;
        }
        result
    }
}

#[cfg(test)]
use crate::board_builder::BoardBuilder;
#[cfg(test)]
use crate::color::ALL_COLORS;
#[cfg(test)]
use crate::piece::{Piece, PROMOTION_PIECES};
#[cfg(test)]
use std::collections::HashSet;
#[cfg(test)]
use std::str::FromStr;

#[cfg(test)]
fn sq(s: &str) -> Position {
    Position::from_str(s).unwrap()
}

#[cfg(test)]
fn board_of(fen: &str) -> Board {
    BoardBuilder::from_str(fen).unwrap().get_board()
}

#[cfg(test)]
fn dests(board: &Board, from: &str) -> HashSet<String> {
    MoveGen::new_pseudo_legal(board, sq(from))
        .map(|m| m.get_end().to_string())
        .collect()
}

#[cfg(test)]
fn set_of(squares: &[&str]) -> HashSet<String> {
    squares.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_starting_position_moves() {
    let board = Board::default();
    let total: usize = board
        .pieces(Color::White)
        .map(|(src, _)| MoveGen::new_pseudo_legal(&board, src).len())
        .sum();
    assert_eq!(total, 20);
}

#[test]
fn test_empty_square_has_no_moves() {
    let board = Board::default();
    assert_eq!(MoveGen::new_pseudo_legal(&board, sq("e4")).len(), 0);
    assert_eq!(MoveGen::new_legal(&board, sq("e4")).len(), 0);
}

#[test]
fn test_rook_stops_at_blockers() {
    // white rook d4, white pawn d6, black knight f4
    let board = board_of("8/8/3P4/8/3R1n2/8/8/8 w");
    assert_eq!(
        dests(&board, "d4"),
        set_of(&["d5", "d3", "d2", "d1", "c4", "b4", "a4", "e4", "f4"])
    );
}

#[test]
fn test_bishop_in_corner() {
    let board = board_of("8/8/8/8/8/8/8/B7 w");
    assert_eq!(
        dests(&board, "a1"),
        set_of(&["b2", "c3", "d4", "e5", "f6", "g7", "h8"])
    );
}

#[test]
fn test_queen_open_board() {
    let board = board_of("8/8/8/8/3Q4/8/8/8 w");
    assert_eq!(MoveGen::new_pseudo_legal(&board, sq("d4")).len(), 27);
}

#[test]
fn test_knight_on_edge_and_friendly_block() {
    // white knight a1, white pawn c2
    let board = board_of("8/8/8/8/8/8/2P5/N7 w");
    assert_eq!(dests(&board, "a1"), set_of(&["b3"]));
}

#[test]
fn test_king_captures_but_not_own_pieces() {
    // white king e1, white pawn e2, black pawn d2
    let board = board_of("8/8/8/8/8/8/3pP3/4K3 w");
    assert_eq!(dests(&board, "e1"), set_of(&["d1", "f1", "d2", "f2"]));
}

#[test]
fn test_pawn_double_push_needs_both_squares() {
    let blocked_far = board_of("8/8/8/8/4n3/8/4P3/8 w");
    assert_eq!(dests(&blocked_far, "e2"), set_of(&["e3"]));

    let blocked_near = board_of("8/8/8/8/8/4n3/4P3/8 w");
    assert_eq!(dests(&blocked_near, "e2"), set_of(&[]));

    let not_home = board_of("8/8/8/8/8/4P3/8/8 w");
    assert_eq!(dests(&not_home, "e3"), set_of(&["e4"]));
}

#[test]
fn test_pawn_captures_only_enemies_diagonally() {
    // white pawn d4, black pawn c5, white knight e5, black rook d5
    let board = board_of("8/8/8/2prN3/3P4/8/8/8 w");
    assert_eq!(dests(&board, "d4"), set_of(&["c5"]));
}

#[test]
fn test_black_pawn_moves_down() {
    let board = board_of("8/3p4/8/8/8/8/8/8 b");
    assert_eq!(dests(&board, "d7"), set_of(&["d6", "d5"]));
}

#[test]
fn test_promotions_come_in_fours() {
    // white pawn b7 with a black rook on a8 to capture; black pawn g2 heading for g1
    let board = board_of("r7/1P6/8/8/8/8/6p1/8 w");

    let white: Vec<ChessMove> = MoveGen::new_pseudo_legal(&board, sq("b7")).collect();
    assert_eq!(white.len(), 8);
    for dest in ["a8", "b8"] {
        let promos: HashSet<_> = white
            .iter()
            .filter(|m| m.get_end() == sq(dest))
            .map(|m| m.get_promotion())
            .collect();
        let expected: HashSet<_> = PROMOTION_PIECES.iter().map(|p| Some(*p)).collect();
        assert_eq!(promos, expected);
    }

    let black: Vec<ChessMove> = MoveGen::new_pseudo_legal(&board, sq("g2")).collect();
    assert_eq!(black.len(), 4);
    assert!(black.iter().all(|m| m.get_end() == sq("g1")));
}

#[test]
fn test_pinned_piece_cannot_leave_line() {
    // white king e1, white bishop e4, black rook e8, black king a8
    let board = board_of("k3r3/8/8/8/4B3/8/8/4K3 w");
    assert!(MoveGen::new_pseudo_legal(&board, sq("e4")).len() > 0);
    assert_eq!(MoveGen::new_legal(&board, sq("e4")).len(), 0);
}

#[test]
fn test_king_cannot_step_into_attack() {
    // white king e1, black rook h2 covers the whole second row
    let board = board_of("k7/8/8/8/8/8/7r/4K3 w");
    let legal: HashSet<String> = MoveGen::new_legal(&board, sq("e1"))
        .map(|m| m.get_end().to_string())
        .collect();
    assert_eq!(legal, set_of(&["d1", "f1"]));
}

#[test]
fn test_legal_is_subset_of_pseudo_legal() {
    let board = board_of("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w");
    for color in ALL_COLORS {
        for (src, _) in board.pieces(color) {
            let pseudo: HashSet<ChessMove> = MoveGen::new_pseudo_legal(&board, src).collect();
            for m in MoveGen::new_legal(&board, src) {
                assert!(pseudo.contains(&m));
            }
        }
    }
}

#[test]
fn test_is_attacked_by_pawn_only_diagonally() {
    let mut board = Board::new();
    board.place(sq("e4"), Some(Piece::new(Color::White, PieceType::Pawn)));

    let mut diagonal = board;
    diagonal.place(sq("d5"), Some(Piece::new(Color::Black, PieceType::King)));
    assert!(MoveGen::is_attacked(&diagonal, sq("d5"), Color::White));

    let mut ahead = board;
    ahead.place(sq("e5"), Some(Piece::new(Color::Black, PieceType::King)));
    assert!(!MoveGen::is_attacked(&ahead, sq("e5"), Color::White));
}

#[test]
fn test_perft_shallow() {
    let board = Board::default();
    assert_eq!(MoveGen::movegen_perft_test(&board, Color::White, 1), 20);
    assert_eq!(MoveGen::movegen_perft_test(&board, Color::White, 2), 400);
}
