use crate::board_builder::BoardBuilder;
use crate::chess_move::ChessMove;
use crate::color::Color;
use crate::error::Error;
use crate::piece::{Piece, PieceType};
use crate::position::{Position, NUM_COLUMNS, NUM_ROWS};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// The back rank, from the a-file to the h-file.
const BACK_RANK: [PieceType; NUM_COLUMNS] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// A representation of a chess board.
///
/// The board only knows where pieces stand.  It has no idea whose turn it is or which moves are
/// legal; that is the job of `Game`.  It is small and `Copy`, so trying a move out on a scratch
/// board is a plain copy.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; NUM_COLUMNS]; NUM_ROWS],
}

/// Construct the initial position.
impl Default for Board {
    #[inline]
    fn default() -> Board {
        let mut board = Board::new();
        board.reset_to_standard_opening();
        board
    }
}

impl Board {
    /// Construct a new `Board` that is completely empty.
    /// Note: This does NOT give you the initial position.  Just a blank slate.
    ///
    /// ```
    /// use chess_game::{Board, Position};
    ///
    /// let board = Board::new();
    /// assert!(Position::all().all(|sq| board.piece_at(sq).is_none()));
    /// ```
    #[inline]
    pub fn new() -> Board {
        Board {
            squares: [[None; NUM_COLUMNS]; NUM_ROWS],
        }
    }

    /// Put a piece on a square, or clear it with `None`.  Whatever stood there is replaced.
    #[inline]
    pub fn place(&mut self, position: Position, piece: Option<Piece>) {
        self.squares[position.row() as usize - 1][position.column() as usize - 1] = piece;
    }

    /// Remove whatever stands on a square.
    #[inline]
    pub fn clear(&mut self, position: Position) {
        self.place(position, None);
    }

    /// What piece is on a particular `Position`?  Is there one?
    ///
    /// ```
    /// use chess_game::{Board, Color, Piece, PieceType, Position};
    ///
    /// let board = Board::default();
    ///
    /// assert_eq!(
    ///     board.piece_at(Position::new(1, 1).unwrap()),
    ///     Some(Piece::new(Color::White, PieceType::Rook))
    /// );
    /// assert_eq!(board.piece_at(Position::new(4, 4).unwrap()), None);
    /// ```
    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.squares[position.row() as usize - 1][position.column() as usize - 1]
    }

    /// Set the board up for a new game: both armies on their first two rows, everything else
    /// empty.
    pub fn reset_to_standard_opening(&mut self) {
        *self = Board::new();
        for color in [Color::White, Color::Black] {
            for (i, piece_type) in BACK_RANK.iter().enumerate() {
                let column = i as u8 + 1;
                self.place(
                    Position::new_unchecked(color.back_row(), column),
                    Some(Piece::new(color, *piece_type)),
                );
                self.place(
                    Position::new_unchecked(color.pawn_row(), column),
                    Some(Piece::new(color, PieceType::Pawn)),
                );
            }
        }
    }

    /// Every occupied square together with its occupant, a1 first.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Every square holding a piece of `color`.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color() == color)
    }

    /// Where is this color's king?  `None` if it has none on the board.
    ///
    /// ```
    /// use chess_game::{Board, Color, Position};
    ///
    /// let board = Board::default();
    /// assert_eq!(board.king_position(Color::Black), Some(Position::new(8, 5).unwrap()));
    /// ```
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces(color)
            .find(|(_, piece)| piece.piece_type() == PieceType::King)
            .map(|(sq, _)| sq)
    }

    /// How many kings of this color are on the board?
    pub fn king_count(&self, color: Color) -> usize {
        self.pieces(color)
            .filter(|(_, piece)| piece.piece_type() == PieceType::King)
            .count()
    }

    /// Carry out a move without asking whether it is legal.
    ///
    /// With a promotion, a fresh piece of the mover's color lands on the end square and the pawn
    /// is gone; otherwise the moving piece is relocated.  The start square is always left empty.
    /// An empty start square leaves the board untouched.
    pub fn apply(&mut self, m: ChessMove) {
        let Some(moving) = self.piece_at(m.get_start()) else {
            return;
        };

        let landing = match m.get_promotion() {
            Some(promotion) => Piece::new(moving.color(), promotion),
            None => moving,
        };

        self.clear(m.get_start());
        self.place(m.get_end(), Some(landing));
    }

    /// Make a move onto a new board, leaving this one alone.
    ///
    /// ```
    /// use chess_game::{Board, ChessMove, Position};
    ///
    /// let e2 = Position::new(2, 5).unwrap();
    /// let e4 = Position::new(4, 5).unwrap();
    ///
    /// let board = Board::default();
    /// let after = board.apply_new(ChessMove::new(e2, e4, None));
    /// assert!(after.piece_at(e2).is_none());
    /// assert!(board.piece_at(e2).is_some());
    /// ```
    #[inline]
    pub fn apply_new(&self, m: ChessMove) -> Board {
        let mut result = *self;
        result.apply(m);
        result
    }
}

impl Index<Position> for Board {
    type Output = Option<Piece>;

    fn index(&self, index: Position) -> &Self::Output {
        &self.squares[index.row() as usize - 1][index.column() as usize - 1]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fen: BoardBuilder = self.into();
        write!(f, "{}", fen.placement())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Read the piece placement field of a FEN string.  Anything after the first space is
    /// ignored.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let placement = value.split(' ').next().unwrap_or("");
        Ok(BoardBuilder::parse_placement(placement, value)?.get_board())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i32, column: i32) -> Position {
        Position::new(row, column).unwrap()
    }

    #[test]
    fn test_standard_opening() {
        let board = Board::default();
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(
            board.piece_at(sq(1, 4)),
            Some(Piece::new(Color::White, PieceType::Queen))
        );
        assert_eq!(
            board.piece_at(sq(8, 5)),
            Some(Piece::new(Color::Black, PieceType::King))
        );
        for column in 1..=8 {
            assert_eq!(
                board.piece_at(sq(2, column)),
                Some(Piece::new(Color::White, PieceType::Pawn))
            );
            assert_eq!(
                board.piece_at(sq(7, column)),
                Some(Piece::new(Color::Black, PieceType::Pawn))
            );
            for row in 3..=6 {
                assert_eq!(board.piece_at(sq(row, column)), None);
            }
        }
    }

    #[test]
    fn test_reset_clears_stray_pieces() {
        let mut board = Board::new();
        board.place(sq(4, 4), Some(Piece::new(Color::Black, PieceType::Queen)));
        board.reset_to_standard_opening();
        assert_eq!(board.piece_at(sq(4, 4)), None);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new();
        let knight = Piece::new(Color::White, PieceType::Knight);
        board.place(sq(3, 3), Some(knight));
        assert_eq!(board.piece_at(sq(3, 3)), Some(knight));
        assert_eq!(board[sq(3, 3)], Some(knight));
        board.clear(sq(3, 3));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_apply_promotion_replaces_pawn() {
        let mut board = Board::new();
        board.place(sq(7, 1), Some(Piece::new(Color::White, PieceType::Pawn)));
        board.apply(ChessMove::new(sq(7, 1), sq(8, 1), Some(PieceType::Knight)));
        assert_eq!(board.piece_at(sq(7, 1)), None);
        assert_eq!(
            board.piece_at(sq(8, 1)),
            Some(Piece::new(Color::White, PieceType::Knight))
        );
    }

    #[test]
    fn test_king_position() {
        let mut board = Board::new();
        assert_eq!(board.king_position(Color::White), None);
        board.place(sq(5, 5), Some(Piece::new(Color::White, PieceType::King)));
        assert_eq!(board.king_position(Color::White), Some(sq(5, 5)));
        assert_eq!(board.king_count(Color::White), 1);
        assert_eq!(board.king_count(Color::Black), 0);
    }

    #[test]
    fn test_display_roundtrip() {
        let board = Board::default();
        assert_eq!(
            board.to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
        assert_eq!(Board::from_str(&board.to_string()).unwrap(), board);
    }
}
