use crate::board::Board;
use crate::color::Color;
use crate::error::Error;
use crate::game::Game;
use crate::piece::{Piece, PieceType};
use crate::position::{Position, NUM_COLUMNS, NUM_ROWS, NUM_SQUARES};

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Represents a chess position that has *not* been validated for legality.
///
/// This structure is useful in the following cases:
/// * You are trying to build a chess position manually in code.
/// * The `Game` structure insists on exactly one king per side, which will prevent you from
///   placing pieces arbitrarily.  This structure will not.
/// * You want to convert between formats like FEN.
///
/// Only the piece placement and side-to-move fields of FEN mean anything here.  Castling,
/// en passant and the move clocks are accepted on input and ignored.
///
/// ```
/// use chess_game::{BoardBuilder, Game, Position, Color, PieceType, Piece};
/// use std::convert::TryFrom;
///
/// let a1 = Position::new(1, 1).unwrap();
/// let a8 = Position::new(8, 1).unwrap();
/// let d1 = Position::new(1, 4).unwrap();
///
/// let mut position = BoardBuilder::new();
/// position.piece(a1, PieceType::King, Color::White);
/// position.piece(a8, PieceType::Rook, Color::Black);
///
/// // You can index the position by the square:
/// assert_eq!(position[a1], Some(Piece::new(Color::White, PieceType::King)));
///
/// // Black has no king yet.
/// assert!(Game::try_from(&position).is_err());
///
/// position.piece(d1, PieceType::King, Color::Black);
/// assert!(Game::try_from(&position).is_ok());
///
/// // One liners are possible with the builder pattern.
/// use std::convert::TryInto;
///
/// let res: Result<Game, _> = BoardBuilder::new()
///                        .piece(a1, PieceType::King, Color::White)
///                        .piece(a8, PieceType::King, Color::Black)
///                        .try_into();
/// assert!(res.is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardBuilder {
    pieces: [Option<Piece>; NUM_SQUARES],
    side_to_move: Color,
}

impl BoardBuilder {
    /// Construct a new, empty, BoardBuilder.
    ///
    /// * No pieces are on the board
    /// * `side_to_move` is Color::White
    pub fn new() -> BoardBuilder {
        BoardBuilder {
            pieces: [None; NUM_SQUARES],
            side_to_move: Color::White,
        }
    }

    /// Set up a position with everything pre-loaded.
    ///
    /// ```
    /// use chess_game::{BoardBuilder, Game, Position, Color, PieceType};
    /// use std::convert::TryInto;
    ///
    /// # use chess_game::Error;
    /// # fn main() -> Result<(), Error> {
    /// let game: Game = BoardBuilder::setup(
    ///         &[
    ///             (Position::new(1, 1)?, PieceType::King, Color::White),
    ///             (Position::new(8, 8)?, PieceType::King, Color::Black),
    ///         ],
    ///         Color::Black)
    ///     .try_into()?;
    /// assert_eq!(game.side_to_move(), Color::Black);
    /// # Ok(())
    /// # }
    /// ```
    pub fn setup<'a>(
        pieces: impl IntoIterator<Item = &'a (Position, PieceType, Color)>,
        side_to_move: Color,
    ) -> BoardBuilder {
        let mut result = BoardBuilder::new();
        result.side_to_move = side_to_move;

        for (position, piece_type, color) in pieces.into_iter() {
            result[*position] = Some(Piece::new(*color, *piece_type));
        }

        result
    }

    /// Get the current player
    ///
    /// ```
    /// use chess_game::{BoardBuilder, Color};
    ///
    /// assert_eq!(BoardBuilder::default().get_side_to_move(), Color::White);
    /// ```
    pub fn get_side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The placement described so far, as a `Board`.
    pub fn get_board(&self) -> Board {
        let mut board = Board::new();
        for sq in Position::all() {
            board.place(sq, self[sq]);
        }
        board
    }

    /// Set the side to move on the position
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn side_to_move(&mut self, color: Color) -> &mut Self {
        self.side_to_move = color;
        self
    }

    /// Set a piece on a square.
    ///
    /// Note that this can and will overwrite another piece on the square if need.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn piece(&mut self, position: Position, piece_type: PieceType, color: Color) -> &mut Self {
        self[position] = Some(Piece::new(color, piece_type));
        self
    }

    /// Clear a square on the board.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn clear_square(&mut self, position: Position) -> &mut Self {
        self[position] = None;
        self
    }

    /// The FEN piece placement field: row 8 first, `/` between rows, digits for runs of empty
    /// squares.
    pub fn placement(&self) -> String {
        let mut out = String::new();
        for row in (1..=NUM_ROWS as u8).rev() {
            let mut count = 0;
            for column in 1..=NUM_COLUMNS as u8 {
                match self[Position::new_unchecked(row, column)] {
                    Some(piece) => {
                        if count != 0 {
                            out.push_str(&count.to_string());
                            count = 0;
                        }
                        out.push_str(&piece.to_string());
                    }
                    None => count += 1,
                }
            }

            if count != 0 {
                out.push_str(&count.to_string());
            }

            if row != 1 {
                out.push('/');
            }
        }
        out
    }

    /// Parse a FEN piece placement field.  `fen` is the full input, reported back on error.
    pub(crate) fn parse_placement(placement: &str, fen: &str) -> Result<BoardBuilder, Error> {
        let invalid = || Error::InvalidFen {
            fen: fen.to_string(),
        };

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != NUM_ROWS {
            return Err(invalid());
        }

        let mut result = BoardBuilder::new();
        for (i, text) in rows.iter().enumerate() {
            let row = (NUM_ROWS - i) as u8;
            let mut column: u8 = 1;

            for x in text.chars() {
                match x {
                    '1'..='8' => {
                        column += x as u8 - b'0';
                    }
                    _ => {
                        let piece = Piece::from_char(x).ok_or_else(invalid)?;
                        if column as usize > NUM_COLUMNS {
                            return Err(invalid());
                        }
                        result[Position::new_unchecked(row, column)] = Some(piece);
                        column += 1;
                    }
                }
                if column as usize > NUM_COLUMNS + 1 {
                    return Err(invalid());
                }
            }

            if column as usize != NUM_COLUMNS + 1 {
                return Err(invalid());
            }
        }

        Ok(result)
    }
}

impl Index<Position> for BoardBuilder {
    type Output = Option<Piece>;

    fn index(&self, index: Position) -> &Self::Output {
        &self.pieces[index.to_index()]
    }
}

impl IndexMut<Position> for BoardBuilder {
    fn index_mut(&mut self, index: Position) -> &mut Self::Output {
        &mut self.pieces[index.to_index()]
    }
}

impl fmt::Display for BoardBuilder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ", self.placement())?;

        if self.side_to_move == Color::White {
            write!(f, "w")
        } else {
            write!(f, "b")
        }
    }
}

impl Default for BoardBuilder {
    fn default() -> BoardBuilder {
        BoardBuilder::from(Board::default())
    }
}

impl FromStr for BoardBuilder {
    type Err = Error;

    /// Parse a FEN string.  The placement and side-to-move fields are required; any fields after
    /// them are ignored.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = value.split_whitespace().collect();
        if tokens.len() < 2 {
            return Err(Error::InvalidFen {
                fen: value.to_string(),
            });
        }

        let mut fen = BoardBuilder::parse_placement(tokens[0], value)?;

        match tokens[1] {
            "w" | "W" => fen.side_to_move(Color::White),
            "b" | "B" => fen.side_to_move(Color::Black),
            _ => {
                return Err(Error::InvalidFen {
                    fen: value.to_string(),
                })
            }
        };

        Ok(fen)
    }
}

impl From<&Board> for BoardBuilder {
    fn from(board: &Board) -> Self {
        let mut builder = BoardBuilder::new();
        for (sq, piece) in board.occupied() {
            builder[sq] = Some(piece);
        }
        builder
    }
}

impl From<Board> for BoardBuilder {
    fn from(board: Board) -> Self {
        (&board).into()
    }
}

impl From<&Game> for BoardBuilder {
    fn from(game: &Game) -> Self {
        let mut builder: BoardBuilder = game.board().into();
        builder.side_to_move(game.side_to_move());
        builder
    }
}

impl From<Game> for BoardBuilder {
    fn from(game: Game) -> Self {
        (&game).into()
    }
}

#[cfg(test)]
use std::convert::TryInto;

#[test]
fn check_initial_position() {
    let initial_fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";
    let fen: BoardBuilder = Game::new().into();
    let computed_initial_fen = format!("{}", fen);
    assert_eq!(computed_initial_fen, initial_fen);

    let pass_through = format!("{}", BoardBuilder::default());
    assert_eq!(pass_through, initial_fen);
}

#[test]
fn check_full_fen_is_accepted() {
    let bb =
        BoardBuilder::from_str("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .unwrap();
    assert_eq!(bb.get_side_to_move(), Color::Black);
    assert_eq!(
        bb[Position::new(4, 5).unwrap()],
        Some(Piece::new(Color::White, PieceType::Pawn))
    );
    assert_eq!(bb[Position::new(2, 5).unwrap()], None);
}

#[test]
fn invalid_fens() {
    for fen in [
        "",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w",
        "rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
        "rnbqkbn/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
        "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w",
        "rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
    ] {
        assert!(BoardBuilder::from_str(fen).is_err(), "accepted {:?}", fen);
    }
}

#[test]
fn test_missing_king() {
    let res: Result<Game, _> = BoardBuilder::new()
        .piece(Position::new(1, 1).unwrap(), PieceType::King, Color::White)
        .try_into();
    assert!(res.is_err());
}

#[test]
fn test_two_kings_of_one_color() {
    let res: Result<Game, _> = BoardBuilder::new()
        .piece(Position::new(1, 1).unwrap(), PieceType::King, Color::White)
        .piece(Position::new(1, 3).unwrap(), PieceType::King, Color::White)
        .piece(Position::new(8, 8).unwrap(), PieceType::King, Color::Black)
        .try_into();
    assert!(res.is_err());
}
