use crate::color::Color;
use std::fmt;

/// Represent a chess piece type as a very simple enum
#[derive(PartialEq, Eq, Ord, PartialOrd, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

/// How many piece types are there?
pub const NUM_PIECE_TYPES: usize = 6;

/// An array representing each piece type, in order of ascending value.
pub const ALL_PIECE_TYPES: [PieceType; NUM_PIECE_TYPES] = [
    PieceType::Pawn,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Queen,
    PieceType::King,
];

/// How many ways can I promote?
pub const NUM_PROMOTION_PIECES: usize = 4;

/// What pieces can I promote to?
pub const PROMOTION_PIECES: [PieceType; NUM_PROMOTION_PIECES] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

impl PieceType {
    /// The lowercase letter used for this piece type in FEN and coordinate moves.
    #[inline]
    pub fn to_char(&self) -> char {
        match *self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    /// Parse a piece letter, either case.
    pub fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }

    /// Can a pawn promote to this?
    #[inline]
    pub fn is_promotion_target(&self) -> bool {
        PROMOTION_PIECES.contains(self)
    }

    /// Convert a piece type with a color to a string.  White pieces are uppercase, black pieces
    /// are lowercase.
    ///
    /// ```
    /// use chess_game::{PieceType, Color};
    ///
    /// assert_eq!(PieceType::King.to_string(Color::White), "K");
    /// assert_eq!(PieceType::Knight.to_string(Color::Black), "n");
    /// ```
    #[inline]
    pub fn to_string(&self, color: Color) -> String {
        let piece = format!("{}", self);
        if color == Color::White {
            piece.to_uppercase()
        } else {
            piece
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A colored piece standing on the board.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    color: Color,
    piece_type: PieceType,
}

impl Piece {
    #[inline]
    pub fn new(color: Color, piece_type: PieceType) -> Piece {
        Piece { color, piece_type }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    /// Parse a FEN piece letter.  Uppercase is white.
    pub fn from_char(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        PieceType::from_char(c).map(|piece_type| Piece::new(color, piece_type))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.piece_type.to_string(self.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_char_roundtrip() {
        for color in crate::color::ALL_COLORS {
            for piece_type in ALL_PIECE_TYPES {
                let piece = Piece::new(color, piece_type);
                let c = piece.to_string().chars().next().unwrap();
                assert_eq!(Piece::from_char(c), Some(piece));
            }
        }
    }

    #[test]
    fn test_promotion_targets() {
        assert!(PieceType::Queen.is_promotion_target());
        assert!(PieceType::Knight.is_promotion_target());
        assert!(!PieceType::King.is_promotion_target());
        assert!(!PieceType::Pawn.is_promotion_target());
    }

    #[test]
    fn test_from_char_rejects_garbage() {
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(PieceType::from_char('1'), None);
    }
}
