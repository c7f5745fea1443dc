use crate::error::Error;
use crate::piece::PieceType;
use crate::position::Position;
use std::fmt;
use std::str::FromStr;

/// Represent a ChessMove in memory
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChessMove {
    start: Position,
    end: Position,
    promotion: Option<PieceType>,
}

impl ChessMove {
    /// Create a new chess move, given a start `Position`, an end `Position`, and an optional
    /// promotion `PieceType`
    #[inline]
    pub fn new(start: Position, end: Position, promotion: Option<PieceType>) -> ChessMove {
        ChessMove {
            start,
            end,
            promotion,
        }
    }

    /// Get the start square (square the piece is currently on).
    #[inline]
    pub fn get_start(&self) -> Position {
        self.start
    }

    /// Get the end square (square the piece is going to).
    #[inline]
    pub fn get_end(&self) -> Position {
        self.end
    }

    /// Get the promotion piece (maybe).
    #[inline]
    pub fn get_promotion(&self) -> Option<PieceType> {
        self.promotion
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.promotion {
            None => write!(f, "{}{}", self.start, self.end),
            Some(x) => write!(f, "{}{}{}", self.start, self.end, x),
        }
    }
}

impl FromStr for ChessMove {
    type Err = Error;

    /// Parse the coordinate form used on the wire: start square, end square and an optional
    /// promotion letter.
    ///
    /// ```
    /// use chess_game::{ChessMove, PieceType, Position};
    /// use std::str::FromStr;
    ///
    /// let m = ChessMove::from_str("e7e8q").unwrap();
    /// assert_eq!(m.get_start(), Position::new(7, 5).unwrap());
    /// assert_eq!(m.get_end(), Position::new(8, 5).unwrap());
    /// assert_eq!(m.get_promotion(), Some(PieceType::Queen));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || (s.len() != 4 && s.len() != 5) {
            return Err(Error::InvalidMoveText);
        }

        let start = Position::from_str(&s[0..2]).map_err(|_| Error::InvalidMoveText)?;
        let end = Position::from_str(&s[2..4]).map_err(|_| Error::InvalidMoveText)?;

        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match PieceType::from_char(c) {
                Some(p) if p.is_promotion_target() => Some(p),
                _ => return Err(Error::InvalidMoveText),
            },
        };

        Ok(ChessMove::new(start, end, promotion))
    }
}
