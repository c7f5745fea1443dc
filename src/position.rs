use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// How many rows (ranks) are on the board?
pub const NUM_ROWS: usize = 8;

/// How many columns (files) are on the board?
pub const NUM_COLUMNS: usize = 8;

/// How many squares are on the board?
pub const NUM_SQUARES: usize = NUM_ROWS * NUM_COLUMNS;

/// Represent a square on the chess board.
///
/// Rows and columns are both 1-indexed.  Row 1 is white's back rank and column 1 is the a-file,
/// so `e4` is row 4, column 5.  A `Position` is always on the board; raw coordinates go through
/// `Position::new`, which rejects anything outside `1..=8`.
#[derive(PartialEq, Ord, Eq, PartialOrd, Copy, Clone, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPosition", into = "RawPosition")
)]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// Create a square from a row and column.
    ///
    /// ```
    /// use chess_game::Position;
    ///
    /// let e4 = Position::new(4, 5).unwrap();
    /// assert_eq!(e4.to_string(), "e4");
    /// assert!(Position::new(0, 5).is_err());
    /// assert!(Position::new(4, 9).is_err());
    /// ```
    pub fn new(row: i32, column: i32) -> Result<Position, Error> {
        if (1..=NUM_ROWS as i32).contains(&row) && (1..=NUM_COLUMNS as i32).contains(&column) {
            Ok(Position {
                row: row as u8,
                column: column as u8,
            })
        } else {
            Err(Error::OutOfBounds { row, column })
        }
    }

    /// Build a square from coordinates already known to be on the board.
    #[inline]
    pub(crate) const fn new_unchecked(row: u8, column: u8) -> Position {
        Position { row, column }
    }

    #[inline]
    pub fn row(&self) -> u8 {
        self.row
    }

    #[inline]
    pub fn column(&self) -> u8 {
        self.column
    }

    /// Convert this square to a `usize` from 0 to 63, a1 first, row by row.
    #[inline]
    pub fn to_index(&self) -> usize {
        (self.row as usize - 1) * NUM_COLUMNS + (self.column as usize - 1)
    }

    /// The square `d_row` rows and `d_column` columns away, if it is still on the board.
    ///
    /// ```
    /// use chess_game::Position;
    ///
    /// let a1 = Position::new(1, 1).unwrap();
    /// assert_eq!(a1.offset(1, 2), Some(Position::new(2, 3).unwrap()));
    /// assert_eq!(a1.offset(-1, 0), None);
    /// ```
    #[inline]
    pub fn offset(&self, d_row: i8, d_column: i8) -> Option<Position> {
        Position::new(
            self.row as i32 + d_row as i32,
            self.column as i32 + d_column as i32,
        )
        .ok()
    }

    /// Every square on the board, a1 first, row by row.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=NUM_ROWS as u8).flat_map(|row| {
            (1..=NUM_COLUMNS as u8).map(move |column| Position::new_unchecked(row, column))
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + (self.column - 1)) as char,
            (b'1' + (self.row - 1)) as char
        )
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(Error::InvalidSquare);
        }
        let column = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a' + 1,
            _ => return Err(Error::InvalidSquare),
        };
        let row = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1' + 1,
            _ => return Err(Error::InvalidSquare),
        };
        Ok(Position::new_unchecked(row, column))
    }
}

/// Wire form of a `Position`.  Deserialized squares go through `Position::new`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawPosition {
    row: i32,
    column: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPosition> for Position {
    type Error = Error;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.column)
    }
}

#[cfg(feature = "serde")]
impl From<Position> for RawPosition {
    fn from(position: Position) -> Self {
        RawPosition {
            row: position.row as i32,
            column: position.column as i32,
        }
    }
}

impl TryFrom<(i32, i32)> for Position {
    type Error = Error;

    fn try_from((row, column): (i32, i32)) -> Result<Self, Self::Error> {
        Position::new(row, column)
    }
}
