use std::fmt;
use std::ops::Not;

/// Represent a color.
#[derive(PartialOrd, PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

/// How many colors are there?
pub const NUM_COLORS: usize = 2;

/// List all colors
pub const ALL_COLORS: [Color; NUM_COLORS] = [Color::White, Color::Black];

impl Color {
    /// Convert the `Color` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// Which way do this color's pawns advance, in rows?
    ///
    /// ```
    /// use chess_game::Color;
    ///
    /// assert_eq!(Color::White.pawn_direction(), 1);
    /// assert_eq!(Color::Black.pawn_direction(), -1);
    /// ```
    #[inline]
    pub fn pawn_direction(&self) -> i8 {
        match *self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The row this color's pieces start on.
    #[inline]
    pub fn back_row(&self) -> u8 {
        match *self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    /// The row this color's pawns start on, and may double-push from.
    #[inline]
    pub fn pawn_row(&self) -> u8 {
        match *self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// The row on which this color's pawns promote.
    #[inline]
    pub fn promotion_row(&self) -> u8 {
        (!*self).back_row()
    }
}

impl Not for Color {
    type Output = Color;

    /// Get the other color.
    #[inline]
    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
