use crate::chess_move::ChessMove;
use thiserror::Error;

/// Sometimes, bad stuff happens.
#[derive(Debug, Error)]
pub enum Error {
    /// The move is not allowed in the current game state
    #[error("Invalid move {chess_move}: {reason}")]
    InvalidMove {
        chess_move: ChessMove,
        reason: InvalidMoveReason,
    },

    /// Raw coordinates were given that do not name a square on the board
    #[error("Square (row {row}, column {column}) is off the board")]
    OutOfBounds { row: i32, column: i32 },

    /// An attempt was made to create a position from an invalid string
    #[error("The string specified does not contain a valid square")]
    InvalidSquare,

    /// An attempt was made to create a move from an invalid coordinate string
    #[error("The string specified does not contain a valid coordinate move")]
    InvalidMoveText,

    /// The FEN string is invalid
    #[error("Invalid FEN string: {fen}")]
    InvalidFen { fen: String },

    /// The position built or restored did not pass sanity checks
    #[error("The board specified did not pass sanity checks.  Are you sure each side has exactly one king?")]
    InvalidBoard,

    /// A game snapshot could not be encoded or decoded
    #[cfg(feature = "serde")]
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Why `Game::make_move` turned a move down.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidMoveReason {
    #[error("the game is over")]
    GameOver,

    #[error("there is no piece on the start square")]
    EmptySquare,

    #[error("it is not that side's turn")]
    WrongTurn,

    #[error("the piece cannot legally move there")]
    Illegal,
}

impl Error {
    /// The rejection reason, if this is an `InvalidMove`.
    pub fn invalid_move_reason(&self) -> Option<InvalidMoveReason> {
        match self {
            Error::InvalidMove { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
