//! # Chess Game Library
//! The rules engine behind a two-player chess server: the server keeps the board, and every
//! move a player sends is checked here before it is played.
//!
//! - `Board` holds the pieces and nothing else.
//! - `MoveGen` produces the moves of one piece, pseudo-legal or legal.
//! - `Game` owns a board and whose turn it is, plays moves, and detects check, checkmate and
//!   stalemate.
//!
//! Squares are 1-indexed `(row, column)` pairs: row 1 is white's back rank, column 1 is the
//! a-file.  Castling and en passant are not part of the rules implemented here.
//!
//! ## Example
//!
//! ```
//! use chess_game::{BoardStatus, ChessMove, Color, Game};
//! use std::str::FromStr;
//!
//! let mut game = Game::new();
//! let status = game.play(ChessMove::from_str("e2e4").unwrap()).unwrap();
//! assert_eq!(status, BoardStatus::Ongoing);
//! assert_eq!(game.side_to_move(), Color::Black);
//! ```
//!

mod board;
pub use crate::board::*;

mod board_builder;
pub use crate::board_builder::BoardBuilder;

mod chess_move;
pub use crate::chess_move::*;

mod color;
pub use crate::color::*;

mod error;
pub use crate::error::{Error, InvalidMoveReason};

mod game;
pub use crate::game::{BoardStatus, Game, GameResult};

mod movegen;
pub use crate::movegen::{MoveGen, MoveList, PieceMoveGenerator};

mod piece;
pub use crate::piece::*;

mod position;
pub use crate::position::*;

#[cfg(feature = "serde")]
mod snapshot;
#[cfg(feature = "serde")]
pub use crate::snapshot::GameSnapshot;
