use crate::board::Board;
use crate::board_builder::BoardBuilder;
use crate::chess_move::ChessMove;
use crate::color::{Color, ALL_COLORS};
use crate::error::{Error, InvalidMoveReason};
use crate::movegen::MoveGen;
use crate::position::Position;
use std::str::FromStr;

/// How a finished game ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameResult {
    /// `winner` delivered mate.
    Checkmate { winner: Color },
    /// The side to move had no legal move and was not in check.
    Stalemate,
    /// The game was resigned while `side` was to move.
    Resignation { side: Color },
}

/// Where a side stands on the current board.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

/// For UI/UCI Servers, store a game object which allows you to play moves, resign, and ask
/// about check, checkmate and stalemate.
///
/// The game owns its board.  The board only changes through `make_move` (or `play`), and only
/// after the move has been checked against the legal moves of the piece being moved.
///
/// ```
/// use chess_game::{ChessMove, Color, Game, Position};
///
/// let e2 = Position::new(2, 5).unwrap();
/// let e4 = Position::new(4, 5).unwrap();
///
/// let mut game = Game::new();
/// game.make_move(ChessMove::new(e2, e4, None)).unwrap();
/// assert_eq!(game.side_to_move(), Color::Black);
///
/// // it's not white's turn any more
/// let d2 = Position::new(2, 4).unwrap();
/// let d4 = Position::new(4, 4).unwrap();
/// assert!(game.make_move(ChessMove::new(d2, d4, None)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    game_over: bool,
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl Game {
    /// Create a new `Game` with the initial position, white to move.
    pub fn new() -> Game {
        Game::new_with_board(Board::default(), Color::White)
    }

    /// Create a new `Game` from an arbitrary board.  The board is not checked for sanity; go
    /// through `BoardBuilder` for that.
    pub fn new_with_board(board: Board, side_to_move: Color) -> Game {
        Game {
            board,
            side_to_move,
            game_over: false,
            result: None,
        }
    }

    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        game_over: bool,
        result: Option<GameResult>,
    ) -> Game {
        Game {
            board,
            side_to_move,
            game_over: game_over || result.is_some(),
            result,
        }
    }

    /// Get the current position on the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn is it?
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Has the game ended?  Once it has, it stays ended.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Why the game ended, if the engine knows.
    #[inline]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// The legal moves of the piece on `position`.  An empty square has none.
    ///
    /// Nothing about the game changes; each candidate is tried on a copy of the board.
    pub fn valid_moves(&self, position: Position) -> MoveGen {
        MoveGen::new_legal(&self.board, position)
    }

    /// The squares the piece on `position` may legally move to, for highlighting.  A pawn that
    /// can promote lists its destination once.
    pub fn legal_destinations(&self, position: Position) -> Vec<Position> {
        let mut dests: Vec<Position> = self.valid_moves(position).map(|m| m.get_end()).collect();
        dests.sort();
        dests.dedup();
        dests
    }

    /// Is `color`'s king attacked right now?  A side without a king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.board.king_position(color) {
            Some(king) => MoveGen::is_attacked(&self.board, king, !color),
            None => false,
        }
    }

    /// Classify the position from `color`'s point of view without touching the game.
    ///
    /// ```
    /// use chess_game::{BoardStatus, Color, Game};
    ///
    /// let game = Game::new();
    /// assert_eq!(game.status(Color::White), BoardStatus::Ongoing);
    /// ```
    pub fn status(&self, color: Color) -> BoardStatus {
        let in_check = self.is_in_check(color);
        let can_move = MoveGen::has_legal_move(&self.board, color);
        match (in_check, can_move) {
            (true, true) => BoardStatus::Check,
            (true, false) => BoardStatus::Checkmate,
            (false, true) => BoardStatus::Ongoing,
            (false, false) => BoardStatus::Stalemate,
        }
    }

    /// Is `color` checkmated?  If so, the game is over from this call on.
    pub fn is_in_checkmate(&mut self, color: Color) -> bool {
        let mated = self.status(color) == BoardStatus::Checkmate;
        if mated {
            self.finish(GameResult::Checkmate { winner: !color });
        }
        mated
    }

    /// Is `color` stalemated?  If so, the game is over from this call on.
    pub fn is_in_stalemate(&mut self, color: Color) -> bool {
        let stalemated = self.status(color) == BoardStatus::Stalemate;
        if stalemated {
            self.finish(GameResult::Stalemate);
        }
        stalemated
    }

    /// Play a move for the side to move.
    ///
    /// The move is rejected if the game is over, the start square is empty, the piece there
    /// belongs to the other side, or the move is not one of that piece's legal moves.  A
    /// rejected move leaves the game exactly as it was.
    pub fn make_move(&mut self, chess_move: ChessMove) -> Result<(), Error> {
        if let Err(reason) = self.check_move(chess_move) {
            log::debug!("rejected {}: {}", chess_move, reason);
            return Err(Error::InvalidMove { chess_move, reason });
        }

        self.board.apply(chess_move);
        self.side_to_move = !self.side_to_move;
        log::debug!("played {}, {} to move", chess_move, self.side_to_move);
        Ok(())
    }

    fn check_move(&self, chess_move: ChessMove) -> Result<(), InvalidMoveReason> {
        if self.game_over {
            return Err(InvalidMoveReason::GameOver);
        }

        let piece = self
            .board
            .piece_at(chess_move.get_start())
            .ok_or(InvalidMoveReason::EmptySquare)?;

        if piece.color() != self.side_to_move {
            return Err(InvalidMoveReason::WrongTurn);
        }

        if !self.valid_moves(chess_move.get_start()).any(|m| m == chess_move) {
            return Err(InvalidMoveReason::Illegal);
        }

        Ok(())
    }

    /// Play a move, then report where the side now to move stands.
    ///
    /// Checkmate and stalemate end the game inside this call, so whoever drives the game
    /// cannot forget to.
    ///
    /// ```
    /// use chess_game::{BoardStatus, ChessMove, Game};
    /// use std::str::FromStr;
    ///
    /// let mut game = Game::new();
    /// for m in ["f2f3", "e7e5", "g2g4"] {
    ///     assert_eq!(game.play(ChessMove::from_str(m).unwrap()).unwrap(), BoardStatus::Ongoing);
    /// }
    /// let status = game.play(ChessMove::from_str("d8h4").unwrap()).unwrap();
    /// assert_eq!(status, BoardStatus::Checkmate);
    /// assert!(game.is_game_over());
    /// ```
    pub fn play(&mut self, chess_move: ChessMove) -> Result<BoardStatus, Error> {
        self.make_move(chess_move)?;

        let status = self.status(self.side_to_move);
        match status {
            BoardStatus::Checkmate => self.finish(GameResult::Checkmate {
                winner: !self.side_to_move,
            }),
            BoardStatus::Stalemate => self.finish(GameResult::Stalemate),
            BoardStatus::Ongoing | BoardStatus::Check => {}
        }
        Ok(status)
    }

    /// End the game by resignation, whoever's turn it is.
    pub fn resign(&mut self) {
        self.finish(GameResult::Resignation {
            side: self.side_to_move,
        });
    }

    /// Mark the game over.  The first recorded result sticks.
    fn finish(&mut self, result: GameResult) {
        if self.result.is_none() {
            log::info!("game over: {:?}", result);
            self.result = Some(result);
        }
        self.game_over = true;
    }

    /// Does the board have exactly one king of each color?
    pub(crate) fn has_both_kings(board: &Board) -> bool {
        ALL_COLORS.iter().all(|c| board.king_count(*c) == 1)
    }
}

impl TryFrom<&BoardBuilder> for Game {
    type Error = Error;

    fn try_from(fen: &BoardBuilder) -> Result<Self, Self::Error> {
        let board = fen.get_board();
        if Game::has_both_kings(&board) {
            Ok(Game::new_with_board(board, fen.get_side_to_move()))
        } else {
            Err(Error::InvalidBoard)
        }
    }
}

impl TryFrom<&mut BoardBuilder> for Game {
    type Error = Error;

    fn try_from(fen: &mut BoardBuilder) -> Result<Self, Self::Error> {
        (&*fen).try_into()
    }
}

impl TryFrom<BoardBuilder> for Game {
    type Error = Error;

    fn try_from(fen: BoardBuilder) -> Result<Self, Self::Error> {
        (&fen).try_into()
    }
}

impl FromStr for Game {
    type Err = Error;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        BoardBuilder::from_str(fen)?.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Piece, PieceType};

    fn mv(text: &str) -> ChessMove {
        ChessMove::from_str(text).unwrap()
    }

    fn sq(text: &str) -> Position {
        Position::from_str(text).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Color::White);
        assert!(!game.is_game_over());
        assert_eq!(game.result(), None);
        assert_eq!(*game.board(), Board::default());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        game.make_move(mv("g1f3")).unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        game.make_move(mv("g8f6")).unwrap();
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn test_rejections_carry_reasons() {
        let mut game = Game::new();

        let err = game.make_move(mv("e4e5")).unwrap_err();
        assert_eq!(err.invalid_move_reason(), Some(InvalidMoveReason::EmptySquare));

        let err = game.make_move(mv("e7e5")).unwrap_err();
        assert_eq!(err.invalid_move_reason(), Some(InvalidMoveReason::WrongTurn));

        let err = game.make_move(mv("e2e5")).unwrap_err();
        assert_eq!(err.invalid_move_reason(), Some(InvalidMoveReason::Illegal));

        game.resign();
        let err = game.make_move(mv("e2e4")).unwrap_err();
        assert_eq!(err.invalid_move_reason(), Some(InvalidMoveReason::GameOver));

        assert_eq!(*game.board(), Board::default());
    }

    #[test]
    fn test_promotion_must_be_named() {
        let mut game = Game::from_str("7k/P7/8/8/8/8/8/K7 w").unwrap();
        let err = game.make_move(mv("a7a8")).unwrap_err();
        assert_eq!(err.invalid_move_reason(), Some(InvalidMoveReason::Illegal));

        game.make_move(mv("a7a8r")).unwrap();
        assert_eq!(
            game.board().piece_at(sq("a8")),
            Some(Piece::new(Color::White, PieceType::Rook))
        );
        assert_eq!(game.board().piece_at(sq("a7")), None);
    }

    #[test]
    fn test_legal_destinations_dedups_promotions() {
        let game = Game::from_str("7k/P7/8/8/8/8/8/K7 w").unwrap();
        assert_eq!(game.valid_moves(sq("a7")).len(), 4);
        assert_eq!(game.legal_destinations(sq("a7")), vec![sq("a8")]);
    }

    #[test]
    fn test_resign_is_sticky() {
        let mut game = Game::new();
        game.resign();
        assert!(game.is_game_over());
        assert_eq!(
            game.result(),
            Some(GameResult::Resignation { side: Color::White })
        );

        // a later resignation does not rewrite history
        game.resign();
        assert_eq!(
            game.result(),
            Some(GameResult::Resignation { side: Color::White })
        );
    }

    #[test]
    fn test_check_is_not_mate() {
        // black rook gives check along the first row, the white king can step up
        let mut game = Game::from_str("4k3/8/8/8/8/8/8/r3K3 w").unwrap();
        assert!(game.is_in_check(Color::White));
        assert_eq!(game.status(Color::White), BoardStatus::Check);
        assert!(!game.is_in_checkmate(Color::White));
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_play_reports_check() {
        let mut game = Game::from_str("4k3/8/8/8/8/8/8/R3K3 w").unwrap();
        assert_eq!(game.play(mv("a1a8")).unwrap(), BoardStatus::Check);
        assert!(!game.is_game_over());
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn test_play_ends_game_on_stalemate() {
        // white queen to c7 leaves the a8 king without a move
        let mut game = Game::from_str("k7/8/1K6/8/8/8/8/2Q5 w").unwrap();
        assert_eq!(game.play(mv("c1c7")).unwrap(), BoardStatus::Stalemate);
        assert!(game.is_game_over());
        assert_eq!(game.result(), Some(GameResult::Stalemate));
    }
}
