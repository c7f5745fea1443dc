use crate::board::Board;
use crate::color::Color;
use crate::error::Error;
use crate::game::{Game, GameResult};
use serde::{Deserialize, Serialize};

/// Everything needed to put a `Game` back exactly as it was.
///
/// Storage keys snapshots by its own game id; the engine never sees it.
///
/// ```
/// use chess_game::{ChessMove, Game};
/// use std::str::FromStr;
///
/// # fn main() -> Result<(), chess_game::Error> {
/// let mut game = Game::new();
/// game.make_move(ChessMove::from_str("e2e4")?)?;
///
/// let json = game.to_json()?;
/// assert_eq!(Game::from_json(&json)?, game);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub side_to_move: Color,
    pub game_over: bool,
    #[serde(default)]
    pub result: Option<GameResult>,
}

impl GameSnapshot {
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<GameSnapshot, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        GameSnapshot {
            board: *game.board(),
            side_to_move: game.side_to_move(),
            game_over: game.is_game_over(),
            result: game.result(),
        }
    }
}

impl TryFrom<GameSnapshot> for Game {
    type Error = Error;

    /// A game still in progress must have exactly one king per side.  A finished game is
    /// restored as stored.
    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let in_progress = !snapshot.game_over;
        if in_progress && (snapshot.result.is_some() || !Game::has_both_kings(&snapshot.board)) {
            return Err(Error::InvalidBoard);
        }

        Ok(Game::from_parts(
            snapshot.board,
            snapshot.side_to_move,
            snapshot.game_over,
            snapshot.result,
        ))
    }
}

impl Game {
    /// Capture this game for storage.
    pub fn snapshot(&self) -> GameSnapshot {
        self.into()
    }

    /// Rebuild a game from storage.
    pub fn restore(snapshot: GameSnapshot) -> Result<Game, Error> {
        snapshot.try_into()
    }

    pub fn to_json(&self) -> Result<String, Error> {
        self.snapshot().to_json()
    }

    pub fn from_json(json: &str) -> Result<Game, Error> {
        Game::restore(GameSnapshot::from_json(json)?)
    }
}
