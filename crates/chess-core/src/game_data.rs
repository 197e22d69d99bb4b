use serde::{Deserialize, Serialize};
use shakmaty::Color;

use crate::error::GameError;

/// Placeholder notation for the synthetic start record.
pub const START_PLACEHOLDER: &str = "--";

/// Difficulty level. Serialized as its number (1, 2 or 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum Level {
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn number(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i64> for Level {
    type Error = GameError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::Beginner),
            2 => Ok(Level::Intermediate),
            3 => Ok(Level::Advanced),
            other => Err(GameError::InvalidLevel(other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.number()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    #[serde(rename = "1-0")]
    WhiteWins,
    #[serde(rename = "0-1")]
    BlackWins,
    #[serde(rename = "1/2-1/2")]
    Draw,
    /// Move cap reached before the game ended.
    #[serde(rename = "*")]
    Unfinished,
}

impl GameResult {
    pub fn as_str(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Unfinished => "*",
        }
    }
}

/// One annotated move of a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub move_san: String,
    pub move_uci: String,
    pub fen: String, // position after the move
    pub turn: String, // side that played the move
    pub move_number: u32,
    pub comment: String,
    pub incident: Option<String>,
    pub alternative: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub moves: Vec<MoveRecord>,
    pub level: Level,
    pub result: GameResult,
    pub opening: String,
    pub seed: u64,
}

impl Transcript {
    /// Records after the synthetic start record.
    pub fn played(&self) -> &[MoveRecord] {
        self.moves.get(1..).unwrap_or(&[])
    }
}

/// French side name as shown to students.
pub fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "Blancs",
        Color::Black => "Noirs",
    }
}
