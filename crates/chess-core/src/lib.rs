//! Annotated teaching-game generator.
//!
//! Picks an opening from the catalog, replays it, then lets a light heuristic
//! continue the game, attaching a French comment to every move. All chess
//! rules come from shakmaty through [`rules::GameBoard`].

pub mod annotator;
pub mod error;
pub mod game;
pub mod game_data;
pub mod openings;
pub mod rng;
pub mod rules;
pub mod scorer;

pub use error::GameError;
pub use game::{generate_game, play_line, GameOptions, DEFAULT_MAX_MOVES};
pub use game_data::{GameResult, Level, MoveRecord, Transcript};
pub use rng::TutorRng;
