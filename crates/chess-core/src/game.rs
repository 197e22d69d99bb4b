//! Builds one annotated game: start record, opening replay, then heuristic
//! continuation until the move cap or the end of the game.

use shakmaty::{Color, Move};
use tracing::debug;

use crate::annotator::annotate;
use crate::error::GameError;
use crate::game_data::{side_name, GameResult, Level, MoveRecord, Transcript, START_PLACEHOLDER};
use crate::openings::{self, OpeningLine, OPENINGS};
use crate::rng::TutorRng;
use crate::rules::GameBoard;
use crate::scorer::pick_move;

pub const DEFAULT_MAX_MOVES: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    pub level: Level,
    /// Cap on played moves, start record excluded.
    pub max_moves: usize,
    /// Force a catalog line instead of drawing one at random.
    pub opening: Option<String>,
    /// Fix the randomness source; a fresh seed is drawn otherwise.
    pub seed: Option<u64>,
}

impl GameOptions {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            max_moves: DEFAULT_MAX_MOVES,
            opening: None,
            seed: None,
        }
    }
}

/// Generate one complete transcript.
pub fn generate_game(options: &GameOptions) -> Result<Transcript, GameError> {
    let mut rng = match options.seed {
        Some(seed) => TutorRng::new(seed),
        None => TutorRng::from_entropy(),
    };

    let line = match options.opening.as_deref() {
        Some(name) => openings::line_for(name)
            .ok_or_else(|| GameError::UnknownOpening(name.to_string()))?,
        None => rng
            .choose(OPENINGS)
            .ok_or_else(|| GameError::UnknownOpening("<empty catalog>".to_string()))?,
    };

    play_line(line, options.level, options.max_moves, rng)
}

/// Play a game that opens with `line`.
pub fn play_line(
    line: &OpeningLine,
    level: Level,
    max_moves: usize,
    rng: TutorRng,
) -> Result<Transcript, GameError> {
    debug!(opening = line.name, level = level.number(), seed = rng.seed(), "Generating game");

    let mut game = TutorGame::new(line, level, max_moves, rng);
    game.replay_opening(line)?;
    game.continue_play();
    Ok(game.finish(line))
}

/// Owns the live position for one transcript build; dropped afterwards.
struct TutorGame {
    board: GameBoard,
    level: Level,
    max_moves: usize,
    rng: TutorRng,
    records: Vec<MoveRecord>,
}

impl TutorGame {
    fn new(line: &OpeningLine, level: Level, max_moves: usize, rng: TutorRng) -> Self {
        let board = GameBoard::new();
        let start = MoveRecord {
            move_san: START_PLACEHOLDER.to_string(),
            move_uci: START_PLACEHOLDER.to_string(),
            fen: board.fen(),
            turn: side_name(Color::White).to_string(),
            move_number: 0,
            comment: format!(
                "Position de depart. Ouverture : {}.",
                openings::display_name(line.name)
            ),
            incident: None,
            alternative: None,
        };

        Self {
            board,
            level,
            max_moves,
            rng,
            records: vec![start],
        }
    }

    fn played(&self) -> usize {
        self.records.len() - 1
    }

    fn at_cap(&self) -> bool {
        self.played() >= self.max_moves
    }

    /// Annotate, render and play `m`, then append its record.
    fn record(&mut self, m: Move) {
        let note = annotate(&self.board, m, self.level, &mut self.rng);
        let turn = side_name(self.board.turn());
        let san = self.board.san(m);
        let uci = self.board.uci(m);

        self.board.apply(m);

        self.records.push(MoveRecord {
            move_san: san,
            move_uci: uci,
            fen: self.board.fen(),
            turn: turn.to_string(),
            move_number: self.board.fullmoves(),
            comment: note.comment,
            incident: note.incident,
            alternative: note.alternative,
        });
    }

    /// Replay the line until its end or its first illegal move; the rest of
    /// the line is dropped at that point.
    fn replay_opening(&mut self, line: &OpeningLine) -> Result<(), GameError> {
        for (ply, uci) in line.moves.iter().enumerate() {
            if self.at_cap() {
                break;
            }
            match self.board.resolve_uci(uci)? {
                Some(m) => self.record(m),
                None => {
                    debug!(opening = line.name, ply, uci, "Opening move illegal, leaving book");
                    break;
                }
            }
        }
        Ok(())
    }

    fn continue_play(&mut self) {
        while !self.at_cap() && !self.board.is_game_over() {
            match pick_move(&self.board, self.level, &mut self.rng) {
                Some(m) => self.record(m),
                None => break,
            }
        }
    }

    fn result(&self) -> GameResult {
        if self.board.is_checkmate() {
            match self.board.turn() {
                Color::Black => GameResult::WhiteWins,
                Color::White => GameResult::BlackWins,
            }
        } else if self.board.is_game_over() {
            GameResult::Draw
        } else {
            GameResult::Unfinished
        }
    }

    fn finish(self, line: &OpeningLine) -> Transcript {
        let result = self.result();
        debug!(moves = self.played(), result = result.as_str(), "Game finished");

        Transcript {
            result,
            level: self.level,
            opening: line.name.to_string(),
            seed: self.rng.seed(),
            moves: self.records,
        }
    }
}
